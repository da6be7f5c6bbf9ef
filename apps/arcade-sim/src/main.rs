//! Arcade simulator CLI: plays many games with random legal moves and
//! records the results, for exercising the engines end to end.

mod metrics;
mod output;
mod registry;
mod simulator;
mod types;

use std::time::Instant;

use arcade_core::{init_tracing, rng_seed_from_env};
use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::GameResult;
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "arcade-sim")]
#[command(about = "Play arcade games with random legal moves and record the results")]
struct Args {
    /// Game to play: tic-tac-toe, connect-four or whist
    #[arg(long, default_value = "tic-tac-toe")]
    game: String,

    /// Number of games to simulate
    #[arg(short = 'n', long, default_value = "1")]
    games: u32,

    /// Base seed; game N uses seed + N. Falls back to ARCADE_RNG_SEED, then entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the detailed output file
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing(filter, args.log_json);

    let factory = registry::by_name(&args.game).ok_or_else(|| {
        let known: Vec<&str> = registry::registered_games().iter().map(|f| f.name).collect();
        format!("Unknown game '{}', expected one of {}", args.game, known.join(", "))
    })?;

    let base_seed = match args.seed {
        Some(seed) => seed,
        None => rng_seed_from_env()?.unwrap_or_else(rand::random),
    };
    info!(game = factory.name, games = args.games, base_seed, "starting simulator");

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed = base_seed.wrapping_add(u64::from(game_num));

        match (factory.play)(seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    seed,
                    factory.name,
                    args.games,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(game_num, winner = ?result.winner, moves = result.moves_played, "game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, code = %e.code(), "game failed: {e}");
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(factory.name, &results, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    game: &str,
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ({game}) ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut first = 0u32;
    let mut second = 0u32;
    let mut draws = 0u32;
    let mut moves = 0u64;
    for result in results {
        match result.winner.map(|id| id.0) {
            Some(1) => first += 1,
            Some(_) => second += 1,
            None => draws += 1,
        }
        moves += u64::from(result.moves_played);
    }

    let n = results.len() as f64;
    println!("\n=== Results ===");
    println!("First player wins: {} ({:.1}%)", first, first as f64 / n * 100.0);
    println!("Second player wins: {} ({:.1}%)", second, second as f64 / n * 100.0);
    println!("Draws: {} ({:.1}%)", draws, draws as f64 / n * 100.0);
    println!("Average moves per game: {:.1}", moves as f64 / n);
}
