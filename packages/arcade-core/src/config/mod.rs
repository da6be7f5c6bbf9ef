//! Engine configuration: Whist rule knobs and environment lookups.

pub mod env;
pub mod rules;

pub use env::rng_seed_from_env;
pub use rules::{ShufflePlan, WhistRules};
