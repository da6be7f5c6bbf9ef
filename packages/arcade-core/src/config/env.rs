use std::env;

use crate::errors::GameError;

/// Environment variable holding an optional RNG seed.
pub const RNG_SEED_VAR: &str = "ARCADE_RNG_SEED";

/// Read the RNG seed from the environment. Unset or blank means "no seed".
pub fn rng_seed_from_env() -> Result<Option<u64>, GameError> {
    match env::var(RNG_SEED_VAR) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw.trim().parse::<u64>().map(Some).map_err(|_| {
            GameError::config(format!("{RNG_SEED_VAR} must be an unsigned integer, got '{raw}'"))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(GameError::config(format!(
            "{RNG_SEED_VAR} is not valid unicode"
        ))),
    }
}
