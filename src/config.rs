//! Runtime configuration from environment variables.
//!
//! - `TETRIS_RESERVE_SEED`: piece generator seed (default: derived from the clock)
//! - `TETRIS_RESERVE_LOG_PATH`: append a JSON-lines action journal to this file

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("TETRIS_RESERVE_SEED").ok().as_deref(),
            env::var("TETRIS_RESERVE_LOG_PATH").ok().as_deref(),
        )
    }

    /// Build from raw variable values; unparsable or blank values fall back
    /// to the defaults.
    pub fn from_vars(seed: Option<&str>, log_path: Option<&str>) -> Self {
        Self::from_vars_with(seed, log_path, clock_seed)
    }

    /// Like [`Config::from_vars`], with `fallback_seed` called only when the
    /// seed is missing or unparsable.
    pub fn from_vars_with(
        seed: Option<&str>,
        log_path: Option<&str>,
        fallback_seed: impl FnOnce() -> u32,
    ) -> Self {
        let seed = seed
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(fallback_seed);

        let log_path = log_path
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self { seed, log_path }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
