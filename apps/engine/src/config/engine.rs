//! Engine configuration from the environment.
//!
//! | Variable            | Default | Meaning                                   |
//! |---------------------|---------|-------------------------------------------|
//! | `TURN_TIMEOUT_SECS` | `45`    | Seconds a player may take before fallback |
//! | `GAME_RNG_SEED`     | unset   | Fixed seed for deterministic dealing      |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_TURN_TIMEOUT_SECS: u64 = 45;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long the player on turn may take before a random legal card is
    /// played for them.
    pub turn_timeout: Duration,
    /// Seed for the registry RNG. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_timeout: Duration::from_secs(DEFAULT_TURN_TIMEOUT_SECS),
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secs = parse_var::<u64, _>(&lookup, "TURN_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TURN_TIMEOUT_SECS);
        if secs == 0 {
            return Err(AppError::config(
                "TURN_TIMEOUT_SECS must be greater than zero",
            ));
        }

        Ok(Self {
            turn_timeout: Duration::from_secs(secs),
            rng_seed: parse_var(&lookup, "GAME_RNG_SEED")?,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = timeout;
        self
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AppError::config(format!("Invalid value for '{name}': {raw:?}"))
        }),
    }
}
