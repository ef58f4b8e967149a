use std::{env, path::PathBuf, time::Duration};

use chrono::Utc;
use thiserror::Error;

/// Letters a round can be played with. Q, U, V, X, Y and Z are too hard.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPRSTW";
/// Number of prompts shown each round.
pub const PROMPTS_PER_ROUND: usize = 12;
/// Length of a round.
pub const ROUND_DURATION: Duration = Duration::from_secs(180);
/// How often the countdown line is redrawn.
pub const RESOLUTION: Duration = Duration::from_millis(100);
/// Printed before and after each round.
pub const SEPARATOR: &str = "===";
/// Where prompts are read from, relative to the working directory.
pub const DEFAULT_PROMPTS_PATH: &str = "scattergories.txt";

const PROMPTS_ENV: &str = "SCATTERGORIES_PROMPTS";
const SEED_ENV: &str = "SCATTERGORIES_SEED";

/// Failure modes when reading settings from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCATTERGORIES_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

/// Runtime settings for a session.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the newline-delimited prompts file.
    pub prompts_path: PathBuf,
    /// Whether `prompts_path` was chosen explicitly rather than defaulted.
    pub prompts_path_explicit: bool,
    /// Seed for shuffling letters and prompts.
    pub seed: u64,
    pub round_duration: Duration,
    pub resolution: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            prompts_path: PathBuf::from(DEFAULT_PROMPTS_PATH),
            prompts_path_explicit: false,
            seed: time_seed(),
            round_duration: ROUND_DURATION,
            resolution: RESOLUTION,
        }
    }
}

impl Settings {
    /// Build settings from the defaults, overridden by `SCATTERGORIES_PROMPTS`
    /// and `SCATTERGORIES_SEED` if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Settings::from_vars(env::var(PROMPTS_ENV).ok(), env::var(SEED_ENV).ok())
    }

    fn from_vars(prompts: Option<String>, seed: Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();
        if let Some(path) = prompts.filter(|p| !p.trim().is_empty()) {
            settings.prompts_path = PathBuf::from(path);
            settings.prompts_path_explicit = true;
        }
        if let Some(seed) = seed.filter(|s| !s.trim().is_empty()) {
            settings.seed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(seed))?;
        }
        Ok(settings)
    }
}

/// A seed derived from the current wall-clock time.
fn time_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}
