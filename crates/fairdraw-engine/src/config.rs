//! Engine configuration: where the RNG seeds come from.

use fairdraw_core::clock::Clock;
use thiserror::Error;

/// Environment variable holding explicit seeds: `"<u64>"` or `"<u64>,<u64>"`.
pub const SEED_ENV_VAR: &str = "FAIRDRAW_SEED";

/// Mixed into the clock-derived second seed word so the two words differ.
const SECOND_WORD_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration loading errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A seed value could not be parsed.
    #[error("invalid FAIRDRAW_SEED value {value:?}: {reason}")]
    InvalidSeed {
        /// The raw value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Seed words for the decision stream. The selection stream is seeded from
/// the decision stream's first output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPair(pub u64, pub u64);

impl SeedPair {
    /// Derives a seed pair from the clock's current nanosecond timestamp.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        let now = clock.now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        Self(nanos, nanos.rotate_left(32) ^ SECOND_WORD_GAMMA)
    }

    fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidSeed {
            value: raw.to_owned(),
            reason,
        };
        let word = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map_err(|e| invalid(format!("{part:?} is not a u64: {e}")))
        };

        let mut parts = raw.split(',');
        let first = word(parts.next().unwrap_or_default())?;
        let second = parts.next().map(word).transpose()?.unwrap_or(0);
        if parts.next().is_some() {
            return Err(invalid("expected at most two comma-separated seeds".to_owned()));
        }
        Ok(Self(first, second))
    }
}

/// Configuration for an evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Explicit seeds; `None` means derive them from the clock.
    pub seeds: Option<SeedPair>,
}

impl EngineConfig {
    /// Set explicit seeds for a reproducible stream.
    #[must_use]
    pub fn with_seeds(mut self, seed0: u64, seed1: u64) -> Self {
        self.seeds = Some(SeedPair(seed0, seed1));
        self
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSeed` if `FAIRDRAW_SEED` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps variable names to values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSeed` if the seed variable is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seeds = lookup(SEED_ENV_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| SeedPair::parse(&raw))
            .transpose()?;
        Ok(Self { seeds })
    }

    /// The configured seeds, or a pair derived from `clock`.
    #[must_use]
    pub fn resolve_seeds(&self, clock: &dyn Clock) -> SeedPair {
        self.seeds.unwrap_or_else(|| SeedPair::from_clock(clock))
    }
}
