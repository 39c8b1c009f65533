//! Scorer configuration and validation.
//!
//! # Invariants
//! - Every field has a default, so `{}` decodes to [`ScorerConfig::default`].
//! - Unknown fields are rejected at decode time.
//! - `ngram_size` is within `1..=MAX_NGRAM_SIZE` once validated.

use crate::similarity::DEFAULT_NGRAM_SIZE;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Largest accepted n-gram length.
pub const MAX_NGRAM_SIZE: usize = 64;

/// Tunables for expression comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    /// Length of the character n-grams used as fingerprint units.
    pub ngram_size: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl ScorerConfig {
    /// Creates a config with an explicit n-gram length.
    pub fn with_ngram_size(ngram_size: usize) -> Self {
        Self { ngram_size }
    }

    /// Validates declaration-level config invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ngram_size == 0 {
            return Err(ConfigError::ZeroNgramSize);
        }
        if self.ngram_size > MAX_NGRAM_SIZE {
            return Err(ConfigError::NgramSizeTooLarge {
                value: self.ngram_size,
                max: MAX_NGRAM_SIZE,
            });
        }
        Ok(())
    }
}

/// Scorer configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroNgramSize,
    NgramSizeTooLarge { value: usize, max: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroNgramSize => write!(f, "ngram_size must be at least 1"),
            Self::NgramSizeTooLarge { value, max } => {
                write!(f, "ngram_size {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ScorerConfig, MAX_NGRAM_SIZE};

    #[test]
    fn default_config_is_valid() {
        let config = ScorerConfig::default();
        assert_eq!(config.ngram_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_ngram_size() {
        let err = ScorerConfig::with_ngram_size(0)
            .validate()
            .expect_err("zero ngram size should be rejected");
        assert_eq!(err, ConfigError::ZeroNgramSize);
    }

    #[test]
    fn rejects_oversized_ngram_size() {
        let err = ScorerConfig::with_ngram_size(MAX_NGRAM_SIZE + 1)
            .validate()
            .expect_err("oversized ngram size should be rejected");
        assert!(matches!(err, ConfigError::NgramSizeTooLarge { .. }));
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn accepts_bounds() {
        assert!(ScorerConfig::with_ngram_size(1).validate().is_ok());
        assert!(ScorerConfig::with_ngram_size(MAX_NGRAM_SIZE).validate().is_ok());
    }
}
