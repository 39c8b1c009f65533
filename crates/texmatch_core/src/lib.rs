//! Core scoring logic for TexMatch.
//! Compares LaTeX expressions by normalized n-gram overlap.

pub mod config;
pub mod logging;
pub mod normalize;
pub mod service;
pub mod similarity;

pub use config::{ConfigError, ScorerConfig, MAX_NGRAM_SIZE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use normalize::{normalize_latex, normalize_latex_opt};
pub use service::match_service::{
    score_expressions, ExpressionMatcher, RankedCandidate, SimilarityReport,
};
pub use similarity::{
    generate_default_ngrams, generate_ngrams, jaccard_similarity, NgramSet, DEFAULT_NGRAM_SIZE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
