//! Expression comparison service.
//!
//! # Responsibility
//! - Compare two raw expressions end to end and report the evidence.
//! - Rank candidate expressions against one reference.
//!
//! # Invariants
//! - Comparison is stateless; the matcher only holds immutable config.
//! - Log events carry metadata only, never expression text.

use crate::config::{ConfigError, ScorerConfig};
use crate::normalize::normalize_latex;
use crate::similarity::{generate_ngrams, jaccard_similarity};
use log::debug;
use serde::Serialize;

/// Outcome of comparing two expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Normalized form of the left input.
    pub left_normalized: String,
    /// Normalized form of the right input.
    pub right_normalized: String,
    /// n-gram length used for fingerprinting.
    pub ngram_size: usize,
    /// Jaccard score in `[0.0, 1.0]`.
    pub score: f64,
}

impl SimilarityReport {
    /// Returns whether `score` reaches a caller-chosen threshold.
    pub fn meets(&self, threshold: f64) -> bool {
        self.score >= threshold
    }

    /// Returns whether both sides normalized to the same string.
    pub fn is_exact(&self) -> bool {
        self.left_normalized == self.right_normalized
    }
}

/// One scored candidate returned by [`ExpressionMatcher::rank_candidates`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    /// Position of the candidate in the caller's input slice.
    pub index: usize,
    pub normalized: String,
    pub score: f64,
}

/// Stateless comparison pipeline: normalize, fingerprint, score.
#[derive(Debug, Clone, Default)]
pub struct ExpressionMatcher {
    config: ScorerConfig,
}

impl ExpressionMatcher {
    /// Creates a matcher without validating `config`.
    ///
    /// An `ngram_size` of zero makes every fingerprint empty, so every
    /// comparison scores `1.0`. Prefer [`Self::try_new`] for external config.
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Creates a matcher after validating `config`.
    pub fn try_new(config: ScorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Compares two raw LaTeX expressions.
    pub fn compare(&self, left: &str, right: &str) -> SimilarityReport {
        let ngram_size = self.config.ngram_size;
        let left_normalized = normalize_latex(left);
        let right_normalized = normalize_latex(right);
        let score = jaccard_similarity(
            &generate_ngrams(&left_normalized, ngram_size),
            &generate_ngrams(&right_normalized, ngram_size),
        );

        debug!(
            "event=expression_compared module=service status=ok ngram_size={} left_len={} right_len={} score={:.4}",
            ngram_size,
            left_normalized.chars().count(),
            right_normalized.chars().count(),
            score
        );

        SimilarityReport {
            left_normalized,
            right_normalized,
            ngram_size,
            score,
        }
    }

    /// Scores every candidate against `reference`, best match first.
    ///
    /// Ties keep input order.
    pub fn rank_candidates<S: AsRef<str>>(
        &self,
        reference: &str,
        candidates: &[S],
    ) -> Vec<RankedCandidate> {
        let ngram_size = self.config.ngram_size;
        let reference_ngrams = generate_ngrams(&normalize_latex(reference), ngram_size);

        let mut ranked = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let normalized = normalize_latex(candidate.as_ref());
                let score =
                    jaccard_similarity(&reference_ngrams, &generate_ngrams(&normalized, ngram_size));
                RankedCandidate {
                    index,
                    normalized,
                    score,
                }
            })
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            "event=candidates_ranked module=service status=ok ngram_size={} candidates={} best_score={:.4}",
            ngram_size,
            ranked.len(),
            ranked.first().map_or(0.0, |best| best.score)
        );

        ranked
    }
}

/// Scores two raw expressions with the default configuration.
pub fn score_expressions(left: &str, right: &str) -> f64 {
    ExpressionMatcher::default().compare(left, right).score
}

#[cfg(test)]
mod tests {
    use super::{score_expressions, ExpressionMatcher};
    use crate::config::{ConfigError, ScorerConfig};

    #[test]
    fn try_new_rejects_invalid_config() {
        let err = ExpressionMatcher::try_new(ScorerConfig::with_ngram_size(0))
            .expect_err("zero ngram size should be rejected");
        assert_eq!(err, ConfigError::ZeroNgramSize);
    }

    #[test]
    fn report_exposes_normalized_forms() {
        let report = ExpressionMatcher::default().compare(r"\frac{1}{2}", r"\frac12");
        assert_eq!(report.left_normalized, "(1)/(2)");
        assert!(report.is_exact());
        assert_eq!(report.ngram_size, 3);
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn meets_uses_inclusive_threshold() {
        let report = ExpressionMatcher::default().compare("abcd", "abce");
        assert!((report.score - 1.0 / 3.0).abs() < 1e-12);
        assert!(report.meets(report.score));
        assert!(!report.meets(0.5));
    }

    #[test]
    fn score_expressions_matches_default_matcher() {
        assert_eq!(score_expressions("x+1", "x+1="), 1.0);
        assert_eq!(score_expressions("abc", "xyz"), 0.0);
    }
}
