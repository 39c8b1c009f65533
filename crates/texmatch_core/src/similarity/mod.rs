//! Fuzzy fingerprinting and set-overlap scoring.
//!
//! # Responsibility
//! - Slice normalized expressions into character n-gram sets.
//! - Score two n-gram sets with the Jaccard index.
//!
//! # Invariants
//! - Scores are always within `[0.0, 1.0]`.
//! - Two empty fingerprints score `1.0`.

mod jaccard;
mod ngram;

pub use jaccard::jaccard_similarity;
pub use ngram::{generate_default_ngrams, generate_ngrams, NgramSet, DEFAULT_NGRAM_SIZE};
