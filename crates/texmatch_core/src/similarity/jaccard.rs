use super::ngram::NgramSet;

/// Returns `|a ∩ b| / |a ∪ b|`.
///
/// Two empty sets are treated as identical and score `1.0`.
pub fn jaccard_similarity(a: &NgramSet, b: &NgramSet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 1.0;
    }

    intersection as f64 / union as f64
}
