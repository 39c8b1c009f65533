use std::collections::HashSet;

/// Default n-gram length used when callers do not pick one.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Deduplicated set of n-grams extracted from one expression.
pub type NgramSet = HashSet<String>;

/// Builds the set of contiguous `n`-character substrings of `text`.
///
/// Lengths are counted in `char`s, so multi-byte input is never split.
///
/// - Empty `text` yields an empty set.
/// - `text` shorter than `n` yields `{text}`.
/// - `n == 0` yields an empty set.
pub fn generate_ngrams(text: &str, n: usize) -> NgramSet {
    if text.is_empty() || n == 0 {
        return NgramSet::new();
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() < n {
        return NgramSet::from([text.to_string()]);
    }

    chars
        .windows(n)
        .map(|window| window.iter().collect::<String>())
        .collect()
}

/// Same as [`generate_ngrams`] with [`DEFAULT_NGRAM_SIZE`].
pub fn generate_default_ngrams(text: &str) -> NgramSet {
    generate_ngrams(text, DEFAULT_NGRAM_SIZE)
}

#[cfg(test)]
mod tests {
    use super::{generate_default_ngrams, generate_ngrams, NgramSet};

    #[test]
    fn repeated_windows_count_once() {
        let ngrams = generate_ngrams("aaaa", 2);
        assert_eq!(ngrams, NgramSet::from(["aa".to_string()]));
    }

    #[test]
    fn multibyte_text_is_windowed_by_char() {
        let ngrams = generate_ngrams("αβγδ", 3);
        assert_eq!(
            ngrams,
            NgramSet::from(["αβγ".to_string(), "βγδ".to_string()])
        );
    }

    #[test]
    fn exact_length_text_yields_itself() {
        assert_eq!(
            generate_default_ngrams("abc"),
            NgramSet::from(["abc".to_string()])
        );
    }

    #[test]
    fn zero_size_yields_empty_set() {
        assert!(generate_ngrams("abc", 0).is_empty());
    }
}
