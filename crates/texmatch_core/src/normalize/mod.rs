//! LaTeX expression normalization.
//!
//! # Responsibility
//! - Reduce raw LaTeX into a compact canonical string for fuzzy comparison.
//! - Unify equivalent notations (`\frac`, `\sqrt`, `\times`, `^{...}`).
//!
//! # Invariants
//! - Normalization is pure and never fails; malformed input degrades
//!   gracefully instead of erroring.
//! - Output contains no `{`, `}` or whitespace.
//! - Commands without a rule (e.g. `\alpha`) are kept verbatim.
//! - Only brace-grouped exponents are rewritten: `x^{2}` becomes `x^(2)`
//!   while `x^2` stays `x^2`, so the two forms do not normalize equal.

mod rules;

pub use rules::{rule_names, NormalizationRule, NORMALIZATION_RULES};

/// Normalizes a raw LaTeX expression.
///
/// Returns an empty string for empty input.
pub fn normalize_latex(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    NORMALIZATION_RULES
        .iter()
        .fold(raw.to_string(), |current, rule| rule.apply(&current))
}

/// Normalizes an optional expression; `None` yields an empty string.
pub fn normalize_latex_opt(raw: Option<&str>) -> String {
    raw.map(normalize_latex).unwrap_or_default()
}
