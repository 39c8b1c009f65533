//! Ordered rewrite rules applied by [`crate::normalize::normalize_latex`].
//!
//! # Invariants
//! - Rules run in table order; later rules assume earlier ones already ran.
//! - Every rule is total: unmatched input passes through unchanged.
//! - Group-command rules repeat until stable. Each rewrite consumes a command
//!   token or an opening brace, so the repetition terminates.
//! - Braced operands are matched by balance, so `{\sqrt{2}}` is one operand.

use once_cell::sync::Lazy;
use regex::Regex;

static COSMETIC_COMMAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(?:left|right|mathrm)").expect("valid cosmetic command regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One named step of the normalization pipeline.
#[derive(Clone, Copy)]
pub struct NormalizationRule {
    /// Stable rule identifier, used in diagnostics and tests.
    pub name: &'static str,
    apply: fn(&str) -> String,
}

impl NormalizationRule {
    /// Applies this rule to `input`.
    pub fn apply(&self, input: &str) -> String {
        (self.apply)(input)
    }
}

impl std::fmt::Debug for NormalizationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizationRule")
            .field("name", &self.name)
            .finish()
    }
}

/// Normalization pipeline in execution order.
pub static NORMALIZATION_RULES: &[NormalizationRule] = &[
    NormalizationRule {
        name: "trim_trailing_equals",
        apply: trim_trailing_equals,
    },
    NormalizationRule {
        name: "collapse_backslashes",
        apply: collapse_backslashes,
    },
    NormalizationRule {
        name: "strip_cosmetic_commands",
        apply: strip_cosmetic_commands,
    },
    NormalizationRule {
        name: "rewrite_fractions",
        apply: rewrite_fractions,
    },
    NormalizationRule {
        name: "rewrite_square_roots",
        apply: rewrite_square_roots,
    },
    NormalizationRule {
        name: "rewrite_times",
        apply: rewrite_times,
    },
    NormalizationRule {
        name: "rewrite_superscript_groups",
        apply: rewrite_superscript_groups,
    },
    NormalizationRule {
        name: "strip_braces",
        apply: strip_braces,
    },
    NormalizationRule {
        name: "strip_whitespace",
        apply: strip_whitespace,
    },
];

/// Returns rule names in execution order.
pub fn rule_names() -> Vec<&'static str> {
    NORMALIZATION_RULES.iter().map(|rule| rule.name).collect()
}

/// A command token followed by a fixed number of operands.
struct GroupCommand {
    token: &'static str,
    arity: usize,
    /// Whether a single character may stand in for a `{...}` operand.
    allow_bare: bool,
    render: fn(&[&str]) -> String,
}

const FRACTION: GroupCommand = GroupCommand {
    token: r"\frac",
    arity: 2,
    allow_bare: true,
    render: render_fraction,
};

const SQUARE_ROOT: GroupCommand = GroupCommand {
    token: r"\sqrt",
    arity: 1,
    allow_bare: true,
    render: render_square_root,
};

// Bare exponents (`x^2`) are deliberately not matched.
const SUPERSCRIPT_GROUP: GroupCommand = GroupCommand {
    token: "^",
    arity: 1,
    allow_bare: false,
    render: render_superscript_group,
};

fn render_fraction(operands: &[&str]) -> String {
    format!("({})/({})", operands[0], operands[1])
}

fn render_square_root(operands: &[&str]) -> String {
    format!("sqrt({})", operands[0])
}

fn render_superscript_group(operands: &[&str]) -> String {
    format!("^({})", operands[0])
}

fn trim_trailing_equals(input: &str) -> String {
    let trimmed = input.trim();
    trimmed.strip_suffix('=').unwrap_or(trimmed).to_string()
}

fn collapse_backslashes(input: &str) -> String {
    let mut collapsed = input.to_string();
    while collapsed.contains(r"\\") {
        collapsed = collapsed.replace(r"\\", r"\");
    }
    collapsed
}

fn strip_cosmetic_commands(input: &str) -> String {
    COSMETIC_COMMAND_RE.replace_all(input, "").into_owned()
}

fn rewrite_fractions(input: &str) -> String {
    rewrite_until_stable(input, &FRACTION)
}

fn rewrite_square_roots(input: &str) -> String {
    rewrite_until_stable(input, &SQUARE_ROOT)
}

fn rewrite_times(input: &str) -> String {
    input.replace(r"\times", "*")
}

fn rewrite_superscript_groups(input: &str) -> String {
    rewrite_until_stable(input, &SUPERSCRIPT_GROUP)
}

fn strip_braces(input: &str) -> String {
    input.replace(['{', '}'], "")
}

fn strip_whitespace(input: &str) -> String {
    WHITESPACE_RE.replace_all(input, "").into_owned()
}

fn rewrite_until_stable(input: &str, command: &GroupCommand) -> String {
    let mut current = input.to_string();
    loop {
        let next = rewrite_once(&current, command);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Rewrites every outermost occurrence of `command` in one left-to-right scan.
///
/// Operands are copied verbatim; commands nested inside them are handled by
/// the next scan.
fn rewrite_once(input: &str, command: &GroupCommand) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(command.token) {
        output.push_str(&rest[..start]);
        let after_token = &rest[start + command.token.len()..];
        match take_operands(after_token, command) {
            Some((operands, remainder)) => {
                output.push_str(&(command.render)(&operands));
                rest = remainder;
            }
            None => {
                output.push_str(command.token);
                rest = after_token;
            }
        }
    }

    output.push_str(rest);
    output
}

fn take_operands<'a>(
    mut input: &'a str,
    command: &GroupCommand,
) -> Option<(Vec<&'a str>, &'a str)> {
    let mut operands = Vec::with_capacity(command.arity);
    for _ in 0..command.arity {
        let (operand, remainder) = take_operand(input, command.allow_bare)?;
        operands.push(operand);
        input = remainder;
    }
    Some((operands, input))
}

/// Takes one operand after optional whitespace: a balanced `{...}` group or,
/// when allowed, a single plain character.
fn take_operand(input: &str, allow_bare: bool) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.starts_with('{') {
        return take_brace_group(input);
    }
    if !allow_bare {
        return None;
    }

    let first = input.chars().next()?;
    if matches!(first, '}' | '\\' | '[') {
        return None;
    }
    Some(input.split_at(first.len_utf8()))
}

/// Splits a leading balanced `{...}` group off `input`.
///
/// Returns the group content without its outer braces and the remainder
/// after the closing brace, or `None` when the group never closes.
fn take_brace_group(input: &str) -> Option<(&str, &str)> {
    let body = input.strip_prefix('{')?;
    let mut depth = 1usize;
    for (offset, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&body[..offset], &body[offset + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}
