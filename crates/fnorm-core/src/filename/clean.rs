//! The `clean` transform: folds an arbitrary string into a safe name component.

use once_cell::sync::Lazy;
use regex::Regex;

use super::substitutions::Substitutions;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
// ASCII word class on purpose: letters missing from the substitution table fold to `_`.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-()]+").unwrap());
static UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{2,}").unwrap());
static HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());
static JUNCTIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"_-_|-_-|-_|_-").unwrap());

fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c| c == '_' || c == '-')
}

/// Normalizes `input` into a lowercase-agnostic, filesystem-safe name component.
///
/// - Trims whitespace, then leading/trailing `_` and `-`
/// - Applies `substitutions` in order (literal, non-overlapping)
/// - Folds whitespace runs and runs of anything outside `[A-Za-z0-9_()-]` to `_`
/// - Collapses repeated `_` / `-`, and `_-`, `-_`, `_-_`, `-_-` junctions to `-`
/// - Trims leading/trailing `_` and `-` again
///
/// Case is preserved; the result may be empty.
pub fn clean(input: &str, substitutions: &Substitutions) -> String {
    let trimmed = trim_separators(input.trim());
    let substituted = substitutions.apply(trimmed);

    let spaced = WHITESPACE.replace_all(&substituted, "_");
    let mut folded = DISALLOWED.replace_all(&spaced, "_").into_owned();

    // A single junction pass can leave `--` or `-_` behind (`a_-_-b` -> `a--b`),
    // so the separator folds run until nothing changes. Not a one-pass
    // replacement on purpose: the output must stay free of separator runs.
    loop {
        let next = UNDERSCORES.replace_all(&folded, "_");
        let next = HYPHENS.replace_all(&next, "-");
        let next = JUNCTIONS.replace_all(&next, "-").into_owned();
        if next == folded {
            break;
        }
        folded = next;
    }

    trim_separators(&folded).to_string()
}
