//! Qt format placeholders.
//!
//! Messages interpolate arguments through `%1`..`%99` markers, optionally
//! with an `L` flag for locale-aware number formatting (`%L1`), and numerus
//! messages additionally use `%n` / `%Ln` for the count. A `%` followed by
//! anything else is literal text. Markers a caller supplies no value for are
//! left in the text verbatim.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:(L?n)|L?([1-9][0-9]?))").expect("valid placeholder pattern"));

/// A placeholder occurrence in a message text.
///
/// The `L` flag does not distinguish placeholders: `%L1` fills the same
/// argument slot as `%1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// `%1`..`%99`, holding the 1-based argument index.
    Positional(u8),
    /// `%n`, replaced with the plural count.
    Count,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Positional(index) => write!(f, "%{}", index),
            Placeholder::Count => write!(f, "%n"),
        }
    }
}

/// All placeholders in order of appearance, duplicates kept.
///
/// Index markers are greedy: `%10` is argument 10, not argument 1 followed
/// by a literal `0`.
pub fn placeholders(text: &str) -> Vec<Placeholder> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            if caps.get(1).is_some() {
                Some(Placeholder::Count)
            } else {
                caps.get(2)?
                    .as_str()
                    .parse()
                    .ok()
                    .map(Placeholder::Positional)
            }
        })
        .collect()
}

/// The distinct placeholders of a text, ordered by argument index.
pub fn placeholder_set(text: &str) -> BTreeSet<Placeholder> {
    placeholders(text).into_iter().collect()
}

/// Replaces `%N` markers with the corresponding argument in a single pass,
/// so argument values containing markers are not substituted again.
/// Markers without a matching argument stay verbatim.
pub fn substitute_args(text: &str, args: &[String]) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &regex::Captures| {
            if let Some(digits) = caps.get(2)
                && let Ok(index) = digits.as_str().parse::<usize>()
                && index >= 1
                && let Some(arg) = args.get(index - 1)
            {
                return arg.clone();
            }
            caps[0].to_string()
        })
        .into_owned()
}

/// Replaces `%n` / `%Ln` markers with the count.
pub fn substitute_count(text: &str, n: u64) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &regex::Captures| {
            if caps.get(1).is_some() {
                n.to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
