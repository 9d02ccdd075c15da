//! Helper functions shared by rule implementations.
//!
//! This module provides shared utilities used by multiple rules:
//! - context skipping per the `ignoreContexts` configuration
//! - accelerator and trailing punctuation extraction

use std::collections::HashSet;

/// A context is skipped when `ignoreContexts` names it exactly or through
/// a trailing-`*` prefix pattern like `Ui*`.
pub fn should_skip_context(ignore_contexts: &HashSet<String>, name: &str) -> bool {
    if ignore_contexts.contains(name) {
        return true;
    }
    ignore_contexts.iter().any(|pattern| {
        pattern
            .strip_suffix('*')
            .is_some_and(|prefix| name.starts_with(prefix))
    })
}

/// First keyboard accelerator in a label, as "&X". A doubled `&&` is a
/// literal ampersand, not an accelerator.
pub fn find_accelerator(text: &str) -> Option<String> {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
            }
            Some(next) if next.is_alphanumeric() => {
                return Some(format!("&{}", next));
            }
            _ => {}
        }
    }
    None
}

const TRAILING_PUNCTUATION: &[char] = &['.', '!', '?', ':', ';', '…', '\u{037E}'];

/// Trailing punctuation run of a text, possibly empty.
pub fn trailing_punctuation(text: &str) -> String {
    let tail: String = text
        .trim_end()
        .chars()
        .rev()
        .take_while(|c| TRAILING_PUNCTUATION.contains(c))
        .collect();
    tail.chars().rev().collect()
}

/// Compare trailing punctuation, allowing language conventions: "..." and
/// the ellipsis character match everywhere, and Greek writes the question
/// mark as a semicolon.
pub fn punctuation_matches(language: &str, source: &str, translation: &str) -> bool {
    normalize_ending(language, source) == normalize_ending(language, translation)
}

fn normalize_ending(language: &str, ending: &str) -> String {
    let ending = ending.replace("...", "…");
    if primary_subtag(language) == "el" {
        ending
            .chars()
            .map(|c| if c == ';' || c == '\u{037E}' { '?' } else { c })
            .collect()
    } else {
        ending
    }
}

fn primary_subtag(language: &str) -> String {
    language
        .trim()
        .replace('_', "-")
        .split('-')
        .next()
        .unwrap_or("")
        .to_lowercase()
}
