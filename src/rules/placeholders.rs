//! Placeholder mismatch rule.
//!
//! A finished translation must use the same `%1`..`%99` and `%n` markers
//! as its source. A missing marker drops information at runtime; an
//! invented one survives substitution verbatim and leaks into the UI.
//!
//! For numerus messages the translation side is the union over all forms,
//! and a form-wide absence of `%n` is allowed: fully worded forms like
//! "ένα αρχείο" are legitimate.

use std::collections::{BTreeSet, HashSet};

use crate::{
    catalog::{
        context::CheckContext,
        format::{Placeholder, placeholder_set},
        model::{Catalog, TranslationValue},
    },
    issues::PlaceholderMismatchIssue,
    rules::helpers::should_skip_context,
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_placeholders(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check placeholder sets of finished translations against their sources.
pub fn check_placeholders(
    catalog: &Catalog,
    ignore_contexts: &HashSet<String>,
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for context in &catalog.contexts {
        if should_skip_context(ignore_contexts, &context.name) {
            continue;
        }

        for message in &context.messages {
            if !message.translation.is_finished() || message.translation.is_empty() {
                continue;
            }

            let source_set = placeholder_set(&message.source);
            let translation_set: BTreeSet<Placeholder> = match &message.translation.value {
                TranslationValue::Text(text) => placeholder_set(text),
                TranslationValue::Forms(forms) => {
                    forms.iter().flat_map(|form| placeholder_set(form)).collect()
                }
            };

            let missing: Vec<String> = source_set
                .difference(&translation_set)
                .filter(|p| !(message.numerus && **p == Placeholder::Count))
                .map(|p| p.to_string())
                .collect();
            let unexpected: Vec<String> = translation_set
                .difference(&source_set)
                .map(|p| p.to_string())
                .collect();

            if !missing.is_empty() || !unexpected.is_empty() {
                issues.push(PlaceholderMismatchIssue {
                    span: message.span.clone(),
                    context_name: context.name.clone(),
                    source: message.source.clone(),
                    missing,
                    unexpected,
                    references: message.references.clone(),
                });
            }
        }
    }

    // Sort by line for deterministic output
    issues.sort_by(|a, b| {
        a.span
            .location
            .line
            .cmp(&b.span.location.line)
            .then_with(|| a.source.cmp(&b.source))
    });

    issues
}
