//! Keyboard accelerator rule.
//!
//! Menu and button labels mark their accelerator with `&`. A translation
//! that drops the marker loses the shortcut; one that invents a marker
//! underlines a stray character. Which letter carries it may differ
//! between languages, only presence is checked.

use std::collections::HashSet;

use crate::{
    catalog::{context::CheckContext, model::Catalog},
    issues::AcceleratorIssue,
    rules::helpers::{find_accelerator, should_skip_context},
    utils::contains_alphabetic,
};

pub fn check_accelerator_issues(ctx: &CheckContext) -> Vec<AcceleratorIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_accelerators(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check that finished translations keep accelerator markers in sync
/// with their sources.
pub fn check_accelerators(
    catalog: &Catalog,
    ignore_contexts: &HashSet<String>,
) -> Vec<AcceleratorIssue> {
    let mut issues = Vec::new();

    for context in &catalog.contexts {
        if should_skip_context(ignore_contexts, &context.name) {
            continue;
        }

        for message in &context.messages {
            if !message.translation.is_finished() || message.translation.is_empty() {
                continue;
            }
            let Some(text) = message.translation.text() else {
                continue;
            };

            // Skip if the source has no alphabetic characters (pure symbols)
            if !contains_alphabetic(&message.source) {
                continue;
            }

            let issue = match (
                find_accelerator(&message.source),
                find_accelerator(text),
            ) {
                (Some(marker), None) => Some((marker, true)),
                (None, Some(marker)) => Some((marker, false)),
                _ => None,
            };

            if let Some((marker, in_source)) = issue {
                issues.push(AcceleratorIssue {
                    span: message.span.clone(),
                    context_name: context.name.clone(),
                    source: message.source.clone(),
                    marker,
                    in_source,
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
