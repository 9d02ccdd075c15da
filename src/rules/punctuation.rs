//! Trailing punctuation rule.
//!
//! Status texts and dialogs read oddly when the translation drops a full
//! stop or turns a question into a statement. Language conventions are
//! respected: "..." matches the ellipsis character, and Greek writes its
//! question mark as a semicolon.

use std::collections::HashSet;

use crate::{
    catalog::{context::CheckContext, model::Catalog},
    issues::PunctuationIssue,
    rules::helpers::{
        punctuation_matches, should_skip_context, trailing_punctuation,
    },
    utils::contains_alphabetic,
};

pub fn check_punctuation_issues(ctx: &CheckContext) -> Vec<PunctuationIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_punctuation(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check trailing punctuation of finished translations against their
/// sources.
pub fn check_punctuation(
    catalog: &Catalog,
    ignore_contexts: &HashSet<String>,
) -> Vec<PunctuationIssue> {
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

            let source_ending = trailing_punctuation(&message.source);
            let translation_ending = trailing_punctuation(text);
            if punctuation_matches(&catalog.language, &source_ending, &translation_ending) {
                continue;
            }

            issues.push(PunctuationIssue {
                span: message.span.clone(),
                context_name: context.name.clone(),
                source: message.source.clone(),
                source_ending,
                translation_ending,
                references: message.references.clone(),
            });
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
