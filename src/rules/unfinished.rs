//! Unfinished message rule.
//!
//! Unfinished entries resolve to the source text at runtime. The rule
//! reports them so release checks can see how much English still ships.

use std::collections::HashSet;

use crate::{
    catalog::{
        context::CheckContext,
        model::{Catalog, TranslationState},
    },
    issues::UnfinishedIssue,
    rules::helpers::should_skip_context,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_unfinished(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check for messages still marked unfinished.
pub fn check_unfinished(
    catalog: &Catalog,
    ignore_contexts: &HashSet<String>,
) -> Vec<UnfinishedIssue> {
    let mut issues = Vec::new();

    for context in &catalog.contexts {
        if should_skip_context(ignore_contexts, &context.name) {
            continue;
        }

        for message in &context.messages {
            if message.translation.state != TranslationState::Unfinished {
                continue;
            }

            issues.push(UnfinishedIssue {
                span: message.span.clone(),
                context_name: context.name.clone(),
                source: message.source.clone(),
                has_draft: !message.translation.is_empty(),
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
