//! Retired message rule.
//!
//! Vanished and obsolete entries no longer correspond to any string in
//! the application. They are kept as translation memory but accumulate
//! over releases; this rule surfaces them for `glossa clean`.

use std::collections::HashSet;

use crate::{
    catalog::{context::CheckContext, model::Catalog},
    issues::ObsoleteIssue,
    rules::helpers::should_skip_context,
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_obsolete(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check for vanished and obsolete messages.
pub fn check_obsolete(catalog: &Catalog, ignore_contexts: &HashSet<String>) -> Vec<ObsoleteIssue> {
    let mut issues = Vec::new();

    for context in &catalog.contexts {
        if should_skip_context(ignore_contexts, &context.name) {
            continue;
        }

        for message in &context.messages {
            if !message.translation.state.is_retired() {
                continue;
            }

            issues.push(ObsoleteIssue {
                span: message.span.clone(),
                context_name: context.name.clone(),
                source: message.source.clone(),
                state: message.translation.state,
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
