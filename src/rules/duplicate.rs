//! Duplicate message detection rule.
//!
//! Within one context the lookup key is (source, comment). A later entry
//! with the same key can never be resolved because the first one wins,
//! so duplicates are dead weight at best and stale text at worst.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::{
    catalog::{context::CheckContext, model::Catalog},
    issues::DuplicateMessageIssue,
    rules::helpers::should_skip_context,
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_duplicates(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check for duplicated (source, comment) keys within each context.
///
/// # Returns
/// One issue per later entry, pointing back at the line of the entry
/// that wins on lookup.
pub fn check_duplicates(
    catalog: &Catalog,
    ignore_contexts: &HashSet<String>,
) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for context in &catalog.contexts {
        if should_skip_context(ignore_contexts, &context.name) {
            continue;
        }

        let mut first_lines: HashMap<(&str, Option<&str>), usize> = HashMap::new();
        for message in &context.messages {
            match first_lines.entry(message.key()) {
                Entry::Occupied(entry) => {
                    issues.push(DuplicateMessageIssue {
                        span: message.span.clone(),
                        context_name: context.name.clone(),
                        source: message.source.clone(),
                        comment: message.comment.clone(),
                        first_line: *entry.get(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(message.line());
                }
            }
        }
    }

    // Sort by file path, then line for deterministic output
    issues.sort_by(|a, b| {
        a.span
            .location
            .line
            .cmp(&b.span.location.line)
            .then_with(|| a.source.cmp(&b.source))
    });

    issues
}
