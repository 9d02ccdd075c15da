//! Plural form count rule.
//!
//! A numerus translation must carry exactly as many forms as the catalog
//! language's plural rule selects between. Too few forms make some counts
//! fall back to the last form; extra forms are never reached.

use std::collections::HashSet;

use crate::{
    catalog::{context::CheckContext, model::Catalog, plurals::PluralRule},
    issues::PluralFormsIssue,
    rules::helpers::should_skip_context,
};

pub fn check_plural_forms_issues(ctx: &CheckContext) -> Vec<PluralFormsIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_plural_forms(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check numerus form counts against the catalog language.
///
/// Finished numerus messages must match the language's form count.
/// A message not marked numerus must not carry numerusform children at
/// all, whatever its state. Retired messages are left to the obsolete
/// rule, and unfinished ones to the unfinished rule.
pub fn check_plural_forms(
    catalog: &Catalog,
    ignore_contexts: &HashSet<String>,
) -> Vec<PluralFormsIssue> {
    let expected = PluralRule::for_language(&catalog.language).form_count();
    let mut issues = Vec::new();

    for context in &catalog.contexts {
        if should_skip_context(ignore_contexts, &context.name) {
            continue;
        }

        for message in &context.messages {
            if message.translation.state.is_retired() {
                continue;
            }
            let Some(forms) = message.translation.forms() else {
                continue;
            };

            if !message.numerus {
                issues.push(PluralFormsIssue {
                    span: message.span.clone(),
                    context_name: context.name.clone(),
                    source: message.source.clone(),
                    numerus: false,
                    language: catalog.language.clone(),
                    expected,
                    found: forms.len(),
                    references: message.references.clone(),
                });
            } else if message.translation.is_finished() && forms.len() != expected {
                issues.push(PluralFormsIssue {
                    span: message.span.clone(),
                    context_name: context.name.clone(),
                    source: message.source.clone(),
                    numerus: true,
                    language: catalog.language.clone(),
                    expected,
                    found: forms.len(),
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
