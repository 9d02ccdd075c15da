//! Empty finished translation rule.
//!
//! An unfinished entry may be empty, that is what unfinished means. A
//! finished entry with no text silently resolves to the source at runtime
//! and hides the gap from translators.

use std::collections::HashSet;

use crate::{
    catalog::{
        context::CheckContext,
        model::{Catalog, TranslationValue},
    },
    issues::EmptyTranslationIssue,
    rules::helpers::should_skip_context,
};

pub fn check_empty_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    let mut issues = Vec::new();
    for catalog in ctx.catalogs() {
        issues.extend(check_empty(catalog, &ctx.ignore_contexts));
    }
    issues
}

/// Check for finished translations with no text, including empty plural
/// forms inside otherwise filled numerus translations.
pub fn check_empty(
    catalog: &Catalog,
    ignore_contexts: &HashSet<String>,
) -> Vec<EmptyTranslationIssue> {
    let mut issues = Vec::new();

    for context in &catalog.contexts {
        if should_skip_context(ignore_contexts, &context.name) {
            continue;
        }

        for message in &context.messages {
            if !message.translation.is_finished() {
                continue;
            }

            match &message.translation.value {
                TranslationValue::Text(text) => {
                    if text.is_empty() {
                        issues.push(EmptyTranslationIssue {
                            span: message.span.clone(),
                            context_name: context.name.clone(),
                            source: message.source.clone(),
                            form_index: None,
                            references: message.references.clone(),
                        });
                    }
                }
                TranslationValue::Forms(forms) => {
                    for (index, form) in forms.iter().enumerate() {
                        if form.is_empty() {
                            issues.push(EmptyTranslationIssue {
                                span: message.span.clone(),
                                context_name: context.name.clone(),
                                source: message.source.clone(),
                                form_index: Some(index),
                                references: message.references.clone(),
                            });
                        }
                    }
                }
            }
        }
    }

    // Sort by line for deterministic output
    issues.sort_by(|a, b| {
        a.span
            .location
            .line
            .cmp(&b.span.location.line)
            .then_with(|| a.form_index.cmp(&b.form_index))
    });

    issues
}
