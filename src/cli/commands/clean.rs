use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary, RemovedMessage};
use crate::{
    catalog::{
        context::CheckContext,
        model::{Catalog, TranslationContext},
        ts::write_ts_file,
    },
    issues::Issue,
};
use anyhow::{Ok, Result};

/// Splits a catalog into its live part and the retired messages. Contexts
/// the removal leaves empty are dropped with their messages.
fn strip_retired(catalog: &Catalog) -> (Catalog, Vec<RemovedMessage>, usize) {
    let mut stripped = Catalog::new(catalog.file_path.clone(), catalog.language.clone());
    stripped.source_language = catalog.source_language.clone();
    stripped.version = catalog.version.clone();
    let mut removed = Vec::new();
    let mut dropped_contexts = 0;

    for context in &catalog.contexts {
        let mut kept = TranslationContext::new(context.name.clone());
        for message in &context.messages {
            if message.translation.state.is_retired() {
                removed.push(RemovedMessage {
                    context_name: context.name.clone(),
                    source: message.source.clone(),
                    line: message.line(),
                    state: message.translation.state,
                });
            } else {
                kept.messages.push(message.clone());
            }
        }
        if kept.messages.is_empty() && !context.messages.is_empty() {
            dropped_contexts += 1;
        } else {
            stripped.contexts.push(kept);
        }
    }

    (stripped, removed, dropped_contexts)
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let catalogs: Vec<&Catalog> = match args.catalog.as_deref() {
        Some(selector) => vec![ctx.find_catalog(Some(selector))?],
        None => ctx.catalogs().iter().collect(),
    };

    let mut removed = Vec::new();
    let mut dropped_contexts = 0;
    let mut file_count = 0;

    for catalog in catalogs {
        let (stripped, catalog_removed, catalog_dropped) = strip_retired(catalog);
        if catalog_removed.is_empty() {
            continue;
        }
        file_count += 1;
        dropped_contexts += catalog_dropped;
        removed.extend(catalog_removed);
        if apply {
            write_ts_file(&stripped, &catalog.file_path)?;
        }
    }

    let parse_errors = ctx.parse_errors();
    let all_issues: Vec<Issue> = parse_errors
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            removed,
            dropped_contexts,
            file_count,
            is_apply: apply,
        }),
        all_issues,
        ctx.files.len(),
        ctx.message_count(),
        false,
    ))
}
