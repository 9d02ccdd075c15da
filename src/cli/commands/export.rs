use std::fs;

use anyhow::{Context, Ok, Result};
use serde_json::{Map, Value, json};

use super::super::args::ExportCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, ExportSummary};
use crate::catalog::{
    context::CheckContext,
    model::{Catalog, Message},
};

/// A message exports under its source text, with the disambiguation
/// comment appended in brackets when one is present.
fn export_key(message: &Message) -> String {
    match &message.comment {
        Some(comment) => format!("{} [{}]", message.source, comment),
        None => message.source.clone(),
    }
}

fn export_value(message: &Message) -> Value {
    match message.translation.forms() {
        Some(forms) => Value::Array(forms.iter().map(|f| Value::String(f.clone())).collect()),
        None => Value::String(message.translation.text().unwrap_or_default().to_string()),
    }
}

/// Builds the JSON document for one catalog. Without `all` only finished,
/// non-empty messages export, the set a running application would use.
fn export_catalog(catalog: &Catalog, all: bool) -> (Value, usize, usize) {
    let mut contexts = Map::new();
    let mut message_count = 0;

    for context in &catalog.contexts {
        let mut entries = Map::new();
        for message in &context.messages {
            if !all && (!message.translation.is_finished() || message.translation.is_empty()) {
                continue;
            }
            let key = export_key(message);
            // The first entry wins, matching lookup
            if entries.contains_key(&key) {
                continue;
            }
            entries.insert(key, export_value(message));
            message_count += 1;
        }
        if !entries.is_empty() {
            contexts.insert(context.name.clone(), Value::Object(entries));
        }
    }

    let context_count = contexts.len();
    let value = json!({
        "language": catalog.language,
        "contexts": contexts,
    });
    (value, message_count, context_count)
}

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let catalog = ctx.find_catalog(args.catalog.as_deref())?;

    let (value, message_count, context_count) = export_catalog(catalog, args.all);
    let json = serde_json::to_string_pretty(&value)?;

    let output = match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(path.to_string_lossy().to_string())
        }
        None => None,
    };

    Ok(finish(
        CommandSummary::Export(ExportSummary {
            message_count,
            context_count,
            json,
            output,
        }),
        vec![],
        ctx.files.len(),
        ctx.message_count(),
        true,
    ))
}
