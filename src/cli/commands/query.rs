use anyhow::{Ok, Result};

use super::super::args::QueryCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, QuerySummary};
use crate::catalog::{context::CheckContext, format::substitute_args, lookup::Translator};

pub fn query(cmd: QueryCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let catalog = ctx.find_catalog(args.catalog.as_deref())?;

    let translator = Translator::new(catalog);
    let resolved = match args.count {
        Some(n) => translator.translate_n(&cmd.context, &cmd.source, args.comment.as_deref(), n),
        None => translator.translate(&cmd.context, &cmd.source, args.comment.as_deref()),
    };

    let text = if args.arguments.is_empty() {
        resolved.text
    } else {
        substitute_args(&resolved.text, &args.arguments)
    };

    Ok(finish(
        CommandSummary::Query(QuerySummary {
            context: cmd.context,
            source: cmd.source,
            text,
            origin: resolved.origin,
            language: catalog.language.clone(),
        }),
        vec![],
        ctx.files.len(),
        0,
        false,
    ))
}
