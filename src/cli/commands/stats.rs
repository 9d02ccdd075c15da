use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::helper::finish;
use super::{CatalogStats, CommandResult, CommandSummary, StatsSummary};
use crate::{catalog::context::CheckContext, issues::Issue};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let catalogs = match args.catalog.as_deref() {
        Some(selector) => vec![CatalogStats::for_catalog(ctx.find_catalog(Some(selector))?)],
        None => ctx
            .catalogs()
            .iter()
            .map(CatalogStats::for_catalog)
            .collect(),
    };

    let parse_errors = ctx.parse_errors();
    let all_issues: Vec<Issue> = parse_errors
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { catalogs }),
        all_issues,
        ctx.files.len(),
        ctx.message_count(),
        true,
    ))
}
