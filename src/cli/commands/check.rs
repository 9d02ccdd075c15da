use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    catalog::context::CheckContext,
    issues::Issue,
    rules::{
        accelerator::check_accelerator_issues, duplicate::check_duplicate_issues,
        empty::check_empty_issues, obsolete::check_obsolete_issues,
        placeholders::check_placeholder_issues, plural_forms::check_plural_forms_issues,
        punctuation::check_punctuation_issues, unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Duplicate,
    Plurals,
    Placeholders,
    Empty,
    Unfinished,
    Obsolete,
    Accelerator,
    Punctuation,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Duplicate,
            CheckRule::Plurals,
            CheckRule::Placeholders,
            CheckRule::Empty,
            CheckRule::Unfinished,
            CheckRule::Obsolete,
            CheckRule::Accelerator,
            CheckRule::Punctuation,
        ]
    }
}

/// Runs the selected rules over every parsed catalog. Files that failed to
/// parse are appended as issues, whatever the selection.
pub fn collect_issues(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateMessage));
            }
            CheckRule::Plurals => {
                let issues = check_plural_forms_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PluralForms));
            }
            CheckRule::Placeholders => {
                let issues = check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Empty => {
                let issues = check_empty_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Obsolete => {
                let issues = check_obsolete_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Obsolete));
            }
            CheckRule::Accelerator => {
                let issues = check_accelerator_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Accelerator));
            }
            CheckRule::Punctuation => {
                let issues = check_punctuation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Punctuation));
            }
        }
    }

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    all_issues
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let checks = &cmd.checks;
    let ctx = CheckContext::new(&args.common)?;

    let checks = if checks.is_empty() {
        CheckRule::all()
    } else {
        checks.clone()
    };

    let all_issues = collect_issues(&ctx, &checks);

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        ctx.message_count(),
        true,
    ))
}
