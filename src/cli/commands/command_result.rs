use crate::catalog::lookup::ResolveOrigin;
use crate::catalog::model::{Catalog, TranslationState};
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Query(QuerySummary),
    Export(ExportSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
}

/// Message counts of one catalog, broken down by translation state.
#[derive(Debug, Clone)]
pub struct CatalogStats {
    pub file_path: String,
    pub language: String,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub retired: usize,
    pub numerus: usize,
}

impl CatalogStats {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let mut stats = Self {
            file_path: catalog.file_path.clone(),
            language: catalog.language.clone(),
            contexts: catalog.contexts.len(),
            messages: 0,
            finished: 0,
            unfinished: 0,
            retired: 0,
            numerus: 0,
        };
        for (_, message) in catalog.messages() {
            stats.messages += 1;
            if message.numerus {
                stats.numerus += 1;
            }
            match message.translation.state {
                TranslationState::Finished => stats.finished += 1,
                TranslationState::Unfinished => stats.unfinished += 1,
                TranslationState::Vanished | TranslationState::Obsolete => stats.retired += 1,
            }
        }
        stats
    }

    /// Finished share of the live (non-retired) messages.
    pub fn completion_percent(&self) -> f64 {
        let live = self.messages - self.retired;
        if live == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / live as f64
        }
    }
}

#[derive(Debug)]
pub struct QuerySummary {
    pub context: String,
    pub source: String,
    /// Resolved text with count and arguments substituted.
    pub text: String,
    pub origin: ResolveOrigin,
    pub language: String,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub message_count: usize,
    pub context_count: usize,
    pub json: String,
    /// Path the JSON was written to, or None when printed to stdout.
    pub output: Option<String>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub removed: Vec<RemovedMessage>,
    /// Contexts left empty by the removal and dropped with it.
    pub dropped_contexts: usize,
    pub file_count: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct RemovedMessage {
    pub context_name: String,
    pub source: String,
    pub line: usize,
    pub state: TranslationState,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running glossa commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of catalog files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog (.ts) files that were checked.
    pub catalog_files_checked: usize,
    /// Number of messages across those catalogs.
    /// 0 if messages were not counted.
    pub messages_checked: usize,
}
