use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cli::commands::CatalogStats;
use crate::issues::{Issue, Report, ReportLocation};

// ============================================================
// Parameter Types
// ============================================================

/// Parameters for scan_overview
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Directory containing the .ts catalog files (usually the project root)
    pub catalog_root_path: String,
}

/// Parameters for scan_issues
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Directory containing the .ts catalog files (usually the project root)
    pub catalog_root_path: String,
    /// Restrict the scan to one rule: "duplicate", "plurals", "placeholders",
    /// "empty", "unfinished", "obsolete", "accelerator" or "punctuation"
    pub rule: Option<String>,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

/// Parameters for lookup_message
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupMessageParams {
    /// Directory containing the .ts catalog files (usually the project root)
    pub catalog_root_path: String,
    /// Catalog to resolve against, by file path or language code.
    /// May be omitted when exactly one catalog exists.
    pub catalog: Option<String>,
    /// Context name, e.g. "OCC::Folder"
    pub context: String,
    /// Source text to resolve
    pub source: String,
    /// Disambiguation comment, for contexts that define the same source twice
    pub comment: Option<String>,
    /// Count for numerus messages; selects the plural form and replaces %n
    pub count: Option<u64>,
    /// Values substituted for %1..%99 placeholders, in order
    pub arguments: Option<Vec<String>>,
}

/// Parameters for list_contexts
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListContextsParams {
    /// Directory containing the .ts catalog files (usually the project root)
    pub catalog_root_path: String,
    /// Catalog to list, by file path or language code.
    /// May be omitted when exactly one catalog exists.
    pub catalog: Option<String>,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub parse_error_count: usize,
    pub catalogs: Vec<CatalogOverview>,
    pub issues: IssueStats,
}

/// Message counts of one catalog, broken down by translation state
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverview {
    pub file_path: String,
    pub language: String,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub retired: usize,
    pub numerus: usize,
    /// Finished share of the live (non-retired) messages
    pub completion_percent: f64,
}

impl From<&CatalogStats> for CatalogOverview {
    fn from(stats: &CatalogStats) -> Self {
        Self {
            file_path: stats.file_path.clone(),
            language: stats.language.clone(),
            contexts: stats.contexts,
            messages: stats.messages,
            finished: stats.finished,
            unfinished: stats.unfinished,
            retired: stats.retired,
            numerus: stats.numerus,
            completion_percent: stats.completion_percent(),
        }
    }
}

/// Issue counts across all catalogs
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub by_rule: Vec<RuleCount>,
}

/// Issue count for a single rule
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleCount {
    pub rule: String,
    pub count: usize,
}

// ============================================================
// Scan Issues Types (scan_issues)
// ============================================================

/// Result of scan_issues operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// A single catalog issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// Context the message belongs to; absent for parse errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Source text, or the parse error text
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Source code locations that use the string
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let (file_path, line, col) = match issue.location() {
            ReportLocation::Span(span) => (
                span.location.file_path.clone(),
                span.location.line,
                span.location.col,
            ),
            ReportLocation::File { path } => (path.to_string(), 0, 0),
        };

        Self {
            rule: issue.report_rule().to_string(),
            severity: issue.report_severity().to_string(),
            file_path,
            line,
            col,
            context: context_name(issue).map(str::to_string),
            message: issue.message(),
            details: issue.details(),
            references: issue.references().iter().map(|r| r.to_string()).collect(),
        }
    }
}

fn context_name(issue: &Issue) -> Option<&str> {
    match issue {
        Issue::DuplicateMessage(i) => Some(&i.context_name),
        Issue::PluralForms(i) => Some(&i.context_name),
        Issue::PlaceholderMismatch(i) => Some(&i.context_name),
        Issue::EmptyTranslation(i) => Some(&i.context_name),
        Issue::Unfinished(i) => Some(&i.context_name),
        Issue::Obsolete(i) => Some(&i.context_name),
        Issue::Accelerator(i) => Some(&i.context_name),
        Issue::Punctuation(i) => Some(&i.context_name),
        Issue::ParseError(_) => None,
    }
}

// ============================================================
// Lookup Types (lookup_message)
// ============================================================

/// Result of lookup_message operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub context: String,
    pub source: String,
    /// Resolved text with count and arguments substituted
    pub text: String,
    /// "translation", or "source fallback (<reason>)"
    pub origin: String,
    /// True when the source text shipped instead of a translation
    pub is_fallback: bool,
    pub language: String,
    pub file_path: String,
}

// ============================================================
// Contexts Types (list_contexts)
// ============================================================

/// Result of list_contexts operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContextsResult {
    pub file_path: String,
    pub language: String,
    pub total_count: usize,
    pub items: Vec<ContextInfo>,
    pub pagination: Pagination,
}

/// Message counts of a single context
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContextInfo {
    pub name: String,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub retired: usize,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
