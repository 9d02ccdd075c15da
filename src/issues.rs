//! Issue types for catalog analysis results.
//!
//! This module defines all issue types that can be detected while checking
//! a translation catalog. Each issue is self-contained with all information
//! needed by:
//! - Reporter: to display the issue to users (CLI, MCP, etc.)
//! - Commands: to count, filter and act on findings (clean, stats, etc.)

use enum_dispatch::enum_dispatch;

use crate::catalog::model::{CatalogSpan, SourceReference, TranslationState};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateMessage,
    PluralForms,
    PlaceholderMismatch,
    EmptyTranslation,
    Unfinished,
    Obsolete,
    Accelerator,
    Punctuation,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::PluralForms => write!(f, "plural-forms"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::Accelerator => write!(f, "accelerator"),
            Rule::Punctuation => write!(f, "punctuation"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Catalog Structure
// ============================================================

/// Same (source, comment) key defined twice in one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    /// The duplicated source text.
    pub source: String,
    /// Disambiguation comment of the duplicated key, if any.
    pub comment: Option<String>,
    /// Line of the entry that wins on lookup.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Numerus translation whose form count does not match the language,
/// or a plain message carrying numerusform children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralFormsIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    pub source: String,
    /// Whether the message is declared `numerus="yes"`.
    pub numerus: bool,
    /// The catalog language the expectation comes from.
    pub language: String,
    /// Forms the language's plural rule requires.
    pub expected: usize,
    /// Forms the translation actually carries.
    pub found: usize,
    pub references: Vec<SourceReference>,
}

impl PluralFormsIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PluralForms
    }
}

/// Placeholder sets differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    pub source: String,
    /// Placeholders in the source but absent from the translation.
    pub missing: Vec<String>,
    /// Placeholders in the translation the source never mentions.
    pub unexpected: Vec<String>,
    pub references: Vec<SourceReference>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Finished translation with no text (or an empty plural form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    pub source: String,
    /// Which plural form is empty, zero-based. None for plain messages.
    pub form_index: Option<usize>,
    pub references: Vec<SourceReference>,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

// ============================================================
// Issue Types - Translation State
// ============================================================

/// Message still marked unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    pub source: String,
    /// Whether a draft translation text is already present.
    pub has_draft: bool,
    pub references: Vec<SourceReference>,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message marked vanished or obsolete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    pub source: String,
    pub state: TranslationState,
    pub references: Vec<SourceReference>,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

// ============================================================
// Issue Types - Text Conventions
// ============================================================

/// Keyboard accelerator present on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    pub source: String,
    /// The accelerated character, e.g. "&S".
    pub marker: String,
    /// True when the source has the accelerator and the translation lost it.
    pub in_source: bool,
    pub references: Vec<SourceReference>,
}

impl AcceleratorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Accelerator
    }
}

/// Trailing punctuation differs between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationIssue {
    pub span: CatalogSpan,
    pub context_name: String,
    pub source: String,
    /// Trailing punctuation of the source, possibly empty.
    pub source_ending: String,
    /// Trailing punctuation of the translation, possibly empty.
    pub translation_ending: String,
    pub references: Vec<SourceReference>,
}

impl PunctuationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Punctuation
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateMessage(DuplicateMessageIssue),
    PluralForms(PluralFormsIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    EmptyTranslation(EmptyTranslationIssue),
    Unfinished(UnfinishedIssue),
    Obsolete(ObsoleteIssue),
    Accelerator(AcceleratorIssue),
    Punctuation(PunctuationIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::severity(),
            Issue::PluralForms(_) => PluralFormsIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::severity(),
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Obsolete(_) => ObsoleteIssue::severity(),
            Issue::Accelerator(_) => AcceleratorIssue::severity(),
            Issue::Punctuation(_) => PunctuationIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::rule(),
            Issue::PluralForms(_) => PluralFormsIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::rule(),
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Obsolete(_) => ObsoleteIssue::rule(),
            Issue::Accelerator(_) => AcceleratorIssue::rule(),
            Issue::Punctuation(_) => PunctuationIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message element inside a catalog file (has the raw line for
    /// caret display).
    Span(&'a CatalogSpan),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// This trait is implemented by all issue types to provide a consistent
/// interface for the report functions. Uses `enum_dispatch` for zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Source code locations that use the string (from `<location>` tags).
    fn references(&self) -> &[SourceReference] {
        &[]
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("the first entry wins on lookup; remove or disambiguate the later ones")
    }

    fn details(&self) -> Option<String> {
        let mut details = format!(
            "context '{}' already defines this message at line {}",
            self.context_name, self.first_line
        );
        if let Some(comment) = &self.comment {
            details.push_str(&format!(" (comment \"{}\")", comment));
        }
        Some(details)
    }
}

impl Report for PluralFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.numerus {
            Some(format!(
                "language '{}' needs {} plural forms, found {}",
                self.language, self.expected, self.found
            ))
        } else {
            Some(format!(
                "message is not marked numerus but carries {} numerusform(s)",
                self.found
            ))
        }
    }

    fn references(&self) -> &[SourceReference] {
        &self.references
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("translation is missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("translation adds {}", self.unexpected.join(", ")));
        }
        Some(parts.join("; "))
    }

    fn references(&self) -> &[SourceReference] {
        &self.references
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("mark the entry unfinished or supply the translation")
    }

    fn details(&self) -> Option<String> {
        match self.form_index {
            Some(index) => Some(format!("plural form {} is empty", index + 1)),
            None => Some("finished translation is empty".to_string()),
        }
    }

    fn references(&self) -> &[SourceReference] {
        &self.references
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.has_draft {
            Some("a draft translation is present but not accepted".to_string())
        } else {
            Some("no translation yet; the source text ships".to_string())
        }
    }

    fn references(&self) -> &[SourceReference] {
        &self.references
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run `glossa clean --apply` to drop retired messages")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "marked {}; the string no longer exists in the application",
            self.state
        ))
    }

    fn references(&self) -> &[SourceReference] {
        &self.references
    }
}

impl Report for AcceleratorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.in_source {
            Some(format!(
                "source defines accelerator '{}' but the translation has none",
                self.marker
            ))
        } else {
            Some(format!(
                "translation adds accelerator '{}' the source does not have",
                self.marker
            ))
        }
    }

    fn references(&self) -> &[SourceReference] {
        &self.references
    }
}

impl Report for PunctuationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Span(&self.span)
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "source ends with {} but the translation ends with {}",
            describe_ending(&self.source_ending),
            describe_ending(&self.translation_ending)
        ))
    }

    fn references(&self) -> &[SourceReference] {
        &self.references
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

fn describe_ending(ending: &str) -> String {
    if ending.is_empty() {
        "no punctuation".to_string()
    } else {
        format!("\"{}\"", ending)
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    /// Get file path for sorting.
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Span(span) => &span.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    /// Get line number for sorting.
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Span(span) => span.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    /// Get column number for sorting.
    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Span(span) => span.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
