//! Data types for parsed translation catalogs.
//!
//! A `Catalog` mirrors the structure of a Qt Linguist `.ts` file: contexts
//! grouping messages, each message carrying its source text, optional
//! disambiguation comment, translation and provenance records. Every message
//! also remembers where in the catalog file it was parsed from so issues can
//! point back at the exact line.

use std::fmt;

// ============================================================
// Positions inside a catalog file
// ============================================================

/// A position inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl CatalogLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A catalog location plus the raw text of its line, so reports can show
/// the offending line with a caret under it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogSpan {
    pub location: CatalogLocation,
    pub source_line: String,
}

impl CatalogSpan {
    pub fn new(location: CatalogLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }
}

// ============================================================
// Provenance
// ============================================================

/// A `<location>` record: where in the application sources the message
/// was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference {
    pub file_path: String,
    pub line: Option<u32>,
}

impl SourceReference {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line: None,
        }
    }

    pub fn with_line(file_path: impl Into<String>, line: u32) -> Self {
        Self {
            file_path: file_path.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file_path, line),
            None => write!(f, "{}", self.file_path),
        }
    }
}

// ============================================================
// Translations
// ============================================================

/// The lifecycle state of a translation, from the `type` attribute of the
/// `<translation>` element. Absence of the attribute means `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationState {
    Finished,
    Unfinished,
    /// The source string no longer exists in the application (Qt 5 naming).
    Vanished,
    /// The source string no longer exists in the application (Qt 4 naming).
    Obsolete,
}

impl TranslationState {
    /// Vanished and obsolete entries are retired: they are kept in the
    /// catalog for translation memory but no longer ship.
    pub fn is_retired(&self) -> bool {
        matches!(self, TranslationState::Vanished | TranslationState::Obsolete)
    }

    /// The value of the `type` attribute, or `None` for finished entries.
    pub fn type_attr(&self) -> Option<&'static str> {
        match self {
            TranslationState::Finished => None,
            TranslationState::Unfinished => Some("unfinished"),
            TranslationState::Vanished => Some("vanished"),
            TranslationState::Obsolete => Some("obsolete"),
        }
    }
}

impl fmt::Display for TranslationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TranslationState::Finished => "finished",
            TranslationState::Unfinished => "unfinished",
            TranslationState::Vanished => "vanished",
            TranslationState::Obsolete => "obsolete",
        };
        write!(f, "{}", name)
    }
}

/// The translated content: a single text for ordinary messages, or one form
/// per plural category for numerus messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Text(String),
    Forms(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub state: TranslationState,
    pub value: TranslationValue,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            state: TranslationState::Finished,
            value: TranslationValue::Text(text.into()),
        }
    }

    pub fn finished_forms(forms: Vec<String>) -> Self {
        Self {
            state: TranslationState::Finished,
            value: TranslationValue::Forms(forms),
        }
    }

    pub fn unfinished() -> Self {
        Self {
            state: TranslationState::Unfinished,
            value: TranslationValue::Text(String::new()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == TranslationState::Finished
    }

    /// True when there is no usable translated content at all.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            TranslationValue::Text(text) => text.is_empty(),
            TranslationValue::Forms(forms) => forms.iter().all(|f| f.is_empty()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TranslationValue::Text(text) => Some(text),
            TranslationValue::Forms(_) => None,
        }
    }

    pub fn forms(&self) -> Option<&[String]> {
        match &self.value {
            TranslationValue::Text(_) => None,
            TranslationValue::Forms(forms) => Some(forms),
        }
    }
}

// ============================================================
// Messages and contexts
// ============================================================

/// A single translatable message.
///
/// The lookup key is the triple (context name, `source`, `comment`); the
/// comment disambiguates identical source texts within one context.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub source: String,
    pub comment: Option<String>,
    /// `<extracomment>` left by the developer for the translator.
    pub extra_comment: Option<String>,
    /// `<translatorcomment>` left by the translator.
    pub translator_comment: Option<String>,
    /// True for `numerus="yes"` messages that vary with a count.
    pub numerus: bool,
    pub translation: Translation,
    /// Where the application sources use this message.
    pub references: Vec<SourceReference>,
    /// Points at the `<source>` element in the catalog file.
    pub span: CatalogSpan,
    /// Points at the `<translation>` element, when one is present.
    pub translation_span: Option<CatalogSpan>,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            source: source.into(),
            comment: None,
            extra_comment: None,
            translator_comment: None,
            numerus: false,
            translation,
            references: Vec::new(),
            span: CatalogSpan::default(),
            translation_span: None,
        }
    }

    pub fn key(&self) -> (&str, Option<&str>) {
        (&self.source, self.comment.as_deref())
    }

    pub fn line(&self) -> usize {
        self.span.location.line
    }
}

/// A named group of messages, usually the C++ class the strings belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationContext {
    pub name: String,
    pub messages: Vec<Message>,
}

impl TranslationContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

// ============================================================
// Catalogs
// ============================================================

/// A parsed `.ts` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub file_path: String,
    /// Target language code, e.g. `el` or `pt_BR`.
    pub language: String,
    pub source_language: Option<String>,
    /// TS format version from the file, e.g. `2.1`.
    pub version: Option<String>,
    pub contexts: Vec<TranslationContext>,
}

impl Catalog {
    pub fn new(file_path: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            language: language.into(),
            source_language: None,
            version: None,
            contexts: Vec::new(),
        }
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn find_context(&self, name: &str) -> Option<&TranslationContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterates over all messages together with their context.
    pub fn messages(&self) -> impl Iterator<Item = (&TranslationContext, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }
}
