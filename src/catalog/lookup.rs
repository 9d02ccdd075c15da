//! Message lookup with plural selection and source-text fallback.
//!
//! A [`Translator`] resolves messages the way a running Qt application
//! would: the key is (context, source, disambiguation comment), unfinished
//! and retired entries fall back to the source text, numerus messages pick
//! the form the language's plural rule selects, and `%n` is substituted
//! with the count even on fallback. Every result reports where its text
//! came from.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::catalog::format;
use crate::catalog::model::{Catalog, Message, TranslationValue};
use crate::catalog::plurals::PluralRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MessageKey<'a> {
    context: &'a str,
    source: &'a str,
    comment: Option<&'a str>,
}

/// Why a lookup fell back to the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    ContextNotFound,
    MessageNotFound,
    Unfinished,
    Retired,
    EmptyTranslation,
    MissingForm,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FallbackReason::ContextNotFound => "context not found",
            FallbackReason::MessageNotFound => "message not found",
            FallbackReason::Unfinished => "translation unfinished",
            FallbackReason::Retired => "entry retired",
            FallbackReason::EmptyTranslation => "translation empty",
            FallbackReason::MissingForm => "no plural forms",
        };
        write!(f, "{}", reason)
    }
}

/// Where the resolved text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOrigin {
    Translation,
    SourceFallback(FallbackReason),
}

impl ResolveOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolveOrigin::SourceFallback(_))
    }
}

impl fmt::Display for ResolveOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveOrigin::Translation => write!(f, "translation"),
            ResolveOrigin::SourceFallback(reason) => write!(f, "source fallback ({})", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub text: String,
    pub origin: ResolveOrigin,
}

impl Resolved {
    fn translation(text: &str) -> Self {
        Self {
            text: text.to_string(),
            origin: ResolveOrigin::Translation,
        }
    }

    fn fallback(source: &str, reason: FallbackReason) -> Self {
        Self {
            text: source.to_string(),
            origin: ResolveOrigin::SourceFallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin.is_fallback()
    }
}

/// Resolves messages against one catalog.
pub struct Translator<'a> {
    catalog: &'a Catalog,
    rule: PluralRule,
    index: HashMap<MessageKey<'a>, &'a Message>,
    context_names: HashSet<&'a str>,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let rule = PluralRule::for_language(&catalog.language);
        let mut index = HashMap::new();
        let mut context_names = HashSet::new();
        for context in &catalog.contexts {
            context_names.insert(context.name.as_str());
            for message in &context.messages {
                let key = MessageKey {
                    context: &context.name,
                    source: &message.source,
                    comment: message.comment.as_deref(),
                };
                // The first entry wins when a catalog repeats a key
                index.entry(key).or_insert(message);
            }
        }
        Self {
            catalog,
            rule,
            index,
            context_names,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn language(&self) -> &str {
        &self.catalog.language
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Resolves a message without a count. A numerus message resolves with
    /// the form its language selects for a count of 1, `%n` untouched.
    pub fn translate(&self, context: &str, source: &str, comment: Option<&str>) -> Resolved {
        self.resolve(context, source, comment, None)
    }

    /// Resolves a message for a count, substituting `%n` into the result.
    /// The substitution also applies to the source text on fallback.
    pub fn translate_n(&self, context: &str, source: &str, comment: Option<&str>, n: u64) -> Resolved {
        self.resolve(context, source, comment, Some(n))
    }

    fn resolve(&self, context: &str, source: &str, comment: Option<&str>, n: Option<u64>) -> Resolved {
        let resolved = self.resolve_text(context, source, comment, n.unwrap_or(1));
        match n {
            Some(n) => Resolved {
                text: format::substitute_count(&resolved.text, n),
                origin: resolved.origin,
            },
            None => resolved,
        }
    }

    fn resolve_text(&self, context: &str, source: &str, comment: Option<&str>, n: u64) -> Resolved {
        let Some(message) = self.find(context, source, comment) else {
            let reason = if self.context_names.contains(context) {
                FallbackReason::MessageNotFound
            } else {
                FallbackReason::ContextNotFound
            };
            return Resolved::fallback(source, reason);
        };
        if message.translation.state.is_retired() {
            return Resolved::fallback(source, FallbackReason::Retired);
        }
        if !message.translation.is_finished() {
            return Resolved::fallback(source, FallbackReason::Unfinished);
        }
        match &message.translation.value {
            TranslationValue::Text(text) if text.is_empty() => {
                Resolved::fallback(source, FallbackReason::EmptyTranslation)
            }
            TranslationValue::Text(text) => Resolved::translation(text),
            TranslationValue::Forms(forms) => match select_form(forms, self.rule, n) {
                Some(form) if !form.is_empty() => Resolved::translation(form),
                Some(_) => Resolved::fallback(source, FallbackReason::EmptyTranslation),
                None => Resolved::fallback(source, FallbackReason::MissingForm),
            },
        }
    }

    /// Exact key first; a comment lookup that misses retries without the
    /// comment, like Qt's translator does.
    fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&'a Message> {
        let exact = self
            .index
            .get(&MessageKey {
                context,
                source,
                comment,
            })
            .copied();
        if exact.is_some() || comment.is_none() {
            return exact;
        }
        self.index
            .get(&MessageKey {
                context,
                source,
                comment: None,
            })
            .copied()
    }
}

/// Picks the form for a count, using the last available form when the
/// translation carries fewer forms than the language needs.
fn select_form(forms: &[String], rule: PluralRule, n: u64) -> Option<&str> {
    let index = rule.index(n);
    forms.get(index).or_else(|| forms.last()).map(String::as_str)
}
