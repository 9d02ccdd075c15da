//! Reading and writing Qt Linguist `.ts` files.
//!
//! The reader is event-based and tolerant: unknown elements (dependency
//! lists, vendor extensions, `<byte>` escapes) are skipped, missing
//! attributes fall back to defaults, and only structural XML errors abort a
//! file. Every message records the catalog line it came from so issues can
//! point at it.
//!
//! The writer reproduces the layout lupdate and the translation tooling
//! emit: a one-line header, 4-space indentation, numerus forms inline and
//! empty non-finished translations as self-closing elements. Parsing a
//! written catalog yields the same contexts and messages back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};

use crate::catalog::model::{
    Catalog, CatalogLocation, CatalogSpan, Message, SourceReference, Translation,
    TranslationContext, TranslationState, TranslationValue,
};

// ============================================================
// Reading
// ============================================================

/// Which leaf element text is currently being collected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    Numerusform,
}

#[derive(Default)]
struct MessageBuilder {
    references: Vec<SourceReference>,
    source: Option<String>,
    comment: Option<String>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
    numerus: bool,
    /// `None` until a `<translation>` element is seen.
    translation_state: Option<TranslationState>,
    translation_text: String,
    forms: Vec<String>,
    span: Option<CatalogSpan>,
    translation_span: Option<CatalogSpan>,
}

impl MessageBuilder {
    /// Builds the message, or `None` for structurally useless entries
    /// (a message without a `<source>` cannot be looked up).
    fn finish(self) -> Option<Message> {
        let source = self.source?;
        let state = self.translation_state.unwrap_or(TranslationState::Unfinished);
        let value = if self.numerus || !self.forms.is_empty() {
            if self.forms.is_empty() && !self.translation_text.is_empty() {
                // Numerus message hand-edited into a plain translation
                TranslationValue::Forms(vec![self.translation_text])
            } else {
                TranslationValue::Forms(self.forms)
            }
        } else {
            TranslationValue::Text(self.translation_text)
        };
        Some(Message {
            source,
            comment: self.comment,
            extra_comment: self.extra_comment,
            translator_comment: self.translator_comment,
            numerus: self.numerus,
            translation: Translation { state, value },
            references: self.references,
            span: self.span.unwrap_or_default(),
            translation_span: self.translation_span,
        })
    }
}

/// Reads and parses a catalog file.
pub fn parse_ts_file(file_path: &str, fallback_language: Option<&str>) -> Result<Catalog> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read catalog file: {}", file_path))?;
    parse_ts(&content, file_path, fallback_language)
        .with_context(|| format!("Failed to parse catalog file: {}", file_path))
}

/// Parses catalog content.
///
/// The catalog language comes from the `<TS language=...>` attribute, then
/// from `fallback_language`, then from the file name suffix (`client_el.ts`
/// is Greek), and finally defaults to `en`.
pub fn parse_ts(content: &str, file_path: &str, fallback_language: Option<&str>) -> Result<Catalog> {
    let line_offsets = build_line_index(content);
    let lines: Vec<&str> = content.lines().collect();
    let mut reader = Reader::from_str(content);

    let mut language: Option<String> = None;
    let mut source_language: Option<String> = None;
    let mut version: Option<String> = None;
    let mut contexts: Vec<TranslationContext> = Vec::new();
    let mut current_context: Option<TranslationContext> = None;
    let mut current_message: Option<MessageBuilder> = None;
    let mut capture: Option<Capture> = None;
    let mut text = String::new();

    loop {
        let position = reader.buffer_position();
        let event = reader.read_event().map_err(|err| {
            let line = offset_to_line(&line_offsets, reader.buffer_position() as usize);
            anyhow!("XML error at line {}: {}", line, err)
        })?;
        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"TS" => {
                    language = attr_value(&e, "language")?;
                    source_language = attr_value(&e, "sourcelanguage")?;
                    version = attr_value(&e, "version")?;
                }
                b"context" => current_context = Some(TranslationContext::new("")),
                b"name" if current_context.is_some() && current_message.is_none() => {
                    capture = Some(Capture::ContextName);
                    text.clear();
                }
                b"message" if current_context.is_some() => {
                    current_message = Some(MessageBuilder {
                        numerus: attr_value(&e, "numerus")?.as_deref() == Some("yes"),
                        ..MessageBuilder::default()
                    });
                }
                b"location" => {
                    if let Some(builder) = current_message.as_mut()
                        && let Some(reference) = reference_from(&e)?
                    {
                        builder.references.push(reference);
                    }
                }
                b"source" if current_message.is_some() => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.span =
                            Some(span_at(file_path, &lines, &line_offsets, reader.buffer_position()));
                    }
                    capture = Some(Capture::Source);
                    text.clear();
                }
                b"comment" if current_message.is_some() => {
                    capture = Some(Capture::Comment);
                    text.clear();
                }
                b"extracomment" if current_message.is_some() => {
                    capture = Some(Capture::ExtraComment);
                    text.clear();
                }
                b"translatorcomment" if current_message.is_some() => {
                    capture = Some(Capture::TranslatorComment);
                    text.clear();
                }
                b"translation" if current_message.is_some() => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.translation_state = Some(state_from_attr(&e)?);
                        builder.translation_span =
                            Some(span_at(file_path, &lines, &line_offsets, reader.buffer_position()));
                    }
                    capture = Some(Capture::Translation);
                    text.clear();
                }
                b"numerusform" if current_message.is_some() => {
                    capture = Some(Capture::Numerusform);
                    text.clear();
                }
                _ => {
                    // Unknown container, skip its whole subtree
                    let end = e.to_end().into_owned();
                    reader.read_to_end(end.name()).map_err(|err| {
                        let line = offset_to_line(&line_offsets, position as usize);
                        anyhow!("XML error at line {}: {}", line, err)
                    })?;
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"location" => {
                    if let Some(builder) = current_message.as_mut()
                        && let Some(reference) = reference_from(&e)?
                    {
                        builder.references.push(reference);
                    }
                }
                b"source" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.source = Some(String::new());
                        builder.span =
                            Some(span_at(file_path, &lines, &line_offsets, reader.buffer_position()));
                    }
                }
                b"translation" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.translation_state = Some(state_from_attr(&e)?);
                        builder.translation_span =
                            Some(span_at(file_path, &lines, &line_offsets, reader.buffer_position()));
                    }
                }
                b"numerusform" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.forms.push(String::new());
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                if capture.is_some() {
                    let unescaped = t.unescape().map_err(|err| {
                        let line = offset_to_line(&line_offsets, position as usize);
                        anyhow!("XML error at line {}: {}", line, err)
                    })?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(t) => {
                if capture.is_some() {
                    text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"name" => {
                    if capture == Some(Capture::ContextName)
                        && let Some(context) = current_context.as_mut()
                    {
                        context.name = std::mem::take(&mut text);
                    }
                    capture = None;
                }
                b"source" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.source = Some(std::mem::take(&mut text));
                    }
                    capture = None;
                }
                b"comment" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.comment = Some(std::mem::take(&mut text));
                    }
                    capture = None;
                }
                b"extracomment" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.extra_comment = Some(std::mem::take(&mut text));
                    }
                    capture = None;
                }
                b"translatorcomment" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.translator_comment = Some(std::mem::take(&mut text));
                    }
                    capture = None;
                }
                b"numerusform" => {
                    if let Some(builder) = current_message.as_mut() {
                        builder.forms.push(std::mem::take(&mut text));
                    }
                    // Back to the surrounding <translation>, dropping the
                    // whitespace between forms
                    capture = Some(Capture::Translation);
                    text.clear();
                }
                b"translation" => {
                    if let Some(builder) = current_message.as_mut()
                        && builder.forms.is_empty()
                    {
                        builder.translation_text = std::mem::take(&mut text);
                    }
                    capture = None;
                }
                b"message" => {
                    if let Some(builder) = current_message.take()
                        && let Some(context) = current_context.as_mut()
                        && let Some(message) = builder.finish()
                    {
                        context.messages.push(message);
                    }
                }
                b"context" => {
                    if let Some(context) = current_context.take() {
                        contexts.push(context);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            // Declaration, doctype, comments, processing instructions
            _ => {}
        }
    }

    let language = language
        .or_else(|| fallback_language.map(str::to_string))
        .or_else(|| language_from_file_name(file_path))
        .unwrap_or_else(|| "en".to_string());

    Ok(Catalog {
        file_path: file_path.to_string(),
        language,
        source_language,
        version,
        contexts,
    })
}

fn attr_value(e: &BytesStart, name: &str) -> Result<Option<String>> {
    let Some(attr) = e.try_get_attribute(name)? else {
        return Ok(None);
    };
    Ok(Some(attr.unescape_value()?.into_owned()))
}

fn state_from_attr(e: &BytesStart) -> Result<TranslationState> {
    Ok(match attr_value(e, "type")?.as_deref() {
        Some("unfinished") => TranslationState::Unfinished,
        Some("vanished") => TranslationState::Vanished,
        Some("obsolete") => TranslationState::Obsolete,
        // No attribute, or a type this tool does not know
        _ => TranslationState::Finished,
    })
}

/// Builds a provenance record from a `<location>` element. Records without
/// a filename (lupdate's relative location mode) are skipped.
fn reference_from(e: &BytesStart) -> Result<Option<SourceReference>> {
    let Some(filename) = attr_value(e, "filename")? else {
        return Ok(None);
    };
    let line = attr_value(e, "line")?.and_then(|value| value.parse().ok());
    Ok(Some(SourceReference {
        file_path: filename,
        line,
    }))
}

fn span_at(file_path: &str, lines: &[&str], line_offsets: &[usize], position: u64) -> CatalogSpan {
    let line = offset_to_line(line_offsets, position as usize);
    let source_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");
    let col = source_line.chars().take_while(|c| c.is_whitespace()).count() + 1;
    CatalogSpan::new(CatalogLocation::new(file_path, line, col), source_line)
}

/// Byte offset of the start of each line.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Converts a byte offset to a 1-based line number.
fn offset_to_line(line_offsets: &[usize], offset: usize) -> usize {
    match line_offsets.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Guesses the language from file names like `client_el.ts` or
/// `client_pt_BR.ts`.
pub fn language_from_file_name(file_path: &str) -> Option<String> {
    let stem = Path::new(file_path).file_stem()?.to_str()?;
    let mut parts: Vec<&str> = stem.split('_').collect();
    if parts.len() < 2 {
        return None;
    }
    let last = parts.pop()?;
    if last.len() == 2 && last.chars().all(|c| c.is_ascii_uppercase()) {
        let language = parts.pop()?;
        if is_language_subtag(language) {
            return Some(format!("{}_{}", language, last));
        }
        return None;
    }
    if is_language_subtag(last) {
        Some(last.to_string())
    } else {
        None
    }
}

fn is_language_subtag(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_lowercase())
}

// ============================================================
// Writing
// ============================================================

/// Serializes a catalog in the layout lupdate emits.
pub fn write_ts(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" ?><!DOCTYPE TS>");
    out.push_str(&format!("<TS language=\"{}\"", escape(&catalog.language)));
    if let Some(source_language) = &catalog.source_language {
        out.push_str(&format!(" sourcelanguage=\"{}\"", escape(source_language)));
    }
    let version = catalog.version.as_deref().unwrap_or("2.1");
    out.push_str(&format!(" version=\"{}\">\n", escape(version)));
    for context in &catalog.contexts {
        out.push_str("<context>\n");
        out.push_str(&format!("    <name>{}</name>\n", escape(&context.name)));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }
    out.push_str("</TS>\n");
    out
}

/// Serializes and writes a catalog back to disk.
pub fn write_ts_file(catalog: &Catalog, file_path: &str) -> Result<()> {
    fs::write(file_path, write_ts(catalog))
        .with_context(|| format!("Failed to write catalog file: {}", file_path))
}

fn write_message(out: &mut String, message: &Message) {
    if message.numerus {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }
    for reference in &message.references {
        match reference.line {
            Some(line) => out.push_str(&format!(
                "        <location filename=\"{}\" line=\"{}\"/>\n",
                escape(&reference.file_path),
                line
            )),
            None => out.push_str(&format!(
                "        <location filename=\"{}\"/>\n",
                escape(&reference.file_path)
            )),
        }
    }
    out.push_str(&format!("        <source>{}</source>\n", escape(&message.source)));
    if let Some(comment) = &message.comment {
        out.push_str(&format!("        <comment>{}</comment>\n", escape(comment)));
    }
    if let Some(extra_comment) = &message.extra_comment {
        out.push_str(&format!(
            "        <extracomment>{}</extracomment>\n",
            escape(extra_comment)
        ));
    }
    if let Some(translator_comment) = &message.translator_comment {
        out.push_str(&format!(
            "        <translatorcomment>{}</translatorcomment>\n",
            escape(translator_comment)
        ));
    }
    write_translation(out, &message.translation);
    out.push_str("    </message>\n");
}

fn write_translation(out: &mut String, translation: &Translation) {
    let type_attr = match translation.state.type_attr() {
        Some(value) => format!(" type=\"{}\"", value),
        None => String::new(),
    };
    match &translation.value {
        TranslationValue::Text(text) if text.is_empty() && !type_attr.is_empty() => {
            out.push_str(&format!("        <translation{}/>\n", type_attr));
        }
        TranslationValue::Text(text) => {
            out.push_str(&format!(
                "        <translation{}>{}</translation>\n",
                type_attr,
                escape(text)
            ));
        }
        TranslationValue::Forms(forms) if forms.is_empty() && !type_attr.is_empty() => {
            out.push_str(&format!("        <translation{}/>\n", type_attr));
        }
        TranslationValue::Forms(forms) => {
            out.push_str(&format!("        <translation{}>", type_attr));
            for form in forms {
                out.push_str(&format!("<numerusform>{}</numerusform>", escape(form)));
            }
            out.push_str("</translation>\n");
        }
    }
}
