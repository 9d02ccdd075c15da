//! Translation catalog engine.
//!
//! Everything that understands Qt Linguist catalogs lives here: the data
//! model, the `.ts` reader and writer, plural rules, format placeholders,
//! message lookup and file discovery.
//!
//! ## Module Structure
//!
//! - `model`: Parsed catalog data types (`Catalog`, `Message`, ...)
//! - `ts`: Reading and writing `.ts` files
//! - `plurals`: Per-language plural rules and form selection
//! - `format`: Qt format placeholders (`%1`, `%n`) and substitution
//! - `lookup`: `Translator` resolving messages with fallback
//! - `scan`: Catalog file discovery under a root directory
//! - `context`: Shared `CheckContext` used by commands and the MCP server

pub mod context;
pub mod format;
pub mod lookup;
pub mod model;
pub mod plurals;
pub mod scan;
pub mod ts;

pub use context::CheckContext;
pub use model::{
    Catalog, CatalogLocation, CatalogSpan, Message, SourceReference, Translation,
    TranslationContext, TranslationState, TranslationValue,
};
