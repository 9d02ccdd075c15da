//! Glossa - Qt Linguist catalog checker and query tool
//!
//! Glossa is a CLI tool and library for working with Qt Linguist translation
//! catalogs (`.ts` files). It checks catalogs for translation issues such as
//! missing plural forms, placeholder mismatches and unfinished entries, and it
//! can resolve messages the way a running application would, including plural
//! selection and argument substitution.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model, TS parsing/writing, plural rules, lookup
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Check rules for catalog issues
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
