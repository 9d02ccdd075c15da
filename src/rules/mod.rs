//! Rule implementations for glossa.
//!
//! This module contains pure functions that check parsed catalogs for
//! issues. Each `check_*` function takes only the inputs it needs (a
//! catalog and the ignored context names) and returns a specific issue
//! type; the `check_*_issues` wrappers run a rule over every catalog in
//! a `CheckContext`.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared utility functions (context skipping, accelerators, punctuation)
//! - `duplicate`: Duplicated (source, comment) keys within a context
//! - `plural_forms`: Numerus form counts against the language's plural rule
//! - `placeholders`: Placeholder sets between source and translation
//! - `empty`: Finished translations with no text
//! - `unfinished`: Messages still awaiting translation
//! - `obsolete`: Vanished and obsolete messages
//! - `accelerator`: Keyboard accelerators lost or invented in translation
//! - `punctuation`: Trailing punctuation drift

pub mod accelerator;
pub mod duplicate;
pub mod empty;
pub mod helpers;
pub mod obsolete;
pub mod placeholders;
pub mod plural_forms;
pub mod punctuation;
pub mod unfinished;

// Re-export the helpers rules share
pub use helpers::should_skip_context;
