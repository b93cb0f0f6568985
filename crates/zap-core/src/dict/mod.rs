//! Snippet dictionary storage.
//!
//! `SnippetEntry` is one parsed dictionary record. `SnippetIndex` owns the
//! entries plus the four derived lookup maps the resolver reads: exact word,
//! exact name, tag buckets, and character buckets.

mod config;
mod entry;
mod index;

pub use config::{parse_dictionary_toml, DictConfigError};
pub use entry::SnippetEntry;
pub use index::SnippetIndex;

/// Construction-time errors for `SnippetIndex::build`.
///
/// Resolution itself never fails; an empty result is ordinary data.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("snippet '{word}' has an empty name")]
    InvalidEntry { word: String },
}
