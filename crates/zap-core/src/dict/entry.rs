use serde::{Deserialize, Serialize};

/// One dictionary record: a canonical word plus its lookup aliases.
///
/// Entries are immutable after parsing; the index owns them for the rest of
/// the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetEntry {
    /// Canonical output string, case-preserving, unique per dictionary.
    pub word: String,
    /// Human-readable alias that retrieves the word when typed exactly.
    pub name: String,
    /// Whole-word aliases that score toward this entry.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Individual characters that score toward this entry.
    #[serde(default)]
    pub chars: Vec<char>,
}
