use std::collections::BTreeMap;

use serde::Deserialize;

use super::SnippetEntry;

#[derive(Debug, thiserror::Error)]
pub enum DictConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("snippet '{word}' has an empty name")]
    EmptyName { word: String },
    #[error("snippet '{word}': chars value '{value}' must be a single character")]
    NotSingleChar { word: String, value: String },
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    chars: Vec<String>,
}

/// Parse a snippet dictionary TOML file (one table per snippet):
///
/// ```toml
/// ["π"]
/// name = "pi"
/// tags = ["greek", "math", "letter"]
/// chars = ["p"]
/// ```
///
/// `name` is required and non-empty; `tags` and `chars` default to empty.
/// Entries come back in key order so index construction is deterministic.
pub fn parse_dictionary_toml(toml_str: &str) -> Result<Vec<SnippetEntry>, DictConfigError> {
    let table: BTreeMap<String, RawEntry> =
        toml::from_str(toml_str).map_err(|e| DictConfigError::Parse(e.to_string()))?;

    let mut entries = Vec::with_capacity(table.len());
    for (word, raw) in table {
        if raw.name.is_empty() {
            return Err(DictConfigError::EmptyName { word });
        }
        let mut chars = Vec::with_capacity(raw.chars.len());
        for value in raw.chars {
            let mut it = value.chars();
            match (it.next(), it.next()) {
                (Some(ch), None) => chars.push(ch),
                _ => return Err(DictConfigError::NotSingleChar { word, value }),
            }
        }
        entries.push(SnippetEntry {
            word,
            name: raw.name,
            tags: raw.tags,
            chars,
        });
    }
    Ok(entries)
}
