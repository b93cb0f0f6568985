use std::collections::HashMap;

use super::{DictError, SnippetEntry};

/// Derived lookup structures over the snippet dictionary.
///
/// Built once after the dictionary is parsed and read-only afterwards, so
/// concurrent resolution calls never race on it. Tag and char buckets keep
/// entry insertion order; score ties in the resolver rank by that order
/// rather than by candidate name, and this is what makes them reproducible.
#[derive(Debug)]
pub struct SnippetIndex {
    entries: Vec<SnippetEntry>,
    /// lower(word) -> word
    exact: HashMap<String, String>,
    /// lower(name) -> word
    names: HashMap<String, String>,
    tags: HashMap<String, Vec<String>>,
    chars: HashMap<char, Vec<String>>,
}

impl SnippetIndex {
    /// Build the index from parsed entries, in iteration order.
    ///
    /// Later entries silently overwrite earlier ones in the exact and name
    /// maps (last write wins); tag and char buckets accumulate. An entry
    /// with an empty name aborts construction.
    pub fn build(entries: Vec<SnippetEntry>) -> Result<Self, DictError> {
        let mut index = Self {
            entries: Vec::new(),
            exact: HashMap::new(),
            names: HashMap::new(),
            tags: HashMap::new(),
            chars: HashMap::new(),
        };

        for entry in &entries {
            if entry.name.is_empty() {
                return Err(DictError::InvalidEntry {
                    word: entry.word.clone(),
                });
            }

            index
                .exact
                .insert(entry.word.to_lowercase(), entry.word.clone());
            index
                .names
                .insert(entry.name.to_lowercase(), entry.word.clone());

            for tag in &entry.tags {
                let bucket = index.tags.entry(tag.clone()).or_default();
                if !bucket.contains(&entry.word) {
                    bucket.push(entry.word.clone());
                }
            }
            for &ch in &entry.chars {
                let bucket = index.chars.entry(ch).or_default();
                if !bucket.contains(&entry.word) {
                    bucket.push(entry.word.clone());
                }
            }
        }

        index.entries = entries;
        Ok(index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[SnippetEntry] {
        &self.entries
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    pub(crate) fn exact_lookup(&self, folded: &str) -> Option<&str> {
        self.exact.get(folded).map(String::as_str)
    }

    pub(crate) fn name_lookup(&self, folded: &str) -> Option<&str> {
        self.names.get(folded).map(String::as_str)
    }

    pub(crate) fn tag_bucket(&self, tag: &str) -> Option<&[String]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    pub(crate) fn char_bucket(&self, ch: char) -> Option<&[String]> {
        self.chars.get(&ch).map(Vec::as_slice)
    }

    // Stats for diagnostics (`zap check`).

    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn char_count(&self) -> usize {
        self.chars.len()
    }
}
