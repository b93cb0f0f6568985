//! Multi-strategy snippet resolution.
//!
//! Four strategies in decreasing specificity: exact literal, exact name,
//! tag scoring, character scoring. The first strategy that yields anything
//! short-circuits the rest. Tag and char hits are ranked by the policy in
//! `rank`; every candidate is case-adapted per `CaseStyle`.

mod case;
mod rank;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use tracing::debug;

use crate::dict::SnippetIndex;

pub use case::CaseStyle;

/// Hard cap on the ranked candidate list.
pub const MAX_MATCHES: usize = 10;

/// Ranked candidates in both case-adapted forms.
///
/// The lists are parallel: `shifted[i]` is the forced-uppercase form of the
/// word behind `primary[i]`.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub primary: Vec<String>,
    pub shifted: Vec<String>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    fn from_words<I, S>(words: I, style: CaseStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut primary = Vec::new();
        let mut shifted = Vec::new();
        for word in words {
            let (p, s) = style.adapt(word.as_ref());
            primary.push(p);
            shifted.push(s);
        }
        Self { primary, shifted }
    }
}

/// Resolve raw input into ranked candidates.
///
/// Pure and total: empty or whitespace-only input yields an empty
/// `Resolution`, never an error. The index is only read.
pub fn resolve(raw_input: &str, index: &SnippetIndex) -> Resolution {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Resolution::default();
    }

    // Case style comes from the untrimmed input, leading whitespace included.
    let style = CaseStyle::classify(raw_input);
    let folded = trimmed.to_lowercase();

    if let Some(word) = index.exact_lookup(&folded) {
        debug!(word, "exact match");
        return Resolution::from_words([word], style);
    }

    if let Some(word) = index.name_lookup(&folded) {
        debug!(word, "name match");
        return Resolution::from_words([word], style);
    }

    let words: Vec<&str> = folded.split_whitespace().collect();

    // Tag pass: each distinct input word scores once per tagged entry.
    let mut board = rank::ScoreBoard::new();
    let mut seen_words = HashSet::new();
    for &word in &words {
        if !seen_words.insert(word) {
            continue;
        }
        if let Some(bucket) = index.tag_bucket(word) {
            for candidate in bucket {
                board.bump(candidate);
            }
        }
    }
    if !board.is_empty() {
        debug!(matches = board.len(), "tag match");
        return Resolution::from_words(board.ranked(MAX_MATCHES), style);
    }

    // Char pass: each character contributes at most once across the whole
    // input, not once per word.
    let mut board = rank::ScoreBoard::new();
    let mut consumed = HashSet::new();
    for &word in &words {
        for ch in word.chars() {
            if !consumed.insert(ch) {
                continue;
            }
            if let Some(bucket) = index.char_bucket(ch) {
                for candidate in bucket {
                    board.bump(candidate);
                }
            }
        }
    }
    if !board.is_empty() {
        debug!(matches = board.len(), "char match");
        return Resolution::from_words(board.ranked(MAX_MATCHES), style);
    }

    Resolution::default()
}
