//! Stateful snippet-picker session: input buffer, candidate selection, and
//! key handling.
//!
//! `ZapSession` owns the current editing state and processes each key event,
//! returning responses the front end translates into rendering and the final
//! committed string.

mod key_handlers;
mod response;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use zap_core::dict::SnippetIndex;
use zap_core::resolver;

pub use types::{CandidateAction, KeyEvent, KeyResponse, MatchSet};

/// Stateful snippet session encapsulating all input processing logic.
///
/// Single-threaded and synchronous: each key event runs at most one full
/// resolver pass before the next event is accepted.
pub struct ZapSession {
    index: Arc<SnippetIndex>,
    input: String,
    matches: MatchSet,
    /// Tracked from ShiftDown/ShiftUp events; selects which parallel list
    /// (primary vs shifted) submit and rendering read.
    shift_held: bool,
}

impl ZapSession {
    pub fn new(index: Arc<SnippetIndex>) -> Self {
        Self {
            index,
            input: String::new(),
            matches: MatchSet::default(),
            shift_held: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    pub fn shift_held(&self) -> bool {
        self.shift_held
    }

    /// Re-resolve from the current input buffer.
    ///
    /// The previous match set and cursor are discarded wholesale; selection
    /// restarts at 0. There is no incremental diffing.
    pub(crate) fn update_matches(&mut self) {
        let resolution = resolver::resolve(&self.input, &self.index);
        self.matches = MatchSet::from_resolution(resolution);
    }

    /// Take the current candidate in the requested form and end the
    /// resolution state.
    ///
    /// Returns `None` when there is nothing to submit; never a stale
    /// candidate from a previous resolution.
    pub fn submit(&mut self, shift_held: bool) -> Option<String> {
        let out = self.matches.current(shift_held).map(str::to_string);
        if out.is_some() {
            self.reset();
        }
        out
    }

    /// Discard all session state without producing output.
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub(crate) fn reset(&mut self) {
        self.input.clear();
        self.matches.clear();
        self.shift_held = false;
    }
}
