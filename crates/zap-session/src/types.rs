use zap_core::resolver::Resolution;

/// Key events delivered by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Printable text appended to the input buffer.
    Text { text: String },
    Backspace,
    /// Tab / Right.
    CycleForward,
    /// Shift-Tab / Left.
    CycleBackward,
    Enter,
    Escape,
    ShiftDown,
    ShiftUp,
}

impl KeyEvent {
    pub fn text(s: &str) -> Self {
        KeyEvent::Text {
            text: s.to_string(),
        }
    }
}

/// Candidate panel action — exactly one of three states, so "show" and
/// "hide" can never both be requested.
pub enum CandidateAction {
    /// Leave the panel as-is.
    Keep,
    /// Show or update the panel with these surfaces.
    Show { surfaces: Vec<String>, selected: u32 },
    /// Hide the panel.
    Hide,
}

/// Response from `handle_key`, returned to the caller.
pub struct KeyResponse {
    pub consumed: bool,
    /// Terminal output of the session, set on submit.
    pub commit: Option<String>,
    pub candidates: CandidateAction,
    /// The session ended (submit or cancel); the caller should tear down.
    pub finished: bool,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            commit: None,
            candidates: CandidateAction::Keep,
            finished: false,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}

/// Ranked candidates plus the selection cursor.
#[derive(Debug, Default)]
pub struct MatchSet {
    pub primary: Vec<String>,
    pub shifted: Vec<String>,
    pub selected: usize,
}

impl MatchSet {
    pub(crate) fn from_resolution(r: Resolution) -> Self {
        Self {
            primary: r.primary,
            shifted: r.shifted,
            selected: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub(crate) fn clear(&mut self) {
        self.primary.clear();
        self.shifted.clear();
        self.selected = 0;
    }

    /// Candidate at the cursor, in the shifted or primary form.
    pub fn current(&self, shift_held: bool) -> Option<&str> {
        let list = if shift_held {
            &self.shifted
        } else {
            &self.primary
        };
        list.get(self.selected).map(String::as_str)
    }
}

pub(crate) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i32;
    let n = count as i32;
    ((c + delta + n) % n) as usize
}
