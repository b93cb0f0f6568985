use tracing::debug_span;

use super::response::{build_candidate_selection, build_candidates};
use super::types::{cyclic_index, CandidateAction, KeyEvent, KeyResponse};
use super::ZapSession;

impl ZapSession {
    /// Move the selection cursor by `delta` (1 = next, -1 = previous),
    /// wrapping around. No-op when there are no matches.
    fn navigate(&mut self, delta: i32) -> KeyResponse {
        if self.matches.is_empty() {
            return KeyResponse::consumed();
        }
        self.matches.selected = cyclic_index(self.matches.selected, delta, self.matches.len());
        build_candidate_selection(self)
    }

    /// Process a key event. Returns a KeyResponse describing what the caller
    /// should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::ShiftDown => {
                self.shift_held = true;
                if self.matches.is_empty() {
                    KeyResponse::consumed()
                } else {
                    build_candidate_selection(self)
                }
            }

            KeyEvent::ShiftUp => {
                self.shift_held = false;
                if self.matches.is_empty() {
                    KeyResponse::consumed()
                } else {
                    build_candidate_selection(self)
                }
            }

            KeyEvent::Text { ref text } => {
                self.input.push_str(text);
                self.update_matches();
                build_candidates(self)
            }

            KeyEvent::Backspace => {
                self.input.pop();
                self.update_matches();
                build_candidates(self)
            }

            KeyEvent::CycleForward => self.navigate(1),

            KeyEvent::CycleBackward => self.navigate(-1),

            KeyEvent::Enter => {
                let mut resp = KeyResponse::consumed();
                // Enter with no matches is a no-op: the session stays alive
                // rather than ending with nothing to show for it.
                if let Some(text) = self.submit(self.shift_held) {
                    resp.commit = Some(text);
                    resp.candidates = CandidateAction::Hide;
                    resp.finished = true;
                }
                resp
            }

            KeyEvent::Escape => {
                self.cancel();
                let mut resp = KeyResponse::consumed();
                resp.candidates = CandidateAction::Hide;
                resp.finished = true;
                resp
            }
        }
    }
}
