use super::types::{CandidateAction, KeyResponse};
use super::ZapSession;

pub(super) fn build_candidates(session: &ZapSession) -> KeyResponse {
    let mut resp = KeyResponse::consumed();
    resp.candidates = if session.matches.is_empty() {
        CandidateAction::Hide
    } else {
        CandidateAction::Show {
            surfaces: display_surfaces(session),
            selected: session.matches.selected as u32,
        }
    };
    resp
}

pub(super) fn build_candidate_selection(session: &ZapSession) -> KeyResponse {
    let mut resp = KeyResponse::consumed();
    resp.candidates = CandidateAction::Show {
        surfaces: display_surfaces(session),
        selected: session.matches.selected as u32,
    };
    resp
}

/// Surfaces in the form the current shift state selects.
fn display_surfaces(session: &ZapSession) -> Vec<String> {
    if session.shift_held {
        session.matches.shifted.clone()
    } else {
        session.matches.primary.clone()
    }
}
