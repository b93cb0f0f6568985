
use std::sync::Arc;

use zap_core::dict::{SnippetEntry, SnippetIndex};

use super::{KeyEvent, KeyResponse, ZapSession};

fn entry(word: &str, name: &str, tags: &[&str], chars: &[char]) -> SnippetEntry {
    SnippetEntry {
        word: word.to_string(),
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        chars: chars.to_vec(),
    }
}

pub(super) fn make_test_index() -> Arc<SnippetIndex> {
    let entries = vec![
        entry("π", "pi", &["greek", "math", "letter"], &['p']),
        entry("Σ", "sigma", &["greek", "math", "sum"], &['s']),
        entry("λ", "lambda", &["greek", "letter", "function"], &['l']),
    ];
    Arc::new(SnippetIndex::build(entries).unwrap())
}

pub(super) fn make_session() -> ZapSession {
    ZapSession::new(make_test_index())
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut ZapSession, s: &str) -> Vec<KeyResponse> {
    let mut responses = Vec::new();
    for ch in s.chars() {
        let resp = session.handle_key(KeyEvent::text(&ch.to_string()));
        responses.push(resp);
    }
    responses
}
