//! Ranking policy for tag and character scoring.
//!
//! Candidates are ordered by ascending hit count, ties broken by the order
//! in which they first scored (which follows dictionary entry order through
//! the index buckets). Ascending order keeps the weakest matches inside the
//! cap; that is the long-standing ranking the rest of the pipeline expects,
//! so any change of direction happens in `ranked` and nowhere else.

pub(super) struct ScoreBoard {
    counts: Vec<(String, u32)>,
}

impl ScoreBoard {
    pub(super) fn new() -> Self {
        Self { counts: Vec::new() }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub(super) fn len(&self) -> usize {
        self.counts.len()
    }

    /// Insert-or-increment for one candidate hit.
    pub(super) fn bump(&mut self, word: &str) {
        match self.counts.iter_mut().find(|(w, _)| w == word) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((word.to_string(), 1)),
        }
    }

    /// Rank candidates and keep at most `cap`.
    pub(super) fn ranked(mut self, cap: usize) -> Vec<String> {
        // Stable sort: equal counts keep first-scored order.
        self.counts.sort_by_key(|&(_, n)| n);
        self.counts.truncate(cap);
        self.counts.into_iter().map(|(w, _)| w).collect()
    }
}
