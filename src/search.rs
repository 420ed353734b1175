//! Search controller: raw input text plus the debounced committed term.
//!
//! `raw_text` tracks every keystroke so the input box never lags;
//! `committed_term` is what the filter engine actually sees, and moves
//! only after a quiet period or an explicit clear.

use std::time::{Duration, Instant};

use crate::debounce::Debounce;

/// Search input state driving the filter engine
#[derive(Debug, Clone)]
pub struct SearchController {
    raw_text: String,
    committed_term: String,
    pending: Debounce<String>,
}

impl SearchController {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw_text: String::new(),
            committed_term: String::new(),
            pending: Debounce::new(delay),
        }
    }

    /// The text currently shown in the input box
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The term the filter engine filters by
    pub fn committed_term(&self) -> &str {
        &self.committed_term
    }

    pub fn has_pending_commit(&self) -> bool {
        self.pending.is_pending()
    }

    /// Record a keystroke: the raw text changes synchronously, the commit
    /// is (re)scheduled for `now + delay`. Only the last call in a burst
    /// within the delay window commits.
    pub fn set_raw_text(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.raw_text = text.clone();
        self.pending.schedule(now, text);
    }

    /// Fire an elapsed commit. Returns true when the committed term
    /// actually changed, i.e. the filter must recompute.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending.poll(now) {
            Some(term) if term != self.committed_term => {
                self.committed_term = term;
                true
            }
            _ => false,
        }
    }

    /// Reset to empty, synchronously. Cancels the pending commit first so
    /// a commit scheduled before the clear can never fire after it.
    /// Returns true when the committed term changed.
    pub fn clear(&mut self) -> bool {
        self.pending.cancel();
        self.raw_text.clear();
        if self.committed_term.is_empty() {
            return false;
        }
        self.committed_term.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn raw_text_updates_synchronously() {
        let base = Instant::now();
        let mut search = SearchController::new(DELAY);

        search.set_raw_text("ro", at(base, 0));
        assert_eq!(search.raw_text(), "ro");
        assert_eq!(search.committed_term(), "");
        assert!(search.has_pending_commit());
    }

    #[test]
    fn commit_lands_after_the_quiet_period() {
        let base = Instant::now();
        let mut search = SearchController::new(DELAY);

        search.set_raw_text("ro", at(base, 0));
        assert!(!search.poll(at(base, 299)));
        assert_eq!(search.committed_term(), "");

        assert!(search.poll(at(base, 300)));
        assert_eq!(search.committed_term(), "ro");
        assert!(!search.has_pending_commit());
    }

    #[test]
    fn burst_commits_only_the_final_text() {
        let base = Instant::now();
        let mut search = SearchController::new(DELAY);

        search.set_raw_text("r", at(base, 0));
        search.set_raw_text("ro", at(base, 50));
        search.set_raw_text("roh", at(base, 100));
        search.set_raw_text("roha", at(base, 150));

        assert!(!search.poll(at(base, 400)));
        assert!(search.poll(at(base, 450)));
        assert_eq!(search.committed_term(), "roha");
    }

    #[test]
    fn clear_is_immediate_and_kills_the_pending_commit() {
        let base = Instant::now();
        let mut search = SearchController::new(DELAY);

        search.set_raw_text("ga", at(base, 0));
        assert!(search.poll(at(base, 300)));
        assert_eq!(search.committed_term(), "ga");

        search.set_raw_text("gau", at(base, 400));
        assert!(search.clear());
        assert_eq!(search.raw_text(), "");
        assert_eq!(search.committed_term(), "");
        assert!(!search.has_pending_commit());

        // The commit scheduled at t=400 must never land.
        assert!(!search.poll(at(base, 10_000)));
        assert_eq!(search.committed_term(), "");
    }

    #[test]
    fn clear_of_an_already_empty_search_reports_no_change() {
        let mut search = SearchController::new(DELAY);
        assert!(!search.clear());
    }

    #[test]
    fn committing_the_same_term_twice_reports_no_change() {
        let base = Instant::now();
        let mut search = SearchController::new(DELAY);

        search.set_raw_text("ra", at(base, 0));
        assert!(search.poll(at(base, 300)));

        // Retyping the identical text commits the same term again.
        search.set_raw_text("ra", at(base, 400));
        assert!(!search.poll(at(base, 700)));
        assert_eq!(search.committed_term(), "ra");
    }
}
