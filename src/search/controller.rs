//! Turns keystrokes into a settled search query.

use super::debounce::Debouncer;
use std::time::{Duration, Instant};
use tracing::debug;

/// Debounced search input.
///
/// Every keystroke updates the raw text immediately and restarts the idle
/// timer; the query only settles once the text has been left alone for the
/// configured delay.
#[derive(Clone, Debug)]
pub struct SearchController {
    raw_text: String,
    timer: Debouncer<String>,
}

impl SearchController {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw_text: String::new(),
            timer: Debouncer::new(delay),
        }
    }

    /// The text as typed, shown back in the search box.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Record new raw input at `now`.
    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        self.raw_text = text.into();
        self.timer.schedule(self.raw_text.clone(), now);
        debug!(text = %self.raw_text, "search input scheduled");
    }

    /// Return the settled query once the idle delay has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let settled = normalize_query(&self.timer.poll(now)?);
        debug!(query = %settled, "search query settled");
        Some(settled)
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// When the pending input settles, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }
}

/// Trim and lowercase search text.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_once_after_last_input() {
        let t0 = Instant::now();
        let mut search = SearchController::new(Duration::from_millis(500));

        search.on_input("Mou", t0);
        search.on_input("  Mouse ", t0 + Duration::from_millis(100));
        assert_eq!(search.raw_text(), "  Mouse ");

        assert_eq!(search.poll(t0 + Duration::from_millis(500)), None);
        assert_eq!(
            search.poll(t0 + Duration::from_millis(600)),
            Some("mouse".to_string())
        );
        assert_eq!(search.poll(t0 + Duration::from_millis(1200)), None);
    }

    #[test]
    fn test_cancel_keeps_raw_text() {
        let t0 = Instant::now();
        let mut search = SearchController::new(Duration::from_millis(500));
        search.on_input("desk", t0);
        search.cancel();
        assert!(!search.is_pending());
        assert_eq!(search.raw_text(), "desk");
        assert_eq!(search.poll(t0 + Duration::from_secs(1)), None);
    }
}
