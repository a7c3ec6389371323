//! # Session Page Tracker
//!
//! Decides which page-view, scroll-depth and click events a showcase
//! session should record. Delivery to analytics providers is out of scope;
//! the tracker only answers "is this new?".
//!
//! ## Lifetime
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session start ─► SessionTracker::new()                                 │
//! │                      │                                                  │
//! │  enter "/docs" ──────┤ record_page_view("/docs") → true                 │
//! │  re-render ──────────┤ record_page_view("/docs") → false                │
//! │  scroll to 60% ──────┤ record_scroll("/docs", 60) → [25, 50]            │
//! │  scroll to 80% ──────┤ record_scroll("/docs", 80) → [75]                │
//! │                      │                                                  │
//! │  route change ───────┤ end_route()  (pages + milestones forgotten)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tracker is owned by the session and passed by reference. There is no
//! process-wide set.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Scroll-depth percentages worth recording.
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// Clicks closer together than this are treated as one.
pub const CLICK_DEBOUNCE_MS: u64 = 500;

/// Per-session record of what has already been reported.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    tracked_pages: HashSet<String>,
    milestones: HashMap<String, BTreeSet<u8>>,
    last_click_ms: Option<u64>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `page` is seen on the current route.
    pub fn record_page_view(&mut self, page: &str) -> bool {
        self.tracked_pages.insert(page.to_string())
    }

    pub fn has_tracked(&self, page: &str) -> bool {
        self.tracked_pages.contains(page)
    }

    /// Returns the milestones newly reached at `percent`, in ascending order.
    pub fn record_scroll(&mut self, page: &str, percent: u8) -> Vec<u8> {
        let reached = self.milestones.entry(page.to_string()).or_default();
        SCROLL_MILESTONES
            .into_iter()
            .filter(|milestone| percent >= *milestone && reached.insert(*milestone))
            .collect()
    }

    /// Returns false for a click inside the debounce window of the last
    /// accepted click.
    pub fn record_click(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_click_ms {
            if now_ms.saturating_sub(last) < CLICK_DEBOUNCE_MS {
                return false;
            }
        }
        self.last_click_ms = Some(now_ms);
        true
    }

    /// Forgets pages and milestones recorded on the route being left.
    pub fn end_route(&mut self) {
        self.tracked_pages.clear();
        self.milestones.clear();
    }
}

/// Scroll depth as a whole percentage of the scrollable height.
///
/// A page with nothing to scroll counts as fully read.
pub fn scroll_percent(offset: f64, scrollable_height: f64) -> u8 {
    if scrollable_height <= 0.0 {
        return 100;
    }
    (offset / scrollable_height * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_recorded_once_per_route() {
        let mut tracker = SessionTracker::new();
        assert!(tracker.record_page_view("/docs"));
        assert!(!tracker.record_page_view("/docs"));
        assert!(tracker.record_page_view("/about"));

        tracker.end_route();
        assert!(!tracker.has_tracked("/docs"));
        assert!(tracker.record_page_view("/docs"));
    }

    #[test]
    fn test_scroll_milestones_reported_once() {
        let mut tracker = SessionTracker::new();
        assert_eq!(tracker.record_scroll("/docs", 10), Vec::<u8>::new());
        assert_eq!(tracker.record_scroll("/docs", 60), vec![25, 50]);
        assert_eq!(tracker.record_scroll("/docs", 55), Vec::<u8>::new());
        assert_eq!(tracker.record_scroll("/docs", 100), vec![75, 100]);
        assert_eq!(tracker.record_scroll("/about", 30), vec![25]);
    }

    #[test]
    fn test_click_debounce() {
        let mut tracker = SessionTracker::new();
        assert!(tracker.record_click(1_000));
        assert!(!tracker.record_click(1_200));
        assert!(tracker.record_click(1_500));
        assert!(!tracker.record_click(1_999));
    }

    #[test]
    fn test_scroll_percent() {
        assert_eq!(scroll_percent(0.0, 1000.0), 0);
        assert_eq!(scroll_percent(505.0, 1000.0), 51);
        assert_eq!(scroll_percent(2000.0, 1000.0), 100);
        assert_eq!(scroll_percent(10.0, 0.0), 100);
    }
}
