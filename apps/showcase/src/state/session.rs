//! # Session State
//!
//! Owns the session id, the current page and the [`SessionTracker`] for
//! one showcase run.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "page /docs"    ──► record_page_view("/docs")     (same route)         │
//! │  "route /about"  ──► end_route() + record_page_view("/about")           │
//! │  "scroll 600 1000" ► record_scroll(current_page, 60%)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use paper_core::session::{scroll_percent, SessionTracker};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug)]
struct Inner {
    tracker: SessionTracker,
    current_page: String,
}

/// One showcase session.
#[derive(Debug)]
pub struct SessionState {
    id: Uuid,
    inner: Mutex<Inner>,
}

impl SessionState {
    /// Starts a session on `page` and records the first page view.
    pub fn new(page: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        let page = page.into();
        info!(session_id = %id, page = %page, "Session started");

        let session = SessionState {
            id,
            inner: Mutex::new(Inner {
                tracker: SessionTracker::new(),
                current_page: page.clone(),
            }),
        };
        session.page_view(&page);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_page(&self) -> String {
        self.with_inner(|inner| inner.current_page.clone())
    }

    /// Records a page view on the current route; true if it was new.
    pub fn page_view(&self, page: &str) -> bool {
        let recorded = self.with_inner(|inner| {
            inner.current_page = page.to_string();
            inner.tracker.record_page_view(page)
        });
        if recorded {
            info!(session_id = %self.id, page, "Page view recorded");
        } else {
            debug!(session_id = %self.id, page, "Page view already recorded");
        }
        recorded
    }

    /// Leaves the current route and records a view of `page`.
    pub fn navigate(&self, page: &str) -> bool {
        debug!(session_id = %self.id, to = page, "Route ended");
        self.with_inner(|inner| inner.tracker.end_route());
        self.page_view(page)
    }

    /// Records a scroll position on the current page and returns newly
    /// reached milestones.
    pub fn scroll(&self, offset: f64, scrollable_height: f64) -> Vec<u8> {
        let percent = scroll_percent(offset, scrollable_height);
        let (page, reached) = self.with_inner(|inner| {
            let reached = inner.tracker.record_scroll(&inner.current_page, percent);
            (inner.current_page.clone(), reached)
        });
        for milestone in &reached {
            info!(session_id = %self.id, page = %page, milestone, "Scroll milestone reached");
        }
        reached
    }

    /// Records a click at `now_ms`; returns false if debounced.
    pub fn click(&self, now_ms: u64) -> bool {
        self.with_inner(|inner| inner.tracker.record_click(now_ms))
    }

    fn with_inner<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Inner) -> R,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }
}
