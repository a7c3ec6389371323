//! # Pagination Window
//!
//! Decides which page buttons the pagination bar shows.
//!
//! ## Windowing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total = 10, max_visible = 5                                            │
//! │                                                                         │
//! │  current = 1   →  [1] 2  3  4  5  …  10                                 │
//! │  current = 5   →   1  …  3  4 [5] 6  7  …  10                           │
//! │  current = 10  →   1  …  6  7  8  9 [10]                                │
//! │                                                                         │
//! │  The window is centred on the current page, slides back when it hits   │
//! │  the last page, and is framed by the first/last page plus ellipses.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One slot in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Computes the visible page slots.
///
/// `max_visible` below 1 is treated as 1.
///
/// ## Example
/// ```rust
/// use paper_core::pagination::{page_items, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_items(5, 10, 5),
///     vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_items(current: u32, total: u32, max_visible: u32) -> Vec<PageItem> {
    let max_visible = max_visible.max(1);

    if total <= max_visible {
        return (1..=total).map(PageItem::Page).collect();
    }

    let (current, total, window) = (i64::from(current), i64::from(total), i64::from(max_visible));
    let mut start = (current - window / 2).max(1);
    let end = (start + window - 1).min(total);
    if end == total {
        start = (end - window + 1).max(1);
    }

    let mut items = Vec::with_capacity(max_visible as usize + 4);
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(|page| PageItem::Page(page as u32)));
    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total as u32));
    }
    items
}

// =============================================================================
// Pagination
// =============================================================================

/// A controlled pagination bar.
///
/// The host owns the current page; requests return the page to switch to,
/// or `None` when the request would be a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub max_visible_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            current_page: 1,
            total_pages: 1,
            max_visible_pages: 5,
        }
    }
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Pagination {
            current_page,
            total_pages,
            ..Pagination::default()
        }
    }

    pub fn with_max_visible(self, max_visible_pages: u32) -> Self {
        Pagination {
            max_visible_pages,
            ..self
        }
    }

    /// Visible slots for the current state.
    pub fn items(&self) -> Vec<PageItem> {
        page_items(self.current_page, self.total_pages, self.max_visible_pages)
    }

    /// Returns `Some(page)` if it exists and differs from the current page.
    pub fn request_page(&self, page: u32) -> Option<u32> {
        (page >= 1 && page <= self.total_pages && page != self.current_page).then_some(page)
    }

    pub fn first(&self) -> Option<u32> {
        self.request_page(1)
    }

    pub fn prev(&self) -> Option<u32> {
        self.current_page
            .checked_sub(1)
            .and_then(|page| self.request_page(page))
    }

    pub fn next(&self) -> Option<u32> {
        self.current_page
            .checked_add(1)
            .and_then(|page| self.request_page(page))
    }

    pub fn last(&self) -> Option<u32> {
        self.request_page(self.total_pages)
    }

    /// Applies an accepted page change.
    pub fn go_to(&mut self, page: u32) -> Option<u32> {
        let accepted = self.request_page(page)?;
        self.current_page = accepted;
        Some(accepted)
    }
}
