//! # paper-core: Headless Logic for the Paper Kit Components
//!
//! This crate holds the state and arithmetic behind the component library's
//! interactive widgets. Rendering, styling and event wiring live in the host.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Paper Kit Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host (showcase app, UI shell)                   │   │
//! │  │    input field ──► popover ──► calendar grid ──► time dial      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / transitions                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ paper-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ calendar  │  │  picker   │  │  format   │  │ pagination│  │   │
//! │  │   │ 42-cell   │  │ DatePicker│  │  locale   │  │   menu    │  │   │
//! │  │   │   grid    │  │ Transition│  │  names    │  │  session  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • CLOCK INJECTED                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] - Month arithmetic and the 6×7 grid
//! - [`picker`] - The date picker state machine
//! - [`format`] - Date/time formatting and localized names
//! - [`types`] - Shared value types (cells, bounds, time of day)
//! - [`clock`] - Injectable "now"
//! - [`pagination`] - Page window for the pagination bar
//! - [`menu`] - Parent-owned menu selection
//! - [`session`] - Page-view and scroll-milestone bookkeeping
//! - [`error`] - Error types
//!
//! ## Conventions
//!
//! Months are zero-based everywhere in this crate (0 = January). Weekdays
//! count from Sunday = 0.
//!
//! ## Example Usage
//!
//! ```rust
//! use paper_core::calendar::build_grid;
//! use paper_core::DateBounds;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let cells = build_grid(2024, 2, None, DateBounds::unbounded(), today).unwrap();
//!
//! assert_eq!(cells.len(), paper_core::GRID_CELLS);
//! assert!(cells.iter().any(|cell| cell.is_today));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod clock;
pub mod error;
pub mod format;
pub mod menu;
pub mod pagination;
pub mod picker;
pub mod session;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{DateFormat, Locale};
pub use picker::{DatePicker, PickerOptions, Transition};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// Columns in a month grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Display pattern used when the host does not pick one.
pub const DEFAULT_DATE_FORMAT: &str = "MM/DD/YYYY";
