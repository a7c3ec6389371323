//! # Showcase State
//!
//! One focused state type per concern, each owned by the command loop:
//!
//! ```text
//! ┌──────────────────────────────┐  ┌──────────────────────────────┐
//! │  DatePickerState             │  │  SessionState                │
//! │  • DatePicker                │  │  • session id (uuid v4)      │
//! │  • last committed value      │  │  • SessionTracker            │
//! └──────────────────────────────┘  └──────────────────────────────┘
//! ```

mod picker;
mod session;

pub use picker::{Committed, DatePickerState};
pub use session::SessionState;
