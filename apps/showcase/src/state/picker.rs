//! # Date Picker State
//!
//! Wraps the showcase's single [`DatePicker`] for the command layer.
//!
//! ## Thread Safety
//! The picker is wrapped in `Arc<Mutex<T>>` so that the `on_change`
//! listener and the command handlers can share it. The lock is held only
//! for the duration of one transition.
//!
//! ## Committed Value
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "confirm" ──► DatePicker::confirm() ──► on_change(Some(v)) ──┐         │
//! │  "clear"   ──► DatePicker::clear()   ──► on_change(None)   ───┤         │
//! │                                                               ▼         │
//! │                                          committed: Option<NaiveDateTime>│
//! │                                          emissions: u64                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDateTime;
use paper_core::{Clock, DatePicker, PickerOptions, SystemClock};
use serde::Serialize;

/// What the host has received through `on_change` so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Committed {
    /// Last emitted value (`None` after a clear).
    pub value: Option<NaiveDateTime>,

    /// Number of `on_change` invocations.
    pub emissions: u64,
}

/// Shared handle to the showcase date picker.
#[derive(Debug, Clone)]
pub struct DatePickerState {
    picker: Arc<Mutex<DatePicker>>,
    committed: Arc<Mutex<Committed>>,
}

impl DatePickerState {
    /// Creates a picker on the system clock.
    pub fn new(options: PickerOptions, value: Option<NaiveDateTime>) -> Self {
        Self::with_clock(options, value, SystemClock)
    }

    /// Creates a picker on an explicit clock.
    pub fn with_clock(
        options: PickerOptions,
        value: Option<NaiveDateTime>,
        clock: impl Clock + Send + Sync + 'static,
    ) -> Self {
        let committed = Arc::new(Mutex::new(Committed {
            value,
            emissions: 0,
        }));

        let sink = Arc::clone(&committed);
        let picker = DatePicker::with_clock(options, value, clock).on_change(move |value| {
            let mut committed = lock(&sink);
            committed.value = value;
            committed.emissions += 1;
            tracing::info!(?value, "Date picker value committed");
        });

        DatePickerState {
            picker: Arc::new(Mutex::new(picker)),
            committed,
        }
    }

    /// Executes a function with read access to the picker.
    pub fn with_picker<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DatePicker) -> R,
    {
        let picker = lock(&self.picker);
        f(&picker)
    }

    /// Executes a function with write access to the picker.
    pub fn with_picker_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DatePicker) -> R,
    {
        let mut picker = lock(&self.picker);
        f(&mut picker)
    }

    /// What `on_change` has delivered so far.
    pub fn committed(&self) -> Committed {
        *lock(&self.committed)
    }
}

// A panicking listener must not wedge the command loop.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use paper_core::{FixedClock, Transition};

    fn state() -> DatePickerState {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        DatePickerState::with_clock(PickerOptions::default(), None, FixedClock(now))
    }

    #[test]
    fn test_confirm_records_committed_value() {
        let state = state();
        let day = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();

        state.with_picker_mut(|p| {
            p.open();
            p.select_date(day);
            p.confirm()
        });

        let committed = state.committed();
        assert_eq!(committed.value, Some(day.and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(committed.emissions, 1);
        assert!(!state.with_picker(|p| p.is_open()));
    }

    #[test]
    fn test_cancel_does_not_commit() {
        let state = state();
        let day = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();

        let outcome = state.with_picker_mut(|p| {
            p.open();
            p.select_date(day);
            p.cancel()
        });

        assert_eq!(outcome, Transition::Updated);
        assert_eq!(state.committed(), Committed::default());
    }

    #[test]
    fn test_clear_commits_none() {
        let state = state();
        state.with_picker_mut(|p| p.clear());

        let committed = state.committed();
        assert_eq!(committed.value, None);
        assert_eq!(committed.emissions, 1);
    }
}
