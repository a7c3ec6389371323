//! # Picker Commands
//!
//! Routes picker commands to the [`DatePicker`](paper_core::DatePicker)
//! and snapshots the result.

use paper_core::picker::{CalendarView, PickerState};
use paper_core::Transition;
use serde::Serialize;
use tracing::debug;

use super::Command;
use crate::error::ApiError;
use crate::state::{Committed, DatePickerState};

/// Picker state after a command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerResponse {
    /// Outcome of the transition; absent for `view`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,

    pub picker: PickerState,

    /// The selection in the configured display pattern.
    pub display_value: String,

    pub listens_for_outside_click: bool,

    /// What `on_change` has delivered so far.
    pub committed: Committed,

    /// Full calendar snapshot, only for `view`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<CalendarView>,
}

/// Applies a picker command.
///
/// Non-picker commands are rejected with `INVALID_COMMAND`.
pub fn dispatch(state: &DatePickerState, command: &Command) -> Result<PickerResponse, ApiError> {
    debug!(?command, "picker command");

    let (transition, view) = state.with_picker_mut(|picker| -> Result<_, ApiError> {
        let transition = match command {
            Command::Open => picker.open(),
            Command::Prev => picker.navigate_prev(),
            Command::Next => picker.navigate_next(),
            Command::Today => picker.go_today(),
            Command::Select(date) => picker.select_date(*date),
            Command::Hover(date) => picker.hover(*date),
            Command::Unhover => picker.unhover(),
            Command::SetTime(field, value) => picker.set_time(*field, *value)?,
            Command::SetMeridiem(meridiem) => picker.set_meridiem(*meridiem),
            Command::Key(key) => picker.handle_key(*key),
            Command::Confirm => picker.confirm(),
            Command::Cancel => picker.cancel(),
            Command::Dismiss => picker.dismiss(),
            Command::Clear => picker.clear(),
            Command::View => return Ok((None, Some(picker.view()?))),
            other => {
                return Err(ApiError::invalid_command(format!(
                    "{:?} is not a picker command",
                    other
                )))
            }
        };
        Ok((Some(transition), None))
    })?;

    if transition.is_some_and(|t| !t.is_effective()) {
        debug!(?command, "picker ignored command in current state");
    }

    Ok(state.with_picker(|picker| PickerResponse {
        transition,
        picker: *picker.state(),
        display_value: picker.display_value(),
        listens_for_outside_click: picker.listens_for_outside_click(),
        committed: state.committed(),
        view,
    }))
}
