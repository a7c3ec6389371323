//! # Date Picker State Machine
//!
//! Headless state behind the date picker widget: visibility, displayed
//! month, draft selection, time of day and hover.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Date Picker Lifecycle                             │
//! │                                                                         │
//! │              open()                                                     │
//! │  ┌────────┐ ─────────────────────► ┌────────────────────────────────┐   │
//! │  │ Closed │                        │ Open                           │   │
//! │  └────────┘ ◄───────────────────── │                                │   │
//! │      ▲        confirm()  → emit    │  navigate_prev / navigate_next │   │
//! │      │        cancel()   (silent)  │  select_date  (same day ⇒      │   │
//! │      │        dismiss()  (silent)  │               confirm)         │   │
//! │      │        Escape / Enter       │  set_time / set_meridiem       │   │
//! │      │                             │  go_today / hover / unhover    │   │
//! │      │                             └────────────────────────────────┘   │
//! │      │                                                                  │
//! │      └────── clear() → emit None (from either state)                   │
//! │                                                                         │
//! │  on_change fires exactly once per confirm-with-selection or clear.     │
//! │  Navigation, hover and cancel never emit.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes
//! Every transition returns a [`Transition`], so a host can react without
//! registering a listener. A registered `on_change` listener is invoked
//! exactly when the outcome is [`Transition::Emitted`].
//!
//! ## Cancel Keeps the Draft
//! `cancel()` closes without restoring the selection from before `open()`.
//! Re-opening starts from whatever was last selected.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calendar::{build_grid, week_row_number};
use crate::clock::{Clock, SystemClock};
use crate::error::{CoreResult, ValidationError};
use crate::format::{format_date, format_time, month_name, weekday_labels, Locale};
use crate::types::{
    CalendarCell, DateBounds, Meridiem, MonthCursor, PickerKey, TimeField, TimeFormat, TimeOfDay,
};

/// Listener invoked with the committed value (or `None` on clear).
pub type ChangeListener = Box<dyn FnMut(Option<NaiveDateTime>) + Send>;

// =============================================================================
// Options
// =============================================================================

/// Host-supplied configuration for a picker instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    /// Shown by the host when there is no selection.
    pub placeholder: String,

    /// Display pattern for the selected date (`DD`, `MM`, `YYYY` tokens).
    pub format: String,

    /// Locale for month and weekday labels.
    pub locale: Locale,

    /// Whether the time-of-day controls are shown and applied on confirm.
    pub show_time_picker: bool,

    /// 12-hour dial with AM/PM, or 24-hour dial.
    pub time_format: TimeFormat,

    /// Earliest selectable day (inclusive).
    #[ts(as = "Option<String>")]
    pub min_date: Option<NaiveDate>,

    /// Latest selectable day (inclusive).
    #[ts(as = "Option<String>")]
    pub max_date: Option<NaiveDate>,

    /// Disabled pickers cannot be opened or cleared.
    pub disabled: bool,

    /// Whether the clear action is offered.
    pub allow_clear: bool,

    /// Whether the "Today" shortcut is offered.
    pub show_today: bool,

    /// Whether row numbers are shown next to the grid.
    pub show_week_numbers: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        PickerOptions {
            placeholder: "Select date...".to_string(),
            format: crate::DEFAULT_DATE_FORMAT.to_string(),
            locale: Locale::default(),
            show_time_picker: false,
            time_format: TimeFormat::default(),
            min_date: None,
            max_date: None,
            disabled: false,
            allow_clear: true,
            show_today: true,
            show_week_numbers: false,
        }
    }
}

impl PickerOptions {
    /// The min/max pair as grid bounds.
    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date, self.max_date)
    }
}

// =============================================================================
// State
// =============================================================================

/// Snapshot of a picker's mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PickerState {
    pub is_open: bool,
    #[ts(as = "Option<String>")]
    pub selected_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub hovered_date: Option<NaiveDate>,
    /// Zero-based displayed month.
    pub current_month: u32,
    pub current_year: i32,
    pub selected_time: TimeOfDay,
}

impl PickerState {
    fn cursor(&self) -> MonthCursor {
        MonthCursor {
            year: self.current_year,
            month: self.current_month,
        }
    }

    fn set_cursor(&mut self, cursor: MonthCursor) {
        self.current_year = cursor.year;
        self.current_month = cursor.month;
    }
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Transition {
    /// Not applicable in the current state; nothing changed.
    Ignored,
    /// State changed; nothing was emitted.
    Updated,
    /// A value was emitted to `on_change` (None on clear).
    Emitted(Option<NaiveDateTime>),
}

impl Transition {
    /// Returns true if anything changed.
    pub fn is_effective(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

// =============================================================================
// Render Snapshot
// =============================================================================

/// Everything a host needs to draw the open calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub month_label: String,
    pub year: i32,
    pub weekday_labels: Vec<String>,
    pub cells: Vec<CalendarCell>,
    /// Index into `cells` of the hovered day, if it is visible.
    pub hovered_index: Option<usize>,
    /// One label per grid row when week numbers are enabled.
    pub row_numbers: Option<Vec<u32>>,
    /// Confirm is only enabled with a selection.
    pub can_confirm: bool,
    /// Formatted time when the time picker is enabled.
    pub time_label: Option<String>,
}

// =============================================================================
// Date Picker
// =============================================================================

/// A single date picker instance.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use paper_core::clock::FixedClock;
/// use paper_core::picker::{DatePicker, PickerOptions, Transition};
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let mut picker = DatePicker::with_clock(PickerOptions::default(), None, FixedClock(now));
///
/// picker.open();
/// let day = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
/// assert_eq!(picker.select_date(day), Transition::Updated);
///
/// let emitted = day.and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(picker.confirm(), Transition::Emitted(Some(emitted)));
/// assert!(!picker.is_open());
/// ```
pub struct DatePicker {
    options: PickerOptions,
    state: PickerState,
    clock: Box<dyn Clock + Send + Sync>,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

impl DatePicker {
    /// Creates a closed picker reading the system clock.
    pub fn new(options: PickerOptions, value: Option<NaiveDateTime>) -> Self {
        Self::with_clock(options, value, SystemClock)
    }

    /// Creates a closed picker with an explicit clock.
    ///
    /// The displayed month starts at `value`'s month, or today's if there is
    /// no value. The time starts at `value`'s time, or 12:00.
    pub fn with_clock(
        options: PickerOptions,
        value: Option<NaiveDateTime>,
        clock: impl Clock + Send + Sync + 'static,
    ) -> Self {
        let shown = value.map(|v| v.date()).unwrap_or_else(|| clock.today());
        let cursor = MonthCursor::from_date(shown);

        DatePicker {
            options,
            state: PickerState {
                is_open: false,
                selected_date: value.map(|v| v.date()),
                hovered_date: None,
                current_month: cursor.month,
                current_year: cursor.year,
                selected_time: value.map(TimeOfDay::from).unwrap_or_default(),
            },
            clock: Box::new(clock),
            on_change: None,
        }
    }

    /// Registers the `on_change` listener.
    pub fn on_change(mut self, listener: impl FnMut(Option<NaiveDateTime>) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[inline]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.state.selected_date
    }

    #[inline]
    pub fn selected_time(&self) -> TimeOfDay {
        self.state.selected_time
    }

    #[inline]
    pub fn current_month(&self) -> u32 {
        self.state.current_month
    }

    #[inline]
    pub fn current_year(&self) -> i32 {
        self.state.current_year
    }

    #[inline]
    pub fn hovered_date(&self) -> Option<NaiveDate> {
        self.state.hovered_date
    }

    /// The outside-click listener is registered exactly while open.
    #[inline]
    pub fn listens_for_outside_click(&self) -> bool {
        self.state.is_open
    }

    /// The selection in the configured pattern, or an empty string.
    pub fn display_value(&self) -> String {
        self.state
            .selected_date
            .map(|date| format_date(date, &self.options.format))
            .unwrap_or_default()
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Opens the calendar on the selected month, or today's month.
    pub fn open(&mut self) -> Transition {
        if self.options.disabled || self.state.is_open {
            return Transition::Ignored;
        }
        let shown = self
            .state
            .selected_date
            .unwrap_or_else(|| self.clock.today());
        self.state.set_cursor(MonthCursor::from_date(shown));
        self.state.is_open = true;
        Transition::Updated
    }

    /// Commits the selection (with time if enabled) and closes.
    ///
    /// Without a selection this only closes.
    pub fn confirm(&mut self) -> Transition {
        if !self.state.is_open {
            return Transition::Ignored;
        }
        self.close();

        match self.state.selected_date {
            Some(date) => {
                let time = if self.options.show_time_picker {
                    self.state.selected_time.to_naive_time()
                } else {
                    NaiveTime::MIN
                };
                self.emit(Some(date.and_time(time)))
            }
            None => Transition::Updated,
        }
    }

    /// Closes without emitting. The draft selection is kept.
    pub fn cancel(&mut self) -> Transition {
        if !self.state.is_open {
            return Transition::Ignored;
        }
        self.close();
        Transition::Updated
    }

    /// Outside-click dismissal; same as [`cancel`](Self::cancel).
    pub fn dismiss(&mut self) -> Transition {
        self.cancel()
    }

    /// Drops the selection, emits `None` and closes.
    ///
    /// Ignored when the picker is disabled or `allow_clear` is off; in that
    /// case nothing is emitted and the selection is kept.
    pub fn clear(&mut self) -> Transition {
        if self.options.disabled || !self.options.allow_clear {
            return Transition::Ignored;
        }
        self.state.selected_date = None;
        self.close();
        self.emit(None)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate_prev(&mut self) -> Transition {
        if !self.state.is_open {
            return Transition::Ignored;
        }
        let cursor = self.state.cursor().prev();
        self.state.set_cursor(cursor);
        Transition::Updated
    }

    pub fn navigate_next(&mut self) -> Transition {
        if !self.state.is_open {
            return Transition::Ignored;
        }
        let cursor = self.state.cursor().next();
        self.state.set_cursor(cursor);
        Transition::Updated
    }

    /// Shows today's month and selects today at the current time.
    pub fn go_today(&mut self) -> Transition {
        if !self.state.is_open || !self.options.show_today {
            return Transition::Ignored;
        }
        let now = self.clock.now();
        self.state.set_cursor(MonthCursor::from_date(now.date()));
        self.state.selected_date = Some(now.date());
        self.state.selected_time = TimeOfDay::from(now);
        Transition::Updated
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects a day. Picking the already-selected day confirms.
    ///
    /// Days outside min/max are ignored.
    pub fn select_date(&mut self, date: NaiveDate) -> Transition {
        if !self.state.is_open || self.options.bounds().is_disabled(date) {
            return Transition::Ignored;
        }
        if self.state.selected_date == Some(date) {
            return self.confirm();
        }
        self.state.selected_date = Some(date);
        Transition::Updated
    }

    pub fn hover(&mut self, date: NaiveDate) -> Transition {
        if !self.state.is_open || self.state.hovered_date == Some(date) {
            return Transition::Ignored;
        }
        self.state.hovered_date = Some(date);
        Transition::Updated
    }

    pub fn unhover(&mut self) -> Transition {
        if self.state.hovered_date.take().is_some() {
            Transition::Updated
        } else {
            Transition::Ignored
        }
    }

    // =========================================================================
    // Time of Day
    // =========================================================================

    /// Sets the hours (24-hour value) or minutes of the draft time.
    ///
    /// Ignored unless open with the time picker enabled. Out-of-range values
    /// are rejected and leave the time unchanged.
    pub fn set_time(&mut self, field: TimeField, value: u32) -> Result<Transition, ValidationError> {
        if !self.state.is_open || !self.options.show_time_picker {
            return Ok(Transition::Ignored);
        }
        self.state.selected_time = self.state.selected_time.with_field(field, value)?;
        Ok(Transition::Updated)
    }

    /// Moves the draft hour into the AM or PM half (12-hour dial only).
    pub fn set_meridiem(&mut self, meridiem: Meridiem) -> Transition {
        if !self.state.is_open
            || !self.options.show_time_picker
            || self.options.time_format != TimeFormat::H12
        {
            return Transition::Ignored;
        }
        self.state.selected_time = self.state.selected_time.with_meridiem(meridiem);
        Transition::Updated
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Escape cancels, Enter confirms, arrows page months. Closed pickers
    /// ignore keys.
    pub fn handle_key(&mut self, key: PickerKey) -> Transition {
        if !self.state.is_open {
            return Transition::Ignored;
        }
        match key {
            PickerKey::Escape => self.cancel(),
            PickerKey::Enter => self.confirm(),
            PickerKey::ArrowLeft => self.navigate_prev(),
            PickerKey::ArrowRight => self.navigate_next(),
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The 42 cells for the displayed month.
    pub fn grid(&self) -> CoreResult<Vec<CalendarCell>> {
        build_grid(
            self.state.current_year,
            self.state.current_month,
            self.state.selected_date,
            self.options.bounds(),
            self.clock.today(),
        )
    }

    /// Builds a full render snapshot of the calendar.
    pub fn view(&self) -> CoreResult<CalendarView> {
        let cells = self.grid()?;
        let hovered_index = self
            .state
            .hovered_date
            .and_then(|hovered| cells.iter().position(|cell| cell.date == hovered));
        let row_numbers = self.options.show_week_numbers.then(|| {
            (0..cells.len())
                .step_by(crate::DAYS_PER_WEEK)
                .map(week_row_number)
                .collect()
        });
        let time_label = self
            .options
            .show_time_picker
            .then(|| format_time(self.state.selected_time, self.options.time_format));

        Ok(CalendarView {
            month_label: month_name(self.state.current_month, self.options.locale)?,
            year: self.state.current_year,
            weekday_labels: weekday_labels(self.options.locale)?,
            cells,
            hovered_index,
            row_numbers,
            can_confirm: self.state.selected_date.is_some(),
            time_label,
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn close(&mut self) {
        self.state.is_open = false;
        self.state.hovered_date = None;
    }

    fn emit(&mut self, value: Option<NaiveDateTime>) -> Transition {
        if let Some(listener) = self.on_change.as_mut() {
            listener(value);
        }
        Transition::Emitted(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::Days;
    use std::sync::{Arc, Mutex};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2024, 3, 5).and_hms_opt(14, 30, 0).unwrap()
    }

    type Emissions = Arc<Mutex<Vec<Option<NaiveDateTime>>>>;

    fn picker_with(options: PickerOptions, value: Option<NaiveDateTime>) -> (DatePicker, Emissions) {
        let emissions: Emissions = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emissions);
        let picker = DatePicker::with_clock(options, value, FixedClock(now()))
            .on_change(move |value| sink.lock().unwrap().push(value));
        (picker, emissions)
    }

    fn picker() -> (DatePicker, Emissions) {
        picker_with(PickerOptions::default(), None)
    }

    fn time_options() -> PickerOptions {
        PickerOptions {
            show_time_picker: true,
            ..PickerOptions::default()
        }
    }

    #[test]
    fn test_open_without_value_shows_today() {
        let (mut picker, _) = picker();
        assert_eq!(picker.open(), Transition::Updated);
        assert!(picker.is_open());
        assert_eq!(picker.current_month(), 2);
        assert_eq!(picker.current_year(), 2024);
        assert!(picker.listens_for_outside_click());
    }

    #[test]
    fn test_open_with_value_shows_selection_month() {
        let value = date(2023, 11, 20).and_hms_opt(8, 15, 0).unwrap();
        let (mut picker, _) = picker_with(PickerOptions::default(), Some(value));
        picker.open();
        assert_eq!(picker.current_month(), 10);
        assert_eq!(picker.current_year(), 2023);
        assert_eq!(picker.selected_time(), TimeOfDay::new(8, 15).unwrap());
    }

    #[test]
    fn test_open_recenters_on_selection_after_navigation() {
        let (mut picker, _) = picker();
        picker.open();
        picker.select_date(date(2024, 3, 12));
        picker.navigate_next();
        picker.navigate_next();
        picker.cancel();

        picker.open();
        assert_eq!(picker.current_month(), 2);
    }

    #[test]
    fn test_disabled_picker_cannot_open_or_clear() {
        let options = PickerOptions {
            disabled: true,
            ..PickerOptions::default()
        };
        let (mut picker, emissions) = picker_with(options, None);
        assert_eq!(picker.open(), Transition::Ignored);
        assert_eq!(picker.clear(), Transition::Ignored);
        assert!(emissions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_select_keeps_picker_open() {
        let (mut picker, emissions) = picker();
        picker.open();
        assert_eq!(picker.select_date(date(2024, 3, 12)), Transition::Updated);
        assert!(picker.is_open());
        assert_eq!(picker.selected_date(), Some(date(2024, 3, 12)));
        assert!(emissions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_selecting_same_day_confirms() {
        let (mut picker, emissions) = picker();
        picker.open();
        picker.select_date(date(2024, 3, 12));

        let expected = date(2024, 3, 12).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(
            picker.select_date(date(2024, 3, 12)),
            Transition::Emitted(Some(expected))
        );
        assert!(!picker.is_open());
        assert_eq!(*emissions.lock().unwrap(), vec![Some(expected)]);
    }

    #[test]
    fn test_selecting_disabled_day_is_noop() {
        let today = now().date();
        let options = PickerOptions {
            min_date: Some(today),
            max_date: Some(today + Days::new(30)),
            ..PickerOptions::default()
        };
        let (mut picker, _) = picker_with(options, None);
        picker.open();
        picker.select_date(date(2024, 3, 10));

        assert_eq!(picker.select_date(date(2024, 3, 4)), Transition::Ignored);
        assert_eq!(picker.select_date(date(2024, 4, 5)), Transition::Ignored);
        assert_eq!(picker.selected_date(), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_closed_picker_ignores_selection_and_navigation() {
        let (mut picker, _) = picker();
        assert_eq!(picker.select_date(date(2024, 3, 12)), Transition::Ignored);
        assert_eq!(picker.navigate_next(), Transition::Ignored);
        assert_eq!(picker.hover(date(2024, 3, 12)), Transition::Ignored);
        assert_eq!(picker.selected_date(), None);
    }

    #[test]
    fn test_navigation_round_trip_and_year_roll() {
        let value = date(2023, 12, 25).and_hms_opt(0, 0, 0).unwrap();
        let (mut picker, _) = picker_with(PickerOptions::default(), Some(value));
        picker.open();

        picker.navigate_next();
        assert_eq!((picker.current_month(), picker.current_year()), (0, 2024));
        picker.navigate_prev();
        assert_eq!((picker.current_month(), picker.current_year()), (11, 2023));

        picker.navigate_next();
        picker.navigate_next();
        picker.navigate_prev();
        picker.navigate_prev();
        assert_eq!((picker.current_month(), picker.current_year()), (11, 2023));
        assert_eq!(picker.selected_date(), Some(date(2023, 12, 25)));
    }

    #[test]
    fn test_confirm_without_selection_does_not_emit() {
        let (mut picker, emissions) = picker();
        picker.open();
        assert_eq!(picker.confirm(), Transition::Updated);
        assert!(!picker.is_open());
        assert!(emissions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_confirm_combines_time_when_enabled() {
        let (mut picker, emissions) = picker_with(time_options(), None);
        picker.open();
        picker.select_date(date(2024, 3, 12));
        picker.set_time(TimeField::Hours, 9).unwrap();
        picker.set_time(TimeField::Minutes, 45).unwrap();
        picker.set_meridiem(Meridiem::Pm);
        picker.confirm();

        let expected = date(2024, 3, 12).and_hms_opt(21, 45, 0).unwrap();
        assert_eq!(*emissions.lock().unwrap(), vec![Some(expected)]);
    }

    #[test]
    fn test_time_edits_ignored_without_time_picker() {
        let (mut picker, _) = picker();
        picker.open();
        assert_eq!(picker.set_time(TimeField::Hours, 9), Ok(Transition::Ignored));
        assert_eq!(picker.set_meridiem(Meridiem::Pm), Transition::Ignored);
        assert_eq!(picker.selected_time(), TimeOfDay::default());
    }

    #[test]
    fn test_meridiem_ignored_on_24h_dial() {
        let options = PickerOptions {
            time_format: TimeFormat::H24,
            ..time_options()
        };
        let (mut picker, _) = picker_with(options, None);
        picker.open();
        assert_eq!(picker.set_meridiem(Meridiem::Am), Transition::Ignored);
        assert_eq!(picker.set_time(TimeField::Hours, 18), Ok(Transition::Updated));
        assert_eq!(picker.selected_time().hours(), 18);
    }

    #[test]
    fn test_time_out_of_range_rejected() {
        let (mut picker, _) = picker_with(time_options(), None);
        picker.open();
        assert!(picker.set_time(TimeField::Hours, 24).is_err());
        assert_eq!(picker.selected_time(), TimeOfDay::default());
    }

    #[test]
    fn test_cancel_keeps_draft_and_does_not_emit() {
        let (mut picker, emissions) = picker();
        picker.open();
        picker.select_date(date(2024, 3, 12));
        assert_eq!(picker.cancel(), Transition::Updated);
        assert!(!picker.is_open());
        assert!(!picker.listens_for_outside_click());
        assert!(emissions.lock().unwrap().is_empty());
        assert_eq!(picker.selected_date(), Some(date(2024, 3, 12)));
    }

    #[test]
    fn test_clear_always_emits_none_and_closes() {
        let (mut picker, emissions) = picker();
        assert_eq!(picker.clear(), Transition::Emitted(None));

        picker.open();
        picker.select_date(date(2024, 3, 12));
        assert_eq!(picker.clear(), Transition::Emitted(None));
        assert!(!picker.is_open());
        assert_eq!(picker.selected_date(), None);
        assert_eq!(*emissions.lock().unwrap(), vec![None, None]);
    }

    #[test]
    fn test_clear_respects_allow_clear() {
        let options = PickerOptions {
            allow_clear: false,
            ..PickerOptions::default()
        };
        let value = date(2024, 3, 12).and_hms_opt(0, 0, 0).unwrap();
        let (mut picker, emissions) = picker_with(options, Some(value));
        assert_eq!(picker.clear(), Transition::Ignored);
        assert!(emissions.lock().unwrap().is_empty());
        assert_eq!(picker.selected_date(), Some(date(2024, 3, 12)));
    }

    #[test]
    fn test_transition_is_effective() {
        assert!(!Transition::Ignored.is_effective());
        assert!(Transition::Updated.is_effective());
        assert!(Transition::Emitted(None).is_effective());
    }

    #[test]
    fn test_go_today_selects_now() {
        let value = date(2022, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let (mut picker, _) = picker_with(time_options(), Some(value));
        picker.open();
        assert_eq!(picker.go_today(), Transition::Updated);
        assert_eq!(picker.selected_date(), Some(date(2024, 3, 5)));
        assert_eq!(picker.selected_time(), TimeOfDay::new(14, 30).unwrap());
        assert_eq!((picker.current_month(), picker.current_year()), (2, 2024));
    }

    #[test]
    fn test_go_today_hidden_when_disabled_in_options() {
        let options = PickerOptions {
            show_today: false,
            ..PickerOptions::default()
        };
        let (mut picker, _) = picker_with(options, None);
        picker.open();
        assert_eq!(picker.go_today(), Transition::Ignored);
    }

    #[test]
    fn test_keyboard_bindings() {
        let (mut picker, emissions) = picker();
        assert_eq!(picker.handle_key(PickerKey::Enter), Transition::Ignored);

        picker.open();
        picker.handle_key(PickerKey::ArrowRight);
        assert_eq!(picker.current_month(), 3);
        picker.handle_key(PickerKey::ArrowLeft);
        picker.handle_key(PickerKey::ArrowLeft);
        assert_eq!(picker.current_month(), 1);

        picker.handle_key(PickerKey::Escape);
        assert!(!picker.is_open());

        picker.open();
        picker.select_date(date(2024, 3, 1));
        let outcome = picker.handle_key(PickerKey::Enter);
        assert!(matches!(outcome, Transition::Emitted(Some(_))));
        assert_eq!(emissions.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_hover_cleared_on_close() {
        let (mut picker, _) = picker();
        picker.open();
        assert_eq!(picker.hover(date(2024, 3, 8)), Transition::Updated);
        assert_eq!(picker.hover(date(2024, 3, 8)), Transition::Ignored);
        let view = picker.view().unwrap();
        assert_eq!(view.cells[view.hovered_index.unwrap()].date, date(2024, 3, 8));

        picker.dismiss();
        assert_eq!(picker.hovered_date(), None);
        assert_eq!(picker.unhover(), Transition::Ignored);
    }

    #[test]
    fn test_display_value_uses_format() {
        let options = PickerOptions {
            format: "DD/MM/YYYY".to_string(),
            ..PickerOptions::default()
        };
        let (mut picker, _) = picker_with(options, None);
        assert_eq!(picker.display_value(), "");
        picker.open();
        picker.select_date(date(2024, 3, 12));
        assert_eq!(picker.display_value(), "12/03/2024");
    }

    #[test]
    fn test_view_snapshot() {
        let options = PickerOptions {
            show_week_numbers: true,
            show_time_picker: true,
            ..PickerOptions::default()
        };
        let (mut picker, _) = picker_with(options, None);
        picker.open();

        let view = picker.view().unwrap();
        assert_eq!(view.month_label, "March");
        assert_eq!(view.year, 2024);
        assert_eq!(view.weekday_labels.len(), 7);
        assert_eq!(view.cells.len(), 42);
        assert_eq!(view.row_numbers, Some(vec![1, 2, 3, 4, 5, 6]));
        assert!(!view.can_confirm);
        assert_eq!(view.time_label.as_deref(), Some("12:00 PM"));
        assert_eq!(view.cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_picker_without_listener_still_reports_emission() {
        let mut picker =
            DatePicker::with_clock(PickerOptions::default(), None, FixedClock(now()));
        assert_eq!(picker.clear(), Transition::Emitted(None));
    }

    #[test]
    fn test_transition_serializes_tagged() {
        let json = serde_json::to_value(Transition::Emitted(None)).unwrap();
        assert_eq!(json["kind"], "emitted");
        assert!(json["value"].is_null());
        let json = serde_json::to_value(Transition::Ignored).unwrap();
        assert_eq!(json["kind"], "ignored");
    }
}
