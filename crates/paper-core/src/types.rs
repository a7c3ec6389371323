//! # Domain Types
//!
//! Value types shared by the calendar, the picker and the host.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CalendarCell   │   │   MonthCursor   │   │   TimeOfDay     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  date           │   │  year (i32)     │   │  hours 0-23     │       │
//! │  │  is_current_..  │   │  month 0-11     │   │  minutes 0-59   │       │
//! │  │  is_today       │   └─────────────────┘   └─────────────────┘       │
//! │  │  is_selected    │                                                    │
//! │  │  is_disabled    │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │   TimeFormat    │   │   PickerKey     │       │
//! │                        │  12h | 24h      │   │  Escape, Enter  │       │
//! │  ┌─────────────────┐   └─────────────────┘   │  ArrowLeft/Right│       │
//! │  │   DateBounds    │                         └─────────────────┘       │
//! │  │  min? / max?    │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Zero-Based Months
//! Every month index in this crate is zero-based (0 = January), matching the
//! contract of the web components. Conversions to chrono's one-based months
//! happen at the edges (`month0()` / `from_ymd_opt(.., month + 1, ..)`).

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

// =============================================================================
// Calendar Cell
// =============================================================================

/// One day-slot in the 6×7 picker grid.
///
/// Computed on every render from the displayed month, the selection and the
/// bounds. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    /// The calendar day this cell shows.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// True for days of the displayed month, false for spillover days.
    pub is_current_month: bool,

    /// True only for the current-month cell equal to today.
    pub is_today: bool,

    /// True when the cell's day equals the selected day.
    pub is_selected: bool,

    /// True when the day falls outside the min/max bounds.
    pub is_disabled: bool,
}

// =============================================================================
// Date Bounds
// =============================================================================

/// Optional inclusive lower and upper bounds for selectable days.
///
/// `min > max` is not validated: every day is then disabled. Callers that
/// accept user configuration are expected to check the ordering themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DateBounds {
    #[ts(as = "Option<String>")]
    pub min: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// Creates bounds from optional min and max days.
    pub const fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        DateBounds { min, max }
    }

    /// Bounds that allow every day.
    pub const fn unbounded() -> Self {
        DateBounds {
            min: None,
            max: None,
        }
    }

    /// Returns true if `date` is before `min` or after `max`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use paper_core::DateBounds;
    ///
    /// let min = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let bounds = DateBounds::new(Some(min), None);
    ///
    /// assert!(bounds.is_disabled(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
    /// assert!(!bounds.is_disabled(min));
    /// ```
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }
}

// =============================================================================
// Month Cursor
// =============================================================================

/// The month/year pair a picker is displaying.
///
/// Independent of the selection: the user can page away from the selected
/// month without losing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthCursor {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
}

impl MonthCursor {
    /// Creates a cursor, rejecting month indices above 11.
    pub fn new(year: i32, month: u32) -> CoreResult<Self> {
        if month > 11 {
            return Err(CoreError::InvalidMonth(month));
        }
        Ok(MonthCursor { year, month })
    }

    /// The cursor for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The following month, rolling December into January of the next year.
    pub fn next(self) -> Self {
        if self.month == 11 {
            MonthCursor {
                year: self.year + 1,
                month: 0,
            }
        } else {
            MonthCursor {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling January into December of the previous year.
    pub fn prev(self) -> Self {
        if self.month == 0 {
            MonthCursor {
                year: self.year - 1,
                month: 11,
            }
        } else {
            MonthCursor {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The first day of the month, if chrono can represent it.
    pub fn first_day(self) -> CoreResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).ok_or(CoreError::DateOutOfRange {
            year: self.year,
            month: self.month,
        })
    }

    /// Returns true if `date` lies in this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

// =============================================================================
// Time of Day
// =============================================================================

/// AM / PM half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Which half of a [`TimeOfDay`] a time edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
    Hours,
    Minutes,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Hours => write!(f, "hours"),
            TimeField::Minutes => write!(f, "minutes"),
        }
    }
}

/// Hours and minutes stored on a 24-hour clock.
///
/// Defaults to `12:00`, the time a picker starts with when it has no value.
/// Deserialization goes through [`TimeOfDay::new`], so stored state with an
/// out-of-range field is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "RawTimeOfDay")]
#[ts(export)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

#[derive(Deserialize)]
struct RawTimeOfDay {
    hours: u32,
    minutes: u32,
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        TimeOfDay::new(raw.hours, raw.minutes)
    }
}

impl TimeOfDay {
    pub const MAX_HOURS: u32 = 23;
    pub const MAX_MINUTES: u32 = 59;

    /// Creates a time, validating both fields.
    ///
    /// ## Example
    /// ```rust
    /// use paper_core::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(23, 59).is_ok());
    /// assert!(TimeOfDay::new(24, 0).is_err());
    /// ```
    pub fn new(hours: u32, minutes: u32) -> Result<Self, ValidationError> {
        check_field(TimeField::Hours, hours)?;
        check_field(TimeField::Minutes, minutes)?;
        Ok(TimeOfDay { hours, minutes })
    }

    #[inline]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns a copy with one field replaced.
    pub fn with_field(self, field: TimeField, value: u32) -> Result<Self, ValidationError> {
        check_field(field, value)?;
        Ok(match field {
            TimeField::Hours => TimeOfDay {
                hours: value,
                ..self
            },
            TimeField::Minutes => TimeOfDay {
                minutes: value,
                ..self
            },
        })
    }

    /// The half of the day the stored hour falls in.
    pub const fn meridiem(&self) -> Meridiem {
        if self.hours >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    /// Moves the stored hour into the given half of the day.
    ///
    /// `9:30` becomes `21:30` for PM; `12:xx` becomes `0:xx` for AM.
    pub const fn with_meridiem(self, meridiem: Meridiem) -> Self {
        let hours = match meridiem {
            Meridiem::Am => self.hours % 12,
            Meridiem::Pm => self.hours % 12 + 12,
        };
        TimeOfDay { hours, ..self }
    }

    /// The hour as shown on a 12-hour dial (0 and 12 both display as 12).
    pub const fn hour12(&self) -> u32 {
        match self.hours % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Converts to a chrono time with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::MIN + Duration::minutes(i64::from(self.hours * 60 + self.minutes))
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        TimeOfDay {
            hours: 12,
            minutes: 0,
        }
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay {
            hours: time.hour(),
            minutes: time.minute(),
        }
    }
}

impl From<NaiveDateTime> for TimeOfDay {
    fn from(value: NaiveDateTime) -> Self {
        TimeOfDay::from(value.time())
    }
}

fn check_field(field: TimeField, value: u32) -> Result<(), ValidationError> {
    let max = match field {
        TimeField::Hours => TimeOfDay::MAX_HOURS,
        TimeField::Minutes => TimeOfDay::MAX_MINUTES,
    };
    if value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(max),
        });
    }
    Ok(())
}

// =============================================================================
// Time Format
// =============================================================================

/// Whether the time picker shows a 12-hour dial with AM/PM or a 24-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::H12 => write!(f, "12h"),
            TimeFormat::H24 => write!(f, "24h"),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "12h" | "12" => Ok(TimeFormat::H12),
            "24h" | "24" => Ok(TimeFormat::H24),
            other => Err(ValidationError::InvalidFormat {
                field: "time_format".to_string(),
                reason: format!("expected 12h or 24h, got '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Keyboard
// =============================================================================

/// Keys the open picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PickerKey {
    Escape,
    Enter,
    ArrowLeft,
    ArrowRight,
}

impl FromStr for PickerKey {
    type Err = CoreError;

    /// Parses DOM `KeyboardEvent.key` names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Escape" | "Esc" => Ok(PickerKey::Escape),
            "Enter" => Ok(PickerKey::Enter),
            "ArrowLeft" | "Left" => Ok(PickerKey::ArrowLeft),
            "ArrowRight" | "Right" => Ok(PickerKey::ArrowRight),
            other => Err(CoreError::UnknownKey(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
