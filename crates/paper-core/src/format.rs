//! # Formatting Helpers
//!
//! Date-to-string conversion and localized calendar names.
//!
//! ## Token Replacement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format_date(2024-03-05, "MM/DD/YYYY")                                  │
//! │                                                                         │
//! │     "MM/DD/YYYY"                                                        │
//! │        │  replace first "DD"   → "MM/05/YYYY"                           │
//! │        │  replace first "MM"   → "03/05/YYYY"                           │
//! │        ▼  replace first "YYYY" → "03/05/2024"                           │
//! │                                                                         │
//! │  Plain substring replacement, not strftime. There is no escaping, so a │
//! │  literal "DD" elsewhere in the pattern is consumed as a token.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Month and weekday names come from chrono's locale tables.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{MonthCursor, TimeFormat, TimeOfDay};

// =============================================================================
// Locale
// =============================================================================

/// Calendar locales the picker can label itself in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "it-IT")]
    ItIt,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "ko-KR")]
    KoKr,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 10] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::EsEs,
        Locale::FrFr,
        Locale::DeDe,
        Locale::ItIt,
        Locale::PtBr,
        Locale::JaJp,
        Locale::KoKr,
        Locale::ZhCn,
    ];

    /// The BCP-47 tag, e.g. `"en-US"`.
    pub const fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::EsEs => "es-ES",
            Locale::FrFr => "fr-FR",
            Locale::DeDe => "de-DE",
            Locale::ItIt => "it-IT",
            Locale::PtBr => "pt-BR",
            Locale::JaJp => "ja-JP",
            Locale::KoKr => "ko-KR",
            Locale::ZhCn => "zh-CN",
        }
    }

    fn chrono_locale(self) -> chrono::Locale {
        match self {
            Locale::EnUs => chrono::Locale::en_US,
            Locale::EnGb => chrono::Locale::en_GB,
            Locale::EsEs => chrono::Locale::es_ES,
            Locale::FrFr => chrono::Locale::fr_FR,
            Locale::DeDe => chrono::Locale::de_DE,
            Locale::ItIt => chrono::Locale::it_IT,
            Locale::PtBr => chrono::Locale::pt_BR,
            Locale::JaJp => chrono::Locale::ja_JP,
            Locale::KoKr => chrono::Locale::ko_KR,
            Locale::ZhCn => chrono::Locale::zh_CN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    /// Accepts `en-US`, `en_US` and any casing of either.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CoreError::UnknownLocale(s.to_string()))
    }
}

// =============================================================================
// Date Format Presets
// =============================================================================

/// The display patterns offered by the component library.
///
/// Any other pattern string is still accepted by [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    UsSlash,
    #[serde(rename = "DD/MM/YYYY")]
    EuSlash,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
    #[serde(rename = "MM-DD-YYYY")]
    UsDash,
}

impl DateFormat {
    pub const fn pattern(&self) -> &'static str {
        match self {
            DateFormat::UsSlash => "MM/DD/YYYY",
            DateFormat::EuSlash => "DD/MM/YYYY",
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::UsDash => "MM-DD-YYYY",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Replaces the first `DD`, `MM` and `YYYY` tokens in `pattern`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use paper_core::format::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(format_date(date, "MM/DD/YYYY"), "03/05/2024");
/// assert_eq!(format_date(date, "YYYY-MM-DD"), "2024-03-05");
/// ```
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let day = format!("{:02}", date.day());
    let month = format!("{:02}", date.month());
    let year = format!("{:04}", date.year());

    pattern
        .replacen("DD", &day, 1)
        .replacen("MM", &month, 1)
        .replacen("YYYY", &year, 1)
}

/// Formats a time for the picker footer.
///
/// `24h` gives `HH:MM`; `12h` gives `hh:MM AM` / `hh:MM PM`.
pub fn format_time(time: TimeOfDay, time_format: TimeFormat) -> String {
    match time_format {
        TimeFormat::H24 => format!("{:02}:{:02}", time.hours(), time.minutes()),
        TimeFormat::H12 => format!(
            "{:02}:{:02} {}",
            time.hour12(),
            time.minutes(),
            time.meridiem()
        ),
    }
}

/// Full month name for a zero-based month index.
///
/// ## Example
/// ```rust
/// use paper_core::format::{month_name, Locale};
///
/// assert_eq!(month_name(0, Locale::EnUs).unwrap(), "January");
/// assert_eq!(month_name(2, Locale::FrFr).unwrap(), "mars");
/// ```
pub fn month_name(month: u32, locale: Locale) -> CoreResult<String> {
    let first = MonthCursor::new(2021, month)?.first_day()?;
    Ok(localized(first, "%B", locale))
}

/// Abbreviated weekday name, Sunday = 0 through Saturday = 6.
pub fn day_name(weekday: u32, locale: Locale) -> CoreResult<String> {
    if weekday > 6 {
        return Err(ValidationError::OutOfRange {
            field: "weekday".to_string(),
            min: 0,
            max: 6,
        }
        .into());
    }
    // 2021-01-03 is a Sunday
    let sunday = NaiveDate::from_ymd_opt(2021, 1, 3).ok_or(CoreError::InvalidMonth(0))?;
    let date = sunday + Days::new(u64::from(weekday));
    Ok(localized(date, "%a", locale))
}

/// The seven weekday header labels, Sunday first.
pub fn weekday_labels(locale: Locale) -> CoreResult<Vec<String>> {
    (0..7).map(|weekday| day_name(weekday, locale)).collect()
}

fn localized(date: NaiveDate, spec: &str, locale: Locale) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized(spec, locale.chrono_locale())
        .to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
