//! # Showcase Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PAPER_LOCALE=fr-FR                                                 │
//! │     PAPER_SHOW_TIME=true                                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $PAPER_CONFIG, or                                                  │
//! │     ~/.config/paper-kit/showcase.toml (Linux)                          │
//! │     ~/Library/Application Support/com.paper.kit/showcase.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # showcase.toml
//! [picker]
//! format = "DD/MM/YYYY"
//! locale = "en-GB"
//! showTimePicker = true
//! timeFormat = "24h"
//! minDate = "2024-01-01"
//! maxDate = "2024-12-31"
//!
//! [session]
//! page = "/components/date-picker"
//! initialValue = "2024-03-05T09:30:00"
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use paper_core::{Locale, PickerOptions, TimeFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ShowcaseError, ShowcaseResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PAPER_CONFIG";

// =============================================================================
// Session Settings
// =============================================================================

/// Settings for the showcase session itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettings {
    /// Page recorded as viewed when the session starts.
    #[serde(default = "default_page")]
    pub page: String,

    /// Value the picker starts with.
    #[serde(default)]
    pub initial_value: Option<NaiveDateTime>,
}

fn default_page() -> String {
    "/components/date-picker".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            page: default_page(),
            initial_value: None,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete showcase configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Options handed to the date picker.
    #[serde(default)]
    pub picker: PickerOptions,

    /// Session settings.
    #[serde(default)]
    pub session: SessionSettings,
}

impl ShowcaseConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$PAPER_CONFIG`, or showcase.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ShowcaseResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                config = Self::read_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load showcase config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Loads the configuration the showcase starts with.
    ///
    /// A path given on the command line must exist, parse and validate.
    /// Without one, the `$PAPER_CONFIG`/platform lookup falls back to
    /// defaults on failure.
    pub fn for_startup(config_path: Option<PathBuf>) -> ShowcaseResult<Self> {
        match config_path {
            Some(path) => {
                let mut config = Self::read_file(&path)?;
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::load_or_default(None)),
        }
    }

    fn read_file(path: &Path) -> ShowcaseResult<Self> {
        info!(?path, "Loading showcase config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses a config file body.
    pub fn from_toml(contents: &str) -> ShowcaseResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ShowcaseResult<()> {
        if self.picker.format.trim().is_empty() {
            return Err(ShowcaseError::InvalidConfig(
                "picker.format must not be empty".into(),
            ));
        }

        if let (Some(min), Some(max)) = (self.picker.min_date, self.picker.max_date) {
            if min > max {
                return Err(ShowcaseError::InvalidConfig(format!(
                    "picker.minDate ({}) is after picker.maxDate ({})",
                    min, max
                )));
            }
        }

        if self.session.page.is_empty() {
            return Err(ShowcaseError::InvalidConfig(
                "session.page must not be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `PAPER_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = lookup("PAPER_LOCALE") {
            match locale.parse::<Locale>() {
                Ok(parsed) => {
                    debug!(locale = %parsed, "Overriding locale from environment");
                    self.picker.locale = parsed;
                }
                Err(e) => warn!("Ignoring PAPER_LOCALE: {}", e),
            }
        }

        if let Some(format) = lookup("PAPER_DATE_FORMAT") {
            debug!(format = %format, "Overriding date format from environment");
            self.picker.format = format;
        }

        if let Some(time_format) = lookup("PAPER_TIME_FORMAT") {
            match time_format.parse::<TimeFormat>() {
                Ok(parsed) => self.picker.time_format = parsed,
                Err(e) => warn!("Ignoring PAPER_TIME_FORMAT: {}", e),
            }
        }

        if let Some(show_time) = lookup("PAPER_SHOW_TIME") {
            match parse_flag(&show_time) {
                Some(flag) => self.picker.show_time_picker = flag,
                None => warn!(value = %show_time, "Ignoring PAPER_SHOW_TIME"),
            }
        }

        if let Some(min) = lookup("PAPER_MIN_DATE") {
            match min.parse::<NaiveDate>() {
                Ok(date) => self.picker.min_date = Some(date),
                Err(e) => warn!(value = %min, "Ignoring PAPER_MIN_DATE: {}", e),
            }
        }

        if let Some(max) = lookup("PAPER_MAX_DATE") {
            match max.parse::<NaiveDate>() {
                Ok(date) => self.picker.max_date = Some(date),
                Err(e) => warn!(value = %max, "Ignoring PAPER_MAX_DATE: {}", e),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "paper", "kit")
            .map(|dirs| dirs.config_dir().join("showcase.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
