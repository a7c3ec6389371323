//! # Showcase Commands
//!
//! One command per stdin line. Each is parsed into a [`Command`], dispatched
//! against the state, and answered with one JSON [`Response`] line.
//!
//! ## Command Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Picker                               Session                           │
//! │  ──────                               ───────                           │
//! │  open  prev  next  today              page <path>                       │
//! │  select YYYY-MM-DD                    route <path>                      │
//! │  hover YYYY-MM-DD   unhover           scroll <offset> <height>          │
//! │  hours N   minutes N   am   pm        click <ms>                        │
//! │  key <Escape|Enter|ArrowLeft|ArrowRight>                                │
//! │  confirm  cancel  dismiss  clear      quit                              │
//! │  view                                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod picker;
pub mod session;

use std::str::FromStr;

use chrono::NaiveDate;
use paper_core::{Meridiem, PickerKey, TimeField};
use serde::Serialize;

use crate::error::ApiError;

pub use picker::PickerResponse;
pub use session::SessionResponse;

/// A parsed stdin command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open,
    Prev,
    Next,
    Today,
    Select(NaiveDate),
    Hover(NaiveDate),
    Unhover,
    SetTime(TimeField, u32),
    SetMeridiem(Meridiem),
    Key(PickerKey),
    Confirm,
    Cancel,
    Dismiss,
    Clear,
    View,
    Page(String),
    Route(String),
    Scroll { offset: f64, height: f64 },
    Click(u64),
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| ApiError::invalid_command("Empty command"))?
            .to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match verb.as_str() {
            "open" => no_args(&verb, &args, Command::Open)?,
            "prev" => no_args(&verb, &args, Command::Prev)?,
            "next" => no_args(&verb, &args, Command::Next)?,
            "today" => no_args(&verb, &args, Command::Today)?,
            "unhover" => no_args(&verb, &args, Command::Unhover)?,
            "am" => no_args(&verb, &args, Command::SetMeridiem(Meridiem::Am))?,
            "pm" => no_args(&verb, &args, Command::SetMeridiem(Meridiem::Pm))?,
            "confirm" => no_args(&verb, &args, Command::Confirm)?,
            "cancel" => no_args(&verb, &args, Command::Cancel)?,
            "dismiss" => no_args(&verb, &args, Command::Dismiss)?,
            "clear" => no_args(&verb, &args, Command::Clear)?,
            "view" => no_args(&verb, &args, Command::View)?,
            "quit" | "exit" => no_args(&verb, &args, Command::Quit)?,
            "select" => Command::Select(parse_date(one_arg(&verb, &args)?)?),
            "hover" => Command::Hover(parse_date(one_arg(&verb, &args)?)?),
            "hours" => Command::SetTime(TimeField::Hours, parse_number(&verb, one_arg(&verb, &args)?)?),
            "minutes" => {
                Command::SetTime(TimeField::Minutes, parse_number(&verb, one_arg(&verb, &args)?)?)
            }
            "key" => Command::Key(one_arg(&verb, &args)?.parse::<PickerKey>()?),
            "page" => Command::Page(one_arg(&verb, &args)?.to_string()),
            "route" => Command::Route(one_arg(&verb, &args)?.to_string()),
            "click" => Command::Click(parse_number(&verb, one_arg(&verb, &args)?)?),
            "scroll" => match args.as_slice() {
                [offset, height] => Command::Scroll {
                    offset: parse_number(&verb, offset)?,
                    height: parse_number(&verb, height)?,
                },
                _ => return Err(arity(&verb, "<offset> <height>")),
            },
            other => {
                return Err(ApiError::invalid_command(format!(
                    "Unknown command: '{}'",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn no_args(verb: &str, args: &[&str], command: Command) -> Result<Command, ApiError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ApiError::invalid_command(format!(
            "'{}' takes no arguments",
            verb
        )))
    }
}

fn one_arg<'a>(verb: &str, args: &[&'a str]) -> Result<&'a str, ApiError> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(arity(verb, "<value>")),
    }
}

fn arity(verb: &str, usage: &str) -> ApiError {
    ApiError::invalid_command(format!("Usage: {} {}", verb, usage))
}

fn parse_date(arg: &str) -> Result<NaiveDate, ApiError> {
    arg.parse::<NaiveDate>().map_err(|e| {
        ApiError::invalid_command(format!("Expected a YYYY-MM-DD date, got '{}': {}", arg, e))
    })
}

fn parse_number<T: FromStr>(verb: &str, arg: &str) -> Result<T, ApiError> {
    arg.parse::<T>().map_err(|_| {
        ApiError::invalid_command(format!("'{}' expects a number, got '{}'", verb, arg))
    })
}

// =============================================================================
// Responses
// =============================================================================

/// Successful command output.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Picker(PickerResponse),
    Session(SessionResponse),
}

/// One line of output: `{ ok, state }` or `{ ok, error }`.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Reply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(reply: Reply) -> Self {
        Response {
            ok: true,
            state: Some(reply),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Response {
            ok: false,
            state: None,
            error: Some(error),
        }
    }
}
