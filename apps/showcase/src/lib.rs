//! # Paper Kit Showcase
//!
//! Terminal host for the headless components in `paper-core`. It reads one
//! command per line from stdin and answers each with one JSON line on
//! stdout. Logs go to stderr.
//!
//! ## Module Organization
//! ```text
//! paper_showcase/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── config.rs       ◄─── showcase.toml + PAPER_* overrides
//! ├── error.rs        ◄─── ShowcaseError, ApiError
//! ├── state/
//! │   ├── picker.rs   ◄─── DatePickerState (Arc<Mutex<DatePicker>>)
//! │   └── session.rs  ◄─── SessionState (uuid + SessionTracker)
//! └── commands/
//!     ├── mod.rs      ◄─── Command parsing, Response
//!     ├── picker.rs   ◄─── Picker dispatch
//!     └── session.rs  ◄─── Session dispatch
//! ```
//!
//! ## Example Session
//! ```text
//! $ paper-showcase
//! open
//! {"ok":true,"state":{"transition":{"kind":"updated"},"picker":{"isOpen":true,...}}}
//! select 2024-03-12
//! confirm
//! {"ok":true,"state":{"transition":{"kind":"emitted","value":"2024-03-12T00:00:00"},...}}
//! hours 99
//! {"ok":false,"error":{"code":"VALIDATION_ERROR","message":"hours must be between 0 and 23"}}
//! quit
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use paper_core::Clock;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{Command, Reply, Response};
use config::ShowcaseConfig;
use error::{ApiError, ShowcaseResult};
use state::{DatePickerState, SessionState};

/// The showcase's state: one picker and one session.
#[derive(Debug)]
pub struct Showcase {
    picker: DatePickerState,
    session: SessionState,
}

impl Showcase {
    /// Builds the showcase from configuration on the system clock.
    pub fn new(config: &ShowcaseConfig) -> Self {
        Showcase {
            picker: DatePickerState::new(config.picker.clone(), config.session.initial_value),
            session: SessionState::new(config.session.page.clone()),
        }
    }

    /// Builds the showcase on an explicit clock.
    pub fn with_clock(config: &ShowcaseConfig, clock: impl Clock + Send + Sync + 'static) -> Self {
        Showcase {
            picker: DatePickerState::with_clock(
                config.picker.clone(),
                config.session.initial_value,
                clock,
            ),
            session: SessionState::new(config.session.page.clone()),
        }
    }

    pub fn picker(&self) -> &DatePickerState {
        &self.picker
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Runs one parsed command.
    pub fn execute(&self, command: &Command) -> Result<Reply, ApiError> {
        match command {
            Command::Page(_) | Command::Route(_) | Command::Scroll { .. } | Command::Click(_) => {
                commands::session::dispatch(&self.session, command).map(Reply::Session)
            }
            _ => commands::picker::dispatch(&self.picker, command).map(Reply::Picker),
        }
    }

    /// Parses and runs one input line. Returns `None` on `quit`.
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        let result = line.parse::<Command>().and_then(|command| {
            if command == Command::Quit {
                return Ok(None);
            }
            self.execute(&command).map(Some)
        });

        match result {
            Ok(Some(reply)) => Some(Response::success(reply)),
            Ok(None) => None,
            Err(error) => {
                debug!(line, %error, "command failed");
                Some(Response::failure(error))
            }
        }
    }
}

/// Runs the showcase on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,paper=debug, can be overridden with RUST_LOG        │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • defaults -> showcase.toml -> PAPER_* env -> validate              │
/// │     • an explicit CONFIG_PATH that fails to load is fatal               │
/// │     • $PAPER_CONFIG or platform file: defaults with a warning           │
/// │                                                                         │
/// │  3. Initialize State                                                    │
/// │     • DatePickerState from [picker] and session.initialValue            │
/// │     • SessionState with a fresh session id                              │
/// │                                                                         │
/// │  4. Command Loop                                                        │
/// │     • one JSON response per line until quit or EOF                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(config_path: Option<PathBuf>) -> ShowcaseResult<()> {
    init_tracing();

    info!("Starting Paper Kit showcase");

    let config = ShowcaseConfig::for_startup(config_path)?;
    debug!(?config, "Configuration loaded");

    let showcase = Showcase::new(&config);
    info!(session_id = %showcase.session().id(), "State initialized");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match showcase.handle_line(&line) {
            Some(response) => {
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                stdout.flush()?;
            }
            None => break,
        }
    }

    info!(committed = ?showcase.picker().committed().value, "Showcase finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=paper=trace` - Show trace for paper crates only
/// - Default: `info,paper=debug`
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,paper=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use paper_core::FixedClock;

    fn showcase() -> Showcase {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        Showcase::with_clock(&ShowcaseConfig::default(), FixedClock(now))
    }

    fn json(response: Option<Response>) -> serde_json::Value {
        serde_json::to_value(response.unwrap()).unwrap()
    }

    #[test]
    fn test_full_selection_flow() {
        let showcase = showcase();

        let opened = json(showcase.handle_line("open"));
        assert_eq!(opened["ok"], true);
        assert_eq!(opened["state"]["transition"]["kind"], "updated");
        assert_eq!(opened["state"]["picker"]["isOpen"], true);

        json(showcase.handle_line("select 2024-03-12"));
        let confirmed = json(showcase.handle_line("select 2024-03-12"));
        assert_eq!(confirmed["state"]["transition"]["kind"], "emitted");
        assert_eq!(confirmed["state"]["transition"]["value"], "2024-03-12T00:00:00");
        assert_eq!(confirmed["state"]["displayValue"], "03/12/2024");
        assert_eq!(confirmed["state"]["committed"]["emissions"], 1);
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let showcase = showcase();

        let failed = json(showcase.handle_line("teleport"));
        assert_eq!(failed["ok"], false);
        assert_eq!(failed["error"]["code"], "INVALID_COMMAND");

        let opened = json(showcase.handle_line("open"));
        assert_eq!(opened["ok"], true);
    }

    #[test]
    fn test_session_commands_route_to_session() {
        let showcase = showcase();
        let response = json(showcase.handle_line("page /components/date-picker"));
        assert_eq!(response["state"]["event"], "pageView");
        assert_eq!(response["state"]["recorded"], false);
    }

    #[test]
    fn test_quit_ends_loop() {
        assert!(showcase().handle_line("quit").is_none());
    }
}
