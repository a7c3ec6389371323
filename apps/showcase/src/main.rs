//! # Paper Kit Showcase Entry Point
//!
//! ```text
//! paper-showcase [CONFIG_PATH]
//! ```
//!
//! Without a path the config is taken from `$PAPER_CONFIG` or the platform
//! config directory.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    match paper_showcase::run(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("paper-showcase: {}", e);
            ExitCode::FAILURE
        }
    }
}
