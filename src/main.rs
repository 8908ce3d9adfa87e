//! gdaloverviews CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: hand the raw argument vector to the
//! runner and exit with the status it reports. For programmatic use, prefer
//! the library API (`gdaloverviews::api`).
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run(std::env::args_os().collect())
}
