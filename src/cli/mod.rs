//! Command Line Interface (CLI) layer for gdaloverviews.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): GDAL bootstrap, the engine's
//! command-line pre-processor, clap parsing, and exit-code mapping around
//! `gdaloverviews::build_overviews`.
//!
//! If you are embedding gdaloverviews into another application, call
//! `gdaloverviews::api` directly instead of going through the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::run;
