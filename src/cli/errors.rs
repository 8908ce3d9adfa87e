use std::process::ExitCode;

use thiserror::Error;

use super::args::{USAGE_EXAMPLE, USAGE_LINE};

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("usage: {}\nexample: {}", USAGE_LINE, USAGE_EXAMPLE)]
    Usage,

    #[error("{0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Overviews(#[from] gdaloverviews::Error),
}

impl AppError {
    /// Text written to stdout before exiting.
    pub fn message(&self) -> String {
        match self {
            AppError::Usage => self.to_string(),
            AppError::InvalidArguments(detail) => {
                format!("{}\n{}", detail.trim_end(), AppError::Usage)
            }
            AppError::Overviews(e) if e.is_expected() => e.to_string(),
            AppError::Overviews(e) => format!("Application error: {e}"),
        }
    }

    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Overviews(e) if !e.is_expected() => 1,
            // -1 as seen by the shell
            _ => 255,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
