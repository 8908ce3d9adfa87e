//! Crate-level error type and `Result` alias.
//! Wraps I/O and GDAL failures and carries the semantic variants the CLI
//! reports verbatim (open failure, build failure, bad levels).
use gdal::errors::GdalError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalError),

    #[error("Can't open {path}")]
    Open {
        path: String,
        #[source]
        source: GdalError,
    },

    #[error("The BuildOverviews operation doesn't work")]
    BuildOverviews { detail: String },

    #[error("Invalid overview level '{value}': {reason}")]
    InvalidLevel { value: String, reason: String },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("GDAL command line pre-processing failed (status {status})")]
    CommandLine { status: i32 },
}

impl Error {
    /// True for the failures the CLI reports with their own message rather
    /// than the generic `Application error:` prefix.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Error::Open { .. }
                | Error::BuildOverviews { .. }
                | Error::InvalidLevel { .. }
                | Error::InvalidArgument { .. }
                | Error::CommandLine { .. }
        )
    }
}
