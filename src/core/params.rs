use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::OpenMode;

/// Validated command-line request: which dataset, which kernel, which levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Dataset name handed to the engine verbatim (path, `/vsi...` name, ...)
    pub dataset: PathBuf,
    /// Resampling algorithm name; validated by the engine, not here
    pub resampling: String,
    /// Decimation levels in command-line order, duplicates kept
    pub levels: Vec<i32>,
    /// 1-based bands to process; empty means all bands
    pub bands: Vec<i32>,
    pub open_mode: OpenMode,
}

impl Invocation {
    pub fn new(dataset: impl Into<PathBuf>, resampling: impl Into<String>, levels: Vec<i32>) -> Self {
        Self {
            dataset: dataset.into(),
            resampling: resampling.into(),
            levels,
            bands: Vec::new(),
            open_mode: OpenMode::Update,
        }
    }

    pub fn with_bands(mut self, bands: Vec<i32>) -> Self {
        self.bands = bands;
        self
    }

    pub fn with_open_mode(mut self, open_mode: OpenMode) -> Self {
        self.open_mode = open_mode;
        self
    }
}

/// Parse decimation levels from their textual form.
///
/// Each value must be a decimal integer ≥ 1. Order and duplicates are
/// preserved so the engine receives exactly what the user typed.
pub fn parse_levels<I, S>(raw: I) -> Result<Vec<i32>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|value| {
            let value = value.as_ref();
            let level = value.trim().parse::<i32>().map_err(|e| Error::InvalidLevel {
                value: value.to_string(),
                reason: e.to_string(),
            })?;
            if level < 1 {
                return Err(Error::InvalidLevel {
                    value: value.to_string(),
                    reason: "level must be a positive integer".to_string(),
                });
            }
            Ok(level)
        })
        .collect()
}
