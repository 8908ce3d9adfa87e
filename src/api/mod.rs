//! High-level entry point: open a dataset, build overviews, report.
//!
//! The CLI calls [`build_overviews`] with stdout and the terminal progress
//! sink; embedders can pass any writer and sink.
//!
//! ```rust,no_run
//! use gdaloverviews::{Invocation, SilentProgress, build_overviews};
//!
//! fn main() -> gdaloverviews::Result<()> {
//!     let invocation = Invocation::new("sample.tif", "NEAREST", vec![2, 4]);
//!     let mut report = Vec::new();
//!     build_overviews(&invocation, &mut SilentProgress, &mut report)?;
//!     Ok(())
//! }
//! ```
use std::io::Write;

use tracing::info;

use crate::core::params::Invocation;
use crate::error::Result;
use crate::io::gdal::{OverviewSession, register_drivers};
use crate::io::progress::ProgressSink;
use crate::io::writers::report::{
    write_band_report, write_completion, write_dataset_header, write_level_count,
};
use crate::types::BandSummary;

/// Run the whole overview workflow for one invocation.
///
/// Order: open, dataset header, level count, build, band report, release,
/// completion. On error the dataset is dropped with the session and nothing
/// already written by the engine is rolled back.
pub fn build_overviews<W: Write>(
    invocation: &Invocation,
    progress: &mut dyn ProgressSink,
    out: &mut W,
) -> Result<Vec<BandSummary>> {
    register_drivers();

    let mut session = OverviewSession::open(&invocation.dataset, invocation.open_mode)?;

    write_dataset_header(out, &session.summary())?;
    write_level_count(out, invocation.levels.len())?;
    // Engine progress is printed through C stdio; keep our lines ahead of it.
    out.flush()?;

    session.build_overviews(
        &invocation.resampling,
        &invocation.levels,
        &invocation.bands,
        progress,
    )?;

    let bands = session.band_summaries()?;
    write_band_report(out, &bands)?;

    session.close();

    let name = invocation.dataset.display().to_string();
    write_completion(out, &name)?;
    out.flush()?;

    info!("Finished overviews for {}", name);
    Ok(bands)
}
