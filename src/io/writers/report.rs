//! Fixed-layout text report of a dataset, its bands and their overviews.
//!
//! Labels, indentation and punctuation are part of the tool's output
//! contract; downstream scripts and golden tests match on them.
use std::io::Write;

use crate::types::{BandSummary, DatasetSummary, OverviewSummary};

pub fn write_dataset_header<W: Write>(out: &mut W, summary: &DatasetSummary) -> std::io::Result<()> {
    writeln!(out, "Raster dataset parameters:")?;
    writeln!(out, "  Projection: {}", summary.projection)?;
    writeln!(out, "  RasterCount: {}", summary.raster_count)?;
    writeln!(out, "  RasterSize ({},{})", summary.width, summary.height)
}

/// Bare level count line, kept for compatibility with existing output.
pub fn write_level_count<W: Write>(out: &mut W, levels: usize) -> std::io::Result<()> {
    writeln!(out, "{}", levels)
}

fn write_overview<W: Write>(out: &mut W, overview: &OverviewSummary) -> std::io::Result<()> {
    writeln!(out, "      OverView {} :", overview.index)?;
    writeln!(out, "         DataType: {}", overview.data_type)?;
    writeln!(out, "         Size ({},{})", overview.width, overview.height)?;
    writeln!(out, "         PaletteInterp: {}", overview.color_interpretation)
}

pub fn write_band_report<W: Write>(out: &mut W, bands: &[BandSummary]) -> std::io::Result<()> {
    for band in bands {
        writeln!(out, "Band {} :", band.index)?;
        writeln!(out, "   DataType: {}", band.data_type)?;
        writeln!(out, "   Size ({},{})", band.width, band.height)?;
        writeln!(out, "   PaletteInterp: {}", band.color_interpretation)?;
        for overview in &band.overviews {
            write_overview(out, overview)?;
        }
    }
    Ok(())
}

pub fn write_completion<W: Write>(out: &mut W, dataset: &str) -> std::io::Result<()> {
    writeln!(out, "Completed.")?;
    writeln!(
        out,
        "Use:  gdalread {} outfile.png [overview] to extract a particular overview!",
        dataset
    )
}
