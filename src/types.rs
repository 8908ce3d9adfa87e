//! Shared types used across gdaloverviews.
//! Includes the dataset open mode and the plain records the reporter prints
//! (`DatasetSummary`, `BandSummary`, `OverviewSummary`).

/// How the target dataset is opened.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum OpenMode {
    /// In-place modification; formats with internal overviews store them in the file.
    #[default]
    Update,
    /// Read-only; the engine writes overviews to an external `.ovr` sidecar.
    ReadOnly,
}

impl std::fmt::Display for OpenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenMode::Update => write!(f, "update"),
            OpenMode::ReadOnly => write!(f, "read-only"),
        }
    }
}

/// Header metadata of an opened dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Projection as returned by the engine (WKT, possibly empty)
    pub projection: String,
    /// Number of raster bands
    pub raster_count: usize,
    /// Width (pixels)
    pub width: usize,
    /// Height (lines)
    pub height: usize,
}

/// One reduced-resolution overview attached to a band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewSummary {
    /// 0-based overview index within the parent band
    pub index: usize,
    /// Numeric GDAL data type code (1 = Byte, 2 = UInt16, ...)
    pub data_type: u32,
    pub width: usize,
    pub height: usize,
    /// Human-readable color interpretation, e.g. "Gray" or "Red"
    pub color_interpretation: String,
}

/// A raster band together with the overviews currently attached to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSummary {
    /// 1-based band index
    pub index: usize,
    pub data_type: u32,
    pub width: usize,
    pub height: usize,
    pub color_interpretation: String,
    pub overviews: Vec<OverviewSummary>,
}
