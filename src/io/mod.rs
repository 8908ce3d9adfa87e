//! I/O layer around the GDAL engine.
//! Provides driver bootstrap and the dataset session (`gdal`), progress sinks
//! handed to the engine (`progress`), and the text report (`writers`).
pub mod gdal;
pub use gdal::{OverviewSession, general_cmd_line_processor, register_drivers};

pub mod progress;
pub use progress::{ProgressSink, SilentProgress, TermProgress};

pub mod writers;
