#![doc = r#"
gdaloverviews — attach overview pyramids to GDAL raster datasets.

Overviews are decimated copies of each raster band (1/2, 1/4, 1/8, ... of
the full resolution) stored in the dataset or an `.ovr` sidecar so viewers
can render large rasters without reading every pixel. This crate drives
GDAL to build them and prints a fixed-format report of the dataset, its
bands, and the overviews now attached to them. It powers the
`gdaloverviews` CLI and can be embedded directly.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Quick start
-----------
```rust,no_run
use gdaloverviews::{build_overviews, Invocation, TermProgress};

fn main() -> gdaloverviews::Result<()> {
    let invocation = Invocation::new("sample.tif", "AVERAGE", vec![2, 4, 8]);
    let mut stdout = std::io::stdout().lock();
    let bands = build_overviews(&invocation, &mut TermProgress, &mut stdout)?;
    assert_eq!(bands[0].overviews.len(), 3);
    Ok(())
}
```

Custom progress
---------------
Anything implementing [`ProgressSink`] can observe the build:

```rust
use gdaloverviews::ProgressSink;

struct Percent;

impl ProgressSink for Percent {
    fn report(&mut self, fraction: f64, _message: Option<&str>) -> bool {
        println!("{:.0}%", fraction * 100.0);
        true
    }
}
```

Useful modules
--------------
- [`api`] — the end-to-end workflow.
- [`io`] — GDAL session, progress sinks, report writers.
- [`core`] — the `Invocation` record and level parsing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use core::params::{Invocation, parse_levels};
pub use error::{Error, Result};
pub use types::{BandSummary, DatasetSummary, OpenMode, OverviewSummary};

pub use io::gdal::{OverviewSession, general_cmd_line_processor, register_drivers};
pub use io::progress::{ProgressSink, SilentProgress, TermProgress};

pub use api::build_overviews;
