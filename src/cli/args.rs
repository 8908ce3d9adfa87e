use std::path::PathBuf;

use clap::Parser;

use gdaloverviews::{Invocation, OpenMode, parse_levels};

pub const USAGE_LINE: &str =
    "gdaloverviews {GDAL dataset name} {resamplealg} {level1} {level2} ....";
pub const USAGE_EXAMPLE: &str = "gdaloverviews sample.tif \"NEAREST\" 2 4";

#[derive(Parser, Debug)]
#[command(
    name = "gdaloverviews",
    about = "Build overview pyramids for a GDAL raster dataset",
    override_usage = USAGE_LINE,
    after_help = "GDAL general options (--config KEY VALUE, --debug, --formats, --version, --help-general) are accepted anywhere."
)]
pub struct CliArgs {
    /// GDAL dataset name (file path or any name GDAL can open)
    pub dataset: PathBuf,

    /// Resampling algorithm (NEAREST, AVERAGE, GAUSS, CUBIC, MODE, ...)
    pub resampling: String,

    /// Decimation levels, e.g. 2 4 8
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub levels: Vec<String>,

    /// Only build overviews for this 1-based band (repeatable); default all bands
    #[arg(short = 'b', long = "band")]
    pub bands: Vec<i32>,

    /// Open read-only so overviews go to an external .ovr file
    #[arg(long, default_value_t = false)]
    pub ro: bool,

    /// Do not draw the progress indicator
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Enable logging (to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn invocation(&self) -> gdaloverviews::Result<Invocation> {
        let levels = parse_levels(&self.levels)?;
        let open_mode = if self.ro {
            OpenMode::ReadOnly
        } else {
            OpenMode::Update
        };
        Ok(
            Invocation::new(self.dataset.clone(), self.resampling.clone(), levels)
                .with_bands(self.bands.clone())
                .with_open_mode(open_mode),
        )
    }
}
