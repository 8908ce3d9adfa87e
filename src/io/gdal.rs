use std::borrow::Cow;
use std::ffi::{CStr, CString, OsStr, OsString, c_char, c_int, c_void};
use std::path::Path;
use std::ptr;
use std::sync::Once;

use gdal::{Dataset, DatasetOptions, DriverManager, GdalOpenFlags};
use gdal_sys::CPLErr;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::io::progress::{ProgressSink, forward_progress};
use crate::types::{BandSummary, DatasetSummary, OpenMode, OverviewSummary};

static REGISTER_DRIVERS: Once = Once::new();

/// Register every GDAL format driver. Safe to call repeatedly; only the
/// first call reaches the engine.
pub fn register_drivers() {
    REGISTER_DRIVERS.call_once(|| {
        DriverManager::register_all();
        debug!("Registered {} GDAL drivers", DriverManager::count());
    });
}

unsafe fn last_error_message() -> String {
    let msg = unsafe { gdal_sys::CPLGetLastErrorMsg() };
    let text = if msg.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
    };
    unsafe { gdal_sys::CPLErrorReset() };
    text
}

#[cfg(unix)]
fn os_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    Cow::Owned(arg.to_string_lossy().into_owned().into_bytes())
}

#[cfg(unix)]
fn os_string(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes.to_vec())
}

#[cfg(not(unix))]
fn os_string(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Run GDAL's general command-line pre-processor over a full argument vector
/// (program name first).
///
/// Engine options such as `--config KEY VALUE` or `--debug on` are applied and
/// removed wherever they appear. Returns `Ok(None)` when the pre-processor
/// fully handled the invocation (`--version`, `--formats`, ...) and the
/// program should exit successfully.
///
/// Arguments travel as raw bytes on unix, so file names that are not UTF-8
/// reach the engine unchanged.
pub fn general_cmd_line_processor(args: &[OsString]) -> Result<Option<Vec<OsString>>> {
    let c_args = args
        .iter()
        .map(|a| CString::new(os_bytes(a).into_owned()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::InvalidArgument {
            arg: "argv",
            value: e.to_string(),
        })?;

    let mut c_ptrs: Vec<*mut c_char> = c_args.iter().map(|a| a.as_ptr() as *mut c_char).collect();
    c_ptrs.push(ptr::null_mut());
    let original = c_ptrs.as_mut_ptr();
    let mut argv = original;

    let argc = unsafe {
        gdal_sys::GDALGeneralCmdLineProcessor(
            c_args.len() as c_int,
            &mut argv,
            gdal::GdalOpenFlags::GDAL_OF_RASTER.bits() as c_int,
        )
    };

    if argc < 0 {
        return Err(Error::CommandLine { status: argc });
    }
    if argc == 0 {
        debug!("GDAL pre-processor handled the command line");
        return Ok(None);
    }

    let mut processed = Vec::with_capacity(argc as usize);
    for i in 0..argc as usize {
        let arg = unsafe { *argv.add(i) };
        if arg.is_null() {
            break;
        }
        processed.push(os_string(unsafe { CStr::from_ptr(arg) }.to_bytes()));
    }

    // The processor hands back a fresh CSL list it allocated; ours stays ours.
    if argv != original {
        unsafe { gdal_sys::CSLDestroy(argv) };
    }

    debug!(
        "GDAL pre-processor kept {} of {} arguments",
        processed.len(),
        args.len()
    );
    Ok(Some(processed))
}

/// An open dataset plus the operations the tool performs on it.
///
/// The session owns the dataset; bands and overviews are only borrowed while
/// summaries are collected. [`OverviewSession::close`] releases the dataset
/// so the engine flushes pending overview data to disk.
pub struct OverviewSession {
    name: String,
    dataset: Dataset,
}

impl OverviewSession {
    /// Open `path` as a raster in the requested mode.
    pub fn open(path: &Path, mode: OpenMode) -> Result<Self> {
        let name = path.display().to_string();
        let mut open_flags = GdalOpenFlags::GDAL_OF_RASTER | GdalOpenFlags::GDAL_OF_VERBOSE_ERROR;
        if mode == OpenMode::Update {
            open_flags |= GdalOpenFlags::GDAL_OF_UPDATE;
        }
        let options = DatasetOptions {
            open_flags,
            ..DatasetOptions::default()
        };

        let dataset = Dataset::open_ex(path, options).map_err(|source| {
            warn!("Failed to open {} ({}): {}", name, mode, source);
            Error::Open {
                path: name.clone(),
                source,
            }
        })?;
        info!("Opened {} in {} mode", name, mode);

        Ok(Self { name, dataset })
    }

    pub fn summary(&self) -> DatasetSummary {
        let (width, height) = self.dataset.raster_size();
        DatasetSummary {
            projection: self.dataset.projection(),
            raster_count: self.dataset.raster_count() as usize,
            width,
            height,
        }
    }

    /// Build overviews for `levels` in place, reporting progress to `progress`.
    ///
    /// `bands` lists 1-based band indices; empty means every band.
    pub fn build_overviews(
        &mut self,
        resampling: &str,
        levels: &[i32],
        bands: &[i32],
        progress: &mut dyn ProgressSink,
    ) -> Result<()> {
        let raster_count = self.dataset.raster_count() as usize;
        if let Some(bad) = bands
            .iter()
            .find(|&&b| b < 1 || b as usize > raster_count)
        {
            return Err(Error::InvalidArgument {
                arg: "--band",
                value: bad.to_string(),
            });
        }
        let c_resampling = CString::new(resampling).map_err(|_| Error::InvalidArgument {
            arg: "resampling",
            value: resampling.to_string(),
        })?;

        info!(
            "Building {} overview level(s) {:?} with {} on {}",
            levels.len(),
            levels,
            resampling,
            self.name
        );

        let mut sink: &mut dyn ProgressSink = progress;
        let band_list = if bands.is_empty() {
            ptr::null_mut()
        } else {
            bands.as_ptr() as *mut c_int
        };
        let rv = unsafe {
            gdal_sys::GDALBuildOverviews(
                self.dataset.c_dataset(),
                c_resampling.as_ptr(),
                levels.len() as c_int,
                levels.as_ptr() as *mut c_int,
                bands.len() as c_int,
                band_list,
                Some(forward_progress),
                &mut sink as *mut &mut dyn ProgressSink as *mut c_void,
            )
        };

        if rv != CPLErr::CE_None {
            let detail = unsafe { last_error_message() };
            warn!("GDALBuildOverviews failed on {}: {}", self.name, detail);
            return Err(Error::BuildOverviews { detail });
        }
        Ok(())
    }

    /// Describe every band and the overviews currently attached to it.
    pub fn band_summaries(&self) -> Result<Vec<BandSummary>> {
        let raster_count = self.dataset.raster_count() as usize;
        let mut summaries = Vec::with_capacity(raster_count);

        for index in 1..=raster_count {
            let band = self.dataset.rasterband(index)?;
            let (width, height) = band.size();
            let overview_count = band.overview_count()? as usize;

            let mut overviews = Vec::with_capacity(overview_count);
            for ov_index in 0..overview_count {
                let overview = band.overview(ov_index)?;
                let (ov_width, ov_height) = overview.size();
                overviews.push(OverviewSummary {
                    index: ov_index,
                    data_type: overview.band_type() as u32,
                    width: ov_width,
                    height: ov_height,
                    color_interpretation: overview.color_interpretation().name(),
                });
            }

            summaries.push(BandSummary {
                index,
                data_type: band.band_type() as u32,
                width,
                height,
                color_interpretation: band.color_interpretation().name(),
                overviews,
            });
        }

        Ok(summaries)
    }

    /// Release the dataset, flushing overview data to disk.
    pub fn close(self) {
        let Self { name, dataset } = self;
        drop(dataset);
        debug!("Closed {}", name);
    }
}
