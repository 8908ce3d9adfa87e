#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gdal::DriverManager;
use gdal::raster::{Buffer, ColorInterpretation};

/// Create an 8-bit GeoTIFF with a horizontal gradient in every band.
pub fn create_raster(dir: &Path, name: impl AsRef<Path>, width: usize, height: usize, bands: usize) -> PathBuf {
    gdaloverviews::register_drivers();
    let path = dir.join(name);
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let ds = driver
        .create_with_band_type::<u8, _>(&path, width, height, bands)
        .unwrap();

    let data: Vec<u8> = (0..width * height).map(|i| (i % width % 256) as u8).collect();
    for index in 1..=bands {
        let mut band = ds.rasterband(index).unwrap();
        let mut buf = Buffer::new((width, height), data.clone());
        band.write((0, 0), (width, height), &mut buf).unwrap();
    }
    drop(ds);
    path
}

/// Create an 800x600 RGB GeoTIFF.
pub fn create_rgb(dir: &Path, name: &str) -> PathBuf {
    let path = create_raster(dir, name, 800, 600, 3);
    let ds = gdal::Dataset::open_ex(
        &path,
        gdal::DatasetOptions {
            open_flags: gdal::GdalOpenFlags::GDAL_OF_UPDATE | gdal::GdalOpenFlags::GDAL_OF_RASTER,
            ..Default::default()
        },
    )
    .unwrap();
    for (index, interp) in [
        ColorInterpretation::RedBand,
        ColorInterpretation::GreenBand,
        ColorInterpretation::BlueBand,
    ]
    .into_iter()
    .enumerate()
    {
        let mut band = ds.rasterband(index + 1).unwrap();
        band.set_color_interpretation(interp).unwrap();
    }
    drop(ds);
    path
}

pub fn ovr_sidecar(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.ovr", path.display()))
}
