mod common;

use gdaloverviews::{
    BandSummary, Error, Invocation, OpenMode, OverviewSession, ProgressSink, SilentProgress,
    build_overviews,
};
use pretty_assertions::assert_eq;

use common::{create_raster, create_rgb, ovr_sidecar};

fn run(invocation: &Invocation) -> (gdaloverviews::Result<Vec<BandSummary>>, String) {
    let mut out = Vec::new();
    let result = build_overviews(invocation, &mut SilentProgress, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn single_band_two_levels_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(dir.path(), "sample.tif", 1024, 1024, 1);
    let size_before = std::fs::metadata(&path).unwrap().len();
    let name = path.to_string_lossy().into_owned();

    let (result, text) = run(&Invocation::new(name.clone(), "NEAREST", vec![2, 4]));
    let bands = result.unwrap();

    // Empty projection still gets its label and trailing space.
    let expected = format!(
        "\
Raster dataset parameters:
  Projection: {empty}
  RasterCount: 1
  RasterSize (1024,1024)
2
Band 1 :
   DataType: 1
   Size (1024,1024)
   PaletteInterp: Gray
      OverView 0 :
         DataType: 1
         Size (512,512)
         PaletteInterp: Gray
      OverView 1 :
         DataType: 1
         Size (256,256)
         PaletteInterp: Gray
Completed.
Use:  gdalread {name} outfile.png [overview] to extract a particular overview!
",
        empty = ""
    );
    assert_eq!(text, expected);
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].overviews.len(), 2);

    let size_after = std::fs::metadata(&path).unwrap().len();
    assert!(size_after > size_before || ovr_sidecar(&path).exists());
}

#[test]
fn rgb_bands_each_get_every_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_rgb(dir.path(), "rgb.tif");

    let (result, text) = run(&Invocation::new(
        &path,
        "AVERAGE",
        vec![2, 4, 8],
    ));
    let bands = result.unwrap();

    assert_eq!(bands.len(), 3);
    assert_eq!(text.matches("OverView").count(), 9);
    for band in &bands {
        let sizes: Vec<_> = band.overviews.iter().map(|o| (o.width, o.height)).collect();
        assert_eq!(sizes, vec![(400, 300), (200, 150), (100, 75)]);
    }
    let interps: Vec<_> = bands.iter().map(|b| b.color_interpretation.as_str()).collect();
    assert_eq!(interps, vec!["Red", "Green", "Blue"]);
    assert!(text.contains("Band 3 :\n"));
}

#[test]
fn overview_dimensions_follow_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(dir.path(), "odd.tif", 1000, 701, 1);

    let (result, _) = run(&Invocation::new(&path, "NEAREST", vec![3, 7]));
    let bands = result.unwrap();
    let band = &bands[0];

    for (overview, level) in band.overviews.iter().zip([3usize, 7]) {
        let w = band.width;
        let h = band.height;
        assert!(
            overview.width == w / level || overview.width == w.div_ceil(level),
            "width {} for level {}",
            overview.width,
            level
        );
        assert!(
            overview.height == h / level || overview.height == h.div_ceil(level),
            "height {} for level {}",
            overview.height,
            level
        );
    }
}

#[test]
fn rerun_reports_same_overview_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(dir.path(), "twice.tif", 256, 128, 1);
    let invocation = Invocation::new(&path, "NEAREST", vec![2, 4]);

    let first = run(&invocation).0.unwrap();
    let second = run(&invocation).0.unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_dataset_is_open_failure() {
    let (result, text) = run(&Invocation::new("/does/not/exist.tif", "NEAREST", vec![2]));
    match result {
        Err(err @ Error::Open { .. }) => {
            assert_eq!(err.to_string(), "Can't open /does/not/exist.tif")
        }
        other => panic!("expected open failure, got {other:?}"),
    }
    assert!(text.is_empty());
}

#[test]
fn unknown_resampling_is_build_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(dir.path(), "bogus.tif", 64, 64, 1);

    let (result, text) = run(&Invocation::new(&path, "BOGUS", vec![2]));
    assert!(matches!(result, Err(Error::BuildOverviews { .. })));
    assert!(text.starts_with("Raster dataset parameters:\n"));
    assert!(!text.contains("Completed."));
}

#[test]
fn read_only_writes_external_overviews() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(dir.path(), "external.tif", 128, 128, 1);

    let invocation = Invocation::new(&path, "NEAREST", vec![2])
        .with_open_mode(OpenMode::ReadOnly);
    let bands = run(&invocation).0.unwrap();

    assert!(ovr_sidecar(&path).exists());
    assert_eq!(bands[0].overviews.len(), 1);
    assert_eq!(
        (bands[0].overviews[0].width, bands[0].overviews[0].height),
        (64, 64)
    );
}

#[test]
fn out_of_range_band_is_rejected_before_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(dir.path(), "bands.tif", 64, 64, 1);

    let invocation =
        Invocation::new(&path, "NEAREST", vec![2]).with_bands(vec![2]);
    let (result, _) = run(&invocation);
    assert!(matches!(
        result,
        Err(Error::InvalidArgument { arg: "--band", .. })
    ));

    let session = OverviewSession::open(&path, OpenMode::ReadOnly).unwrap();
    assert!(session.band_summaries().unwrap()[0].overviews.is_empty());
    session.close();
}

#[derive(Default)]
struct Ticks(Vec<f64>);

impl ProgressSink for Ticks {
    fn report(&mut self, fraction: f64, _message: Option<&str>) -> bool {
        self.0.push(fraction);
        true
    }
}

#[test]
fn session_drives_custom_progress_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_raster(dir.path(), "progress.tif", 512, 512, 1);

    let mut session = OverviewSession::open(&path, OpenMode::Update).unwrap();
    let summary = session.summary();
    assert_eq!((summary.width, summary.height, summary.raster_count), (512, 512, 1));

    let mut ticks = Ticks::default();
    session
        .build_overviews("AVERAGE", &[2, 4, 8], &[], &mut ticks)
        .unwrap();
    assert!(!ticks.0.is_empty());
    assert!(ticks.0.iter().all(|f| (0.0..=1.0 + 1e-9).contains(f)));

    let bands = session.band_summaries().unwrap();
    assert_eq!(bands[0].overviews.len(), 3);
    session.close();
}
