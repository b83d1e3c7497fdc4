//! Integration tests for crackvis
//!
//! These tests drive the whole file → scene → viewer flow with a viewer that
//! records what it was handed instead of opening a window.

use std::io::Write;

use approx::assert_relative_eq;
use clap::Parser;
use crackvis::cli::{self, Args};
use crackvis::prelude::*;

/// Viewer stand-in that keeps a copy of every renderable it is shown
#[derive(Default)]
struct RecordingViewer {
    shown: Vec<Renderable>,
}

impl SceneViewer for RecordingViewer {
    fn show(&mut self, renderable: &Renderable) -> Result<()> {
        self.shown.push(renderable.clone());
        Ok(())
    }
}

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Eight-column export: node id, x, y, then five field columns
fn stress_export() -> String {
    let mut content = String::from("# node x y t s11 s22 s12 smax\n");
    for i in 0..20 {
        let x = (i % 5) as f64 * 0.25;
        let y = (i / 5) as f64 * 0.25;
        let temperature = -160.0 + i as f64;
        let stress = 1.0e8 + i as f64 * 5.0e6;
        content.push_str(&format!(
            "{} {} {} {} 0 0 0 {}\n",
            i + 1,
            x,
            y,
            temperature,
            stress
        ));
    }
    content
}

#[test]
fn test_three_row_scenario() {
    let file = write_table("0 0 1 100\n0 1 2 300\n0 2 3 500");
    let options = LoadOptions::new(ColumnSelection::new(1, 2, 3), 100.0);

    let table = TableLoader::load(file.path(), &options).unwrap();
    assert_eq!(table.scalars().collect::<Vec<_>>(), vec![1.0, 3.0, 5.0]);
    assert_eq!((table.min_scalar, table.max_scalar), (1.0, 5.0));

    let mut scene = table.to_scene().unwrap();
    let renderable = scene.renderable();
    assert_eq!(renderable.len(), 3);
    assert_eq!(renderable.vertices[2].position, [1.0, 2.0, 5.0]);
    assert_eq!(renderable.vertices[2].color, [1.0, 0.0, 0.0]);
}

#[test]
fn test_run_with_stress_preset() {
    let file = write_table(&stress_export());
    let args = Args::parse_from(["crackvis"]);
    let mut viewer = RecordingViewer::default();

    cli::run_with(&args, file.path(), &mut viewer).unwrap();

    assert_eq!(viewer.shown.len(), 1);
    let renderable = &viewer.shown[0];
    assert_eq!(renderable.len(), 20);

    let range = renderable.scalar_range.unwrap();
    assert_relative_eq!(range.min(), 1.0);
    assert_relative_eq!(range.max(), 1.95);

    let bounds = renderable.bounds.unwrap();
    assert_relative_eq!(bounds.max.x, 1.0);
    assert_relative_eq!(bounds.max.y, 0.75);
}

#[test]
fn test_run_with_temperature_preset() {
    let file = write_table(&stress_export());
    let args = Args::parse_from(["crackvis", "--preset", "temperature"]);
    let mut viewer = RecordingViewer::default();

    cli::run_with(&args, file.path(), &mut viewer).unwrap();

    let range = viewer.shown[0].scalar_range.unwrap();
    assert_relative_eq!(range.min(), -1.6);
    assert_relative_eq!(range.max(), -1.41);
}

#[test]
fn test_load_failures_never_reach_the_viewer() {
    let args = Args::parse_from(["crackvis"]);
    let mut viewer = RecordingViewer::default();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.dat");
    let err = cli::run_with(&args, &missing, &mut viewer).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::FileNotFound { .. })
    ));

    let malformed = write_table("1 0 0 0 0 0 0 x\n");
    let err = cli::run_with(&args, malformed.path(), &mut viewer).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Parse { .. })
    ));

    let empty = write_table("# header only\n");
    let err = cli::run_with(&args, empty.path(), &mut viewer).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::EmptyDataset { .. })
    ));

    assert!(viewer.shown.is_empty());
}

#[test]
fn test_scene_reuse_after_clear() {
    let file = write_table("0 0 1 100\n0 1 2 300\n");
    let options = LoadOptions::new(ColumnSelection::new(1, 2, 3), 100.0);
    let table = TableLoader::load(file.path(), &options).unwrap();

    let mut scene = PointCloudScene::new();
    table.populate(&mut scene).unwrap();
    assert_eq!(scene.renderable().len(), 2);

    scene.clear();
    assert!(scene.build_renderable().is_empty());

    table.populate(&mut scene).unwrap();
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_cli_load_scene_is_the_single_loading_path() {
    let file = write_table("0 0 1 100\n0 1 2 300\n0 2 3 500\n");
    let options = LoadOptions::new(ColumnSelection::new(1, 2, 3), 100.0);

    let mut scene = cli::load_scene(file.path(), &options).unwrap();
    assert_eq!(scene.len(), 3);
    let range = scene.scalar_range().copied().unwrap();
    assert_eq!((range.min(), range.max()), (1.0, 5.0));
    assert_eq!(scene.renderable().len(), 3);

    let err = cli::load_scene(&file.path().with_extension("missing"), &options).unwrap_err();
    assert!(format!("{:#}", err).starts_with("failed to load"));
}
