//! Command-line front end

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use crackvis_core::PointCloudScene;
use crackvis_io::{ColumnSelection, FieldPreset, LoadOptions, TableLoader};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// View a simulation-exported scalar field as a colored point cloud
#[derive(Parser, Debug, Clone)]
#[command(name = "crackvis", version, about)]
pub struct Args {
    /// Whitespace-delimited table exported from the simulation (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Dataset layout supplying default columns and scale
    #[arg(long, value_enum, default_value_t = Preset::Stress)]
    pub preset: Preset,

    /// 0-based column holding X
    #[arg(long)]
    pub x_column: Option<usize>,

    /// 0-based column holding Y
    #[arg(long)]
    pub y_column: Option<usize>,

    /// 0-based column holding the scalar field
    #[arg(long)]
    pub scalar_column: Option<usize>,

    /// Divisor applied to every scalar value
    #[arg(long)]
    pub scale: Option<f64>,

    /// Point sprite size in pixels
    #[arg(long, default_value_t = 5.0)]
    pub point_size: f32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Maximum principal stress (column 7, scale 1e8)
    Stress,
    /// Temperature (column 3, scale 1e2)
    Temperature,
}

impl From<Preset> for FieldPreset {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Stress => FieldPreset::PrincipalStress,
            Preset::Temperature => FieldPreset::Temperature,
        }
    }
}

impl Args {
    /// Preset defaults with any explicit column or scale overrides applied
    pub fn load_options(&self) -> LoadOptions {
        let preset = FieldPreset::from(self.preset);
        let defaults = preset.columns();
        let columns = ColumnSelection::new(
            self.x_column.unwrap_or(defaults.x),
            self.y_column.unwrap_or(defaults.y),
            self.scalar_column.unwrap_or(defaults.scalar),
        );
        LoadOptions::new(columns, self.scale.unwrap_or_else(|| preset.scale_divisor()))
    }
}

/// Ask for a path on `output` and read one line from `input`
pub fn prompt_for_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<PathBuf> {
    write!(output, "Enter file name: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read file name")?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("no file name given");
    }
    Ok(PathBuf::from(trimmed))
}

/// Load `path` into a scene colored over the loaded scalar extent
pub fn load_scene(path: &Path, options: &LoadOptions) -> anyhow::Result<PointCloudScene> {
    let table = TableLoader::load(path, options)
        .with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        min = table.min_scalar,
        max = table.max_scalar,
        "loaded dataset"
    );
    Ok(table.to_scene()?)
}

/// Resolve the input path, load it and show it with `viewer`
#[cfg(feature = "visualization")]
pub fn run_with<V>(args: &Args, path: &Path, viewer: &mut V) -> anyhow::Result<()>
where
    V: crackvis_visualization::SceneViewer + ?Sized,
{
    let mut scene = load_scene(path, &args.load_options())?;
    viewer.show(scene.renderable())?;
    Ok(())
}

/// Full program: prompt if needed, load, then block in the viewer window
#[cfg(feature = "visualization")]
pub fn run(args: Args) -> anyhow::Result<()> {
    use crackvis_visualization::{InteractiveViewer, ViewerConfig};

    let path = match &args.path {
        Some(path) => path.clone(),
        None => prompt_for_path(std::io::stdin().lock(), std::io::stdout())?,
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mut config = ViewerConfig::for_file(&file_name);
    config.render.point_size = args.point_size;

    run_with(&args, &path, &mut InteractiveViewer::new(config))
}
