//! Visualization for scalar-colored point clouds
//!
//! This crate provides the window side of crackvis using wgpu and winit:
//! - Interactive 3D viewer
//! - Point sprite rendering
//! - Orbit/pan/zoom camera controls

pub mod camera;
pub mod controls;
pub mod renderer;
pub mod shaders;
pub mod viewer;

pub use camera::*;
pub use controls::*;
pub use renderer::{PointCloudRenderer, RenderConfig};
pub use viewer::*;

use crackvis_core::{Renderable, Result};

/// Something that can display a renderable and block until dismissed
pub trait SceneViewer {
    fn show(&mut self, renderable: &Renderable) -> Result<()>;
}
