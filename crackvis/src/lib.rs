//! # crackvis
//!
//! View simulation-exported scalar fields (stress, temperature, ...) as
//! colored 3D point clouds.
//!
//! This is the umbrella crate: it re-exports the core types, the table loader
//! and, with the `visualization` feature, the interactive viewer. It also
//! hosts the command-line front end.
//!
//! ## Quick Start
//!
//! ```rust
//! use crackvis::prelude::*;
//! use std::io::Cursor;
//!
//! let options = LoadOptions::new(ColumnSelection::new(1, 2, 3), 100.0);
//! let table = TableLoader::load_from_reader(
//!     Cursor::new("0 0 1 100\n0 1 2 300\n0 2 3 500"),
//!     &options,
//!     "inline",
//! )?;
//! assert_eq!((table.min_scalar, table.max_scalar), (1.0, 5.0));
//!
//! let mut scene = table.to_scene()?;
//! assert_eq!(scene.renderable().len(), 3);
//! # Ok::<(), crackvis::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `visualization` (default): wgpu/winit interactive viewer

pub mod cli;

// Re-export core functionality
pub use crackvis_core::*;

pub use crackvis_io as io;

#[cfg(feature = "visualization")]
pub use crackvis_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use crackvis_core::*;
    pub use crackvis_io::*;

    #[cfg(feature = "visualization")]
    pub use crackvis_visualization::{InteractiveViewer, SceneViewer, ViewerConfig};
}
