//! Core data structures for crackvis
//!
//! This crate provides the point cloud with its per-point scalar field, the
//! scalar range and color lookup table used to color it, and the scene that
//! turns both into GPU-ready vertices.

pub mod color;
pub mod error;
pub mod point;
pub mod point_cloud;
pub mod range;
pub mod renderable;
pub mod scene;

pub use color::*;
pub use error::*;
pub use point::*;
pub use point_cloud::*;
pub use range::*;
pub use renderable::*;
pub use scene::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4};
