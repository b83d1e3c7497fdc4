//! Display-ready vertex data derived from a scene

use crate::point::{Bounds3, PointVertex};
use crate::range::ScalarRange;

/// Colored single-vertex primitives plus the range they were colored with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Renderable {
    pub vertices: Vec<PointVertex>,
    pub bounds: Option<Bounds3>,
    pub scalar_range: Option<ScalarRange>,
}

impl Renderable {
    pub fn new(vertices: Vec<PointVertex>, scalar_range: Option<ScalarRange>) -> Self {
        let bounds = Bounds3::from_points(vertices.iter().map(|v| &v.position));
        Self {
            vertices,
            bounds,
            scalar_range,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
