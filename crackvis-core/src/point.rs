//! Point types and related functionality

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A single-vertex primitive ready for upload to the GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl PointVertex {
    /// Create a vertex from a double precision point and an RGB color in `[0, 1]`
    pub fn from_point(point: &Point3d, color: [f32; 3]) -> Self {
        Self {
            position: [point.x as f32, point.y as f32, point.z as f32],
            color,
        }
    }
}

impl Default for PointVertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    pub min: Point3f,
    pub max: Point3f,
}

impl Bounds3 {
    /// Smallest box containing all `points`, or `None` for an empty input
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f32; 3]>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = Point3f::new(first[0], first[1], first[2]);
        let mut max = min;

        for p in iter {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }

        Some(Self { min, max })
    }

    pub fn center(&self) -> Point3f {
        nalgebra::center(&self.min, &self.max)
    }

    /// Length of the box diagonal
    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_from_point() {
        let v = PointVertex::from_point(&Point3d::new(1.0, 2.0, 3.0), [0.0, 0.5, 1.0]);
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.color, [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<PointVertex>(), 24);
    }

    #[test]
    fn test_bounds() {
        let positions = [[0.0, -1.0, 2.0], [4.0, 1.0, -2.0], [2.0, 0.0, 0.0]];
        let bounds = Bounds3::from_points(positions.iter()).unwrap();

        assert_eq!(bounds.min, Point3f::new(0.0, -1.0, -2.0));
        assert_eq!(bounds.max, Point3f::new(4.0, 1.0, 2.0));
        assert_eq!(bounds.center(), Point3f::new(2.0, 0.0, 0.0));
        assert_relative_eq!(bounds.diagonal(), 24.0_f32.sqrt());
    }

    #[test]
    fn test_bounds_empty() {
        let positions: [[f32; 3]; 0] = [];
        assert!(Bounds3::from_points(positions.iter()).is_none());
    }
}
