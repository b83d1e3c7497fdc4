//! Point cloud with a parallel per-point scalar field

use crate::point::Point3d;
use serde::{Deserialize, Serialize};

/// An append-only point cloud where every point carries one scalar sample
///
/// Points and scalars are stored in parallel vectors and always have the
/// same length. Existing entries are never mutated; only [`clear`] removes
/// them, and it removes all of them.
///
/// [`clear`]: ScalarPointCloud::clear
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarPointCloud {
    points: Vec<Point3d>,
    scalars: Vec<f64>,
}

impl ScalarPointCloud {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new point cloud with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            scalars: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point and its scalar sample
    pub fn push(&mut self, point: Point3d, scalar: f64) {
        self.points.push(point);
        self.scalars.push(scalar);
    }

    /// Point at `index`, in insertion order
    pub fn point(&self, index: usize) -> Option<&Point3d> {
        self.points.get(index)
    }

    /// Scalar sample at `index`, in insertion order
    pub fn scalar(&self, index: usize) -> Option<f64> {
        self.scalars.get(index).copied()
    }

    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    pub fn scalars(&self) -> &[f64] {
        &self.scalars
    }

    /// Iterate over `(point, scalar)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Point3d, f64)> + '_ {
        self.points.iter().zip(self.scalars.iter().copied())
    }

    /// Minimum and maximum finite scalar, or `None` if there is none
    pub fn scalar_extent(&self) -> Option<(f64, f64)> {
        let mut iter = self.scalars.iter().copied().filter(|s| s.is_finite());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
    }

    /// Clear all points from the cloud
    pub fn clear(&mut self) {
        self.points.clear();
        self.scalars.clear();
    }

    /// Reserve capacity for additional points
    pub fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
        self.scalars.reserve(additional);
    }
}

impl Extend<(Point3d, f64)> for ScalarPointCloud {
    fn extend<I: IntoIterator<Item = (Point3d, f64)>>(&mut self, iter: I) {
        for (point, scalar) in iter {
            self.push(point, scalar);
        }
    }
}

impl FromIterator<(Point3d, f64)> for ScalarPointCloud {
    fn from_iter<I: IntoIterator<Item = (Point3d, f64)>>(iter: I) -> Self {
        let mut cloud = Self::new();
        cloud.extend(iter);
        cloud
    }
}
