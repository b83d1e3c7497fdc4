//! Scalar-colored point cloud scene
//!
//! A [`PointCloudScene`] owns its point cloud, the scalar range used for
//! coloring and the lookup table. The renderable is derived on demand and
//! cached until the next mutation.

use crate::color::ColorLookupTable;
use crate::error::Result;
use crate::point::{Point3d, PointVertex};
use crate::point_cloud::ScalarPointCloud;
use crate::range::ScalarRange;
use crate::renderable::Renderable;

#[derive(Debug, Clone, Default)]
pub struct PointCloudScene {
    cloud: ScalarPointCloud,
    range: Option<ScalarRange>,
    lookup_table: ColorLookupTable,
    cached: Option<Renderable>,
}

impl PointCloudScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cloud: ScalarPointCloud::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Append a point; its scalar sample is the z coordinate
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) {
        self.cloud.push(Point3d::new(x, y, z), z);
        self.invalidate();
    }

    /// Set the range scalars are normalized against before color lookup
    pub fn set_scalar_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.range = Some(ScalarRange::new(min, max)?);
        self.invalidate();
        Ok(())
    }

    pub fn set_lookup_table(&mut self, lookup_table: ColorLookupTable) {
        self.lookup_table = lookup_table;
        self.invalidate();
    }

    /// Remove every point; the scalar range is kept
    pub fn clear(&mut self) {
        self.cloud.clear();
        self.invalidate();
    }

    pub fn cloud(&self) -> &ScalarPointCloud {
        &self.cloud
    }

    pub fn len(&self) -> usize {
        self.cloud.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cloud.is_empty()
    }

    pub fn scalar_range(&self) -> Option<&ScalarRange> {
        self.range.as_ref()
    }

    pub fn lookup_table(&self) -> &ColorLookupTable {
        &self.lookup_table
    }

    /// Whether the cached renderable is missing or stale
    pub fn is_dirty(&self) -> bool {
        self.cached.is_none()
    }

    /// Range used for coloring: the explicit one, else the data's own extent
    pub fn effective_range(&self) -> Option<ScalarRange> {
        self.range.or_else(|| {
            self.cloud
                .scalar_extent()
                .and_then(|(lo, hi)| ScalarRange::new(lo, hi).ok())
        })
    }

    /// Derive the renderable from the current state without touching the cache
    ///
    /// Points with a non-finite coordinate cannot be placed and are left out;
    /// every other point becomes one vertex.
    pub fn build_renderable(&self) -> Renderable {
        let range = self.effective_range();
        let vertices: Vec<PointVertex> = match &range {
            Some(range) => self
                .cloud
                .iter()
                .filter(|(point, _)| point.coords.iter().all(|c| c.is_finite()))
                .map(|(point, scalar)| {
                    PointVertex::from_point(point, self.lookup_table.map(scalar, range))
                })
                .collect(),
            None => Vec::new(),
        };

        let skipped = self.cloud.len() - vertices.len();
        if skipped > 0 {
            tracing::warn!(skipped, "points with non-finite coordinates left out");
        }

        tracing::debug!(
            points = vertices.len(),
            range = ?range.map(|r| (r.min(), r.max())),
            "built point cloud renderable"
        );

        Renderable::new(vertices, range)
    }

    /// Cached renderable, rebuilt only when the scene changed since last call
    pub fn renderable(&mut self) -> &Renderable {
        let renderable = match self.cached.take() {
            Some(renderable) => renderable,
            None => self.build_renderable(),
        };
        self.cached.insert(renderable)
    }

    fn invalidate(&mut self) {
        self.cached = None;
    }
}
