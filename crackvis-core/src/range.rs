//! Scalar range used for color mapping

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` that scalar samples are normalized against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    min: f64,
    max: f64,
}

impl ScalarRange {
    /// Create a range, rejecting `min > max` and non-finite bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidData(format!(
                "scalar range bounds must be finite, got ({}, {})",
                min, max
            )));
        }
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map `value` into `[0, 1]`, clamping values outside the range
    ///
    /// A degenerate range (`min == max`) maps every value to `0.0`.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
