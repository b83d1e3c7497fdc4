//! Color lookup table for scalar-to-RGB mapping

use crate::range::ScalarRange;
use serde::{Deserialize, Serialize};

/// Hue of pure blue, as a fraction of the color wheel
pub const HUE_BLUE: f32 = 0.667;
/// Hue of pure red
pub const HUE_RED: f32 = 0.0;

pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Discrete color ramp built by interpolating hue in HSV space
///
/// Hue, saturation and value are fractions in `[0, 1]`. The default ramp runs
/// from blue at the bottom of the scalar range to red at the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLookupTable {
    hue_range: (f32, f32),
    saturation: f32,
    value: f32,
    entries: Vec<[f32; 3]>,
}

impl ColorLookupTable {
    /// Build a table of `size` entries over `hue_range`
    ///
    /// `size` is clamped to at least 2 so both ends of the ramp exist.
    pub fn new(size: usize, hue_range: (f32, f32), saturation: f32, value: f32) -> Self {
        let mut table = Self {
            hue_range,
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
            entries: Vec::new(),
        };
        table.build(size.max(2));
        table
    }

    fn build(&mut self, size: usize) {
        let (h0, h1) = self.hue_range;
        let last = (size - 1) as f32;
        self.entries = (0..size)
            .map(|i| {
                let hue = h0 + (h1 - h0) * (i as f32 / last);
                hsv_to_rgb(hue, self.saturation, self.value)
            })
            .collect();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hue_range(&self) -> (f32, f32) {
        self.hue_range
    }

    pub fn entries(&self) -> &[[f32; 3]] {
        &self.entries
    }

    /// Color for `value` within `range`; out-of-range values take the end colors
    pub fn map(&self, value: f64, range: &ScalarRange) -> [f32; 3] {
        let t = range.normalize(value);
        let last = self.entries.len() - 1;
        let index = ((t * self.entries.len() as f64) as usize).min(last);
        self.entries[index]
    }
}

impl Default for ColorLookupTable {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE, (HUE_BLUE, HUE_RED), 1.0, 1.0)
    }
}

/// Convert a hue/saturation/value triple (all in `[0, 1]`) to linear RGB
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let degrees = (hue.rem_euclid(1.0)) * 360.0;
    let c = value * saturation;
    let x = c * (1.0 - ((degrees / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = if degrees < 60.0 {
        (c, x, 0.0)
    } else if degrees < 120.0 {
        (x, c, 0.0)
    } else if degrees < 180.0 {
        (0.0, c, x)
    } else if degrees < 240.0 {
        (0.0, x, c)
    } else if degrees < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r + m, g + m, b + m]
}
