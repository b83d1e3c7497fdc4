//! Load configuration: column selection, scaling and delimiter

use crackvis_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Field separator of a tabular export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    /// Any run of spaces or tabs
    #[default]
    Whitespace,
    Comma,
    Tab,
    Semicolon,
}

impl Delimiter {
    /// Split a line into trimmed fields
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
            Delimiter::Tab => line.split('\t').map(str::trim).collect(),
            Delimiter::Semicolon => line.split(';').map(str::trim).collect(),
        }
    }
}

/// 0-based indices of the X, Y and scalar-field columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub x: usize,
    pub y: usize,
    pub scalar: usize,
}

impl ColumnSelection {
    pub fn new(x: usize, y: usize, scalar: usize) -> Self {
        Self { x, y, scalar }
    }

    /// Smallest field count a row needs to cover every selected column
    pub fn required_fields(&self) -> usize {
        self.x.max(self.y).max(self.scalar) + 1
    }
}

/// Dataset layouts of the ABAQUS crack exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPreset {
    /// Maximum principal stress in column 7, in units of 1e8 Pa
    PrincipalStress,
    /// Nodal temperature in column 3, in units of 1e2
    Temperature,
}

impl FieldPreset {
    pub fn columns(&self) -> ColumnSelection {
        match self {
            FieldPreset::PrincipalStress => ColumnSelection::new(1, 2, 7),
            FieldPreset::Temperature => ColumnSelection::new(1, 2, 3),
        }
    }

    pub fn scale_divisor(&self) -> f64 {
        match self {
            FieldPreset::PrincipalStress => 1e8,
            FieldPreset::Temperature => 1e2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldPreset::PrincipalStress => "principal stress",
            FieldPreset::Temperature => "temperature",
        }
    }
}

/// Everything a single table load needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub columns: ColumnSelection,
    /// Every scalar is divided by this value after parsing
    pub scale_divisor: f64,
    pub delimiter: Delimiter,
}

impl LoadOptions {
    pub fn new(columns: ColumnSelection, scale_divisor: f64) -> Self {
        Self {
            columns,
            scale_divisor,
            delimiter: Delimiter::default(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reject divisors that would make the scaled scalars meaningless
    pub fn validate(&self) -> Result<()> {
        if !(self.scale_divisor.is_finite() && self.scale_divisor > 0.0) {
            return Err(Error::InvalidData(format!(
                "scale divisor must be positive and finite, got {}",
                self.scale_divisor
            )));
        }
        Ok(())
    }
}

impl From<FieldPreset> for LoadOptions {
    fn from(preset: FieldPreset) -> Self {
        Self::new(preset.columns(), preset.scale_divisor())
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        FieldPreset::PrincipalStress.into()
    }
}
