//! Loading of simulation-exported tables
//!
//! Reads delimited plain-text exports (one node per line) and extracts the
//! X, Y and scalar-field columns into rows that can populate a
//! [`PointCloudScene`](crackvis_core::PointCloudScene).

pub mod options;
pub mod table;

pub use options::{ColumnSelection, Delimiter, FieldPreset, LoadOptions};
pub use table::{LoadedTable, TableLoader, TableRow};
