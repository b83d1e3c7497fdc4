//! Delimited table reader for simulation exports
//!
//! Each data line holds an arbitrary number of numeric fields. Three of them
//! are selected by index as X, Y and the scalar field; the scalar is divided
//! by the configured scale before the dataset extent is computed.

use crate::options::LoadOptions;
use crackvis_core::{Error, PointCloudScene, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One parsed data line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub x: f64,
    pub y: f64,
    /// Scalar field value, already divided by the scale divisor
    pub scalar: f64,
}

/// All rows of a table together with the scalar extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedTable {
    pub rows: Vec<TableRow>,
    pub min_scalar: f64,
    pub max_scalar: f64,
}

impl LoadedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn scalars(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.scalar)
    }

    /// Push every row into `scene` and set its scalar range to the table extent
    ///
    /// The scalar becomes the point's z coordinate, so the cloud is a height
    /// field of the selected quantity over the (X, Y) plane.
    pub fn populate(&self, scene: &mut PointCloudScene) -> Result<()> {
        for row in &self.rows {
            scene.add_point(row.x, row.y, row.scalar);
        }
        scene.set_scalar_range(self.min_scalar, self.max_scalar)
    }

    /// Build a fresh scene from this table
    pub fn to_scene(&self) -> Result<PointCloudScene> {
        let mut scene = PointCloudScene::with_capacity(self.rows.len());
        self.populate(&mut scene)?;
        Ok(scene)
    }
}

/// Reader for whitespace (or otherwise) delimited numeric tables
pub struct TableLoader;

impl TableLoader {
    /// Load a table from `path`
    pub fn load<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<LoadedTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;

        Self::load_from_reader(BufReader::new(file), options, &path.display().to_string())
    }

    /// Load a table from any buffered reader; `source` names it in errors
    pub fn load_from_reader<R: BufRead>(
        reader: R,
        options: &LoadOptions,
        source: &str,
    ) -> Result<LoadedTable> {
        options.validate()?;

        let mut rows = Vec::new();
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if !is_data_line(&line) {
                continue;
            }
            rows.push(Self::parse_line(&line, index + 1, options)?);
        }

        let (min_scalar, max_scalar) = rows
            .iter()
            .map(|row| row.scalar)
            .fold(None, |extent: Option<(f64, f64)>, s| match extent {
                Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
                None => Some((s, s)),
            })
            .ok_or_else(|| Error::EmptyDataset {
                path: source.to_string(),
            })?;

        tracing::debug!(
            source,
            rows = rows.len(),
            min_scalar,
            max_scalar,
            "loaded table"
        );

        Ok(LoadedTable {
            rows,
            min_scalar,
            max_scalar,
        })
    }

    /// Parse one data line; `line_number` is 1-based
    fn parse_line(line: &str, line_number: usize, options: &LoadOptions) -> Result<TableRow> {
        let fields = options.delimiter.split(line);
        let columns = &options.columns;

        let x = parse_field(&fields, columns.x, line_number)?;
        let y = parse_field(&fields, columns.y, line_number)?;
        let raw = parse_field(&fields, columns.scalar, line_number)?;

        let scalar = raw / options.scale_divisor;
        if !scalar.is_finite() {
            return Err(Error::Parse {
                line: line_number,
                column: columns.scalar,
                message: format!(
                    "{} / {} overflows to a non-finite scalar",
                    raw, options.scale_divisor
                ),
            });
        }

        Ok(TableRow { x, y, scalar })
    }
}

/// Blank lines and `#` comments carry no data
fn is_data_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

fn parse_field(fields: &[&str], column: usize, line: usize) -> Result<f64> {
    let field = fields.get(column).ok_or_else(|| Error::Parse {
        line,
        column,
        message: format!("missing field (row has {} fields)", fields.len()),
    })?;

    let value: f64 = field.parse().map_err(|_| Error::Parse {
        line,
        column,
        message: format!("'{}' is not a number", field),
    })?;

    if !value.is_finite() {
        return Err(Error::Parse {
            line,
            column,
            message: format!("'{}' is not a finite number", field),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ColumnSelection, Delimiter, FieldPreset};
    use approx::assert_relative_eq;
    use std::io::{Cursor, Write};

    fn options(scalar: usize, divisor: f64) -> LoadOptions {
        LoadOptions::new(ColumnSelection::new(1, 2, scalar), divisor)
    }

    fn load_str(content: &str, options: &LoadOptions) -> Result<LoadedTable> {
        TableLoader::load_from_reader(Cursor::new(content), options, "inline")
    }

    #[test]
    fn test_three_row_example() {
        let table = load_str("0 0 1 100\n0 1 2 300\n0 2 3 500", &options(3, 100.0)).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.scalars().collect::<Vec<_>>(), vec![1.0, 3.0, 5.0]);
        assert_eq!((table.min_scalar, table.max_scalar), (1.0, 5.0));
        assert_eq!(table.rows[1], TableRow { x: 1.0, y: 2.0, scalar: 3.0 });
    }

    #[test]
    fn test_scalar_is_exact_quotient() {
        let raw = [123456789.0, -2.5e8, 7.0];
        let content: String = raw
            .iter()
            .map(|v| format!("1 0.5 0.25 {}\n", v))
            .collect();
        let table = load_str(&content, &options(3, 1e8)).unwrap();

        for (row, raw) in table.rows.iter().zip(raw) {
            assert_eq!(row.scalar, raw / 1e8);
        }
    }

    #[test]
    fn test_range_brackets_every_scalar() {
        let content = "0 1 1 -4\n0 2 2 9\n0 3 3 0.5\n0 4 4 2\n";
        let table = load_str(content, &options(3, 2.0)).unwrap();

        assert_relative_eq!(table.min_scalar, -2.0);
        assert_relative_eq!(table.max_scalar, 4.5);
        assert!(table
            .scalars()
            .all(|s| table.min_scalar <= s && s <= table.max_scalar));
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let content = "# node x y t\n\n1 0 0 10\n   \n2 1 1 20\n# trailer\n";
        let table = load_str(content, &options(3, 1.0)).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() {
        let content = "1 0 0 10\n2 1 abc 20\n";
        match load_str(content, &options(3, 1.0)) {
            Err(Error::Parse { line, column, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_parse_error() {
        let content = "1 0 0 10\n2 1 1\n";
        assert!(matches!(
            load_str(content, &options(3, 1.0)),
            Err(Error::Parse { line: 2, column: 3, .. })
        ));
    }

    #[test]
    fn test_non_finite_value_is_parse_error() {
        assert!(matches!(
            load_str("1 0 0 nan\n", &options(3, 1.0)),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(
            load_str("", &options(3, 1.0)),
            Err(Error::EmptyDataset { .. })
        ));
        assert!(matches!(
            load_str("# only a header\n\n", &options(3, 1.0)),
            Err(Error::EmptyDataset { .. })
        ));
    }

    #[test]
    fn test_invalid_divisor_is_rejected() {
        assert!(matches!(
            load_str("1 0 0 10\n", &options(3, 0.0)),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_comma_delimited() {
        let opts = options(3, 10.0).with_delimiter(Delimiter::Comma);
        let table = load_str("7, 1.5, 2.5, 30\n8, 2.5, 3.5, 50\n", &opts).unwrap();
        assert_eq!(table.rows[0], TableRow { x: 1.5, y: 2.5, scalar: 3.0 });
        assert_eq!(table.max_scalar, 5.0);
    }

    #[test]
    fn test_scaled_overflow_is_parse_error() {
        match load_str("1 0 0 1e-300\n2 0 0 1e10\n", &options(3, 1e-310)) {
            Err(Error::Parse { line, column, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_tab_delimited() {
        let opts = options(3, 10.0).with_delimiter(Delimiter::Tab);
        let table = load_str("7\t1.5\t2.5\t30\n8\t2.5\t3.5\t50\n", &opts).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], TableRow { x: 2.5, y: 3.5, scalar: 5.0 });
        assert_eq!((table.min_scalar, table.max_scalar), (3.0, 5.0));

        // Spaces inside a tab-delimited row do not split fields
        assert!(matches!(
            load_str("7 1.5 2.5 30\n", &opts),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 0.0 0.0 0 0 0 0 2.0e8").unwrap();
        writeln!(file, "2 0.1 0.0 0 0 0 0 3.0e8").unwrap();

        let table = TableLoader::load(file.path(), &FieldPreset::PrincipalStress.into()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!((table.min_scalar, table.max_scalar), (2.0, 3.0));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.dat");
        assert!(matches!(
            TableLoader::load(&path, &LoadOptions::default()),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_populate_scene() {
        let table = load_str("0 0 1 100\n0 1 2 300\n0 2 3 500", &options(3, 100.0)).unwrap();
        let scene = table.to_scene().unwrap();

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.cloud().scalars(), &[1.0, 3.0, 5.0]);
        let range = scene.scalar_range().unwrap();
        assert_eq!((range.min(), range.max()), (1.0, 5.0));
    }
}
