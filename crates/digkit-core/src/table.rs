//! Tabular data source: the leg table spreadsheet.
//!
//! Loads the first worksheet of an xlsx workbook. Columns are matched by
//! header name when all expected headers are present, otherwise the first
//! four columns are taken positionally; the header row is consumed either
//! way. String cells are trimmed, numeric cells coerce from float, integer,
//! or parseable text, and rows with all four fields missing are dropped.

use crate::error::{DiagramError, Result};
use crate::types::LegRecord;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::info;

/// Expected column headers, in order.
const EXPECTED_COLUMNS: [&str; 4] = [
    "Tower Type",
    "Leg Type",
    "Distance to Center",
    "Square Side",
];

static EMPTY_CELL: Data = Data::Empty;

/// All leg rows loaded from a spreadsheet, with per-tower lookups.
#[derive(Debug, Clone)]
pub struct DiagramTable {
    rows: Vec<LegRecord>,
}

impl DiagramTable {
    /// Load the leg table from an xlsx workbook.
    ///
    /// Reads the first worksheet only. Fails when the file is missing, the
    /// workbook cannot be read, or the numeric columns carry no usable
    /// values at all.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DiagramError::MissingSource(path.to_path_buf()));
        }

        let mut workbook =
            open_workbook_auto(path).map_err(|e| DiagramError::Spreadsheet(e.to_string()))?;
        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| DiagramError::Spreadsheet("workbook has no worksheets".to_string()))?;
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| DiagramError::Spreadsheet(e.to_string()))?;

        let cells: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();
        let table = Self::from_cells(&cells)?;
        info!(
            rows = table.rows.len(),
            "Loaded leg table from {}",
            path.display()
        );
        Ok(table)
    }

    /// Build a table from raw worksheet cells. The first row is the header.
    fn from_cells(cells: &[Vec<Data>]) -> Result<Self> {
        let (header, data) = cells
            .split_first()
            .ok_or_else(|| DiagramError::Schema("worksheet is empty".to_string()))?;
        let columns = detect_columns(header);

        let mut rows = Vec::new();
        for row in data {
            let cell = |i: usize| row.get(columns[i]).unwrap_or(&EMPTY_CELL);
            let tower_type = cell_string(cell(0));
            let leg_type = cell_string(cell(1));
            let distance_m = cell_f64(cell(2));
            let square_side_m = cell_f64(cell(3));

            // Rows with all four fields missing are dropped.
            if tower_type.is_none()
                && leg_type.is_none()
                && distance_m.is_none()
                && square_side_m.is_none()
            {
                continue;
            }

            rows.push(LegRecord {
                tower_type: tower_type.unwrap_or_default(),
                leg_type: leg_type.unwrap_or_default(),
                distance_m,
                square_side_m,
            });
        }

        if rows.is_empty() {
            return Err(DiagramError::Schema(
                "table contains no data rows".to_string(),
            ));
        }
        if rows.iter().all(|r| r.distance_m.is_none())
            || rows.iter().all(|r| r.square_side_m.is_none())
        {
            return Err(DiagramError::Schema(
                "Distance to Center and/or Square Side columns are not numeric or are empty"
                    .to_string(),
            ));
        }

        Ok(Self { rows })
    }

    /// All loaded rows.
    pub fn rows(&self) -> &[LegRecord] {
        &self.rows
    }

    /// Sorted, de-duplicated tower types present in the table.
    pub fn tower_types(&self) -> Vec<String> {
        let mut towers: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.tower_type.clone())
            .filter(|t| !t.is_empty())
            .collect();
        towers.sort();
        towers.dedup();
        towers
    }

    /// All rows belonging to a tower type.
    pub fn rows_for_tower(&self, tower: &str) -> Vec<&LegRecord> {
        self.rows
            .iter()
            .filter(|r| r.tower_type == tower)
            .collect()
    }

    /// The square side for a tower type: the first non-null value among its
    /// rows. Rows are not cross-validated against each other.
    pub fn side_for_tower(&self, tower: &str) -> Option<f64> {
        self.rows
            .iter()
            .filter(|r| r.tower_type == tower)
            .find_map(|r| r.square_side_m)
    }

    /// The first row of a tower type with the given leg type.
    pub fn record_for(&self, tower: &str, leg_type: &str) -> Option<&LegRecord> {
        self.rows
            .iter()
            .find(|r| r.tower_type == tower && r.leg_type == leg_type)
    }
}

/// Map the expected columns to worksheet indices: by header name when every
/// expected header is present, otherwise the first four columns in order.
fn detect_columns(header: &[Data]) -> [usize; 4] {
    let names: Vec<String> = header
        .iter()
        .map(|c| cell_string(c).unwrap_or_default())
        .collect();

    let by_name: Option<Vec<usize>> = EXPECTED_COLUMNS
        .iter()
        .map(|want| names.iter().position(|name| name == want))
        .collect();

    match by_name {
        Some(found) => [found[0], found[1], found[2], found[3]],
        None => [0, 1, 2, 3],
    }
}

/// Trimmed text content of a cell, `None` when empty or unusable.
fn cell_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) => Some(format!("{}", f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric content of a cell; text parses after trimming, anything else
/// coerces to missing.
fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
