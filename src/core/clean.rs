use crate::errors::AppResult;
use crate::models::{CleanStats, DataTable};
use crate::utils::formatting::float_cell;
use crate::utils::parse_optional_float;
use std::collections::HashSet;
use std::path::Path;

/// How empty cells of a column are filled.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    /// Every non-empty cell is a number; carries the column mean.
    Numeric(f64),
    Text,
    /// No cell has a value; nothing to fill with.
    Empty,
}

pub struct CleanLogic;

impl CleanLogic {
    /// Drop duplicate rows (first occurrence kept), then fill empty cells:
    /// text columns with `fill_text`, numeric columns with their mean.
    pub fn clean(table: &DataTable, fill_text: &str) -> (DataTable, CleanStats) {
        let mut cleaned = Self::dedup(table);

        let mut stats = CleanStats {
            rows_read: table.rows.len(),
            duplicates_removed: table.rows.len() - cleaned.rows.len(),
            cells_filled: 0,
        };

        let kinds: Vec<ColumnKind> = (0..cleaned.headers.len())
            .map(|idx| Self::classify(cleaned.column(idx)))
            .collect();

        for row in &mut cleaned.rows {
            for (cell, kind) in row.iter_mut().zip(&kinds) {
                if !cell.is_empty() {
                    continue;
                }
                match kind {
                    ColumnKind::Numeric(mean) => *cell = float_cell(*mean),
                    ColumnKind::Text => *cell = fill_text.to_string(),
                    ColumnKind::Empty => continue,
                }
                stats.cells_filled += 1;
            }
        }

        (cleaned, stats)
    }

    /// Copy of `table` without exact duplicate rows, order preserved.
    pub fn dedup(table: &DataTable) -> DataTable {
        let mut seen: HashSet<&Vec<String>> = HashSet::new();
        let mut out = DataTable::new(table.headers.clone());

        for row in &table.rows {
            if seen.insert(row) {
                out.add_row(row.clone());
            }
        }

        out
    }

    pub fn classify<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
        let mut sum = 0.0;
        let mut count = 0usize;
        let mut numeric = true;

        for cell in cells.filter(|c| !c.is_empty()) {
            match parse_optional_float(cell) {
                Some(v) if numeric => {
                    sum += v;
                    count += 1;
                }
                Some(_) => {}
                None => numeric = false,
            }
        }

        if !numeric {
            ColumnKind::Text
        } else if count == 0 {
            ColumnKind::Empty
        } else {
            ColumnKind::Numeric(sum / count as f64)
        }
    }

    /// Write header and rows to `path`, replacing any existing file.
    pub fn write_table(table: &DataTable, path: &Path) -> AppResult<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        if !table.headers.is_empty() {
            wtr.write_record(&table.headers)?;
        }
        for row in &table.rows {
            wtr.write_record(row)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
