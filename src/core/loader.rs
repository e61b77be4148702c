use crate::errors::{AppError, AppResult};
use crate::models::{DataTable, Field, SessionRecord};
use crate::ui::messages::warning;
use std::path::Path;

pub struct Loader;

impl Loader {
    /// Read the sessions CSV into records, preserving file order.
    ///
    /// Either every row loads or an error is returned; there is no partial result.
    pub fn load_sessions(path: &Path) -> AppResult<Vec<SessionRecord>> {
        let table = Self::load_table(path)?;

        if !table.headers.is_empty() {
            let missing: Vec<&str> = Field::ALL
                .iter()
                .map(Field::as_str)
                .filter(|name| !table.headers.iter().any(|h| h == *name))
                .collect();

            if !missing.is_empty() {
                warning(format!(
                    "{}: missing columns treated as empty: {}",
                    path.display(),
                    missing.join(", ")
                ));
            }
        }

        let DataTable { headers, rows } = table;
        Ok(rows
            .into_iter()
            .map(|row| SessionRecord::from_pairs(headers.iter().cloned().zip(row)))
            .collect())
    }

    /// Read any CSV with a header row into a [`DataTable`].
    ///
    /// Ragged rows are accepted: short rows are padded with empty cells and
    /// cells beyond the header are dropped, so every row matches the header.
    pub fn load_table(path: &Path) -> AppResult<DataTable> {
        if !path.exists() {
            return Err(AppError::FileNotFound(path.to_path_buf()));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(load_failure)?;

        let headers = rdr
            .headers()
            .map_err(load_failure)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = DataTable::new(headers);
        let width = table.headers.len();
        for result in rdr.records() {
            let record = result.map_err(load_failure)?;
            let mut row: Vec<String> = record.iter().take(width).map(str::to_string).collect();
            row.resize(width, String::new());
            table.add_row(row);
        }

        Ok(table)
    }
}

fn load_failure(e: csv::Error) -> AppError {
    AppError::LoadFailure(e.to_string())
}
