/// A plain CSV table: header plus rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Cells of column `idx`, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |r| r[idx].as_str())
    }
}

/// Counters reported after a cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub rows_read: usize,
    pub duplicates_removed: usize,
    pub cells_filled: usize,
}
