/// Occurrence counts of distinct values, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.entries.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value.to_string(), 1)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(v, c)| (v.as_str(), *c))
    }
}

/// Aggregates shown by the summary report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub total_snapshots: usize,
    pub unique_sessions: usize,
    /// 0.0 when no row carries a usable duration.
    pub average_duration: f64,
    pub session_types: FrequencyTable,
    pub progress_statuses: FrequencyTable,
}
