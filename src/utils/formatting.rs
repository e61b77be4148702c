//! Formatting helpers shared by the reports and the cleaner.

/// Placeholder some tools write into free-text columns instead of leaving them empty.
pub const NONE_MARKER: &str = "None";

/// True when a free-text cell carries real content (not empty, not "None").
pub fn is_reported(s: &str) -> bool {
    !s.is_empty() && s != NONE_MARKER
}

/// Average with one decimal, e.g. `15.0`.
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// Number for a CSV cell: integral values keep one decimal (`15.0`),
/// others use the shortest exact representation (`12.5`, `3.3333333333333335`).
pub fn float_cell(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Separator line used under report headers.
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}
