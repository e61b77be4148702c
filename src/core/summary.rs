use crate::core::section;
use crate::models::{Field, FrequencyTable, SessionRecord, SessionSummary};
use crate::ui::ReportSink;
use crate::utils::formatting::one_decimal;
use crate::utils::parse_optional_int;
use std::collections::HashSet;

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn compute(records: &[SessionRecord]) -> SessionSummary {
        let unique_sessions = records
            .iter()
            .filter_map(|r| r.value(Field::SessionId))
            .collect::<HashSet<_>>()
            .len();

        // summed as f64: any u64 duration is valid input, their sum may not fit
        let (total, count) = records
            .iter()
            .filter_map(|r| parse_optional_int(r.raw(Field::DurationMinutes)))
            .fold((0.0_f64, 0usize), |(total, count), d| (total + d as f64, count + 1));

        let average_duration = if count == 0 {
            0.0
        } else {
            total / count as f64
        };

        SessionSummary {
            total_snapshots: records.len(),
            unique_sessions,
            average_duration,
            session_types: frequencies(records, Field::SessionType),
            progress_statuses: frequencies(records, Field::ProgressStatus),
        }
    }

    pub fn render(summary: &SessionSummary, out: &mut dyn ReportSink) {
        section(out, "📊 VIBE SESSIONS SUMMARY");

        out.emit(&format!("🎯 Total Sessions: {}", summary.unique_sessions));
        out.emit(&format!("📸 Total Snapshots: {}", summary.total_snapshots));
        out.emit(&format!(
            "⏱️  Average Duration: {} minutes",
            one_decimal(summary.average_duration)
        ));

        out.emit("");
        out.emit("🔧 Session Types:");
        emit_counts(out, &summary.session_types);

        out.emit("");
        out.emit("📈 Progress Status:");
        emit_counts(out, &summary.progress_statuses);
    }

    /// Compute and render in one go.
    pub fn report(records: &[SessionRecord], out: &mut dyn ReportSink) {
        Self::render(&Self::compute(records), out);
    }
}

fn frequencies(records: &[SessionRecord], field: Field) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for value in records.iter().filter_map(|r| r.value(field)) {
        table.add(value);
    }
    table
}

fn emit_counts(out: &mut dyn ReportSink, table: &FrequencyTable) {
    for (value, count) in table.iter() {
        out.emit(&format!("  • {value}: {count} snapshots"));
    }
}
