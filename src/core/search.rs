use crate::core::section;
use crate::models::{Field, SessionRecord};
use crate::ui::ReportSink;

/// A matching record and the first searchable field that contained the query.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub record: &'a SessionRecord,
    pub field: Field,
}

pub struct SearchLogic;

impl SearchLogic {
    /// Case-insensitive substring search over the free-text columns.
    /// Each record appears at most once, in file order.
    pub fn find<'a>(records: &'a [SessionRecord], query: &str) -> Vec<SearchHit<'a>> {
        let needle = query.to_lowercase();

        records
            .iter()
            .filter_map(|record| {
                Field::SEARCHABLE
                    .into_iter()
                    .find(|&f| {
                        record
                            .value(f)
                            .is_some_and(|v| v.to_lowercase().contains(&needle))
                    })
                    .map(|field| SearchHit { record, field })
            })
            .collect()
    }

    pub fn render(query: &str, hits: &[SearchHit<'_>], out: &mut dyn ReportSink) {
        out.emit("");
        section(out, &format!("🔍 SEARCH RESULTS FOR: '{query}'"));

        if hits.is_empty() {
            out.emit("❌ No matches found");
            return;
        }

        out.emit(&format!("✅ Found {} matching snapshots", hits.len()));

        for hit in hits {
            let r = hit.record;
            out.emit("");
            out.emit(&format!(
                "📸 {} - {}",
                r.raw(Field::SessionId),
                r.raw(Field::SnapshotId)
            ));
            out.emit(&format!("  📅 {}", r.raw(Field::Timestamp)));
            out.emit(&format!("  🔧 {}", r.raw(Field::SessionFocus)));
        }
    }

    pub fn report(records: &[SessionRecord], query: &str, out: &mut dyn ReportSink) {
        let hits = Self::find(records, query);
        Self::render(query, &hits, out);
    }
}
