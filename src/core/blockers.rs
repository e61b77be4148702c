use crate::core::{last_n, section};
use crate::models::{Field, SessionRecord};
use crate::ui::ReportSink;

/// Records carrying a reported blocker or issue, in file order.
#[derive(Debug, Default)]
pub struct BlockerAnalysis<'a> {
    pub blocked: Vec<&'a SessionRecord>,
    pub issues: Vec<&'a SessionRecord>,
}

impl BlockerAnalysis<'_> {
    pub fn has_blockers(&self) -> bool {
        !self.blocked.is_empty()
    }
}

pub struct BlockerLogic;

impl BlockerLogic {
    pub fn analyze(records: &[SessionRecord]) -> BlockerAnalysis<'_> {
        BlockerAnalysis {
            blocked: records
                .iter()
                .filter(|r| r.reported(Field::Blockers).is_some())
                .collect(),
            issues: records
                .iter()
                .filter(|r| r.reported(Field::IssuesEncountered).is_some())
                .collect(),
        }
    }

    /// Print blockers and issues; only the last `recent` of each list (file order) are listed.
    ///
    /// Issues are only reported when at least one blocker exists.
    pub fn render(analysis: &BlockerAnalysis<'_>, recent: usize, out: &mut dyn ReportSink) {
        out.emit("");
        section(out, "🚫 BLOCKER ANALYSIS");

        if !analysis.has_blockers() {
            out.emit("✅ No blockers reported!");
            return;
        }

        out.emit(&format!(
            "🔍 Sessions with blockers: {}",
            analysis.blocked.len()
        ));
        out.emit("");
        out.emit("📋 Recent Blockers:");
        for record in last_n(analysis.blocked.as_slice(), recent) {
            out.emit(&format!(
                "  • {}: {}",
                record.raw(Field::SessionId),
                record.raw(Field::Blockers)
            ));
        }

        if analysis.issues.is_empty() {
            return;
        }

        out.emit("");
        out.emit(&format!("🐛 Sessions with issues: {}", analysis.issues.len()));
        out.emit("");
        out.emit("📋 Recent Issues:");
        for record in last_n(analysis.issues.as_slice(), recent) {
            out.emit(&format!(
                "  • {}: {}",
                record.raw(Field::SessionId),
                record.raw(Field::IssuesEncountered)
            ));
            if let Some(resolution) = record.reported(Field::Resolutions) {
                out.emit(&format!("    ✅ Resolution: {resolution}"));
            }
        }
    }

    pub fn report(records: &[SessionRecord], recent: usize, out: &mut dyn ReportSink) {
        Self::render(&Self::analyze(records), recent, out);
    }
}
