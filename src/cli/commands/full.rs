use crate::config::Config;
use crate::core::RULE_WIDTH;
use crate::models::SessionRecord;
use crate::ui::ReportSink;
use crate::utils::formatting::rule;

/// Summary, then blocker analysis, then a closing banner with usage hints.
pub fn handle(records: &[SessionRecord], cfg: &Config, out: &mut dyn ReportSink) {
    super::summary::handle(records, out);
    super::blockers::handle(records, cfg, out);

    out.emit("");
    out.emit(&rule(RULE_WIDTH));
    out.emit("📊 Analysis complete!");
    out.emit("");
    out.emit("Usage examples:");
    out.emit("  vibestats --search 'model'");
    out.emit("  vibestats --blockers-only");
    out.emit("  vibestats --summary-only");
}
