use crate::config::Config;
use crate::core::BlockerLogic;
use crate::models::SessionRecord;
use crate::ui::ReportSink;

pub fn handle(records: &[SessionRecord], cfg: &Config, out: &mut dyn ReportSink) {
    BlockerLogic::report(records, cfg.recent_limit, out);
}
