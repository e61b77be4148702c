use crate::core::SearchLogic;
use crate::models::SessionRecord;
use crate::ui::ReportSink;

pub fn handle(records: &[SessionRecord], term: &str, out: &mut dyn ReportSink) {
    SearchLogic::report(records, term, out);
}
