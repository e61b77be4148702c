use crate::core::SummaryLogic;
use crate::models::SessionRecord;
use crate::ui::ReportSink;

pub fn handle(records: &[SessionRecord], out: &mut dyn ReportSink) {
    SummaryLogic::report(records, out);
}
