pub mod blockers;
pub mod clean;
pub mod loader;
pub mod search;
pub mod summary;

pub use blockers::{BlockerAnalysis, BlockerLogic};
pub use clean::CleanLogic;
pub use loader::Loader;
pub use search::{SearchHit, SearchLogic};
pub use summary::SummaryLogic;

use crate::ui::ReportSink;
use crate::utils::formatting::rule;
use ansi_term::Colour;

/// Width of the `=====` rule printed under section titles.
pub const RULE_WIDTH: usize = 50;

/// Emit a coloured section title followed by its rule.
pub(crate) fn section(out: &mut dyn ReportSink, title: &str) {
    out.emit(&Colour::Cyan.bold().paint(title).to_string());
    out.emit(&rule(RULE_WIDTH));
}

/// The last `n` items of `items`, in their original order.
pub(crate) fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}
