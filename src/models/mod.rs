pub mod field;
pub mod record;
pub mod summary;
pub mod table;

pub use field::Field;
pub use record::SessionRecord;
pub use summary::{FrequencyTable, SessionSummary};
pub use table::{CleanStats, DataTable};
