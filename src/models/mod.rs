pub mod duration;
pub mod entry;
pub mod month_summary;
pub mod settings;
pub mod timebase;

pub use duration::WorkDuration;
pub use entry::{Entry, EntryExport};
pub use month_summary::{MonthSummary, SummaryRow};
pub use settings::SheetSettings;
pub use timebase::Timebase;
