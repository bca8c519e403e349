pub mod enums;
pub mod record;

pub use enums::{JournalField, PaneFocus, ParseTaskIdError, TaskId, UiMode};
pub use record::{ChecklistItem, DailyRecord, Journal};
