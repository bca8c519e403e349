pub mod files;
pub mod history;
pub mod storage;

pub use files::{atomic_write, ensure_protocol_dir, get_protocol_dir, init_local_protocol, read_file};
pub use history::{History, HistoryStore, HISTORY_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage};
