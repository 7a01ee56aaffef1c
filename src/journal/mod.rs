mod category;
mod entry;

pub use category::{Category, JournalKind};
pub use entry::LogEntry;
