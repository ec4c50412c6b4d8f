pub mod enums;
pub mod session;

pub use enums::{Screen, StartError, UiMode};
pub use session::{format_seconds, HistoryEntry, Session};
