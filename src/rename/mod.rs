mod runner;
mod types;

pub use runner::{rename_directory, RenameOptions, LONG_PATH_THRESHOLD};
pub use types::{FileOutcome, FileRecord, RunSummary, SkipReason};
