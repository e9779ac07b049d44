use crate::validator::ContentError;
use std::fmt;
use std::path::PathBuf;

/// Why a file was left alone without being checked or renamed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// File name has no trailing `[digits].json`
    NoIdentifier,
    /// File already carries its `[ID].json` name
    AlreadyTargetFormat,
    /// Another file holds, or earlier in the run claimed, the target name
    TargetExists,
}

impl SkipReason {
    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::NoIdentifier => "no identifier",
            SkipReason::AlreadyTargetFormat => "already target format",
            SkipReason::TargetExists => "target exists",
        }
    }
}

/// Terminal state of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Renamed,
    WouldRename,
    Skipped(SkipReason),
    Invalid(ContentError),
    RenameFailed(String),
}

impl FileOutcome {
    /// Renamed, or would be renamed in a dry run
    pub fn is_renamed(&self) -> bool {
        matches!(self, FileOutcome::Renamed | FileOutcome::WouldRename)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FileOutcome::Invalid(_) | FileOutcome::RenameFailed(_))
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Renamed => write!(f, "renamed"),
            FileOutcome::WouldRename => write!(f, "would rename"),
            FileOutcome::Skipped(reason) => write!(f, "skipped: {}", reason.description()),
            FileOutcome::Invalid(err) => write!(f, "invalid: {}", err),
            FileOutcome::RenameFailed(msg) => write!(f, "rename failed: {}", msg),
        }
    }
}

/// Everything learned about one directory entry during a run
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Full path to the source file
    pub source_path: PathBuf,
    /// Original file name
    pub source_name: String,
    /// Identifier extracted from the name, if any
    pub identifier: Option<String>,
    /// Full path to the `[ID].json` target, once computed
    pub target_path: Option<PathBuf>,
    /// Whether the source path exceeded the long-path threshold
    pub long_path: bool,
    pub outcome: FileOutcome,
}

impl FileRecord {
    pub fn target_name(&self) -> Option<String> {
        self.target_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }
}

/// Result of processing one directory
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Directory that was processed
    pub directory: PathBuf,
    /// Records in processing order
    pub records: Vec<FileRecord>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(directory: PathBuf, dry_run: bool) -> Self {
        Self {
            directory,
            records: Vec::new(),
            dry_run,
        }
    }

    pub fn add_record(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    pub fn renamed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_renamed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_skipped()).count()
    }

    pub fn errored(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_error()).count()
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn long_paths(&self) -> usize {
        self.records.iter().filter(|r| r.long_path).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.outcome.is_error())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
