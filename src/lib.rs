pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod scanner;
pub mod validator;

pub use error::{AppError, ExitCode};
pub use parser::{extract_identifier, parse_file_name, target_file_name, ParsedFileName};
pub use rename::{
    rename_directory, FileOutcome, FileRecord, RenameOptions, RunSummary, SkipReason,
};
pub use scanner::{scan_json_files, JsonFileEntry, ScannerError};
pub use validator::{validate_archive, validate_content, ContentError};
