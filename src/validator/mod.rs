mod types;

pub use types::*;

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Top-level key holding the thread metadata
pub const THREAD_INFO_KEY: &str = "thread_info";
/// Key inside `thread_info` holding the thread identifier
pub const THREAD_ID_KEY: &str = "thread_id";
/// Top-level key holding the message list
pub const MESSAGES_KEY: &str = "messages";

/// Check that the file at `path` is a readable, structurally valid archive
pub fn validate_archive(path: &Path) -> Result<(), ContentError> {
    trace!(path = ?path, "Validating archive");

    let content = fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

    validate_content(&content)?;

    debug!(path = ?path, "Archive is valid");
    Ok(())
}

/// Check already-loaded archive text.
///
/// Only key presence is checked; values are not inspected, so a `null`
/// value still counts as present.
pub fn validate_content(content: &str) -> Result<(), ContentError> {
    let data: Value =
        serde_json::from_str(content).map_err(|e| ContentError::Parse(e.to_string()))?;

    let thread_info = data
        .get(THREAD_INFO_KEY)
        .ok_or(ContentError::MissingThreadInfo)?;

    if thread_info.get(THREAD_ID_KEY).is_none() {
        return Err(ContentError::MissingThreadId);
    }

    if data.get(MESSAGES_KEY).is_none() {
        return Err(ContentError::MissingMessages);
    }

    Ok(())
}
