use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Suffix a directory entry must carry to be considered an archive
pub const JSON_SUFFIX: &str = ".json";

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileEntry {
    pub name: String,
    pub path: PathBuf,
}

impl JsonFileEntry {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }
}

/// List the immediate `*.json` files of `target`, sorted by name.
///
/// Subdirectories are never entered and entries that are not regular files
/// (including directories whose name ends in `.json`) are ignored.
pub fn scan_json_files(target: &Path) -> Result<Vec<JsonFileEntry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let io_error = |e: std::io::Error| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError {
                path: target.to_path_buf(),
                source: e,
            }
        }
    };

    let mut entries = Vec::new();
    let mut excluded = 0usize;

    for entry in fs::read_dir(target).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        if !name.ends_with(JSON_SUFFIX) {
            trace!(name = %name, "Skipping non-JSON entry");
            continue;
        }

        if !path.is_file() {
            trace!(name = %name, "Skipping non-file entry");
            excluded += 1;
            continue;
        }

        debug!(name = %name, "Found JSON file");
        entries.push(JsonFileEntry::new(name, path));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    if excluded > 0 {
        debug!(excluded, "Excluded *.json entries that are not regular files");
    }

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
