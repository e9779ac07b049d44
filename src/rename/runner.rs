use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::AppError;
use crate::parser::parse_file_name;
use crate::progress::Progress;
use crate::scanner::{scan_json_files, JsonFileEntry};
use crate::validator::validate_archive;

use super::types::{FileOutcome, FileRecord, RunSummary, SkipReason};

/// Paths longer than this many characters trigger a warning
pub const LONG_PATH_THRESHOLD: usize = 250;

/// Options for a rename run
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Rename files on disk; when false only report what would happen
    pub execute: bool,
}

/// Rename every `*.json` archive in `target_dir` to its `[ID].json` form.
///
/// Only a missing or unreadable directory is an error. Every per-file
/// problem is recorded in the returned summary and the run continues.
pub fn rename_directory(
    target_dir: &Path,
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<RunSummary, AppError> {
    rename_directory_with(target_dir, options, progress, |from, to| fs::rename(from, to))
}

fn rename_directory_with<F>(
    target_dir: &Path,
    options: &RenameOptions,
    progress: &mut Progress,
    mut rename: F,
) -> Result<RunSummary, AppError>
where
    F: FnMut(&Path, &Path) -> io::Result<()>,
{
    progress.scan_start(target_dir, options.execute);
    let entries = scan_json_files(target_dir)?;
    progress.scan_complete(entries.len());

    let mut summary = RunSummary::new(target_dir.to_path_buf(), !options.execute);

    if entries.is_empty() {
        info!(path = ?target_dir, "No JSON files found");
        return Ok(summary);
    }

    info!(
        count = entries.len(),
        execute = options.execute,
        "Processing JSON files"
    );

    let total = entries.len();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for (i, entry) in entries.iter().enumerate() {
        progress.file_start(i + 1, total, &entry.name);

        let record = process_file(entry, options, &mut claimed, progress, &mut rename);

        progress.file_outcome(&record);
        summary.add_record(record);
    }

    info!(
        renamed = summary.renamed(),
        skipped = summary.skipped(),
        errored = summary.errored(),
        total = summary.total(),
        "Run complete"
    );

    Ok(summary)
}

fn process_file<F>(
    entry: &JsonFileEntry,
    options: &RenameOptions,
    claimed: &mut HashSet<PathBuf>,
    progress: &mut Progress,
    rename: &mut F,
) -> FileRecord
where
    F: FnMut(&Path, &Path) -> io::Result<()>,
{
    let path_length = entry.path.to_string_lossy().chars().count();
    let long_path = path_length > LONG_PATH_THRESHOLD;

    let mut record = FileRecord {
        source_path: entry.path.clone(),
        source_name: entry.name.clone(),
        identifier: None,
        target_path: None,
        long_path,
        outcome: FileOutcome::Skipped(SkipReason::NoIdentifier),
    };

    if long_path {
        info!(
            name = %entry.name,
            length = path_length,
            "Path exceeds {} characters",
            LONG_PATH_THRESHOLD
        );
        progress.long_path(path_length);
    }

    let parsed = match parse_file_name(&entry.name) {
        Some(p) => p,
        None => {
            debug!(name = %entry.name, "No identifier in file name");
            return record;
        }
    };

    let target_name = parsed.target_name();
    let target_path = entry
        .path
        .parent()
        .map(|p| p.join(&target_name))
        .unwrap_or_else(|| PathBuf::from(&target_name));

    progress.identifier_found(&parsed.identifier, &target_name);
    record.identifier = Some(parsed.identifier.clone());
    record.target_path = Some(target_path.clone());

    if parsed.is_target_format() {
        debug!(name = %entry.name, "Already in target format");
        record.outcome = FileOutcome::Skipped(SkipReason::AlreadyTargetFormat);
        return record;
    }

    // Any directory entry counts, including a dangling symlink
    let target_taken = fs::symlink_metadata(&target_path).is_ok();

    if target_taken || claimed.contains(&target_path) {
        debug!(name = %entry.name, target = %target_name, "Target already exists");
        record.outcome = FileOutcome::Skipped(SkipReason::TargetExists);
        return record;
    }

    if let Err(e) = validate_archive(&entry.path) {
        info!(name = %entry.name, reason = %e, "Invalid archive");
        record.outcome = FileOutcome::Invalid(e);
        return record;
    }

    if !options.execute {
        debug!(from = %entry.name, to = %target_name, "Would rename");
        claimed.insert(target_path);
        record.outcome = FileOutcome::WouldRename;
        return record;
    }

    match rename(&entry.path, &target_path) {
        Ok(()) => {
            info!("Renamed: {} -> {}", entry.name, target_name);
            claimed.insert(target_path);
            record.outcome = FileOutcome::Renamed;
        }
        Err(e) => {
            info!(from = %entry.name, to = %target_name, error = %e, "Rename failed");
            record.outcome = FileOutcome::RenameFailed(e.to_string());
        }
    }

    record
}
