//! Progress output for user-facing status updates.
//!
//! One block is written to stderr per file while the renamer runs.
//! In verbose mode output is suppressed since tracing carries the same events.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::rename::{FileOutcome, FileRecord};

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

/// Decide on colour once and apply it to every `colored` string
pub fn configure_colors() -> bool {
    let enabled = should_use_colors();
    colored::control::set_override(enabled);
    enabled
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        Self::new_with_ui(false, should_use_colors())
    }

    /// Create a progress reporter that respects UI mode
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report the directory being scanned and the run mode
    pub fn scan_start(&mut self, dir: &Path, execute: bool) {
        if self.silent {
            return;
        }
        let mode = if execute {
            "execute (files will be renamed)"
        } else {
            "dry run (no changes will be made)"
        };
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "Scanning:".bold(), dir.display());
            let _ = writeln!(self.writer, "{} {}", "Mode:".bold(), mode.dimmed());
        } else {
            let _ = writeln!(self.writer, "Scanning: {}", dir.display());
            let _ = writeln!(self.writer, "Mode: {}", mode);
        }
    }

    /// Report how many JSON files were found
    pub fn scan_complete(&mut self, count: usize) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if count == 0 {
            if self.colors_enabled {
                let _ = writeln!(self.writer, "{}", "No JSON files found".yellow());
            } else {
                let _ = writeln!(self.writer, "No JSON files found");
            }
        } else {
            let _ = writeln!(self.writer, "Found {} JSON files", count);
            let _ = writeln!(self.writer);
        }
    }

    /// Report the file about to be processed
    pub fn file_start(&mut self, current: usize, total: usize, name: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(self.writer, "{} {}", counter.cyan(), name);
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {}", current, total, name);
        }
    }

    /// Report an over-long path (non-fatal)
    pub fn long_path(&mut self, length: usize) {
        if self.silent {
            return;
        }
        let message = format!("Path is {} characters long", length);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "  {} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "  Warning: {}", message);
        }
    }

    /// Report the extracted identifier and the name it maps to
    pub fn identifier_found(&mut self, identifier: &str, target_name: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {} {}",
                format!("id {}", identifier).dimmed(),
                "→".cyan(),
                target_name
            );
        } else {
            let _ = writeln!(self.writer, "  id {} -> {}", identifier, target_name);
        }
    }

    /// Report how a file ended up
    pub fn file_outcome(&mut self, record: &FileRecord) {
        if self.silent {
            return;
        }
        let text = record.outcome.to_string();
        if self.colors_enabled {
            let styled = match &record.outcome {
                FileOutcome::Renamed | FileOutcome::WouldRename => text.green(),
                FileOutcome::Skipped(_) => text.dimmed(),
                FileOutcome::Invalid(_) | FileOutcome::RenameFailed(_) => text.red(),
            };
            let _ = writeln!(self.writer, "  {}", styled);
        } else {
            let _ = writeln!(self.writer, "  {}", text);
        }
    }
}
