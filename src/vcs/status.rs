//! Update status enumeration and per-repository results

use colored::{ColoredString, Colorize};
use std::path::PathBuf;

/// Outcome of updating a single working copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The update command ran and exited successfully
    Updated,
    /// The repository was left alone on purpose (git and svn side by side)
    Skipped,
    /// Git repository without any configured remote
    NoRemote,
    /// The update command could not be started or exited non-zero
    Failed,
}

impl Status {
    /// Returns the text representation of this status
    pub fn text(&self) -> &str {
        match self {
            Status::Updated => "updated",
            Status::Skipped => "skipped",
            Status::NoRemote => "no-remote",
            Status::Failed => "failed",
        }
    }

    /// Paints `text` with the color associated with this status
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Status::Updated => text.green(),
            Status::Skipped | Status::NoRemote => text.yellow(),
            Status::Failed => text.red(),
        }
    }

    /// Whether the repository is listed among the failed ones in the run summary
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failed)
    }
}

/// Result of one repository update, handed to the reporter as soon as it completes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateResult {
    /// Path relative to the scan root
    pub path: PathBuf,
    pub status: Status,
    pub message: String,
}

impl UpdateResult {
    pub fn new(path: impl Into<PathBuf>, status: Status, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status,
            message: message.into(),
        }
    }

    /// Relative path as shown to the user; the scan root itself is shown as `.`
    pub fn display_path(&self) -> String {
        crate::core::display_relative(&self.path)
    }
}
