//! Statistics tracking for update runs

use crate::vcs::{Status, UpdateResult};
use std::time::Duration;

/// Tally of update outcomes for one run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateStatistics {
    pub updated_repos: u32,
    pub skipped_repos: u32,
    pub no_remote_repos: u32,
    pub error_repos: u32,
    pub failed_repos: Vec<String>, // display paths
}

impl UpdateStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on one repository result
    pub fn update(&mut self, result: &UpdateResult) {
        match result.status {
            Status::Updated => self.updated_repos += 1,
            Status::Skipped => self.skipped_repos += 1,
            Status::NoRemote => self.no_remote_repos += 1,
            Status::Failed => self.error_repos += 1,
        }
        if result.status.is_failure() {
            self.failed_repos.push(result.display_path());
        }
    }

    pub fn total(&self) -> u32 {
        self.updated_repos + self.skipped_repos + self.no_remote_repos + self.error_repos
    }

    pub fn has_failures(&self) -> bool {
        self.error_repos > 0
    }

    /// One-line summary of the run
    pub fn generate_summary(&self, duration: Duration) -> String {
        let mut summary = format!(
            "Completed in {:.1}s • {} updated • {} skipped • {} without remote",
            duration.as_secs_f64(),
            self.updated_repos,
            self.skipped_repos,
            self.no_remote_repos
        );
        if self.error_repos > 0 {
            summary.push_str(&format!(" • {} failed", self.error_repos));
        }
        summary
    }

    /// Lists failed repositories as a tree, empty when nothing failed
    pub fn generate_detailed_summary(&self) -> String {
        if self.failed_repos.is_empty() {
            return String::new();
        }

        let mut lines = vec![format!("FAILED REPOS ({})", self.failed_repos.len())];
        for (i, path) in self.failed_repos.iter().enumerate() {
            let tree_char = if i == self.failed_repos.len() - 1 { "└─" } else { "├─" };
            lines.push(format!("   {tree_char} {path}"));
        }
        lines.join("\n")
    }
}
