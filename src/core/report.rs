//! Terminal output for update results

use colored::Colorize;
use std::path::Path;

use crate::vcs::UpdateResult;

/// Formats results as colored lines, with details in verbose mode
#[derive(Clone, Copy, Debug, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Heading printed before the scan starts
    pub fn header(root: &Path) -> String {
        format!("Updating {}", root.display()).blue().to_string()
    }

    /// Quiet: the colored path. Verbose: a blank line, the path and the message.
    pub fn format(&self, result: &UpdateResult) -> String {
        let path = result.status.paint(&result.display_path()).to_string();
        if !self.verbose {
            return path;
        }
        if result.message.is_empty() {
            format!("\n{path}")
        } else {
            format!("\n{path}\n{}", result.message)
        }
    }

    pub fn print(&self, result: &UpdateResult) {
        println!("{}", self.format(result));
    }
}
