//! Configuration constants and settings

use std::path::PathBuf;

// Concurrency Configuration
//
// Updates spawn an external process each and may hit the network, so they get a
// small fixed cap. Directory listing is cheap and only needs a bound large
// enough to keep the disk busy without running out of file descriptors.

/// Default number of repository updates in flight
pub const DEFAULT_UPDATE_CONCURRENCY: usize = 5;

/// Upper bound for the default directory walk fan-out
pub const SCAN_CONCURRENT_CAP: usize = 64;

/// Determines the number of concurrent repository updates
///
/// Priority order:
/// 1. --jobs N flag → N (at least 1)
/// 2. Default → 5
pub fn get_update_concurrency(jobs: Option<usize>) -> usize {
    jobs.map_or(DEFAULT_UPDATE_CONCURRENCY, |n| n.max(1))
}

/// Determines how many directories may be listed at the same time
///
/// Priority order:
/// 1. --scan-jobs N flag → N (at least 1)
/// 2. Smart default → min(CPU_CORES * 8, 64)
pub fn get_scan_concurrency(scan_jobs: Option<usize>) -> usize {
    if let Some(n) = scan_jobs {
        return n.max(1);
    }
    (num_cpus::get() * 8).min(SCAN_CONCURRENT_CAP)
}

// Verbosity levels
pub const VERBOSITY_QUIET: u8 = 0;
pub const VERBOSITY_DETAILS: u8 = 1;
pub const VERBOSITY_COMMANDS: u8 = 2;

// UI Constants
pub const SCANNING_MESSAGE: &str = "Scanning for repositories...";
pub const NO_REPOS_MESSAGE: &str = "No git or svn working copies found.";
pub const SPINNER_TEMPLATE: &str = "{spinner} {msg}";
pub const SPINNER_TICK_MS: u64 = 100;

/// Display name of the scan root when it is itself a working copy
pub const ROOT_DISPLAY_PATH: &str = ".";

/// Runtime settings for one update run, gathered from the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateConfig {
    /// Directory to scan; resolved to an absolute path before use
    pub root: PathBuf,
    /// Substrings that must all appear in a repository's relative path
    pub includes: Vec<String>,
    /// Substrings that reject a repository when any of them appears
    pub excludes: Vec<String>,
    pub verbosity: u8,
    pub update_concurrency: usize,
    pub scan_concurrency: usize,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            includes: Vec::new(),
            excludes: Vec::new(),
            verbosity: VERBOSITY_QUIET,
            update_concurrency: DEFAULT_UPDATE_CONCURRENCY,
            scan_concurrency: get_scan_concurrency(None),
        }
    }
}

impl UpdateConfig {
    /// Print per-repository messages
    pub fn show_details(&self) -> bool {
        self.verbosity >= VERBOSITY_DETAILS
    }

    /// Echo every executed command
    pub fn echo_commands(&self) -> bool {
        self.verbosity >= VERBOSITY_COMMANDS
    }
}
