pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod filter;
pub mod report;
pub mod stats;

// Re-export key items at module level for convenience
pub use config::{get_scan_concurrency, get_update_concurrency, UpdateConfig};
pub use discovery::{classify, display_relative, find_repos_from_path, Repository, VcsKind};
pub use dispatch::update_repositories;
pub use filter::RepoFilter;
pub use report::Reporter;
pub use stats::UpdateStatistics;
