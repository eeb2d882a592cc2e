//! Include/exclude filtering of discovered repositories

use super::discovery::Repository;

/// Substring predicates over root-relative repository paths
///
/// A path is kept when it contains every include and none of the excludes.
/// Matching is plain, case-sensitive substring containment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepoFilter {
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl RepoFilter {
    pub fn new(includes: Vec<String>, excludes: Vec<String>) -> Self {
        Self { includes, excludes }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.includes.iter().all(|include| path.contains(include.as_str()))
            && !self.excludes.iter().any(|exclude| path.contains(exclude.as_str()))
    }

    pub fn accepts(&self, repo: &Repository) -> bool {
        self.matches(&repo.path.to_string_lossy())
    }

    /// Keeps the repositories this filter accepts
    pub fn apply(&self, repos: Vec<Repository>) -> Vec<Repository> {
        repos.into_iter().filter(|repo| self.accepts(repo)).collect()
    }
}
