//! Working copy discovery and classification
//!
//! The walk stops at the first directory that holds a `.git` or `.svn` entry:
//! a working copy is one unit, and anything nested inside it (submodules,
//! vendored checkouts) is updated, or not, by its parent's own command.

use futures::future::{join_all, BoxFuture, FutureExt};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::config::ROOT_DISPLAY_PATH;

const GIT_DIR: &str = ".git";
const SVN_DIR: &str = ".svn";
const GIT_SVN_DIR: &str = "svn";

/// A discovered working copy
///
/// `path` is absolute while the walk runs and relative to the scan root once
/// [`find_repos_from_path`] returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    pub path: PathBuf,
    pub is_git: bool,
    pub is_svn: bool,
    /// `.git/svn` is a directory: a Git clone tracking a Subversion repository
    pub is_git_svn: bool,
}

/// How a working copy gets updated, in dispatch priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VcsKind {
    /// Both `.git` and `.svn`, and not a `git svn` bridge
    Conflicting,
    GitSvn,
    Git,
    Svn,
}

impl Repository {
    pub fn is_vcs(&self) -> bool {
        self.is_git || self.is_svn
    }

    /// Git and svn metadata can coexist, so the order of these checks matters.
    pub fn kind(&self) -> VcsKind {
        if self.is_git && self.is_svn && !self.is_git_svn {
            VcsKind::Conflicting
        } else if self.is_git_svn {
            VcsKind::GitSvn
        } else if self.is_git {
            VcsKind::Git
        } else {
            VcsKind::Svn
        }
    }

    /// Rewrites the path relative to `root`; paths outside `root` are kept as is
    pub fn relative_to(mut self, root: &Path) -> Self {
        if let Ok(relative) = self.path.strip_prefix(root) {
            self.path = relative.to_path_buf();
        }
        self
    }

    pub fn display_path(&self) -> String {
        display_relative(&self.path)
    }
}

/// Renders a root-relative path, showing the root itself as `.`
pub fn display_relative(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        ROOT_DISPLAY_PATH.to_string()
    } else {
        path.display().to_string()
    }
}

/// Immediate entries of one directory
struct Listing {
    names: Vec<OsString>,
    /// Children that are real directories; symlinks are never followed
    subdirs: Vec<PathBuf>,
}

impl Listing {
    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

async fn list_dir(dir: &Path) -> io::Result<Listing> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    let mut subdirs = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        // DirEntry::file_type does not traverse symlinks
        if entry.file_type().await.is_ok_and(|ft| ft.is_dir()) {
            subdirs.push(entry.path());
        }
        names.push(entry.file_name());
    }

    Ok(Listing { names, subdirs })
}

async fn classify_listing(dir: &Path, listing: &Listing) -> Option<Repository> {
    let mut repo = Repository {
        path: dir.to_path_buf(),
        is_git: listing.contains(GIT_DIR),
        is_svn: listing.contains(SVN_DIR),
        is_git_svn: false,
    };
    if !repo.is_vcs() {
        return None;
    }

    // A missing or unreadable .git/svn just means this is not a bridge
    repo.is_git_svn = repo.is_git
        && tokio::fs::symlink_metadata(dir.join(GIT_DIR).join(GIT_SVN_DIR))
            .await
            .is_ok_and(|metadata| metadata.is_dir());

    Some(repo)
}

/// Classifies a single directory by looking at its immediate entries
///
/// Returns `Ok(None)` for a directory that is not a working copy root and an
/// error only when the directory itself cannot be listed.
pub async fn classify(dir: impl AsRef<Path>) -> io::Result<Option<Repository>> {
    let dir = dir.as_ref();
    let listing = list_dir(dir).await?;
    Ok(classify_listing(dir, &listing).await)
}

/// Walks one subtree. A permit is held only while `dir` itself is being read,
/// so a narrow semaphore slows the walk down but can never starve it.
fn walk(dir: PathBuf, semaphore: Arc<Semaphore>) -> BoxFuture<'static, Vec<Repository>> {
    async move {
        let (repo, subdirs) = {
            let Ok(_permit) = semaphore.acquire().await else {
                return Vec::new();
            };
            let listing = match list_dir(&dir).await {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "cannot list directory, skipping it");
                    return Vec::new();
                }
            };
            (classify_listing(&dir, &listing).await, listing.subdirs)
        };

        if let Some(repo) = repo {
            tracing::debug!(path = %repo.path.display(), kind = ?repo.kind(), "found working copy");
            return vec![repo];
        }

        join_all(
            subdirs
                .into_iter()
                .map(|child| walk(child, Arc::clone(&semaphore))),
        )
        .await
        .into_iter()
        .flatten()
        .collect()
    }
    .boxed()
}

/// Recursively searches for working copies below `search_path`
///
/// Sibling directories are walked concurrently with at most
/// `scan_concurrency` directories being read at once. Returned paths are
/// relative to `search_path` and sorted.
pub async fn find_repos_from_path(
    search_path: impl AsRef<Path>,
    scan_concurrency: usize,
) -> Vec<Repository> {
    let root = search_path.as_ref().to_path_buf();
    let semaphore = Arc::new(Semaphore::new(scan_concurrency.max(1)));

    let mut repos: Vec<Repository> = walk(root.clone(), semaphore)
        .await
        .into_iter()
        .map(|repo| repo.relative_to(&root))
        .collect();

    repos.sort_by(|a, b| a.path.cmp(&b.path));
    repos
}
