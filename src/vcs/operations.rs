//! Update procedures for each kind of working copy

use std::path::Path;

use super::command::CommandRunner;
use super::status::{Status, UpdateResult};
use crate::core::{Repository, VcsKind};

// Command arguments
const GIT: &str = "git";
const SVN: &str = "svn";
const GIT_REMOTE_ARGS: &[&str] = &["remote"];
const GIT_PULL_REBASE_ARGS: &[&str] = &["pull", "--rebase"];
const GIT_SVN_REBASE_ARGS: &[&str] = &["svn", "rebase"];
const SVN_UPDATE_ARGS: &[&str] = &["up"];

// Status messages
pub const STATUS_GIT_AND_SVN: &str = "git and svn are together in this folder";
pub const STATUS_NO_REMOTE: &str = "Unable to update: there is no remote";

/// Updates one working copy and reports the outcome
///
/// `root` is the scan root; the repository's relative path is resolved against
/// it to get the directory every command runs in.
pub async fn update_repository<R>(runner: &R, root: &Path, repo: &Repository) -> UpdateResult
where
    R: CommandRunner + ?Sized,
{
    let dir = root.join(&repo.path);
    let (status, message) = match repo.kind() {
        VcsKind::Conflicting => (Status::Skipped, STATUS_GIT_AND_SVN.to_string()),
        VcsKind::GitSvn => run_update(runner, &dir, GIT, GIT_SVN_REBASE_ARGS).await,
        VcsKind::Git => git_update(runner, &dir).await,
        VcsKind::Svn => run_update(runner, &dir, SVN, SVN_UPDATE_ARGS).await,
    };

    tracing::debug!(repo = %repo.display_path(), status = status.text(), "update finished");
    UpdateResult::new(repo.path.clone(), status, message)
}

/// `git pull --rebase`, unless the repository has nowhere to pull from
async fn git_update<R>(runner: &R, dir: &Path) -> (Status, String)
where
    R: CommandRunner + ?Sized,
{
    match runner.run(dir, GIT, GIT_REMOTE_ARGS).await {
        Ok(remotes) if remotes.trim().is_empty() => {
            (Status::NoRemote, STATUS_NO_REMOTE.to_string())
        }
        Ok(_) => run_update(runner, dir, GIT, GIT_PULL_REBASE_ARGS).await,
        Err(e) => (Status::Failed, e.report()),
    }
}

async fn run_update<R>(runner: &R, dir: &Path, program: &str, args: &[&str]) -> (Status, String)
where
    R: CommandRunner + ?Sized,
{
    match runner.run(dir, program, args).await {
        Ok(stdout) => (Status::Updated, stdout.trim().to_string()),
        Err(e) => (Status::Failed, e.report()),
    }
}
