//! Bounded-concurrency update dispatch

use futures::stream::{FuturesUnordered, StreamExt};
use std::path::Path;
use tokio::sync::Semaphore;

use super::discovery::Repository;
use crate::vcs::{update_repository, CommandRunner, Status, UpdateResult};

/// Updates every repository with at most `concurrency` updates in flight
///
/// `on_result` is called once per repository, in completion order. A failed
/// update is just another result and never stops the others.
pub async fn update_repositories<R, F>(
    runner: &R,
    root: &Path,
    repos: &[Repository],
    concurrency: usize,
    mut on_result: F,
) where
    R: CommandRunner + ?Sized,
    F: FnMut(UpdateResult),
{
    let semaphore = Semaphore::new(concurrency.max(1));
    let semaphore = &semaphore;

    let mut futures: FuturesUnordered<_> = repos
        .iter()
        .map(|repo| async move {
            let Ok(_permit) = semaphore.acquire().await else {
                return UpdateResult::new(
                    repo.path.clone(),
                    Status::Failed,
                    "update slot unavailable",
                );
            };
            update_repository(runner, root, repo).await
        })
        .collect();

    while let Some(result) = futures.next().await {
        on_result(result);
    }
}
