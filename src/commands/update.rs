//! Repository update command implementation
//!
//! This module handles the whole run: resolving the scan root, discovering
//! working copies, filtering them and updating them while results stream to
//! the terminal.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::config::{SCANNING_MESSAGE, SPINNER_TEMPLATE, SPINNER_TICK_MS, NO_REPOS_MESSAGE};
use crate::core::{
    find_repos_from_path, update_repositories, RepoFilter, Reporter, UpdateConfig,
    UpdateStatistics,
};
use crate::vcs::{CommandRunner, SystemRunner};

/// Handles the update command with real `git`/`svn` processes
pub async fn handle_update_command(config: &UpdateConfig) -> Result<UpdateStatistics> {
    let runner = SystemRunner::new().with_echo(config.echo_commands());
    run_update(config, &runner).await
}

/// Runs a full discovery and update pass with the given command runner
pub async fn run_update<R>(config: &UpdateConfig, runner: &R) -> Result<UpdateStatistics>
where
    R: CommandRunner + ?Sized,
{
    let root = resolve_root(&config.root).await?;
    println!("{}", Reporter::header(&root));

    let start_time = Instant::now();
    let spinner = create_scan_spinner();
    let repos = find_repos_from_path(&root, config.scan_concurrency).await;
    spinner.finish_and_clear();

    let found = repos.len();
    let repos = RepoFilter::new(config.includes.clone(), config.excludes.clone()).apply(repos);
    tracing::info!(found, selected = repos.len(), "discovery finished");

    let mut statistics = UpdateStatistics::new();
    if repos.is_empty() {
        println!("{NO_REPOS_MESSAGE}");
        return Ok(statistics);
    }

    let reporter = Reporter::new(config.show_details());
    update_repositories(runner, &root, &repos, config.update_concurrency, |result| {
        reporter.print(&result);
        statistics.update(&result);
    })
    .await;

    if config.show_details() {
        let detailed = statistics.generate_detailed_summary();
        println!();
        if !detailed.is_empty() {
            println!("{detailed}");
        }
        println!("{}", statistics.generate_summary(start_time.elapsed()));
    }

    Ok(statistics)
}

/// Makes the scan root absolute and checks that it is a directory
pub async fn resolve_root(root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(root)
        .with_context(|| format!("Cannot resolve {}", root.display()))?;
    let metadata = tokio::fs::metadata(&absolute)
        .await
        .with_context(|| format!("Cannot access {}", absolute.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("{} is not a directory", absolute.display());
    }
    Ok(absolute)
}

/// Spinner on stderr while the tree is walked; hidden when stderr is not a terminal
fn create_scan_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
        spinner.set_style(style);
    }
    spinner.set_message(SCANNING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    spinner
}
