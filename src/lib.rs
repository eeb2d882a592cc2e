//! # vcs-update
//!
//! `vcs-update` finds every Git and Subversion working copy below a directory
//! and brings each one up to date by running the matching update command.
//! It powers the `vcs-update` CLI tool.
//!
//! ## Core Features
//!
//! - **Discovery**: concurrent directory walk that stops at the first `.git` or
//!   `.svn` it meets, so nested checkouts stay part of their parent.
//! - **Classification**: Git, Subversion and `git svn` bridges are told apart.
//! - **Bounded updates**: `git pull --rebase`, `git svn rebase` and `svn up` run
//!   with a fixed number of commands in flight.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vcs_update::core::find_repos_from_path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let repos = find_repos_from_path("/home/me/src", 32).await;
//!     for repo in repos {
//!         println!("{} ({:?})", repo.display_path(), repo.kind());
//!     }
//! }
//! ```

pub mod commands;
pub mod core;
pub mod vcs;
