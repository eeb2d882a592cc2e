//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::{ScriptedRunner, TestTree};
pub use self::git::{add_git_remote, clone_repo, create_test_commit, is_git_available, setup_git_repo};
