//! Command implementations for the CLI

pub mod update;

pub use update::{handle_update_command, run_update};
