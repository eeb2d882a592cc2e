pub mod command;
pub mod operations;
pub mod status;

// Re-export commonly used items
pub use command::{CommandError, CommandRunner, SystemRunner};
pub use operations::*;
pub use status::*;
