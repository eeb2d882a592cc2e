//! External command execution

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;

/// Failure of an external command
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started (missing binary, bad working directory, ...)
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The program ran and exited with a non-zero status
    #[error("`{command}` exited with {}", exit_label(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_string(),
    }
}

impl CommandError {
    /// Full failure text: the error line followed by whatever the command printed
    pub fn report(&self) -> String {
        let mut lines = vec![self.to_string()];
        if let CommandError::Failed { stdout, stderr, .. } = self {
            for stream in [stdout, stderr] {
                let stream = stream.trim();
                if !stream.is_empty() {
                    lines.push(stream.to_string());
                }
            }
        }
        lines.join("\n")
    }
}

/// Runs a program in a working directory and returns its standard output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// Renders a program and its arguments the way a user would type them
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs real processes through `tokio::process`
#[derive(Clone, Debug, Default)]
pub struct SystemRunner {
    echo_commands: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print every executed command with a `+`/`-` marker once it finishes
    pub fn with_echo(mut self, echo_commands: bool) -> Self {
        self.echo_commands = echo_commands;
        self
    }

    fn echo(&self, marker: char, dir: &Path, command: &str) {
        if self.echo_commands {
            println!("{}", echo_line(marker, dir, command));
        }
    }
}

/// `# + git pull --rebase  (/src/app)`: `+` after success, `-` after failure
fn echo_line(marker: char, dir: &Path, command: &str) -> String {
    format!("# {marker} {command}  ({})", dir.display())
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command = command_line(program, args);
        tracing::debug!(dir = %dir.display(), %command, "running command");

        let output = match Command::new(program)
            .args(args)
            .current_dir(dir)
            .kill_on_drop(true)
            .output()
            .await
        {
            Ok(output) => output,
            Err(source) => {
                self.echo('-', dir, &command);
                return Err(CommandError::Spawn { command, source });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            self.echo('+', dir, &command);
            Ok(stdout)
        } else {
            self.echo('-', dir, &command);
            tracing::debug!(dir = %dir.display(), %command, code = ?output.status.code(), "command failed");
            Err(CommandError::Failed {
                command,
                code: output.status.code(),
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
