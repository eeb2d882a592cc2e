//! Test fixtures and builders

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

use vcs_update::vcs::command::command_line;
use vcs_update::vcs::{CommandError, CommandRunner};

/// A scan root with fake working copies and automatic cleanup
///
/// Working copies are plain directories holding `.git`/`.svn` entries, which
/// is all discovery looks at.
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.path().join(relative);
        std::fs::create_dir_all(&path)?;
        Ok(path)
    }

    pub fn git(&self, relative: &str) -> Result<&Self> {
        self.dir(&format!("{relative}/.git"))?;
        Ok(self)
    }

    pub fn svn(&self, relative: &str) -> Result<&Self> {
        self.dir(&format!("{relative}/.svn"))?;
        Ok(self)
    }

    pub fn git_svn(&self, relative: &str) -> Result<&Self> {
        self.dir(&format!("{relative}/.git/svn"))?;
        Ok(self)
    }

    pub fn file(&self, relative: &str, content: &str) -> Result<&Self> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(self)
    }
}

/// Command runner that answers from a table and records every call
#[derive(Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, Result<String, i32>>,
    calls: Mutex<Vec<(PathBuf, String)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts `command` (e.g. "git remote") to print `stdout` and succeed
    pub fn succeed(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    /// Scripts `command` to exit with `code`
    pub fn fail(mut self, command: &str, code: i32) -> Self {
        self.responses.insert(command.to_string(), Err(code));
        self
    }

    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands_in(&self, dir: &Path) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(d, _)| d == dir)
            .map(|(_, command)| command)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command = command_line(program, args);
        self.calls
            .lock()
            .unwrap()
            .push((dir.to_path_buf(), command.clone()));

        match self.responses.get(&command) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(code)) => Err(CommandError::Failed {
                command,
                code: Some(*code),
                stdout: String::new(),
                stderr: format!("scripted failure {code}"),
            }),
            None => Ok(String::new()),
        }
    }
}
