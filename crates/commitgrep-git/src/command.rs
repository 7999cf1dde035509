// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Runner for the `git` command-line client
//!
//! Cloning and pickaxe searches go through the real `git` binary. Every
//! invocation gets an explicit working directory so the process never has
//! to change its own.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::GitError;

/// Handle on the `git` executable plus per-invocation config overrides
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
    overrides: Vec<(String, String)>,
}

impl Default for Git {
    fn default() -> Self {
        Self::new()
    }
}

impl Git {
    /// Use `git` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            overrides: Vec::new(),
        }
    }

    /// Use a specific git executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Pass `-c key=value` to every invocation
    #[must_use]
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Run git in `dir` and return its standard output
    ///
    /// # Errors
    ///
    /// Returns `GitError::Spawn` if git cannot be started and
    /// `GitError::CommandFailed` on a non-zero exit.
    pub fn run<I, S>(&self, dir: &Path, args: I) -> Result<String, GitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.current_dir(dir);
        for (key, value) in &self.overrides {
            command.arg("-c").arg(format!("{key}={value}"));
        }
        command.args(args);

        let command_line = describe(&command);
        debug!(dir = %dir.display(), command = %command_line, "Running git");

        let output = command.output().map_err(|source| GitError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!(output = %stderr.trim(), "git stderr");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
