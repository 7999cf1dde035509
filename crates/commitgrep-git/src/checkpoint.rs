// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Checkpoint file for incremental runs
//!
//! One file, one commit id. The file is read once before any search and
//! rewritten once after the last search. A missing or unreadable file only
//! costs a full-history search.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::GitError;
use crate::stage::is_valid_sha;

/// Default checkpoint file name
pub const CHECKPOINT_FILE: &str = "lasthead.txt";

/// Last-seen commit loaded from a checkpoint file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    path: PathBuf,
    last_seen: Option<String>,
}

impl Checkpoint {
    /// Read the checkpoint at `path`
    ///
    /// Never fails: an absent, unreadable, empty or malformed file yields a
    /// checkpoint with no lower bound.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last_seen = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let sha = contents.lines().next().unwrap_or("").trim().to_string();
                if is_valid_sha(&sha) {
                    debug!(path = %path.display(), sha = %sha, "Loaded checkpoint");
                    Some(sha)
                } else {
                    warn!(
                        path = %path.display(),
                        "Checkpoint does not hold a commit id, searching full history"
                    );
                    None
                }
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "No usable checkpoint, searching full history"
                );
                None
            }
        };
        Self { path, last_seen }
    }

    /// Checkpoint file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Commit recorded by the previous run, if any
    #[must_use]
    pub fn lower_bound(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Replace the file contents with `head`
    ///
    /// # Errors
    ///
    /// Returns `GitError::CheckpointWrite` if the file cannot be written.
    pub fn save(&mut self, head: &str) -> Result<(), GitError> {
        std::fs::write(&self.path, format!("{head}\n")).map_err(|source| {
            GitError::CheckpointWrite {
                path: self.path.clone(),
                source,
            }
        })?;
        info!(path = %self.path.display(), head = %head, "Checkpoint updated");
        self.last_seen = Some(head.to_string());
        Ok(())
    }
}
