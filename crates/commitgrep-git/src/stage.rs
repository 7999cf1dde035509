// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository staging and cleanup
//!
//! A clone is made with the `git` client (so the user's SSH agent and
//! credential helpers apply), then opened with `git2` for HEAD lookups.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{debug, info};

use crate::command::Git;
use crate::error::GitError;
use crate::remote::RepoUrl;

/// A working copy cloned for the duration of one run
pub struct ClonedRepo {
    repo: Repository,
    path: PathBuf,
}

impl ClonedRepo {
    /// Clone `url` into `parent/<repo name>`
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if the clone fails (unreachable host,
    /// authentication, destination already exists) and
    /// `GitError::RepositoryNotFound` if the result cannot be opened.
    pub fn clone_into(git: &Git, url: &RepoUrl, parent: &Path) -> Result<Self, GitError> {
        let dest = parent.join(url.name());
        info!(url = %url, dest = %dest.display(), "Cloning repository");

        let output = git.run(parent, ["clone", url.as_str(), url.name()])?;
        if !output.trim().is_empty() {
            debug!(output = %output.trim(), "git clone");
        }

        Self::open(dest)
    }

    /// Open an existing working copy
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GitError> {
        let path = path.into();
        let repo = Repository::open(&path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo, path })
    }

    /// Working copy directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the HEAD commit SHA
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be resolved (e.g. an empty repository).
    pub fn head_sha(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| GitError::InvalidReference {
            reference: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    /// Delete the working copy from disk
    ///
    /// # Errors
    ///
    /// Returns `GitError::Cleanup` if the directory cannot be removed.
    pub fn remove(self) -> Result<PathBuf, GitError> {
        let Self { repo, path } = self;
        drop(repo);
        std::fs::remove_dir_all(&path).map_err(|source| GitError::Cleanup {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Removed working copy");
        Ok(path)
    }
}

impl std::fmt::Debug for ClonedRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClonedRepo").field("path", &self.path).finish()
    }
}

/// Validate that a SHA is a full object id: 40 hex characters (SHA-1) or
/// 64 (SHA-256 repositories)
#[must_use]
pub fn is_valid_sha(sha: &str) -> bool {
    matches!(sha.len(), 40 | 64) && sha.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_repository() {
        let result = ClonedRepo::open("/nonexistent/path");
        match result {
            Err(GitError::RepositoryNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            _ => panic!("Expected RepositoryNotFound error"),
        }
    }

    #[test]
    fn test_is_valid_sha_valid() {
        assert!(is_valid_sha("1945ab9c752534e733c38ba0109dc3b741f0a6eb"));
        assert!(is_valid_sha("ABCDEF1234567890abcdef1234567890abcdef12"));
    }

    #[test]
    fn test_is_valid_sha_sha256() {
        let sha = "6f2b1c0e9a8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b3a29180f6e5d4c3b2a190817";
        assert_eq!(sha.len(), 64);
        assert!(is_valid_sha(sha));
        // Between the two widths
        assert!(!is_valid_sha(&sha[..50]));
    }

    #[test]
    fn test_is_valid_sha_invalid() {
        // Too short
        assert!(!is_valid_sha("1945ab9"));
        // Too long
        assert!(!is_valid_sha("1945ab9c752534e733c38ba0109dc3b741f0a6eb0"));
        // Invalid characters
        assert!(!is_valid_sha("1945ab9c752534e733c38ba0109dc3b741f0a6eg"));
        assert!(!is_valid_sha(""));
    }
}
