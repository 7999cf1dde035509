// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for commitgrep-git

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Clone URL is neither `git@host:owner/repo.git` nor `https://host/owner/repo.git`
    #[error("Invalid repository URL (expected git@... or https://...): {url}")]
    InvalidRepositoryUrl {
        /// The URL that was rejected
        url: String,
    },

    /// The `git` binary could not be started
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A `git` subprocess exited unsuccessfully
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        /// The command line that failed
        command: String,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// The checkpoint file could not be written
    #[error("Failed to write checkpoint {}: {source}", path.display())]
    CheckpointWrite {
        /// Checkpoint file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The cloned working copy could not be removed
    #[error("Failed to remove {}: {source}", path.display())]
    Cleanup {
        /// Directory that was being removed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
