// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for commitgrep

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::notify::NotifyError;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum CommitgrepError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Git error
    #[error("Git error: {0}")]
    Git(#[from] commitgrep_git::GitError),

    /// Email error
    #[error("Email error: {0}")]
    Notify(#[from] NotifyError),

    /// The report file could not be written or read back
    #[error("Report error ({}): {source}", path.display())]
    Report {
        /// Report file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The stylesheet to inline could not be read
    #[error("Cannot read stylesheet {}: {source}", path.display())]
    Stylesheet {
        /// Stylesheet path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
