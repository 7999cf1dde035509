//! Configuration for commitgrep
//!
//! This module provides the command-line surface plus the environment
//! fallbacks for the working directory, the mail relay and logging.

use std::path::PathBuf;

use clap::Parser;

/// Default mail relay host
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// Default mail relay port (submission, upgraded with STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// Default relay account, also used as the sender address
pub const DEFAULT_SMTP_USER: &str = "commitgrep@gmail.com";

/// Stylesheet file looked up in the working directory
pub const STYLESHEET_FILE: &str = "table.css";
/// Relay password file looked up in the working directory
pub const PASSWORD_FILE: &str = "password.txt";

/// commitgrep - find the commits that introduced or removed a token
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "commitgrep")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Clone URL (git@host:owner/repo.git or https://host/owner/repo.git)
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// One or more tokens to search the history for
    #[arg(
        value_name = "TOKEN",
        required = true,
        num_args = 1..,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub tokens: Vec<String>,

    /// Email the report to this address
    ///
    /// The report file is written either way.
    #[arg(short, long, value_name = "ADDR")]
    pub email: Option<String>,

    /// Only report commits made since the last recorded checkpoint
    ///
    /// The checkpoint (lasthead.txt in the working directory) is updated
    /// to the current HEAD after the search.
    #[arg(short, long, default_value = "false")]
    pub relative: bool,

    /// Directory holding the clone, the report and the sidecar files
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, env = "COMMITGREP_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Inline table.css into the report instead of linking it
    #[arg(long, default_value = "false")]
    pub inline_css: bool,

    /// Mail relay host
    #[arg(long, env = "COMMITGREP_SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// Mail relay port
    #[arg(long, env = "COMMITGREP_SMTP_PORT")]
    pub smtp_port: Option<u16>,

    /// Mail relay account, also used as the sender address
    #[arg(long, env = "COMMITGREP_SMTP_USER")]
    pub smtp_user: Option<String>,

    /// Mail relay password
    ///
    /// Falls back to the first line of password.txt in the working directory.
    #[arg(long, env = "COMMITGREP_SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the working directory, using the current directory as default
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CurrentDirUnavailable` if no working directory
    /// is configured and the current directory cannot be determined.
    pub fn workdir_path(&self) -> Result<PathBuf, ConfigError> {
        match self.workdir {
            Some(ref dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(ConfigError::CurrentDirUnavailable),
        }
    }

    /// Mail relay host
    #[must_use]
    pub fn smtp_host(&self) -> &str {
        self.smtp_host.as_deref().unwrap_or(DEFAULT_SMTP_HOST)
    }

    /// Mail relay port
    #[must_use]
    pub fn smtp_port(&self) -> u16 {
        self.smtp_port.unwrap_or(DEFAULT_SMTP_PORT)
    }

    /// Mail relay account and sender address
    #[must_use]
    pub fn smtp_user(&self) -> &str {
        self.smtp_user.as_deref().unwrap_or(DEFAULT_SMTP_USER)
    }

    /// Validate the configuration
    ///
    /// The email address is intentionally not checked here; it is checked
    /// after the report has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is specified but is missing
    /// or not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref workdir) = self.workdir {
            if !workdir.exists() {
                return Err(ConfigError::WorkdirNotFound(workdir.clone()));
            }
            if !workdir.is_dir() {
                return Err(ConfigError::WorkdirNotDirectory(workdir.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Working directory not found
    #[error("Working directory not found: {0}")]
    WorkdirNotFound(PathBuf),

    /// Working directory is not a directory
    #[error("Working directory is not a directory: {0}")]
    WorkdirNotDirectory(PathBuf),

    /// Current directory could not be determined
    #[error("Cannot determine current directory: {0}")]
    CurrentDirUnavailable(std::io::Error),
}
