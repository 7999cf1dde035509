// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Pickaxe history search
//!
//! Asks `git log -S<token>` for every commit whose diff adds or removes the
//! exact token, with git itself rendering each match as an HTML table row.
//! Row content is not escaped: subjects containing markup are emitted as-is.

use std::path::Path;

use tracing::{debug, info};

use crate::command::Git;
use crate::error::GitError;

/// Parameters for a single token search
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Literal text that must be added or removed by a commit's diff
    pub token: String,
    /// Only include commits after this one (exclusive)
    pub since: Option<String>,
}

impl SearchOptions {
    /// Search the full history for `token`
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            since: None,
        }
    }

    /// Bound the search to commits after `commit`
    #[must_use]
    pub fn since(mut self, commit: impl Into<String>) -> Self {
        self.since = Some(commit.into());
        self
    }

    /// Optionally bound the search
    #[must_use]
    pub fn since_opt(mut self, commit: Option<&str>) -> Self {
        self.since = commit.map(str::to_string);
        self
    }

    /// Revision range handed to `git log`, if bounded
    #[must_use]
    pub fn revision_range(&self) -> Option<String> {
        self.since.as_ref().map(|since| format!("{since}...HEAD"))
    }
}

/// `git log --format` string producing one `<tr>` per commit
///
/// Placeholders: `%H` full hash (link target), `%h` abbreviated hash,
/// `%ar` relative author date, `%s` subject.
#[must_use]
pub fn row_format(web_path: &str) -> String {
    let web_path = web_path.replace('%', "%%");
    format!(
        "<tr>\n  <td><a href=\"https://{web_path}/commit/%H\">%h</a></td>\n  <td>%ar</td>\n  <td>%s</td>\n</tr>"
    )
}

/// Run the pickaxe search in `repo_dir` and return the rendered rows
///
/// # Errors
///
/// Returns `GitError::CommandFailed` if `git log` exits non-zero (for
/// example when `since` names an unknown commit).
pub fn search_history(
    git: &Git,
    repo_dir: &Path,
    web_path: &str,
    options: &SearchOptions,
) -> Result<String, GitError> {
    let mut args = vec![
        "log".to_string(),
        format!("-S{}", options.token),
        format!("--format={}", row_format(web_path)),
    ];
    if let Some(range) = options.revision_range() {
        args.push(range);
    }

    info!(token = %options.token, since = ?options.since, "Searching history");
    let rows = git.run(repo_dir, &args)?;
    debug!(
        token = %options.token,
        matches = rows.matches("<tr>").count(),
        "Search complete"
    );
    Ok(rows)
}
