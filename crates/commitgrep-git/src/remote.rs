// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Clone URL parsing
//!
//! Turns a clone URL into the short repository name (used for the clone
//! directory and the report file) and the web path used to link commits.

use std::fmt;

use crate::error::GitError;

/// A parsed clone URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    url: String,
    name: String,
    web_path: String,
}

impl RepoUrl {
    /// Parse a clone URL of the form `git@host:owner/repo.git` or
    /// `https://host/owner/repo.git`
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidRepositoryUrl` for any other prefix, or when
    /// no repository name can be derived.
    pub fn parse(url: &str) -> Result<Self, GitError> {
        let invalid = || GitError::InvalidRepositoryUrl {
            url: url.to_string(),
        };

        let path = if url.starts_with("git@") {
            url.split('@').nth(1)
        } else if url.starts_with("https:") {
            url.split("://").nth(1)
        } else {
            None
        }
        .ok_or_else(invalid)?;

        let trimmed = strip_git_suffix(path.trim_end_matches('/'));
        let web_path = trimmed.replace(':', "/");

        let name = trimmed
            .rsplit(['/', ':'])
            .next()
            .filter(|segment| !segment.is_empty() && *segment != trimmed)
            .ok_or_else(invalid)?
            .to_string();

        Ok(Self {
            url: url.to_string(),
            name,
            web_path,
        })
    }

    /// The URL exactly as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Repository name: the last path segment without `.git`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `host/owner/repo`, suitable for building web links
    #[must_use]
    pub fn web_path(&self) -> &str {
        &self.web_path
    }
}

impl fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

// Only the trailing suffix goes: `acme.github.io.git` keeps its inner `.git`
fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(".git").unwrap_or(path)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9_-]{0,15}"
    }

    fn host() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,10}\\.(com|org|io)"
    }

    proptest! {
        /// Property: ssh-style URLs yield a clean name and web path
        #[test]
        fn prop_ssh_url_parses(host in host(), owner in segment(), repo in segment()) {
            let url = format!("git@{host}:{owner}/{repo}.git");
            let parsed = RepoUrl::parse(&url).expect("well-formed URL");
            prop_assert_eq!(parsed.name(), repo.as_str());
            prop_assert!(!parsed.name().ends_with(".git"));
            prop_assert!(!parsed.web_path().contains(':'));
            prop_assert!(!parsed.web_path().contains(".git"));
            prop_assert_eq!(parsed.web_path(), format!("{host}/{owner}/{repo}"));
        }

        /// Property: https URLs yield a clean name and web path
        #[test]
        fn prop_https_url_parses(host in host(), owner in segment(), repo in segment()) {
            let url = format!("https://{host}/{owner}/{repo}.git");
            let parsed = RepoUrl::parse(&url).expect("well-formed URL");
            prop_assert_eq!(parsed.name(), repo.as_str());
            prop_assert!(!parsed.web_path().contains(':'));
            prop_assert!(!parsed.web_path().contains(".git"));
            prop_assert_eq!(parsed.web_path(), format!("{host}/{owner}/{repo}"));
        }

        /// Property: only one trailing `.git` is stripped, so a dotted
        /// name such as `site.github.io` or `mirror.git` survives intact
        #[test]
        fn prop_dotted_name_keeps_inner_git(
            host in host(),
            owner in segment(),
            stem in segment(),
            tail in "(git|github|io)",
        ) {
            let repo = format!("{stem}.{tail}");
            let url = format!("https://{host}/{owner}/{repo}.git");
            let parsed = RepoUrl::parse(&url).expect("well-formed URL");
            prop_assert_eq!(parsed.name(), repo.as_str());
            prop_assert_eq!(parsed.web_path(), format!("{host}/{owner}/{repo}"));
        }

        /// Property: anything without a recognised prefix is rejected
        #[test]
        fn prop_unknown_prefix_rejected(url in "[a-fi-z][a-z0-9:/._-]{0,40}") {
            prop_assert!(
                matches!(RepoUrl::parse(&url), Err(GitError::InvalidRepositoryUrl { .. })),
                "unexpected success for {}",
                url
            );
        }
    }
}
