// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! commitgrep-git: git plumbing for commitgrep
//!
//! This library crate clones repositories, runs pickaxe (`git log -S`)
//! searches and tracks the checkpoint used for incremental runs.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use commitgrep_git::{ClonedRepo, Git, RepoUrl, SearchOptions, search_history};
//!
//! let git = Git::new();
//! let url = RepoUrl::parse("https://github.com/acme/widgets.git").expect("parse url");
//! let clone = ClonedRepo::clone_into(&git, &url, std::path::Path::new(".")).expect("clone");
//!
//! let rows = search_history(&git, clone.path(), url.web_path(), &SearchOptions::token("TODO"))
//!     .expect("search");
//! println!("{rows}");
//!
//! clone.remove().expect("cleanup");
//! ```

pub mod checkpoint;
pub mod command;
pub mod error;
pub mod remote;
pub mod search;
pub mod stage;

pub use checkpoint::{CHECKPOINT_FILE, Checkpoint};
pub use command::Git;
pub use error::GitError;
pub use remote::RepoUrl;
pub use search::{SearchOptions, row_format, search_history};
pub use stage::{ClonedRepo, is_valid_sha};

