//! commitgrep library
//!
//! This module exports the pieces of the commitgrep run for use in
//! integration tests and as a library.

pub mod config;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod report;

pub use config::Config;
pub use error::CommitgrepError;
pub use pipeline::{Outcome, Pipeline};
