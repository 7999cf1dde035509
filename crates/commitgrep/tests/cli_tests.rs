// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for argument parsing and the logging flags
//!
//! Parsing is checked through `Config::try_parse_from`; help, version and
//! environment handling are checked against the built binary.

use std::process::Command;

use clap::Parser;
use commitgrep::config::Config;
use tracing::Level;

const REPO: &str = "git@github.com:acme/widgets.git";

fn commitgrep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_commitgrep"))
}

// ============================================================================
// Positional arguments
// ============================================================================

#[test]
fn test_single_token() {
    let config = Config::try_parse_from(["commitgrep", REPO, "TODO"]).expect("parse should succeed");
    assert_eq!(config.repo, REPO);
    assert_eq!(config.tokens, vec!["TODO"]);
}

#[test]
fn test_tokens_keep_command_line_order() {
    let config = Config::try_parse_from(["commitgrep", REPO, "zeta", "alpha", "mid"])
        .expect("parse should succeed");
    assert_eq!(config.tokens, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_token_is_required() {
    let result = Config::try_parse_from(["commitgrep", REPO]);
    assert!(result.is_err(), "at least one token is required");
}

#[test]
fn test_empty_token_exits_with_usage_error() {
    // An empty pickaxe string would swallow the next git argument
    let output = commitgrep()
        .args([REPO, "TODO", ""])
        .output()
        .expect("Failed to run commitgrep");
    assert_eq!(output.status.code(), Some(2));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}

#[test]
fn test_token_with_spaces_is_one_token() {
    let config = Config::try_parse_from(["commitgrep", REPO, "fn main"])
        .expect("parse should succeed");
    assert_eq!(config.tokens, vec!["fn main"]);
}

#[test]
fn test_repo_url_is_not_validated_by_parser() {
    // URL shape is checked when the run starts
    let config = Config::try_parse_from(["commitgrep", "ftp://example.com/x.git", "TODO"])
        .expect("parse should succeed");
    assert_eq!(config.repo, "ftp://example.com/x.git");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_workdir_flag() {
    let config = Config::try_parse_from(["commitgrep", REPO, "TODO", "-w", "/tmp/reports"])
        .expect("parse should succeed");
    assert_eq!(
        config.workdir.as_deref(),
        Some(std::path::Path::new("/tmp/reports"))
    );
}

#[test]
fn test_inline_css_flag() {
    let config = Config::try_parse_from(["commitgrep", REPO, "TODO", "--inline-css"])
        .expect("parse should succeed");
    assert!(config.inline_css);
}

#[test]
fn test_smtp_flags() {
    let config = Config::try_parse_from([
        "commitgrep",
        REPO,
        "TODO",
        "--smtp-host",
        "mail.example.com",
        "--smtp-port",
        "2525",
        "--smtp-user",
        "bot@example.com",
    ])
    .expect("parse should succeed");
    assert_eq!(config.smtp_host(), "mail.example.com");
    assert_eq!(config.smtp_port(), 2525);
    assert_eq!(config.smtp_user(), "bot@example.com");
}

#[test]
fn test_smtp_port_must_be_numeric() {
    let result = Config::try_parse_from(["commitgrep", REPO, "TODO", "--smtp-port", "smtp"]);
    assert!(result.is_err());
}

#[test]
fn test_email_value_is_not_validated_by_parser() {
    let config = Config::try_parse_from(["commitgrep", REPO, "TODO", "-e", "not-an-email"])
        .expect("parse should succeed");
    assert_eq!(config.email.as_deref(), Some("not-an-email"));
}

#[test]
fn test_relative_flag_value_syntax_not_supported() {
    let result = Config::try_parse_from(["commitgrep", REPO, "TODO", "--relative=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config =
        Config::try_parse_from(["commitgrep", REPO, "TODO", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(!config.quiet);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_long_flag() {
    let config = Config::try_parse_from(["commitgrep", REPO, "TODO", "--quiet"])
        .expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_wins_over_quiet() {
    let config = Config::try_parse_from(["commitgrep", REPO, "TODO", "-v", "-q"])
        .expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_help_lists_options() {
    let output = commitgrep()
        .arg("--help")
        .output()
        .expect("Failed to run commitgrep");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for option in ["--email", "--relative", "--workdir", "--inline-css"] {
        assert!(stdout.contains(option), "help should mention {option}");
    }
}

#[test]
fn test_version_flag() {
    let output = commitgrep()
        .arg("--version")
        .output()
        .expect("Failed to run commitgrep");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_arguments_exit_with_usage_error() {
    let output = commitgrep().output().expect("Failed to run commitgrep");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_missing_workdir_from_env_fails() {
    let output = commitgrep()
        .args([REPO, "TODO"])
        .env("COMMITGREP_WORKDIR", "/nonexistent/path/12345")
        .output()
        .expect("Failed to run commitgrep");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Working directory not found"));
}
