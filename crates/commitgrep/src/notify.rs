// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Emailing the finished report
//!
//! The report is sent as a `text/html` body through an authenticated SMTP
//! relay using STARTTLS. Delivery sits behind the [`Mailer`] trait so the
//! pipeline can be exercised without a relay.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Destination does not look like `local@domain.tld`
    #[error("Invalid email address: {address}")]
    InvalidEmailAddress {
        /// The rejected address
        address: String,
    },

    /// No relay password in the environment and the password file is unreadable
    #[error("Cannot read relay password from {}: {source}", path.display())]
    PasswordUnavailable {
        /// Password file that was tried
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Sender or recipient rejected by the mail builder
    #[error("Address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("Message error: {0}")]
    Message(#[from] lettre::error::Error),

    /// Relay connection, TLS, authentication or delivery failure
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Check an address against the minimal `local@domain.tld` shape
///
/// # Errors
///
/// Returns `NotifyError::InvalidEmailAddress` if the address does not match.
pub fn validate_address(address: &str) -> Result<(), NotifyError> {
    if EMAIL_PATTERN.is_match(address) {
        Ok(())
    } else {
        Err(NotifyError::InvalidEmailAddress {
            address: address.to_string(),
        })
    }
}

/// Mail subject for a report
#[must_use]
pub fn subject_for(repo_name: &str, date: &str) -> String {
    format!("[commitgrep] results for {repo_name} ({date})")
}

/// A composed report email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEmail {
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Full HTML document
    pub html_body: String,
}

impl ReportEmail {
    /// Build the MIME message
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::Address` for unparseable addresses and
    /// `NotifyError::Message` if the message cannot be built.
    pub fn to_message(&self) -> Result<Message, NotifyError> {
        Ok(Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(self.html_body.clone())?)
    }
}

/// Delivers report emails
pub trait Mailer {
    /// Send one report
    ///
    /// # Errors
    ///
    /// Returns a `NotifyError` if the message cannot be built or delivered.
    fn send(&self, email: &ReportEmail) -> Result<(), NotifyError>;
}

impl<M: Mailer + ?Sized> Mailer for &M {
    fn send(&self, email: &ReportEmail) -> Result<(), NotifyError> {
        (**self).send(email)
    }
}

/// Relay connection settings
#[derive(Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl SmtpMailer {
    /// Create a mailer for an authenticated STARTTLS relay
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &ReportEmail) -> Result<(), NotifyError> {
        let message = email.to_message()?;
        debug!(host = %self.host, port = self.port, "Connecting to mail relay");

        let transport = SmtpTransport::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(
                self.username.clone(),
                self.password.clone(),
            ))
            .build();
        transport.send(&message)?;

        info!(to = %email.to, "Report emailed");
        Ok(())
    }
}

/// Resolve the relay password
///
/// An explicitly supplied password wins; otherwise the first line of
/// `password_file` is used.
///
/// # Errors
///
/// Returns `NotifyError::PasswordUnavailable` if no password was supplied
/// and the file cannot be read.
pub fn resolve_password(
    explicit: Option<&str>,
    password_file: &Path,
) -> Result<String, NotifyError> {
    if let Some(password) = explicit {
        return Ok(password.to_string());
    }
    let contents = std::fs::read_to_string(password_file).map_err(|source| {
        NotifyError::PasswordUnavailable {
            path: password_file.to_path_buf(),
            source,
        }
    })?;
    Ok(contents.lines().next().unwrap_or("").to_string())
}
