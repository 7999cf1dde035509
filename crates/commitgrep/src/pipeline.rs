// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The end-to-end run
//!
//! One sequential pass: parse the URL, open the report, clone, search each
//! token, update the checkpoint, optionally email, then delete the clone.
//! Any error aborts the run where it happens; the clone is only removed on
//! success.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use commitgrep::config::Config;
//! use commitgrep::pipeline::Pipeline;
//!
//! let config = Config::parse_from(["commitgrep", "https://github.com/acme/widgets.git", "TODO"]);
//! let outcome = Pipeline::new(&config).run().expect("run");
//! println!("{}", outcome.summary());
//! ```

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use commitgrep_git::{
    CHECKPOINT_FILE, Checkpoint, ClonedRepo, Git, RepoUrl, SearchOptions, search_history,
};
use tracing::info;

use crate::config::{Config, PASSWORD_FILE, STYLESHEET_FILE};
use crate::error::CommitgrepError;
use crate::notify::{
    Mailer, ReportEmail, SmtpMailer, resolve_password, subject_for, validate_address,
};
use crate::report::{ReportWriter, Stylesheet, date_label};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The HTML report, left on disk in every case
    pub report_path: PathBuf,
    /// Where the working copy was (it no longer exists)
    pub clone_path: PathBuf,
    /// Number of token sections in the report
    pub sections: usize,
    /// Recipient, when the report was emailed
    pub emailed_to: Option<String>,
}

impl Outcome {
    /// Closing line shown to the user
    #[must_use]
    pub fn summary(&self) -> String {
        match self.emailed_to {
            Some(ref address) => format!("An email was sent to {address}"),
            None => format!(
                "All cleaned up. See {} for results.",
                self.report_path.display()
            ),
        }
    }
}

/// A configured run
pub struct Pipeline<'a> {
    config: &'a Config,
    git: Git,
    mailer: Option<Box<dyn Mailer + 'a>>,
    today: NaiveDate,
}

impl<'a> Pipeline<'a> {
    /// Run with the system `git`, the configured relay and today's date
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            git: Git::new(),
            mailer: None,
            today: Local::now().date_naive(),
        }
    }

    /// Use a specific git handle
    #[must_use]
    pub fn with_git(mut self, git: Git) -> Self {
        self.git = git;
        self
    }

    /// Deliver mail through `mailer` instead of the SMTP relay
    #[must_use]
    pub fn with_mailer(mut self, mailer: impl Mailer + 'a) -> Self {
        self.mailer = Some(Box::new(mailer));
        self
    }

    /// Date printed in captions and the mail subject
    #[must_use]
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Execute the run
    ///
    /// # Errors
    ///
    /// Returns the first failure. An invalid email address is only reported
    /// after the report has been completely written.
    pub fn run(self) -> Result<Outcome, CommitgrepError> {
        let config = self.config;
        config.validate()?;

        let url = RepoUrl::parse(&config.repo)?;
        let workdir = config.workdir_path()?;
        let date = date_label(self.today);

        let report_path = workdir.join(format!("{}.html", url.name()));
        let mut report = ReportWriter::create(&report_path)
            .map_err(|source| report_error(&report_path, source))?;

        let clone = ClonedRepo::clone_into(&self.git, &url, &workdir)?;

        let mut checkpoint = config
            .relative
            .then(|| Checkpoint::load(workdir.join(CHECKPOINT_FILE)));
        let since = checkpoint
            .as_ref()
            .and_then(Checkpoint::lower_bound)
            .map(str::to_string);

        let stylesheet = if config.inline_css {
            let css_path = workdir.join(STYLESHEET_FILE);
            Stylesheet::inline_from(&css_path).map_err(|source| CommitgrepError::Stylesheet {
                path: css_path.clone(),
                source,
            })?
        } else {
            Stylesheet::linked()
        };

        report
            .write_header(url.name(), &stylesheet)
            .map_err(|source| report_error(&report_path, source))?;

        for token in &config.tokens {
            let options = SearchOptions::token(token.as_str()).since_opt(since.as_deref());
            let rows = search_history(&self.git, clone.path(), url.web_path(), &options)?;
            report
                .write_section(token, &date, &rows)
                .map_err(|source| report_error(&report_path, source))?;
        }

        if let Some(checkpoint) = checkpoint.as_mut() {
            checkpoint.save(&clone.head_sha()?)?;
        }

        let emailed_to = match config.email {
            Some(ref address) => {
                validate_address(address)?;
                let html_body = report
                    .read_back()
                    .map_err(|source| report_error(&report_path, source))?;
                let email = ReportEmail {
                    from: config.smtp_user().to_string(),
                    to: address.clone(),
                    subject: subject_for(url.name(), &date),
                    html_body,
                };
                self.deliver(&email, &workdir)?;
                Some(address.clone())
            }
            None => None,
        };

        let sections = report.sections();
        report
            .finish()
            .map_err(|source| report_error(&report_path, source))?;

        let clone_path = clone.remove()?;
        info!(
            report = %report_path.display(),
            sections,
            emailed = emailed_to.is_some(),
            "Run complete"
        );

        Ok(Outcome {
            report_path,
            clone_path,
            sections,
            emailed_to,
        })
    }

    fn deliver(&self, email: &ReportEmail, workdir: &Path) -> Result<(), CommitgrepError> {
        if let Some(ref mailer) = self.mailer {
            mailer.send(email)?;
            return Ok(());
        }

        let password = resolve_password(
            self.config.smtp_password.as_deref(),
            &workdir.join(PASSWORD_FILE),
        )?;
        SmtpMailer::new(
            self.config.smtp_host(),
            self.config.smtp_port(),
            self.config.smtp_user(),
            password,
        )
        .send(email)?;
        Ok(())
    }
}

fn report_error(path: &Path, source: std::io::Error) -> CommitgrepError {
    CommitgrepError::Report {
        path: path.to_path_buf(),
        source,
    }
}
