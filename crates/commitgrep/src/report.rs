// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! HTML report writer
//!
//! A report is one document: a header titled after the repository, then
//! one `<table>` per token in the order the tokens were given. Rows come
//! pre-rendered from the history search and are written untouched.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::config::STYLESHEET_FILE;

/// How the report pulls in its table styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// `<link>` to a stylesheet by relative href
    Linked(String),
    /// CSS inlined into a `<style>` element
    Inline(String),
}

impl Stylesheet {
    /// Link `table.css` next to the report
    #[must_use]
    pub fn linked() -> Self {
        Self::Linked(STYLESHEET_FILE.to_string())
    }

    /// Read the CSS at `path` for inlining
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the stylesheet cannot be read.
    pub fn inline_from(path: &Path) -> io::Result<Self> {
        std::fs::read_to_string(path).map(Self::Inline)
    }

    fn to_html(&self) -> String {
        match self {
            Self::Linked(href) => format!("<link rel=\"stylesheet\" href=\"{href}\">"),
            Self::Inline(css) => format!("<style>{css}</style>"),
        }
    }
}

/// Date as shown in captions and mail subjects (`MM-DD-YYYY`)
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%m-%d-%Y").to_string()
}

/// Writes a report into a single open handle
#[derive(Debug)]
pub struct ReportWriter<W> {
    out: W,
    sections: usize,
}

impl ReportWriter<File> {
    /// Create (or truncate) the report file, opened for both writing and
    /// reading back
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Read + Write + Seek> ReportWriter<W> {
    /// Wrap an existing handle
    pub fn new(out: W) -> Self {
        Self { out, sections: 0 }
    }

    /// Write the document header
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the underlying handle.
    pub fn write_header(&mut self, repo_name: &str, stylesheet: &Stylesheet) -> io::Result<()> {
        write!(
            self.out,
            "<!DOCTYPE html>\n\
             <html lang=en>\n\
             <title>commitgrep results for {repo_name}</title>\n\
             <meta name=\"viewport\" content=\"width=device-width\">\n\
             {}\n",
            stylesheet.to_html()
        )
    }

    /// Write one token's table: caption, header row, the matched rows and
    /// the closing tag
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the underlying handle.
    pub fn write_section(&mut self, token: &str, date: &str, rows: &str) -> io::Result<()> {
        write!(
            self.out,
            "<table class=\"table table-responsive\">\n\
             <caption>Commits related to the token: {token}, as of {date}</caption>\n\
             <thead><tr><th>SHA</th><th>date</th><th>commit</th></tr></thead>\n\
             {rows}</table>\n"
        )?;
        self.sections += 1;
        Ok(())
    }

    /// Number of token sections written so far
    #[must_use]
    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Rewind and read the whole document written so far
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the underlying handle.
    pub fn read_back(&mut self) -> io::Result<String> {
        self.out.flush()?;
        self.out.seek(SeekFrom::Start(0))?;
        let mut body = String::new();
        self.out.read_to_string(&mut body)?;
        Ok(body)
    }

    /// Flush and release the handle
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
