//! Status lines emitted while processing tokens

use std::fmt;
use std::io::{self, Write};

use super::parity::Parity;

/// Console stream a report is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One status line produced during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Input was absent or had no tokens
    Empty,
    /// Token parsed to an even value
    Even(i32),
    /// Token parsed to an odd value
    Odd(i32),
    /// Token failed to parse and was skipped
    Invalid(String),
    /// All tokens have been handled
    Complete,
}

impl Report {
    /// Build the report for a successfully parsed value
    pub fn classified(value: i32, parity: Parity) -> Self {
        match parity {
            Parity::Even => Report::Even(value),
            Parity::Odd => Report::Odd(value),
        }
    }

    pub fn stream(&self) -> Stream {
        match self {
            Report::Invalid(_) => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Empty => write!(f, "List is empty."),
            Report::Even(value) => write!(f, "{} is {}.", value, Parity::Even),
            Report::Odd(value) => write!(f, "{} is {}.", value, Parity::Odd),
            Report::Invalid(token) => write!(f, "Skipping invalid item: {}", token),
            Report::Complete => write!(f, "Processing complete."),
        }
    }
}

/// Destination for reports, called in token order
pub trait Reporter {
    fn emit(&mut self, report: Report);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn emit(&mut self, report: Report) {
        (**self).emit(report);
    }
}

/// Writes each report as a line on stdout or stderr.
///
/// Write errors (a closed pipe, for instance) are ignored so processing
/// always runs to completion.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&mut self, report: Report) {
        let _ = match report.stream() {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", report),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", report),
        };
    }
}

/// Keeps reports in memory, in emission order
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    reports: Vec<Report>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Every line as it would appear on a merged console
    pub fn lines(&self) -> Vec<String> {
        self.reports.iter().map(ToString::to_string).collect()
    }

    /// Lines destined for the given stream
    pub fn lines_on(&self, stream: Stream) -> Vec<String> {
        self.reports
            .iter()
            .filter(|report| report.stream() == stream)
            .map(ToString::to_string)
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn emit(&mut self, report: Report) {
        self.reports.push(report);
    }
}
