//! Token processor that sums even values

use tracing::{debug, info};

use super::parity::Parity;
use super::report::{ConsoleReporter, Report, Reporter};
use super::token::parse_token;

/// Counts and total from a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Tokens seen, including invalid ones
    pub tokens: usize,
    pub even: usize,
    pub odd: usize,
    pub invalid: usize,
    /// Sum of the even values (wraps on overflow)
    pub total: i32,
}

/// Processor that classifies tokens and reports each one
#[derive(Debug)]
pub struct Processor<R> {
    reporter: R,
}

impl Processor<ConsoleReporter> {
    /// Create a processor that writes to stdout and stderr
    pub fn console() -> Self {
        Self::new(ConsoleReporter)
    }
}

impl<R: Reporter> Processor<R> {
    /// Create a new processor with the given reporter
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Consume the processor and return its reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Process tokens and return the sum of the even ones.
    ///
    /// Absent and empty input both report "List is empty." and return 0.
    /// Tokens that do not parse are reported on stderr and skipped.
    pub fn process_data<S: AsRef<str>>(&mut self, tokens: Option<&[S]>) -> i32 {
        self.process_with_summary(tokens).total
    }

    /// Like [`Processor::process_data`], but returns per-parity counts as well
    pub fn process_with_summary<S: AsRef<str>>(
        &mut self,
        tokens: Option<&[S]>,
    ) -> ProcessSummary {
        let tokens = match tokens {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => {
                debug!("no tokens to process");
                self.reporter.emit(Report::Empty);
                return ProcessSummary::default();
            }
        };

        let summary = tokens
            .iter()
            .fold(ProcessSummary::default(), |summary, token| {
                self.step(summary, token.as_ref())
            });

        self.reporter.emit(Report::Complete);
        info!(
            tokens = summary.tokens,
            even = summary.even,
            odd = summary.odd,
            invalid = summary.invalid,
            total = summary.total,
            "processing complete"
        );

        summary
    }

    fn step(&mut self, mut summary: ProcessSummary, token: &str) -> ProcessSummary {
        summary.tokens += 1;

        match parse_token(token) {
            Ok(value) => {
                let parity = Parity::of(value);
                debug!(token, value, %parity, "classified token");
                self.reporter.emit(Report::classified(value, parity));

                match parity {
                    Parity::Even => {
                        summary.even += 1;
                        summary.total = summary.total.wrapping_add(value);
                    }
                    Parity::Odd => summary.odd += 1,
                }
            }
            Err(err) => {
                debug!(token, kind = ?err.kind, "skipping invalid token");
                self.reporter.emit(Report::Invalid(err.token));
                summary.invalid += 1;
            }
        }

        summary
    }
}

/// Process tokens, writing status lines to the console
pub fn process_data<S: AsRef<str>>(tokens: Option<&[S]>) -> i32 {
    Processor::console().process_data(tokens)
}
