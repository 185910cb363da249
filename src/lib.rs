//! parity-sum library
//!
//! Parses integer tokens, classifies each by parity, and sums the even ones.

pub mod core;
pub mod error;

// Re-export main types for convenience
pub use core::parity::Parity;
pub use core::processor::{process_data, ProcessSummary, Processor};
pub use core::report::{ConsoleReporter, RecordingReporter, Report, Reporter, Stream};
pub use core::token::parse_token;
pub use error::{InvalidToken, TokenErrorKind};
