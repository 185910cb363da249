pub mod parity;
pub mod processor;
pub mod report;
pub mod token;
