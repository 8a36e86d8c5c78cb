//! Menu-driven text shell around the track index.
//!
//! The shell owns all console I/O and input validation; the index only ever
//! sees entries that already passed the configured limits. Input and output
//! are generic so whole sessions can be scripted in tests.

mod input;
mod session;

pub use input::{EntryError, Field, check_field, parse_year};
pub use session::Session;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests;
