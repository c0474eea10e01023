//! Error types for the thermolock core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Validation ran with fewer (or more) digits than a code requires.
    ///
    /// Recovered inside the entry session by raising its error flag.
    #[error("Incomplete entry: {entered} of {expected} digits")]
    IncompleteEntry { entered: usize, expected: usize },

    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
}
