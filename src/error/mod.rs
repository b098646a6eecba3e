//! Error handling for the rscodec library.
//!
//! This module defines the error types used throughout the codec.

use thiserror::Error;

/// Result type used throughout the codec.
pub type Result<T> = std::result::Result<T, Error>;

/// Error enum for the codec.
#[derive(Error, Debug)]
pub enum Error {
    /// Division by the zero element of the field
    #[error("Division by zero in Galois field")]
    DivisionByZero,

    /// The error locator implies more errors than the parity can correct
    #[error("Too many errors to correct: {detected} detected, maximum is {correctable}")]
    TooManyErrors {
        /// Degree of the derived error locator
        detected: usize,
        /// Maximum number of correctable errors
        correctable: usize,
    },

    /// The root search did not find as many roots as the locator degree
    #[error("Could not locate the errors: found {found} roots, locator degree is {expected}")]
    ErrorLocatingFailure {
        /// Number of roots found inside the codeword
        found: usize,
        /// Degree of the error locator
        expected: usize,
    },

    /// Decoding error
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid input data
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the error reports a codeword that cannot be repaired,
    /// as opposed to a misuse of the API.
    pub fn is_uncorrectable(&self) -> bool {
        matches!(
            self,
            Error::TooManyErrors { .. } | Error::ErrorLocatingFailure { .. } | Error::Decoding(_)
        )
    }
}
