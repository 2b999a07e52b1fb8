//! Error types for prime list generation and parsing.

use thiserror::Error;

/// The prime buffer could not be reserved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not allocate room for {requested} primes")]
pub struct AllocationError {
    /// Number of slots the builder tried to reserve.
    pub requested: u64,
}

/// Errors produced when reading a serialized prime list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input had no header line.
    #[error("prime list is empty")]
    Empty,

    /// A header token was not where it should be.
    #[error("header is missing the '{token}' token")]
    MissingToken { token: &'static str },

    /// A header field or body line is not a decimal number.
    #[error("invalid number '{value}' on line {line}")]
    InvalidNumber { line: usize, value: String },

    /// A body line is not larger than the one before it.
    #[error("line {line} holds {value}, which does not follow {previous}")]
    NotAscending {
        line: usize,
        previous: u64,
        value: u64,
    },

    /// The header's largest value disagrees with the body.
    #[error("header declares last={declared} but the body ends with {actual}")]
    LastMismatch { declared: u64, actual: u64 },

    /// The header count disagrees with the body.
    #[error("header declares {declared} primes but the body has {actual}")]
    QuantityMismatch { declared: u64, actual: u64 },
}
