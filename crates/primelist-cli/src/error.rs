//! Error types for the prime list CLI.

use std::io;
use std::path::PathBuf;

use primelist_core::AllocationError;
use thiserror::Error;

use crate::mode::RunMode;

/// Reasons the positional limit is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("limit must not be empty")]
    Empty,

    #[error("limit '{0}' must contain only decimal digits")]
    NotDigits(String),

    #[error("limit '{0}' does not fit in an unsigned 64-bit integer")]
    OutOfRange(String),

    #[error("limit must be greater than zero")]
    Zero,
}

/// The output file name could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    #[error("list directory must not be empty")]
    EmptyDirectory,
}

/// A list or prime log file could not be written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening (or preparing the directory of) the file failed.
    #[error("could not open '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write or flush failed after the file was opened.
    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The saved location could not be shown. Never fails a run.
#[derive(Debug, Error)]
pub enum PathDisplayError {
    #[error("could not split '{}' into directory and file name", path.display())]
    Format { path: PathBuf },

    #[error("could not resolve the working directory: {0}")]
    WorkingDirectory(#[source] io::Error),
}

/// Fatal errors of a run. Each category has its own exit code.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("missing arguments: {0}")]
    MissingArguments(String),

    #[error("error with argument format: {0}")]
    ArgumentFormat(String),

    #[error("{0} mode is not supported")]
    UnsupportedMode(RunMode),

    #[error("error with file name: {0}")]
    FileName(#[from] FileNameError),

    #[error("error allocating array of prime numbers: {0}")]
    Allocation(#[from] AllocationError),

    #[error("error creating file: {0}")]
    Save(#[source] StoreError),

    #[error("error saving prime log: {0}")]
    PrimeLog(#[source] StoreError),
}

impl RunError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArguments(_) => -1,
            Self::ArgumentFormat(_) => -2,
            Self::UnsupportedMode(_) => -3,
            Self::FileName(_) => -4,
            Self::Allocation(_) => -5,
            Self::Save(_) => -6,
            Self::PrimeLog(_) => -7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            RunError::MissingArguments(String::new()),
            RunError::ArgumentFormat(String::new()),
            RunError::UnsupportedMode(RunMode::UpdateWithNumber),
            RunError::FileName(FileNameError::EmptyDirectory),
            RunError::Allocation(AllocationError { requested: 1 }),
            RunError::Save(StoreError::File {
                path: PathBuf::from("lists/list_of_primes.txt"),
                source: io::Error::other("denied"),
            }),
            RunError::PrimeLog(StoreError::Write {
                path: PathBuf::from("logs/primelog"),
                source: io::Error::other("disk full"),
            }),
        ];
        let mut codes: Vec<i32> = errors.iter().map(RunError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![-7, -6, -5, -4, -3, -2, -1]);
    }

    #[test]
    fn test_store_error_message_names_path() {
        let error = StoreError::File {
            path: PathBuf::from("lists/list_of_primes.txt"),
            source: io::Error::other("denied"),
        };
        assert_eq!(
            error.to_string(),
            "could not open 'lists/list_of_primes.txt': denied"
        );
    }
}
