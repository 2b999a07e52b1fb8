//! Where list files and the prime log are written.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use primelist_core::Number;

use crate::error::{FileNameError, PathDisplayError};

pub const DEFAULT_LIST_DIR: &str = "lists";
pub const DEFAULT_PRIME_LOG: &str = "logs/primelog";

pub const LIST_FILE_STEM: &str = "list_of_primes";
pub const LIST_FILE_STEM_WITH_LIMIT: &str = "list_of_primes_up_to_";
pub const LIST_FILE_EXTENSION: &str = ".txt";

/// Output locations for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Directory that receives the list file.
    pub list_dir: PathBuf,
    /// Prime log path, overwritten on every run.
    pub prime_log: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            list_dir: PathBuf::from(DEFAULT_LIST_DIR),
            prime_log: PathBuf::from(DEFAULT_PRIME_LOG),
        }
    }
}

impl OutputLayout {
    #[must_use]
    pub fn with_list_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.list_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_prime_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.prime_log = path.into();
        self
    }

    /// Build the list file path, with the limit in the name when given.
    ///
    /// # Errors
    ///
    /// Fails when the list directory is empty.
    pub fn list_file_name(&self, limit: Option<Number>) -> Result<PathBuf, FileNameError> {
        if self.list_dir.as_os_str().is_empty() {
            return Err(FileNameError::EmptyDirectory);
        }
        let file_name = match limit {
            Some(limit) => format!("{LIST_FILE_STEM_WITH_LIMIT}{limit}{LIST_FILE_EXTENSION}"),
            None => format!("{LIST_FILE_STEM}{LIST_FILE_EXTENSION}"),
        };
        Ok(self.list_dir.join(file_name))
    }
}

/// A saved list file split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPath {
    pub file_name: String,
    /// Working directory joined with the list directory.
    pub directory: PathBuf,
}

impl fmt::Display for SavedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The list of prime numbers was saved in the file '{}'...\n\n\
             ... in the directory:\n\n{}",
            self.file_name,
            self.directory.display()
        )
    }
}

/// Split `path` into file name and directory and resolve the directory
/// against the working directory returned by `current_dir`.
///
/// # Errors
///
/// [`PathDisplayError::Format`] when `path` has no directory or no file
/// name, [`PathDisplayError::WorkingDirectory`] when `current_dir` fails.
pub fn describe_saved_path<F>(path: &Path, current_dir: F) -> Result<SavedPath, PathDisplayError>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    let format_error = || PathDisplayError::Format {
        path: path.to_path_buf(),
    };
    let folder = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .ok_or_else(format_error)?;
    let file_name = path.file_name().ok_or_else(format_error)?;

    let cwd = current_dir().map_err(PathDisplayError::WorkingDirectory)?;
    Ok(SavedPath {
        file_name: file_name.to_string_lossy().into_owned(),
        directory: cwd.join(folder),
    })
}
