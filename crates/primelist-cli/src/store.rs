//! File output for the list and the prime log.
//!
//! Each file is written in one pass through a `BufWriter`. A failed write
//! leaves whatever reached the disk in place.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use primelist_core::{Number, PrimeList, write_prime_list, write_prime_log};
use tracing::debug;

use crate::error::StoreError;

/// Save `primes` to `path`, replacing any previous contents.
pub fn save_list(path: &Path, primes: &PrimeList) -> Result<(), StoreError> {
    let mut writer = open(path)?;
    write_prime_list(&mut writer, primes)
        .and_then(|()| writer.flush())
        .map_err(|source| write_error(path, source))?;
    debug!(path = %path.display(), quantity = primes.quantity(), "saved prime list");
    Ok(())
}

/// Save `largest` as the only contents of the prime log.
pub fn save_prime_log(path: &Path, largest: Number) -> Result<(), StoreError> {
    let mut writer = open(path)?;
    write_prime_log(&mut writer, largest)
        .and_then(|()| writer.flush())
        .map_err(|source| write_error(path, source))?;
    debug!(path = %path.display(), largest, "saved prime log");
    Ok(())
}

fn open(path: &Path) -> Result<BufWriter<File>, StoreError> {
    let file_error = |source: io::Error| StoreError::File {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(file_error)?;
    }
    File::create(path).map(BufWriter::new).map_err(file_error)
}

fn write_error(path: &Path, source: io::Error) -> StoreError {
    StoreError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primelist_core::build_prime_list;
    use tempfile::TempDir;

    #[test]
    fn test_save_list_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lists").join("list_of_primes.txt");

        save_list(&path, &build_prime_list(10).unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "quantity=4,last=7\n2\n3\n5\n7");
    }

    #[test]
    fn test_save_list_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list_of_primes.txt");
        save_list(&path, &build_prime_list(100).unwrap()).unwrap();
        save_list(&path, &build_prime_list(1).unwrap()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "quantity=0,last=0");
    }

    #[test]
    fn test_save_list_into_directory_is_file_error() {
        let dir = TempDir::new().unwrap();
        let result = save_list(dir.path(), &build_prime_list(10).unwrap());
        assert!(matches!(result, Err(StoreError::File { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_is_write_error() {
        let full = Path::new("/dev/full");
        if fs::OpenOptions::new().write(true).open(full).is_err() {
            return;
        }
        let result = save_list(full, &build_prime_list(10).unwrap());
        assert!(matches!(result, Err(StoreError::Write { .. })));
    }

    #[test]
    fn test_save_prime_log() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("primelog");
        save_prime_log(&path, 29).unwrap();
        save_prime_log(&path, 7).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "7");
    }
}
