use std::path::PathBuf;
use std::time::{Duration, Instant};

use primelist_core::{Number, build_prime_list};
use tracing::{info, info_span, warn};

use crate::error::{PathDisplayError, RunError};
use crate::layout::{OutputLayout, SavedPath, describe_saved_path};
use crate::mode::RunMode;
use crate::store::{save_list, save_prime_log};

/// Everything a run needs, independent of how it was parsed.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub limit: Number,
    pub mode: RunMode,
    pub layout: OutputLayout,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub limit: Number,
    pub mode: RunMode,
    pub quantity: u64,
    pub largest: Option<Number>,
    pub list_path: PathBuf,
    pub prime_log: PathBuf,
    /// Display form of the list path; an error here does not fail the run.
    pub location: Result<SavedPath, PathDisplayError>,
    pub elapsed: Duration,
}

/// Generate the primes up to the limit, save the list, then the prime log.
///
/// Stops at the first fatal error. Files written before that point stay on
/// disk.
pub fn run_create(request: &RunRequest) -> Result<RunOutcome, RunError> {
    let (limit, mode, layout) = (request.limit, request.mode, &request.layout);
    let run_span = info_span!("create", limit, mode = %mode);
    let _run_guard = run_span.enter();
    let start = Instant::now();

    if mode.is_update() {
        return Err(RunError::UnsupportedMode(mode));
    }

    let list_path = layout.list_file_name(mode.embeds_limit().then_some(limit))?;

    let primes = info_span!("generate").in_scope(|| build_prime_list(limit))?;
    info!(quantity = primes.quantity(), largest = ?primes.largest(), "primes generated");

    println!("\nCreating file with prime numbers...");
    info_span!("save", path = %list_path.display())
        .in_scope(|| save_list(&list_path, &primes))
        .map_err(RunError::Save)?;

    let location = describe_saved_path(&list_path, std::env::current_dir);
    match &location {
        Ok(saved) => println!("\n{saved}"),
        Err(error) => {
            warn!(%error, "could not show the list location");
            eprintln!("warning: error showing path: {error}");
        }
    }

    save_prime_log(&layout.prime_log, primes.last_or_sentinel()).map_err(RunError::PrimeLog)?;

    let elapsed = start.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "run complete");
    Ok(RunOutcome {
        limit,
        mode,
        quantity: primes.quantity(),
        largest: primes.largest(),
        list_path,
        prime_log: layout.prime_log.clone(),
        location,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(dir: &TempDir, limit: Number, mode: RunMode) -> RunRequest {
        RunRequest {
            limit,
            mode,
            layout: OutputLayout::default()
                .with_list_dir(dir.path().join("lists"))
                .with_prime_log(dir.path().join("logs").join("primelog")),
        }
    }

    #[test]
    fn test_update_modes_touch_nothing() {
        let dir = TempDir::new().unwrap();
        for mode in [RunMode::UpdateWithNumber, RunMode::UpdateWithoutNumber] {
            let error = run_create(&request(&dir, 30, mode)).unwrap_err();
            assert_eq!(error.exit_code(), -3);
        }
        assert!(!dir.path().join("lists").exists());
        assert!(!dir.path().join("logs").exists());
    }

    #[test]
    fn test_outcome_reports_counts() {
        let dir = TempDir::new().unwrap();
        let outcome = run_create(&request(&dir, 30, RunMode::NewWithNumber)).unwrap();
        assert_eq!(outcome.quantity, 10);
        assert_eq!(outcome.largest, Some(29));
        assert!(outcome.list_path.ends_with("list_of_primes_up_to_30.txt"));
        assert!(outcome.location.is_ok());
    }
}
