//! Execution modes selected by the command-line flags.

use std::fmt;

/// What a run should do with the list file.
///
/// The update modes are part of the argument grammar but have no behavior;
/// a run in either of them stops before touching the file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Create `list_of_primes.txt`.
    NewWithoutNumber,
    /// Create `list_of_primes_up_to_<limit>.txt`.
    NewWithNumber,
    UpdateWithoutNumber,
    UpdateWithNumber,
}

impl RunMode {
    #[must_use]
    pub fn from_flags(file_name: bool, update: bool) -> Self {
        match (update, file_name) {
            (false, false) => Self::NewWithoutNumber,
            (false, true) => Self::NewWithNumber,
            (true, false) => Self::UpdateWithoutNumber,
            (true, true) => Self::UpdateWithNumber,
        }
    }

    /// Whether the list file name carries the limit.
    #[must_use]
    pub fn embeds_limit(self) -> bool {
        matches!(self, Self::NewWithNumber | Self::UpdateWithNumber)
    }

    #[must_use]
    pub fn is_update(self) -> bool {
        matches!(self, Self::UpdateWithoutNumber | Self::UpdateWithNumber)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NewWithoutNumber => "new",
            Self::NewWithNumber => "new (limit in file name)",
            Self::UpdateWithoutNumber => "update",
            Self::UpdateWithNumber => "update (limit in file name)",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_covers_all_modes() {
        assert_eq!(RunMode::from_flags(false, false), RunMode::NewWithoutNumber);
        assert_eq!(RunMode::from_flags(true, false), RunMode::NewWithNumber);
        assert_eq!(RunMode::from_flags(false, true), RunMode::UpdateWithoutNumber);
        assert_eq!(RunMode::from_flags(true, true), RunMode::UpdateWithNumber);
    }

    #[test]
    fn test_mode_predicates() {
        assert!(RunMode::NewWithNumber.embeds_limit());
        assert!(!RunMode::NewWithoutNumber.embeds_limit());
        assert!(RunMode::UpdateWithoutNumber.is_update());
        assert!(!RunMode::NewWithNumber.is_update());
    }
}
