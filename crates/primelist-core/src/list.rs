//! The number type and the ordered prime list.

use std::ops::Deref;

/// Unsigned value used for candidates and primes.
pub type Number = u64;

/// Ascending list of distinct primes.
///
/// Only the builder appends to it, so the ordering invariant holds by
/// construction. Read access goes through [`Deref`] to a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeList {
    primes: Vec<Number>,
}

impl PrimeList {
    pub(crate) fn with_buffer(primes: Vec<Number>) -> Self {
        Self { primes }
    }

    pub(crate) fn push(&mut self, prime: Number) {
        debug_assert!(self.primes.last().is_none_or(|&last| last < prime));
        self.primes.push(prime);
    }

    /// Borrow the primes as a slice.
    pub fn as_slice(&self) -> &[Number] {
        &self.primes
    }

    /// Number of primes, as written in the header.
    pub fn quantity(&self) -> u64 {
        self.primes.len() as u64
    }

    /// Largest prime, if any.
    pub fn largest(&self) -> Option<Number> {
        self.primes.last().copied()
    }

    /// Largest prime, or `0` for an empty list.
    pub fn last_or_sentinel(&self) -> Number {
        self.largest().unwrap_or(0)
    }

    pub fn into_vec(self) -> Vec<Number> {
        self.primes
    }
}

impl Deref for PrimeList {
    type Target = [Number];

    fn deref(&self) -> &Self::Target {
        &self.primes
    }
}

impl<'a> IntoIterator for &'a PrimeList {
    type Item = &'a Number;
    type IntoIter = std::slice::Iter<'a, Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}
