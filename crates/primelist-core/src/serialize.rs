//! Text format for prime lists.
//!
//! A list file is a header line followed by one prime per line:
//!
//! ```text
//! quantity=4,last=7
//! 2
//! 3
//! 5
//! 7
//! ```
//!
//! Lines are separated by `\n` and the last line has no terminator. Other
//! tools split on the literal `quantity=` and `,last=` tokens, so the layout
//! is byte-exact.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::ParseError;
use crate::list::{Number, PrimeList};

pub const HEADER_QUANTITY_TOKEN: &str = "quantity=";
pub const HEADER_LAST_TOKEN: &str = ",last=";

/// First line of a prime list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeListHeader {
    /// Number of primes in the body.
    pub quantity: u64,
    /// Largest prime, or 0 when the body is empty.
    pub last: Number,
}

impl PrimeListHeader {
    pub fn for_list(primes: &PrimeList) -> Self {
        Self {
            quantity: primes.quantity(),
            last: primes.last_or_sentinel(),
        }
    }
}

impl fmt::Display for PrimeListHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{HEADER_QUANTITY_TOKEN}{}{HEADER_LAST_TOKEN}{}",
            self.quantity, self.last
        )
    }
}

impl FromStr for PrimeListHeader {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let rest = line
            .strip_prefix(HEADER_QUANTITY_TOKEN)
            .ok_or(ParseError::MissingToken {
                token: HEADER_QUANTITY_TOKEN,
            })?;
        let (quantity, last) = rest
            .split_once(HEADER_LAST_TOKEN)
            .ok_or(ParseError::MissingToken {
                token: HEADER_LAST_TOKEN,
            })?;
        Ok(Self {
            quantity: parse_number(quantity, 1)?,
            last: parse_number(last, 1)?,
        })
    }
}

/// Write `primes` in list file format.
///
/// # Errors
///
/// Propagates the first error returned by `writer`. Nothing is rolled back.
pub fn write_prime_list<W: Write>(writer: &mut W, primes: &PrimeList) -> io::Result<()> {
    write!(writer, "{}", PrimeListHeader::for_list(primes))?;
    for prime in primes {
        write!(writer, "\n{prime}")?;
    }
    Ok(())
}

/// Write the prime log: the bare number, no header and no newline.
pub fn write_prime_log<W: Write>(writer: &mut W, largest: Number) -> io::Result<()> {
    write!(writer, "{largest}")
}

/// Render `primes` in list file format.
pub fn serialize(primes: &PrimeList) -> String {
    let mut text = PrimeListHeader::for_list(primes).to_string();
    for prime in primes {
        text.push('\n');
        text.push_str(&prime.to_string());
    }
    text
}

/// Read a list file back into its header and body.
///
/// Lines are split on `\n` only, so a trailing newline or `\r\n` endings
/// are rejected.
///
/// # Errors
///
/// Fails on a malformed header, a non-numeric body line, a body that is not
/// strictly increasing, or a header whose `quantity` or `last` disagrees
/// with the body.
pub fn parse_prime_list(text: &str) -> Result<(PrimeListHeader, Vec<Number>), ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut lines = text.split('\n');
    let header: PrimeListHeader = lines.next().ok_or(ParseError::Empty)?.parse()?;
    let body = lines
        .enumerate()
        .map(|(index, line)| parse_number(line, index + 2))
        .collect::<Result<Vec<_>, _>>()?;

    let actual = body.len() as u64;
    if actual != header.quantity {
        return Err(ParseError::QuantityMismatch {
            declared: header.quantity,
            actual,
        });
    }
    if let Some(index) = body.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(ParseError::NotAscending {
            line: index + 3,
            previous: body[index],
            value: body[index + 1],
        });
    }
    let largest = body.last().copied().unwrap_or(0);
    if header.last != largest {
        return Err(ParseError::LastMismatch {
            declared: header.last,
            actual: largest,
        });
    }
    Ok((header, body))
}

fn parse_number(value: &str, line: usize) -> Result<Number, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        line,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
