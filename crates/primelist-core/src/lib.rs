//! Prime list generation and the prime list file format.
//!
//! The crate has three layers:
//! - [`oracle`]: primality by trial division against already-known primes
//! - [`builder`]: drives the oracle from zero up to a limit
//! - [`serialize`]: the `quantity=<N>,last=<L>` text format

pub mod builder;
pub mod error;
pub mod list;
pub mod oracle;
pub mod serialize;

pub use builder::{build_prime_list, capacity_estimate};
pub use error::{AllocationError, ParseError};
pub use list::{Number, PrimeList};
pub use oracle::{ceil_sqrt, is_prime};
pub use serialize::{
    HEADER_LAST_TOKEN, HEADER_QUANTITY_TOKEN, PrimeListHeader, parse_prime_list, serialize,
    write_prime_list, write_prime_log,
};
