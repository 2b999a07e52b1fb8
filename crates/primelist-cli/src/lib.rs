//! CLI library components for the prime list generator.

pub mod cli;
pub mod commands;
pub mod error;
pub mod layout;
pub mod logging;
pub mod mode;
pub mod store;
pub mod summary;
