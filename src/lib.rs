pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod post;
pub mod stats;

pub use error::{PostStatsError, Result};

/// Report produced.
pub const EXIT_SUCCESS: i32 = 0;

/// The post feed could not be read as posts (malformed JSON or post).
pub const EXIT_DATA_ERROR: i32 = 1;

/// Bad configuration, arguments, or I/O failure.
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
