pub mod config;
pub mod init;
pub mod report;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use report::{apply_cli_overrides, run_report, run_report_impl};

use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_DATA_ERROR, PostStatsError, Result};

/// Load the configuration a command runs with.
///
/// An explicit path wins; otherwise the usual search order applies. With
/// `no_config` the built-in defaults are used and nothing is read.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or is invalid.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Exit code for a failed command.
#[must_use]
pub const fn exit_code_for(err: &PostStatsError) -> i32 {
    if err.is_data_error() {
        EXIT_DATA_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

pub(crate) fn print_error(err: &PostStatsError) {
    eprintln!("Error: {err}");
    if let PostStatsError::FileRead { source, .. } = err {
        eprintln!("  Caused by: {source}");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
