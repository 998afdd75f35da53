use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PostStatsError, Result};

use super::{load_config, print_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has
/// invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(PostStatsError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the configuration a report would run with.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
        ConfigOutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&config)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    if let Some(version) = &config.version {
        let _ = writeln!(output, "version = \"{version}\"\n");
    }

    output.push_str("[report]\n");
    let stats: Vec<_> = config.report.stats.iter().map(|s| s.as_str()).collect();
    let _ = writeln!(output, "  stats = {stats:?}");
    let _ = writeln!(
        output,
        "  include_empty_periods = {}",
        config.report.include_empty_periods
    );

    output.push_str("\n[output]\n");
    let _ = writeln!(output, "  format = \"{}\"", config.output.format.as_str());

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
