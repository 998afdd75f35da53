use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PostStatsError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            super::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PostStatsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# post-stats configuration file
version = "1"

[report]
# Statistics to compute, in output order. Available:
#   average-character-length  average post length in characters
#   max-character-length      longest post in characters
#   total-posts-per-week      post count per ISO week
#   average-posts-per-user    posts per distinct author
stats = [
    "average-character-length",
    "max-character-length",
    "total-posts-per-week",
    "average-posts-per-user",
]

# List weeks without posts as zero counts (default: false)
# include_empty_periods = true

[output]
# Output format: text, json or markdown (default: text)
format = "text"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
