use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::stats::StatName;

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "post-stats")]
#[command(author, version, about = "Monthly statistics over social media posts")]
#[command(long_about = "Compute monthly statistics (post lengths, posts per author, \
    posts per week) over a JSON feed of social media posts.\n\n\
    Exit codes:\n  \
    0 - Report produced\n  \
    1 - Malformed post feed\n  \
    2 - Configuration, argument or I/O error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute statistics for one month of posts
    Report(ReportArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// JSON post feed to read, or `-` for stdin
    pub feed: PathBuf,

    /// Month to report on, e.g. "August, 2018" or 2018-08
    #[arg(short, long)]
    pub month: String,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json, markdown] (overrides config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Statistic to compute, repeatable (overrides config)
    #[arg(long = "stat", value_name = "NAME")]
    pub stats: Vec<StatName>,

    /// List weeks without posts in split statistics
    #[arg(long)]
    pub include_empty_periods: bool,
}

impl ReportArgs {
    /// Whether the feed is read from stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.feed.as_os_str() == "-"
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".post-stats.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file (default: .post-stats.toml)
        #[arg(short, long, default_value = ".post-stats.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
