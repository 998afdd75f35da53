use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

use tracing::info;

use crate::cli::{Cli, ReportArgs};
use crate::config::Config;
use crate::post::{FeedHydrator, RawPost};
use crate::stats::{ReportParameters, StatisticsOrchestrator};
use crate::{EXIT_SUCCESS, PostStatsError, Result};

use super::{exit_code_for, load_config, print_error};

#[must_use]
pub fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Computes the monthly report for a post feed and writes it out.
///
/// # Errors
/// Returns an error if the config, month or feed is invalid, or the output
/// cannot be written.
pub fn run_report_impl(args: &ReportArgs, cli: &Cli) -> Result<()> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    // 3. Resolve the report window
    let params = ReportParameters::from_descriptor(&args.month)?
        .with_empty_periods(config.report.include_empty_periods);

    // 4. Read the feed
    let hydrator = FeedHydrator::new();
    let raw_posts = read_feed(args, hydrator)?;

    // 5. One pass over the hydrated posts
    let orchestrator = StatisticsOrchestrator::from_config(&config.report);
    let stats = orchestrator.try_calculate(hydrator.hydrate_all(raw_posts), &params)?;

    // 6. Format and write
    let output = config
        .output
        .format
        .formatter(Some(params.label()))
        .format(&stats)?;
    write_output(args.output.as_deref(), &output)
}

/// Overlay command-line choices on the loaded configuration.
pub fn apply_cli_overrides(config: &mut Config, args: &ReportArgs) {
    if !args.stats.is_empty() {
        config.report.stats.clone_from(&args.stats);
    }
    if args.include_empty_periods {
        config.report.include_empty_periods = true;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
}

fn read_feed(args: &ReportArgs, hydrator: FeedHydrator) -> Result<Vec<RawPost>> {
    if args.reads_stdin() {
        return hydrator.parse_reader(io::stdin().lock());
    }

    let file = File::open(&args.feed).map_err(|source| PostStatsError::FileRead {
        path: args.feed.clone(),
        source,
    })?;
    hydrator.parse_reader(BufReader::new(file))
}

pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
