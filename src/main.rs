use clap::Parser;

use post_stats::cli::{Cli, Commands};
use post_stats::commands::{run_config, run_init, run_report};
use post_stats::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Report(args) => run_report(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
