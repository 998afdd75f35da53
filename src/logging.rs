//! Diagnostic logging to stderr.
//!
//! Report output goes to stdout; everything logged here goes to stderr so the
//! two can be piped separately. `RUST_LOG` overrides the verbosity flags.

use tracing_subscriber::EnvFilter;

/// Log level implied by the `-v`/`-q` flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// A second call is a no-op, so tests and embedding binaries may call it freely.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("post_stats={}", level_for(verbose, quiet)))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
