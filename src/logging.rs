//! Logging initialization for the command line front end.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Maps `-v` occurrences onto a filter, falling back to the configured level.
pub fn log_level(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize tracing. `RUST_LOG` takes precedence over everything else.
pub fn init_logging(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 2)
        .init();

    debug!("purge started with verbosity level: {}", verbose);
}
