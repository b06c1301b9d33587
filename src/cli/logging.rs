//! Diagnostic logging for the binary.
//!
//! Library code only emits `tracing` events; the subscriber is installed here,
//! writing to stderr so stdout stays reserved for scan output.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,gosift=debug";

/// Filter for a run: `-v` wins, then `RUST_LOG`, then warnings only.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

pub fn init_logging(verbose: bool) {
    let ansi = colored::control::SHOULD_COLORIZE.should_colorize();
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(io::stderr),
        )
        .try_init();
}
