use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset and `--verbose` is off
const DEFAULT_FILTER: &str = "warn";

const VERBOSE_FILTER: &str = "datacert=debug,warn";

/// Installs the global subscriber writing diagnostics to stderr
///
/// `--verbose` forces debug output for this crate; otherwise `RUST_LOG`
/// is honoured and falls back to warnings only.
pub fn init_logger(verbose: bool) {
    let filter_layer = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter_layer)
        .try_init();
}
