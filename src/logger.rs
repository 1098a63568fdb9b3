//! Logging setup for the command-line tool.
//!
//! Logs go to stderr so that rendered Markdown on stdout can be piped.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// `verbose` wins over `quiet`; without either flag `RUST_LOG` is honoured,
/// falling back to info level for this crate.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("vuedoc_md=debug")
    } else if quiet {
        EnvFilter::new("vuedoc_md=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vuedoc_md=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
