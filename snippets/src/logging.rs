//! Diagnostic tracing for the `snippets` binary.
//!
//! Program prompts and reports go to stdout. Tracing output always goes to
//! stderr so that it never interleaves with what a program prints.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset, blank or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber.
///
/// Rejected and malformed tokens are logged at `debug` under
/// `snippets::io::input`; config resolution and the chosen seed under
/// `snippets::cli` and `snippets::io::random`.
///
/// # Example
/// ```bash
/// RUST_LOG=snippets::io=debug snippets run fraction-simplifier --seed 7
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn filter_from(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
