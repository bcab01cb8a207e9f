//! Logging init: stderr subscriber with env-filter overrides.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr.
/// Filter comes from `RUST_LOG` when set, otherwise our crates at debug.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fnx_core=debug,fnx_cli=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
