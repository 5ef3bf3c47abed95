//! Tracing subscriber setup for the command-line tool.
use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber on stderr. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "site_i18n=debug" } else { "site_i18n=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    if let Err(e) = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init() {
        eprintln!("logging already initialized: {e}");
    }
}
