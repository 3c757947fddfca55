//! Logging setup: `tracing` events go to stderr, filtered by LSP_DEMO_LOG.
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LSP_DEMO_LOG";
const DEFAULT_FILTER: &str = "warn";

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the global subscriber once. Returns whether this process owns it
/// (false when another subscriber was already set, e.g. by a test harness).
pub fn init() -> bool {
    *INSTALLED.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(filter_from_env())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .is_ok()
    })
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
