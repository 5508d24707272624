//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "latentlens=info,latentlens_space=info";

/// Installs a formatted `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; calls after the first global subscriber is
/// installed (by this function or anyone else) do nothing.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // Fails only if a global subscriber already exists.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
