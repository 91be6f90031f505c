//! Tracing setup for the server binary.
//!
//! Setup stays explicit so tests and embedding hosts can install their own
//! subscriber instead; nothing here runs implicitly at import time.

/// Installs the default `tracing` subscriber: compact fmt output filtered
/// by `RUST_LOG`, falling back to `info` plus request logs.
///
/// Returns `false` when a global subscriber was already set.
#[must_use]
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
