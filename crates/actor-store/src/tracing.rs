//! Tracing/logging setup shared by binaries and examples.

/// Initializes structured logging for the application.
///
/// Uses the `tracing` crate with environment-based filtering and the default
/// human-readable formatter.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - lifecycle events and mutations
/// - `RUST_LOG=debug` - full request payloads
/// - `RUST_LOG=drive_thru=debug` - debug for one crate only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
