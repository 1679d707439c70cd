//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber with sensible defaults.
///
/// Respects the `RUST_LOG` environment variable for filtering. Safe to call
/// more than once within a process (later calls are no-ops), so test hosts
/// can invoke it from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
