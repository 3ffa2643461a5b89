//! Integration tests for linalg-rs crates.
//!
//! This crate contains end-to-end scenarios that go through the public API
//! of `linalg-math` the way a caller would: dynamic operands, typed
//! operators, and the `serde` feature.

/// Installs a test-friendly `tracing` subscriber once.
///
/// Filtering follows `RUST_LOG`, e.g. `RUST_LOG=linalg_math=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
