// tests/common.rs
//! Shared test utilities: logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging that respects `RUST_LOG`
/// Idempotent, so every test may call it
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Printable ASCII plus a few multi-byte characters
#[allow(dead_code)]
pub const MIXED_SAMPLE: &str = "The quick brown fox, 42 jumps! ~ over the lazy dog? ñ é 日本 🦀";
