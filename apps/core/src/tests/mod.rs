//! Test Module
//!
//! Cross-module tests for the analysis pipeline.
//!
//! ## Test Categories
//! - `pipeline_tests`: end-to-end scenarios through the shared facade
//! - `config_tests`: custom configuration flowing into every analyzer

pub mod pipeline_tests;

/// Install a fmt subscriber for the test run; `RUST_LOG` controls verbosity.
/// Later calls are no-ops, so every test can call this unconditionally.
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_logging_init_is_reentrant() {
    init_test_logging();
    init_test_logging();
}
