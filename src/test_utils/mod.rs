//! Test utilities for gomod-tree
//!
//! Helpers shared by unit tests and the integration suite:
//! - [`GoPathFixture`] lays out a temporary GOPATH and project checkout
//! - [`init_test_logging`] wires `tracing` output into the test harness
//!
//! # Example
//!
//! ```rust,no_run
//! use gomod_tree::test_utils::GoPathFixture;
//!
//! let fixture = GoPathFixture::new().unwrap();
//! fixture.write_project("example.com/app", &[("example.com/dep", "v1.0.0")]).unwrap();
//! fixture.add_cached_module("example.com/dep", "v1.0.0", &[]).unwrap();
//! ```

pub mod fixtures;

pub use fixtures::{GoPathFixture, go_mod_content};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; does nothing when neither
/// is set. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=gomod_tree=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
