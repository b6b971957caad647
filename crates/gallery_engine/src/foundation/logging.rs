//! Logging utilities
//!
//! The library only emits through the `log` facade; binaries choose the
//! sink by calling [`init`] (or installing their own logger).

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Respects `RUST_LOG`; defaults to `info` so load summaries and impact
/// events are visible without extra setup.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
