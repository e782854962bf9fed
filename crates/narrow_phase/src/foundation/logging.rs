//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`; GJK iterations are logged at `trace`.
pub fn init() {
    env_logger::init();
}

/// Initialize logging with `level` unless `RUST_LOG` says otherwise
pub fn init_with_default(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
