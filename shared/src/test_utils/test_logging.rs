use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initialize test logging with appropriate log level
///
/// Quiet by default to reduce noise; set LOG_LEVEL (error|warn|info|debug|trace)
/// to see more. Call init_test_logging() at the beginning of each test file.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level = match std::env::var("LOG_LEVEL").as_deref() {
            Ok("warn") => LevelFilter::Warn,
            Ok("info") => LevelFilter::Info,
            Ok("debug") => LevelFilter::Debug,
            Ok("trace") => LevelFilter::Trace,
            _ => LevelFilter::Error,
        };

        Builder::from_default_env()
            .filter_level(level)
            .is_test(true)
            .init();
    });
}
