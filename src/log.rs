//! Logging setup

use log::LevelFilter;
use std::env;

/// Environment variable that turns on debug logging
pub const DEBUG_ENV: &str = "WORDLE_FILTER_DEBUG";

/// Level used when `RUST_LOG` is not set
#[must_use]
pub const fn default_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize the logger
///
/// Logs go to stderr without timestamps or module paths. `debug_enabled`
/// raises the level to `Debug`; `RUST_LOG`, when set, overrides both.
/// Calling this more than once is harmless.
pub fn init_logger(debug_enabled: bool) {
    let level = default_level(debug_enabled);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
