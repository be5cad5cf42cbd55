//! Tracing conventions for the epdex crates.
//!
//! Consumers bring their own subscriber; this module only fixes the target
//! prefix and the canonical span/field names so logs stay queryable across
//! the controller and the async host:
//!
//! ```text
//! RUST_LOG=epdex=debug
//! ```

use tracing::Level;

/// Target prefix used by all epdex tracing events.
pub const TARGET_PREFIX: &str = "epdex";

/// Standard span names used across the controller and host.
pub mod span_names {
    /// One initiated fetch, from command to applied completion.
    pub const FETCH: &str = "epdex::fetch";
    /// One debounce window, from schedule to elapse.
    pub const DEBOUNCE: &str = "epdex::debounce";
    /// One drained command batch.
    pub const DRAIN: &str = "epdex::drain";
}

/// Standard structured field names used in tracing events.
pub mod field_names {
    pub const EPOCH: &str = "epoch";
    pub const GENERATION: &str = "generation";
    pub const PAGE: &str = "page";
    pub const TOTAL_PAGES: &str = "total_pages";
    pub const RESULT_COUNT: &str = "result_count";
    pub const FILTER_KEY: &str = "filter_key";
    pub const ENDPOINT: &str = "endpoint";
    pub const STATUS: &str = "status";
}

/// Parse a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Recommended `tracing::Level` for the current environment.
///
/// Checks `EPDEX_LOG_LEVEL` first, then falls back to the provided default.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var("EPDEX_LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}
