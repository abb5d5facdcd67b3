//! Logging setup for the host platform.
//!
//! Android gets `android_logger` (logcat). No fixed tag is set: the bridge's
//! [`crate::sink::LogcatSink`] names its tag per record, other events are
//! tagged with their module path. Everywhere else a compact
//! `tracing-subscriber` registry, unless the host already installed one.

use crate::config::BridgeConfig;

/// Initialize logging for the current platform. Safe to call repeatedly.
#[cfg(target_os = "android")]
pub fn init(config: &BridgeConfig) {
    let level = config
        .log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);

    android_logger::init_once(android_logger::Config::default().with_max_level(level));
}

/// Initialize logging for the current platform. Safe to call repeatedly.
#[cfg(not(target_os = "android"))]
pub fn init(config: &BridgeConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // A host (or an earlier call) may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// Segment prefixes for lifecycle events.
pub mod prefix {
    /// Library loaded by the host
    pub const LOAD: &str = "✿";
    /// Configuration changes
    pub const CONFIG: &str = "⚙";
}
