//! Process-wide bridge used by the exported entry points.

use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::bridge::DefaultBridge;
use crate::config::BridgeConfig;
use crate::error::Result;
use crate::logging::{self, prefix};

lazy_static! {
    static ref BRIDGE: RwLock<Arc<DefaultBridge>> =
        RwLock::new(Arc::new(DefaultBridge::linked(startup_config())));
}

/// Configuration read at first use. An unreadable file falls back to defaults.
pub fn startup_config() -> BridgeConfig {
    BridgeConfig::load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "{} ignoring invalid configuration", prefix::CONFIG);
        BridgeConfig::default()
    })
}

/// Bring up logging, then build the process-wide bridge.
///
/// Entry points call this before anything else so that problems with the
/// startup configuration are reported through an installed logger.
pub fn init() -> Arc<DefaultBridge> {
    let config = BridgeConfig::load().unwrap_or_default();
    logging::init(&config);
    bridge()
}

/// The current process-wide bridge.
pub fn bridge() -> Arc<DefaultBridge> {
    Arc::clone(&BRIDGE.read())
}

/// Validate `config` and swap in a bridge built from it.
///
/// Calls already holding the previous bridge finish against it.
pub fn configure(config: BridgeConfig) -> Result<()> {
    config.validate()?;
    tracing::debug!(tag = %config.tag, "{} bridge reconfigured", prefix::CONFIG);
    *BRIDGE.write() = Arc::new(DefaultBridge::linked(config));
    Ok(())
}

/// Query the linked library version through the process-wide bridge.
pub fn library_version() -> String {
    bridge().library_version()
}
