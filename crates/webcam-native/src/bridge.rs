//! Version query bridge
//!
//! Stateless: every call asks the source again, emits one record and hands
//! the text back. Nothing is cached, nothing is shared mutably, so the bridge
//! can be called from any host thread concurrently.

use crate::config::BridgeConfig;
use crate::sink::{LogLevel, LogSink, PlatformSink};
use crate::version::{LinkedVersion, VersionSource};

/// Bridge used by the exported entry points.
pub type DefaultBridge = VersionBridge<LinkedVersion, PlatformSink>;

/// Reports the linked vision library's version to the host.
#[derive(Debug)]
pub struct VersionBridge<S, L> {
    source: S,
    sink: L,
    config: BridgeConfig,
}

impl<S: VersionSource, L: LogSink> VersionBridge<S, L> {
    pub fn new(source: S, sink: L) -> Self {
        Self::with_config(source, sink, BridgeConfig::default())
    }

    pub fn with_config(source: S, sink: L, config: BridgeConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    /// Query the library version.
    ///
    /// Emits exactly one `Info` record tagged with `config.tag`, formatted
    /// as `<label>: <version>`. The text is returned verbatim, including
    /// when the library reports an empty string.
    pub fn library_version(&self) -> String {
        let version = self.source.version_string();
        self.sink.emit(
            LogLevel::Info,
            &self.config.tag,
            &self.config.message_for(&version),
        );
        version
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn sink(&self) -> &L {
        &self.sink
    }
}

impl DefaultBridge {
    /// Bridge over the build's linked source and the platform sink.
    pub fn linked(config: BridgeConfig) -> Self {
        Self::with_config(LinkedVersion::default(), PlatformSink::default(), config)
    }
}
