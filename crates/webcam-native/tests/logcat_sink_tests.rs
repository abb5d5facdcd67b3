//! Tests for the `log`-facade sink used on Android
//!
//! `android_logger` takes the logcat tag from each record, so the tag the
//! bridge passes must land on the record itself.

use std::sync::Once;

use log::{Level, Log, Metadata, Record};
use parking_lot::Mutex;
use webcam_native::sink::LogcatSink;
use webcam_native::{BridgeConfig, StaticVersion, VersionBridge};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Captured {
    level: Level,
    target: String,
    module_path: Option<String>,
    message: String,
}

struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().push(Captured {
            level: record.level(),
            target: record.target().to_string(),
            module_path: record.module_path().map(str::to_string),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: parking_lot::const_mutex(Vec::new()),
};
static INIT: Once = Once::new();

/// Records captured so far for `tag`
fn records_for(tag: &str) -> Vec<Captured> {
    LOGGER
        .records
        .lock()
        .iter()
        .filter(|r| r.target == tag)
        .cloned()
        .collect()
}

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

fn bridge_with_tag(tag: &str) -> VersionBridge<StaticVersion, LogcatSink> {
    let config = BridgeConfig {
        tag: tag.to_string(),
        ..Default::default()
    };
    VersionBridge::with_config(StaticVersion::new("4.9.0"), LogcatSink, config)
}

#[test]
fn test_record_carries_tag_as_target_and_module_path() {
    install_logger();
    let bridge = bridge_with_tag("WebCamNativeTagA");

    assert_eq!(bridge.library_version(), "4.9.0");

    let records = records_for("WebCamNativeTagA");
    assert_eq!(
        records,
        vec![Captured {
            level: Level::Info,
            target: "WebCamNativeTagA".to_string(),
            module_path: Some("WebCamNativeTagA".to_string()),
            message: "OpenCV版本: 4.9.0".to_string(),
        }]
    );
}

#[test]
fn test_changed_tag_applies_to_next_record() {
    install_logger();

    bridge_with_tag("WebCamNativeTagB").library_version();
    bridge_with_tag("WebCamNativeTagC").library_version();

    assert_eq!(records_for("WebCamNativeTagB").len(), 1);
    assert_eq!(records_for("WebCamNativeTagC").len(), 1);
}
