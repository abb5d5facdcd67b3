//! WebCam native library (JNI)
//!
//! Reports the version of the linked vision library to the WebCam Android
//! app, logging it under the `WebCamNative` tag.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │ OpenCVHelper │────▶│ VersionBridge │────▶│ VersionSource │
//! │ (Kotlin/JNI) │     │               │     │ (OpenCV)      │
//! └──────────────┘     └───────┬───────┘     └───────────────┘
//!                              │
//!                              ▼
//!                      ┌───────────────┐
//!                      │ LogSink       │
//!                      │ (logcat)      │
//!                      └───────────────┘
//! ```
//!
//! ## Usage from Kotlin
//!
//! ```kotlin
//! class OpenCVHelper(private val context: Context) {
//!     companion object {
//!         init { System.loadLibrary("webcam_native") }
//!     }
//!
//!     external fun getOpenCVVersion(): String
//! }
//! ```
//!
//! ## Usage from Rust
//!
//! ```
//! use webcam_native::{MemorySink, StaticVersion, VersionBridge};
//!
//! let bridge = VersionBridge::new(StaticVersion::new("4.9.0"), MemorySink::new());
//! assert_eq!(bridge.library_version(), "4.9.0");
//! assert_eq!(bridge.sink().records()[0].message, "OpenCV版本: 4.9.0");
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod ffi;
#[cfg(feature = "jni")]
pub mod jni_bridge;
pub mod logging;
pub mod runtime;
pub mod sink;
pub mod version;

// Re-export main types
pub use bridge::{DefaultBridge, VersionBridge};
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use sink::{
    LogLevel, LogRecord, LogSink, LogcatSink, MemorySink, PlatformSink, TracingSink,
};
pub use version::{LinkedVersion, StaticVersion, VersionSource};

#[cfg(any(feature = "opencv", target_os = "android"))]
pub use version::OpenCvVersion;

// Re-export FFI types for C consumers
pub use ffi::ConfigResultC;
