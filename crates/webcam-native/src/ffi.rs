//! C-compatible FFI interface for the version bridge
//!
//! Mirrors the JNI surface for hosts that load the library through a plain
//! C ABI (and for exercising the exports without a JVM).
//!
//! # Memory Ownership Rules
//!
//! - `webcam_native_opencv_version()` returns an owned string, free it with
//!   `webcam_native_string_free()`
//! - `ConfigResultC` owns its error message, free it with `webcam_native_result_free()`
//! - `webcam_native_version()` returns a static string, never free it

use std::os::raw::c_char;
use std::ptr;

use webcam_ffi_common::{cstr_to_str, cstring_new_or_empty, free_cstring, FfiResult};

use crate::config::BridgeConfig;
use crate::runtime;

const MAX_CONFIG_JSON_LEN: usize = 64 * 1024;

/// C-compatible result for configuration calls
#[repr(C)]
pub struct ConfigResultC {
    /// True if the configuration was applied
    pub success: bool,
    /// Error message if success is false (owned, must be freed)
    pub error_msg: *mut c_char,
}

impl ConfigResultC {
    fn ok() -> Self {
        Self {
            success: true,
            error_msg: ptr::null_mut(),
        }
    }
}

impl FfiResult for ConfigResultC {
    const ERROR_FALLBACK: &'static str = "invalid configuration";

    fn error_fields(error_msg: *mut c_char) -> Self {
        Self {
            success: false,
            error_msg,
        }
    }
}

/// Query the linked library version.
///
/// # Returns
/// Non-null owned C string (empty if the library reports nothing).
/// Caller must call `webcam_native_string_free`.
#[no_mangle]
pub extern "C" fn webcam_native_opencv_version() -> *mut c_char {
    cstring_new_or_empty(&runtime::library_version())
}

/// Replace the process-wide bridge configuration.
///
/// # Arguments
/// - `config_json`: JSON object with optional `tag`, `label`, `log_level`
///
/// # Returns
/// ConfigResultC. Caller must call `webcam_native_result_free`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn webcam_native_configure(config_json: *const c_char) -> ConfigResultC {
    let json = match unsafe { cstr_to_str(config_json) } {
        Ok(s) if s.len() <= MAX_CONFIG_JSON_LEN => s,
        Ok(_) => return ConfigResultC::error("configuration exceeds maximum size"),
        Err(e) => return ConfigResultC::error(e),
    };

    match BridgeConfig::from_json(json).and_then(runtime::configure) {
        Ok(()) => ConfigResultC::ok(),
        Err(e) => ConfigResultC::error(&e.to_string()),
    }
}

/// Free a ConfigResultC.
///
/// # Safety
/// - `result` must be from `webcam_native_configure`
/// - `result` must not be used after this call
#[no_mangle]
pub extern "C" fn webcam_native_result_free(result: ConfigResultC) {
    unsafe { free_cstring(result.error_msg) };
}

webcam_ffi_common::define_string_free!(webcam_native_string_free);

webcam_ffi_common::define_version_fn!(webcam_native_version);
