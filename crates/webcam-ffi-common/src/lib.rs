//! Common C-ABI helpers for the WebCam native library.
//!
//! The JNI entry points marshal through `jni` itself; everything here serves
//! the plain C exports that non-JVM hosts (and the test suite) link against.
//!
//! # Memory Ownership
//!
//! - Functions returning `*mut c_char` transfer ownership to the caller
//! - Callers must use the matching `*_string_free` export to deallocate
//! - NULL pointers are handled safely (no-op for free functions)

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Convert a Rust string to a C string pointer, with a fallback on failure.
///
/// If the input contains null bytes, returns the fallback string instead.
/// The returned pointer is owned by the caller and must be freed.
///
/// # Example
/// ```
/// use webcam_ffi_common::{cstring_new_or_fallback, free_cstring};
///
/// let ptr = cstring_new_or_fallback("4.9.0", "unknown");
/// unsafe { free_cstring(ptr) };
/// ```
#[inline]
pub fn cstring_new_or_fallback(s: &str, fallback: &'static str) -> *mut c_char {
    CString::new(s)
        .or_else(|_| CString::new(fallback))
        .unwrap_or_default()
        .into_raw()
}

/// Convert a Rust string to a C string pointer, using empty string as fallback.
///
/// An empty input yields a valid, non-null pointer to an empty string.
#[inline]
pub fn cstring_new_or_empty(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Safely free a C string pointer.
///
/// Does nothing if the pointer is null.
///
/// # Safety
/// The pointer must have been allocated by `CString::into_raw()` or be null.
#[inline]
pub unsafe fn free_cstring(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

/// Safely convert a C string pointer to a Rust string reference.
///
/// # Returns
/// `Ok(&str)` on success, `Err(&'static str)` with error message on failure.
///
/// # Safety
/// The pointer must be valid and null-terminated, or null.
pub unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Result<&'a str, &'static str> {
    if ptr.is_null() {
        return Err("null pointer");
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| "invalid UTF-8")
}

/// Trait for FFI result types with standardized error handling.
///
/// Types implementing this trait get a consistent `.error()` method
/// that converts error messages to C strings with fallback handling.
///
/// # Example
/// ```ignore
/// #[repr(C)]
/// pub struct ConfigResultC {
///     pub success: bool,
///     pub error_msg: *mut c_char,
/// }
///
/// impl FfiResult for ConfigResultC {
///     const ERROR_FALLBACK: &'static str = "invalid configuration";
///
///     fn error_fields(error_msg: *mut c_char) -> Self {
///         Self { success: false, error_msg }
///     }
/// }
///
/// let result = ConfigResultC::error("tag must not be empty");
/// ```
pub trait FfiResult: Sized {
    /// Fallback message used when the error message contains null bytes.
    const ERROR_FALLBACK: &'static str;

    /// Construct the result struct with the given error message pointer.
    fn error_fields(error_msg: *mut c_char) -> Self;

    /// Create an error result with the given message.
    #[inline]
    fn error(msg: &str) -> Self {
        let error_msg = cstring_new_or_fallback(msg, Self::ERROR_FALLBACK);
        Self::error_fields(error_msg)
    }
}

/// Generate a version function that returns this crate's version as a static C string.
///
/// # Example
/// ```ignore
/// webcam_ffi_common::define_version_fn!(webcam_native_version);
/// // Expands to:
/// // #[no_mangle]
/// // pub extern "C" fn webcam_native_version() -> *const c_char {
/// //     concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
/// // }
/// ```
#[macro_export]
macro_rules! define_version_fn {
    ($fn_name:ident) => {
        #[no_mangle]
        pub extern "C" fn $fn_name() -> *const std::os::raw::c_char {
            concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const std::os::raw::c_char
        }
    };
}

/// Generate a string free function for strings handed out by an export.
///
/// # Example
/// ```ignore
/// webcam_ffi_common::define_string_free!(webcam_native_string_free);
/// ```
#[macro_export]
macro_rules! define_string_free {
    ($fn_name:ident) => {
        #[no_mangle]
        #[allow(clippy::not_unsafe_ptr_arg_deref)]
        pub extern "C" fn $fn_name(s: *mut std::os::raw::c_char) {
            unsafe { $crate::free_cstring(s) };
        }
    };
}
