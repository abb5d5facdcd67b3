//! JNI entry points for `com.kust.webcam.utils.OpenCVHelper`.
//!
//! Symbol names follow the JNI convention for the Kotlin class and must not
//! change without changing the `external fun` declarations on the app side.

use std::os::raw::c_void;

use jni::objects::JObject;
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};

use crate::logging::prefix;
use crate::runtime;

/// Called by the JVM on `System.loadLibrary("webcam_native")`.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    runtime::init();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "{} native library loaded",
        prefix::LOAD
    );
    JNI_VERSION_1_6
}

/// `external fun getOpenCVVersion(): String`
///
/// Returns `null` only if the JVM cannot allocate the string, in which case
/// the JVM's pending exception propagates to the caller.
#[no_mangle]
pub extern "system" fn Java_com_kust_webcam_utils_OpenCVHelper_getOpenCVVersion<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    let version = runtime::library_version();
    match env.new_string(version) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            tracing::error!(error = %e, "NewStringUTF failed");
            std::ptr::null_mut()
        }
    }
}
