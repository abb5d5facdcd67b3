//! Version sources
//!
//! The vision library is an opaque collaborator; the only thing the bridge
//! asks of it is its version text. Sources never parse or validate that text.

/// Something that can report the version of a linked vision library.
pub trait VersionSource: Send + Sync {
    /// The library's version identifier, verbatim. May be empty.
    fn version_string(&self) -> String;
}

/// Text the app shows when its image processing runs without OpenCV.
pub const NATIVE_FALLBACK: &str = "使用Android原生图像处理";

/// A source that always reports the same text.
///
/// Desktop builds without the `opencv` feature link no vision library and
/// use this in its place; Android builds always report [`OpenCvVersion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVersion(String);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The app's non-OpenCV text, for hosts that link no vision library.
    pub fn native_fallback() -> Self {
        Self::new(NATIVE_FALLBACK)
    }
}

impl Default for StaticVersion {
    fn default() -> Self {
        Self::native_fallback()
    }
}

impl VersionSource for StaticVersion {
    fn version_string(&self) -> String {
        self.0.clone()
    }
}

/// Version of the OpenCV build this library is linked against.
#[cfg(any(feature = "opencv", target_os = "android"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvVersion;

#[cfg(any(feature = "opencv", target_os = "android"))]
impl VersionSource for OpenCvVersion {
    fn version_string(&self) -> String {
        // The binding wraps every call in a Result; the accessor itself cannot fail.
        opencv::core::get_version_string().unwrap_or_else(|e| {
            tracing::error!(error = %e, "cv::getVersionString failed");
            String::new()
        })
    }
}

/// Source selected for this build.
#[cfg(any(feature = "opencv", target_os = "android"))]
pub type LinkedVersion = OpenCvVersion;

/// Source selected for this build.
#[cfg(not(any(feature = "opencv", target_os = "android")))]
pub type LinkedVersion = StaticVersion;

impl<T: VersionSource + ?Sized> VersionSource for std::sync::Arc<T> {
    fn version_string(&self) -> String {
        (**self).version_string()
    }
}
