use std::path::PathBuf;

use crate::error::LoadError;
use crate::Gl2JniEngine;

/// Configures how the native library is located before loading it.
///
/// You can access this from [`Gl2JniEngine::builder`].
pub struct Gl2JniEngineBuilder {
    pub(crate) library_name: String,
    pub(crate) library_path: Option<PathBuf>,
}

impl Gl2JniEngineBuilder {
    pub fn new() -> Self {
        Self {
            library_name: gl2jni_sys::LIBRARY_NAME.to_owned(),
            library_path: None,
        }
    }

    /// Looks the library up under a different bare name.
    pub fn with_library_name<T: Into<String>>(mut self, name: T) -> Self {
        self.library_name = name.into();
        self
    }

    /// Loads from this file, or from this directory under the platform
    /// file name, instead of consulting `GL2JNI_LIB_PATH` and the loader
    /// search path.
    pub fn with_library_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Loads the library and resolves its entry points.
    pub fn build(self) -> Result<Gl2JniEngine, LoadError> {
        Gl2JniEngine::new(self)
    }
}

impl Default for Gl2JniEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
