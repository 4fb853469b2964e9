//! Embedder-side bridge to the `gl2jni` native rendering library.
//!
//! The native library owns the entire rendering pipeline. This crate only
//! loads it, by bare name through the platform loader's search path unless
//! told otherwise, and hands its two entry points to Rust callers:
//! [`Gl2JniEngine::init`] sizes the renderer for a view and
//! [`Gl2JniEngine::step`] draws one frame.
//!
//! ```no_run
//! let engine = gl2jni::engine().expect("libgl2jni must be on the loader search path");
//! engine.init(1280, 720);
//! engine.step();
//! ```

pub mod builder;
pub mod error;
mod loader;

use std::path::Path;
use std::sync::{Arc, LazyLock};

use tracing::trace;

use crate::builder::Gl2JniEngineBuilder;
use crate::error::LoadError;
use crate::loader::LoadedLibrary;

pub use crate::loader::LIBRARY_PATH_ENV;
pub use gl2jni_sys::LIBRARY_NAME;

static ENGINE: LazyLock<Result<Gl2JniEngine, LoadError>> =
    LazyLock::new(|| Gl2JniEngineBuilder::new().build());

/// Returns the process-wide engine, loading the native library on first use.
///
/// The load runs exactly once, synchronously, and its outcome is kept for
/// the lifetime of the process: repeated calls return the same engine, or
/// the same error without another trip through the loader.
pub fn engine() -> Result<&'static Gl2JniEngine, &'static LoadError> {
    ENGINE.as_ref()
}

#[derive(Debug)]
struct Gl2JniEngineInner {
    loaded: LoadedLibrary,
}

/// Handle to a loaded copy of the native library.
///
/// Clones are cheap and share the same loaded copy, which stays mapped
/// until the last handle is dropped. [`engine`] hands out the process-wide
/// instance; [`Gl2JniEngine::builder`] builds independent ones.
#[derive(Debug)]
pub struct Gl2JniEngine {
    inner: Arc<Gl2JniEngineInner>,
}

impl Clone for Gl2JniEngine {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Gl2JniEngine {
    pub fn builder() -> Gl2JniEngineBuilder {
        Gl2JniEngineBuilder::new()
    }

    pub(crate) fn new(builder: Gl2JniEngineBuilder) -> Result<Self, LoadError> {
        let loaded = loader::load(&builder.library_name, builder.library_path.as_deref())?;
        Ok(Self {
            inner: Arc::new(Gl2JniEngineInner { loaded }),
        })
    }

    /// Sizes the native renderer for a view of `width` by `height`.
    ///
    /// The values go through untouched; the native side attaches no meaning
    /// to them here beyond treating them as the current view dimensions.
    pub fn init(&self, width: i32, height: i32) {
        trace!("init {}x{}", width, height);
        unsafe { (self.inner.loaded.entry_points.init)(width, height) }
    }

    /// Renders the next frame.
    ///
    /// No ordering contract exists between this and [`Gl2JniEngine::init`]
    /// at this boundary; any sequencing the renderer needs is enforced on
    /// the native side.
    pub fn step(&self) {
        trace!("step");
        unsafe { (self.inner.loaded.entry_points.step)() }
    }

    /// The file name or path that was handed to the platform loader.
    pub fn library_path(&self) -> &Path {
        &self.inner.loaded.path
    }
}
