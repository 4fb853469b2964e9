use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use gl2jni_sys::{Gl2JniLib, InitFn, StepFn, INIT_SYMBOL, STEP_SYMBOL};
use libloading::{library_filename, Library};
use tracing::debug;

use crate::error::LoadError;

/// Overrides where the native library is loaded from.
///
/// May point at the library file itself, or at a directory containing it
/// under the platform file name. An explicit path on the builder still wins
/// over this.
pub const LIBRARY_PATH_ENV: &str = "GL2JNI_LIB_PATH";

#[derive(Debug)]
pub(crate) struct LoadedLibrary {
    pub entry_points: Gl2JniLib,
    pub path: PathBuf,
    // Keeps the library mapped for as long as the entry points can be
    // reached through this struct.
    pub _library: Library,
}

pub(crate) fn load(name: &str, explicit: Option<&Path>) -> Result<LoadedLibrary, LoadError> {
    let target = resolve_target(name, explicit, env::var_os(LIBRARY_PATH_ENV).as_deref());
    debug!("loading native library `{}`", target.display());

    let library = unsafe { Library::new(&target) }.map_err(|source| LoadError::Library {
        path: target.clone(),
        source,
    })?;

    let entry_points = {
        let init = unsafe { library.get::<InitFn>(INIT_SYMBOL) }.map_err(|source| {
            LoadError::MissingSymbol {
                path: target.clone(),
                symbol: "init",
                source,
            }
        })?;
        let step = unsafe { library.get::<StepFn>(STEP_SYMBOL) }.map_err(|source| {
            LoadError::MissingSymbol {
                path: target.clone(),
                symbol: "step",
                source,
            }
        })?;
        Gl2JniLib {
            init: *init,
            step: *step,
        }
    };

    debug!("resolved `init` and `step` from `{}`", target.display());

    Ok(LoadedLibrary {
        entry_points,
        path: target,
        _library: library,
    })
}

/// Picks the one target handed to the platform loader: an explicit path
/// wins, then the `GL2JNI_LIB_PATH` override, then the bare platform file
/// name so resolution falls back to the loader's own search path. There is
/// no fallback between the three; a load is attempted once, against one
/// target.
fn resolve_target(name: &str, explicit: Option<&Path>, env_override: Option<&OsStr>) -> PathBuf {
    if let Some(path) = explicit {
        return qualify(path, name);
    }
    if let Some(path) = env_override {
        return qualify(Path::new(path), name);
    }
    PathBuf::from(library_filename(name))
}

fn qualify(path: &Path, name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(library_filename(name))
    } else {
        path.to_path_buf()
    }
}
