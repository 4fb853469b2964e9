use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating and loading the native library.
///
/// Loading is the only fallible operation at this boundary. Once the entry
/// points are resolved, `init` and `step` pass straight through to the
/// native side and report nothing back.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The platform loader could not open the target.
    #[error("failed to load native library `{}`", .path.display())]
    Library {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The library opened, but one of the expected entry points is missing.
    #[error("native library `{}` has no `{symbol}` entry point", .path.display())]
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}
