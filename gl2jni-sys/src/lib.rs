//! Raw declarations for the `gl2jni` native rendering library.
//!
//! The library exposes exactly two C entry points: `init`, which sizes the
//! renderer for the current view, and `step`, which draws one frame.
//! Everything else, GL state and buffers included, stays behind that
//! boundary.

use std::os::raw::c_int;

/// Bare name the library is looked up by, without platform prefix or suffix.
pub const LIBRARY_NAME: &str = "gl2jni";

/// Exported name of `void init(int width, int height)`.
pub const INIT_SYMBOL: &[u8] = b"init\0";

/// Exported name of `void step(void)`.
pub const STEP_SYMBOL: &[u8] = b"step\0";

/// `void init(int width, int height)`
pub type InitFn = unsafe extern "C" fn(width: c_int, height: c_int);

/// `void step(void)`
pub type StepFn = unsafe extern "C" fn();

/// Entry points resolved from one loaded copy of the library.
///
/// The pointers stay valid only while that copy stays loaded; whoever
/// builds this table keeps the library handle alive for at least as long.
#[derive(Copy, Clone, Debug)]
pub struct Gl2JniLib {
    pub init: InitFn,
    pub step: StepFn,
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    // The table carries plain C-ABI pointers; calls go straight through.
    #[test]
    fn table_calls_through() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        unsafe extern "C" fn record_init(width: c_int, height: c_int) {
            assert_eq!((width, height), (640, 480));
            CALLS.fetch_add(1, Ordering::SeqCst);
        }
        unsafe extern "C" fn record_step() {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }

        let lib = Gl2JniLib {
            init: record_init,
            step: record_step,
        };
        unsafe {
            (lib.init)(640, 480);
            (lib.step)();
        }
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    // Resolves both declared signatures against a real copy of the library.
    // Skips itself when none is installed on the loader search path.
    #[test]
    fn link() {
        let filename = libloading::library_filename(LIBRARY_NAME);
        let library = match unsafe { libloading::Library::new(&filename) } {
            Ok(library) => library,
            Err(err) => {
                eprintln!("skipping link test, {filename:?} is not loadable here: {err}");
                return;
            }
        };
        unsafe {
            library.get::<InitFn>(INIT_SYMBOL).unwrap();
            library.get::<StepFn>(STEP_SYMBOL).unwrap();
        }
    }
}
