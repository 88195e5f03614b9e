// glbind/src/platform/mod.rs
//
//! Opening the system OpenGL library and resolving entry points from it.

use crate::error::Error;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use self::windows::GLLibrary;

#[cfg(not(windows))]
mod unix;
#[cfg(not(windows))]
pub use self::unix::GLLibrary;

lazy_static! {
    static ref SYSTEM_LIBRARY: Option<GLLibrary> = match GLLibrary::open() {
        Ok(library) => Some(library),
        Err(err) => {
            warn!("no system OpenGL library: {:?}", err);
            None
        }
    };
}

/// The default system library, opened on first use and kept loaded for the rest of the
/// process.
pub fn system_library() -> Result<&'static GLLibrary, Error> {
    SYSTEM_LIBRARY.as_ref().ok_or(Error::NoGLLibraryFound)
}
