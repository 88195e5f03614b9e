// glbind/src/platform/windows.rs
//
//! `opengl32.dll` loading for Windows.

use crate::context::GLContext;
use crate::error::Error;
use crate::marshal::ScratchCStr;

use std::os::raw::c_void;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryA};
use winapi::um::wingdi::wglGetProcAddress;

const DEFAULT_LIBRARY_NAME: &str = "opengl32.dll";

/// An open system GL library.
///
/// `wglGetProcAddress` only answers while a context is current on the calling thread. Entry
/// points from GL 1.1 come from the library's export table instead.
pub struct GLLibrary {
    module: HMODULE,
}

unsafe impl Send for GLLibrary {}
unsafe impl Sync for GLLibrary {}

impl GLLibrary {
    pub fn open() -> Result<GLLibrary, Error> {
        GLLibrary::open_named(DEFAULT_LIBRARY_NAME)
    }

    pub fn open_named(name: &str) -> Result<GLLibrary, Error> {
        let c_name = ScratchCStr::new(name);
        let module = unsafe { LoadLibraryA(c_name.as_ptr()) };
        if module.is_null() {
            debug!("couldn't open {}", name);
            return Err(Error::NoGLLibraryFound);
        }
        debug!("opened {}", name);
        Ok(GLLibrary { module })
    }

    /// Looks a symbol up in the library's export table, bypassing `wglGetProcAddress`.
    pub fn lookup_symbol(&self, symbol_name: &str) -> *const c_void {
        let c_name = ScratchCStr::new(symbol_name);
        unsafe { GetProcAddress(self.module, c_name.as_ptr()) as *const c_void }
    }
}

// Some drivers return small integers instead of null for unknown names.
fn is_valid_wgl_address(address: *const c_void) -> bool {
    !matches!(address as isize, 0 | 1 | 2 | 3 | -1)
}

impl GLContext for GLLibrary {
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let c_name = ScratchCStr::new(symbol_name);
        let f = unsafe { wglGetProcAddress(c_name.as_ptr()) as *const c_void };
        if is_valid_wgl_address(f) {
            return f;
        }
        self.lookup_symbol(symbol_name)
    }
}

impl Drop for GLLibrary {
    fn drop(&mut self) {
        unsafe {
            FreeLibrary(self.module);
        }
    }
}
