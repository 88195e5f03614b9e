// glbind/src/platform/unix.rs
//
//! `dlopen`-based library loading for Linux, the BSDs, Android and macOS.

use crate::context::GLContext;
use crate::error::Error;
use crate::marshal::ScratchCStr;

use libc::{dlclose, dlopen, dlsym, RTLD_LAZY, RTLD_LOCAL};
#[cfg(not(macos))]
use std::mem;
use std::os::raw::{c_char, c_void};

#[cfg(macos)]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/OpenGL"];
#[cfg(android)]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libGLESv3.so", "libGLESv2.so"];
#[cfg(not(any(macos, android)))]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libGL.so.1", "libGL.so", "libOpenGL.so.0"];

#[cfg(not(macos))]
type GetProcAddressFn = unsafe extern "C" fn(*const u8) -> *const c_void;

/// An open system GL library.
///
/// The library stays loaded while this value is alive; pointers resolved through it must not
/// be called after it is dropped.
pub struct GLLibrary {
    handle: *mut c_void,
    #[cfg(not(macos))]
    get_proc_address: Option<GetProcAddressFn>,
}

// The handle is only passed to `dlsym` and `dlclose`, both thread-safe.
unsafe impl Send for GLLibrary {}
unsafe impl Sync for GLLibrary {}

impl GLLibrary {
    /// Opens the first default library name that loads.
    pub fn open() -> Result<GLLibrary, Error> {
        for name in DEFAULT_LIBRARY_NAMES {
            if let Ok(library) = GLLibrary::open_named(name) {
                return Ok(library);
            }
        }
        Err(Error::NoGLLibraryFound)
    }

    pub fn open_named(name: &str) -> Result<GLLibrary, Error> {
        let c_name = ScratchCStr::new(name);
        let handle = unsafe { dlopen(c_name.as_ptr() as *const c_char, RTLD_LAZY | RTLD_LOCAL) };
        if handle.is_null() {
            debug!("couldn't open {}", name);
            return Err(Error::NoGLLibraryFound);
        }
        debug!("opened {}", name);

        #[cfg_attr(macos, allow(unused_mut))]
        let mut library = GLLibrary {
            handle,
            #[cfg(not(macos))]
            get_proc_address: None,
        };
        #[cfg(not(macos))]
        {
            let f = library.lookup_symbol("glXGetProcAddressARB");
            if !f.is_null() {
                library.get_proc_address =
                    Some(unsafe { mem::transmute::<*const c_void, GetProcAddressFn>(f) });
            }
        }
        Ok(library)
    }

    /// Looks a symbol up in the library's export table, bypassing the window system.
    pub fn lookup_symbol(&self, symbol_name: &str) -> *const c_void {
        let c_name = ScratchCStr::new(symbol_name);
        unsafe { dlsym(self.handle, c_name.as_ptr() as *const c_char) as *const c_void }
    }
}

impl GLContext for GLLibrary {
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        #[cfg(not(macos))]
        {
            if let Some(get_proc_address) = self.get_proc_address {
                let c_name = ScratchCStr::new(symbol_name);
                let f = unsafe { get_proc_address(c_name.as_ptr() as *const u8) };
                if !f.is_null() {
                    return f;
                }
            }
        }
        self.lookup_symbol(symbol_name)
    }
}

impl Drop for GLLibrary {
    fn drop(&mut self) {
        unsafe {
            dlclose(self.handle);
        }
    }
}
