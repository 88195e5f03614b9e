// glbind/src/context.rs
//
//! The capability a native context supplies to the loaders.

use crate::info::GLVersion;

use std::os::raw::c_void;

/// A native OpenGL context, as far as entry point loading is concerned.
///
/// The context is only consulted while modules are being constructed. It is not owned by the
/// modules and must outlive every call made through them.
pub trait GLContext {
    /// Returns the address of the named entry point, or null if the driver doesn't export it.
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void;

    /// The version of the context, if the windowing layer already knows it.
    ///
    /// When this returns `None`, `GL::new` parses `glGetString(GL_VERSION)` instead.
    fn version(&self) -> Option<GLVersion> {
        None
    }
}

impl<F> GLContext for F
where
    F: Fn(&str) -> *const c_void,
{
    #[inline]
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        self(symbol_name)
    }
}

/// A context whose version is known up front.
pub struct VersionedContext<C> {
    pub context: C,
    pub version: GLVersion,
}

impl<C> VersionedContext<C>
where
    C: GLContext,
{
    #[inline]
    pub fn new(context: C, version: GLVersion) -> VersionedContext<C> {
        VersionedContext { context, version }
    }
}

impl<C> GLContext for VersionedContext<C>
where
    C: GLContext,
{
    #[inline]
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        self.context.get_proc_address(symbol_name)
    }

    #[inline]
    fn version(&self) -> Option<GLVersion> {
        Some(self.version)
    }
}
