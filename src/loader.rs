// glbind/src/loader.rs
//
//! Resolution of entry points by name, with alternate (vendor suffix) names.

use crate::context::GLContext;
use crate::info::GLVersion;

use std::fmt::{self, Debug, Formatter};
use std::os::raw::c_void;
use std::ptr;

/// The static description of one entry point: its canonical name and the alternate names it has
/// been exported under, in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnSlot {
    pub name: &'static str,
    pub alternates: &'static [&'static str],
}

impl FnSlot {
    /// Every name this slot answers to, canonical name first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        Some(self.name).into_iter().chain(self.alternates.iter().copied())
    }
}

/// A resolved entry point.
///
/// Either null (the driver exports none of the slot's names) or bound to exactly one address
/// for the lifetime of the table that holds it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FnPtr {
    f: *const c_void,
}

// Written once while loading, read-only afterwards.
unsafe impl Send for FnPtr {}
unsafe impl Sync for FnPtr {}

impl FnPtr {
    /// An unresolved slot.
    pub const NULL: FnPtr = FnPtr { f: ptr::null() };

    #[inline]
    pub fn new(f: *const c_void) -> FnPtr {
        FnPtr { f }
    }

    /// Returns `true` if the slot was bound to an address.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        !self.f.is_null()
    }

    /// The bound address, or null.
    #[inline]
    pub fn address(&self) -> *const c_void {
        self.f
    }

    /// Returns the bound address, panicking if the slot is unresolved.
    #[inline]
    pub fn get(&self, name: &'static str) -> *const c_void {
        if self.f.is_null() {
            missing_fn_panic(name)
        }
        self.f
    }
}

impl Debug for FnPtr {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.f.is_null() {
            formatter.write_str("FnPtr(unresolved)")
        } else {
            write!(formatter, "FnPtr({:p})", self.f)
        }
    }
}

#[cold]
#[inline(never)]
fn missing_fn_panic(name: &'static str) -> ! {
    panic!("{} was called but the driver does not export it", name)
}

/// Resolves one slot: `name` first, then each of `alternates` in order. The first non-null
/// address wins. If every lookup fails the slot is left unresolved.
pub fn resolve<F>(loadfn: &mut F, name: &'static str, alternates: &[&'static str]) -> FnPtr
where
    F: FnMut(&'static str) -> *const c_void,
{
    let f = loadfn(name);
    if !f.is_null() {
        return FnPtr::new(f);
    }
    for &alternate in alternates {
        let f = loadfn(alternate);
        if !f.is_null() {
            trace!("{} resolved as {}", name, alternate);
            return FnPtr::new(f);
        }
    }
    FnPtr::NULL
}

/// A table of entry points, declared with `gl_functions!`.
pub trait FunctionTable: Sized + Clone {
    /// The slots of this table, in declaration order.
    const SLOTS: &'static [FnSlot];

    /// Resolves every slot through `loadfn`, immediately and once.
    fn load_with<F>(loadfn: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void;

    /// The resolved pointers, in the same order as `SLOTS`.
    fn pointers(&self) -> Vec<FnPtr>;

    /// Looks up the slot with the given canonical name.
    fn slot(&self, name: &str) -> Option<FnPtr> {
        Self::SLOTS
            .iter()
            .position(|slot| slot.name == name)
            .map(|index| self.pointers()[index])
    }

    /// Returns `true` if the slot with the given canonical name was resolved.
    fn is_loaded(&self, name: &str) -> bool {
        self.slot(name).map_or(false, |f| f.is_loaded())
    }

    /// Canonical names of the slots that could not be resolved.
    fn missing_functions(&self) -> Vec<&'static str> {
        Self::SLOTS
            .iter()
            .zip(self.pointers())
            .filter(|(_, f)| !f.is_loaded())
            .map(|(slot, _)| slot.name)
            .collect()
    }

    fn loaded_count(&self) -> usize {
        self.pointers().iter().filter(|f| f.is_loaded()).count()
    }

    fn is_complete(&self) -> bool {
        self.pointers().iter().all(|f| f.is_loaded())
    }
}

/// A module of typed wrappers over one extension or core version.
pub trait Extension: Sized {
    type Functions: FunctionTable;

    /// The registry name of the unit (`GL_ARB_clip_control`, `GL_VERSION_1_5`, ...).
    const NAME: &'static str;
    /// The core version that absorbed this unit, if any.
    const CORE_VERSION: Option<GLVersion>;
    /// Extension strings that advertise this unit.
    const EXTENSION_NAMES: &'static [&'static str];

    fn from_functions(functions: Self::Functions) -> Self;

    /// Raw access to the function table.
    fn functions(&self) -> &Self::Functions;

    /// Resolves the module's entry points through the context.
    fn load<C>(context: &C) -> Self
    where
        C: GLContext + ?Sized,
    {
        let functions = Self::Functions::load_with(|symbol_name| context.get_proc_address(symbol_name));
        debug!("{}: resolved {} of {} entry points",
               Self::NAME,
               functions.loaded_count(),
               Self::Functions::SLOTS.len());
        Self::from_functions(functions)
    }

    /// Returns `true` if a context of the given version advertising the given extensions
    /// provides this unit.
    fn is_supported<F>(version: GLVersion, has_extension: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        if let Some(core_version) = Self::CORE_VERSION {
            if version >= core_version {
                return true;
            }
        }
        Self::EXTENSION_NAMES.iter().any(|&extension| has_extension(extension))
    }
}
