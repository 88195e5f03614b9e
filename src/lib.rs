// glbind/src/lib.rs
//
//! Typed, dynamically loaded bindings for OpenGL 1.1 through 4.6.
//!
//! Every core version and extension is a module: a table of entry points resolved by name
//! through a `GLContext`, plus `unsafe` wrappers that take Rust types (enums, bitflags, slices,
//! `&str`) and convert them to the native calling convention. Entry points a driver does not
//! export stay unresolved; calling one panics with its name.
//!
//! The `GL` type loads every module a context supports and works out the effective GL version.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod context;
pub use crate::context::{GLContext, VersionedContext};

pub mod error;
pub use crate::error::{Error, GLError};

mod info;
pub use crate::info::{GLApi, GLVersion};

pub mod loader;
pub use crate::loader::{Extension, FnPtr, FnSlot, FunctionTable};

pub mod marshal;
pub use crate::marshal::{ScratchCStr, ScratchCStrArray, SCRATCH_CAPACITY};

pub mod enums;

pub mod versions;
pub mod ext;

mod instance;
pub use crate::instance::{LoadFlags, GL};

pub mod platform;
pub use crate::platform::GLLibrary;

/// Generated GL 4.6 core constants and types, plus the vendor extensions this crate binds.
#[allow(clippy::all, non_camel_case_types, non_snake_case, non_upper_case_globals, dead_code)]
pub mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

#[cfg(test)]
mod tests;
