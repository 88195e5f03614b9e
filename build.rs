// glbind/build.rs
//
//! The `glbind` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

// Extensions whose tokens are not part of the 4.6 core profile.
const EXTRA_EXTENSIONS: [&str; 4] = [
    "GL_ARB_bindless_texture",
    "GL_EXT_depth_bounds_test",
    "GL_EXT_texture_integer",
    "GL_NV_primitive_restart",
];

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        linux: { all(unix, not(any(macos, android))) },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate GL types and tokens. The generated function struct goes unused; entry points are
    // declared per extension module.
    let mut file = File::create(dest.join("gl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Gl, (4, 6), Profile::Core, Fallbacks::All, EXTRA_EXTENSIONS);
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
