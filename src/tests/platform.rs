// glbind/src/tests/platform.rs

use crate::context::GLContext;
use crate::error::Error;
use crate::platform::GLLibrary;

#[test]
fn test_missing_library() {
    assert!(matches!(GLLibrary::open_named("libglbind-does-not-exist.so"),
                     Err(Error::NoGLLibraryFound)));
}

// libc has no `glXGetProcAddressARB`, so lookups go straight to the symbol table.
#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[test]
fn test_symbol_lookup_without_window_system() {
    let library = GLLibrary::open_named("libc.so.6").unwrap();
    assert!(!library.lookup_symbol("strlen").is_null());
    assert_eq!(library.get_proc_address("strlen"), library.lookup_symbol("strlen"));
    assert!(library.get_proc_address("glClear").is_null());
}
