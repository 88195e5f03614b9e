// glbind/src/tests/loading.rs

use super::fake_driver::{self, FakeDriver};
use crate::context::GLContext;
use crate::ext::{ARBClipControl, ARBClipControlFunctions, ARBTextureBarrier};
use crate::ext::{ARBUniformBufferObject, ClipDepth, ClipOrigin, EXTDrawBuffers2};
use crate::gl;
use crate::info::GLVersion;
use crate::loader::{self, Extension, FnPtr, FunctionTable};

use serial_test::serial;
use std::os::raw::c_void;
use std::ptr;

fn load_clip_control() -> ARBClipControlFunctions {
    ARBClipControlFunctions::load_with(|symbol_name| FakeDriver.get_proc_address(symbol_name))
}

#[test]
#[serial]
fn test_alternates_are_probed_in_declared_order() {
    fake_driver::reset();
    fake_driver::export_only(&["glClipControlEXT"]);

    let functions = load_clip_control();

    assert_eq!(fake_driver::probes(), ["glClipControl", "glClipControlARB", "glClipControlEXT"]);
    assert_eq!(functions.glClipControl.address(), fake_driver::stub_address("glClipControlEXT"));
}

#[test]
#[serial]
fn test_first_resolved_alternate_wins() {
    fake_driver::reset();
    fake_driver::export_only(&["glClipControlARB", "glClipControlEXT"]);

    let clip_control = ARBClipControl::load(&FakeDriver);
    assert_eq!(fake_driver::probes(), ["glClipControl", "glClipControlARB"]);

    unsafe {
        clip_control.clip_control(ClipOrigin::UpperLeft, ClipDepth::ZeroToOne);
    }
    let call = fake_driver::last_call();
    assert_eq!(call.name, "glClipControlARB");
    assert_eq!(call.args, [gl::UPPER_LEFT as i64, gl::ZERO_TO_ONE as i64]);
}

#[test]
#[serial]
fn test_canonical_name_is_preferred() {
    fake_driver::reset();

    let clip_control = ARBClipControl::load(&FakeDriver);
    assert_eq!(fake_driver::probes(), ["glClipControl"]);

    unsafe {
        clip_control.clip_control(ClipOrigin::LowerLeft, ClipDepth::NegativeOneToOne);
    }
    assert_eq!(fake_driver::last_call().name, "glClipControl");
}

#[test]
#[serial]
fn test_unresolved_slots_stay_null() {
    fake_driver::reset();
    fake_driver::export_only(&[]);

    let texture_barrier = ARBTextureBarrier::load(&FakeDriver);
    let functions = texture_barrier.functions();

    assert_eq!(fake_driver::probes(), ["glTextureBarrier", "glTextureBarrierNV"]);
    assert!(!functions.glTextureBarrier.is_loaded());
    assert!(functions.glTextureBarrier.address().is_null());
    assert_eq!(functions.missing_functions(), ["glTextureBarrier"]);
    assert_eq!(functions.loaded_count(), 0);
    assert!(!functions.is_complete());
}

#[test]
#[serial]
#[should_panic(expected = "glTextureBarrier was called but the driver does not export it")]
fn test_calling_unresolved_slot_panics() {
    fake_driver::reset();
    fake_driver::export_only(&[]);

    let texture_barrier = ARBTextureBarrier::load(&FakeDriver);
    unsafe {
        texture_barrier.texture_barrier();
    }
}

#[test]
#[serial]
fn test_overlapping_names_bind_independently() {
    fake_driver::reset();
    fake_driver::export_only(&["glGetIntegerIndexedvEXT"]);

    let draw_buffers2 = EXTDrawBuffers2::load(&FakeDriver);
    let uniform_buffer_object = ARBUniformBufferObject::load(&FakeDriver);

    // Each table resolves on its own; nothing is cached between them.
    let probes = fake_driver::probes();
    assert_eq!(probes.iter().filter(|name| *name == "glGetIntegeri_v").count(), 2);
    assert_eq!(probes.iter().filter(|name| *name == "glGetIntegerIndexedvEXT").count(), 2);

    let expected = fake_driver::stub_address("glGetIntegerIndexedvEXT");
    assert_eq!(draw_buffers2.functions().glGetIntegeri_v.address(), expected);
    assert_eq!(uniform_buffer_object.functions().glGetIntegeri_v.address(), expected);

    unsafe {
        assert_eq!(draw_buffers2.get_integer_i(gl::BLEND, 2), 102);
        assert_eq!(uniform_buffer_object.get_integer_i(gl::UNIFORM_BUFFER_BINDING, 3), 103);
    }
}

#[test]
fn test_resolve_without_alternates() {
    let mut probed = vec![];
    let f = loader::resolve(&mut |name| {
                                probed.push(name);
                                ptr::null()
                            },
                            "glFinish",
                            &[]);
    assert_eq!(f, FnPtr::NULL);
    assert_eq!(probed, ["glFinish"]);
}

#[test]
fn test_resolve_stops_at_first_address() {
    let address = 0x1000 as *const c_void;
    let mut probed = vec![];
    let f = loader::resolve(&mut |name| {
                                probed.push(name);
                                if name == "glFooB" { address } else { ptr::null() }
                            },
                            "glFoo",
                            &["glFooA", "glFooB", "glFooC"]);
    assert!(f.is_loaded());
    assert_eq!(f.address(), address);
    assert_eq!(probed, ["glFoo", "glFooA", "glFooB"]);
}

#[test]
fn test_slots_follow_declaration_order() {
    let slots = ARBClipControlFunctions::SLOTS;
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].names().collect::<Vec<_>>(),
               ["glClipControl", "glClipControlARB", "glClipControlEXT"]);

    let functions = ARBClipControlFunctions::load_with(|_| ptr::null());
    assert!(functions.slot("glClipControl").is_some());
    assert!(functions.slot("glClipControlARB").is_none());
    assert!(!functions.is_loaded("glNotAFunction"));
}

#[test]
fn test_extension_support() {
    let has_nothing = |_: &str| false;
    assert!(ARBClipControl::is_supported(GLVersion::new(4, 5), has_nothing));
    assert!(ARBClipControl::is_supported(GLVersion::new(4, 6), has_nothing));
    assert!(!ARBClipControl::is_supported(GLVersion::new(4, 4), has_nothing));
    assert!(ARBClipControl::is_supported(GLVersion::new(3, 3), |name| name == "GL_ARB_clip_control"));

    // Any one of the advertised names is enough.
    assert!(ARBTextureBarrier::is_supported(GLVersion::new(2, 1), |name| {
        name == "GL_NV_texture_barrier"
    }));
}
