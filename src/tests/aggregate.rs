// glbind/src/tests/aggregate.rs

use super::fake_driver::{self, FakeDriver};
use crate::context::VersionedContext;
use crate::error::Error;
use crate::ext::*;
use crate::gl;
use crate::info::{GLApi, GLVersion};
use crate::instance::{LoadFlags, GL};
use crate::loader::{Extension, FunctionTable};

use serial_test::serial;

// The first advertised name of each module.
macro_rules! advertised {
    ($($module:ty),* $(,)?) => {
        vec![$(<$module as Extension>::EXTENSION_NAMES[0]),*]
    };
}

fn gl30_extensions() -> Vec<&'static str> {
    let mut names = advertised![
        EXTGPUShader4,
        NVConditionalRender,
        ARBMapBufferRange,
        ARBColorBufferFloat,
        ARBFramebufferObject,
        EXTTextureInteger,
        EXTDrawBuffers2,
        ARBTransformFeedback,
        ARBVertexArrayObject,
    ];
    names.extend_from_slice(&[
        "GL_ARB_depth_buffer_float",
        "GL_ARB_texture_float",
        "GL_EXT_packed_float",
        "GL_EXT_texture_shared_exponent",
        "GL_ARB_half_float_pixel",
        "GL_ARB_texture_compression_rgtc",
    ]);
    names
}

fn gl31_extensions() -> Vec<&'static str> {
    let mut names = advertised![
        ARBDrawInstanced,
        ARBCopyBuffer,
        NVPrimitiveRestart,
        ARBTextureBufferObject,
        ARBUniformBufferObject,
    ];
    names.push("GL_ARB_texture_rectangle");
    names
}

fn gl32_extensions() -> Vec<&'static str> {
    let mut names = advertised![
        ARBDrawElementsBaseVertex,
        ARBProvokingVertex,
        ARBTextureMultisample,
        ARBSync,
    ];
    names.extend_from_slice(&[
        "GL_ARB_compatibility",
        "GL_ARB_vertex_array_bgra",
        "GL_ARB_fragment_coord_conventions",
        "GL_ARB_seamless_cube_map",
        "GL_ARB_depth_clamp",
    ]);
    names
}

fn gl40_extensions() -> Vec<&'static str> {
    let mut names = advertised![
        ARBShaderSubroutine,
        ARBDrawIndirect,
        ARBSampleShading,
        ARBTessellationShader,
        ARBTransformFeedback2,
        ARBTransformFeedback3,
        ARBDrawBuffersBlend,
    ];
    names.extend_from_slice(&[
        "GL_ARB_texture_query_lod",
        "GL_ARB_gpu_shader5",
        "GL_ARB_gpu_shader_fp64",
        "GL_ARB_texture_gather",
        "GL_ARB_texture_buffer_object_rgb32",
        "GL_ARB_texture_cube_map_array",
    ]);
    names
}

fn setup(version: &str, extensions: &[&str]) {
    fake_driver::reset();
    fake_driver::set_version(Some(version));
    fake_driver::set_extensions(extensions);
}

#[test]
#[serial]
fn test_version_from_version_string() {
    setup("3.3.0 NVIDIA 535.54", &[]);
    let gl = GL::new(&FakeDriver).unwrap();

    assert_eq!(gl.api(), GLApi::GL);
    assert_eq!(gl.reported_version(), GLVersion::new(3, 3));
    assert_eq!(gl.version(), GLVersion::new(3, 3));
    assert!(gl.supports(GLVersion::new(3, 2)));
    assert!(!gl.supports(GLVersion::new(4, 0)));

    assert!(gl.gl21.is_some() && gl.gl30.is_some() && gl.gl32.is_some());
    assert!(gl.arb_sync.is_some());
    assert!(gl.arb_sampler_objects.is_some());
    assert!(gl.arb_shader_subroutine.is_none());
    assert!(gl.arb_clip_control.is_none());
    assert!(gl.supports_module(ARBSync::NAME));
}

#[test]
#[serial]
fn test_version_from_context() {
    setup("garbage", &["GL_ARB_vertex_array_object"]);
    fake_driver::set_version(None);

    let context = VersionedContext::new(FakeDriver, GLVersion::new(2, 1));
    let gl = GL::new(&context).unwrap();

    assert_eq!(gl.version(), GLVersion::new(2, 1));
    assert!(gl.gl21.is_some());
    assert!(gl.gl30.is_none());
    assert!(gl.arb_vertex_array_object.is_some());
}

#[test]
#[serial]
fn test_gles_version_string() {
    setup("OpenGL ES 3.2 Mesa 23.1.0", &[]);
    let gl = GL::new(&FakeDriver).unwrap();
    assert_eq!(gl.api(), GLApi::GLES);
    assert_eq!(gl.reported_version(), GLVersion::new(3, 2));
}

#[test]
#[serial]
fn test_unparseable_version_is_an_error() {
    setup("not a version", &[]);
    match GL::new(&FakeDriver) {
        Err(Error::UnsupportedGLVersion(Some(version))) => assert_eq!(version, "not a version"),
        other => panic!("unexpected result: {:?}", other.map(|gl| gl.version())),
    }

    fake_driver::set_version(None);
    assert!(matches!(GL::new(&FakeDriver), Err(Error::UnsupportedGLVersion(None))));
}

#[test]
#[serial]
fn test_missing_query_functions_are_errors() {
    setup("4.6.0", &[]);
    fake_driver::export_only(&[]);
    assert!(matches!(GL::new(&FakeDriver), Err(Error::GLFunctionNotFound("glGetString"))));

    setup("4.6.0", &[]);
    fake_driver::hide(&["glGetStringi"]);
    assert!(matches!(GL::new(&FakeDriver), Err(Error::GLFunctionNotFound("glGetStringi"))));
}

#[test]
#[serial]
fn test_indexed_extension_strings() {
    setup("3.0", &["GL_ARB_clip_control", "GL_KHR_debug", "GL_ARB_texture_barrier"]);
    let gl = GL::new(&FakeDriver).unwrap();

    assert_eq!(gl.extensions(), ["GL_ARB_clip_control", "GL_KHR_debug", "GL_ARB_texture_barrier"]);
    assert!(gl.has_extension("GL_KHR_debug"));
    assert!(!gl.has_extension("GL_KHR"));
    assert!(fake_driver::probes().iter().any(|name| name == "glGetStringi"));
    assert!(fake_driver::calls()
                .iter()
                .any(|call| call.name == "glGetIntegerv" && call.args == [gl::NUM_EXTENSIONS as i64]));

    assert!(gl.arb_clip_control.is_some());
    assert!(gl.khr_debug.is_some());
    assert!(gl.arb_texture_barrier.is_some());
    assert!(gl.arb_direct_state_access.is_none());
}

#[test]
#[serial]
fn test_legacy_extension_string() {
    setup("2.1 Mesa 10.0", &["GL_ARB_vertex_array_object", "GL_EXT_depth_bounds_test"]);
    fake_driver::hide(&["glGetStringi"]);
    let gl = GL::new(&FakeDriver).unwrap();

    assert_eq!(gl.extensions(), ["GL_ARB_vertex_array_object", "GL_EXT_depth_bounds_test"]);
    assert!(gl.arb_vertex_array_object.is_some());
    assert!(gl.ext_depth_bounds_test.is_some());
    assert!(gl.arb_bindless_texture.is_none());
    assert!(gl.gl30.is_none());
}

#[test]
#[serial]
fn test_promotion_to_gl30() {
    setup("2.1", &gl30_extensions());
    let gl = GL::new(&FakeDriver).unwrap();

    assert_eq!(gl.reported_version(), GLVersion::new(2, 1));
    assert_eq!(gl.version(), GLVersion::new(3, 0));
    // Core-only entry points follow the effective version.
    assert!(gl.gl30.is_some());
    assert!(gl.gl32.is_none());
}

#[test]
#[serial]
fn test_promotion_needs_every_extension() {
    let extensions: Vec<_> = gl30_extensions()
        .into_iter()
        .filter(|&name| name != "GL_ARB_half_float_pixel")
        .collect();
    setup("2.1", &extensions);
    let gl = GL::new(&FakeDriver).unwrap();
    assert_eq!(gl.version(), GLVersion::new(2, 1));
    assert!(gl.gl30.is_none());
}

#[test]
#[serial]
fn test_promotion_accepts_ext_framebuffer_object() {
    let mut extensions: Vec<_> = gl30_extensions()
        .into_iter()
        .filter(|&name| name != "GL_ARB_framebuffer_object")
        .collect();
    extensions.extend_from_slice(EXT_FRAMEBUFFER_OBJECT_SET);
    setup("2.1", &extensions);
    let gl = GL::new(&FakeDriver).unwrap();

    assert!(gl.arb_framebuffer_object.is_some());
    assert_eq!(gl.version(), GLVersion::new(3, 0));
}

#[test]
#[serial]
fn test_promotion_is_stepwise() {
    // The 3.1 set alone doesn't skip 3.0.
    setup("2.1", &gl31_extensions());
    assert_eq!(GL::new(&FakeDriver).unwrap().version(), GLVersion::new(2, 1));

    // Promotion to 3.0 starts from 2.1.
    setup("2.0", &gl30_extensions());
    assert_eq!(GL::new(&FakeDriver).unwrap().version(), GLVersion::new(2, 0));

    let mut extensions = gl30_extensions();
    extensions.extend(gl31_extensions());
    extensions.extend(gl32_extensions());
    setup("2.1", &extensions);
    let gl = GL::new(&FakeDriver).unwrap();
    assert_eq!(gl.version(), GLVersion::new(3, 2));
    assert!(gl.gl32.is_some());
}

#[test]
#[serial]
fn test_promotion_to_gl32_needs_64_bit_buffer_parameters() {
    setup("3.1", &gl32_extensions());
    assert_eq!(GL::new(&FakeDriver).unwrap().version(), GLVersion::new(3, 2));

    setup("3.1", &gl32_extensions());
    fake_driver::hide(&["glGetBufferParameteri64v"]);
    let gl = GL::new(&FakeDriver).unwrap();
    assert_eq!(gl.version(), GLVersion::new(3, 1));
    assert!(gl.gl32.is_none());
}

#[test]
#[serial]
fn test_shader_subroutine_needs_uniform_location() {
    setup("3.3", &gl40_extensions());
    let gl = GL::new(&FakeDriver).unwrap();
    assert!(gl.arb_shader_subroutine.is_some());
    assert_eq!(gl.version(), GLVersion::new(4, 0));

    setup("3.3", &gl40_extensions());
    fake_driver::hide(&["glGetSubroutineUniformLocation"]);
    let gl = GL::new(&FakeDriver).unwrap();
    assert!(gl.arb_shader_subroutine.is_none());
    assert!(!gl.supports_module(ARBShaderSubroutine::NAME));
    assert_eq!(gl.version(), GLVersion::new(3, 3));

    // Even on a 4.x context.
    setup("4.1", &[]);
    fake_driver::hide(&["glGetSubroutineUniformLocation"]);
    let gl = GL::new(&FakeDriver).unwrap();
    assert!(gl.arb_shader_subroutine.is_none());
    assert!(gl.arb_draw_indirect.is_some());
}

#[test]
#[serial]
fn test_load_all() {
    setup("2.1", &[]);
    let gl = GL::with_flags(&FakeDriver, LoadFlags::LOAD_ALL).unwrap();

    assert!(gl.arb_clip_control.is_some());
    assert!(gl.arb_bindless_texture.is_some());
    assert!(gl.gl32.is_some());
    assert!(!gl.supports_module(ARBClipControl::NAME));
    assert_eq!(gl.version(), GLVersion::new(2, 1));
}

#[test]
#[serial]
fn test_require_complete() {
    setup("4.5", &[]);
    fake_driver::hide(&["glTextureBarrier", "glTextureBarrierNV"]);
    let gl = GL::new(&FakeDriver).unwrap();
    let texture_barrier = gl.arb_texture_barrier.as_ref().unwrap();
    assert!(!texture_barrier.functions().is_complete());

    setup("4.5", &[]);
    fake_driver::hide(&["glTextureBarrier", "glTextureBarrierNV"]);
    let gl = GL::with_flags(&FakeDriver, LoadFlags::REQUIRE_COMPLETE).unwrap();
    assert!(gl.arb_texture_barrier.is_none());
    assert!(gl.arb_clip_control.is_some());
}
