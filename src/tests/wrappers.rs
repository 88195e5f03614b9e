// glbind/src/tests/wrappers.rs

use super::fake_driver::{self, FakeDriver};
use crate::enums::{BlendFactor, BufferTarget, BufferUsage, Capability, DrawBufferMode};
use crate::enums::{MapAccess, ObjectIdentifier};
use crate::error::GLError;
use crate::ext::{ARBMapBufferRange, KHRDebug};
use crate::gl;
use crate::loader::Extension;
use crate::marshal::SCRATCH_CAPACITY;
use crate::versions::{GL11, GL15, GL20};

use euclid::default::{Point2D, Rect, Size2D};
use serial_test::serial;

#[test]
#[serial]
fn test_enums_narrow_to_tokens() {
    fake_driver::reset();
    let gl11 = GL11::load(&FakeDriver);

    unsafe {
        gl11.enable(Capability::DepthTest);
        gl11.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    }

    let calls = fake_driver::calls();
    assert_eq!(calls[0].name, "glEnable");
    assert_eq!(calls[0].args, [gl::DEPTH_TEST as i64]);
    assert_eq!(calls[1].name, "glBlendFunc");
    assert_eq!(calls[1].args, [gl::SRC_ALPHA as i64, gl::ONE_MINUS_SRC_ALPHA as i64]);
}

#[test]
#[serial]
fn test_rect_becomes_origin_and_size() {
    fake_driver::reset();
    let gl11 = GL11::load(&FakeDriver);

    unsafe {
        gl11.viewport(Rect::new(Point2D::new(10, 20), Size2D::new(640, 480)));
    }
    assert_eq!(fake_driver::last_call().args, [10, 20, 640, 480]);
}

#[test]
#[serial]
fn test_driver_errors() {
    fake_driver::reset();
    let gl11 = GL11::load(&FakeDriver);

    unsafe {
        assert_eq!(gl11.get_error(), None);
        fake_driver::set_error(gl::INVALID_ENUM);
        assert_eq!(gl11.get_error(), Some(GLError::InvalidEnum));
        assert_eq!(gl11.get_error(), None);
        fake_driver::set_error(0x1234);
        assert_eq!(gl11.get_error(), Some(GLError::Unknown(0x1234)));
    }
    assert_eq!(GLError::OutOfMemory.to_raw(), gl::OUT_OF_MEMORY);
}

#[test]
#[serial]
fn test_enum_slices_pass_as_token_arrays() {
    fake_driver::reset();
    let gl20 = GL20::load(&FakeDriver);

    unsafe {
        gl20.draw_buffers(&[DrawBufferMode::ColorAttachment0,
                            DrawBufferMode::None,
                            DrawBufferMode::ColorAttachment1]);
    }
    let call = fake_driver::last_call();
    assert_eq!(call.name, "glDrawBuffers");
    assert_eq!(call.args,
               [gl::COLOR_ATTACHMENT0 as i64, gl::NONE as i64, gl::COLOR_ATTACHMENT1 as i64]);
}

#[test]
#[serial]
fn test_shader_sources_are_counted_and_terminated() {
    fake_driver::reset();
    let gl20 = GL20::load(&FakeDriver);

    let long_source = format!("// {}\nvoid main() {{}}\n", "x".repeat(SCRATCH_CAPACITY * 2));
    unsafe {
        gl20.shader_source(3, &["#version 330 core\n", long_source.as_str()]);
    }

    let call = fake_driver::last_call();
    assert_eq!(call.name, "glShaderSource");
    assert_eq!(call.args, [3, 2, 18, long_source.len() as i64]);
    assert_eq!(call.text, ["#version 330 core\n", long_source.as_str()]);
}

#[test]
#[serial]
fn test_negative_locations_are_none() {
    fake_driver::reset();
    let gl20 = GL20::load(&FakeDriver);

    unsafe {
        assert_eq!(gl20.get_uniform_location(1, "u_color"), Some(7));
        assert_eq!(gl20.get_uniform_location(1, "missing"), None);
    }
    assert_eq!(fake_driver::last_call().text, ["missing"]);
}

#[test]
#[serial]
fn test_buffer_data_passes_byte_length() {
    fake_driver::reset();
    let gl15 = GL15::load(&FakeDriver);

    unsafe {
        gl15.buffer_data(BufferTarget::Array, &[0x0201u16, 0x0403], BufferUsage::StaticDraw);
    }
    let call = fake_driver::last_call();
    assert_eq!(call.name, "glBufferData");
    let data: [i64; 4] = if cfg!(target_endian = "little") { [1, 2, 3, 4] } else { [2, 1, 4, 3] };
    assert_eq!(call.args[..3], [gl::ARRAY_BUFFER as i64, 4, gl::STATIC_DRAW as i64]);
    assert_eq!(call.args[3..], data);
}

#[test]
#[serial]
fn test_flags_pass_as_bits() {
    fake_driver::reset();
    let map_buffer_range = ARBMapBufferRange::load(&FakeDriver);

    let pointer = unsafe {
        map_buffer_range.map_buffer_range(BufferTarget::Array,
                                          16,
                                          256,
                                          MapAccess::WRITE | MapAccess::INVALIDATE_RANGE)
    };
    assert!(pointer.is_null());

    let access = gl::MAP_WRITE_BIT | gl::MAP_INVALIDATE_RANGE_BIT;
    assert_eq!(fake_driver::last_call().args, [gl::ARRAY_BUFFER as i64, 16, 256, access as i64]);
}

#[test]
#[serial]
fn test_labels_pass_length_and_text() {
    fake_driver::reset();
    let debug = KHRDebug::load(&FakeDriver);

    let label = "vertex buffer ".repeat(40);
    unsafe {
        debug.object_label(ObjectIdentifier::Buffer, 9, &label);
        debug.clear_object_label(ObjectIdentifier::Buffer, 9);
    }

    let calls = fake_driver::calls();
    assert_eq!(calls[0].args, [gl::BUFFER as i64, 9, label.len() as i64]);
    assert_eq!(calls[0].text, [label.as_str()]);
    assert_eq!(calls[1].args, [gl::BUFFER as i64, 9, 0]);
    assert!(calls[1].text.is_empty());
}
