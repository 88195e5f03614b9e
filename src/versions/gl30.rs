// glbind/src/versions/gl30.rs
//
//! The OpenGL 3.0 entry points no 3.0 extension owns: indexed strings and `glClearBuffer*`.

use crate::enums::{ClearBuffer, StringName};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

gl_functions! {
    pub struct GL30Functions {
        fn glGetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
        fn glClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        fn glClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        fn glClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        fn glClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
    }
}

gl_extension! {
    pub struct GL30(GL30Functions) {
        name: "GL_VERSION_3_0",
        core: Some(GLVersion::new(3, 0)),
        extensions: [],
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL30 {
    #[inline]
    pub unsafe fn get_string_i(&self, name: StringName, index: GLuint) -> Option<String> {
        marshal::read_string(self.functions.glGetStringi(name.into(), index))
    }

    /// Clears color attachment `draw_buffer` of the draw framebuffer to a signed integer color.
    #[inline]
    pub unsafe fn clear_buffer_color_iv(&self, draw_buffer: GLint, value: &[GLint; 4]) {
        self.functions.glClearBufferiv(gl::COLOR, draw_buffer, value.as_ptr())
    }

    #[inline]
    pub unsafe fn clear_buffer_color_uiv(&self, draw_buffer: GLint, value: &[GLuint; 4]) {
        self.functions.glClearBufferuiv(gl::COLOR, draw_buffer, value.as_ptr())
    }

    #[inline]
    pub unsafe fn clear_buffer_color_fv(&self, draw_buffer: GLint, value: &[GLfloat; 4]) {
        self.functions.glClearBufferfv(gl::COLOR, draw_buffer, value.as_ptr())
    }

    #[inline]
    pub unsafe fn clear_buffer_depth(&self, depth: GLfloat) {
        self.functions.glClearBufferfv(ClearBuffer::Depth.into(), 0, &depth)
    }

    #[inline]
    pub unsafe fn clear_buffer_stencil(&self, stencil: GLint) {
        self.functions.glClearBufferiv(ClearBuffer::Stencil.into(), 0, &stencil)
    }

    #[inline]
    pub unsafe fn clear_buffer_depth_stencil(&self, depth: GLfloat, stencil: GLint) {
        self.functions.glClearBufferfi(ClearBuffer::DepthStencil.into(), 0, depth, stencil)
    }
}
