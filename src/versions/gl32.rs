// glbind/src/versions/gl32.rs
//
//! The OpenGL 3.2 entry points that came from `GL_ARB_geometry_shader4` rather than the 3.2
//! extensions.

use crate::enums::{BufferParameter, BufferTarget, FramebufferAttachment, FramebufferTarget};
use crate::gl::types::*;
use crate::info::GLVersion;

gl_functions! {
    pub struct GL32Functions {
        fn glFramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint,
                                level: GLint) = ["glFramebufferTextureARB", "glFramebufferTextureEXT"];
        fn glGetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
        fn glGetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
    }
}

gl_extension! {
    pub struct GL32(GL32Functions) {
        name: "GL_VERSION_3_2",
        core: Some(GLVersion::new(3, 2)),
        extensions: [],
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL32 {
    /// Attaches a whole (possibly layered) texture level to the framebuffer.
    #[inline]
    pub unsafe fn framebuffer_texture(&self,
                                      target: FramebufferTarget,
                                      attachment: FramebufferAttachment,
                                      texture: GLuint,
                                      level: GLint) {
        self.functions.glFramebufferTexture(target.into(), attachment.into(), texture, level)
    }

    #[inline]
    pub unsafe fn get_buffer_parameter_i64(&self, target: BufferTarget, pname: BufferParameter) -> GLint64 {
        let mut value = 0;
        self.functions.glGetBufferParameteri64v(target.into(), pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_integer64_i(&self, target: GLenum, index: GLuint) -> GLint64 {
        let mut value = 0;
        self.functions.glGetInteger64i_v(target, index, &mut value);
        value
    }
}
