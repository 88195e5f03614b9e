// glbind/src/ext/vendor.rs
//
//! Extensions that never became part of a core version.

use crate::enums::InternalFormat;
use crate::gl;
use crate::gl::types::*;
use crate::marshal;

use std::ops::Range;

gl_functions! {
    pub struct EXTDepthBoundsTestFunctions {
        fn glDepthBoundsEXT(zmin: GLdouble, zmax: GLdouble);
    }
}

gl_extension! {
    /// Discards fragments whose stored depth value lies outside a range.
    ///
    /// Enable with `Capability::DepthBoundsTest`.
    pub struct EXTDepthBoundsTest(EXTDepthBoundsTestFunctions) {
        name: "GL_EXT_depth_bounds_test",
        core: None,
        extensions: ["GL_EXT_depth_bounds_test"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl EXTDepthBoundsTest {
    #[inline]
    pub unsafe fn depth_bounds(&self, bounds: Range<f64>) {
        self.functions.glDepthBoundsEXT(bounds.start, bounds.end)
    }
}

gl_functions! {
    pub struct ARBBindlessTextureFunctions {
        fn glGetTextureHandleARB(texture: GLuint) -> GLuint64;
        fn glGetTextureSamplerHandleARB(texture: GLuint, sampler: GLuint) -> GLuint64;
        fn glMakeTextureHandleResidentARB(handle: GLuint64);
        fn glMakeTextureHandleNonResidentARB(handle: GLuint64);
        fn glGetImageHandleARB(texture: GLuint, level: GLint, layered: GLboolean, layer: GLint,
                               format: GLenum) -> GLuint64;
        fn glMakeImageHandleResidentARB(handle: GLuint64, access: GLenum);
        fn glMakeImageHandleNonResidentARB(handle: GLuint64);
        fn glUniformHandleui64ARB(location: GLint, value: GLuint64);
        fn glUniformHandleui64vARB(location: GLint, count: GLsizei, value: *const GLuint64);
        fn glProgramUniformHandleui64ARB(program: GLuint, location: GLint, value: GLuint64);
        fn glIsTextureHandleResidentARB(handle: GLuint64) -> GLboolean;
        fn glIsImageHandleResidentARB(handle: GLuint64) -> GLboolean;
        fn glVertexAttribL1ui64ARB(index: GLuint, x: GLuint64);
    }
}

gl_extension! {
    /// Textures and images referenced by 64-bit handles instead of texture units.
    pub struct ARBBindlessTexture(ARBBindlessTextureFunctions) {
        name: "GL_ARB_bindless_texture",
        core: None,
        extensions: ["GL_ARB_bindless_texture"],
    }
}

gl_enum! {
    /// How a shader may access a resident image handle.
    pub enum ImageHandleAccess {
        ReadOnly = gl::READ_ONLY,
        WriteOnly = gl::WRITE_ONLY,
        ReadWrite = gl::READ_WRITE,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBBindlessTexture {
    /// Returns the handle of `texture` with its own sampling state. The texture becomes
    /// immutable.
    #[inline]
    pub unsafe fn get_texture_handle(&self, texture: GLuint) -> GLuint64 {
        self.functions.glGetTextureHandleARB(texture)
    }

    #[inline]
    pub unsafe fn get_texture_sampler_handle(&self, texture: GLuint, sampler: GLuint) -> GLuint64 {
        self.functions.glGetTextureSamplerHandleARB(texture, sampler)
    }

    #[inline]
    pub unsafe fn make_texture_handle_resident(&self, handle: GLuint64) {
        self.functions.glMakeTextureHandleResidentARB(handle)
    }

    #[inline]
    pub unsafe fn make_texture_handle_non_resident(&self, handle: GLuint64) {
        self.functions.glMakeTextureHandleNonResidentARB(handle)
    }

    /// `layer` selects one layer of an array, cube map or 3D texture; `None` binds the whole
    /// level.
    #[inline]
    pub unsafe fn get_image_handle(&self,
                                   texture: GLuint,
                                   level: GLint,
                                   layer: Option<GLint>,
                                   format: InternalFormat)
                                   -> GLuint64 {
        self.functions.glGetImageHandleARB(texture,
                                           level,
                                           marshal::gl_bool(layer.is_none()),
                                           layer.unwrap_or(0),
                                           format.into())
    }

    #[inline]
    pub unsafe fn make_image_handle_resident(&self, handle: GLuint64, access: ImageHandleAccess) {
        self.functions.glMakeImageHandleResidentARB(handle, access.into())
    }

    #[inline]
    pub unsafe fn make_image_handle_non_resident(&self, handle: GLuint64) {
        self.functions.glMakeImageHandleNonResidentARB(handle)
    }

    #[inline]
    pub unsafe fn uniform_handle(&self, location: GLint, handle: GLuint64) {
        self.functions.glUniformHandleui64ARB(location, handle)
    }

    #[inline]
    pub unsafe fn uniform_handles(&self, location: GLint, handles: &[GLuint64]) {
        self.functions.glUniformHandleui64vARB(location, marshal::count(handles), handles.as_ptr())
    }

    #[inline]
    pub unsafe fn program_uniform_handle(&self, program: GLuint, location: GLint, handle: GLuint64) {
        self.functions.glProgramUniformHandleui64ARB(program, location, handle)
    }

    #[inline]
    pub unsafe fn is_texture_handle_resident(&self, handle: GLuint64) -> bool {
        marshal::from_gl_bool(self.functions.glIsTextureHandleResidentARB(handle))
    }

    #[inline]
    pub unsafe fn is_image_handle_resident(&self, handle: GLuint64) -> bool {
        marshal::from_gl_bool(self.functions.glIsImageHandleResidentARB(handle))
    }

    /// Feeds a handle to a `sampler*` or `image*` vertex attribute.
    #[inline]
    pub unsafe fn vertex_attrib_handle(&self, index: GLuint, handle: GLuint64) {
        self.functions.glVertexAttribL1ui64ARB(index, handle)
    }
}
