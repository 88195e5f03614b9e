// glbind/src/versions/gl13.rs
//
//! OpenGL 1.3: multitexturing, multisample coverage and compressed textures.

use crate::enums::{InternalFormat, TextureTarget};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use euclid::default::{Box3D, Rect, Size2D, Size3D};
use std::os::raw::c_void;

gl_functions! {
    pub struct GL13Functions {
        fn glActiveTexture(texture: GLenum) = ["glActiveTextureARB"];
        fn glSampleCoverage(value: GLfloat, invert: GLboolean) = ["glSampleCoverageARB"];
        fn glCompressedTexImage1D(target: GLenum, level: GLint, internalformat: GLenum,
                                  width: GLsizei, border: GLint, imageSize: GLsizei,
                                  data: *const c_void) = ["glCompressedTexImage1DARB"];
        fn glCompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum,
                                  width: GLsizei, height: GLsizei, border: GLint,
                                  imageSize: GLsizei, data: *const c_void)
            = ["glCompressedTexImage2DARB"];
        fn glCompressedTexImage3D(target: GLenum, level: GLint, internalformat: GLenum,
                                  width: GLsizei, height: GLsizei, depth: GLsizei,
                                  border: GLint, imageSize: GLsizei, data: *const c_void)
            = ["glCompressedTexImage3DARB"];
        fn glCompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint,
                                     width: GLsizei, format: GLenum, imageSize: GLsizei,
                                     data: *const c_void) = ["glCompressedTexSubImage1DARB"];
        fn glCompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint,
                                     yoffset: GLint, width: GLsizei, height: GLsizei,
                                     format: GLenum, imageSize: GLsizei, data: *const c_void)
            = ["glCompressedTexSubImage2DARB"];
        fn glCompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint,
                                     yoffset: GLint, zoffset: GLint, width: GLsizei,
                                     height: GLsizei, depth: GLsizei, format: GLenum,
                                     imageSize: GLsizei, data: *const c_void)
            = ["glCompressedTexSubImage3DARB"];
        fn glGetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void)
            = ["glGetCompressedTexImageARB"];
    }
}

gl_extension! {
    pub struct GL13(GL13Functions) {
        name: "GL_VERSION_1_3",
        core: Some(GLVersion::new(1, 3)),
        extensions: [],
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL13 {
    /// Selects texture unit `unit` (an index, not a `GL_TEXTUREi` token).
    #[inline]
    pub unsafe fn active_texture(&self, unit: GLuint) {
        self.functions.glActiveTexture(gl::TEXTURE0 + unit)
    }

    #[inline]
    pub unsafe fn sample_coverage(&self, value: f32, invert: bool) {
        self.functions.glSampleCoverage(value, marshal::gl_bool(invert))
    }

    pub unsafe fn compressed_tex_image_1d(&self,
                                          target: TextureTarget,
                                          level: GLint,
                                          internal_format: InternalFormat,
                                          width: GLsizei,
                                          data: &[u8]) {
        self.functions.glCompressedTexImage1D(target.into(),
                                              level,
                                              internal_format.into(),
                                              width,
                                              0,
                                              marshal::count(data),
                                              data.as_ptr() as *const c_void)
    }

    pub unsafe fn compressed_tex_image_2d(&self,
                                          target: TextureTarget,
                                          level: GLint,
                                          internal_format: InternalFormat,
                                          size: Size2D<i32>,
                                          data: &[u8]) {
        self.functions.glCompressedTexImage2D(target.into(),
                                              level,
                                              internal_format.into(),
                                              size.width,
                                              size.height,
                                              0,
                                              marshal::count(data),
                                              data.as_ptr() as *const c_void)
    }

    pub unsafe fn compressed_tex_image_3d(&self,
                                          target: TextureTarget,
                                          level: GLint,
                                          internal_format: InternalFormat,
                                          size: Size3D<i32>,
                                          data: &[u8]) {
        self.functions.glCompressedTexImage3D(target.into(),
                                              level,
                                              internal_format.into(),
                                              size.width,
                                              size.height,
                                              size.depth,
                                              0,
                                              marshal::count(data),
                                              data.as_ptr() as *const c_void)
    }

    pub unsafe fn compressed_tex_sub_image_1d(&self,
                                              target: TextureTarget,
                                              level: GLint,
                                              x_offset: GLint,
                                              width: GLsizei,
                                              format: InternalFormat,
                                              data: &[u8]) {
        self.functions.glCompressedTexSubImage1D(target.into(),
                                                 level,
                                                 x_offset,
                                                 width,
                                                 format.into(),
                                                 marshal::count(data),
                                                 data.as_ptr() as *const c_void)
    }

    pub unsafe fn compressed_tex_sub_image_2d(&self,
                                              target: TextureTarget,
                                              level: GLint,
                                              area: Rect<i32>,
                                              format: InternalFormat,
                                              data: &[u8]) {
        self.functions.glCompressedTexSubImage2D(target.into(),
                                                 level,
                                                 area.origin.x,
                                                 area.origin.y,
                                                 area.size.width,
                                                 area.size.height,
                                                 format.into(),
                                                 marshal::count(data),
                                                 data.as_ptr() as *const c_void)
    }

    pub unsafe fn compressed_tex_sub_image_3d(&self,
                                              target: TextureTarget,
                                              level: GLint,
                                              region: Box3D<i32>,
                                              format: InternalFormat,
                                              data: &[u8]) {
        let size = region.size();
        self.functions.glCompressedTexSubImage3D(target.into(),
                                                 level,
                                                 region.min.x,
                                                 region.min.y,
                                                 region.min.z,
                                                 size.width,
                                                 size.height,
                                                 size.depth,
                                                 format.into(),
                                                 marshal::count(data),
                                                 data.as_ptr() as *const c_void)
    }

    /// Reads back a compressed image. Query `TextureLevelParameter::CompressedImageSize` for
    /// the size `data` needs.
    pub unsafe fn get_compressed_tex_image(&self, target: TextureTarget, level: GLint, data: &mut [u8]) {
        self.functions.glGetCompressedTexImage(target.into(), level, data.as_mut_ptr() as *mut c_void)
    }
}
