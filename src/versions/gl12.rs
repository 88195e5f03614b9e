// glbind/src/versions/gl12.rs
//
//! OpenGL 1.2: 3D textures and ranged element draws.

use crate::enums::{IndexType, InternalFormat, PixelFormat, PixelType, PrimitiveType, TextureTarget};
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use bytemuck::Pod;
use euclid::default::{Box3D, Point3D, Rect, Size3D};
use std::os::raw::c_void;

gl_functions! {
    pub struct GL12Functions {
        fn glDrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei,
                               gltype: GLenum, indices: *const c_void)
            = ["glDrawRangeElementsEXT"];
        fn glTexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                        height: GLsizei, depth: GLsizei, border: GLint, format: GLenum,
                        gltype: GLenum, pixels: *const c_void) = ["glTexImage3DEXT"];
        fn glTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                           zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
                           format: GLenum, gltype: GLenum, pixels: *const c_void)
            = ["glTexSubImage3DEXT"];
        fn glCopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                               zoffset: GLint, x: GLint, y: GLint, width: GLsizei,
                               height: GLsizei) = ["glCopyTexSubImage3DEXT"];
    }
}

gl_extension! {
    pub struct GL12(GL12Functions) {
        name: "GL_VERSION_1_2",
        core: Some(GLVersion::new(1, 2)),
        extensions: [],
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL12 {
    /// Like `draw_elements`, with the hint that every index lies within `start..=end`.
    pub unsafe fn draw_range_elements(&self,
                                      mode: PrimitiveType,
                                      start: GLuint,
                                      end: GLuint,
                                      count: GLsizei,
                                      index_type: IndexType,
                                      offset: usize) {
        self.functions.glDrawRangeElements(mode.into(),
                                           start,
                                           end,
                                           count,
                                           index_type.into(),
                                           marshal::offset_ptr(offset))
    }

    pub unsafe fn tex_image_3d<T>(&self,
                                  target: TextureTarget,
                                  level: GLint,
                                  internal_format: InternalFormat,
                                  size: Size3D<i32>,
                                  format: PixelFormat,
                                  pixel_type: PixelType,
                                  pixels: Option<&[T]>)
                                  where T: Pod {
        self.functions.glTexImage3D(target.into(),
                                    level,
                                    internal_format as GLint,
                                    size.width,
                                    size.height,
                                    size.depth,
                                    0,
                                    format.into(),
                                    pixel_type.into(),
                                    marshal::data_ptr(pixels))
    }

    pub unsafe fn tex_sub_image_3d<T>(&self,
                                      target: TextureTarget,
                                      level: GLint,
                                      region: Box3D<i32>,
                                      format: PixelFormat,
                                      pixel_type: PixelType,
                                      pixels: &[T])
                                      where T: Pod {
        let size = region.size();
        self.functions.glTexSubImage3D(target.into(),
                                       level,
                                       region.min.x,
                                       region.min.y,
                                       region.min.z,
                                       size.width,
                                       size.height,
                                       size.depth,
                                       format.into(),
                                       pixel_type.into(),
                                       pixels.as_ptr() as *const c_void)
    }

    pub unsafe fn copy_tex_sub_image_3d(&self,
                                        target: TextureTarget,
                                        level: GLint,
                                        offset: Point3D<i32>,
                                        source: Rect<i32>) {
        self.functions.glCopyTexSubImage3D(target.into(),
                                           level,
                                           offset.x,
                                           offset.y,
                                           offset.z,
                                           source.origin.x,
                                           source.origin.y,
                                           source.size.width,
                                           source.size.height)
    }
}
