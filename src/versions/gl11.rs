// glbind/src/versions/gl11.rs
//
//! OpenGL 1.1.

use crate::enums::{BlendFactor, BufferMask, Capability, CompareFunc, ContextFlags, DrawBufferMode};
use crate::enums::{Face, FrontFace, HintMode, HintTarget, IndexType, InternalFormat, LogicOp};
use crate::enums::{PixelFormat, PixelStoreParameter, PixelType, PolygonMode, PrimitiveType};
use crate::enums::{StencilOp, StringName, TextureLevelParameter, TextureParameter, TextureTarget};
use crate::error::GLError;
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use bytemuck::Pod;
use euclid::default::{Point2D, Rect, Size2D};
use std::os::raw::c_void;

gl_functions! {
    pub struct GL11Functions {
        fn glBindTexture(target: GLenum, texture: GLuint) = ["glBindTextureEXT"];
        fn glBlendFunc(sfactor: GLenum, dfactor: GLenum);
        fn glClear(mask: GLbitfield);
        fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn glClearDepth(depth: GLdouble);
        fn glClearStencil(s: GLint);
        fn glColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
        fn glCopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint,
                            y: GLint, width: GLsizei, border: GLint) = ["glCopyTexImage1DEXT"];
        fn glCopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint,
                            y: GLint, width: GLsizei, height: GLsizei, border: GLint)
            = ["glCopyTexImage2DEXT"];
        fn glCopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint,
                               width: GLsizei) = ["glCopyTexSubImage1DEXT"];
        fn glCopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                               x: GLint, y: GLint, width: GLsizei, height: GLsizei)
            = ["glCopyTexSubImage2DEXT"];
        fn glCullFace(mode: GLenum);
        fn glDeleteTextures(n: GLsizei, textures: *const GLuint) = ["glDeleteTexturesEXT"];
        fn glDepthFunc(func: GLenum);
        fn glDepthMask(flag: GLboolean);
        fn glDepthRange(n: GLdouble, f: GLdouble);
        fn glDisable(cap: GLenum);
        fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei) = ["glDrawArraysEXT"];
        fn glDrawBuffer(buf: GLenum);
        fn glDrawElements(mode: GLenum, count: GLsizei, gltype: GLenum, indices: *const c_void);
        fn glEnable(cap: GLenum);
        fn glFinish();
        fn glFlush();
        fn glFrontFace(mode: GLenum);
        fn glGenTextures(n: GLsizei, textures: *mut GLuint) = ["glGenTexturesEXT"];
        fn glGetBooleanv(pname: GLenum, data: *mut GLboolean);
        fn glGetDoublev(pname: GLenum, data: *mut GLdouble);
        fn glGetError() -> GLenum;
        fn glGetFloatv(pname: GLenum, data: *mut GLfloat);
        fn glGetIntegerv(pname: GLenum, data: *mut GLint);
        fn glGetString(name: GLenum) -> *const GLubyte;
        fn glGetTexImage(target: GLenum, level: GLint, format: GLenum, gltype: GLenum,
                         pixels: *mut c_void);
        fn glGetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum,
                                    params: *mut GLfloat);
        fn glGetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum,
                                    params: *mut GLint);
        fn glGetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
        fn glGetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn glHint(target: GLenum, mode: GLenum);
        fn glIsEnabled(cap: GLenum) -> GLboolean;
        fn glIsTexture(texture: GLuint) -> GLboolean = ["glIsTextureEXT"];
        fn glLineWidth(width: GLfloat);
        fn glLogicOp(opcode: GLenum);
        fn glPixelStoref(pname: GLenum, param: GLfloat);
        fn glPixelStorei(pname: GLenum, param: GLint);
        fn glPointSize(size: GLfloat);
        fn glPolygonMode(face: GLenum, mode: GLenum);
        fn glPolygonOffset(factor: GLfloat, units: GLfloat);
        fn glReadBuffer(src: GLenum);
        fn glReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum,
                        gltype: GLenum, pixels: *mut c_void);
        fn glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn glStencilFunc(func: GLenum, reference: GLint, mask: GLuint);
        fn glStencilMask(mask: GLuint);
        fn glStencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
        fn glTexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                        border: GLint, format: GLenum, gltype: GLenum, pixels: *const c_void);
        fn glTexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei,
                        height: GLsizei, border: GLint, format: GLenum, gltype: GLenum,
                        pixels: *const c_void);
        fn glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
        fn glTexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
        fn glTexParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn glTexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
        fn glTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei,
                           format: GLenum, gltype: GLenum, pixels: *const c_void)
            = ["glTexSubImage1DEXT"];
        fn glTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint,
                           width: GLsizei, height: GLsizei, format: GLenum, gltype: GLenum,
                           pixels: *const c_void) = ["glTexSubImage2DEXT"];
        fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    }
}

gl_extension! {
    /// The OpenGL 1.1 baseline every context provides.
    pub struct GL11(GL11Functions) {
        name: "GL_VERSION_1_1",
        core: Some(GLVersion::new(1, 1)),
        extensions: [],
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL11 {
    #[inline]
    pub unsafe fn bind_texture(&self, target: TextureTarget, texture: GLuint) {
        self.functions.glBindTexture(target.into(), texture)
    }

    #[inline]
    pub unsafe fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        self.functions.glBlendFunc(src.into(), dst.into())
    }

    #[inline]
    pub unsafe fn clear(&self, mask: BufferMask) {
        self.functions.glClear(mask.bits())
    }

    #[inline]
    pub unsafe fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.functions.glClearColor(red, green, blue, alpha)
    }

    #[inline]
    pub unsafe fn clear_depth(&self, depth: f64) {
        self.functions.glClearDepth(depth)
    }

    #[inline]
    pub unsafe fn clear_stencil(&self, stencil: GLint) {
        self.functions.glClearStencil(stencil)
    }

    #[inline]
    pub unsafe fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.functions.glColorMask(marshal::gl_bool(red),
                                   marshal::gl_bool(green),
                                   marshal::gl_bool(blue),
                                   marshal::gl_bool(alpha))
    }

    /// Copies a region of the read framebuffer into a new texture image.
    pub unsafe fn copy_tex_image_2d(&self,
                                    target: TextureTarget,
                                    level: GLint,
                                    internal_format: InternalFormat,
                                    source: Rect<i32>) {
        self.functions.glCopyTexImage2D(target.into(),
                                        level,
                                        internal_format.into(),
                                        source.origin.x,
                                        source.origin.y,
                                        source.size.width,
                                        source.size.height,
                                        0)
    }

    pub unsafe fn copy_tex_sub_image_2d(&self,
                                        target: TextureTarget,
                                        level: GLint,
                                        offset: Point2D<i32>,
                                        source: Rect<i32>) {
        self.functions.glCopyTexSubImage2D(target.into(),
                                           level,
                                           offset.x,
                                           offset.y,
                                           source.origin.x,
                                           source.origin.y,
                                           source.size.width,
                                           source.size.height)
    }

    #[inline]
    pub unsafe fn cull_face(&self, face: Face) {
        self.functions.glCullFace(face.into())
    }

    #[inline]
    pub unsafe fn delete_textures(&self, textures: &[GLuint]) {
        self.functions.glDeleteTextures(marshal::count(textures), textures.as_ptr())
    }

    #[inline]
    pub unsafe fn delete_texture(&self, texture: GLuint) {
        self.delete_textures(&[texture])
    }

    #[inline]
    pub unsafe fn depth_func(&self, func: CompareFunc) {
        self.functions.glDepthFunc(func.into())
    }

    #[inline]
    pub unsafe fn depth_mask(&self, flag: bool) {
        self.functions.glDepthMask(marshal::gl_bool(flag))
    }

    #[inline]
    pub unsafe fn depth_range(&self, near: f64, far: f64) {
        self.functions.glDepthRange(near, far)
    }

    #[inline]
    pub unsafe fn disable(&self, capability: Capability) {
        self.functions.glDisable(capability.into())
    }

    #[inline]
    pub unsafe fn enable(&self, capability: Capability) {
        self.functions.glEnable(capability.into())
    }

    #[inline]
    pub unsafe fn is_enabled(&self, capability: Capability) -> bool {
        marshal::from_gl_bool(self.functions.glIsEnabled(capability.into()))
    }

    #[inline]
    pub unsafe fn draw_arrays(&self, mode: PrimitiveType, first: GLint, count: GLsizei) {
        self.functions.glDrawArrays(mode.into(), first, count)
    }

    #[inline]
    pub unsafe fn draw_buffer(&self, buffer: DrawBufferMode) {
        self.functions.glDrawBuffer(buffer.into())
    }

    /// Draws `count` indices read from the bound element array buffer, starting `offset` bytes
    /// in.
    #[inline]
    pub unsafe fn draw_elements(&self,
                                mode: PrimitiveType,
                                count: GLsizei,
                                index_type: IndexType,
                                offset: usize) {
        self.functions.glDrawElements(mode.into(),
                                      count,
                                      index_type.into(),
                                      marshal::offset_ptr(offset))
    }

    #[inline]
    pub unsafe fn finish(&self) {
        self.functions.glFinish()
    }

    #[inline]
    pub unsafe fn flush(&self) {
        self.functions.glFlush()
    }

    #[inline]
    pub unsafe fn front_face(&self, mode: FrontFace) {
        self.functions.glFrontFace(mode.into())
    }

    pub unsafe fn gen_textures(&self, count: usize) -> Vec<GLuint> {
        let mut textures = vec![0; count];
        self.functions.glGenTextures(count as GLsizei, textures.as_mut_ptr());
        textures
    }

    #[inline]
    pub unsafe fn gen_texture(&self) -> GLuint {
        let mut texture = 0;
        self.functions.glGenTextures(1, &mut texture);
        texture
    }

    #[inline]
    pub unsafe fn is_texture(&self, texture: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsTexture(texture))
    }

    #[inline]
    pub unsafe fn get_boolean(&self, pname: GLenum) -> bool {
        let mut value = gl::FALSE;
        self.functions.glGetBooleanv(pname, &mut value);
        marshal::from_gl_bool(value)
    }

    #[inline]
    pub unsafe fn get_booleanv(&self, pname: GLenum, values: &mut [GLboolean]) {
        self.functions.glGetBooleanv(pname, values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_integer(&self, pname: GLenum) -> GLint {
        let mut value = 0;
        self.functions.glGetIntegerv(pname, &mut value);
        value
    }

    /// Reads a multi-valued integer state. `values` must be large enough for the whole state.
    #[inline]
    pub unsafe fn get_integerv(&self, pname: GLenum, values: &mut [GLint]) {
        self.functions.glGetIntegerv(pname, values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_float(&self, pname: GLenum) -> GLfloat {
        let mut value = 0.0;
        self.functions.glGetFloatv(pname, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_floatv(&self, pname: GLenum, values: &mut [GLfloat]) {
        self.functions.glGetFloatv(pname, values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_double(&self, pname: GLenum) -> GLdouble {
        let mut value = 0.0;
        self.functions.glGetDoublev(pname, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_doublev(&self, pname: GLenum, values: &mut [GLdouble]) {
        self.functions.glGetDoublev(pname, values.as_mut_ptr())
    }

    /// Pops the oldest error flag. `None` means `GL_NO_ERROR`.
    #[inline]
    pub unsafe fn get_error(&self) -> Option<GLError> {
        GLError::from_raw(self.functions.glGetError())
    }

    /// `GL_CONTEXT_FLAGS`, available from GL 3.0.
    #[inline]
    pub unsafe fn get_context_flags(&self) -> ContextFlags {
        ContextFlags::from_bits_retain(self.get_integer(gl::CONTEXT_FLAGS) as GLbitfield)
    }

    #[inline]
    pub unsafe fn get_string(&self, name: StringName) -> Option<String> {
        marshal::read_string(self.functions.glGetString(name.into()))
    }

    pub unsafe fn get_tex_image<T>(&self,
                                   target: TextureTarget,
                                   level: GLint,
                                   format: PixelFormat,
                                   pixel_type: PixelType,
                                   pixels: &mut [T])
                                   where T: Pod {
        self.functions.glGetTexImage(target.into(),
                                     level,
                                     format.into(),
                                     pixel_type.into(),
                                     pixels.as_mut_ptr() as *mut c_void)
    }

    #[inline]
    pub unsafe fn get_tex_level_parameter_i(&self,
                                            target: TextureTarget,
                                            level: GLint,
                                            pname: TextureLevelParameter)
                                            -> GLint {
        let mut value = 0;
        self.functions.glGetTexLevelParameteriv(target.into(), level, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_tex_level_parameter_f(&self,
                                            target: TextureTarget,
                                            level: GLint,
                                            pname: TextureLevelParameter)
                                            -> GLfloat {
        let mut value = 0.0;
        self.functions.glGetTexLevelParameterfv(target.into(), level, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_tex_parameter_i(&self, target: TextureTarget, pname: TextureParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetTexParameteriv(target.into(), pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_tex_parameter_iv(&self,
                                       target: TextureTarget,
                                       pname: TextureParameter,
                                       values: &mut [GLint]) {
        self.functions.glGetTexParameteriv(target.into(), pname.into(), values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_tex_parameter_fv(&self,
                                       target: TextureTarget,
                                       pname: TextureParameter,
                                       values: &mut [GLfloat]) {
        self.functions.glGetTexParameterfv(target.into(), pname.into(), values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn hint(&self, target: HintTarget, mode: HintMode) {
        self.functions.glHint(target.into(), mode.into())
    }

    #[inline]
    pub unsafe fn line_width(&self, width: f32) {
        self.functions.glLineWidth(width)
    }

    #[inline]
    pub unsafe fn logic_op(&self, op: LogicOp) {
        self.functions.glLogicOp(op.into())
    }

    #[inline]
    pub unsafe fn pixel_store_i(&self, pname: PixelStoreParameter, value: GLint) {
        self.functions.glPixelStorei(pname.into(), value)
    }

    #[inline]
    pub unsafe fn pixel_store_f(&self, pname: PixelStoreParameter, value: GLfloat) {
        self.functions.glPixelStoref(pname.into(), value)
    }

    #[inline]
    pub unsafe fn point_size(&self, size: f32) {
        self.functions.glPointSize(size)
    }

    #[inline]
    pub unsafe fn polygon_mode(&self, face: Face, mode: PolygonMode) {
        self.functions.glPolygonMode(face.into(), mode.into())
    }

    #[inline]
    pub unsafe fn polygon_offset(&self, factor: f32, units: f32) {
        self.functions.glPolygonOffset(factor, units)
    }

    #[inline]
    pub unsafe fn read_buffer(&self, source: DrawBufferMode) {
        self.functions.glReadBuffer(source.into())
    }

    /// Reads a block of pixels from the read framebuffer into client memory.
    pub unsafe fn read_pixels<T>(&self,
                                 area: Rect<i32>,
                                 format: PixelFormat,
                                 pixel_type: PixelType,
                                 pixels: &mut [T])
                                 where T: Pod {
        self.functions.glReadPixels(area.origin.x,
                                    area.origin.y,
                                    area.size.width,
                                    area.size.height,
                                    format.into(),
                                    pixel_type.into(),
                                    pixels.as_mut_ptr() as *mut c_void)
    }

    /// Reads a block of pixels into the bound pixel pack buffer, `offset` bytes in.
    pub unsafe fn read_pixels_to_buffer(&self,
                                        area: Rect<i32>,
                                        format: PixelFormat,
                                        pixel_type: PixelType,
                                        offset: usize) {
        self.functions.glReadPixels(area.origin.x,
                                    area.origin.y,
                                    area.size.width,
                                    area.size.height,
                                    format.into(),
                                    pixel_type.into(),
                                    marshal::offset_ptr(offset) as *mut c_void)
    }

    #[inline]
    pub unsafe fn scissor(&self, area: Rect<i32>) {
        self.functions.glScissor(area.origin.x, area.origin.y, area.size.width, area.size.height)
    }

    #[inline]
    pub unsafe fn stencil_func(&self, func: CompareFunc, reference: GLint, mask: GLuint) {
        self.functions.glStencilFunc(func.into(), reference, mask)
    }

    #[inline]
    pub unsafe fn stencil_mask(&self, mask: GLuint) {
        self.functions.glStencilMask(mask)
    }

    #[inline]
    pub unsafe fn stencil_op(&self, stencil_fail: StencilOp, depth_fail: StencilOp, pass: StencilOp) {
        self.functions.glStencilOp(stencil_fail.into(), depth_fail.into(), pass.into())
    }

    pub unsafe fn tex_image_1d<T>(&self,
                                  target: TextureTarget,
                                  level: GLint,
                                  internal_format: InternalFormat,
                                  width: GLsizei,
                                  format: PixelFormat,
                                  pixel_type: PixelType,
                                  pixels: Option<&[T]>)
                                  where T: Pod {
        self.functions.glTexImage1D(target.into(),
                                    level,
                                    internal_format as GLint,
                                    width,
                                    0,
                                    format.into(),
                                    pixel_type.into(),
                                    marshal::data_ptr(pixels))
    }

    /// Specifies a 2D texture image. `None` allocates storage without uploading anything.
    pub unsafe fn tex_image_2d<T>(&self,
                                  target: TextureTarget,
                                  level: GLint,
                                  internal_format: InternalFormat,
                                  size: Size2D<i32>,
                                  format: PixelFormat,
                                  pixel_type: PixelType,
                                  pixels: Option<&[T]>)
                                  where T: Pod {
        self.functions.glTexImage2D(target.into(),
                                    level,
                                    internal_format as GLint,
                                    size.width,
                                    size.height,
                                    0,
                                    format.into(),
                                    pixel_type.into(),
                                    marshal::data_ptr(pixels))
    }

    pub unsafe fn tex_sub_image_1d<T>(&self,
                                      target: TextureTarget,
                                      level: GLint,
                                      x_offset: GLint,
                                      width: GLsizei,
                                      format: PixelFormat,
                                      pixel_type: PixelType,
                                      pixels: &[T])
                                      where T: Pod {
        self.functions.glTexSubImage1D(target.into(),
                                       level,
                                       x_offset,
                                       width,
                                       format.into(),
                                       pixel_type.into(),
                                       pixels.as_ptr() as *const c_void)
    }

    pub unsafe fn tex_sub_image_2d<T>(&self,
                                      target: TextureTarget,
                                      level: GLint,
                                      area: Rect<i32>,
                                      format: PixelFormat,
                                      pixel_type: PixelType,
                                      pixels: &[T])
                                      where T: Pod {
        self.functions.glTexSubImage2D(target.into(),
                                       level,
                                       area.origin.x,
                                       area.origin.y,
                                       area.size.width,
                                       area.size.height,
                                       format.into(),
                                       pixel_type.into(),
                                       pixels.as_ptr() as *const c_void)
    }

    #[inline]
    pub unsafe fn tex_parameter_i(&self, target: TextureTarget, pname: TextureParameter, value: GLint) {
        self.functions.glTexParameteri(target.into(), pname.into(), value)
    }

    #[inline]
    pub unsafe fn tex_parameter_f(&self, target: TextureTarget, pname: TextureParameter, value: GLfloat) {
        self.functions.glTexParameterf(target.into(), pname.into(), value)
    }

    #[inline]
    pub unsafe fn tex_parameter_iv(&self,
                                   target: TextureTarget,
                                   pname: TextureParameter,
                                   values: &[GLint]) {
        self.functions.glTexParameteriv(target.into(), pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn tex_parameter_fv(&self,
                                   target: TextureTarget,
                                   pname: TextureParameter,
                                   values: &[GLfloat]) {
        self.functions.glTexParameterfv(target.into(), pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn viewport(&self, area: Rect<i32>) {
        self.functions.glViewport(area.origin.x, area.origin.y, area.size.width, area.size.height)
    }

    pub unsafe fn get_viewport(&self) -> Rect<i32> {
        let mut values = [0; 4];
        self.get_integerv(gl::VIEWPORT, &mut values);
        Rect::new(Point2D::new(values[0], values[1]), Size2D::new(values[2], values[3]))
    }

    pub unsafe fn get_scissor_box(&self) -> Rect<i32> {
        let mut values = [0; 4];
        self.get_integerv(gl::SCISSOR_BOX, &mut values);
        Rect::new(Point2D::new(values[0], values[1]), Size2D::new(values[2], values[3]))
    }
}
