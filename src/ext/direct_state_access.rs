// glbind/src/ext/direct_state_access.rs
//
//! `GL_ARB_direct_state_access`: creating and editing objects by name, without binding them.

use crate::enums::{BlitFilter, BufferMask, BufferParameter, BufferStorageFlags, BufferUsage};
use crate::enums::{DrawBufferMode, FramebufferAttachment, FramebufferStatus, FramebufferTarget};
use crate::enums::{InternalFormat, MapAccess, PixelFormat, PixelType, QueryTarget};
use crate::enums::{TextureLevelParameter, TextureParameter, TextureTarget, VertexAttribType};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use bytemuck::Pod;
use euclid::default::{Box2D, Box3D, Rect, Size2D, Size3D};
use std::os::raw::c_void;
use std::ptr;

gl_functions! {
    pub struct ARBDirectStateAccessFunctions {
        fn glCreateBuffers(n: GLsizei, buffers: *mut GLuint);
        fn glNamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void,
                                flags: GLbitfield) = ["glNamedBufferStorageEXT"];
        fn glNamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void,
                             usage: GLenum) = ["glNamedBufferDataEXT"];
        fn glNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr,
                                data: *const c_void) = ["glNamedBufferSubDataEXT"];
        fn glCopyNamedBufferSubData(readBuffer: GLuint, writeBuffer: GLuint,
                                    readOffset: GLintptr, writeOffset: GLintptr,
                                    size: GLsizeiptr) = ["glNamedCopyBufferSubDataEXT"];
        fn glMapNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr,
                                 access: GLbitfield) -> *mut c_void
            = ["glMapNamedBufferRangeEXT"];
        fn glUnmapNamedBuffer(buffer: GLuint) -> GLboolean = ["glUnmapNamedBufferEXT"];
        fn glFlushMappedNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr)
            = ["glFlushMappedNamedBufferRangeEXT"];
        fn glGetNamedBufferParameteriv(buffer: GLuint, pname: GLenum, params: *mut GLint)
            = ["glGetNamedBufferParameterivEXT"];
        fn glGetNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr,
                                   data: *mut c_void) = ["glGetNamedBufferSubDataEXT"];

        fn glCreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        fn glNamedFramebufferTexture(framebuffer: GLuint, attachment: GLenum, texture: GLuint,
                                     level: GLint) = ["glNamedFramebufferTextureEXT"];
        fn glNamedFramebufferTextureLayer(framebuffer: GLuint, attachment: GLenum,
                                          texture: GLuint, level: GLint, layer: GLint)
            = ["glNamedFramebufferTextureLayerEXT"];
        fn glNamedFramebufferRenderbuffer(framebuffer: GLuint, attachment: GLenum,
                                          renderbuffertarget: GLenum, renderbuffer: GLuint)
            = ["glNamedFramebufferRenderbufferEXT"];
        fn glNamedFramebufferDrawBuffers(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum)
            = ["glFramebufferDrawBuffersEXT"];
        fn glNamedFramebufferReadBuffer(framebuffer: GLuint, src: GLenum)
            = ["glFramebufferReadBufferEXT"];
        fn glClearNamedFramebufferfv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
                                     value: *const GLfloat);
        fn glClearNamedFramebufferfi(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint,
                                     depth: GLfloat, stencil: GLint);
        fn glBlitNamedFramebuffer(readFramebuffer: GLuint, drawFramebuffer: GLuint,
                                  srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint,
                                  dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint,
                                  mask: GLbitfield, filter: GLenum);
        fn glCheckNamedFramebufferStatus(framebuffer: GLuint, target: GLenum) -> GLenum
            = ["glCheckNamedFramebufferStatusEXT"];

        fn glCreateRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        fn glNamedRenderbufferStorage(renderbuffer: GLuint, internalformat: GLenum,
                                      width: GLsizei, height: GLsizei)
            = ["glNamedRenderbufferStorageEXT"];
        fn glNamedRenderbufferStorageMultisample(renderbuffer: GLuint, samples: GLsizei,
                                                 internalformat: GLenum, width: GLsizei,
                                                 height: GLsizei)
            = ["glNamedRenderbufferStorageMultisampleEXT"];

        fn glCreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint);
        fn glTextureStorage2D(texture: GLuint, levels: GLsizei, internalformat: GLenum,
                              width: GLsizei, height: GLsizei);
        fn glTextureStorage3D(texture: GLuint, levels: GLsizei, internalformat: GLenum,
                              width: GLsizei, height: GLsizei, depth: GLsizei);
        fn glTextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                               width: GLsizei, height: GLsizei, format: GLenum, gltype: GLenum,
                               pixels: *const c_void);
        fn glTextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                               zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
                               format: GLenum, gltype: GLenum, pixels: *const c_void);
        fn glTextureParameteri(texture: GLuint, pname: GLenum, param: GLint);
        fn glTextureParameterf(texture: GLuint, pname: GLenum, param: GLfloat);
        fn glGenerateTextureMipmap(texture: GLuint);
        fn glBindTextureUnit(unit: GLuint, texture: GLuint);
        fn glGetTextureImage(texture: GLuint, level: GLint, format: GLenum, gltype: GLenum,
                             bufSize: GLsizei, pixels: *mut c_void);
        fn glGetTextureLevelParameteriv(texture: GLuint, level: GLint, pname: GLenum,
                                        params: *mut GLint);

        fn glCreateVertexArrays(n: GLsizei, arrays: *mut GLuint);
        fn glVertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint);
        fn glVertexArrayVertexBuffer(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint,
                                     offset: GLintptr, stride: GLsizei);
        fn glEnableVertexArrayAttrib(vaobj: GLuint, index: GLuint)
            = ["glEnableVertexArrayAttribEXT"];
        fn glDisableVertexArrayAttrib(vaobj: GLuint, index: GLuint)
            = ["glDisableVertexArrayAttribEXT"];
        fn glVertexArrayAttribFormat(vaobj: GLuint, attribindex: GLuint, size: GLint,
                                     gltype: GLenum, normalized: GLboolean,
                                     relativeoffset: GLuint);
        fn glVertexArrayAttribIFormat(vaobj: GLuint, attribindex: GLuint, size: GLint,
                                      gltype: GLenum, relativeoffset: GLuint);
        fn glVertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint,
                                      bindingindex: GLuint);
        fn glVertexArrayBindingDivisor(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);

        fn glCreateSamplers(n: GLsizei, samplers: *mut GLuint);
        fn glCreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
        fn glCreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint);
        fn glCreateTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
    }
}

gl_extension! {
    /// Direct state access for buffers, framebuffers, renderbuffers, textures, vertex arrays and
    /// object creation.
    ///
    /// Entry points are resolved under their core names; the `EXT_direct_state_access`
    /// equivalents are only tried where the signatures agree.
    pub struct ARBDirectStateAccess(ARBDirectStateAccessFunctions) {
        name: "GL_ARB_direct_state_access",
        core: Some(GLVersion::new(4, 5)),
        extensions: ["GL_ARB_direct_state_access"],
    }
}

// Generates `count` object names through one of the `glCreate*` entry points.
macro_rules! create_names {
    ($functions:expr, $func:ident, $count:expr $(, $arg:expr)?) => {{
        let mut names = vec![0; $count];
        $functions.$func($($arg,)? $count as GLsizei, names.as_mut_ptr());
        names
    }};
}

#[allow(clippy::missing_safety_doc)]
impl ARBDirectStateAccess {
    pub unsafe fn create_buffers(&self, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateBuffers, count)
    }

    #[inline]
    pub unsafe fn create_buffer(&self) -> GLuint {
        let mut buffer = 0;
        self.functions.glCreateBuffers(1, &mut buffer);
        buffer
    }

    pub unsafe fn named_buffer_storage<T>(&self, buffer: GLuint, data: &[T], flags: BufferStorageFlags)
                                          where T: Pod {
        self.functions.glNamedBufferStorage(buffer,
                                            marshal::byte_len(data),
                                            data.as_ptr() as *const c_void,
                                            flags.bits())
    }

    #[inline]
    pub unsafe fn named_buffer_storage_uninit(&self, buffer: GLuint, size: usize, flags: BufferStorageFlags) {
        self.functions.glNamedBufferStorage(buffer, size as GLsizeiptr, ptr::null(), flags.bits())
    }

    pub unsafe fn named_buffer_data<T>(&self, buffer: GLuint, data: &[T], usage: BufferUsage) where T: Pod {
        self.functions.glNamedBufferData(buffer,
                                         marshal::byte_len(data),
                                         data.as_ptr() as *const c_void,
                                         usage.into())
    }

    pub unsafe fn named_buffer_sub_data<T>(&self, buffer: GLuint, offset: usize, data: &[T])
                                           where T: Pod {
        self.functions.glNamedBufferSubData(buffer,
                                            offset as GLintptr,
                                            marshal::byte_len(data),
                                            data.as_ptr() as *const c_void)
    }

    #[inline]
    pub unsafe fn copy_named_buffer_sub_data(&self,
                                             read_buffer: GLuint,
                                             write_buffer: GLuint,
                                             read_offset: usize,
                                             write_offset: usize,
                                             size: usize) {
        self.functions.glCopyNamedBufferSubData(read_buffer,
                                                write_buffer,
                                                read_offset as GLintptr,
                                                write_offset as GLintptr,
                                                size as GLsizeiptr)
    }

    /// Returns null on failure.
    #[inline]
    pub unsafe fn map_named_buffer_range(&self,
                                         buffer: GLuint,
                                         offset: usize,
                                         length: usize,
                                         access: MapAccess)
                                         -> *mut c_void {
        self.functions.glMapNamedBufferRange(buffer,
                                             offset as GLintptr,
                                             length as GLsizeiptr,
                                             access.bits())
    }

    #[inline]
    pub unsafe fn unmap_named_buffer(&self, buffer: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glUnmapNamedBuffer(buffer))
    }

    #[inline]
    pub unsafe fn flush_mapped_named_buffer_range(&self, buffer: GLuint, offset: usize, length: usize) {
        self.functions.glFlushMappedNamedBufferRange(buffer, offset as GLintptr, length as GLsizeiptr)
    }

    #[inline]
    pub unsafe fn get_named_buffer_parameter_i(&self, buffer: GLuint, pname: BufferParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetNamedBufferParameteriv(buffer, pname.into(), &mut value);
        value
    }

    pub unsafe fn get_named_buffer_sub_data<T>(&self, buffer: GLuint, offset: usize, data: &mut [T])
                                               where T: Pod {
        self.functions.glGetNamedBufferSubData(buffer,
                                               offset as GLintptr,
                                               marshal::byte_len(data),
                                               data.as_mut_ptr() as *mut c_void)
    }

    pub unsafe fn create_framebuffers(&self, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateFramebuffers, count)
    }

    #[inline]
    pub unsafe fn create_framebuffer(&self) -> GLuint {
        let mut framebuffer = 0;
        self.functions.glCreateFramebuffers(1, &mut framebuffer);
        framebuffer
    }

    #[inline]
    pub unsafe fn named_framebuffer_texture(&self,
                                            framebuffer: GLuint,
                                            attachment: FramebufferAttachment,
                                            texture: GLuint,
                                            level: GLint) {
        self.functions.glNamedFramebufferTexture(framebuffer, attachment.into(), texture, level)
    }

    #[inline]
    pub unsafe fn named_framebuffer_texture_layer(&self,
                                                  framebuffer: GLuint,
                                                  attachment: FramebufferAttachment,
                                                  texture: GLuint,
                                                  level: GLint,
                                                  layer: GLint) {
        self.functions.glNamedFramebufferTextureLayer(framebuffer,
                                                      attachment.into(),
                                                      texture,
                                                      level,
                                                      layer)
    }

    #[inline]
    pub unsafe fn named_framebuffer_renderbuffer(&self,
                                                 framebuffer: GLuint,
                                                 attachment: FramebufferAttachment,
                                                 renderbuffer: GLuint) {
        self.functions.glNamedFramebufferRenderbuffer(framebuffer,
                                                      attachment.into(),
                                                      gl::RENDERBUFFER,
                                                      renderbuffer)
    }

    #[inline]
    pub unsafe fn named_framebuffer_draw_buffers(&self, framebuffer: GLuint, buffers: &[DrawBufferMode]) {
        self.functions.glNamedFramebufferDrawBuffers(framebuffer,
                                                     marshal::count(buffers),
                                                     buffers.as_ptr() as *const GLenum)
    }

    #[inline]
    pub unsafe fn named_framebuffer_read_buffer(&self, framebuffer: GLuint, source: DrawBufferMode) {
        self.functions.glNamedFramebufferReadBuffer(framebuffer, source.into())
    }

    #[inline]
    pub unsafe fn clear_named_framebuffer_color(&self,
                                                framebuffer: GLuint,
                                                draw_buffer: GLint,
                                                color: &[f32; 4]) {
        self.functions.glClearNamedFramebufferfv(framebuffer, gl::COLOR, draw_buffer, color.as_ptr())
    }

    #[inline]
    pub unsafe fn clear_named_framebuffer_depth_stencil(&self,
                                                        framebuffer: GLuint,
                                                        depth: f32,
                                                        stencil: GLint) {
        self.functions.glClearNamedFramebufferfi(framebuffer, gl::DEPTH_STENCIL, 0, depth, stencil)
    }

    pub unsafe fn blit_named_framebuffer(&self,
                                         read_framebuffer: GLuint,
                                         draw_framebuffer: GLuint,
                                         source: Box2D<i32>,
                                         destination: Box2D<i32>,
                                         mask: BufferMask,
                                         filter: BlitFilter) {
        self.functions.glBlitNamedFramebuffer(read_framebuffer,
                                              draw_framebuffer,
                                              source.min.x,
                                              source.min.y,
                                              source.max.x,
                                              source.max.y,
                                              destination.min.x,
                                              destination.min.y,
                                              destination.max.x,
                                              destination.max.y,
                                              mask.bits(),
                                              filter.into())
    }

    /// Returns `None` if the check itself failed.
    pub unsafe fn check_named_framebuffer_status(&self,
                                                 framebuffer: GLuint,
                                                 target: FramebufferTarget)
                                                 -> Option<FramebufferStatus> {
        FramebufferStatus::from_raw(self.functions.glCheckNamedFramebufferStatus(framebuffer, target.into()))
    }

    pub unsafe fn create_renderbuffers(&self, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateRenderbuffers, count)
    }

    #[inline]
    pub unsafe fn named_renderbuffer_storage(&self,
                                             renderbuffer: GLuint,
                                             internal_format: InternalFormat,
                                             size: Size2D<i32>) {
        self.functions.glNamedRenderbufferStorage(renderbuffer,
                                                  internal_format.into(),
                                                  size.width,
                                                  size.height)
    }

    #[inline]
    pub unsafe fn named_renderbuffer_storage_multisample(&self,
                                                         renderbuffer: GLuint,
                                                         samples: GLsizei,
                                                         internal_format: InternalFormat,
                                                         size: Size2D<i32>) {
        self.functions.glNamedRenderbufferStorageMultisample(renderbuffer,
                                                             samples,
                                                             internal_format.into(),
                                                             size.width,
                                                             size.height)
    }

    pub unsafe fn create_textures(&self, target: TextureTarget, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateTextures, count, target.into())
    }

    #[inline]
    pub unsafe fn create_texture(&self, target: TextureTarget) -> GLuint {
        let mut texture = 0;
        self.functions.glCreateTextures(target.into(), 1, &mut texture);
        texture
    }

    #[inline]
    pub unsafe fn texture_storage_2d(&self,
                                     texture: GLuint,
                                     levels: GLsizei,
                                     internal_format: InternalFormat,
                                     size: Size2D<i32>) {
        self.functions.glTextureStorage2D(texture, levels, internal_format.into(), size.width, size.height)
    }

    #[inline]
    pub unsafe fn texture_storage_3d(&self,
                                     texture: GLuint,
                                     levels: GLsizei,
                                     internal_format: InternalFormat,
                                     size: Size3D<i32>) {
        self.functions.glTextureStorage3D(texture,
                                          levels,
                                          internal_format.into(),
                                          size.width,
                                          size.height,
                                          size.depth)
    }

    pub unsafe fn texture_sub_image_2d<T>(&self,
                                          texture: GLuint,
                                          level: GLint,
                                          area: Rect<i32>,
                                          format: PixelFormat,
                                          pixel_type: PixelType,
                                          pixels: &[T])
                                          where T: Pod {
        self.functions.glTextureSubImage2D(texture,
                                           level,
                                           area.origin.x,
                                           area.origin.y,
                                           area.size.width,
                                           area.size.height,
                                           format.into(),
                                           pixel_type.into(),
                                           pixels.as_ptr() as *const c_void)
    }

    pub unsafe fn texture_sub_image_3d<T>(&self,
                                          texture: GLuint,
                                          level: GLint,
                                          region: Box3D<i32>,
                                          format: PixelFormat,
                                          pixel_type: PixelType,
                                          pixels: &[T])
                                          where T: Pod {
        let size = region.size();
        self.functions.glTextureSubImage3D(texture,
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

    #[inline]
    pub unsafe fn texture_parameter_i(&self, texture: GLuint, pname: TextureParameter, value: GLint) {
        self.functions.glTextureParameteri(texture, pname.into(), value)
    }

    #[inline]
    pub unsafe fn texture_parameter_f(&self, texture: GLuint, pname: TextureParameter, value: GLfloat) {
        self.functions.glTextureParameterf(texture, pname.into(), value)
    }

    #[inline]
    pub unsafe fn generate_texture_mipmap(&self, texture: GLuint) {
        self.functions.glGenerateTextureMipmap(texture)
    }

    /// Binds `texture` to unit `unit` (an index) under the texture's own target.
    #[inline]
    pub unsafe fn bind_texture_unit(&self, unit: GLuint, texture: GLuint) {
        self.functions.glBindTextureUnit(unit, texture)
    }

    pub unsafe fn get_texture_image<T>(&self,
                                       texture: GLuint,
                                       level: GLint,
                                       format: PixelFormat,
                                       pixel_type: PixelType,
                                       pixels: &mut [T])
                                       where T: Pod {
        self.functions.glGetTextureImage(texture,
                                         level,
                                         format.into(),
                                         pixel_type.into(),
                                         marshal::byte_len(pixels) as GLsizei,
                                         pixels.as_mut_ptr() as *mut c_void)
    }

    #[inline]
    pub unsafe fn get_texture_level_parameter_i(&self,
                                                texture: GLuint,
                                                level: GLint,
                                                pname: TextureLevelParameter)
                                                -> GLint {
        let mut value = 0;
        self.functions.glGetTextureLevelParameteriv(texture, level, pname.into(), &mut value);
        value
    }

    pub unsafe fn create_vertex_arrays(&self, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateVertexArrays, count)
    }

    #[inline]
    pub unsafe fn create_vertex_array(&self) -> GLuint {
        let mut array = 0;
        self.functions.glCreateVertexArrays(1, &mut array);
        array
    }

    #[inline]
    pub unsafe fn vertex_array_element_buffer(&self, array: GLuint, buffer: GLuint) {
        self.functions.glVertexArrayElementBuffer(array, buffer)
    }

    #[inline]
    pub unsafe fn vertex_array_vertex_buffer(&self,
                                             array: GLuint,
                                             binding: GLuint,
                                             buffer: GLuint,
                                             offset: usize,
                                             stride: GLsizei) {
        self.functions.glVertexArrayVertexBuffer(array, binding, buffer, offset as GLintptr, stride)
    }

    #[inline]
    pub unsafe fn enable_vertex_array_attrib(&self, array: GLuint, index: GLuint) {
        self.functions.glEnableVertexArrayAttrib(array, index)
    }

    #[inline]
    pub unsafe fn disable_vertex_array_attrib(&self, array: GLuint, index: GLuint) {
        self.functions.glDisableVertexArrayAttrib(array, index)
    }

    #[inline]
    pub unsafe fn vertex_array_attrib_format(&self,
                                             array: GLuint,
                                             index: GLuint,
                                             size: GLint,
                                             attrib_type: VertexAttribType,
                                             normalized: bool,
                                             relative_offset: GLuint) {
        self.functions.glVertexArrayAttribFormat(array,
                                                 index,
                                                 size,
                                                 attrib_type.into(),
                                                 marshal::gl_bool(normalized),
                                                 relative_offset)
    }

    #[inline]
    pub unsafe fn vertex_array_attrib_i_format(&self,
                                               array: GLuint,
                                               index: GLuint,
                                               size: GLint,
                                               attrib_type: VertexAttribType,
                                               relative_offset: GLuint) {
        self.functions.glVertexArrayAttribIFormat(array, index, size, attrib_type.into(), relative_offset)
    }

    #[inline]
    pub unsafe fn vertex_array_attrib_binding(&self, array: GLuint, index: GLuint, binding: GLuint) {
        self.functions.glVertexArrayAttribBinding(array, index, binding)
    }

    #[inline]
    pub unsafe fn vertex_array_binding_divisor(&self, array: GLuint, binding: GLuint, divisor: GLuint) {
        self.functions.glVertexArrayBindingDivisor(array, binding, divisor)
    }

    pub unsafe fn create_samplers(&self, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateSamplers, count)
    }

    pub unsafe fn create_program_pipelines(&self, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateProgramPipelines, count)
    }

    pub unsafe fn create_queries(&self, target: QueryTarget, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateQueries, count, target.into())
    }

    pub unsafe fn create_transform_feedbacks(&self, count: usize) -> Vec<GLuint> {
        create_names!(self.functions, glCreateTransformFeedbacks, count)
    }
}
