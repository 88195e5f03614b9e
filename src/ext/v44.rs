// glbind/src/ext/v44.rs
//
//! Extensions promoted to core in OpenGL 4.4.

use crate::enums::{BufferStorageFlags, BufferTarget, IndexedBufferTarget, PixelFormat, PixelType};
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use bytemuck::Pod;
use euclid::default::Box3D;
use std::os::raw::c_void;
use std::ptr;

gl_functions! {
    pub struct ARBBufferStorageFunctions {
        fn glBufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void,
                           flags: GLbitfield) = ["glBufferStorageEXT"];
    }
}

gl_extension! {
    /// Immutable buffer storage.
    pub struct ARBBufferStorage(ARBBufferStorageFunctions) {
        name: "GL_ARB_buffer_storage",
        core: Some(GLVersion::new(4, 4)),
        extensions: ["GL_ARB_buffer_storage"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBBufferStorage {
    /// Creates an immutable data store for the bound buffer, initialized with `data`.
    pub unsafe fn buffer_storage<T>(&self, target: BufferTarget, data: &[T], flags: BufferStorageFlags)
                                    where T: Pod {
        self.functions.glBufferStorage(target.into(),
                                       marshal::byte_len(data),
                                       data.as_ptr() as *const c_void,
                                       flags.bits())
    }

    /// Creates an uninitialized immutable data store of `size` bytes.
    #[inline]
    pub unsafe fn buffer_storage_uninit(&self, target: BufferTarget, size: usize, flags: BufferStorageFlags) {
        self.functions.glBufferStorage(target.into(), size as GLsizeiptr, ptr::null(), flags.bits())
    }
}

gl_functions! {
    pub struct ARBClearTextureFunctions {
        fn glClearTexImage(texture: GLuint, level: GLint, format: GLenum, gltype: GLenum,
                           data: *const c_void) = ["glClearTexImageEXT"];
        fn glClearTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                              zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei,
                              format: GLenum, gltype: GLenum, data: *const c_void)
            = ["glClearTexSubImageEXT"];
    }
}

gl_extension! {
    pub struct ARBClearTexture(ARBClearTextureFunctions) {
        name: "GL_ARB_clear_texture",
        core: Some(GLVersion::new(4, 4)),
        extensions: ["GL_ARB_clear_texture"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBClearTexture {
    /// Fills a level of `texture` with `value`, one texel in `format`/`pixel_type`. `None`
    /// fills with zeros.
    pub unsafe fn clear_tex_image<T>(&self,
                                     texture: GLuint,
                                     level: GLint,
                                     format: PixelFormat,
                                     pixel_type: PixelType,
                                     value: Option<&T>)
                                     where T: Pod {
        let value = value.map_or(ptr::null(), |value| value as *const T as *const c_void);
        self.functions.glClearTexImage(texture, level, format.into(), pixel_type.into(), value)
    }

    pub unsafe fn clear_tex_sub_image<T>(&self,
                                         texture: GLuint,
                                         level: GLint,
                                         region: Box3D<i32>,
                                         format: PixelFormat,
                                         pixel_type: PixelType,
                                         value: Option<&T>)
                                         where T: Pod {
        let size = region.size();
        let value = value.map_or(ptr::null(), |value| value as *const T as *const c_void);
        self.functions.glClearTexSubImage(texture,
                                          level,
                                          region.min.x,
                                          region.min.y,
                                          region.min.z,
                                          size.width,
                                          size.height,
                                          size.depth,
                                          format.into(),
                                          pixel_type.into(),
                                          value)
    }
}

gl_functions! {
    pub struct ARBMultiBindFunctions {
        fn glBindBuffersBase(target: GLenum, first: GLuint, count: GLsizei,
                             buffers: *const GLuint);
        fn glBindBuffersRange(target: GLenum, first: GLuint, count: GLsizei,
                              buffers: *const GLuint, offsets: *const GLintptr,
                              sizes: *const GLsizeiptr);
        fn glBindTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn glBindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint);
        fn glBindImageTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn glBindVertexBuffers(first: GLuint, count: GLsizei, buffers: *const GLuint,
                               offsets: *const GLintptr, strides: *const GLsizei);
    }
}

gl_extension! {
    /// Binding ranges of consecutive binding points in one call. Zero names unbind.
    pub struct ARBMultiBind(ARBMultiBindFunctions) {
        name: "GL_ARB_multi_bind",
        core: Some(GLVersion::new(4, 4)),
        extensions: ["GL_ARB_multi_bind"],
    }
}

fn as_offsets(offsets: &[usize]) -> Vec<GLintptr> {
    offsets.iter().map(|&offset| offset as GLintptr).collect()
}

#[allow(clippy::missing_safety_doc)]
impl ARBMultiBind {
    #[inline]
    pub unsafe fn bind_buffers_base(&self, target: IndexedBufferTarget, first: GLuint, buffers: &[GLuint]) {
        self.functions.glBindBuffersBase(target.into(), first, marshal::count(buffers), buffers.as_ptr())
    }

    /// `buffers`, `offsets` and `sizes` must have the same length.
    pub unsafe fn bind_buffers_range(&self,
                                     target: IndexedBufferTarget,
                                     first: GLuint,
                                     buffers: &[GLuint],
                                     offsets: &[usize],
                                     sizes: &[usize]) {
        debug_assert!(buffers.len() == offsets.len() && buffers.len() == sizes.len());
        let offsets = as_offsets(offsets);
        let sizes: Vec<GLsizeiptr> = sizes.iter().map(|&size| size as GLsizeiptr).collect();
        self.functions.glBindBuffersRange(target.into(),
                                          first,
                                          marshal::count(buffers),
                                          buffers.as_ptr(),
                                          offsets.as_ptr(),
                                          sizes.as_ptr())
    }

    #[inline]
    pub unsafe fn bind_textures(&self, first: GLuint, textures: &[GLuint]) {
        self.functions.glBindTextures(first, marshal::count(textures), textures.as_ptr())
    }

    /// Unbinds `count` texture units starting at `first`.
    #[inline]
    pub unsafe fn unbind_textures(&self, first: GLuint, count: usize) {
        self.functions.glBindTextures(first, count as GLsizei, ptr::null())
    }

    #[inline]
    pub unsafe fn bind_samplers(&self, first: GLuint, samplers: &[GLuint]) {
        self.functions.glBindSamplers(first, marshal::count(samplers), samplers.as_ptr())
    }

    #[inline]
    pub unsafe fn bind_image_textures(&self, first: GLuint, textures: &[GLuint]) {
        self.functions.glBindImageTextures(first, marshal::count(textures), textures.as_ptr())
    }

    /// `buffers`, `offsets` and `strides` must have the same length.
    pub unsafe fn bind_vertex_buffers(&self,
                                      first: GLuint,
                                      buffers: &[GLuint],
                                      offsets: &[usize],
                                      strides: &[GLsizei]) {
        debug_assert!(buffers.len() == offsets.len() && buffers.len() == strides.len());
        let offsets = as_offsets(offsets);
        self.functions.glBindVertexBuffers(first,
                                           marshal::count(buffers),
                                           buffers.as_ptr(),
                                           offsets.as_ptr(),
                                           strides.as_ptr())
    }
}
