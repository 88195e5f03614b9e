// glbind/src/ext/v42.rs
//
//! Extensions promoted to core in OpenGL 4.2.

use crate::enums::{IndexType, InternalFormat, MemoryBarrier, PrimitiveType, TextureTarget};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use euclid::default::{Size2D, Size3D};
use std::os::raw::c_void;

gl_functions! {
    pub struct ARBShaderAtomicCountersFunctions {
        fn glGetActiveAtomicCounterBufferiv(program: GLuint, bufferIndex: GLuint, pname: GLenum,
                                            params: *mut GLint);
    }
}

gl_extension! {
    pub struct ARBShaderAtomicCounters(ARBShaderAtomicCountersFunctions) {
        name: "GL_ARB_shader_atomic_counters",
        core: Some(GLVersion::new(4, 2)),
        extensions: ["GL_ARB_shader_atomic_counters"],
    }
}

gl_enum! {
    pub enum AtomicCounterBufferParameter {
        Binding = gl::ATOMIC_COUNTER_BUFFER_BINDING,
        DataSize = gl::ATOMIC_COUNTER_BUFFER_DATA_SIZE,
        ActiveAtomicCounters = gl::ATOMIC_COUNTER_BUFFER_ACTIVE_ATOMIC_COUNTERS,
        ActiveAtomicCounterIndices = gl::ATOMIC_COUNTER_BUFFER_ACTIVE_ATOMIC_COUNTER_INDICES,
        ReferencedByVertexShader = gl::ATOMIC_COUNTER_BUFFER_REFERENCED_BY_VERTEX_SHADER,
        ReferencedByFragmentShader = gl::ATOMIC_COUNTER_BUFFER_REFERENCED_BY_FRAGMENT_SHADER,
        ReferencedByComputeShader = gl::ATOMIC_COUNTER_BUFFER_REFERENCED_BY_COMPUTE_SHADER,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBShaderAtomicCounters {
    #[inline]
    pub unsafe fn get_active_atomic_counter_buffer_i(&self,
                                                     program: GLuint,
                                                     buffer_index: GLuint,
                                                     pname: AtomicCounterBufferParameter)
                                                     -> GLint {
        let mut value = 0;
        self.functions.glGetActiveAtomicCounterBufferiv(program, buffer_index, pname.into(), &mut value);
        value
    }
}

gl_functions! {
    pub struct ARBShaderImageLoadStoreFunctions {
        fn glBindImageTexture(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean,
                              layer: GLint, access: GLenum, format: GLenum)
            = ["glBindImageTextureEXT"];
        fn glMemoryBarrier(barriers: GLbitfield) = ["glMemoryBarrierEXT"];
    }
}

gl_extension! {
    pub struct ARBShaderImageLoadStore(ARBShaderImageLoadStoreFunctions) {
        name: "GL_ARB_shader_image_load_store",
        core: Some(GLVersion::new(4, 2)),
        extensions: ["GL_ARB_shader_image_load_store", "GL_EXT_shader_image_load_store"],
    }
}

gl_enum! {
    pub enum ImageAccess {
        ReadOnly = gl::READ_ONLY,
        WriteOnly = gl::WRITE_ONLY,
        ReadWrite = gl::READ_WRITE,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBShaderImageLoadStore {
    /// Binds a texture level to image unit `unit`. `layer` selects a single layer of an array,
    /// cube or 3D texture; `None` binds every layer.
    pub unsafe fn bind_image_texture(&self,
                                     unit: GLuint,
                                     texture: GLuint,
                                     level: GLint,
                                     layer: Option<GLint>,
                                     access: ImageAccess,
                                     format: InternalFormat) {
        self.functions.glBindImageTexture(unit,
                                          texture,
                                          level,
                                          marshal::gl_bool(layer.is_none()),
                                          layer.unwrap_or(0),
                                          access.into(),
                                          format.into())
    }

    #[inline]
    pub unsafe fn memory_barrier(&self, barriers: MemoryBarrier) {
        self.functions.glMemoryBarrier(barriers.bits())
    }
}

gl_functions! {
    pub struct ARBTextureStorageFunctions {
        fn glTexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum,
                          width: GLsizei) = ["glTexStorage1DEXT"];
        fn glTexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum,
                          width: GLsizei, height: GLsizei) = ["glTexStorage2DEXT"];
        fn glTexStorage3D(target: GLenum, levels: GLsizei, internalformat: GLenum,
                          width: GLsizei, height: GLsizei, depth: GLsizei)
            = ["glTexStorage3DEXT"];
    }
}

gl_extension! {
    /// Immutable texture storage.
    pub struct ARBTextureStorage(ARBTextureStorageFunctions) {
        name: "GL_ARB_texture_storage",
        core: Some(GLVersion::new(4, 2)),
        extensions: ["GL_ARB_texture_storage"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTextureStorage {
    #[inline]
    pub unsafe fn tex_storage_1d(&self,
                                 target: TextureTarget,
                                 levels: GLsizei,
                                 internal_format: InternalFormat,
                                 width: GLsizei) {
        self.functions.glTexStorage1D(target.into(), levels, internal_format.into(), width)
    }

    #[inline]
    pub unsafe fn tex_storage_2d(&self,
                                 target: TextureTarget,
                                 levels: GLsizei,
                                 internal_format: InternalFormat,
                                 size: Size2D<i32>) {
        self.functions.glTexStorage2D(target.into(),
                                      levels,
                                      internal_format.into(),
                                      size.width,
                                      size.height)
    }

    #[inline]
    pub unsafe fn tex_storage_3d(&self,
                                 target: TextureTarget,
                                 levels: GLsizei,
                                 internal_format: InternalFormat,
                                 size: Size3D<i32>) {
        self.functions.glTexStorage3D(target.into(),
                                      levels,
                                      internal_format.into(),
                                      size.width,
                                      size.height,
                                      size.depth)
    }
}

gl_functions! {
    pub struct ARBTransformFeedbackInstancedFunctions {
        fn glDrawTransformFeedbackInstanced(mode: GLenum, id: GLuint, instancecount: GLsizei);
        fn glDrawTransformFeedbackStreamInstanced(mode: GLenum, id: GLuint, stream: GLuint,
                                                  instancecount: GLsizei);
    }
}

gl_extension! {
    pub struct ARBTransformFeedbackInstanced(ARBTransformFeedbackInstancedFunctions) {
        name: "GL_ARB_transform_feedback_instanced",
        core: Some(GLVersion::new(4, 2)),
        extensions: ["GL_ARB_transform_feedback_instanced"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTransformFeedbackInstanced {
    #[inline]
    pub unsafe fn draw_transform_feedback_instanced(&self,
                                                    mode: PrimitiveType,
                                                    id: GLuint,
                                                    instance_count: GLsizei) {
        self.functions.glDrawTransformFeedbackInstanced(mode.into(), id, instance_count)
    }

    #[inline]
    pub unsafe fn draw_transform_feedback_stream_instanced(&self,
                                                           mode: PrimitiveType,
                                                           id: GLuint,
                                                           stream: GLuint,
                                                           instance_count: GLsizei) {
        self.functions.glDrawTransformFeedbackStreamInstanced(mode.into(), id, stream, instance_count)
    }
}

gl_functions! {
    pub struct ARBBaseInstanceFunctions {
        fn glDrawArraysInstancedBaseInstance(mode: GLenum, first: GLint, count: GLsizei,
                                             instancecount: GLsizei, baseinstance: GLuint)
            = ["glDrawArraysInstancedBaseInstanceEXT"];
        fn glDrawElementsInstancedBaseInstance(mode: GLenum, count: GLsizei, gltype: GLenum,
                                               indices: *const c_void, instancecount: GLsizei,
                                               baseinstance: GLuint)
            = ["glDrawElementsInstancedBaseInstanceEXT"];
        fn glDrawElementsInstancedBaseVertexBaseInstance(mode: GLenum, count: GLsizei,
                                                         gltype: GLenum, indices: *const c_void,
                                                         instancecount: GLsizei,
                                                         basevertex: GLint,
                                                         baseinstance: GLuint)
            = ["glDrawElementsInstancedBaseVertexBaseInstanceEXT"];
    }
}

gl_extension! {
    pub struct ARBBaseInstance(ARBBaseInstanceFunctions) {
        name: "GL_ARB_base_instance",
        core: Some(GLVersion::new(4, 2)),
        extensions: ["GL_ARB_base_instance"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBBaseInstance {
    #[inline]
    pub unsafe fn draw_arrays_instanced_base_instance(&self,
                                                      mode: PrimitiveType,
                                                      first: GLint,
                                                      count: GLsizei,
                                                      instance_count: GLsizei,
                                                      base_instance: GLuint) {
        self.functions.glDrawArraysInstancedBaseInstance(mode.into(),
                                                         first,
                                                         count,
                                                         instance_count,
                                                         base_instance)
    }

    #[inline]
    pub unsafe fn draw_elements_instanced_base_instance(&self,
                                                        mode: PrimitiveType,
                                                        count: GLsizei,
                                                        index_type: IndexType,
                                                        offset: usize,
                                                        instance_count: GLsizei,
                                                        base_instance: GLuint) {
        self.functions.glDrawElementsInstancedBaseInstance(mode.into(),
                                                           count,
                                                           index_type.into(),
                                                           marshal::offset_ptr(offset),
                                                           instance_count,
                                                           base_instance)
    }

    #[inline]
    pub unsafe fn draw_elements_instanced_base_vertex_base_instance(&self,
                                                                    mode: PrimitiveType,
                                                                    count: GLsizei,
                                                                    index_type: IndexType,
                                                                    offset: usize,
                                                                    instance_count: GLsizei,
                                                                    base_vertex: GLint,
                                                                    base_instance: GLuint) {
        self.functions.glDrawElementsInstancedBaseVertexBaseInstance(mode.into(),
                                                                     count,
                                                                     index_type.into(),
                                                                     marshal::offset_ptr(offset),
                                                                     instance_count,
                                                                     base_vertex,
                                                                     base_instance)
    }
}

gl_functions! {
    pub struct ARBInternalformatQueryFunctions {
        fn glGetInternalformativ(target: GLenum, internalformat: GLenum, pname: GLenum,
                                 count: GLsizei, params: *mut GLint);
    }
}

gl_extension! {
    pub struct ARBInternalformatQuery(ARBInternalformatQueryFunctions) {
        name: "GL_ARB_internalformat_query",
        core: Some(GLVersion::new(4, 2)),
        extensions: ["GL_ARB_internalformat_query"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBInternalformatQuery {
    /// Writes up to `values.len()` results of an internal format query.
    #[inline]
    pub unsafe fn get_internalformat_iv(&self,
                                        target: TextureTarget,
                                        internal_format: InternalFormat,
                                        pname: GLenum,
                                        values: &mut [GLint]) {
        self.functions.glGetInternalformativ(target.into(),
                                             internal_format.into(),
                                             pname,
                                             marshal::count(values),
                                             values.as_mut_ptr())
    }

    /// Sample counts supported for multisample storage of `internal_format`, highest first.
    pub unsafe fn get_supported_sample_counts(&self,
                                              target: TextureTarget,
                                              internal_format: InternalFormat)
                                              -> Vec<GLint> {
        let mut count = 0;
        self.get_internalformat_iv(target,
                                   internal_format,
                                   gl::NUM_SAMPLE_COUNTS,
                                   std::slice::from_mut(&mut count));
        let mut samples = vec![0; count.max(0) as usize];
        if !samples.is_empty() {
            self.get_internalformat_iv(target, internal_format, gl::SAMPLES, &mut samples);
        }
        samples
    }
}
