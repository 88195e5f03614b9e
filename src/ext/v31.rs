// glbind/src/ext/v31.rs
//
//! Extensions promoted to core in OpenGL 3.1.

use crate::enums::{BufferTarget, IndexType, IndexedBufferTarget, InternalFormat, PrimitiveType};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr, ScratchCStrArray};

gl_functions! {
    pub struct ARBDrawInstancedFunctions {
        fn glDrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei,
                                 instancecount: GLsizei)
            = ["glDrawArraysInstancedARB", "glDrawArraysInstancedEXT"];
        fn glDrawElementsInstanced(mode: GLenum, count: GLsizei, gltype: GLenum,
                                   indices: *const std::os::raw::c_void, instancecount: GLsizei)
            = ["glDrawElementsInstancedARB", "glDrawElementsInstancedEXT"];
    }
}

gl_extension! {
    pub struct ARBDrawInstanced(ARBDrawInstancedFunctions) {
        name: "GL_ARB_draw_instanced",
        core: Some(GLVersion::new(3, 1)),
        extensions: ["GL_ARB_draw_instanced"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBDrawInstanced {
    #[inline]
    pub unsafe fn draw_arrays_instanced(&self,
                                        mode: PrimitiveType,
                                        first: GLint,
                                        count: GLsizei,
                                        instance_count: GLsizei) {
        self.functions.glDrawArraysInstanced(mode.into(), first, count, instance_count)
    }

    /// Draws `instance_count` instances using indices at `offset` in the bound element buffer.
    #[inline]
    pub unsafe fn draw_elements_instanced(&self,
                                          mode: PrimitiveType,
                                          count: GLsizei,
                                          index_type: IndexType,
                                          offset: usize,
                                          instance_count: GLsizei) {
        self.functions.glDrawElementsInstanced(mode.into(),
                                               count,
                                               index_type.into(),
                                               marshal::offset_ptr(offset),
                                               instance_count)
    }
}

gl_functions! {
    pub struct ARBCopyBufferFunctions {
        fn glCopyBufferSubData(readTarget: GLenum, writeTarget: GLenum, readOffset: GLintptr,
                               writeOffset: GLintptr, size: GLsizeiptr)
            = ["glCopyBufferSubDataEXT", "glCopyBufferSubDataNV"];
    }
}

gl_extension! {
    pub struct ARBCopyBuffer(ARBCopyBufferFunctions) {
        name: "GL_ARB_copy_buffer",
        core: Some(GLVersion::new(3, 1)),
        extensions: ["GL_ARB_copy_buffer", "GL_EXT_copy_buffer"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBCopyBuffer {
    /// Copies `size` bytes between the buffers bound to two targets. The targets may be the
    /// same as long as the ranges don't overlap.
    #[inline]
    pub unsafe fn copy_buffer_sub_data(&self,
                                       read_target: BufferTarget,
                                       write_target: BufferTarget,
                                       read_offset: usize,
                                       write_offset: usize,
                                       size: usize) {
        self.functions.glCopyBufferSubData(read_target.into(),
                                           write_target.into(),
                                           read_offset as GLintptr,
                                           write_offset as GLintptr,
                                           size as GLsizeiptr)
    }
}

gl_functions! {
    pub struct NVPrimitiveRestartFunctions {
        fn glPrimitiveRestartIndex(index: GLuint) = ["glPrimitiveRestartIndexNV"];
        fn glPrimitiveRestartNV();
    }
}

gl_extension! {
    /// Primitive restart. `glPrimitiveRestartNV` has no core equivalent and only resolves on
    /// drivers exporting the NV extension.
    pub struct NVPrimitiveRestart(NVPrimitiveRestartFunctions) {
        name: "GL_NV_primitive_restart",
        core: Some(GLVersion::new(3, 1)),
        extensions: ["GL_NV_primitive_restart"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl NVPrimitiveRestart {
    #[inline]
    pub unsafe fn primitive_restart_index(&self, index: GLuint) {
        self.functions.glPrimitiveRestartIndex(index)
    }

    /// Restarts the primitive in progress between `glBegin`/`glEnd`.
    #[inline]
    pub unsafe fn primitive_restart(&self) {
        self.functions.glPrimitiveRestartNV()
    }
}

gl_functions! {
    pub struct ARBTextureBufferObjectFunctions {
        fn glTexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint)
            = ["glTexBufferARB", "glTexBufferEXT"];
    }
}

gl_extension! {
    pub struct ARBTextureBufferObject(ARBTextureBufferObjectFunctions) {
        name: "GL_ARB_texture_buffer_object",
        core: Some(GLVersion::new(3, 1)),
        extensions: ["GL_ARB_texture_buffer_object", "GL_EXT_texture_buffer_object"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTextureBufferObject {
    /// Attaches the data store of `buffer` to the bound buffer texture. Zero detaches it.
    #[inline]
    pub unsafe fn tex_buffer(&self, internal_format: InternalFormat, buffer: GLuint) {
        self.functions.glTexBuffer(gl::TEXTURE_BUFFER, internal_format.into(), buffer)
    }
}

gl_functions! {
    pub struct ARBUniformBufferObjectFunctions {
        fn glGetUniformIndices(program: GLuint, uniformCount: GLsizei,
                               uniformNames: *const *const GLchar, uniformIndices: *mut GLuint);
        fn glGetActiveUniformsiv(program: GLuint, uniformCount: GLsizei,
                                 uniformIndices: *const GLuint, pname: GLenum,
                                 params: *mut GLint);
        fn glGetActiveUniformName(program: GLuint, uniformIndex: GLuint, bufSize: GLsizei,
                                  length: *mut GLsizei, uniformName: *mut GLchar);
        fn glGetUniformBlockIndex(program: GLuint, uniformBlockName: *const GLchar) -> GLuint;
        fn glGetActiveUniformBlockiv(program: GLuint, uniformBlockIndex: GLuint, pname: GLenum,
                                     params: *mut GLint);
        fn glGetActiveUniformBlockName(program: GLuint, uniformBlockIndex: GLuint,
                                       bufSize: GLsizei, length: *mut GLsizei,
                                       uniformBlockName: *mut GLchar);
        fn glUniformBlockBinding(program: GLuint, uniformBlockIndex: GLuint,
                                 uniformBlockBinding: GLuint);
        fn glBindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr,
                             size: GLsizeiptr) = ["glBindBufferRangeEXT"];
        fn glBindBufferBase(target: GLenum, index: GLuint, buffer: GLuint)
            = ["glBindBufferBaseEXT"];
        fn glGetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint)
            = ["glGetIntegerIndexedvEXT"];
    }
}

gl_extension! {
    pub struct ARBUniformBufferObject(ARBUniformBufferObjectFunctions) {
        name: "GL_ARB_uniform_buffer_object",
        core: Some(GLVersion::new(3, 1)),
        extensions: ["GL_ARB_uniform_buffer_object"],
    }
}

gl_enum! {
    pub enum ActiveUniformParameter {
        Type = gl::UNIFORM_TYPE,
        Size = gl::UNIFORM_SIZE,
        NameLength = gl::UNIFORM_NAME_LENGTH,
        BlockIndex = gl::UNIFORM_BLOCK_INDEX,
        Offset = gl::UNIFORM_OFFSET,
        ArrayStride = gl::UNIFORM_ARRAY_STRIDE,
        MatrixStride = gl::UNIFORM_MATRIX_STRIDE,
        IsRowMajor = gl::UNIFORM_IS_ROW_MAJOR,
        AtomicCounterBufferIndex = gl::UNIFORM_ATOMIC_COUNTER_BUFFER_INDEX,
    }
}

gl_enum! {
    pub enum UniformBlockParameter {
        Binding = gl::UNIFORM_BLOCK_BINDING,
        DataSize = gl::UNIFORM_BLOCK_DATA_SIZE,
        NameLength = gl::UNIFORM_BLOCK_NAME_LENGTH,
        ActiveUniforms = gl::UNIFORM_BLOCK_ACTIVE_UNIFORMS,
        ActiveUniformIndices = gl::UNIFORM_BLOCK_ACTIVE_UNIFORM_INDICES,
        ReferencedByVertexShader = gl::UNIFORM_BLOCK_REFERENCED_BY_VERTEX_SHADER,
        ReferencedByTessControlShader = gl::UNIFORM_BLOCK_REFERENCED_BY_TESS_CONTROL_SHADER,
        ReferencedByTessEvaluationShader = gl::UNIFORM_BLOCK_REFERENCED_BY_TESS_EVALUATION_SHADER,
        ReferencedByGeometryShader = gl::UNIFORM_BLOCK_REFERENCED_BY_GEOMETRY_SHADER,
        ReferencedByFragmentShader = gl::UNIFORM_BLOCK_REFERENCED_BY_FRAGMENT_SHADER,
        ReferencedByComputeShader = gl::UNIFORM_BLOCK_REFERENCED_BY_COMPUTE_SHADER,
    }
}

#[inline]
fn valid_index(index: GLuint) -> Option<GLuint> {
    if index == gl::INVALID_INDEX { None } else { Some(index) }
}

#[allow(clippy::missing_safety_doc)]
impl ARBUniformBufferObject {
    /// Looks up several uniforms at once. Names that aren't active uniforms yield `None`.
    pub unsafe fn get_uniform_indices<S>(&self, program: GLuint, names: &[S]) -> Vec<Option<GLuint>>
                                         where S: AsRef<str> {
        let names = ScratchCStrArray::new(names);
        let mut indices = vec![gl::INVALID_INDEX; names.count() as usize];
        self.functions.glGetUniformIndices(program,
                                           names.count(),
                                           names.as_ptr(),
                                           indices.as_mut_ptr());
        indices.into_iter().map(valid_index).collect()
    }

    /// Queries one property of each of the given uniforms.
    pub unsafe fn get_active_uniforms_iv(&self,
                                         program: GLuint,
                                         indices: &[GLuint],
                                         pname: ActiveUniformParameter)
                                         -> Vec<GLint> {
        let mut values = vec![0; indices.len()];
        self.functions.glGetActiveUniformsiv(program,
                                             marshal::count(indices),
                                             indices.as_ptr(),
                                             pname.into(),
                                             values.as_mut_ptr());
        values
    }

    pub unsafe fn get_active_uniform_name(&self, program: GLuint, index: GLuint) -> String {
        let lengths = self.get_active_uniforms_iv(program, &[index], ActiveUniformParameter::NameLength);
        let capacity = lengths[0].max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetActiveUniformName(program,
                                              index,
                                              capacity,
                                              &mut length,
                                              buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    /// Returns `None` if `name` is not an active uniform block of `program`.
    pub unsafe fn get_uniform_block_index(&self, program: GLuint, name: &str) -> Option<GLuint> {
        let name = ScratchCStr::new(name);
        valid_index(self.functions.glGetUniformBlockIndex(program, name.as_ptr()))
    }

    #[inline]
    pub unsafe fn get_active_uniform_block_i(&self,
                                             program: GLuint,
                                             block_index: GLuint,
                                             pname: UniformBlockParameter)
                                             -> GLint {
        let mut value = 0;
        self.functions.glGetActiveUniformBlockiv(program, block_index, pname.into(), &mut value);
        value
    }

    /// Indices of the uniforms that make up a block.
    pub unsafe fn get_active_uniform_block_uniform_indices(&self,
                                                           program: GLuint,
                                                           block_index: GLuint)
                                                           -> Vec<GLuint> {
        let count = self.get_active_uniform_block_i(program,
                                                    block_index,
                                                    UniformBlockParameter::ActiveUniforms);
        let mut indices = vec![0 as GLint; count.max(0) as usize];
        if !indices.is_empty() {
            self.functions.glGetActiveUniformBlockiv(program,
                                                     block_index,
                                                     gl::UNIFORM_BLOCK_ACTIVE_UNIFORM_INDICES,
                                                     indices.as_mut_ptr());
        }
        indices.into_iter().map(|index| index as GLuint).collect()
    }

    pub unsafe fn get_active_uniform_block_name(&self, program: GLuint, block_index: GLuint) -> String {
        let capacity =
            self.get_active_uniform_block_i(program, block_index, UniformBlockParameter::NameLength)
                .max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetActiveUniformBlockName(program,
                                                   block_index,
                                                   capacity,
                                                   &mut length,
                                                   buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    #[inline]
    pub unsafe fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint) {
        self.functions.glUniformBlockBinding(program, block_index, binding)
    }

    #[inline]
    pub unsafe fn bind_buffer_base(&self, target: IndexedBufferTarget, index: GLuint, buffer: GLuint) {
        self.functions.glBindBufferBase(target.into(), index, buffer)
    }

    #[inline]
    pub unsafe fn bind_buffer_range(&self,
                                    target: IndexedBufferTarget,
                                    index: GLuint,
                                    buffer: GLuint,
                                    offset: usize,
                                    size: usize) {
        self.functions.glBindBufferRange(target.into(),
                                         index,
                                         buffer,
                                         offset as GLintptr,
                                         size as GLsizeiptr)
    }

    /// Reads indexed state such as `GL_UNIFORM_BUFFER_BINDING`.
    #[inline]
    pub unsafe fn get_integer_i(&self, target: GLenum, index: GLuint) -> GLint {
        let mut value = 0;
        self.functions.glGetIntegeri_v(target, index, &mut value);
        value
    }
}
