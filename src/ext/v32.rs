// glbind/src/ext/v32.rs
//
//! Extensions promoted to core in OpenGL 3.2.

use crate::enums::{IndexType, InternalFormat, PrimitiveType, SyncFlags, TextureTarget};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use euclid::default::{Size2D, Size3D};
use std::os::raw::c_void;
use std::time::Duration;

gl_functions! {
    pub struct ARBDrawElementsBaseVertexFunctions {
        fn glDrawElementsBaseVertex(mode: GLenum, count: GLsizei, gltype: GLenum,
                                    indices: *const c_void, basevertex: GLint)
            = ["glDrawElementsBaseVertexEXT", "glDrawElementsBaseVertexOES"];
        fn glDrawRangeElementsBaseVertex(mode: GLenum, start: GLuint, end: GLuint,
                                         count: GLsizei, gltype: GLenum,
                                         indices: *const c_void, basevertex: GLint)
            = ["glDrawRangeElementsBaseVertexEXT", "glDrawRangeElementsBaseVertexOES"];
        fn glDrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, gltype: GLenum,
                                             indices: *const c_void, instancecount: GLsizei,
                                             basevertex: GLint)
            = ["glDrawElementsInstancedBaseVertexEXT", "glDrawElementsInstancedBaseVertexOES"];
        fn glMultiDrawElementsBaseVertex(mode: GLenum, count: *const GLsizei, gltype: GLenum,
                                         indices: *const *const c_void, drawcount: GLsizei,
                                         basevertex: *const GLint)
            = ["glMultiDrawElementsBaseVertexEXT"];
    }
}

gl_extension! {
    pub struct ARBDrawElementsBaseVertex(ARBDrawElementsBaseVertexFunctions) {
        name: "GL_ARB_draw_elements_base_vertex",
        core: Some(GLVersion::new(3, 2)),
        extensions: ["GL_ARB_draw_elements_base_vertex"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBDrawElementsBaseVertex {
    /// Like `draw_elements`, with `base_vertex` added to every index.
    #[inline]
    pub unsafe fn draw_elements_base_vertex(&self,
                                            mode: PrimitiveType,
                                            count: GLsizei,
                                            index_type: IndexType,
                                            offset: usize,
                                            base_vertex: GLint) {
        self.functions.glDrawElementsBaseVertex(mode.into(),
                                                count,
                                                index_type.into(),
                                                marshal::offset_ptr(offset),
                                                base_vertex)
    }

    #[inline]
    pub unsafe fn draw_range_elements_base_vertex(&self,
                                                  mode: PrimitiveType,
                                                  start: GLuint,
                                                  end: GLuint,
                                                  count: GLsizei,
                                                  index_type: IndexType,
                                                  offset: usize,
                                                  base_vertex: GLint) {
        self.functions.glDrawRangeElementsBaseVertex(mode.into(),
                                                     start,
                                                     end,
                                                     count,
                                                     index_type.into(),
                                                     marshal::offset_ptr(offset),
                                                     base_vertex)
    }

    #[inline]
    pub unsafe fn draw_elements_instanced_base_vertex(&self,
                                                      mode: PrimitiveType,
                                                      count: GLsizei,
                                                      index_type: IndexType,
                                                      offset: usize,
                                                      instance_count: GLsizei,
                                                      base_vertex: GLint) {
        self.functions.glDrawElementsInstancedBaseVertex(mode.into(),
                                                         count,
                                                         index_type.into(),
                                                         marshal::offset_ptr(offset),
                                                         instance_count,
                                                         base_vertex)
    }

    /// One draw per entry of `counts`; `offsets` and `base_vertices` must be as long.
    pub unsafe fn multi_draw_elements_base_vertex(&self,
                                                  mode: PrimitiveType,
                                                  counts: &[GLsizei],
                                                  index_type: IndexType,
                                                  offsets: &[usize],
                                                  base_vertices: &[GLint]) {
        debug_assert!(counts.len() == offsets.len() && counts.len() == base_vertices.len());
        let offsets: Vec<*const c_void> =
            offsets.iter().map(|&offset| marshal::offset_ptr(offset)).collect();
        self.functions.glMultiDrawElementsBaseVertex(mode.into(),
                                                     counts.as_ptr(),
                                                     index_type.into(),
                                                     offsets.as_ptr(),
                                                     marshal::count(counts),
                                                     base_vertices.as_ptr())
    }
}

gl_functions! {
    pub struct ARBProvokingVertexFunctions {
        fn glProvokingVertex(mode: GLenum) = ["glProvokingVertexEXT"];
    }
}

gl_extension! {
    pub struct ARBProvokingVertex(ARBProvokingVertexFunctions) {
        name: "GL_ARB_provoking_vertex",
        core: Some(GLVersion::new(3, 2)),
        extensions: ["GL_ARB_provoking_vertex", "GL_EXT_provoking_vertex"],
    }
}

gl_enum! {
    pub enum ProvokingVertexConvention {
        FirstVertex = gl::FIRST_VERTEX_CONVENTION,
        LastVertex = gl::LAST_VERTEX_CONVENTION,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBProvokingVertex {
    #[inline]
    pub unsafe fn provoking_vertex(&self, convention: ProvokingVertexConvention) {
        self.functions.glProvokingVertex(convention.into())
    }
}

gl_functions! {
    pub struct ARBTextureMultisampleFunctions {
        fn glTexImage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                   width: GLsizei, height: GLsizei,
                                   fixedsamplelocations: GLboolean);
        fn glTexImage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                   width: GLsizei, height: GLsizei, depth: GLsizei,
                                   fixedsamplelocations: GLboolean);
        fn glGetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat)
            = ["glGetMultisamplefvNV"];
        fn glSampleMaski(maskNumber: GLuint, mask: GLbitfield) = ["glSampleMaskIndexedNV"];
    }
}

gl_extension! {
    pub struct ARBTextureMultisample(ARBTextureMultisampleFunctions) {
        name: "GL_ARB_texture_multisample",
        core: Some(GLVersion::new(3, 2)),
        extensions: ["GL_ARB_texture_multisample"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTextureMultisample {
    #[inline]
    pub unsafe fn tex_image_2d_multisample(&self,
                                           samples: GLsizei,
                                           internal_format: InternalFormat,
                                           size: Size2D<i32>,
                                           fixed_sample_locations: bool) {
        self.functions.glTexImage2DMultisample(TextureTarget::Texture2DMultisample.into(),
                                               samples,
                                               internal_format.into(),
                                               size.width,
                                               size.height,
                                               marshal::gl_bool(fixed_sample_locations))
    }

    #[inline]
    pub unsafe fn tex_image_3d_multisample(&self,
                                           samples: GLsizei,
                                           internal_format: InternalFormat,
                                           size: Size3D<i32>,
                                           fixed_sample_locations: bool) {
        self.functions.glTexImage3DMultisample(TextureTarget::Texture2DMultisampleArray.into(),
                                               samples,
                                               internal_format.into(),
                                               size.width,
                                               size.height,
                                               size.depth,
                                               marshal::gl_bool(fixed_sample_locations))
    }

    /// Position of sample `index` within a pixel, each coordinate in `[0, 1]`.
    pub unsafe fn get_sample_position(&self, index: GLuint) -> [f32; 2] {
        let mut position = [0.0; 2];
        self.functions.glGetMultisamplefv(gl::SAMPLE_POSITION, index, position.as_mut_ptr());
        position
    }

    #[inline]
    pub unsafe fn sample_mask_i(&self, word: GLuint, mask: GLbitfield) {
        self.functions.glSampleMaski(word, mask)
    }
}

gl_functions! {
    pub struct ARBSyncFunctions {
        fn glFenceSync(condition: GLenum, flags: GLbitfield) -> GLsync = ["glFenceSyncAPPLE"];
        fn glIsSync(sync: GLsync) -> GLboolean = ["glIsSyncAPPLE"];
        fn glDeleteSync(sync: GLsync) = ["glDeleteSyncAPPLE"];
        fn glClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum
            = ["glClientWaitSyncAPPLE"];
        fn glWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64)
            = ["glWaitSyncAPPLE"];
        fn glGetInteger64v(pname: GLenum, data: *mut GLint64) = ["glGetInteger64vAPPLE"];
        fn glGetSynciv(sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei,
                       values: *mut GLint) = ["glGetSyncivAPPLE"];
    }
}

gl_extension! {
    /// Fence sync objects.
    pub struct ARBSync(ARBSyncFunctions) {
        name: "GL_ARB_sync",
        core: Some(GLVersion::new(3, 2)),
        extensions: ["GL_ARB_sync"],
    }
}

gl_enum! {
    /// Result of a client-side wait on a fence.
    pub enum SyncStatus {
        AlreadySignaled = gl::ALREADY_SIGNALED,
        TimeoutExpired = gl::TIMEOUT_EXPIRED,
        ConditionSatisfied = gl::CONDITION_SATISFIED,
        WaitFailed = gl::WAIT_FAILED,
    }
}

gl_enum! {
    pub enum SyncParameter {
        ObjectType = gl::OBJECT_TYPE,
        Status = gl::SYNC_STATUS,
        Condition = gl::SYNC_CONDITION,
        Flags = gl::SYNC_FLAGS,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBSync {
    /// Inserts a fence that signals once every preceding command has completed.
    #[inline]
    pub unsafe fn fence_sync(&self) -> GLsync {
        self.functions.glFenceSync(gl::SYNC_GPU_COMMANDS_COMPLETE, 0)
    }

    #[inline]
    pub unsafe fn is_sync(&self, sync: GLsync) -> bool {
        marshal::from_gl_bool(self.functions.glIsSync(sync))
    }

    #[inline]
    pub unsafe fn delete_sync(&self, sync: GLsync) {
        self.functions.glDeleteSync(sync)
    }

    /// Blocks the calling thread until `sync` signals or `timeout` elapses. Timeouts longer
    /// than `u64::MAX` nanoseconds saturate.
    pub unsafe fn client_wait_sync(&self, sync: GLsync, flags: SyncFlags, timeout: Duration) -> SyncStatus {
        let timeout = u64::try_from(timeout.as_nanos()).unwrap_or(u64::MAX);
        let status = self.functions.glClientWaitSync(sync, flags.bits(), timeout);
        SyncStatus::from_raw(status).unwrap_or(SyncStatus::WaitFailed)
    }

    /// Makes the server wait for `sync` before executing further commands.
    #[inline]
    pub unsafe fn wait_sync(&self, sync: GLsync) {
        self.functions.glWaitSync(sync, 0, gl::TIMEOUT_IGNORED)
    }

    #[inline]
    pub unsafe fn get_integer64(&self, pname: GLenum) -> GLint64 {
        let mut value = 0;
        self.functions.glGetInteger64v(pname, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_sync_i(&self, sync: GLsync, pname: SyncParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetSynciv(sync, pname.into(), 1, std::ptr::null_mut(), &mut value);
        value
    }

    /// Returns `true` if the fence has signaled, without waiting.
    pub unsafe fn is_signaled(&self, sync: GLsync) -> bool {
        self.get_sync_i(sync, SyncParameter::Status) == gl::SIGNALED as GLint
    }
}
