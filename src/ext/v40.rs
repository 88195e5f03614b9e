// glbind/src/ext/v40.rs
//
//! Extensions promoted to core in OpenGL 4.0.

use crate::enums::{BlendEquation, BlendFactor, IndexType, PrimitiveType, QueryTarget};
use crate::enums::ShaderType;
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr};

use bytemuck::{Pod, Zeroable};

gl_functions! {
    pub struct ARBShaderSubroutineFunctions {
        fn glGetSubroutineUniformLocation(program: GLuint, shadertype: GLenum,
                                          name: *const GLchar) -> GLint;
        fn glGetSubroutineIndex(program: GLuint, shadertype: GLenum,
                                name: *const GLchar) -> GLuint;
        fn glGetActiveSubroutineUniformiv(program: GLuint, shadertype: GLenum, index: GLuint,
                                          pname: GLenum, values: *mut GLint);
        fn glGetActiveSubroutineUniformName(program: GLuint, shadertype: GLenum, index: GLuint,
                                            bufSize: GLsizei, length: *mut GLsizei,
                                            name: *mut GLchar);
        fn glGetActiveSubroutineName(program: GLuint, shadertype: GLenum, index: GLuint,
                                     bufSize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn glUniformSubroutinesuiv(shadertype: GLenum, count: GLsizei, indices: *const GLuint);
        fn glGetUniformSubroutineuiv(shadertype: GLenum, location: GLint, params: *mut GLuint);
        fn glGetProgramStageiv(program: GLuint, shadertype: GLenum, pname: GLenum,
                               values: *mut GLint);
    }
}

gl_extension! {
    /// Shader subroutines.
    ///
    /// Some drivers advertise the extension without exporting `glGetSubroutineUniformLocation`;
    /// `GL` discards the module in that case.
    pub struct ARBShaderSubroutine(ARBShaderSubroutineFunctions) {
        name: "GL_ARB_shader_subroutine",
        core: Some(GLVersion::new(4, 0)),
        extensions: ["GL_ARB_shader_subroutine"],
    }
}

gl_enum! {
    pub enum ProgramStageParameter {
        ActiveSubroutineUniforms = gl::ACTIVE_SUBROUTINE_UNIFORMS,
        ActiveSubroutineUniformLocations = gl::ACTIVE_SUBROUTINE_UNIFORM_LOCATIONS,
        ActiveSubroutines = gl::ACTIVE_SUBROUTINES,
        ActiveSubroutineUniformMaxLength = gl::ACTIVE_SUBROUTINE_UNIFORM_MAX_LENGTH,
        ActiveSubroutineMaxLength = gl::ACTIVE_SUBROUTINE_MAX_LENGTH,
    }
}

gl_enum! {
    pub enum SubroutineUniformParameter {
        NumCompatibleSubroutines = gl::NUM_COMPATIBLE_SUBROUTINES,
        CompatibleSubroutines = gl::COMPATIBLE_SUBROUTINES,
        UniformSize = gl::UNIFORM_SIZE,
        UniformNameLength = gl::UNIFORM_NAME_LENGTH,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBShaderSubroutine {
    /// Returns `None` if `name` is not an active subroutine uniform of the stage.
    pub unsafe fn get_subroutine_uniform_location(&self,
                                                  program: GLuint,
                                                  stage: ShaderType,
                                                  name: &str)
                                                  -> Option<GLuint> {
        let name = ScratchCStr::new(name);
        let location =
            self.functions.glGetSubroutineUniformLocation(program, stage.into(), name.as_ptr());
        if location < 0 { None } else { Some(location as GLuint) }
    }

    /// Returns `None` if `name` is not an active subroutine of the stage.
    pub unsafe fn get_subroutine_index(&self,
                                       program: GLuint,
                                       stage: ShaderType,
                                       name: &str)
                                       -> Option<GLuint> {
        let name = ScratchCStr::new(name);
        let index = self.functions.glGetSubroutineIndex(program, stage.into(), name.as_ptr());
        if index == gl::INVALID_INDEX { None } else { Some(index) }
    }

    #[inline]
    pub unsafe fn get_active_subroutine_uniform_i(&self,
                                                  program: GLuint,
                                                  stage: ShaderType,
                                                  index: GLuint,
                                                  pname: SubroutineUniformParameter)
                                                  -> GLint {
        let mut value = 0;
        self.functions.glGetActiveSubroutineUniformiv(program,
                                                      stage.into(),
                                                      index,
                                                      pname.into(),
                                                      &mut value);
        value
    }

    /// Indices of the subroutines that may be assigned to subroutine uniform `index`.
    pub unsafe fn get_compatible_subroutines(&self,
                                             program: GLuint,
                                             stage: ShaderType,
                                             index: GLuint)
                                             -> Vec<GLuint> {
        let pname = SubroutineUniformParameter::NumCompatibleSubroutines;
        let count = self.get_active_subroutine_uniform_i(program, stage, index, pname);
        let mut subroutines = vec![0 as GLint; count.max(0) as usize];
        if !subroutines.is_empty() {
            self.functions.glGetActiveSubroutineUniformiv(program,
                                                          stage.into(),
                                                          index,
                                                          gl::COMPATIBLE_SUBROUTINES,
                                                          subroutines.as_mut_ptr());
        }
        subroutines.into_iter().map(|subroutine| subroutine as GLuint).collect()
    }

    pub unsafe fn get_active_subroutine_uniform_name(&self,
                                                     program: GLuint,
                                                     stage: ShaderType,
                                                     index: GLuint)
                                                     -> String {
        let pname = ProgramStageParameter::ActiveSubroutineUniformMaxLength;
        let capacity = self.get_program_stage(program, stage, pname).max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetActiveSubroutineUniformName(program,
                                                        stage.into(),
                                                        index,
                                                        capacity,
                                                        &mut length,
                                                        buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    pub unsafe fn get_active_subroutine_name(&self,
                                             program: GLuint,
                                             stage: ShaderType,
                                             index: GLuint)
                                             -> String {
        let capacity =
            self.get_program_stage(program, stage, ProgramStageParameter::ActiveSubroutineMaxLength)
                .max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetActiveSubroutineName(program,
                                                 stage.into(),
                                                 index,
                                                 capacity,
                                                 &mut length,
                                                 buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    /// Assigns a subroutine index to every active subroutine uniform location of the stage, in
    /// location order.
    #[inline]
    pub unsafe fn uniform_subroutines(&self, stage: ShaderType, indices: &[GLuint]) {
        self.functions.glUniformSubroutinesuiv(stage.into(), marshal::count(indices), indices.as_ptr())
    }

    #[inline]
    pub unsafe fn get_uniform_subroutine(&self, stage: ShaderType, location: GLint) -> GLuint {
        let mut value = 0;
        self.functions.glGetUniformSubroutineuiv(stage.into(), location, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_program_stage(&self,
                                    program: GLuint,
                                    stage: ShaderType,
                                    pname: ProgramStageParameter)
                                    -> GLint {
        let mut value = 0;
        self.functions.glGetProgramStageiv(program, stage.into(), pname.into(), &mut value);
        value
    }
}

gl_functions! {
    pub struct ARBDrawIndirectFunctions {
        fn glDrawArraysIndirect(mode: GLenum, indirect: *const std::os::raw::c_void);
        fn glDrawElementsIndirect(mode: GLenum, gltype: GLenum,
                                  indirect: *const std::os::raw::c_void);
    }
}

gl_extension! {
    pub struct ARBDrawIndirect(ARBDrawIndirectFunctions) {
        name: "GL_ARB_draw_indirect",
        core: Some(GLVersion::new(4, 0)),
        extensions: ["GL_ARB_draw_indirect"],
    }
}

/// Layout of one command read by `glDrawArraysIndirect`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawArraysIndirectCommand {
    pub count: GLuint,
    pub instance_count: GLuint,
    pub first: GLuint,
    pub base_instance: GLuint,
}

/// Layout of one command read by `glDrawElementsIndirect`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawElementsIndirectCommand {
    pub count: GLuint,
    pub instance_count: GLuint,
    pub first_index: GLuint,
    pub base_vertex: GLint,
    pub base_instance: GLuint,
}

// Both are `repr(C)` runs of 32-bit integers with no padding.
unsafe impl Zeroable for DrawArraysIndirectCommand {}
unsafe impl Pod for DrawArraysIndirectCommand {}
unsafe impl Zeroable for DrawElementsIndirectCommand {}
unsafe impl Pod for DrawElementsIndirectCommand {}

#[allow(clippy::missing_safety_doc)]
impl ARBDrawIndirect {
    /// Draws with the `DrawArraysIndirectCommand` at `offset` in the bound indirect buffer.
    #[inline]
    pub unsafe fn draw_arrays_indirect(&self, mode: PrimitiveType, offset: usize) {
        self.functions.glDrawArraysIndirect(mode.into(), marshal::offset_ptr(offset))
    }

    /// Draws with the `DrawElementsIndirectCommand` at `offset` in the bound indirect buffer.
    #[inline]
    pub unsafe fn draw_elements_indirect(&self, mode: PrimitiveType, index_type: IndexType, offset: usize) {
        self.functions.glDrawElementsIndirect(mode.into(),
                                              index_type.into(),
                                              marshal::offset_ptr(offset))
    }
}

gl_functions! {
    pub struct ARBSampleShadingFunctions {
        fn glMinSampleShading(value: GLfloat) = ["glMinSampleShadingARB", "glMinSampleShadingOES"];
    }
}

gl_extension! {
    pub struct ARBSampleShading(ARBSampleShadingFunctions) {
        name: "GL_ARB_sample_shading",
        core: Some(GLVersion::new(4, 0)),
        extensions: ["GL_ARB_sample_shading"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBSampleShading {
    /// Sets the minimum fraction of samples shaded independently when sample shading is on.
    #[inline]
    pub unsafe fn min_sample_shading(&self, value: f32) {
        self.functions.glMinSampleShading(value)
    }
}

gl_functions! {
    pub struct ARBTessellationShaderFunctions {
        fn glPatchParameteri(pname: GLenum, value: GLint) = ["glPatchParameteriEXT"];
        fn glPatchParameterfv(pname: GLenum, values: *const GLfloat);
    }
}

gl_extension! {
    pub struct ARBTessellationShader(ARBTessellationShaderFunctions) {
        name: "GL_ARB_tessellation_shader",
        core: Some(GLVersion::new(4, 0)),
        extensions: ["GL_ARB_tessellation_shader"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTessellationShader {
    #[inline]
    pub unsafe fn patch_vertices(&self, count: GLint) {
        self.functions.glPatchParameteri(gl::PATCH_VERTICES, count)
    }

    /// Outer tessellation levels used when no tessellation control shader is active.
    #[inline]
    pub unsafe fn patch_default_outer_level(&self, levels: &[f32; 4]) {
        self.functions.glPatchParameterfv(gl::PATCH_DEFAULT_OUTER_LEVEL, levels.as_ptr())
    }

    #[inline]
    pub unsafe fn patch_default_inner_level(&self, levels: &[f32; 2]) {
        self.functions.glPatchParameterfv(gl::PATCH_DEFAULT_INNER_LEVEL, levels.as_ptr())
    }
}

gl_functions! {
    pub struct ARBTransformFeedback2Functions {
        fn glBindTransformFeedback(target: GLenum, id: GLuint) = ["glBindTransformFeedbackNV"];
        fn glDeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint)
            = ["glDeleteTransformFeedbacksNV"];
        fn glGenTransformFeedbacks(n: GLsizei, ids: *mut GLuint) = ["glGenTransformFeedbacksNV"];
        fn glIsTransformFeedback(id: GLuint) -> GLboolean = ["glIsTransformFeedbackNV"];
        fn glPauseTransformFeedback() = ["glPauseTransformFeedbackNV"];
        fn glResumeTransformFeedback() = ["glResumeTransformFeedbackNV"];
        fn glDrawTransformFeedback(mode: GLenum, id: GLuint) = ["glDrawTransformFeedbackNV"];
    }
}

gl_extension! {
    pub struct ARBTransformFeedback2(ARBTransformFeedback2Functions) {
        name: "GL_ARB_transform_feedback2",
        core: Some(GLVersion::new(4, 0)),
        extensions: ["GL_ARB_transform_feedback2"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTransformFeedback2 {
    #[inline]
    pub unsafe fn bind_transform_feedback(&self, id: GLuint) {
        self.functions.glBindTransformFeedback(gl::TRANSFORM_FEEDBACK, id)
    }

    #[inline]
    pub unsafe fn delete_transform_feedbacks(&self, ids: &[GLuint]) {
        self.functions.glDeleteTransformFeedbacks(marshal::count(ids), ids.as_ptr())
    }

    pub unsafe fn gen_transform_feedbacks(&self, count: usize) -> Vec<GLuint> {
        let mut ids = vec![0; count];
        self.functions.glGenTransformFeedbacks(count as GLsizei, ids.as_mut_ptr());
        ids
    }

    #[inline]
    pub unsafe fn is_transform_feedback(&self, id: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsTransformFeedback(id))
    }

    #[inline]
    pub unsafe fn pause_transform_feedback(&self) {
        self.functions.glPauseTransformFeedback()
    }

    #[inline]
    pub unsafe fn resume_transform_feedback(&self) {
        self.functions.glResumeTransformFeedback()
    }

    /// Draws as many vertices as were captured into transform feedback object `id`.
    #[inline]
    pub unsafe fn draw_transform_feedback(&self, mode: PrimitiveType, id: GLuint) {
        self.functions.glDrawTransformFeedback(mode.into(), id)
    }
}

gl_functions! {
    pub struct ARBTransformFeedback3Functions {
        fn glDrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint);
        fn glBeginQueryIndexed(target: GLenum, index: GLuint, id: GLuint);
        fn glEndQueryIndexed(target: GLenum, index: GLuint);
        fn glGetQueryIndexediv(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);
    }
}

gl_extension! {
    pub struct ARBTransformFeedback3(ARBTransformFeedback3Functions) {
        name: "GL_ARB_transform_feedback3",
        core: Some(GLVersion::new(4, 0)),
        extensions: ["GL_ARB_transform_feedback3"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTransformFeedback3 {
    #[inline]
    pub unsafe fn draw_transform_feedback_stream(&self, mode: PrimitiveType, id: GLuint, stream: GLuint) {
        self.functions.glDrawTransformFeedbackStream(mode.into(), id, stream)
    }

    #[inline]
    pub unsafe fn begin_query_indexed(&self, target: QueryTarget, index: GLuint, query: GLuint) {
        self.functions.glBeginQueryIndexed(target.into(), index, query)
    }

    #[inline]
    pub unsafe fn end_query_indexed(&self, target: QueryTarget, index: GLuint) {
        self.functions.glEndQueryIndexed(target.into(), index)
    }

    /// `pname` is `GL_CURRENT_QUERY` or `GL_QUERY_COUNTER_BITS`.
    #[inline]
    pub unsafe fn get_query_indexed_i(&self, target: QueryTarget, index: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        self.functions.glGetQueryIndexediv(target.into(), index, pname, &mut value);
        value
    }

    /// Name of the query active on `target` at `index`, or 0.
    pub unsafe fn get_current_query_indexed(&self, target: QueryTarget, index: GLuint) -> GLuint {
        self.get_query_indexed_i(target, index, gl::CURRENT_QUERY) as GLuint
    }
}

gl_functions! {
    pub struct ARBDrawBuffersBlendFunctions {
        fn glBlendEquationi(buf: GLuint, mode: GLenum) = ["glBlendEquationiARB"];
        fn glBlendEquationSeparatei(buf: GLuint, modeRGB: GLenum, modeAlpha: GLenum)
            = ["glBlendEquationSeparateiARB"];
        fn glBlendFunci(buf: GLuint, src: GLenum, dst: GLenum) = ["glBlendFunciARB"];
        fn glBlendFuncSeparatei(buf: GLuint, srcRGB: GLenum, dstRGB: GLenum, srcAlpha: GLenum,
                                dstAlpha: GLenum) = ["glBlendFuncSeparateiARB"];
    }
}

gl_extension! {
    /// Per-draw-buffer blend state.
    pub struct ARBDrawBuffersBlend(ARBDrawBuffersBlendFunctions) {
        name: "GL_ARB_draw_buffers_blend",
        core: Some(GLVersion::new(4, 0)),
        extensions: ["GL_ARB_draw_buffers_blend"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBDrawBuffersBlend {
    #[inline]
    pub unsafe fn blend_equation_i(&self, buffer: GLuint, mode: BlendEquation) {
        self.functions.glBlendEquationi(buffer, mode.into())
    }

    #[inline]
    pub unsafe fn blend_equation_separate_i(&self, buffer: GLuint, rgb: BlendEquation, alpha: BlendEquation) {
        self.functions.glBlendEquationSeparatei(buffer, rgb.into(), alpha.into())
    }

    #[inline]
    pub unsafe fn blend_func_i(&self, buffer: GLuint, src: BlendFactor, dst: BlendFactor) {
        self.functions.glBlendFunci(buffer, src.into(), dst.into())
    }

    #[inline]
    pub unsafe fn blend_func_separate_i(&self,
                                        buffer: GLuint,
                                        src_rgb: BlendFactor,
                                        dst_rgb: BlendFactor,
                                        src_alpha: BlendFactor,
                                        dst_alpha: BlendFactor) {
        self.functions.glBlendFuncSeparatei(buffer,
                                            src_rgb.into(),
                                            dst_rgb.into(),
                                            src_alpha.into(),
                                            dst_alpha.into())
    }
}
