// glbind/src/ext/v41.rs
//
//! Extensions promoted to core in OpenGL 4.1.

use crate::enums::{ProgramStages, ShaderType, VertexAttribType};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStrArray};

use euclid::default::Rect;
use std::os::raw::c_void;

gl_functions! {
    pub struct ARBGetProgramBinaryFunctions {
        fn glGetProgramBinary(program: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                              binaryFormat: *mut GLenum, binary: *mut c_void)
            = ["glGetProgramBinaryOES"];
        fn glProgramBinary(program: GLuint, binaryFormat: GLenum, binary: *const c_void,
                           length: GLsizei) = ["glProgramBinaryOES"];
        fn glProgramParameteri(program: GLuint, pname: GLenum, value: GLint)
            = ["glProgramParameteriARB", "glProgramParameteriEXT"];
        fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
    }
}

gl_extension! {
    pub struct ARBGetProgramBinary(ARBGetProgramBinaryFunctions) {
        name: "GL_ARB_get_program_binary",
        core: Some(GLVersion::new(4, 1)),
        extensions: ["GL_ARB_get_program_binary"],
    }
}

/// A linked program in a driver-specific format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramBinary {
    pub format: GLenum,
    pub data: Vec<u8>,
}

#[allow(clippy::missing_safety_doc)]
impl ARBGetProgramBinary {
    /// Retrieves the binary of a linked program. Set `GL_PROGRAM_BINARY_RETRIEVABLE_HINT` with
    /// `set_binary_retrievable` before linking.
    pub unsafe fn get_program_binary(&self, program: GLuint) -> ProgramBinary {
        let mut capacity = 0;
        self.functions.glGetProgramiv(program, gl::PROGRAM_BINARY_LENGTH, &mut capacity);
        let mut data = vec![0u8; capacity.max(0) as usize];
        let (mut length, mut format) = (0, 0);
        self.functions.glGetProgramBinary(program,
                                          capacity.max(0),
                                          &mut length,
                                          &mut format,
                                          data.as_mut_ptr() as *mut c_void);
        data.truncate(length.max(0) as usize);
        ProgramBinary { format, data }
    }

    /// Loads a binary previously returned by `get_program_binary`. Check `GL_LINK_STATUS`
    /// afterwards; drivers reject binaries from other driver versions.
    #[inline]
    pub unsafe fn program_binary(&self, program: GLuint, binary: &ProgramBinary) {
        self.functions.glProgramBinary(program,
                                       binary.format,
                                       binary.data.as_ptr() as *const c_void,
                                       marshal::count(&binary.data))
    }

    #[inline]
    pub unsafe fn set_binary_retrievable(&self, program: GLuint, retrievable: bool) {
        self.functions.glProgramParameteri(program,
                                           gl::PROGRAM_BINARY_RETRIEVABLE_HINT,
                                           marshal::gl_bool(retrievable) as GLint)
    }
}

gl_functions! {
    pub struct ARBSeparateShaderObjectsFunctions {
        fn glUseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint)
            = ["glUseProgramStagesEXT"];
        fn glActiveShaderProgram(pipeline: GLuint, program: GLuint)
            = ["glActiveShaderProgramEXT"];
        fn glCreateShaderProgramv(gltype: GLenum, count: GLsizei,
                                  strings: *const *const GLchar) -> GLuint
            = ["glCreateShaderProgramvEXT"];
        fn glBindProgramPipeline(pipeline: GLuint) = ["glBindProgramPipelineEXT"];
        fn glDeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint)
            = ["glDeleteProgramPipelinesEXT"];
        fn glGenProgramPipelines(n: GLsizei, pipelines: *mut GLuint)
            = ["glGenProgramPipelinesEXT"];
        fn glIsProgramPipeline(pipeline: GLuint) -> GLboolean = ["glIsProgramPipelineEXT"];
        fn glGetProgramPipelineiv(pipeline: GLuint, pname: GLenum, params: *mut GLint)
            = ["glGetProgramPipelineivEXT"];
        fn glValidateProgramPipeline(pipeline: GLuint) = ["glValidateProgramPipelineEXT"];
        fn glGetProgramPipelineInfoLog(pipeline: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                                       infoLog: *mut GLchar)
            = ["glGetProgramPipelineInfoLogEXT"];
        fn glProgramParameteri(program: GLuint, pname: GLenum, value: GLint)
            = ["glProgramParameteriARB", "glProgramParameteriEXT"];
        fn glProgramUniform1i(program: GLuint, location: GLint, v0: GLint)
            = ["glProgramUniform1iEXT"];
        fn glProgramUniform1ui(program: GLuint, location: GLint, v0: GLuint)
            = ["glProgramUniform1uiEXT"];
        fn glProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat)
            = ["glProgramUniform1fEXT"];
        fn glProgramUniform2f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat)
            = ["glProgramUniform2fEXT"];
        fn glProgramUniform3f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat,
                              v2: GLfloat) = ["glProgramUniform3fEXT"];
        fn glProgramUniform4f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat,
                              v2: GLfloat, v3: GLfloat) = ["glProgramUniform4fEXT"];
        fn glProgramUniform1iv(program: GLuint, location: GLint, count: GLsizei,
                               value: *const GLint) = ["glProgramUniform1ivEXT"];
        fn glProgramUniform4fv(program: GLuint, location: GLint, count: GLsizei,
                               value: *const GLfloat) = ["glProgramUniform4fvEXT"];
        fn glProgramUniformMatrix4fv(program: GLuint, location: GLint, count: GLsizei,
                                     transpose: GLboolean, value: *const GLfloat)
            = ["glProgramUniformMatrix4fvEXT"];
    }
}

gl_extension! {
    /// Program pipelines and direct uniform updates on unbound programs.
    pub struct ARBSeparateShaderObjects(ARBSeparateShaderObjectsFunctions) {
        name: "GL_ARB_separate_shader_objects",
        core: Some(GLVersion::new(4, 1)),
        extensions: ["GL_ARB_separate_shader_objects"],
    }
}

gl_enum! {
    pub enum ProgramPipelineParameter {
        ActiveProgram = gl::ACTIVE_PROGRAM,
        VertexShader = gl::VERTEX_SHADER,
        TessControlShader = gl::TESS_CONTROL_SHADER,
        TessEvaluationShader = gl::TESS_EVALUATION_SHADER,
        GeometryShader = gl::GEOMETRY_SHADER,
        FragmentShader = gl::FRAGMENT_SHADER,
        ComputeShader = gl::COMPUTE_SHADER,
        ValidateStatus = gl::VALIDATE_STATUS,
        InfoLogLength = gl::INFO_LOG_LENGTH,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBSeparateShaderObjects {
    #[inline]
    pub unsafe fn use_program_stages(&self, pipeline: GLuint, stages: ProgramStages, program: GLuint) {
        self.functions.glUseProgramStages(pipeline, stages.bits(), program)
    }

    #[inline]
    pub unsafe fn active_shader_program(&self, pipeline: GLuint, program: GLuint) {
        self.functions.glActiveShaderProgram(pipeline, program)
    }

    /// Compiles and links a separable single-stage program from `sources`. Returns 0 on
    /// failure to create the program; compile and link errors land in the program info log.
    pub unsafe fn create_shader_program<S>(&self, stage: ShaderType, sources: &[S]) -> GLuint
                                           where S: AsRef<str> {
        let sources = ScratchCStrArray::new(sources);
        self.functions.glCreateShaderProgramv(stage.into(), sources.count(), sources.as_ptr())
    }

    #[inline]
    pub unsafe fn bind_program_pipeline(&self, pipeline: GLuint) {
        self.functions.glBindProgramPipeline(pipeline)
    }

    #[inline]
    pub unsafe fn delete_program_pipelines(&self, pipelines: &[GLuint]) {
        self.functions.glDeleteProgramPipelines(marshal::count(pipelines), pipelines.as_ptr())
    }

    pub unsafe fn gen_program_pipelines(&self, count: usize) -> Vec<GLuint> {
        let mut pipelines = vec![0; count];
        self.functions.glGenProgramPipelines(count as GLsizei, pipelines.as_mut_ptr());
        pipelines
    }

    #[inline]
    pub unsafe fn gen_program_pipeline(&self) -> GLuint {
        let mut pipeline = 0;
        self.functions.glGenProgramPipelines(1, &mut pipeline);
        pipeline
    }

    #[inline]
    pub unsafe fn is_program_pipeline(&self, pipeline: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsProgramPipeline(pipeline))
    }

    #[inline]
    pub unsafe fn get_program_pipeline_i(&self, pipeline: GLuint, pname: ProgramPipelineParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetProgramPipelineiv(pipeline, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn validate_program_pipeline(&self, pipeline: GLuint) {
        self.functions.glValidateProgramPipeline(pipeline)
    }

    pub unsafe fn get_program_pipeline_info_log(&self, pipeline: GLuint) -> String {
        let capacity =
            self.get_program_pipeline_i(pipeline, ProgramPipelineParameter::InfoLogLength).max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetProgramPipelineInfoLog(pipeline,
                                                   capacity,
                                                   &mut length,
                                                   buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    /// Marks `program` as usable in a pipeline. Takes effect at the next link.
    #[inline]
    pub unsafe fn set_program_separable(&self, program: GLuint, separable: bool) {
        self.functions.glProgramParameteri(program,
                                           gl::PROGRAM_SEPARABLE,
                                           marshal::gl_bool(separable) as GLint)
    }

    #[inline]
    pub unsafe fn program_uniform_1i(&self, program: GLuint, location: GLint, x: i32) {
        self.functions.glProgramUniform1i(program, location, x)
    }

    #[inline]
    pub unsafe fn program_uniform_1ui(&self, program: GLuint, location: GLint, x: u32) {
        self.functions.glProgramUniform1ui(program, location, x)
    }

    #[inline]
    pub unsafe fn program_uniform_1f(&self, program: GLuint, location: GLint, x: f32) {
        self.functions.glProgramUniform1f(program, location, x)
    }

    #[inline]
    pub unsafe fn program_uniform_2f(&self, program: GLuint, location: GLint, x: f32, y: f32) {
        self.functions.glProgramUniform2f(program, location, x, y)
    }

    #[inline]
    pub unsafe fn program_uniform_3f(&self, program: GLuint, location: GLint, x: f32, y: f32, z: f32) {
        self.functions.glProgramUniform3f(program, location, x, y, z)
    }

    #[inline]
    pub unsafe fn program_uniform_4f(&self,
                                     program: GLuint,
                                     location: GLint,
                                     x: f32,
                                     y: f32,
                                     z: f32,
                                     w: f32) {
        self.functions.glProgramUniform4f(program, location, x, y, z, w)
    }

    #[inline]
    pub unsafe fn program_uniform_1iv(&self, program: GLuint, location: GLint, values: &[i32]) {
        self.functions.glProgramUniform1iv(program, location, marshal::count(values), values.as_ptr())
    }

    #[inline]
    pub unsafe fn program_uniform_4fv(&self, program: GLuint, location: GLint, values: &[[f32; 4]]) {
        self.functions.glProgramUniform4fv(program,
                                           location,
                                           marshal::count(values),
                                           values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn program_uniform_matrix_4fv(&self,
                                             program: GLuint,
                                             location: GLint,
                                             transpose: bool,
                                             values: &[[f32; 16]]) {
        self.functions.glProgramUniformMatrix4fv(program,
                                                 location,
                                                 marshal::count(values),
                                                 marshal::gl_bool(transpose),
                                                 values.as_ptr() as *const f32)
    }
}

gl_functions! {
    pub struct ARBES2CompatibilityFunctions {
        fn glReleaseShaderCompiler();
        fn glShaderBinary(count: GLsizei, shaders: *const GLuint, binaryFormat: GLenum,
                          binary: *const c_void, length: GLsizei);
        fn glGetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum,
                                      range: *mut GLint, precision: *mut GLint);
        fn glDepthRangef(n: GLfloat, f: GLfloat) = ["glDepthRangefOES"];
        fn glClearDepthf(d: GLfloat) = ["glClearDepthfOES"];
    }
}

gl_extension! {
    pub struct ARBES2Compatibility(ARBES2CompatibilityFunctions) {
        name: "GL_ARB_ES2_compatibility",
        core: Some(GLVersion::new(4, 1)),
        extensions: ["GL_ARB_ES2_compatibility"],
    }
}

gl_enum! {
    pub enum PrecisionType {
        LowFloat = gl::LOW_FLOAT,
        MediumFloat = gl::MEDIUM_FLOAT,
        HighFloat = gl::HIGH_FLOAT,
        LowInt = gl::LOW_INT,
        MediumInt = gl::MEDIUM_INT,
        HighInt = gl::HIGH_INT,
    }
}

/// Range and precision of a shader numeric type, as log2 values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShaderPrecisionFormat {
    pub range_min: GLint,
    pub range_max: GLint,
    pub precision: GLint,
}

#[allow(clippy::missing_safety_doc)]
impl ARBES2Compatibility {
    #[inline]
    pub unsafe fn release_shader_compiler(&self) {
        self.functions.glReleaseShaderCompiler()
    }

    #[inline]
    pub unsafe fn shader_binary(&self, shaders: &[GLuint], format: GLenum, binary: &[u8]) {
        self.functions.glShaderBinary(marshal::count(shaders),
                                      shaders.as_ptr(),
                                      format,
                                      binary.as_ptr() as *const c_void,
                                      marshal::count(binary))
    }

    pub unsafe fn get_shader_precision_format(&self,
                                              shader_type: ShaderType,
                                              precision_type: PrecisionType)
                                              -> ShaderPrecisionFormat {
        let mut range = [0; 2];
        let mut precision = 0;
        self.functions.glGetShaderPrecisionFormat(shader_type.into(),
                                                  precision_type.into(),
                                                  range.as_mut_ptr(),
                                                  &mut precision);
        ShaderPrecisionFormat { range_min: range[0], range_max: range[1], precision }
    }

    #[inline]
    pub unsafe fn depth_range_f(&self, near: f32, far: f32) {
        self.functions.glDepthRangef(near, far)
    }

    #[inline]
    pub unsafe fn clear_depth_f(&self, depth: f32) {
        self.functions.glClearDepthf(depth)
    }
}

gl_functions! {
    pub struct ARBVertexAttrib64BitFunctions {
        fn glVertexAttribL1d(index: GLuint, x: GLdouble) = ["glVertexAttribL1dEXT"];
        fn glVertexAttribL2d(index: GLuint, x: GLdouble, y: GLdouble) = ["glVertexAttribL2dEXT"];
        fn glVertexAttribL3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble)
            = ["glVertexAttribL3dEXT"];
        fn glVertexAttribL4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble)
            = ["glVertexAttribL4dEXT"];
        fn glVertexAttribL4dv(index: GLuint, v: *const GLdouble) = ["glVertexAttribL4dvEXT"];
        fn glVertexAttribLPointer(index: GLuint, size: GLint, gltype: GLenum, stride: GLsizei,
                                  pointer: *const c_void) = ["glVertexAttribLPointerEXT"];
        fn glGetVertexAttribLdv(index: GLuint, pname: GLenum, params: *mut GLdouble)
            = ["glGetVertexAttribLdvEXT"];
    }
}

gl_extension! {
    pub struct ARBVertexAttrib64Bit(ARBVertexAttrib64BitFunctions) {
        name: "GL_ARB_vertex_attrib_64bit",
        core: Some(GLVersion::new(4, 1)),
        extensions: ["GL_ARB_vertex_attrib_64bit"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBVertexAttrib64Bit {
    #[inline]
    pub unsafe fn vertex_attrib_l1d(&self, index: GLuint, x: f64) {
        self.functions.glVertexAttribL1d(index, x)
    }

    #[inline]
    pub unsafe fn vertex_attrib_l2d(&self, index: GLuint, x: f64, y: f64) {
        self.functions.glVertexAttribL2d(index, x, y)
    }

    #[inline]
    pub unsafe fn vertex_attrib_l3d(&self, index: GLuint, x: f64, y: f64, z: f64) {
        self.functions.glVertexAttribL3d(index, x, y, z)
    }

    #[inline]
    pub unsafe fn vertex_attrib_l4d(&self, index: GLuint, x: f64, y: f64, z: f64, w: f64) {
        self.functions.glVertexAttribL4d(index, x, y, z, w)
    }

    #[inline]
    pub unsafe fn vertex_attrib_l4dv(&self, index: GLuint, values: &[f64; 4]) {
        self.functions.glVertexAttribL4dv(index, values.as_ptr())
    }

    /// Double-precision attributes that reach the shader without conversion. `attrib_type`
    /// must be `Double`.
    #[inline]
    pub unsafe fn vertex_attrib_l_pointer(&self,
                                          index: GLuint,
                                          size: GLint,
                                          attrib_type: VertexAttribType,
                                          stride: GLsizei,
                                          offset: usize) {
        self.functions.glVertexAttribLPointer(index,
                                              size,
                                              attrib_type.into(),
                                              stride,
                                              marshal::offset_ptr(offset))
    }

    pub unsafe fn get_current_vertex_attrib_ld(&self, index: GLuint) -> [f64; 4] {
        let mut values = [0.0; 4];
        self.functions.glGetVertexAttribLdv(index, gl::CURRENT_VERTEX_ATTRIB, values.as_mut_ptr());
        values
    }
}

gl_functions! {
    pub struct ARBViewportArrayFunctions {
        fn glViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat)
            = ["glViewportArrayvNV", "glViewportArrayvOES"];
        fn glViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat)
            = ["glViewportIndexedfNV", "glViewportIndexedfOES"];
        fn glScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint)
            = ["glScissorArrayvNV", "glScissorArrayvOES"];
        fn glScissorIndexed(index: GLuint, left: GLint, bottom: GLint, width: GLsizei,
                            height: GLsizei) = ["glScissorIndexedNV", "glScissorIndexedOES"];
        fn glDepthRangeArrayv(first: GLuint, count: GLsizei, v: *const GLdouble);
        fn glDepthRangeIndexed(index: GLuint, n: GLdouble, f: GLdouble);
        fn glGetFloati_v(target: GLenum, index: GLuint, data: *mut GLfloat)
            = ["glGetFloati_vNV", "glGetFloati_vOES"];
        fn glGetDoublei_v(target: GLenum, index: GLuint, data: *mut GLdouble);
    }
}

gl_extension! {
    pub struct ARBViewportArray(ARBViewportArrayFunctions) {
        name: "GL_ARB_viewport_array",
        core: Some(GLVersion::new(4, 1)),
        extensions: ["GL_ARB_viewport_array"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBViewportArray {
    /// Sets viewports `first..first + viewports.len()`.
    pub unsafe fn viewport_array(&self, first: GLuint, viewports: &[Rect<f32>]) {
        let values: Vec<[f32; 4]> = viewports
            .iter()
            .map(|rect| [rect.origin.x, rect.origin.y, rect.size.width, rect.size.height])
            .collect();
        self.functions.glViewportArrayv(first,
                                        marshal::count(&values),
                                        values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn viewport_indexed(&self, index: GLuint, rect: Rect<f32>) {
        self.functions.glViewportIndexedf(index,
                                          rect.origin.x,
                                          rect.origin.y,
                                          rect.size.width,
                                          rect.size.height)
    }

    pub unsafe fn scissor_array(&self, first: GLuint, boxes: &[Rect<i32>]) {
        let values: Vec<[i32; 4]> = boxes
            .iter()
            .map(|rect| [rect.origin.x, rect.origin.y, rect.size.width, rect.size.height])
            .collect();
        self.functions.glScissorArrayv(first, marshal::count(&values), values.as_ptr() as *const i32)
    }

    #[inline]
    pub unsafe fn scissor_indexed(&self, index: GLuint, rect: Rect<i32>) {
        self.functions.glScissorIndexed(index,
                                        rect.origin.x,
                                        rect.origin.y,
                                        rect.size.width,
                                        rect.size.height)
    }

    /// Sets the depth ranges of viewports `first..first + ranges.len()`, as `(near, far)`.
    pub unsafe fn depth_range_array(&self, first: GLuint, ranges: &[(f64, f64)]) {
        let values: Vec<[f64; 2]> = ranges.iter().map(|&(near, far)| [near, far]).collect();
        self.functions.glDepthRangeArrayv(first, marshal::count(&values), values.as_ptr() as *const f64)
    }

    #[inline]
    pub unsafe fn depth_range_indexed(&self, index: GLuint, near: f64, far: f64) {
        self.functions.glDepthRangeIndexed(index, near, far)
    }

    pub unsafe fn get_viewport_indexed(&self, index: GLuint) -> Rect<f32> {
        let mut values = [0.0; 4];
        self.functions.glGetFloati_v(gl::VIEWPORT, index, values.as_mut_ptr());
        Rect::new(euclid::point2(values[0], values[1]), euclid::size2(values[2], values[3]))
    }

    pub unsafe fn get_depth_range_indexed(&self, index: GLuint) -> (f64, f64) {
        let mut values = [0.0; 2];
        self.functions.glGetDoublei_v(gl::DEPTH_RANGE, index, values.as_mut_ptr());
        (values[0], values[1])
    }
}
