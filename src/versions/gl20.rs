// glbind/src/versions/gl20.rs
//
//! OpenGL 2.0: the programmable pipeline.

use crate::enums::{BlendEquation, CompareFunc, DrawBufferMode, Face, ShaderType, StencilOp};
use crate::enums::VertexAttribType;
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr, ScratchCStrArray};

use std::os::raw::c_void;
use std::ptr;

gl_functions! {
    pub struct GL20Functions {
        fn glBlendEquationSeparate(modeRGB: GLenum, modeAlpha: GLenum)
            = ["glBlendEquationSeparateEXT"];
        fn glDrawBuffers(n: GLsizei, bufs: *const GLenum) = ["glDrawBuffersARB", "glDrawBuffersATI"];
        fn glStencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum)
            = ["glStencilOpSeparateATI"];
        fn glStencilFuncSeparate(face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
        fn glStencilMaskSeparate(face: GLenum, mask: GLuint);
        fn glAttachShader(program: GLuint, shader: GLuint);
        fn glBindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
        fn glCompileShader(shader: GLuint);
        fn glCreateProgram() -> GLuint;
        fn glCreateShader(gltype: GLenum) -> GLuint;
        fn glDeleteProgram(program: GLuint);
        fn glDeleteShader(shader: GLuint);
        fn glDetachShader(program: GLuint, shader: GLuint);
        fn glDisableVertexAttribArray(index: GLuint) = ["glDisableVertexAttribArrayARB"];
        fn glEnableVertexAttribArray(index: GLuint) = ["glEnableVertexAttribArrayARB"];
        fn glGetActiveAttrib(program: GLuint, index: GLuint, bufSize: GLsizei,
                             length: *mut GLsizei, size: *mut GLint, gltype: *mut GLenum,
                             name: *mut GLchar);
        fn glGetActiveUniform(program: GLuint, index: GLuint, bufSize: GLsizei,
                              length: *mut GLsizei, size: *mut GLint, gltype: *mut GLenum,
                              name: *mut GLchar);
        fn glGetAttachedShaders(program: GLuint, maxCount: GLsizei, count: *mut GLsizei,
                                shaders: *mut GLuint);
        fn glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
        fn glGetProgramInfoLog(program: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                               infoLog: *mut GLchar);
        fn glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
        fn glGetShaderInfoLog(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                              infoLog: *mut GLchar);
        fn glGetShaderSource(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei,
                             source: *mut GLchar);
        fn glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn glGetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
        fn glGetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
        fn glGetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat)
            = ["glGetVertexAttribfvARB"];
        fn glGetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint)
            = ["glGetVertexAttribivARB"];
        fn glGetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void)
            = ["glGetVertexAttribPointervARB"];
        fn glIsProgram(program: GLuint) -> GLboolean;
        fn glIsShader(shader: GLuint) -> GLboolean;
        fn glLinkProgram(program: GLuint);
        fn glShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar,
                          length: *const GLint);
        fn glUseProgram(program: GLuint);
        fn glUniform1f(location: GLint, v0: GLfloat) = ["glUniform1fARB"];
        fn glUniform2f(location: GLint, v0: GLfloat, v1: GLfloat) = ["glUniform2fARB"];
        fn glUniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat)
            = ["glUniform3fARB"];
        fn glUniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat)
            = ["glUniform4fARB"];
        fn glUniform1i(location: GLint, v0: GLint) = ["glUniform1iARB"];
        fn glUniform2i(location: GLint, v0: GLint, v1: GLint) = ["glUniform2iARB"];
        fn glUniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint) = ["glUniform3iARB"];
        fn glUniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint)
            = ["glUniform4iARB"];
        fn glUniform1fv(location: GLint, count: GLsizei, value: *const GLfloat)
            = ["glUniform1fvARB"];
        fn glUniform2fv(location: GLint, count: GLsizei, value: *const GLfloat)
            = ["glUniform2fvARB"];
        fn glUniform3fv(location: GLint, count: GLsizei, value: *const GLfloat)
            = ["glUniform3fvARB"];
        fn glUniform4fv(location: GLint, count: GLsizei, value: *const GLfloat)
            = ["glUniform4fvARB"];
        fn glUniform1iv(location: GLint, count: GLsizei, value: *const GLint)
            = ["glUniform1ivARB"];
        fn glUniform2iv(location: GLint, count: GLsizei, value: *const GLint)
            = ["glUniform2ivARB"];
        fn glUniform3iv(location: GLint, count: GLsizei, value: *const GLint)
            = ["glUniform3ivARB"];
        fn glUniform4iv(location: GLint, count: GLsizei, value: *const GLint)
            = ["glUniform4ivARB"];
        fn glUniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) = ["glUniformMatrix2fvARB"];
        fn glUniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) = ["glUniformMatrix3fvARB"];
        fn glUniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                              value: *const GLfloat) = ["glUniformMatrix4fvARB"];
        fn glValidateProgram(program: GLuint);
        fn glVertexAttrib1f(index: GLuint, x: GLfloat) = ["glVertexAttrib1fARB"];
        fn glVertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat) = ["glVertexAttrib2fARB"];
        fn glVertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat)
            = ["glVertexAttrib3fARB"];
        fn glVertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat)
            = ["glVertexAttrib4fARB"];
        fn glVertexAttrib4fv(index: GLuint, v: *const GLfloat) = ["glVertexAttrib4fvARB"];
        fn glVertexAttribPointer(index: GLuint, size: GLint, gltype: GLenum,
                                 normalized: GLboolean, stride: GLsizei, pointer: *const c_void)
            = ["glVertexAttribPointerARB"];
    }
}

gl_extension! {
    pub struct GL20(GL20Functions) {
        name: "GL_VERSION_2_0",
        core: Some(GLVersion::new(2, 0)),
        extensions: [],
    }
}

gl_enum! {
    pub enum ShaderParameter {
        ShaderType = gl::SHADER_TYPE,
        DeleteStatus = gl::DELETE_STATUS,
        CompileStatus = gl::COMPILE_STATUS,
        InfoLogLength = gl::INFO_LOG_LENGTH,
        ShaderSourceLength = gl::SHADER_SOURCE_LENGTH,
        SpirVBinary = gl::SPIR_V_BINARY,
    }
}

gl_enum! {
    pub enum ProgramParameter {
        DeleteStatus = gl::DELETE_STATUS,
        LinkStatus = gl::LINK_STATUS,
        ValidateStatus = gl::VALIDATE_STATUS,
        InfoLogLength = gl::INFO_LOG_LENGTH,
        AttachedShaders = gl::ATTACHED_SHADERS,
        ActiveAttributes = gl::ACTIVE_ATTRIBUTES,
        ActiveAttributeMaxLength = gl::ACTIVE_ATTRIBUTE_MAX_LENGTH,
        ActiveUniforms = gl::ACTIVE_UNIFORMS,
        ActiveUniformMaxLength = gl::ACTIVE_UNIFORM_MAX_LENGTH,
        ActiveUniformBlocks = gl::ACTIVE_UNIFORM_BLOCKS,
        ActiveUniformBlockMaxNameLength = gl::ACTIVE_UNIFORM_BLOCK_MAX_NAME_LENGTH,
        ActiveAtomicCounterBuffers = gl::ACTIVE_ATOMIC_COUNTER_BUFFERS,
        TransformFeedbackBufferMode = gl::TRANSFORM_FEEDBACK_BUFFER_MODE,
        TransformFeedbackVaryings = gl::TRANSFORM_FEEDBACK_VARYINGS,
        TransformFeedbackVaryingMaxLength = gl::TRANSFORM_FEEDBACK_VARYING_MAX_LENGTH,
        GeometryVerticesOut = gl::GEOMETRY_VERTICES_OUT,
        GeometryInputType = gl::GEOMETRY_INPUT_TYPE,
        GeometryOutputType = gl::GEOMETRY_OUTPUT_TYPE,
        GeometryShaderInvocations = gl::GEOMETRY_SHADER_INVOCATIONS,
        TessControlOutputVertices = gl::TESS_CONTROL_OUTPUT_VERTICES,
        TessGenMode = gl::TESS_GEN_MODE,
        TessGenSpacing = gl::TESS_GEN_SPACING,
        TessGenVertexOrder = gl::TESS_GEN_VERTEX_ORDER,
        TessGenPointMode = gl::TESS_GEN_POINT_MODE,
        ComputeWorkGroupSize = gl::COMPUTE_WORK_GROUP_SIZE,
        ProgramBinaryLength = gl::PROGRAM_BINARY_LENGTH,
        ProgramBinaryRetrievableHint = gl::PROGRAM_BINARY_RETRIEVABLE_HINT,
        ProgramSeparable = gl::PROGRAM_SEPARABLE,
    }
}

gl_enum! {
    /// Types reported for active attributes and uniforms.
    pub enum UniformType {
        Float = gl::FLOAT,
        FloatVec2 = gl::FLOAT_VEC2,
        FloatVec3 = gl::FLOAT_VEC3,
        FloatVec4 = gl::FLOAT_VEC4,
        Double = gl::DOUBLE,
        DoubleVec2 = gl::DOUBLE_VEC2,
        DoubleVec3 = gl::DOUBLE_VEC3,
        DoubleVec4 = gl::DOUBLE_VEC4,
        Int = gl::INT,
        IntVec2 = gl::INT_VEC2,
        IntVec3 = gl::INT_VEC3,
        IntVec4 = gl::INT_VEC4,
        UnsignedInt = gl::UNSIGNED_INT,
        UnsignedIntVec2 = gl::UNSIGNED_INT_VEC2,
        UnsignedIntVec3 = gl::UNSIGNED_INT_VEC3,
        UnsignedIntVec4 = gl::UNSIGNED_INT_VEC4,
        Bool = gl::BOOL,
        BoolVec2 = gl::BOOL_VEC2,
        BoolVec3 = gl::BOOL_VEC3,
        BoolVec4 = gl::BOOL_VEC4,
        FloatMat2 = gl::FLOAT_MAT2,
        FloatMat3 = gl::FLOAT_MAT3,
        FloatMat4 = gl::FLOAT_MAT4,
        FloatMat2x3 = gl::FLOAT_MAT2x3,
        FloatMat2x4 = gl::FLOAT_MAT2x4,
        FloatMat3x2 = gl::FLOAT_MAT3x2,
        FloatMat3x4 = gl::FLOAT_MAT3x4,
        FloatMat4x2 = gl::FLOAT_MAT4x2,
        FloatMat4x3 = gl::FLOAT_MAT4x3,
        DoubleMat2 = gl::DOUBLE_MAT2,
        DoubleMat3 = gl::DOUBLE_MAT3,
        DoubleMat4 = gl::DOUBLE_MAT4,
        Sampler1D = gl::SAMPLER_1D,
        Sampler2D = gl::SAMPLER_2D,
        Sampler3D = gl::SAMPLER_3D,
        SamplerCube = gl::SAMPLER_CUBE,
        Sampler1DShadow = gl::SAMPLER_1D_SHADOW,
        Sampler2DShadow = gl::SAMPLER_2D_SHADOW,
        Sampler1DArray = gl::SAMPLER_1D_ARRAY,
        Sampler2DArray = gl::SAMPLER_2D_ARRAY,
        Sampler2DArrayShadow = gl::SAMPLER_2D_ARRAY_SHADOW,
        SamplerCubeShadow = gl::SAMPLER_CUBE_SHADOW,
        SamplerCubeMapArray = gl::SAMPLER_CUBE_MAP_ARRAY,
        Sampler2DMultisample = gl::SAMPLER_2D_MULTISAMPLE,
        Sampler2DMultisampleArray = gl::SAMPLER_2D_MULTISAMPLE_ARRAY,
        SamplerBuffer = gl::SAMPLER_BUFFER,
        Sampler2DRect = gl::SAMPLER_2D_RECT,
        IntSampler2D = gl::INT_SAMPLER_2D,
        IntSampler3D = gl::INT_SAMPLER_3D,
        IntSamplerCube = gl::INT_SAMPLER_CUBE,
        IntSampler2DArray = gl::INT_SAMPLER_2D_ARRAY,
        UnsignedIntSampler2D = gl::UNSIGNED_INT_SAMPLER_2D,
        UnsignedIntSampler3D = gl::UNSIGNED_INT_SAMPLER_3D,
        UnsignedIntSamplerCube = gl::UNSIGNED_INT_SAMPLER_CUBE,
        UnsignedIntSampler2DArray = gl::UNSIGNED_INT_SAMPLER_2D_ARRAY,
        Image2D = gl::IMAGE_2D,
        Image3D = gl::IMAGE_3D,
        ImageCube = gl::IMAGE_CUBE,
        Image2DArray = gl::IMAGE_2D_ARRAY,
        ImageBuffer = gl::IMAGE_BUFFER,
        IntImage2D = gl::INT_IMAGE_2D,
        UnsignedIntImage2D = gl::UNSIGNED_INT_IMAGE_2D,
        UnsignedIntAtomicCounter = gl::UNSIGNED_INT_ATOMIC_COUNTER,
    }
}

/// An active attribute or uniform of a linked program.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveVariable {
    pub name: String,
    /// Array length, 1 for non-arrays.
    pub size: GLint,
    pub gltype: GLenum,
}

impl ActiveVariable {
    #[inline]
    pub fn uniform_type(&self) -> Option<UniformType> {
        UniformType::from_raw(self.gltype)
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL20 {
    #[inline]
    pub unsafe fn blend_equation_separate(&self, rgb: BlendEquation, alpha: BlendEquation) {
        self.functions.glBlendEquationSeparate(rgb.into(), alpha.into())
    }

    #[inline]
    pub unsafe fn draw_buffers(&self, buffers: &[DrawBufferMode]) {
        // `DrawBufferMode` is `repr(u32)`, so the slice already has the layout of a `GLenum` array.
        self.functions.glDrawBuffers(marshal::count(buffers), buffers.as_ptr() as *const GLenum)
    }

    #[inline]
    pub unsafe fn stencil_op_separate(&self,
                                      face: Face,
                                      stencil_fail: StencilOp,
                                      depth_fail: StencilOp,
                                      pass: StencilOp) {
        self.functions.glStencilOpSeparate(face.into(),
                                           stencil_fail.into(),
                                           depth_fail.into(),
                                           pass.into())
    }

    #[inline]
    pub unsafe fn stencil_func_separate(&self,
                                        face: Face,
                                        func: CompareFunc,
                                        reference: GLint,
                                        mask: GLuint) {
        self.functions.glStencilFuncSeparate(face.into(), func.into(), reference, mask)
    }

    #[inline]
    pub unsafe fn stencil_mask_separate(&self, face: Face, mask: GLuint) {
        self.functions.glStencilMaskSeparate(face.into(), mask)
    }

    #[inline]
    pub unsafe fn create_shader(&self, shader_type: ShaderType) -> GLuint {
        self.functions.glCreateShader(shader_type.into())
    }

    #[inline]
    pub unsafe fn delete_shader(&self, shader: GLuint) {
        self.functions.glDeleteShader(shader)
    }

    #[inline]
    pub unsafe fn is_shader(&self, shader: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsShader(shader))
    }

    /// Replaces the source of `shader` with the concatenation of `sources`.
    pub unsafe fn shader_source<S>(&self, shader: GLuint, sources: &[S]) where S: AsRef<str> {
        let sources = ScratchCStrArray::new(sources);
        self.functions.glShaderSource(shader, sources.count(), sources.as_ptr(), sources.lengths())
    }

    #[inline]
    pub unsafe fn compile_shader(&self, shader: GLuint) {
        self.functions.glCompileShader(shader)
    }

    #[inline]
    pub unsafe fn get_shader_parameter(&self, shader: GLuint, pname: ShaderParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetShaderiv(shader, pname.into(), &mut value);
        value
    }

    pub unsafe fn get_shader_info_log(&self, shader: GLuint) -> String {
        let capacity = self.get_shader_parameter(shader, ShaderParameter::InfoLogLength).max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetShaderInfoLog(shader,
                                          capacity,
                                          &mut length,
                                          buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    pub unsafe fn get_shader_source(&self, shader: GLuint) -> String {
        let capacity = self.get_shader_parameter(shader, ShaderParameter::ShaderSourceLength).max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetShaderSource(shader,
                                         capacity,
                                         &mut length,
                                         buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    #[inline]
    pub unsafe fn create_program(&self) -> GLuint {
        self.functions.glCreateProgram()
    }

    #[inline]
    pub unsafe fn delete_program(&self, program: GLuint) {
        self.functions.glDeleteProgram(program)
    }

    #[inline]
    pub unsafe fn is_program(&self, program: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsProgram(program))
    }

    #[inline]
    pub unsafe fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.functions.glAttachShader(program, shader)
    }

    #[inline]
    pub unsafe fn detach_shader(&self, program: GLuint, shader: GLuint) {
        self.functions.glDetachShader(program, shader)
    }

    pub unsafe fn get_attached_shaders(&self, program: GLuint) -> Vec<GLuint> {
        let capacity = self.get_program_parameter(program, ProgramParameter::AttachedShaders);
        let mut shaders = vec![0; capacity.max(0) as usize];
        let mut count = 0;
        self.functions.glGetAttachedShaders(program, capacity, &mut count, shaders.as_mut_ptr());
        shaders.truncate(count.max(0) as usize);
        shaders
    }

    #[inline]
    pub unsafe fn link_program(&self, program: GLuint) {
        self.functions.glLinkProgram(program)
    }

    #[inline]
    pub unsafe fn validate_program(&self, program: GLuint) {
        self.functions.glValidateProgram(program)
    }

    #[inline]
    pub unsafe fn use_program(&self, program: GLuint) {
        self.functions.glUseProgram(program)
    }

    #[inline]
    pub unsafe fn get_program_parameter(&self, program: GLuint, pname: ProgramParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetProgramiv(program, pname.into(), &mut value);
        value
    }

    pub unsafe fn get_program_info_log(&self, program: GLuint) -> String {
        let capacity = self.get_program_parameter(program, ProgramParameter::InfoLogLength).max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut length = 0;
        self.functions.glGetProgramInfoLog(program,
                                           capacity,
                                           &mut length,
                                           buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    #[inline]
    pub unsafe fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) {
        let name = ScratchCStr::new(name);
        self.functions.glBindAttribLocation(program, index, name.as_ptr())
    }

    /// Returns `None` if `name` is not an active attribute of `program`.
    pub unsafe fn get_attrib_location(&self, program: GLuint, name: &str) -> Option<GLuint> {
        let name = ScratchCStr::new(name);
        let location = self.functions.glGetAttribLocation(program, name.as_ptr());
        if location < 0 { None } else { Some(location as GLuint) }
    }

    /// Returns `None` if `name` is not an active uniform of `program`.
    pub unsafe fn get_uniform_location(&self, program: GLuint, name: &str) -> Option<GLint> {
        let name = ScratchCStr::new(name);
        let location = self.functions.glGetUniformLocation(program, name.as_ptr());
        if location < 0 { None } else { Some(location) }
    }

    pub unsafe fn get_active_attrib(&self, program: GLuint, index: GLuint) -> ActiveVariable {
        let capacity =
            self.get_program_parameter(program, ProgramParameter::ActiveAttributeMaxLength).max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let (mut length, mut size, mut gltype) = (0, 0, 0);
        self.functions.glGetActiveAttrib(program,
                                         index,
                                         capacity,
                                         &mut length,
                                         &mut size,
                                         &mut gltype,
                                         buffer.as_mut_ptr() as *mut GLchar);
        ActiveVariable { name: marshal::string_from_buffer(buffer, length), size, gltype }
    }

    pub unsafe fn get_active_uniform(&self, program: GLuint, index: GLuint) -> ActiveVariable {
        let capacity =
            self.get_program_parameter(program, ProgramParameter::ActiveUniformMaxLength).max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let (mut length, mut size, mut gltype) = (0, 0, 0);
        self.functions.glGetActiveUniform(program,
                                          index,
                                          capacity,
                                          &mut length,
                                          &mut size,
                                          &mut gltype,
                                          buffer.as_mut_ptr() as *mut GLchar);
        ActiveVariable { name: marshal::string_from_buffer(buffer, length), size, gltype }
    }

    #[inline]
    pub unsafe fn get_uniform_fv(&self, program: GLuint, location: GLint, values: &mut [GLfloat]) {
        self.functions.glGetUniformfv(program, location, values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_uniform_iv(&self, program: GLuint, location: GLint, values: &mut [GLint]) {
        self.functions.glGetUniformiv(program, location, values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn uniform_1f(&self, location: GLint, x: f32) {
        self.functions.glUniform1f(location, x)
    }

    #[inline]
    pub unsafe fn uniform_2f(&self, location: GLint, x: f32, y: f32) {
        self.functions.glUniform2f(location, x, y)
    }

    #[inline]
    pub unsafe fn uniform_3f(&self, location: GLint, x: f32, y: f32, z: f32) {
        self.functions.glUniform3f(location, x, y, z)
    }

    #[inline]
    pub unsafe fn uniform_4f(&self, location: GLint, x: f32, y: f32, z: f32, w: f32) {
        self.functions.glUniform4f(location, x, y, z, w)
    }

    #[inline]
    pub unsafe fn uniform_1i(&self, location: GLint, x: i32) {
        self.functions.glUniform1i(location, x)
    }

    #[inline]
    pub unsafe fn uniform_2i(&self, location: GLint, x: i32, y: i32) {
        self.functions.glUniform2i(location, x, y)
    }

    #[inline]
    pub unsafe fn uniform_3i(&self, location: GLint, x: i32, y: i32, z: i32) {
        self.functions.glUniform3i(location, x, y, z)
    }

    #[inline]
    pub unsafe fn uniform_4i(&self, location: GLint, x: i32, y: i32, z: i32, w: i32) {
        self.functions.glUniform4i(location, x, y, z, w)
    }

    #[inline]
    pub unsafe fn uniform_1fv(&self, location: GLint, values: &[f32]) {
        self.functions.glUniform1fv(location, marshal::count(values), values.as_ptr())
    }

    #[inline]
    pub unsafe fn uniform_2fv(&self, location: GLint, values: &[[f32; 2]]) {
        self.functions.glUniform2fv(location, marshal::count(values), values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_3fv(&self, location: GLint, values: &[[f32; 3]]) {
        self.functions.glUniform3fv(location, marshal::count(values), values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_4fv(&self, location: GLint, values: &[[f32; 4]]) {
        self.functions.glUniform4fv(location, marshal::count(values), values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_1iv(&self, location: GLint, values: &[i32]) {
        self.functions.glUniform1iv(location, marshal::count(values), values.as_ptr())
    }

    #[inline]
    pub unsafe fn uniform_2iv(&self, location: GLint, values: &[[i32; 2]]) {
        self.functions.glUniform2iv(location, marshal::count(values), values.as_ptr() as *const i32)
    }

    #[inline]
    pub unsafe fn uniform_3iv(&self, location: GLint, values: &[[i32; 3]]) {
        self.functions.glUniform3iv(location, marshal::count(values), values.as_ptr() as *const i32)
    }

    #[inline]
    pub unsafe fn uniform_4iv(&self, location: GLint, values: &[[i32; 4]]) {
        self.functions.glUniform4iv(location, marshal::count(values), values.as_ptr() as *const i32)
    }

    /// Uploads column-major 2x2 matrices, transposing them first if `transpose` is set.
    #[inline]
    pub unsafe fn uniform_matrix_2fv(&self, location: GLint, transpose: bool, values: &[[f32; 4]]) {
        self.functions.glUniformMatrix2fv(location,
                                          marshal::count(values),
                                          marshal::gl_bool(transpose),
                                          values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_matrix_3fv(&self, location: GLint, transpose: bool, values: &[[f32; 9]]) {
        self.functions.glUniformMatrix3fv(location,
                                          marshal::count(values),
                                          marshal::gl_bool(transpose),
                                          values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_matrix_4fv(&self, location: GLint, transpose: bool, values: &[[f32; 16]]) {
        self.functions.glUniformMatrix4fv(location,
                                          marshal::count(values),
                                          marshal::gl_bool(transpose),
                                          values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn enable_vertex_attrib_array(&self, index: GLuint) {
        self.functions.glEnableVertexAttribArray(index)
    }

    #[inline]
    pub unsafe fn disable_vertex_attrib_array(&self, index: GLuint) {
        self.functions.glDisableVertexAttribArray(index)
    }

    /// Sources attribute `index` from the bound array buffer, starting `offset` bytes in.
    pub unsafe fn vertex_attrib_pointer(&self,
                                        index: GLuint,
                                        size: GLint,
                                        attrib_type: VertexAttribType,
                                        normalized: bool,
                                        stride: GLsizei,
                                        offset: usize) {
        self.functions.glVertexAttribPointer(index,
                                             size,
                                             attrib_type.into(),
                                             marshal::gl_bool(normalized),
                                             stride,
                                             marshal::offset_ptr(offset))
    }

    #[inline]
    pub unsafe fn vertex_attrib_1f(&self, index: GLuint, x: f32) {
        self.functions.glVertexAttrib1f(index, x)
    }

    #[inline]
    pub unsafe fn vertex_attrib_2f(&self, index: GLuint, x: f32, y: f32) {
        self.functions.glVertexAttrib2f(index, x, y)
    }

    #[inline]
    pub unsafe fn vertex_attrib_3f(&self, index: GLuint, x: f32, y: f32, z: f32) {
        self.functions.glVertexAttrib3f(index, x, y, z)
    }

    #[inline]
    pub unsafe fn vertex_attrib_4f(&self, index: GLuint, x: f32, y: f32, z: f32, w: f32) {
        self.functions.glVertexAttrib4f(index, x, y, z, w)
    }

    #[inline]
    pub unsafe fn vertex_attrib_4fv(&self, index: GLuint, value: &[f32; 4]) {
        self.functions.glVertexAttrib4fv(index, value.as_ptr())
    }

    #[inline]
    pub unsafe fn get_vertex_attrib_i(&self, index: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        self.functions.glGetVertexAttribiv(index, pname, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_vertex_attrib_fv(&self, index: GLuint, pname: GLenum, values: &mut [GLfloat]) {
        self.functions.glGetVertexAttribfv(index, pname, values.as_mut_ptr())
    }

    /// The byte offset given to the last `vertex_attrib_pointer` call for `index`.
    pub unsafe fn get_vertex_attrib_offset(&self, index: GLuint) -> usize {
        let mut pointer = ptr::null_mut();
        self.functions.glGetVertexAttribPointerv(index,
                                                 gl::VERTEX_ATTRIB_ARRAY_POINTER,
                                                 &mut pointer);
        pointer as usize
    }
}
