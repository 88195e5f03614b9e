// glbind/src/ext/v33.rs
//
//! Extensions promoted to core in OpenGL 3.3.

use crate::enums::{CompareFunc, QueryObjectParameter, TextureFilter, TextureWrap};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr};

gl_functions! {
    pub struct ARBBlendFuncExtendedFunctions {
        fn glBindFragDataLocationIndexed(program: GLuint, colorNumber: GLuint, index: GLuint,
                                         name: *const GLchar)
            = ["glBindFragDataLocationIndexedEXT"];
        fn glGetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint
            = ["glGetFragDataIndexEXT"];
    }
}

gl_extension! {
    /// Dual-source blending.
    pub struct ARBBlendFuncExtended(ARBBlendFuncExtendedFunctions) {
        name: "GL_ARB_blend_func_extended",
        core: Some(GLVersion::new(3, 3)),
        extensions: ["GL_ARB_blend_func_extended"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBBlendFuncExtended {
    #[inline]
    pub unsafe fn bind_frag_data_location_indexed(&self,
                                                  program: GLuint,
                                                  color_number: GLuint,
                                                  index: GLuint,
                                                  name: &str) {
        let name = ScratchCStr::new(name);
        self.functions.glBindFragDataLocationIndexed(program, color_number, index, name.as_ptr())
    }

    /// Returns `None` if `name` is not an output variable of `program`.
    pub unsafe fn get_frag_data_index(&self, program: GLuint, name: &str) -> Option<GLuint> {
        let name = ScratchCStr::new(name);
        let index = self.functions.glGetFragDataIndex(program, name.as_ptr());
        if index < 0 { None } else { Some(index as GLuint) }
    }
}

gl_functions! {
    pub struct ARBSamplerObjectsFunctions {
        fn glGenSamplers(count: GLsizei, samplers: *mut GLuint);
        fn glDeleteSamplers(count: GLsizei, samplers: *const GLuint);
        fn glIsSampler(sampler: GLuint) -> GLboolean;
        fn glBindSampler(unit: GLuint, sampler: GLuint);
        fn glSamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
        fn glSamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
        fn glSamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint);
        fn glSamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);
        fn glSamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint)
            = ["glSamplerParameterIivEXT"];
        fn glSamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint)
            = ["glSamplerParameterIuivEXT"];
        fn glGetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
        fn glGetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
        fn glGetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint)
            = ["glGetSamplerParameterIivEXT"];
        fn glGetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint)
            = ["glGetSamplerParameterIuivEXT"];
    }
}

gl_extension! {
    pub struct ARBSamplerObjects(ARBSamplerObjectsFunctions) {
        name: "GL_ARB_sampler_objects",
        core: Some(GLVersion::new(3, 3)),
        extensions: ["GL_ARB_sampler_objects"],
    }
}

gl_enum! {
    pub enum SamplerParameter {
        MinFilter = gl::TEXTURE_MIN_FILTER,
        MagFilter = gl::TEXTURE_MAG_FILTER,
        WrapS = gl::TEXTURE_WRAP_S,
        WrapT = gl::TEXTURE_WRAP_T,
        WrapR = gl::TEXTURE_WRAP_R,
        MinLod = gl::TEXTURE_MIN_LOD,
        MaxLod = gl::TEXTURE_MAX_LOD,
        LodBias = gl::TEXTURE_LOD_BIAS,
        BorderColor = gl::TEXTURE_BORDER_COLOR,
        CompareMode = gl::TEXTURE_COMPARE_MODE,
        CompareFunc = gl::TEXTURE_COMPARE_FUNC,
        MaxAnisotropy = gl::TEXTURE_MAX_ANISOTROPY,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBSamplerObjects {
    pub unsafe fn gen_samplers(&self, count: usize) -> Vec<GLuint> {
        let mut samplers = vec![0; count];
        self.functions.glGenSamplers(count as GLsizei, samplers.as_mut_ptr());
        samplers
    }

    #[inline]
    pub unsafe fn gen_sampler(&self) -> GLuint {
        let mut sampler = 0;
        self.functions.glGenSamplers(1, &mut sampler);
        sampler
    }

    #[inline]
    pub unsafe fn delete_samplers(&self, samplers: &[GLuint]) {
        self.functions.glDeleteSamplers(marshal::count(samplers), samplers.as_ptr())
    }

    #[inline]
    pub unsafe fn is_sampler(&self, sampler: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsSampler(sampler))
    }

    /// Binds `sampler` to texture unit `unit` (an index, not `GL_TEXTUREi`). Zero unbinds.
    #[inline]
    pub unsafe fn bind_sampler(&self, unit: GLuint, sampler: GLuint) {
        self.functions.glBindSampler(unit, sampler)
    }

    #[inline]
    pub unsafe fn sampler_parameter_i(&self, sampler: GLuint, pname: SamplerParameter, value: GLint) {
        self.functions.glSamplerParameteri(sampler, pname.into(), value)
    }

    #[inline]
    pub unsafe fn sampler_parameter_f(&self, sampler: GLuint, pname: SamplerParameter, value: GLfloat) {
        self.functions.glSamplerParameterf(sampler, pname.into(), value)
    }

    #[inline]
    pub unsafe fn sampler_parameter_iv(&self, sampler: GLuint, pname: SamplerParameter, values: &[GLint]) {
        self.functions.glSamplerParameteriv(sampler, pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn sampler_parameter_fv(&self, sampler: GLuint, pname: SamplerParameter, values: &[GLfloat]) {
        self.functions.glSamplerParameterfv(sampler, pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn sampler_parameter_iiv(&self, sampler: GLuint, pname: SamplerParameter, values: &[GLint]) {
        self.functions.glSamplerParameterIiv(sampler, pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn sampler_parameter_iuiv(&self,
                                         sampler: GLuint,
                                         pname: SamplerParameter,
                                         values: &[GLuint]) {
        self.functions.glSamplerParameterIuiv(sampler, pname.into(), values.as_ptr())
    }

    pub unsafe fn sampler_filters(&self, sampler: GLuint, min: TextureFilter, mag: TextureFilter) {
        self.sampler_parameter_i(sampler, SamplerParameter::MinFilter, GLenum::from(min) as GLint);
        self.sampler_parameter_i(sampler, SamplerParameter::MagFilter, GLenum::from(mag) as GLint);
    }

    pub unsafe fn sampler_wrap(&self, sampler: GLuint, s: TextureWrap, t: TextureWrap, r: TextureWrap) {
        self.sampler_parameter_i(sampler, SamplerParameter::WrapS, GLenum::from(s) as GLint);
        self.sampler_parameter_i(sampler, SamplerParameter::WrapT, GLenum::from(t) as GLint);
        self.sampler_parameter_i(sampler, SamplerParameter::WrapR, GLenum::from(r) as GLint);
    }

    /// Enables depth comparison with `func`, or disables it when `func` is `None`.
    pub unsafe fn sampler_compare(&self, sampler: GLuint, func: Option<CompareFunc>) {
        match func {
            Some(func) => {
                self.sampler_parameter_i(sampler,
                                         SamplerParameter::CompareMode,
                                         gl::COMPARE_REF_TO_TEXTURE as GLint);
                self.sampler_parameter_i(sampler,
                                         SamplerParameter::CompareFunc,
                                         GLenum::from(func) as GLint);
            }
            None => {
                self.sampler_parameter_i(sampler, SamplerParameter::CompareMode, gl::NONE as GLint)
            }
        }
    }

    #[inline]
    pub unsafe fn get_sampler_parameter_i(&self, sampler: GLuint, pname: SamplerParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetSamplerParameteriv(sampler, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_sampler_parameter_f(&self, sampler: GLuint, pname: SamplerParameter) -> GLfloat {
        let mut value = 0.0;
        self.functions.glGetSamplerParameterfv(sampler, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_sampler_parameter_fv(&self,
                                           sampler: GLuint,
                                           pname: SamplerParameter,
                                           values: &mut [GLfloat]) {
        self.functions.glGetSamplerParameterfv(sampler, pname.into(), values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_sampler_parameter_iiv(&self,
                                            sampler: GLuint,
                                            pname: SamplerParameter,
                                            values: &mut [GLint]) {
        self.functions.glGetSamplerParameterIiv(sampler, pname.into(), values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_sampler_parameter_iuiv(&self,
                                             sampler: GLuint,
                                             pname: SamplerParameter,
                                             values: &mut [GLuint]) {
        self.functions.glGetSamplerParameterIuiv(sampler, pname.into(), values.as_mut_ptr())
    }
}

gl_functions! {
    pub struct ARBTimerQueryFunctions {
        fn glQueryCounter(id: GLuint, target: GLenum) = ["glQueryCounterEXT"];
        fn glGetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64)
            = ["glGetQueryObjecti64vEXT"];
        fn glGetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64)
            = ["glGetQueryObjectui64vEXT"];
    }
}

gl_extension! {
    pub struct ARBTimerQuery(ARBTimerQueryFunctions) {
        name: "GL_ARB_timer_query",
        core: Some(GLVersion::new(3, 3)),
        extensions: ["GL_ARB_timer_query"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTimerQuery {
    /// Records the GPU time, in nanoseconds, into `query` once preceding commands complete.
    #[inline]
    pub unsafe fn query_counter(&self, query: GLuint) {
        self.functions.glQueryCounter(query, gl::TIMESTAMP)
    }

    #[inline]
    pub unsafe fn get_query_object_i64(&self, query: GLuint, pname: QueryObjectParameter) -> GLint64 {
        let mut value = 0;
        self.functions.glGetQueryObjecti64v(query, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_query_object_ui64(&self, query: GLuint, pname: QueryObjectParameter) -> GLuint64 {
        let mut value = 0;
        self.functions.glGetQueryObjectui64v(query, pname.into(), &mut value);
        value
    }
}

gl_functions! {
    pub struct ARBInstancedArraysFunctions {
        fn glVertexAttribDivisor(index: GLuint, divisor: GLuint)
            = ["glVertexAttribDivisorARB", "glVertexAttribDivisorEXT"];
    }
}

gl_extension! {
    pub struct ARBInstancedArrays(ARBInstancedArraysFunctions) {
        name: "GL_ARB_instanced_arrays",
        core: Some(GLVersion::new(3, 3)),
        extensions: ["GL_ARB_instanced_arrays"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBInstancedArrays {
    /// Advances attribute `index` once every `divisor` instances; zero means per vertex.
    #[inline]
    pub unsafe fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint) {
        self.functions.glVertexAttribDivisor(index, divisor)
    }
}
