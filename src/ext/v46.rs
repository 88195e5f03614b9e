// glbind/src/ext/v46.rs
//
//! Extensions promoted to core in OpenGL 4.6.

use crate::enums::{IndexType, PrimitiveType};
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr};

use std::os::raw::c_void;

gl_functions! {
    pub struct ARBGLSpirvFunctions {
        fn glSpecializeShader(shader: GLuint, pEntryPoint: *const GLchar,
                              numSpecializationConstants: GLuint,
                              pConstantIndex: *const GLuint, pConstantValue: *const GLuint)
            = ["glSpecializeShaderARB"];
    }
}

gl_extension! {
    /// SPIR-V shader modules.
    ///
    /// The binary itself is uploaded with `glShaderBinary` (`GL_ARB_ES2_compatibility`) using
    /// the `GL_SHADER_BINARY_FORMAT_SPIR_V` format.
    pub struct ARBGLSpirv(ARBGLSpirvFunctions) {
        name: "GL_ARB_gl_spirv",
        core: Some(GLVersion::new(4, 6)),
        extensions: ["GL_ARB_gl_spirv"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBGLSpirv {
    /// Selects the entry point of a SPIR-V shader and sets its specialization constants.
    ///
    /// `indices` and `values` must have the same length.
    pub unsafe fn specialize_shader(&self,
                                    shader: GLuint,
                                    entry_point: &str,
                                    indices: &[GLuint],
                                    values: &[GLuint]) {
        debug_assert_eq!(indices.len(), values.len());
        let entry_point = ScratchCStr::new(entry_point);
        self.functions.glSpecializeShader(shader,
                                          entry_point.as_ptr(),
                                          indices.len() as GLuint,
                                          indices.as_ptr(),
                                          values.as_ptr())
    }
}

gl_functions! {
    pub struct ARBIndirectParametersFunctions {
        fn glMultiDrawArraysIndirectCount(mode: GLenum, indirect: *const c_void,
                                          drawcount: GLintptr, maxdrawcount: GLsizei,
                                          stride: GLsizei)
            = ["glMultiDrawArraysIndirectCountARB"];
        fn glMultiDrawElementsIndirectCount(mode: GLenum, gltype: GLenum,
                                            indirect: *const c_void, drawcount: GLintptr,
                                            maxdrawcount: GLsizei, stride: GLsizei)
            = ["glMultiDrawElementsIndirectCountARB"];
    }
}

gl_extension! {
    /// Indirect draws whose draw count is read from the `GL_PARAMETER_BUFFER` binding.
    pub struct ARBIndirectParameters(ARBIndirectParametersFunctions) {
        name: "GL_ARB_indirect_parameters",
        core: Some(GLVersion::new(4, 6)),
        extensions: ["GL_ARB_indirect_parameters"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBIndirectParameters {
    /// `offset` is into the bound draw indirect buffer, `count_offset` into the bound parameter
    /// buffer. At most `max_draw_count` commands are issued.
    #[inline]
    pub unsafe fn multi_draw_arrays_indirect_count(&self,
                                                   mode: PrimitiveType,
                                                   offset: usize,
                                                   count_offset: usize,
                                                   max_draw_count: GLsizei,
                                                   stride: GLsizei) {
        self.functions.glMultiDrawArraysIndirectCount(mode.into(),
                                                      marshal::offset_ptr(offset),
                                                      count_offset as GLintptr,
                                                      max_draw_count,
                                                      stride)
    }

    #[inline]
    pub unsafe fn multi_draw_elements_indirect_count(&self,
                                                     mode: PrimitiveType,
                                                     index_type: IndexType,
                                                     offset: usize,
                                                     count_offset: usize,
                                                     max_draw_count: GLsizei,
                                                     stride: GLsizei) {
        self.functions.glMultiDrawElementsIndirectCount(mode.into(),
                                                        index_type.into(),
                                                        marshal::offset_ptr(offset),
                                                        count_offset as GLintptr,
                                                        max_draw_count,
                                                        stride)
    }
}

gl_functions! {
    pub struct ARBPolygonOffsetClampFunctions {
        fn glPolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat)
            = ["glPolygonOffsetClampEXT"];
    }
}

gl_extension! {
    pub struct ARBPolygonOffsetClamp(ARBPolygonOffsetClampFunctions) {
        name: "GL_ARB_polygon_offset_clamp",
        core: Some(GLVersion::new(4, 6)),
        extensions: ["GL_ARB_polygon_offset_clamp", "GL_EXT_polygon_offset_clamp"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBPolygonOffsetClamp {
    /// Like `polygon_offset`, with the resulting offset clamped to `clamp` (no clamping when
    /// zero).
    #[inline]
    pub unsafe fn polygon_offset_clamp(&self, factor: f32, units: f32, clamp: f32) {
        self.functions.glPolygonOffsetClamp(factor, units, clamp)
    }
}
