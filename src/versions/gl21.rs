// glbind/src/versions/gl21.rs
//
//! OpenGL 2.1: non-square matrix uniforms.

use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

gl_functions! {
    pub struct GL21Functions {
        fn glUniformMatrix2x3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                                value: *const GLfloat);
        fn glUniformMatrix3x2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                                value: *const GLfloat);
        fn glUniformMatrix2x4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                                value: *const GLfloat);
        fn glUniformMatrix4x2fv(location: GLint, count: GLsizei, transpose: GLboolean,
                                value: *const GLfloat);
        fn glUniformMatrix3x4fv(location: GLint, count: GLsizei, transpose: GLboolean,
                                value: *const GLfloat);
        fn glUniformMatrix4x3fv(location: GLint, count: GLsizei, transpose: GLboolean,
                                value: *const GLfloat);
    }
}

gl_extension! {
    pub struct GL21(GL21Functions) {
        name: "GL_VERSION_2_1",
        core: Some(GLVersion::new(2, 1)),
        extensions: [],
    }
}

// Matrices are `columns x rows`, stored column-major.
#[allow(clippy::missing_safety_doc)]
impl GL21 {
    #[inline]
    pub unsafe fn uniform_matrix_2x3fv(&self, location: GLint, transpose: bool, values: &[[f32; 6]]) {
        self.functions.glUniformMatrix2x3fv(location,
                                            marshal::count(values),
                                            marshal::gl_bool(transpose),
                                            values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_matrix_3x2fv(&self, location: GLint, transpose: bool, values: &[[f32; 6]]) {
        self.functions.glUniformMatrix3x2fv(location,
                                            marshal::count(values),
                                            marshal::gl_bool(transpose),
                                            values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_matrix_2x4fv(&self, location: GLint, transpose: bool, values: &[[f32; 8]]) {
        self.functions.glUniformMatrix2x4fv(location,
                                            marshal::count(values),
                                            marshal::gl_bool(transpose),
                                            values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_matrix_4x2fv(&self, location: GLint, transpose: bool, values: &[[f32; 8]]) {
        self.functions.glUniformMatrix4x2fv(location,
                                            marshal::count(values),
                                            marshal::gl_bool(transpose),
                                            values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_matrix_3x4fv(&self, location: GLint, transpose: bool, values: &[[f32; 12]]) {
        self.functions.glUniformMatrix3x4fv(location,
                                            marshal::count(values),
                                            marshal::gl_bool(transpose),
                                            values.as_ptr() as *const f32)
    }

    #[inline]
    pub unsafe fn uniform_matrix_4x3fv(&self, location: GLint, transpose: bool, values: &[[f32; 12]]) {
        self.functions.glUniformMatrix4x3fv(location,
                                            marshal::count(values),
                                            marshal::gl_bool(transpose),
                                            values.as_ptr() as *const f32)
    }
}
