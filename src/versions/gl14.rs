// glbind/src/versions/gl14.rs
//
//! OpenGL 1.4.

use crate::enums::{BlendEquation, BlendFactor, IndexType, PrimitiveType};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;

use std::os::raw::c_void;

gl_functions! {
    pub struct GL14Functions {
        fn glBlendFuncSeparate(sfactorRGB: GLenum, dfactorRGB: GLenum, sfactorAlpha: GLenum,
                               dfactorAlpha: GLenum) = ["glBlendFuncSeparateEXT"];
        fn glMultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei,
                             drawcount: GLsizei) = ["glMultiDrawArraysEXT"];
        fn glMultiDrawElements(mode: GLenum, count: *const GLsizei, gltype: GLenum,
                               indices: *const *const c_void, drawcount: GLsizei)
            = ["glMultiDrawElementsEXT"];
        fn glPointParameterf(pname: GLenum, param: GLfloat) = ["glPointParameterfARB"];
        fn glPointParameterfv(pname: GLenum, params: *const GLfloat) = ["glPointParameterfvARB"];
        fn glPointParameteri(pname: GLenum, param: GLint) = ["glPointParameteriNV"];
        fn glPointParameteriv(pname: GLenum, params: *const GLint) = ["glPointParameterivNV"];
        fn glBlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat)
            = ["glBlendColorEXT"];
        fn glBlendEquation(mode: GLenum) = ["glBlendEquationEXT"];
    }
}

gl_extension! {
    pub struct GL14(GL14Functions) {
        name: "GL_VERSION_1_4",
        core: Some(GLVersion::new(1, 4)),
        extensions: [],
    }
}

gl_enum! {
    pub enum PointParameter {
        FadeThresholdSize = gl::POINT_FADE_THRESHOLD_SIZE,
        SpriteCoordOrigin = gl::POINT_SPRITE_COORD_ORIGIN,
    }
}

#[allow(clippy::missing_safety_doc)]
impl GL14 {
    #[inline]
    pub unsafe fn blend_func_separate(&self,
                                      src_rgb: BlendFactor,
                                      dst_rgb: BlendFactor,
                                      src_alpha: BlendFactor,
                                      dst_alpha: BlendFactor) {
        self.functions.glBlendFuncSeparate(src_rgb.into(),
                                           dst_rgb.into(),
                                           src_alpha.into(),
                                           dst_alpha.into())
    }

    /// Issues one `glDrawArrays` per `(first, count)` pair.
    ///
    /// Both slices must have the same length.
    pub unsafe fn multi_draw_arrays(&self, mode: PrimitiveType, first: &[GLint], count: &[GLsizei]) {
        debug_assert_eq!(first.len(), count.len());
        let draw_count = first.len().min(count.len()) as GLsizei;
        self.functions.glMultiDrawArrays(mode.into(), first.as_ptr(), count.as_ptr(), draw_count)
    }

    /// Issues one `glDrawElements` per `(count, offset)` pair, offsets being byte offsets into
    /// the bound element array buffer.
    pub unsafe fn multi_draw_elements(&self,
                                      mode: PrimitiveType,
                                      count: &[GLsizei],
                                      index_type: IndexType,
                                      offsets: &[usize]) {
        debug_assert_eq!(count.len(), offsets.len());
        let draw_count = count.len().min(offsets.len()) as GLsizei;
        self.functions.glMultiDrawElements(mode.into(),
                                           count.as_ptr(),
                                           index_type.into(),
                                           offsets.as_ptr() as *const *const c_void,
                                           draw_count)
    }

    #[inline]
    pub unsafe fn point_parameter_f(&self, pname: PointParameter, value: GLfloat) {
        self.functions.glPointParameterf(pname.into(), value)
    }

    #[inline]
    pub unsafe fn point_parameter_i(&self, pname: PointParameter, value: GLint) {
        self.functions.glPointParameteri(pname.into(), value)
    }

    #[inline]
    pub unsafe fn point_parameter_fv(&self, pname: PointParameter, values: &[GLfloat]) {
        self.functions.glPointParameterfv(pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn point_parameter_iv(&self, pname: PointParameter, values: &[GLint]) {
        self.functions.glPointParameteriv(pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.functions.glBlendColor(red, green, blue, alpha)
    }

    #[inline]
    pub unsafe fn blend_equation(&self, mode: BlendEquation) {
        self.functions.glBlendEquation(mode.into())
    }
}
