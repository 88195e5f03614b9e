// glbind/src/ext/v45.rs
//
//! Extensions promoted to core in OpenGL 4.5, apart from `GL_ARB_direct_state_access`.

use crate::enums::{MemoryBarrier, PixelFormat, PixelType};
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal;

use bytemuck::Pod;
use euclid::default::{Box3D, Rect};
use std::os::raw::c_void;

gl_functions! {
    pub struct ARBClipControlFunctions {
        fn glClipControl(origin: GLenum, depth: GLenum) = ["glClipControlARB", "glClipControlEXT"];
    }
}

gl_extension! {
    pub struct ARBClipControl(ARBClipControlFunctions) {
        name: "GL_ARB_clip_control",
        core: Some(GLVersion::new(4, 5)),
        extensions: ["GL_ARB_clip_control"],
    }
}

gl_enum! {
    pub enum ClipOrigin {
        LowerLeft = gl::LOWER_LEFT,
        UpperLeft = gl::UPPER_LEFT,
    }
}

gl_enum! {
    pub enum ClipDepth {
        NegativeOneToOne = gl::NEGATIVE_ONE_TO_ONE,
        ZeroToOne = gl::ZERO_TO_ONE,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBClipControl {
    /// Sets the clip-space conventions. `UpperLeft`/`ZeroToOne` matches Direct3D and Vulkan.
    #[inline]
    pub unsafe fn clip_control(&self, origin: ClipOrigin, depth: ClipDepth) {
        self.functions.glClipControl(origin.into(), depth.into())
    }
}

gl_functions! {
    pub struct ARBES31CompatibilityFunctions {
        fn glMemoryBarrierByRegion(barriers: GLbitfield);
    }
}

gl_extension! {
    pub struct ARBES31Compatibility(ARBES31CompatibilityFunctions) {
        name: "GL_ARB_ES3_1_compatibility",
        core: Some(GLVersion::new(4, 5)),
        extensions: ["GL_ARB_ES3_1_compatibility"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBES31Compatibility {
    /// Like `memory_barrier`, but only orders accesses within the same framebuffer region.
    #[inline]
    pub unsafe fn memory_barrier_by_region(&self, barriers: MemoryBarrier) {
        self.functions.glMemoryBarrierByRegion(barriers.bits())
    }
}

gl_functions! {
    pub struct ARBGetTextureSubImageFunctions {
        fn glGetTextureSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                                zoffset: GLint, width: GLsizei, height: GLsizei,
                                depth: GLsizei, format: GLenum, gltype: GLenum,
                                bufSize: GLsizei, pixels: *mut c_void);
        fn glGetCompressedTextureSubImage(texture: GLuint, level: GLint, xoffset: GLint,
                                          yoffset: GLint, zoffset: GLint, width: GLsizei,
                                          height: GLsizei, depth: GLsizei, bufSize: GLsizei,
                                          pixels: *mut c_void);
    }
}

gl_extension! {
    pub struct ARBGetTextureSubImage(ARBGetTextureSubImageFunctions) {
        name: "GL_ARB_get_texture_sub_image",
        core: Some(GLVersion::new(4, 5)),
        extensions: ["GL_ARB_get_texture_sub_image"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBGetTextureSubImage {
    /// Reads a region of a texture level into `pixels`. The driver refuses to write past the
    /// end of the slice.
    pub unsafe fn get_texture_sub_image<T>(&self,
                                           texture: GLuint,
                                           level: GLint,
                                           region: Box3D<i32>,
                                           format: PixelFormat,
                                           pixel_type: PixelType,
                                           pixels: &mut [T])
                                           where T: Pod {
        let size = region.size();
        self.functions.glGetTextureSubImage(texture,
                                            level,
                                            region.min.x,
                                            region.min.y,
                                            region.min.z,
                                            size.width,
                                            size.height,
                                            size.depth,
                                            format.into(),
                                            pixel_type.into(),
                                            marshal::byte_len(pixels) as GLsizei,
                                            pixels.as_mut_ptr() as *mut c_void)
    }

    pub unsafe fn get_compressed_texture_sub_image(&self,
                                                   texture: GLuint,
                                                   level: GLint,
                                                   region: Box3D<i32>,
                                                   data: &mut [u8]) {
        let size = region.size();
        self.functions.glGetCompressedTextureSubImage(texture,
                                                      level,
                                                      region.min.x,
                                                      region.min.y,
                                                      region.min.z,
                                                      size.width,
                                                      size.height,
                                                      size.depth,
                                                      marshal::count(data),
                                                      data.as_mut_ptr() as *mut c_void)
    }
}

gl_functions! {
    pub struct KHRRobustnessFunctions {
        fn glGetGraphicsResetStatus() -> GLenum
            = ["glGetGraphicsResetStatusKHR", "glGetGraphicsResetStatusARB",
               "glGetGraphicsResetStatusEXT"];
        fn glReadnPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum,
                         gltype: GLenum, bufSize: GLsizei, data: *mut c_void)
            = ["glReadnPixelsKHR", "glReadnPixelsARB", "glReadnPixelsEXT"];
        fn glGetnUniformfv(program: GLuint, location: GLint, bufSize: GLsizei,
                           params: *mut GLfloat)
            = ["glGetnUniformfvKHR", "glGetnUniformfvARB", "glGetnUniformfvEXT"];
        fn glGetnUniformiv(program: GLuint, location: GLint, bufSize: GLsizei,
                           params: *mut GLint)
            = ["glGetnUniformivKHR", "glGetnUniformivARB", "glGetnUniformivEXT"];
        fn glGetnUniformuiv(program: GLuint, location: GLint, bufSize: GLsizei,
                            params: *mut GLuint)
            = ["glGetnUniformuivKHR", "glGetnUniformuivARB"];
    }
}

gl_extension! {
    /// Reset notification and bounds-checked reads.
    pub struct KHRRobustness(KHRRobustnessFunctions) {
        name: "GL_KHR_robustness",
        core: Some(GLVersion::new(4, 5)),
        extensions: ["GL_KHR_robustness", "GL_ARB_robustness"],
    }
}

gl_enum! {
    pub enum GraphicsResetStatus {
        NoError = gl::NO_ERROR,
        GuiltyContextReset = gl::GUILTY_CONTEXT_RESET,
        InnocentContextReset = gl::INNOCENT_CONTEXT_RESET,
        UnknownContextReset = gl::UNKNOWN_CONTEXT_RESET,
    }
}

#[allow(clippy::missing_safety_doc)]
impl KHRRobustness {
    /// Returns `None` while the context has not been reset.
    pub unsafe fn get_graphics_reset_status(&self) -> Option<GraphicsResetStatus> {
        match GraphicsResetStatus::from_raw(self.functions.glGetGraphicsResetStatus()) {
            Some(GraphicsResetStatus::NoError) => None,
            Some(status) => Some(status),
            None => Some(GraphicsResetStatus::UnknownContextReset),
        }
    }

    /// Like `read_pixels`, but never writes past the end of `pixels`.
    pub unsafe fn readn_pixels<T>(&self,
                                  rect: Rect<i32>,
                                  format: PixelFormat,
                                  pixel_type: PixelType,
                                  pixels: &mut [T])
                                  where T: Pod {
        self.functions.glReadnPixels(rect.origin.x,
                                     rect.origin.y,
                                     rect.size.width,
                                     rect.size.height,
                                     format.into(),
                                     pixel_type.into(),
                                     marshal::byte_len(pixels) as GLsizei,
                                     pixels.as_mut_ptr() as *mut c_void)
    }

    #[inline]
    pub unsafe fn getn_uniform_fv(&self, program: GLuint, location: GLint, values: &mut [GLfloat]) {
        self.functions.glGetnUniformfv(program,
                                       location,
                                       marshal::byte_len(values) as GLsizei,
                                       values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn getn_uniform_iv(&self, program: GLuint, location: GLint, values: &mut [GLint]) {
        self.functions.glGetnUniformiv(program,
                                       location,
                                       marshal::byte_len(values) as GLsizei,
                                       values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn getn_uniform_uiv(&self, program: GLuint, location: GLint, values: &mut [GLuint]) {
        self.functions.glGetnUniformuiv(program,
                                        location,
                                        marshal::byte_len(values) as GLsizei,
                                        values.as_mut_ptr())
    }
}

gl_functions! {
    pub struct ARBTextureBarrierFunctions {
        fn glTextureBarrier() = ["glTextureBarrierNV"];
    }
}

gl_extension! {
    pub struct ARBTextureBarrier(ARBTextureBarrierFunctions) {
        name: "GL_ARB_texture_barrier",
        core: Some(GLVersion::new(4, 5)),
        extensions: ["GL_ARB_texture_barrier", "GL_NV_texture_barrier"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTextureBarrier {
    /// Makes texel writes from earlier draws visible to texture fetches in later ones.
    #[inline]
    pub unsafe fn texture_barrier(&self) {
        self.functions.glTextureBarrier()
    }
}
