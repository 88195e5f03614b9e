// glbind/src/ext/v30.rs
//
//! Extensions promoted to core in OpenGL 3.0.

use crate::enums::{BlitFilter, BufferMask, BufferTarget, Capability, FramebufferAttachment};
use crate::enums::{FramebufferStatus, FramebufferTarget, IndexedBufferTarget, InternalFormat};
use crate::enums::{MapAccess, TextureParameter, TextureTarget, VertexAttribType};
use crate::enums::TransformFeedbackPrimitive;
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr, ScratchCStrArray};

use euclid::default::{Box2D, Size2D};
use std::os::raw::c_void;

gl_functions! {
    pub struct EXTGPUShader4Functions {
        fn glBindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar)
            = ["glBindFragDataLocationEXT"];
        fn glGetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint
            = ["glGetFragDataLocationEXT"];
        fn glGetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint)
            = ["glGetUniformuivEXT"];
        fn glGetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint)
            = ["glGetVertexAttribIivEXT"];
        fn glGetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint)
            = ["glGetVertexAttribIuivEXT"];
        fn glUniform1ui(location: GLint, v0: GLuint) = ["glUniform1uiEXT"];
        fn glUniform2ui(location: GLint, v0: GLuint, v1: GLuint) = ["glUniform2uiEXT"];
        fn glUniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint)
            = ["glUniform3uiEXT"];
        fn glUniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint)
            = ["glUniform4uiEXT"];
        fn glUniform1uiv(location: GLint, count: GLsizei, value: *const GLuint)
            = ["glUniform1uivEXT"];
        fn glUniform4uiv(location: GLint, count: GLsizei, value: *const GLuint)
            = ["glUniform4uivEXT"];
        fn glVertexAttribI4i(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint)
            = ["glVertexAttribI4iEXT"];
        fn glVertexAttribI4ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint)
            = ["glVertexAttribI4uiEXT"];
        fn glVertexAttribIPointer(index: GLuint, size: GLint, gltype: GLenum, stride: GLsizei,
                                  pointer: *const c_void) = ["glVertexAttribIPointerEXT"];
    }
}

gl_extension! {
    /// Integer shader inputs and outputs.
    pub struct EXTGPUShader4(EXTGPUShader4Functions) {
        name: "GL_EXT_gpu_shader4",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_EXT_gpu_shader4"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl EXTGPUShader4 {
    #[inline]
    pub unsafe fn bind_frag_data_location(&self, program: GLuint, color: GLuint, name: &str) {
        let name = ScratchCStr::new(name);
        self.functions.glBindFragDataLocation(program, color, name.as_ptr())
    }

    /// Returns `None` if `name` is not an output variable of `program`.
    pub unsafe fn get_frag_data_location(&self, program: GLuint, name: &str) -> Option<GLuint> {
        let name = ScratchCStr::new(name);
        let location = self.functions.glGetFragDataLocation(program, name.as_ptr());
        if location < 0 { None } else { Some(location as GLuint) }
    }

    #[inline]
    pub unsafe fn get_uniform_uiv(&self, program: GLuint, location: GLint, values: &mut [GLuint]) {
        self.functions.glGetUniformuiv(program, location, values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_vertex_attrib_ii(&self, index: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        self.functions.glGetVertexAttribIiv(index, pname, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_vertex_attrib_iui(&self, index: GLuint, pname: GLenum) -> GLuint {
        let mut value = 0;
        self.functions.glGetVertexAttribIuiv(index, pname, &mut value);
        value
    }

    #[inline]
    pub unsafe fn uniform_1ui(&self, location: GLint, x: u32) {
        self.functions.glUniform1ui(location, x)
    }

    #[inline]
    pub unsafe fn uniform_2ui(&self, location: GLint, x: u32, y: u32) {
        self.functions.glUniform2ui(location, x, y)
    }

    #[inline]
    pub unsafe fn uniform_3ui(&self, location: GLint, x: u32, y: u32, z: u32) {
        self.functions.glUniform3ui(location, x, y, z)
    }

    #[inline]
    pub unsafe fn uniform_4ui(&self, location: GLint, x: u32, y: u32, z: u32, w: u32) {
        self.functions.glUniform4ui(location, x, y, z, w)
    }

    #[inline]
    pub unsafe fn uniform_1uiv(&self, location: GLint, values: &[u32]) {
        self.functions.glUniform1uiv(location, marshal::count(values), values.as_ptr())
    }

    #[inline]
    pub unsafe fn uniform_4uiv(&self, location: GLint, values: &[[u32; 4]]) {
        self.functions.glUniform4uiv(location, marshal::count(values), values.as_ptr() as *const u32)
    }

    #[inline]
    pub unsafe fn vertex_attrib_i4i(&self, index: GLuint, x: i32, y: i32, z: i32, w: i32) {
        self.functions.glVertexAttribI4i(index, x, y, z, w)
    }

    #[inline]
    pub unsafe fn vertex_attrib_i4ui(&self, index: GLuint, x: u32, y: u32, z: u32, w: u32) {
        self.functions.glVertexAttribI4ui(index, x, y, z, w)
    }

    /// Like `vertex_attrib_pointer`, but the values reach the shader as integers.
    pub unsafe fn vertex_attrib_i_pointer(&self,
                                          index: GLuint,
                                          size: GLint,
                                          attrib_type: VertexAttribType,
                                          stride: GLsizei,
                                          offset: usize) {
        self.functions.glVertexAttribIPointer(index,
                                              size,
                                              attrib_type.into(),
                                              stride,
                                              marshal::offset_ptr(offset))
    }
}

gl_functions! {
    pub struct NVConditionalRenderFunctions {
        fn glBeginConditionalRender(id: GLuint, mode: GLenum) = ["glBeginConditionalRenderNV"];
        fn glEndConditionalRender() = ["glEndConditionalRenderNV"];
    }
}

gl_extension! {
    pub struct NVConditionalRender(NVConditionalRenderFunctions) {
        name: "GL_NV_conditional_render",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_NV_conditional_render"],
    }
}

gl_enum! {
    pub enum ConditionalRenderMode {
        QueryWait = gl::QUERY_WAIT,
        QueryNoWait = gl::QUERY_NO_WAIT,
        QueryByRegionWait = gl::QUERY_BY_REGION_WAIT,
        QueryByRegionNoWait = gl::QUERY_BY_REGION_NO_WAIT,
        QueryWaitInverted = gl::QUERY_WAIT_INVERTED,
        QueryNoWaitInverted = gl::QUERY_NO_WAIT_INVERTED,
        QueryByRegionWaitInverted = gl::QUERY_BY_REGION_WAIT_INVERTED,
        QueryByRegionNoWaitInverted = gl::QUERY_BY_REGION_NO_WAIT_INVERTED,
    }
}

#[allow(clippy::missing_safety_doc)]
impl NVConditionalRender {
    /// Discards rendering commands until `end_conditional_render` if occlusion query `query`
    /// passed no samples.
    #[inline]
    pub unsafe fn begin_conditional_render(&self, query: GLuint, mode: ConditionalRenderMode) {
        self.functions.glBeginConditionalRender(query, mode.into())
    }

    #[inline]
    pub unsafe fn end_conditional_render(&self) {
        self.functions.glEndConditionalRender()
    }
}

gl_functions! {
    pub struct ARBMapBufferRangeFunctions {
        fn glMapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr,
                            access: GLbitfield) -> *mut c_void = ["glMapBufferRangeEXT"];
        fn glFlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr)
            = ["glFlushMappedBufferRangeEXT", "glFlushMappedBufferRangeAPPLE"];
    }
}

gl_extension! {
    pub struct ARBMapBufferRange(ARBMapBufferRangeFunctions) {
        name: "GL_ARB_map_buffer_range",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_ARB_map_buffer_range"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBMapBufferRange {
    /// Maps `length` bytes of the bound buffer starting at `offset`. Returns null on failure.
    #[inline]
    pub unsafe fn map_buffer_range(&self,
                                   target: BufferTarget,
                                   offset: usize,
                                   length: usize,
                                   access: MapAccess)
                                   -> *mut c_void {
        self.functions.glMapBufferRange(target.into(),
                                        offset as GLintptr,
                                        length as GLsizeiptr,
                                        access.bits())
    }

    #[inline]
    pub unsafe fn flush_mapped_buffer_range(&self, target: BufferTarget, offset: usize, length: usize) {
        self.functions.glFlushMappedBufferRange(target.into(), offset as GLintptr, length as GLsizeiptr)
    }
}

gl_functions! {
    pub struct ARBColorBufferFloatFunctions {
        fn glClampColor(target: GLenum, clamp: GLenum) = ["glClampColorARB"];
    }
}

gl_extension! {
    pub struct ARBColorBufferFloat(ARBColorBufferFloatFunctions) {
        name: "GL_ARB_color_buffer_float",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_ARB_color_buffer_float"],
    }
}

gl_enum! {
    pub enum ClampColorMode {
        Disabled = gl::FALSE as GLenum,
        Enabled = gl::TRUE as GLenum,
        FixedOnly = gl::FIXED_ONLY,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBColorBufferFloat {
    /// Controls clamping of colors returned by `glReadPixels`.
    #[inline]
    pub unsafe fn clamp_read_color(&self, mode: ClampColorMode) {
        self.functions.glClampColor(gl::CLAMP_READ_COLOR, mode.into())
    }
}

gl_functions! {
    pub struct ARBFramebufferObjectFunctions {
        fn glBindFramebuffer(target: GLenum, framebuffer: GLuint) = ["glBindFramebufferEXT"];
        fn glBindRenderbuffer(target: GLenum, renderbuffer: GLuint) = ["glBindRenderbufferEXT"];
        fn glBlitFramebuffer(srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint,
                             dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint,
                             mask: GLbitfield, filter: GLenum) = ["glBlitFramebufferEXT"];
        fn glCheckFramebufferStatus(target: GLenum) -> GLenum = ["glCheckFramebufferStatusEXT"];
        fn glDeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint)
            = ["glDeleteFramebuffersEXT"];
        fn glDeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint)
            = ["glDeleteRenderbuffersEXT"];
        fn glFramebufferRenderbuffer(target: GLenum, attachment: GLenum,
                                     renderbuffertarget: GLenum, renderbuffer: GLuint)
            = ["glFramebufferRenderbufferEXT"];
        fn glFramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                  texture: GLuint, level: GLint) = ["glFramebufferTexture1DEXT"];
        fn glFramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                  texture: GLuint, level: GLint) = ["glFramebufferTexture2DEXT"];
        fn glFramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum,
                                  texture: GLuint, level: GLint, zoffset: GLint)
            = ["glFramebufferTexture3DEXT"];
        fn glFramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint,
                                     level: GLint, layer: GLint)
            = ["glFramebufferTextureLayerEXT", "glFramebufferTextureLayerARB"];
        fn glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) = ["glGenFramebuffersEXT"];
        fn glGenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint)
            = ["glGenRenderbuffersEXT"];
        fn glGenerateMipmap(target: GLenum) = ["glGenerateMipmapEXT"];
        fn glGetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum,
                                                 pname: GLenum, params: *mut GLint)
            = ["glGetFramebufferAttachmentParameterivEXT"];
        fn glGetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint)
            = ["glGetRenderbufferParameterivEXT"];
        fn glIsFramebuffer(framebuffer: GLuint) -> GLboolean = ["glIsFramebufferEXT"];
        fn glIsRenderbuffer(renderbuffer: GLuint) -> GLboolean = ["glIsRenderbufferEXT"];
        fn glRenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei,
                                 height: GLsizei) = ["glRenderbufferStorageEXT"];
        fn glRenderbufferStorageMultisample(target: GLenum, samples: GLsizei,
                                            internalformat: GLenum, width: GLsizei,
                                            height: GLsizei)
            = ["glRenderbufferStorageMultisampleEXT"];
    }
}

gl_extension! {
    /// Framebuffer and renderbuffer objects.
    ///
    /// Also provided by the combination of the EXT framebuffer extensions; see
    /// `EXT_FRAMEBUFFER_OBJECT_SET`.
    pub struct ARBFramebufferObject(ARBFramebufferObjectFunctions) {
        name: "GL_ARB_framebuffer_object",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_ARB_framebuffer_object"],
    }
}

/// EXT extensions that together are equivalent to `GL_ARB_framebuffer_object`.
pub const EXT_FRAMEBUFFER_OBJECT_SET: &[&str] = &[
    "GL_EXT_framebuffer_object",
    "GL_EXT_framebuffer_blit",
    "GL_EXT_framebuffer_multisample",
    "GL_EXT_packed_depth_stencil",
    "GL_EXT_texture_array",
];

gl_enum! {
    pub enum FramebufferAttachmentParameter {
        ObjectType = gl::FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE,
        ObjectName = gl::FRAMEBUFFER_ATTACHMENT_OBJECT_NAME,
        TextureLevel = gl::FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL,
        TextureCubeMapFace = gl::FRAMEBUFFER_ATTACHMENT_TEXTURE_CUBE_MAP_FACE,
        TextureLayer = gl::FRAMEBUFFER_ATTACHMENT_TEXTURE_LAYER,
        Layered = gl::FRAMEBUFFER_ATTACHMENT_LAYERED,
        ColorEncoding = gl::FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING,
        ComponentType = gl::FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE,
        RedSize = gl::FRAMEBUFFER_ATTACHMENT_RED_SIZE,
        GreenSize = gl::FRAMEBUFFER_ATTACHMENT_GREEN_SIZE,
        BlueSize = gl::FRAMEBUFFER_ATTACHMENT_BLUE_SIZE,
        AlphaSize = gl::FRAMEBUFFER_ATTACHMENT_ALPHA_SIZE,
        DepthSize = gl::FRAMEBUFFER_ATTACHMENT_DEPTH_SIZE,
        StencilSize = gl::FRAMEBUFFER_ATTACHMENT_STENCIL_SIZE,
    }
}

gl_enum! {
    pub enum RenderbufferParameter {
        Width = gl::RENDERBUFFER_WIDTH,
        Height = gl::RENDERBUFFER_HEIGHT,
        InternalFormat = gl::RENDERBUFFER_INTERNAL_FORMAT,
        Samples = gl::RENDERBUFFER_SAMPLES,
        RedSize = gl::RENDERBUFFER_RED_SIZE,
        GreenSize = gl::RENDERBUFFER_GREEN_SIZE,
        BlueSize = gl::RENDERBUFFER_BLUE_SIZE,
        AlphaSize = gl::RENDERBUFFER_ALPHA_SIZE,
        DepthSize = gl::RENDERBUFFER_DEPTH_SIZE,
        StencilSize = gl::RENDERBUFFER_STENCIL_SIZE,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBFramebufferObject {
    #[inline]
    pub unsafe fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: GLuint) {
        self.functions.glBindFramebuffer(target.into(), framebuffer)
    }

    #[inline]
    pub unsafe fn bind_renderbuffer(&self, renderbuffer: GLuint) {
        self.functions.glBindRenderbuffer(gl::RENDERBUFFER, renderbuffer)
    }

    /// Copies `source` of the read framebuffer to `destination` of the draw framebuffer,
    /// scaling when the boxes differ in size.
    pub unsafe fn blit_framebuffer(&self,
                                   source: Box2D<i32>,
                                   destination: Box2D<i32>,
                                   mask: BufferMask,
                                   filter: BlitFilter) {
        self.functions.glBlitFramebuffer(source.min.x,
                                         source.min.y,
                                         source.max.x,
                                         source.max.y,
                                         destination.min.x,
                                         destination.min.y,
                                         destination.max.x,
                                         destination.max.y,
                                         mask.bits(),
                                         filter.into())
    }

    /// Returns `None` if the check itself failed (the driver returned 0).
    #[inline]
    pub unsafe fn check_framebuffer_status(&self, target: FramebufferTarget) -> Option<FramebufferStatus> {
        FramebufferStatus::from_raw(self.functions.glCheckFramebufferStatus(target.into()))
    }

    #[inline]
    pub unsafe fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        self.functions.glDeleteFramebuffers(marshal::count(framebuffers), framebuffers.as_ptr())
    }

    #[inline]
    pub unsafe fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        self.functions.glDeleteRenderbuffers(marshal::count(renderbuffers), renderbuffers.as_ptr())
    }

    pub unsafe fn gen_framebuffers(&self, count: usize) -> Vec<GLuint> {
        let mut framebuffers = vec![0; count];
        self.functions.glGenFramebuffers(count as GLsizei, framebuffers.as_mut_ptr());
        framebuffers
    }

    #[inline]
    pub unsafe fn gen_framebuffer(&self) -> GLuint {
        let mut framebuffer = 0;
        self.functions.glGenFramebuffers(1, &mut framebuffer);
        framebuffer
    }

    pub unsafe fn gen_renderbuffers(&self, count: usize) -> Vec<GLuint> {
        let mut renderbuffers = vec![0; count];
        self.functions.glGenRenderbuffers(count as GLsizei, renderbuffers.as_mut_ptr());
        renderbuffers
    }

    #[inline]
    pub unsafe fn gen_renderbuffer(&self) -> GLuint {
        let mut renderbuffer = 0;
        self.functions.glGenRenderbuffers(1, &mut renderbuffer);
        renderbuffer
    }

    #[inline]
    pub unsafe fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsFramebuffer(framebuffer))
    }

    #[inline]
    pub unsafe fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsRenderbuffer(renderbuffer))
    }

    #[inline]
    pub unsafe fn framebuffer_renderbuffer(&self,
                                           target: FramebufferTarget,
                                           attachment: FramebufferAttachment,
                                           renderbuffer: GLuint) {
        self.functions.glFramebufferRenderbuffer(target.into(),
                                                 attachment.into(),
                                                 gl::RENDERBUFFER,
                                                 renderbuffer)
    }

    #[inline]
    pub unsafe fn framebuffer_texture_1d(&self,
                                         target: FramebufferTarget,
                                         attachment: FramebufferAttachment,
                                         texture_target: TextureTarget,
                                         texture: GLuint,
                                         level: GLint) {
        self.functions.glFramebufferTexture1D(target.into(),
                                              attachment.into(),
                                              texture_target.into(),
                                              texture,
                                              level)
    }

    #[inline]
    pub unsafe fn framebuffer_texture_2d(&self,
                                         target: FramebufferTarget,
                                         attachment: FramebufferAttachment,
                                         texture_target: TextureTarget,
                                         texture: GLuint,
                                         level: GLint) {
        self.functions.glFramebufferTexture2D(target.into(),
                                              attachment.into(),
                                              texture_target.into(),
                                              texture,
                                              level)
    }

    #[inline]
    pub unsafe fn framebuffer_texture_3d(&self,
                                         target: FramebufferTarget,
                                         attachment: FramebufferAttachment,
                                         texture_target: TextureTarget,
                                         texture: GLuint,
                                         level: GLint,
                                         layer: GLint) {
        self.functions.glFramebufferTexture3D(target.into(),
                                              attachment.into(),
                                              texture_target.into(),
                                              texture,
                                              level,
                                              layer)
    }

    #[inline]
    pub unsafe fn framebuffer_texture_layer(&self,
                                            target: FramebufferTarget,
                                            attachment: FramebufferAttachment,
                                            texture: GLuint,
                                            level: GLint,
                                            layer: GLint) {
        self.functions.glFramebufferTextureLayer(target.into(),
                                                 attachment.into(),
                                                 texture,
                                                 level,
                                                 layer)
    }

    #[inline]
    pub unsafe fn generate_mipmap(&self, target: TextureTarget) {
        self.functions.glGenerateMipmap(target.into())
    }

    #[inline]
    pub unsafe fn get_framebuffer_attachment_parameter_i(&self,
                                                         target: FramebufferTarget,
                                                         attachment: FramebufferAttachment,
                                                         pname: FramebufferAttachmentParameter)
                                                         -> GLint {
        let mut value = 0;
        self.functions.glGetFramebufferAttachmentParameteriv(target.into(),
                                                             attachment.into(),
                                                             pname.into(),
                                                             &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_renderbuffer_parameter_i(&self, pname: RenderbufferParameter) -> GLint {
        let mut value = 0;
        self.functions.glGetRenderbufferParameteriv(gl::RENDERBUFFER, pname.into(), &mut value);
        value
    }

    #[inline]
    pub unsafe fn renderbuffer_storage(&self, internal_format: InternalFormat, size: Size2D<i32>) {
        self.functions.glRenderbufferStorage(gl::RENDERBUFFER,
                                             internal_format.into(),
                                             size.width,
                                             size.height)
    }

    #[inline]
    pub unsafe fn renderbuffer_storage_multisample(&self,
                                                   samples: GLsizei,
                                                   internal_format: InternalFormat,
                                                   size: Size2D<i32>) {
        self.functions.glRenderbufferStorageMultisample(gl::RENDERBUFFER,
                                                        samples,
                                                        internal_format.into(),
                                                        size.width,
                                                        size.height)
    }
}

gl_functions! {
    pub struct EXTTextureIntegerFunctions {
        fn glClearColorIiEXT(red: GLint, green: GLint, blue: GLint, alpha: GLint);
        fn glClearColorIuiEXT(red: GLuint, green: GLuint, blue: GLuint, alpha: GLuint);
        fn glTexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint)
            = ["glTexParameterIivEXT"];
        fn glTexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint)
            = ["glTexParameterIuivEXT"];
        fn glGetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint)
            = ["glGetTexParameterIivEXT"];
        fn glGetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint)
            = ["glGetTexParameterIuivEXT"];
    }
}

gl_extension! {
    /// Integer texture formats. The integer clear colors exist only in the extension and stay
    /// unresolved on core contexts that don't advertise it.
    pub struct EXTTextureInteger(EXTTextureIntegerFunctions) {
        name: "GL_EXT_texture_integer",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_EXT_texture_integer"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl EXTTextureInteger {
    #[inline]
    pub unsafe fn clear_color_ii(&self, red: i32, green: i32, blue: i32, alpha: i32) {
        self.functions.glClearColorIiEXT(red, green, blue, alpha)
    }

    #[inline]
    pub unsafe fn clear_color_iui(&self, red: u32, green: u32, blue: u32, alpha: u32) {
        self.functions.glClearColorIuiEXT(red, green, blue, alpha)
    }

    #[inline]
    pub unsafe fn tex_parameter_iiv(&self, target: TextureTarget, pname: TextureParameter, values: &[GLint]) {
        self.functions.glTexParameterIiv(target.into(), pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn tex_parameter_iuiv(&self,
                                     target: TextureTarget,
                                     pname: TextureParameter,
                                     values: &[GLuint]) {
        self.functions.glTexParameterIuiv(target.into(), pname.into(), values.as_ptr())
    }

    #[inline]
    pub unsafe fn get_tex_parameter_iiv(&self,
                                        target: TextureTarget,
                                        pname: TextureParameter,
                                        values: &mut [GLint]) {
        self.functions.glGetTexParameterIiv(target.into(), pname.into(), values.as_mut_ptr())
    }

    #[inline]
    pub unsafe fn get_tex_parameter_iuiv(&self,
                                         target: TextureTarget,
                                         pname: TextureParameter,
                                         values: &mut [GLuint]) {
        self.functions.glGetTexParameterIuiv(target.into(), pname.into(), values.as_mut_ptr())
    }
}

gl_functions! {
    pub struct EXTDrawBuffers2Functions {
        fn glColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean)
            = ["glColorMaskIndexedEXT"];
        fn glGetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean)
            = ["glGetBooleanIndexedvEXT"];
        fn glGetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint)
            = ["glGetIntegerIndexedvEXT"];
        fn glEnablei(target: GLenum, index: GLuint) = ["glEnableIndexedEXT"];
        fn glDisablei(target: GLenum, index: GLuint) = ["glDisableIndexedEXT"];
        fn glIsEnabledi(target: GLenum, index: GLuint) -> GLboolean = ["glIsEnabledIndexedEXT"];
    }
}

gl_extension! {
    pub struct EXTDrawBuffers2(EXTDrawBuffers2Functions) {
        name: "GL_EXT_draw_buffers2",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_EXT_draw_buffers2"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl EXTDrawBuffers2 {
    #[inline]
    pub unsafe fn color_mask_i(&self, index: GLuint, red: bool, green: bool, blue: bool, alpha: bool) {
        self.functions.glColorMaski(index,
                                    marshal::gl_bool(red),
                                    marshal::gl_bool(green),
                                    marshal::gl_bool(blue),
                                    marshal::gl_bool(alpha))
    }

    #[inline]
    pub unsafe fn get_boolean_i(&self, target: GLenum, index: GLuint) -> bool {
        let mut value = gl::FALSE;
        self.functions.glGetBooleani_v(target, index, &mut value);
        marshal::from_gl_bool(value)
    }

    #[inline]
    pub unsafe fn get_integer_i(&self, target: GLenum, index: GLuint) -> GLint {
        let mut value = 0;
        self.functions.glGetIntegeri_v(target, index, &mut value);
        value
    }

    #[inline]
    pub unsafe fn enable_i(&self, capability: Capability, index: GLuint) {
        self.functions.glEnablei(capability.into(), index)
    }

    #[inline]
    pub unsafe fn disable_i(&self, capability: Capability, index: GLuint) {
        self.functions.glDisablei(capability.into(), index)
    }

    #[inline]
    pub unsafe fn is_enabled_i(&self, capability: Capability, index: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsEnabledi(capability.into(), index))
    }
}

gl_functions! {
    pub struct ARBTransformFeedbackFunctions {
        fn glBeginTransformFeedback(primitiveMode: GLenum)
            = ["glBeginTransformFeedbackEXT", "glBeginTransformFeedbackNV"];
        fn glEndTransformFeedback()
            = ["glEndTransformFeedbackEXT", "glEndTransformFeedbackNV"];
        fn glBindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr,
                             size: GLsizeiptr)
            = ["glBindBufferRangeEXT", "glBindBufferRangeNV"];
        fn glBindBufferBase(target: GLenum, index: GLuint, buffer: GLuint)
            = ["glBindBufferBaseEXT", "glBindBufferBaseNV"];
        fn glTransformFeedbackVaryings(program: GLuint, count: GLsizei,
                                       varyings: *const *const GLchar, bufferMode: GLenum)
            = ["glTransformFeedbackVaryingsEXT"];
        fn glGetTransformFeedbackVarying(program: GLuint, index: GLuint, bufSize: GLsizei,
                                         length: *mut GLsizei, size: *mut GLsizei,
                                         gltype: *mut GLenum, name: *mut GLchar)
            = ["glGetTransformFeedbackVaryingEXT"];
    }
}

gl_extension! {
    pub struct ARBTransformFeedback(ARBTransformFeedbackFunctions) {
        name: "GL_EXT_transform_feedback",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_ARB_transform_feedback", "GL_EXT_transform_feedback"],
    }
}

gl_enum! {
    pub enum TransformFeedbackBufferMode {
        InterleavedAttribs = gl::INTERLEAVED_ATTRIBS,
        SeparateAttribs = gl::SEPARATE_ATTRIBS,
    }
}

/// A varying captured by transform feedback.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformFeedbackVarying {
    pub name: String,
    pub size: GLsizei,
    pub gltype: GLenum,
}

#[allow(clippy::missing_safety_doc)]
impl ARBTransformFeedback {
    #[inline]
    pub unsafe fn begin_transform_feedback(&self, primitive_mode: TransformFeedbackPrimitive) {
        self.functions.glBeginTransformFeedback(primitive_mode.into())
    }

    #[inline]
    pub unsafe fn end_transform_feedback(&self) {
        self.functions.glEndTransformFeedback()
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

    /// Selects the varyings to capture. Takes effect at the next link of `program`.
    pub unsafe fn transform_feedback_varyings<S>(&self,
                                                 program: GLuint,
                                                 varyings: &[S],
                                                 mode: TransformFeedbackBufferMode)
                                                 where S: AsRef<str> {
        let varyings = ScratchCStrArray::new(varyings);
        self.functions.glTransformFeedbackVaryings(program,
                                                   varyings.count(),
                                                   varyings.as_ptr(),
                                                   mode.into())
    }

    pub unsafe fn get_transform_feedback_varying(&self,
                                                 program: GLuint,
                                                 index: GLuint,
                                                 max_name_length: usize)
                                                 -> TransformFeedbackVarying {
        let mut buffer = vec![0u8; max_name_length.max(1)];
        let (mut length, mut size, mut gltype) = (0, 0, 0);
        self.functions.glGetTransformFeedbackVarying(program,
                                                     index,
                                                     buffer.len() as GLsizei,
                                                     &mut length,
                                                     &mut size,
                                                     &mut gltype,
                                                     buffer.as_mut_ptr() as *mut GLchar);
        TransformFeedbackVarying { name: marshal::string_from_buffer(buffer, length), size, gltype }
    }
}

gl_functions! {
    pub struct ARBVertexArrayObjectFunctions {
        fn glBindVertexArray(array: GLuint) = ["glBindVertexArrayOES"];
        fn glDeleteVertexArrays(n: GLsizei, arrays: *const GLuint) = ["glDeleteVertexArraysOES"];
        fn glGenVertexArrays(n: GLsizei, arrays: *mut GLuint) = ["glGenVertexArraysOES"];
        fn glIsVertexArray(array: GLuint) -> GLboolean = ["glIsVertexArrayOES"];
    }
}

gl_extension! {
    pub struct ARBVertexArrayObject(ARBVertexArrayObjectFunctions) {
        name: "GL_ARB_vertex_array_object",
        core: Some(GLVersion::new(3, 0)),
        extensions: ["GL_ARB_vertex_array_object"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBVertexArrayObject {
    #[inline]
    pub unsafe fn bind_vertex_array(&self, array: GLuint) {
        self.functions.glBindVertexArray(array)
    }

    #[inline]
    pub unsafe fn delete_vertex_arrays(&self, arrays: &[GLuint]) {
        self.functions.glDeleteVertexArrays(marshal::count(arrays), arrays.as_ptr())
    }

    pub unsafe fn gen_vertex_arrays(&self, count: usize) -> Vec<GLuint> {
        let mut arrays = vec![0; count];
        self.functions.glGenVertexArrays(count as GLsizei, arrays.as_mut_ptr());
        arrays
    }

    #[inline]
    pub unsafe fn gen_vertex_array(&self) -> GLuint {
        let mut array = 0;
        self.functions.glGenVertexArrays(1, &mut array);
        array
    }

    #[inline]
    pub unsafe fn is_vertex_array(&self, array: GLuint) -> bool {
        marshal::from_gl_bool(self.functions.glIsVertexArray(array))
    }
}
