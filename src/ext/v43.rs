// glbind/src/ext/v43.rs
//
//! Extensions promoted to core in OpenGL 4.3, apart from `GL_KHR_debug`.

use crate::enums::{BufferTarget, FramebufferAttachment, FramebufferTarget, IndexType};
use crate::enums::{InternalFormat, PixelFormat, PixelType, PrimitiveType, TextureTarget};
use crate::enums::VertexAttribType;
use crate::gl;
use crate::gl::types::*;
use crate::info::GLVersion;
use crate::marshal::{self, ScratchCStr};

use bytemuck::Pod;
use euclid::default::{Box3D, Point3D, Rect, Size2D, Size3D};
use std::os::raw::c_void;
use std::ptr;

gl_functions! {
    pub struct ARBClearBufferObjectFunctions {
        fn glClearBufferData(target: GLenum, internalformat: GLenum, format: GLenum,
                             gltype: GLenum, data: *const c_void);
        fn glClearBufferSubData(target: GLenum, internalformat: GLenum, offset: GLintptr,
                                size: GLsizeiptr, format: GLenum, gltype: GLenum,
                                data: *const c_void);
    }
}

gl_extension! {
    pub struct ARBClearBufferObject(ARBClearBufferObjectFunctions) {
        name: "GL_ARB_clear_buffer_object",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_clear_buffer_object"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBClearBufferObject {
    /// Fills the bound buffer with copies of `value`, converted to `internal_format`. `None`
    /// fills with zeros.
    pub unsafe fn clear_buffer_data<T>(&self,
                                       target: BufferTarget,
                                       internal_format: InternalFormat,
                                       format: PixelFormat,
                                       pixel_type: PixelType,
                                       value: Option<&T>)
                                       where T: Pod {
        let value = value.map_or(ptr::null(), |value| value as *const T as *const c_void);
        self.functions.glClearBufferData(target.into(),
                                         internal_format.into(),
                                         format.into(),
                                         pixel_type.into(),
                                         value)
    }

    #[allow(clippy::too_many_arguments)]
    pub unsafe fn clear_buffer_sub_data<T>(&self,
                                           target: BufferTarget,
                                           internal_format: InternalFormat,
                                           offset: usize,
                                           size: usize,
                                           format: PixelFormat,
                                           pixel_type: PixelType,
                                           value: Option<&T>)
                                           where T: Pod {
        let value = value.map_or(ptr::null(), |value| value as *const T as *const c_void);
        self.functions.glClearBufferSubData(target.into(),
                                            internal_format.into(),
                                            offset as GLintptr,
                                            size as GLsizeiptr,
                                            format.into(),
                                            pixel_type.into(),
                                            value)
    }
}

gl_functions! {
    pub struct ARBComputeShaderFunctions {
        fn glDispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
        fn glDispatchComputeIndirect(indirect: GLintptr);
    }
}

gl_extension! {
    pub struct ARBComputeShader(ARBComputeShaderFunctions) {
        name: "GL_ARB_compute_shader",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_compute_shader"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBComputeShader {
    #[inline]
    pub unsafe fn dispatch_compute(&self, groups_x: u32, groups_y: u32, groups_z: u32) {
        self.functions.glDispatchCompute(groups_x, groups_y, groups_z)
    }

    /// Dispatches with the three group counts stored at `offset` in the bound dispatch
    /// indirect buffer.
    #[inline]
    pub unsafe fn dispatch_compute_indirect(&self, offset: usize) {
        self.functions.glDispatchComputeIndirect(offset as GLintptr)
    }
}

gl_functions! {
    pub struct ARBCopyImageFunctions {
        fn glCopyImageSubData(srcName: GLuint, srcTarget: GLenum, srcLevel: GLint, srcX: GLint,
                              srcY: GLint, srcZ: GLint, dstName: GLuint, dstTarget: GLenum,
                              dstLevel: GLint, dstX: GLint, dstY: GLint, dstZ: GLint,
                              srcWidth: GLsizei, srcHeight: GLsizei, srcDepth: GLsizei)
            = ["glCopyImageSubDataEXT", "glCopyImageSubDataOES"];
    }
}

gl_extension! {
    pub struct ARBCopyImage(ARBCopyImageFunctions) {
        name: "GL_ARB_copy_image",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_copy_image"],
    }
}

/// One side of an image copy: a level of a texture or renderbuffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageLocation {
    pub name: GLuint,
    /// A texture target, or `GL_RENDERBUFFER`.
    pub target: GLenum,
    pub level: GLint,
    pub origin: Point3D<i32>,
}

#[allow(clippy::missing_safety_doc)]
impl ARBCopyImage {
    /// Copies texels without format conversion or filtering.
    pub unsafe fn copy_image_sub_data(&self,
                                      source: &ImageLocation,
                                      destination: &ImageLocation,
                                      size: Size3D<i32>) {
        self.functions.glCopyImageSubData(source.name,
                                          source.target,
                                          source.level,
                                          source.origin.x,
                                          source.origin.y,
                                          source.origin.z,
                                          destination.name,
                                          destination.target,
                                          destination.level,
                                          destination.origin.x,
                                          destination.origin.y,
                                          destination.origin.z,
                                          size.width,
                                          size.height,
                                          size.depth)
    }
}

gl_functions! {
    pub struct ARBInternalformatQuery2Functions {
        fn glGetInternalformati64v(target: GLenum, internalformat: GLenum, pname: GLenum,
                                   count: GLsizei, params: *mut GLint64);
        fn glGetInternalformativ(target: GLenum, internalformat: GLenum, pname: GLenum,
                                 count: GLsizei, params: *mut GLint);
    }
}

gl_extension! {
    pub struct ARBInternalformatQuery2(ARBInternalformatQuery2Functions) {
        name: "GL_ARB_internalformat_query2",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_internalformat_query2"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBInternalformatQuery2 {
    #[inline]
    pub unsafe fn get_internalformat_i(&self,
                                       target: TextureTarget,
                                       internal_format: InternalFormat,
                                       pname: GLenum)
                                       -> GLint {
        let mut value = 0;
        self.functions.glGetInternalformativ(target.into(), internal_format.into(), pname, 1, &mut value);
        value
    }

    #[inline]
    pub unsafe fn get_internalformat_i64(&self,
                                         target: TextureTarget,
                                         internal_format: InternalFormat,
                                         pname: GLenum)
                                         -> GLint64 {
        let mut value = 0;
        self.functions.glGetInternalformati64v(target.into(),
                                               internal_format.into(),
                                               pname,
                                               1,
                                               &mut value);
        value
    }

    /// Returns `false` if the format can't be used with `target` at all.
    pub unsafe fn is_internalformat_supported(&self,
                                              target: TextureTarget,
                                              internal_format: InternalFormat)
                                              -> bool {
        self.get_internalformat_i(target, internal_format, gl::INTERNALFORMAT_SUPPORTED) ==
            gl::TRUE as GLint
    }

    /// Size in bytes of one texel of `internal_format` bound as an image.
    pub unsafe fn get_image_texel_size(&self, target: TextureTarget, internal_format: InternalFormat) -> GLint {
        self.get_internalformat_i(target, internal_format, gl::IMAGE_TEXEL_SIZE)
    }
}

gl_functions! {
    pub struct ARBInvalidateSubdataFunctions {
        fn glInvalidateTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint,
                                   zoffset: GLint, width: GLsizei, height: GLsizei,
                                   depth: GLsizei);
        fn glInvalidateTexImage(texture: GLuint, level: GLint);
        fn glInvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
        fn glInvalidateBufferData(buffer: GLuint);
        fn glInvalidateFramebuffer(target: GLenum, numAttachments: GLsizei,
                                   attachments: *const GLenum);
        fn glInvalidateSubFramebuffer(target: GLenum, numAttachments: GLsizei,
                                      attachments: *const GLenum, x: GLint, y: GLint,
                                      width: GLsizei, height: GLsizei);
    }
}

gl_extension! {
    pub struct ARBInvalidateSubdata(ARBInvalidateSubdataFunctions) {
        name: "GL_ARB_invalidate_subdata",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_invalidate_subdata"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBInvalidateSubdata {
    pub unsafe fn invalidate_tex_sub_image(&self, texture: GLuint, level: GLint, region: Box3D<i32>) {
        let size = region.size();
        self.functions.glInvalidateTexSubImage(texture,
                                               level,
                                               region.min.x,
                                               region.min.y,
                                               region.min.z,
                                               size.width,
                                               size.height,
                                               size.depth)
    }

    #[inline]
    pub unsafe fn invalidate_tex_image(&self, texture: GLuint, level: GLint) {
        self.functions.glInvalidateTexImage(texture, level)
    }

    #[inline]
    pub unsafe fn invalidate_buffer_sub_data(&self, buffer: GLuint, offset: usize, length: usize) {
        self.functions.glInvalidateBufferSubData(buffer, offset as GLintptr, length as GLsizeiptr)
    }

    #[inline]
    pub unsafe fn invalidate_buffer_data(&self, buffer: GLuint) {
        self.functions.glInvalidateBufferData(buffer)
    }

    #[inline]
    pub unsafe fn invalidate_framebuffer(&self,
                                         target: FramebufferTarget,
                                         attachments: &[FramebufferAttachment]) {
        self.functions.glInvalidateFramebuffer(target.into(),
                                               marshal::count(attachments),
                                               attachments.as_ptr() as *const GLenum)
    }

    pub unsafe fn invalidate_sub_framebuffer(&self,
                                             target: FramebufferTarget,
                                             attachments: &[FramebufferAttachment],
                                             rect: Rect<i32>) {
        self.functions.glInvalidateSubFramebuffer(target.into(),
                                                  marshal::count(attachments),
                                                  attachments.as_ptr() as *const GLenum,
                                                  rect.origin.x,
                                                  rect.origin.y,
                                                  rect.size.width,
                                                  rect.size.height)
    }
}

gl_functions! {
    pub struct ARBMultiDrawIndirectFunctions {
        fn glMultiDrawArraysIndirect(mode: GLenum, indirect: *const c_void, drawcount: GLsizei,
                                     stride: GLsizei)
            = ["glMultiDrawArraysIndirectAMD", "glMultiDrawArraysIndirectEXT"];
        fn glMultiDrawElementsIndirect(mode: GLenum, gltype: GLenum, indirect: *const c_void,
                                       drawcount: GLsizei, stride: GLsizei)
            = ["glMultiDrawElementsIndirectAMD", "glMultiDrawElementsIndirectEXT"];
    }
}

gl_extension! {
    pub struct ARBMultiDrawIndirect(ARBMultiDrawIndirectFunctions) {
        name: "GL_ARB_multi_draw_indirect",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_multi_draw_indirect"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBMultiDrawIndirect {
    /// `stride` of zero means the commands are tightly packed.
    #[inline]
    pub unsafe fn multi_draw_arrays_indirect(&self,
                                             mode: PrimitiveType,
                                             offset: usize,
                                             draw_count: GLsizei,
                                             stride: GLsizei) {
        self.functions.glMultiDrawArraysIndirect(mode.into(),
                                                 marshal::offset_ptr(offset),
                                                 draw_count,
                                                 stride)
    }

    #[inline]
    pub unsafe fn multi_draw_elements_indirect(&self,
                                               mode: PrimitiveType,
                                               index_type: IndexType,
                                               offset: usize,
                                               draw_count: GLsizei,
                                               stride: GLsizei) {
        self.functions.glMultiDrawElementsIndirect(mode.into(),
                                                   index_type.into(),
                                                   marshal::offset_ptr(offset),
                                                   draw_count,
                                                   stride)
    }
}

gl_functions! {
    pub struct ARBProgramInterfaceQueryFunctions {
        fn glGetProgramInterfaceiv(program: GLuint, programInterface: GLenum, pname: GLenum,
                                   params: *mut GLint);
        fn glGetProgramResourceIndex(program: GLuint, programInterface: GLenum,
                                     name: *const GLchar) -> GLuint;
        fn glGetProgramResourceName(program: GLuint, programInterface: GLenum, index: GLuint,
                                    bufSize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn glGetProgramResourceiv(program: GLuint, programInterface: GLenum, index: GLuint,
                                  propCount: GLsizei, props: *const GLenum, count: GLsizei,
                                  length: *mut GLsizei, params: *mut GLint);
        fn glGetProgramResourceLocation(program: GLuint, programInterface: GLenum,
                                        name: *const GLchar) -> GLint;
        fn glGetProgramResourceLocationIndex(program: GLuint, programInterface: GLenum,
                                             name: *const GLchar) -> GLint;
    }
}

gl_extension! {
    pub struct ARBProgramInterfaceQuery(ARBProgramInterfaceQueryFunctions) {
        name: "GL_ARB_program_interface_query",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_program_interface_query"],
    }
}

gl_enum! {
    pub enum ProgramInterface {
        Uniform = gl::UNIFORM,
        UniformBlock = gl::UNIFORM_BLOCK,
        AtomicCounterBuffer = gl::ATOMIC_COUNTER_BUFFER,
        ProgramInput = gl::PROGRAM_INPUT,
        ProgramOutput = gl::PROGRAM_OUTPUT,
        VertexSubroutine = gl::VERTEX_SUBROUTINE,
        TessControlSubroutine = gl::TESS_CONTROL_SUBROUTINE,
        TessEvaluationSubroutine = gl::TESS_EVALUATION_SUBROUTINE,
        GeometrySubroutine = gl::GEOMETRY_SUBROUTINE,
        FragmentSubroutine = gl::FRAGMENT_SUBROUTINE,
        ComputeSubroutine = gl::COMPUTE_SUBROUTINE,
        VertexSubroutineUniform = gl::VERTEX_SUBROUTINE_UNIFORM,
        TessControlSubroutineUniform = gl::TESS_CONTROL_SUBROUTINE_UNIFORM,
        TessEvaluationSubroutineUniform = gl::TESS_EVALUATION_SUBROUTINE_UNIFORM,
        GeometrySubroutineUniform = gl::GEOMETRY_SUBROUTINE_UNIFORM,
        FragmentSubroutineUniform = gl::FRAGMENT_SUBROUTINE_UNIFORM,
        ComputeSubroutineUniform = gl::COMPUTE_SUBROUTINE_UNIFORM,
        TransformFeedbackVarying = gl::TRANSFORM_FEEDBACK_VARYING,
        TransformFeedbackBuffer = gl::TRANSFORM_FEEDBACK_BUFFER,
        BufferVariable = gl::BUFFER_VARIABLE,
        ShaderStorageBlock = gl::SHADER_STORAGE_BLOCK,
    }
}

gl_enum! {
    pub enum ProgramInterfaceParameter {
        ActiveResources = gl::ACTIVE_RESOURCES,
        MaxNameLength = gl::MAX_NAME_LENGTH,
        MaxNumActiveVariables = gl::MAX_NUM_ACTIVE_VARIABLES,
        MaxNumCompatibleSubroutines = gl::MAX_NUM_COMPATIBLE_SUBROUTINES,
    }
}

gl_enum! {
    /// Properties queried with `glGetProgramResourceiv`.
    pub enum ResourceProperty {
        NameLength = gl::NAME_LENGTH,
        Type = gl::TYPE,
        ArraySize = gl::ARRAY_SIZE,
        Offset = gl::OFFSET,
        BlockIndex = gl::BLOCK_INDEX,
        ArrayStride = gl::ARRAY_STRIDE,
        MatrixStride = gl::MATRIX_STRIDE,
        IsRowMajor = gl::IS_ROW_MAJOR,
        AtomicCounterBufferIndex = gl::ATOMIC_COUNTER_BUFFER_INDEX,
        BufferBinding = gl::BUFFER_BINDING,
        BufferDataSize = gl::BUFFER_DATA_SIZE,
        NumActiveVariables = gl::NUM_ACTIVE_VARIABLES,
        ActiveVariables = gl::ACTIVE_VARIABLES,
        ReferencedByVertexShader = gl::REFERENCED_BY_VERTEX_SHADER,
        ReferencedByTessControlShader = gl::REFERENCED_BY_TESS_CONTROL_SHADER,
        ReferencedByTessEvaluationShader = gl::REFERENCED_BY_TESS_EVALUATION_SHADER,
        ReferencedByGeometryShader = gl::REFERENCED_BY_GEOMETRY_SHADER,
        ReferencedByFragmentShader = gl::REFERENCED_BY_FRAGMENT_SHADER,
        ReferencedByComputeShader = gl::REFERENCED_BY_COMPUTE_SHADER,
        TopLevelArraySize = gl::TOP_LEVEL_ARRAY_SIZE,
        TopLevelArrayStride = gl::TOP_LEVEL_ARRAY_STRIDE,
        Location = gl::LOCATION,
        LocationIndex = gl::LOCATION_INDEX,
        IsPerPatch = gl::IS_PER_PATCH,
        LocationComponent = gl::LOCATION_COMPONENT,
        TransformFeedbackBufferIndex = gl::TRANSFORM_FEEDBACK_BUFFER_INDEX,
        TransformFeedbackBufferStride = gl::TRANSFORM_FEEDBACK_BUFFER_STRIDE,
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBProgramInterfaceQuery {
    #[inline]
    pub unsafe fn get_program_interface_i(&self,
                                          program: GLuint,
                                          interface: ProgramInterface,
                                          pname: ProgramInterfaceParameter)
                                          -> GLint {
        let mut value = 0;
        self.functions.glGetProgramInterfaceiv(program, interface.into(), pname.into(), &mut value);
        value
    }

    /// Returns `None` if `name` is not an active resource of the interface.
    pub unsafe fn get_program_resource_index(&self,
                                             program: GLuint,
                                             interface: ProgramInterface,
                                             name: &str)
                                             -> Option<GLuint> {
        let name = ScratchCStr::new(name);
        let index = self.functions.glGetProgramResourceIndex(program, interface.into(), name.as_ptr());
        if index == gl::INVALID_INDEX { None } else { Some(index) }
    }

    pub unsafe fn get_program_resource_name(&self,
                                            program: GLuint,
                                            interface: ProgramInterface,
                                            index: GLuint)
                                            -> String {
        let capacity = self.get_program_interface_i(program,
                                                    interface,
                                                    ProgramInterfaceParameter::MaxNameLength);
        let mut buffer = vec![0u8; capacity.max(1) as usize];
        let mut length = 0;
        self.functions.glGetProgramResourceName(program,
                                                interface.into(),
                                                index,
                                                buffer.len() as GLsizei,
                                                &mut length,
                                                buffer.as_mut_ptr() as *mut GLchar);
        marshal::string_from_buffer(buffer, length)
    }

    /// Queries one value per property. Properties returning arrays (`ActiveVariables`) need
    /// `get_program_resource_iv_into`.
    pub unsafe fn get_program_resource_iv(&self,
                                          program: GLuint,
                                          interface: ProgramInterface,
                                          index: GLuint,
                                          properties: &[ResourceProperty])
                                          -> Vec<GLint> {
        let mut values = vec![0; properties.len()];
        let written = self.get_program_resource_iv_into(program, interface, index, properties, &mut values);
        values.truncate(written);
        values
    }

    /// Writes the property values to `values`, returning how many were written.
    pub unsafe fn get_program_resource_iv_into(&self,
                                               program: GLuint,
                                               interface: ProgramInterface,
                                               index: GLuint,
                                               properties: &[ResourceProperty],
                                               values: &mut [GLint])
                                               -> usize {
        let mut length = 0;
        self.functions.glGetProgramResourceiv(program,
                                              interface.into(),
                                              index,
                                              marshal::count(properties),
                                              properties.as_ptr() as *const GLenum,
                                              marshal::count(values),
                                              &mut length,
                                              values.as_mut_ptr());
        (length.max(0) as usize).min(values.len())
    }

    /// Returns `None` if `name` has no location in the interface.
    pub unsafe fn get_program_resource_location(&self,
                                                program: GLuint,
                                                interface: ProgramInterface,
                                                name: &str)
                                                -> Option<GLint> {
        let name = ScratchCStr::new(name);
        let location =
            self.functions.glGetProgramResourceLocation(program, interface.into(), name.as_ptr());
        if location < 0 { None } else { Some(location) }
    }

    pub unsafe fn get_program_resource_location_index(&self, program: GLuint, name: &str) -> Option<GLint> {
        let name = ScratchCStr::new(name);
        let index = self.functions.glGetProgramResourceLocationIndex(program,
                                                                     gl::PROGRAM_OUTPUT,
                                                                     name.as_ptr());
        if index < 0 { None } else { Some(index) }
    }
}

gl_functions! {
    pub struct ARBShaderStorageBufferObjectFunctions {
        fn glShaderStorageBlockBinding(program: GLuint, storageBlockIndex: GLuint,
                                       storageBlockBinding: GLuint);
    }
}

gl_extension! {
    pub struct ARBShaderStorageBufferObject(ARBShaderStorageBufferObjectFunctions) {
        name: "GL_ARB_shader_storage_buffer_object",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_shader_storage_buffer_object"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBShaderStorageBufferObject {
    #[inline]
    pub unsafe fn shader_storage_block_binding(&self, program: GLuint, block_index: GLuint, binding: GLuint) {
        self.functions.glShaderStorageBlockBinding(program, block_index, binding)
    }
}

gl_functions! {
    pub struct ARBTextureBufferRangeFunctions {
        fn glTexBufferRange(target: GLenum, internalformat: GLenum, buffer: GLuint,
                            offset: GLintptr, size: GLsizeiptr)
            = ["glTexBufferRangeEXT", "glTexBufferRangeOES"];
    }
}

gl_extension! {
    pub struct ARBTextureBufferRange(ARBTextureBufferRangeFunctions) {
        name: "GL_ARB_texture_buffer_range",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_texture_buffer_range"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTextureBufferRange {
    /// `offset` must be a multiple of `GL_TEXTURE_BUFFER_OFFSET_ALIGNMENT`.
    #[inline]
    pub unsafe fn tex_buffer_range(&self,
                                   internal_format: InternalFormat,
                                   buffer: GLuint,
                                   offset: usize,
                                   size: usize) {
        self.functions.glTexBufferRange(gl::TEXTURE_BUFFER,
                                        internal_format.into(),
                                        buffer,
                                        offset as GLintptr,
                                        size as GLsizeiptr)
    }
}

gl_functions! {
    pub struct ARBTextureStorageMultisampleFunctions {
        fn glTexStorage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                     width: GLsizei, height: GLsizei,
                                     fixedsamplelocations: GLboolean);
        fn glTexStorage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum,
                                     width: GLsizei, height: GLsizei, depth: GLsizei,
                                     fixedsamplelocations: GLboolean)
            = ["glTexStorage3DMultisampleOES"];
    }
}

gl_extension! {
    pub struct ARBTextureStorageMultisample(ARBTextureStorageMultisampleFunctions) {
        name: "GL_ARB_texture_storage_multisample",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_texture_storage_multisample"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTextureStorageMultisample {
    #[inline]
    pub unsafe fn tex_storage_2d_multisample(&self,
                                             samples: GLsizei,
                                             internal_format: InternalFormat,
                                             size: Size2D<i32>,
                                             fixed_sample_locations: bool) {
        self.functions.glTexStorage2DMultisample(TextureTarget::Texture2DMultisample.into(),
                                                 samples,
                                                 internal_format.into(),
                                                 size.width,
                                                 size.height,
                                                 marshal::gl_bool(fixed_sample_locations))
    }

    #[inline]
    pub unsafe fn tex_storage_3d_multisample(&self,
                                             samples: GLsizei,
                                             internal_format: InternalFormat,
                                             size: Size3D<i32>,
                                             fixed_sample_locations: bool) {
        self.functions.glTexStorage3DMultisample(TextureTarget::Texture2DMultisampleArray.into(),
                                                 samples,
                                                 internal_format.into(),
                                                 size.width,
                                                 size.height,
                                                 size.depth,
                                                 marshal::gl_bool(fixed_sample_locations))
    }
}

gl_functions! {
    pub struct ARBTextureViewFunctions {
        fn glTextureView(texture: GLuint, target: GLenum, origtexture: GLuint,
                         internalformat: GLenum, minlevel: GLuint, numlevels: GLuint,
                         minlayer: GLuint, numlayers: GLuint)
            = ["glTextureViewEXT", "glTextureViewOES"];
    }
}

gl_extension! {
    pub struct ARBTextureView(ARBTextureViewFunctions) {
        name: "GL_ARB_texture_view",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_texture_view"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBTextureView {
    /// Makes `texture`, a freshly generated name, a view of levels and layers of
    /// `original`, which must have immutable storage.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn texture_view(&self,
                               texture: GLuint,
                               target: TextureTarget,
                               original: GLuint,
                               internal_format: InternalFormat,
                               min_level: GLuint,
                               num_levels: GLuint,
                               min_layer: GLuint,
                               num_layers: GLuint) {
        self.functions.glTextureView(texture,
                                     target.into(),
                                     original,
                                     internal_format.into(),
                                     min_level,
                                     num_levels,
                                     min_layer,
                                     num_layers)
    }
}

gl_functions! {
    pub struct ARBVertexAttribBindingFunctions {
        fn glBindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr,
                              stride: GLsizei);
        fn glVertexAttribFormat(attribindex: GLuint, size: GLint, gltype: GLenum,
                                normalized: GLboolean, relativeoffset: GLuint);
        fn glVertexAttribIFormat(attribindex: GLuint, size: GLint, gltype: GLenum,
                                 relativeoffset: GLuint);
        fn glVertexAttribLFormat(attribindex: GLuint, size: GLint, gltype: GLenum,
                                 relativeoffset: GLuint);
        fn glVertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
        fn glVertexBindingDivisor(bindingindex: GLuint, divisor: GLuint);
    }
}

gl_extension! {
    /// Vertex formats decoupled from vertex buffer bindings.
    pub struct ARBVertexAttribBinding(ARBVertexAttribBindingFunctions) {
        name: "GL_ARB_vertex_attrib_binding",
        core: Some(GLVersion::new(4, 3)),
        extensions: ["GL_ARB_vertex_attrib_binding"],
    }
}

#[allow(clippy::missing_safety_doc)]
impl ARBVertexAttribBinding {
    #[inline]
    pub unsafe fn bind_vertex_buffer(&self, binding: GLuint, buffer: GLuint, offset: usize, stride: GLsizei) {
        self.functions.glBindVertexBuffer(binding, buffer, offset as GLintptr, stride)
    }

    #[inline]
    pub unsafe fn vertex_attrib_format(&self,
                                       index: GLuint,
                                       size: GLint,
                                       attrib_type: VertexAttribType,
                                       normalized: bool,
                                       relative_offset: GLuint) {
        self.functions.glVertexAttribFormat(index,
                                            size,
                                            attrib_type.into(),
                                            marshal::gl_bool(normalized),
                                            relative_offset)
    }

    #[inline]
    pub unsafe fn vertex_attrib_i_format(&self,
                                         index: GLuint,
                                         size: GLint,
                                         attrib_type: VertexAttribType,
                                         relative_offset: GLuint) {
        self.functions.glVertexAttribIFormat(index, size, attrib_type.into(), relative_offset)
    }

    #[inline]
    pub unsafe fn vertex_attrib_l_format(&self,
                                         index: GLuint,
                                         size: GLint,
                                         attrib_type: VertexAttribType,
                                         relative_offset: GLuint) {
        self.functions.glVertexAttribLFormat(index, size, attrib_type.into(), relative_offset)
    }

    #[inline]
    pub unsafe fn vertex_attrib_binding(&self, index: GLuint, binding: GLuint) {
        self.functions.glVertexAttribBinding(index, binding)
    }

    #[inline]
    pub unsafe fn vertex_binding_divisor(&self, binding: GLuint, divisor: GLuint) {
        self.functions.glVertexBindingDivisor(binding, divisor)
    }
}
