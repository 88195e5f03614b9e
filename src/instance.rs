// glbind/src/instance.rs
//
//! Loading every module a context supports at once.

use crate::context::GLContext;
use crate::enums::StringName;
use crate::error::Error;
use crate::ext::*;
use crate::gl;
use crate::info::{GLApi, GLVersion};
use crate::loader::{Extension, FunctionTable};
use crate::versions::{GL11, GL12, GL13, GL14, GL15, GL20, GL21, GL30, GL32};

use std::collections::HashSet;

bitflags! {
    /// Options for `GL::with_flags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LoadFlags: u32 {
        /// Load every module, whether or not the context advertises it. Modules loaded this
        /// way do not count towards the effective version.
        const LOAD_ALL = 0x1;
        /// Discard modules the driver exports only some entry points of.
        const REQUIRE_COMPLETE = 0x2;
    }
}

/// The entry point drivers omit while still advertising `GL_ARB_shader_subroutine`.
const SUBROUTINE_PROBE: &str = "glGetSubroutineUniformLocation";
/// The `GL_VERSION_3_2` entry point that must resolve before a context is promoted to 3.2.
const BUFFER_PARAMETER_64_PROBE: &str = "glGetBufferParameteri64v";

/// The extensions that make up one core version.
struct Promotion {
    version: GLVersion,
    /// Modules that must be supported, by registry name.
    modules: &'static [&'static str],
    /// Extensions without entry points. Each entry is satisfied by any one of its names.
    extensions: &'static [&'static [&'static str]],
}

static PROMOTIONS: &[Promotion] = &[
    Promotion {
        version: GLVersion::new(3, 0),
        modules: &[
            EXTGPUShader4::NAME,
            NVConditionalRender::NAME,
            ARBMapBufferRange::NAME,
            ARBColorBufferFloat::NAME,
            ARBFramebufferObject::NAME,
            EXTTextureInteger::NAME,
            EXTDrawBuffers2::NAME,
            ARBTransformFeedback::NAME,
            ARBVertexArrayObject::NAME,
        ],
        extensions: &[
            &["GL_ARB_depth_buffer_float"],
            &["GL_ARB_texture_float"],
            &["GL_EXT_packed_float"],
            &["GL_EXT_texture_shared_exponent"],
            &["GL_ARB_half_float_pixel"],
            &["GL_EXT_texture_compression_rgtc", "GL_ARB_texture_compression_rgtc"],
        ],
    },
    Promotion {
        version: GLVersion::new(3, 1),
        modules: &[
            ARBDrawInstanced::NAME,
            ARBCopyBuffer::NAME,
            NVPrimitiveRestart::NAME,
            ARBTextureBufferObject::NAME,
            ARBUniformBufferObject::NAME,
        ],
        extensions: &[&["GL_ARB_texture_rectangle"]],
    },
    Promotion {
        version: GLVersion::new(3, 2),
        modules: &[
            ARBDrawElementsBaseVertex::NAME,
            ARBProvokingVertex::NAME,
            ARBTextureMultisample::NAME,
            ARBSync::NAME,
        ],
        extensions: &[
            &["GL_ARB_compatibility"],
            &["GL_ARB_vertex_array_bgra"],
            &["GL_ARB_fragment_coord_conventions"],
            &["GL_ARB_seamless_cube_map"],
            &["GL_ARB_depth_clamp"],
        ],
    },
    Promotion {
        version: GLVersion::new(3, 3),
        modules: &[
            ARBBlendFuncExtended::NAME,
            ARBSamplerObjects::NAME,
            ARBTimerQuery::NAME,
            ARBInstancedArrays::NAME,
        ],
        extensions: &[
            &["GL_ARB_shader_bit_encoding"],
            &["GL_ARB_explicit_attrib_location"],
            &["GL_ARB_occlusion_query2"],
            &["GL_ARB_texture_rgb10_a2ui"],
            &["GL_ARB_texture_swizzle"],
            &["GL_ARB_vertex_type_2_10_10_10_rev"],
        ],
    },
    Promotion {
        version: GLVersion::new(4, 0),
        modules: &[
            ARBShaderSubroutine::NAME,
            ARBDrawIndirect::NAME,
            ARBSampleShading::NAME,
            ARBTessellationShader::NAME,
            ARBTransformFeedback2::NAME,
            ARBTransformFeedback3::NAME,
            ARBDrawBuffersBlend::NAME,
        ],
        extensions: &[
            &["GL_ARB_texture_query_lod"],
            &["GL_ARB_gpu_shader5"],
            &["GL_ARB_gpu_shader_fp64"],
            &["GL_ARB_texture_gather"],
            &["GL_ARB_texture_buffer_object_rgb32"],
            &["GL_ARB_texture_cube_map_array"],
        ],
    },
    Promotion {
        version: GLVersion::new(4, 1),
        modules: &[
            ARBGetProgramBinary::NAME,
            ARBSeparateShaderObjects::NAME,
            ARBES2Compatibility::NAME,
            ARBVertexAttrib64Bit::NAME,
            ARBViewportArray::NAME,
        ],
        extensions: &[&["GL_ARB_shader_precision"]],
    },
    Promotion {
        version: GLVersion::new(4, 2),
        modules: &[
            ARBShaderAtomicCounters::NAME,
            ARBShaderImageLoadStore::NAME,
            ARBTextureStorage::NAME,
            ARBTransformFeedbackInstanced::NAME,
            ARBBaseInstance::NAME,
            ARBInternalformatQuery::NAME,
        ],
        extensions: &[
            &["GL_ARB_shading_language_420pack"],
            &["GL_ARB_compressed_texture_pixel_storage"],
            &["GL_ARB_shading_language_packing"],
            &["GL_ARB_map_buffer_alignment"],
            &["GL_ARB_conservative_depth"],
            &["GL_ARB_texture_compression_bptc"],
        ],
    },
    Promotion {
        version: GLVersion::new(4, 3),
        modules: &[
            KHRDebug::NAME,
            ARBClearBufferObject::NAME,
            ARBComputeShader::NAME,
            ARBCopyImage::NAME,
            ARBInternalformatQuery2::NAME,
            ARBInvalidateSubdata::NAME,
            ARBMultiDrawIndirect::NAME,
            ARBProgramInterfaceQuery::NAME,
            ARBShaderStorageBufferObject::NAME,
            ARBTextureBufferRange::NAME,
            ARBTextureStorageMultisample::NAME,
            ARBTextureView::NAME,
            ARBVertexAttribBinding::NAME,
        ],
        extensions: &[
            &["GL_ARB_arrays_of_arrays"],
            &["GL_ARB_ES3_compatibility"],
            &["GL_ARB_explicit_uniform_location"],
            &["GL_ARB_fragment_layer_viewport"],
            &["GL_ARB_shader_image_size"],
            &["GL_ARB_stencil_texturing"],
            &["GL_ARB_texture_query_levels"],
            &["GL_ARB_robust_buffer_access_behavior"],
        ],
    },
    Promotion {
        version: GLVersion::new(4, 4),
        modules: &[ARBBufferStorage::NAME, ARBClearTexture::NAME, ARBMultiBind::NAME],
        extensions: &[
            &["GL_ARB_enhanced_layouts"],
            &["GL_ARB_query_buffer_object"],
            &["GL_ARB_texture_mirror_clamp_to_edge"],
            &["GL_ARB_texture_stencil8"],
            &["GL_ARB_vertex_type_10f_11f_11f_rev"],
        ],
    },
    Promotion {
        version: GLVersion::new(4, 5),
        modules: &[
            ARBClipControl::NAME,
            ARBES31Compatibility::NAME,
            ARBDirectStateAccess::NAME,
            ARBGetTextureSubImage::NAME,
            KHRRobustness::NAME,
            ARBTextureBarrier::NAME,
        ],
        extensions: &[
            &["GL_ARB_cull_distance"],
            &["GL_ARB_conditional_render_inverted"],
            &["GL_ARB_derivative_control"],
            &["GL_KHR_context_flush_control"],
            &["GL_ARB_shader_texture_image_samples"],
        ],
    },
    Promotion {
        version: GLVersion::new(4, 6),
        modules: &[ARBGLSpirv::NAME, ARBIndirectParameters::NAME, ARBPolygonOffsetClamp::NAME],
        extensions: &[
            &["GL_ARB_spirv_extensions"],
            &["GL_ARB_shader_draw_parameters"],
            &["GL_ARB_pipeline_statistics_query"],
            &["GL_ARB_transform_feedback_overflow_query"],
            &["GL_ARB_texture_filter_anisotropic"],
            &["GL_KHR_no_error"],
            &["GL_ARB_shader_atomic_counter_ops"],
            &["GL_ARB_shader_group_vote"],
        ],
    },
];

/// Every module the context supports, plus the version and extension information that
/// decided which ones those are.
///
/// Modules the context doesn't support are `None`. `gl11` is always present.
#[derive(Clone, Debug)]
pub struct GL {
    api: GLApi,
    reported_version: GLVersion,
    version: GLVersion,
    extensions: Vec<String>,
    extension_set: HashSet<String>,
    supported_modules: HashSet<&'static str>,

    pub gl11: GL11,
    pub gl12: Option<GL12>,
    pub gl13: Option<GL13>,
    pub gl14: Option<GL14>,
    pub gl15: Option<GL15>,
    pub gl20: Option<GL20>,
    pub gl21: Option<GL21>,
    pub gl30: Option<GL30>,
    pub gl32: Option<GL32>,

    pub ext_gpu_shader4: Option<EXTGPUShader4>,
    pub nv_conditional_render: Option<NVConditionalRender>,
    pub arb_map_buffer_range: Option<ARBMapBufferRange>,
    pub arb_color_buffer_float: Option<ARBColorBufferFloat>,
    pub arb_framebuffer_object: Option<ARBFramebufferObject>,
    pub ext_texture_integer: Option<EXTTextureInteger>,
    pub ext_draw_buffers2: Option<EXTDrawBuffers2>,
    pub arb_transform_feedback: Option<ARBTransformFeedback>,
    pub arb_vertex_array_object: Option<ARBVertexArrayObject>,

    pub arb_draw_instanced: Option<ARBDrawInstanced>,
    pub arb_copy_buffer: Option<ARBCopyBuffer>,
    pub nv_primitive_restart: Option<NVPrimitiveRestart>,
    pub arb_texture_buffer_object: Option<ARBTextureBufferObject>,
    pub arb_uniform_buffer_object: Option<ARBUniformBufferObject>,

    pub arb_draw_elements_base_vertex: Option<ARBDrawElementsBaseVertex>,
    pub arb_provoking_vertex: Option<ARBProvokingVertex>,
    pub arb_texture_multisample: Option<ARBTextureMultisample>,
    pub arb_sync: Option<ARBSync>,

    pub arb_blend_func_extended: Option<ARBBlendFuncExtended>,
    pub arb_sampler_objects: Option<ARBSamplerObjects>,
    pub arb_timer_query: Option<ARBTimerQuery>,
    pub arb_instanced_arrays: Option<ARBInstancedArrays>,

    pub arb_shader_subroutine: Option<ARBShaderSubroutine>,
    pub arb_draw_indirect: Option<ARBDrawIndirect>,
    pub arb_sample_shading: Option<ARBSampleShading>,
    pub arb_tessellation_shader: Option<ARBTessellationShader>,
    pub arb_transform_feedback2: Option<ARBTransformFeedback2>,
    pub arb_transform_feedback3: Option<ARBTransformFeedback3>,
    pub arb_draw_buffers_blend: Option<ARBDrawBuffersBlend>,

    pub arb_get_program_binary: Option<ARBGetProgramBinary>,
    pub arb_separate_shader_objects: Option<ARBSeparateShaderObjects>,
    pub arb_es2_compatibility: Option<ARBES2Compatibility>,
    pub arb_vertex_attrib_64bit: Option<ARBVertexAttrib64Bit>,
    pub arb_viewport_array: Option<ARBViewportArray>,

    pub arb_shader_atomic_counters: Option<ARBShaderAtomicCounters>,
    pub arb_shader_image_load_store: Option<ARBShaderImageLoadStore>,
    pub arb_texture_storage: Option<ARBTextureStorage>,
    pub arb_transform_feedback_instanced: Option<ARBTransformFeedbackInstanced>,
    pub arb_base_instance: Option<ARBBaseInstance>,
    pub arb_internalformat_query: Option<ARBInternalformatQuery>,

    pub khr_debug: Option<KHRDebug>,
    pub arb_clear_buffer_object: Option<ARBClearBufferObject>,
    pub arb_compute_shader: Option<ARBComputeShader>,
    pub arb_copy_image: Option<ARBCopyImage>,
    pub arb_internalformat_query2: Option<ARBInternalformatQuery2>,
    pub arb_invalidate_subdata: Option<ARBInvalidateSubdata>,
    pub arb_multi_draw_indirect: Option<ARBMultiDrawIndirect>,
    pub arb_program_interface_query: Option<ARBProgramInterfaceQuery>,
    pub arb_shader_storage_buffer_object: Option<ARBShaderStorageBufferObject>,
    pub arb_texture_buffer_range: Option<ARBTextureBufferRange>,
    pub arb_texture_storage_multisample: Option<ARBTextureStorageMultisample>,
    pub arb_texture_view: Option<ARBTextureView>,
    pub arb_vertex_attrib_binding: Option<ARBVertexAttribBinding>,

    pub arb_buffer_storage: Option<ARBBufferStorage>,
    pub arb_clear_texture: Option<ARBClearTexture>,
    pub arb_multi_bind: Option<ARBMultiBind>,

    pub arb_clip_control: Option<ARBClipControl>,
    pub arb_es31_compatibility: Option<ARBES31Compatibility>,
    pub arb_direct_state_access: Option<ARBDirectStateAccess>,
    pub arb_get_texture_sub_image: Option<ARBGetTextureSubImage>,
    pub khr_robustness: Option<KHRRobustness>,
    pub arb_texture_barrier: Option<ARBTextureBarrier>,

    pub arb_gl_spirv: Option<ARBGLSpirv>,
    pub arb_indirect_parameters: Option<ARBIndirectParameters>,
    pub arb_polygon_offset_clamp: Option<ARBPolygonOffsetClamp>,

    pub ext_depth_bounds_test: Option<EXTDepthBoundsTest>,
    pub arb_bindless_texture: Option<ARBBindlessTexture>,
}

/// Loading state shared by every module while a `GL` is being built.
struct ModuleLoader<'a, C>
where
    C: GLContext + ?Sized,
{
    context: &'a C,
    version: GLVersion,
    extensions: &'a HashSet<String>,
    flags: LoadFlags,
    supported: HashSet<&'static str>,
}

impl<'a, C> ModuleLoader<'a, C>
where
    C: GLContext + ?Sized,
{
    fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    fn load<E>(&mut self) -> Option<E>
    where
        E: Extension,
    {
        let supported = E::is_supported(self.version, |name| self.has_extension(name));
        self.load_if::<E>(supported)
    }

    /// Loads `E` if `supported` or if everything is being loaded. Only supported modules are
    /// recorded as such.
    fn load_if<E>(&mut self, supported: bool) -> Option<E>
    where
        E: Extension,
    {
        if !supported && !self.flags.contains(LoadFlags::LOAD_ALL) {
            return None;
        }

        let module = E::load(self.context);
        let functions = module.functions();
        if !functions.is_complete() {
            let missing = functions.missing_functions();
            if supported {
                warn!("{} is advertised but the driver does not export {:?}", E::NAME, missing);
            }
            if self.flags.contains(LoadFlags::REQUIRE_COMPLETE) {
                debug!("{}: discarded, {} entry points missing", E::NAME, missing.len());
                return None;
            }
        }

        if supported {
            self.supported.insert(E::NAME);
        }
        Some(module)
    }

    fn forget(&mut self, name: &'static str) {
        self.supported.remove(name);
    }
}

impl GL {
    /// Queries the context and loads every module it supports.
    #[inline]
    pub fn new<C>(context: &C) -> Result<GL, Error>
    where
        C: GLContext + ?Sized,
    {
        GL::with_flags(context, LoadFlags::empty())
    }

    pub fn with_flags<C>(context: &C, flags: LoadFlags) -> Result<GL, Error>
    where
        C: GLContext + ?Sized,
    {
        let gl11 = GL11::load(context);
        let functions = gl11.functions();
        for &name in &["glGetString", "glGetIntegerv"] {
            if !functions.is_loaded(name) {
                return Err(Error::GLFunctionNotFound(name));
            }
        }

        let (api, reported_version) = match context.version() {
            Some(version) => (GLApi::GL, version),
            None => unsafe { query_version(&gl11)? },
        };
        let extensions = unsafe { query_extensions(context, &gl11, reported_version)? };
        let extension_set: HashSet<String> = extensions.iter().cloned().collect();
        debug!("{:?} {} with {} extensions", api, reported_version, extensions.len());

        let mut loader = ModuleLoader {
            context,
            version: reported_version,
            extensions: &extension_set,
            flags,
            supported: HashSet::new(),
        };

        let ext_gpu_shader4 = loader.load::<EXTGPUShader4>();
        let nv_conditional_render = loader.load::<NVConditionalRender>();
        let arb_map_buffer_range = loader.load::<ARBMapBufferRange>();
        let arb_color_buffer_float = loader.load::<ARBColorBufferFloat>();
        let ext_framebuffer_object =
            EXT_FRAMEBUFFER_OBJECT_SET.iter().all(|&name| loader.has_extension(name));
        let arb_framebuffer_object = {
            let supported = ext_framebuffer_object ||
                ARBFramebufferObject::is_supported(reported_version, |name| loader.has_extension(name));
            loader.load_if::<ARBFramebufferObject>(supported)
        };
        let ext_texture_integer = loader.load::<EXTTextureInteger>();
        let ext_draw_buffers2 = loader.load::<EXTDrawBuffers2>();
        let arb_transform_feedback = loader.load::<ARBTransformFeedback>();
        let arb_vertex_array_object = loader.load::<ARBVertexArrayObject>();

        let arb_draw_instanced = loader.load::<ARBDrawInstanced>();
        let arb_copy_buffer = loader.load::<ARBCopyBuffer>();
        let nv_primitive_restart = loader.load::<NVPrimitiveRestart>();
        let arb_texture_buffer_object = loader.load::<ARBTextureBufferObject>();
        let arb_uniform_buffer_object = loader.load::<ARBUniformBufferObject>();

        let arb_draw_elements_base_vertex = loader.load::<ARBDrawElementsBaseVertex>();
        let arb_provoking_vertex = loader.load::<ARBProvokingVertex>();
        let arb_texture_multisample = loader.load::<ARBTextureMultisample>();
        let arb_sync = loader.load::<ARBSync>();

        let arb_blend_func_extended = loader.load::<ARBBlendFuncExtended>();
        let arb_sampler_objects = loader.load::<ARBSamplerObjects>();
        let arb_timer_query = loader.load::<ARBTimerQuery>();
        let arb_instanced_arrays = loader.load::<ARBInstancedArrays>();

        let arb_shader_subroutine = match loader.load::<ARBShaderSubroutine>() {
            Some(module) if !module.functions().is_loaded(SUBROUTINE_PROBE) => {
                warn!("{}: {} is missing, discarding the module",
                      ARBShaderSubroutine::NAME,
                      SUBROUTINE_PROBE);
                loader.forget(ARBShaderSubroutine::NAME);
                None
            }
            module => module,
        };
        let arb_draw_indirect = loader.load::<ARBDrawIndirect>();
        let arb_sample_shading = loader.load::<ARBSampleShading>();
        let arb_tessellation_shader = loader.load::<ARBTessellationShader>();
        let arb_transform_feedback2 = loader.load::<ARBTransformFeedback2>();
        let arb_transform_feedback3 = loader.load::<ARBTransformFeedback3>();
        let arb_draw_buffers_blend = loader.load::<ARBDrawBuffersBlend>();

        let arb_get_program_binary = loader.load::<ARBGetProgramBinary>();
        let arb_separate_shader_objects = loader.load::<ARBSeparateShaderObjects>();
        let arb_es2_compatibility = loader.load::<ARBES2Compatibility>();
        let arb_vertex_attrib_64bit = loader.load::<ARBVertexAttrib64Bit>();
        let arb_viewport_array = loader.load::<ARBViewportArray>();

        let arb_shader_atomic_counters = loader.load::<ARBShaderAtomicCounters>();
        let arb_shader_image_load_store = loader.load::<ARBShaderImageLoadStore>();
        let arb_texture_storage = loader.load::<ARBTextureStorage>();
        let arb_transform_feedback_instanced = loader.load::<ARBTransformFeedbackInstanced>();
        let arb_base_instance = loader.load::<ARBBaseInstance>();
        let arb_internalformat_query = loader.load::<ARBInternalformatQuery>();

        let khr_debug = loader.load::<KHRDebug>();
        let arb_clear_buffer_object = loader.load::<ARBClearBufferObject>();
        let arb_compute_shader = loader.load::<ARBComputeShader>();
        let arb_copy_image = loader.load::<ARBCopyImage>();
        let arb_internalformat_query2 = loader.load::<ARBInternalformatQuery2>();
        let arb_invalidate_subdata = loader.load::<ARBInvalidateSubdata>();
        let arb_multi_draw_indirect = loader.load::<ARBMultiDrawIndirect>();
        let arb_program_interface_query = loader.load::<ARBProgramInterfaceQuery>();
        let arb_shader_storage_buffer_object = loader.load::<ARBShaderStorageBufferObject>();
        let arb_texture_buffer_range = loader.load::<ARBTextureBufferRange>();
        let arb_texture_storage_multisample = loader.load::<ARBTextureStorageMultisample>();
        let arb_texture_view = loader.load::<ARBTextureView>();
        let arb_vertex_attrib_binding = loader.load::<ARBVertexAttribBinding>();

        let arb_buffer_storage = loader.load::<ARBBufferStorage>();
        let arb_clear_texture = loader.load::<ARBClearTexture>();
        let arb_multi_bind = loader.load::<ARBMultiBind>();

        let arb_clip_control = loader.load::<ARBClipControl>();
        let arb_es31_compatibility = loader.load::<ARBES31Compatibility>();
        let arb_direct_state_access = loader.load::<ARBDirectStateAccess>();
        let arb_get_texture_sub_image = loader.load::<ARBGetTextureSubImage>();
        let khr_robustness = loader.load::<KHRRobustness>();
        let arb_texture_barrier = loader.load::<ARBTextureBarrier>();

        let arb_gl_spirv = loader.load::<ARBGLSpirv>();
        let arb_indirect_parameters = loader.load::<ARBIndirectParameters>();
        let arb_polygon_offset_clamp = loader.load::<ARBPolygonOffsetClamp>();

        let ext_depth_bounds_test = loader.load::<EXTDepthBoundsTest>();
        let arb_bindless_texture = loader.load::<ARBBindlessTexture>();

        let version = promote(reported_version, &loader.supported, &extension_set, || {
            !context.get_proc_address(BUFFER_PARAMETER_64_PROBE).is_null()
        });
        if version != reported_version {
            debug!("promoted from {} to {} by extensions", reported_version, version);
        }

        // Core-only entry points follow the effective version.
        loader.version = version;
        let gl12 = loader.load::<GL12>();
        let gl13 = loader.load::<GL13>();
        let gl14 = loader.load::<GL14>();
        let gl15 = loader.load::<GL15>();
        let gl20 = loader.load::<GL20>();
        let gl21 = loader.load::<GL21>();
        let gl30 = loader.load::<GL30>();
        let gl32 = loader.load::<GL32>();
        let supported_modules = loader.supported;

        Ok(GL {
            api,
            reported_version,
            version,
            extensions,
            extension_set,
            supported_modules,
            gl11,
            gl12,
            gl13,
            gl14,
            gl15,
            gl20,
            gl21,
            gl30,
            gl32,
            ext_gpu_shader4,
            nv_conditional_render,
            arb_map_buffer_range,
            arb_color_buffer_float,
            arb_framebuffer_object,
            ext_texture_integer,
            ext_draw_buffers2,
            arb_transform_feedback,
            arb_vertex_array_object,
            arb_draw_instanced,
            arb_copy_buffer,
            nv_primitive_restart,
            arb_texture_buffer_object,
            arb_uniform_buffer_object,
            arb_draw_elements_base_vertex,
            arb_provoking_vertex,
            arb_texture_multisample,
            arb_sync,
            arb_blend_func_extended,
            arb_sampler_objects,
            arb_timer_query,
            arb_instanced_arrays,
            arb_shader_subroutine,
            arb_draw_indirect,
            arb_sample_shading,
            arb_tessellation_shader,
            arb_transform_feedback2,
            arb_transform_feedback3,
            arb_draw_buffers_blend,
            arb_get_program_binary,
            arb_separate_shader_objects,
            arb_es2_compatibility,
            arb_vertex_attrib_64bit,
            arb_viewport_array,
            arb_shader_atomic_counters,
            arb_shader_image_load_store,
            arb_texture_storage,
            arb_transform_feedback_instanced,
            arb_base_instance,
            arb_internalformat_query,
            khr_debug,
            arb_clear_buffer_object,
            arb_compute_shader,
            arb_copy_image,
            arb_internalformat_query2,
            arb_invalidate_subdata,
            arb_multi_draw_indirect,
            arb_program_interface_query,
            arb_shader_storage_buffer_object,
            arb_texture_buffer_range,
            arb_texture_storage_multisample,
            arb_texture_view,
            arb_vertex_attrib_binding,
            arb_buffer_storage,
            arb_clear_texture,
            arb_multi_bind,
            arb_clip_control,
            arb_es31_compatibility,
            arb_direct_state_access,
            arb_get_texture_sub_image,
            khr_robustness,
            arb_texture_barrier,
            arb_gl_spirv,
            arb_indirect_parameters,
            arb_polygon_offset_clamp,
            ext_depth_bounds_test,
            arb_bindless_texture,
        })
    }

    #[inline]
    pub fn api(&self) -> GLApi {
        self.api
    }

    /// The effective version: the reported version, raised to the newest core version whose
    /// extensions the context advertises in full.
    #[inline]
    pub fn version(&self) -> GLVersion {
        self.version
    }

    /// The version the context itself reported.
    #[inline]
    pub fn reported_version(&self) -> GLVersion {
        self.reported_version
    }

    /// Returns `true` if the effective version is at least `version`.
    #[inline]
    pub fn supports(&self, version: GLVersion) -> bool {
        self.version >= version
    }

    #[inline]
    pub fn has_extension(&self, name: &str) -> bool {
        self.extension_set.contains(name)
    }

    /// Advertised extensions, in the order the driver listed them.
    #[inline]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns `true` if the module with the given registry name (`Extension::NAME`) is
    /// supported by the context, as opposed to missing or only loaded by `LOAD_ALL`.
    #[inline]
    pub fn supports_module(&self, name: &str) -> bool {
        self.supported_modules.contains(name)
    }
}

unsafe fn query_version(gl11: &GL11) -> Result<(GLApi, GLVersion), Error> {
    let version_string = gl11.get_string(StringName::Version);
    match version_string.as_deref().and_then(GLVersion::parse) {
        Some(version) => Ok(version),
        None => Err(Error::UnsupportedGLVersion(version_string)),
    }
}

unsafe fn query_extensions<C>(context: &C, gl11: &GL11, version: GLVersion)
                              -> Result<Vec<String>, Error>
where
    C: GLContext + ?Sized,
{
    if version < GLVersion::new(3, 0) {
        let extensions = gl11.get_string(StringName::Extensions).unwrap_or_default();
        return Ok(extensions.split_whitespace().map(str::to_owned).collect());
    }

    let gl30 = GL30::load(context);
    if !gl30.functions().is_loaded("glGetStringi") {
        return Err(Error::GLFunctionNotFound("glGetStringi"));
    }
    let count = gl11.get_integer(gl::NUM_EXTENSIONS).max(0) as u32;
    Ok((0..count).filter_map(|index| gl30.get_string_i(StringName::Extensions, index)).collect())
}

/// Raises `version` one core version at a time while every module and extension of the next
/// version is available. `has_buffer_parameter_64` checks the extra 3.2 requirement.
fn promote<F>(version: GLVersion,
              supported_modules: &HashSet<&'static str>,
              extensions: &HashSet<String>,
              has_buffer_parameter_64: F)
              -> GLVersion
where
    F: Fn() -> bool,
{
    let mut version = version;
    // Promotion to 3.0 starts from 2.1.
    let mut previous = GLVersion::new(2, 1);
    for promotion in PROMOTIONS {
        if version >= promotion.version {
            previous = promotion.version;
            continue;
        }
        if version < previous {
            break;
        }

        let modules = promotion.modules.iter().all(|&name| supported_modules.contains(name));
        let other_extensions = promotion.extensions.iter().all(|names| {
            names.iter().any(|&name| extensions.contains(name))
        });
        let extra = promotion.version != GLVersion::new(3, 2) || has_buffer_parameter_64();
        if !(modules && other_extensions && extra) {
            break;
        }

        version = promotion.version;
        previous = promotion.version;
    }
    version
}
