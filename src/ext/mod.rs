// glbind/src/ext/mod.rs
//
//! Extension modules, grouped by the core version that absorbed them.

mod direct_state_access;
mod khr_debug;
mod v30;
mod v31;
mod v32;
mod v33;
mod v40;
mod v41;
mod v42;
mod v43;
mod v44;
mod v45;
mod v46;
mod vendor;

pub use self::v30::{ARBColorBufferFloat, ARBColorBufferFloatFunctions, ClampColorMode};
pub use self::v30::{ARBFramebufferObject, ARBFramebufferObjectFunctions};
pub use self::v30::{FramebufferAttachmentParameter, RenderbufferParameter};
pub use self::v30::EXT_FRAMEBUFFER_OBJECT_SET;
pub use self::v30::{ARBMapBufferRange, ARBMapBufferRangeFunctions};
pub use self::v30::{ARBTransformFeedback, ARBTransformFeedbackFunctions};
pub use self::v30::{TransformFeedbackBufferMode, TransformFeedbackVarying};
pub use self::v30::{ARBVertexArrayObject, ARBVertexArrayObjectFunctions};
pub use self::v30::{EXTDrawBuffers2, EXTDrawBuffers2Functions};
pub use self::v30::{EXTGPUShader4, EXTGPUShader4Functions};
pub use self::v30::{EXTTextureInteger, EXTTextureIntegerFunctions};
pub use self::v30::{ConditionalRenderMode, NVConditionalRender, NVConditionalRenderFunctions};

pub use self::v31::{ARBCopyBuffer, ARBCopyBufferFunctions};
pub use self::v31::{ARBDrawInstanced, ARBDrawInstancedFunctions};
pub use self::v31::{ARBTextureBufferObject, ARBTextureBufferObjectFunctions};
pub use self::v31::{ARBUniformBufferObject, ARBUniformBufferObjectFunctions};
pub use self::v31::{ActiveUniformParameter, UniformBlockParameter};
pub use self::v31::{NVPrimitiveRestart, NVPrimitiveRestartFunctions};

pub use self::v32::{ARBDrawElementsBaseVertex, ARBDrawElementsBaseVertexFunctions};
pub use self::v32::{ARBProvokingVertex, ARBProvokingVertexFunctions, ProvokingVertexConvention};
pub use self::v32::{ARBSync, ARBSyncFunctions, SyncParameter, SyncStatus};
pub use self::v32::{ARBTextureMultisample, ARBTextureMultisampleFunctions};

pub use self::v33::{ARBBlendFuncExtended, ARBBlendFuncExtendedFunctions};
pub use self::v33::{ARBInstancedArrays, ARBInstancedArraysFunctions};
pub use self::v33::{ARBSamplerObjects, ARBSamplerObjectsFunctions, SamplerParameter};
pub use self::v33::{ARBTimerQuery, ARBTimerQueryFunctions};

pub use self::v40::{ARBDrawBuffersBlend, ARBDrawBuffersBlendFunctions};
pub use self::v40::{ARBDrawIndirect, ARBDrawIndirectFunctions};
pub use self::v40::{DrawArraysIndirectCommand, DrawElementsIndirectCommand};
pub use self::v40::{ARBSampleShading, ARBSampleShadingFunctions};
pub use self::v40::{ARBShaderSubroutine, ARBShaderSubroutineFunctions};
pub use self::v40::{ProgramStageParameter, SubroutineUniformParameter};
pub use self::v40::{ARBTessellationShader, ARBTessellationShaderFunctions};
pub use self::v40::{ARBTransformFeedback2, ARBTransformFeedback2Functions};
pub use self::v40::{ARBTransformFeedback3, ARBTransformFeedback3Functions};

pub use self::v41::{ARBES2Compatibility, ARBES2CompatibilityFunctions};
pub use self::v41::{PrecisionType, ShaderPrecisionFormat};
pub use self::v41::{ARBGetProgramBinary, ARBGetProgramBinaryFunctions, ProgramBinary};
pub use self::v41::{ARBSeparateShaderObjects, ARBSeparateShaderObjectsFunctions};
pub use self::v41::ProgramPipelineParameter;
pub use self::v41::{ARBVertexAttrib64Bit, ARBVertexAttrib64BitFunctions};
pub use self::v41::{ARBViewportArray, ARBViewportArrayFunctions};

pub use self::v42::{ARBBaseInstance, ARBBaseInstanceFunctions};
pub use self::v42::{ARBInternalformatQuery, ARBInternalformatQueryFunctions};
pub use self::v42::{ARBShaderAtomicCounters, ARBShaderAtomicCountersFunctions};
pub use self::v42::AtomicCounterBufferParameter;
pub use self::v42::{ARBShaderImageLoadStore, ARBShaderImageLoadStoreFunctions, ImageAccess};
pub use self::v42::{ARBTextureStorage, ARBTextureStorageFunctions};
pub use self::v42::{ARBTransformFeedbackInstanced, ARBTransformFeedbackInstancedFunctions};

pub use self::khr_debug::{DebugMessage, DebugSeverity, DebugSource, DebugType};
pub use self::khr_debug::{KHRDebug, KHRDebugFunctions};
pub use self::v43::{ARBClearBufferObject, ARBClearBufferObjectFunctions};
pub use self::v43::{ARBComputeShader, ARBComputeShaderFunctions};
pub use self::v43::{ARBCopyImage, ARBCopyImageFunctions, ImageLocation};
pub use self::v43::{ARBInternalformatQuery2, ARBInternalformatQuery2Functions};
pub use self::v43::{ARBInvalidateSubdata, ARBInvalidateSubdataFunctions};
pub use self::v43::{ARBMultiDrawIndirect, ARBMultiDrawIndirectFunctions};
pub use self::v43::{ARBProgramInterfaceQuery, ARBProgramInterfaceQueryFunctions};
pub use self::v43::{ProgramInterface, ProgramInterfaceParameter, ResourceProperty};
pub use self::v43::{ARBShaderStorageBufferObject, ARBShaderStorageBufferObjectFunctions};
pub use self::v43::{ARBTextureBufferRange, ARBTextureBufferRangeFunctions};
pub use self::v43::{ARBTextureStorageMultisample, ARBTextureStorageMultisampleFunctions};
pub use self::v43::{ARBTextureView, ARBTextureViewFunctions};
pub use self::v43::{ARBVertexAttribBinding, ARBVertexAttribBindingFunctions};

pub use self::v44::{ARBBufferStorage, ARBBufferStorageFunctions};
pub use self::v44::{ARBClearTexture, ARBClearTextureFunctions};
pub use self::v44::{ARBMultiBind, ARBMultiBindFunctions};

pub use self::direct_state_access::{ARBDirectStateAccess, ARBDirectStateAccessFunctions};
pub use self::v45::{ARBClipControl, ARBClipControlFunctions, ClipDepth, ClipOrigin};
pub use self::v45::{ARBES31Compatibility, ARBES31CompatibilityFunctions};
pub use self::v45::{ARBGetTextureSubImage, ARBGetTextureSubImageFunctions};
pub use self::v45::{ARBTextureBarrier, ARBTextureBarrierFunctions};
pub use self::v45::{GraphicsResetStatus, KHRRobustness, KHRRobustnessFunctions};

pub use self::v46::{ARBGLSpirv, ARBGLSpirvFunctions};
pub use self::v46::{ARBIndirectParameters, ARBIndirectParametersFunctions};
pub use self::v46::{ARBPolygonOffsetClamp, ARBPolygonOffsetClampFunctions};

pub use self::vendor::{ARBBindlessTexture, ARBBindlessTextureFunctions, ImageHandleAccess};
pub use self::vendor::{EXTDepthBoundsTest, EXTDepthBoundsTestFunctions};
