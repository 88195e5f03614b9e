// glbind/src/enums.rs
//
//! Typed tokens shared by several modules.

use crate::gl;
use crate::gl::types::GLbitfield;

gl_enum! {
    /// Server-side capabilities toggled with `glEnable`/`glDisable`.
    pub enum Capability {
        Blend = gl::BLEND,
        ClipDistance0 = gl::CLIP_DISTANCE0,
        ClipDistance1 = gl::CLIP_DISTANCE1,
        ClipDistance2 = gl::CLIP_DISTANCE2,
        ClipDistance3 = gl::CLIP_DISTANCE3,
        ClipDistance4 = gl::CLIP_DISTANCE4,
        ClipDistance5 = gl::CLIP_DISTANCE5,
        ClipDistance6 = gl::CLIP_DISTANCE6,
        ClipDistance7 = gl::CLIP_DISTANCE7,
        ColorLogicOp = gl::COLOR_LOGIC_OP,
        CullFace = gl::CULL_FACE,
        DebugOutput = gl::DEBUG_OUTPUT,
        DebugOutputSynchronous = gl::DEBUG_OUTPUT_SYNCHRONOUS,
        DepthBoundsTest = gl::DEPTH_BOUNDS_TEST_EXT,
        DepthClamp = gl::DEPTH_CLAMP,
        DepthTest = gl::DEPTH_TEST,
        Dither = gl::DITHER,
        FramebufferSRGB = gl::FRAMEBUFFER_SRGB,
        LineSmooth = gl::LINE_SMOOTH,
        Multisample = gl::MULTISAMPLE,
        PolygonOffsetFill = gl::POLYGON_OFFSET_FILL,
        PolygonOffsetLine = gl::POLYGON_OFFSET_LINE,
        PolygonOffsetPoint = gl::POLYGON_OFFSET_POINT,
        PolygonSmooth = gl::POLYGON_SMOOTH,
        PrimitiveRestart = gl::PRIMITIVE_RESTART,
        PrimitiveRestartFixedIndex = gl::PRIMITIVE_RESTART_FIXED_INDEX,
        ProgramPointSize = gl::PROGRAM_POINT_SIZE,
        RasterizerDiscard = gl::RASTERIZER_DISCARD,
        SampleAlphaToCoverage = gl::SAMPLE_ALPHA_TO_COVERAGE,
        SampleAlphaToOne = gl::SAMPLE_ALPHA_TO_ONE,
        SampleCoverage = gl::SAMPLE_COVERAGE,
        SampleMask = gl::SAMPLE_MASK,
        SampleShading = gl::SAMPLE_SHADING,
        ScissorTest = gl::SCISSOR_TEST,
        StencilTest = gl::STENCIL_TEST,
        TextureCubeMapSeamless = gl::TEXTURE_CUBE_MAP_SEAMLESS,
    }
}

gl_enum! {
    pub enum CompareFunc {
        Never = gl::NEVER,
        Less = gl::LESS,
        Equal = gl::EQUAL,
        LessOrEqual = gl::LEQUAL,
        Greater = gl::GREATER,
        NotEqual = gl::NOTEQUAL,
        GreaterOrEqual = gl::GEQUAL,
        Always = gl::ALWAYS,
    }
}

gl_enum! {
    pub enum BlendFactor {
        Zero = gl::ZERO,
        One = gl::ONE,
        SrcColor = gl::SRC_COLOR,
        OneMinusSrcColor = gl::ONE_MINUS_SRC_COLOR,
        DstColor = gl::DST_COLOR,
        OneMinusDstColor = gl::ONE_MINUS_DST_COLOR,
        SrcAlpha = gl::SRC_ALPHA,
        OneMinusSrcAlpha = gl::ONE_MINUS_SRC_ALPHA,
        DstAlpha = gl::DST_ALPHA,
        OneMinusDstAlpha = gl::ONE_MINUS_DST_ALPHA,
        ConstantColor = gl::CONSTANT_COLOR,
        OneMinusConstantColor = gl::ONE_MINUS_CONSTANT_COLOR,
        ConstantAlpha = gl::CONSTANT_ALPHA,
        OneMinusConstantAlpha = gl::ONE_MINUS_CONSTANT_ALPHA,
        SrcAlphaSaturate = gl::SRC_ALPHA_SATURATE,
        Src1Color = gl::SRC1_COLOR,
        OneMinusSrc1Color = gl::ONE_MINUS_SRC1_COLOR,
        Src1Alpha = gl::SRC1_ALPHA,
        OneMinusSrc1Alpha = gl::ONE_MINUS_SRC1_ALPHA,
    }
}

gl_enum! {
    pub enum BlendEquation {
        Add = gl::FUNC_ADD,
        Subtract = gl::FUNC_SUBTRACT,
        ReverseSubtract = gl::FUNC_REVERSE_SUBTRACT,
        Min = gl::MIN,
        Max = gl::MAX,
    }
}

gl_enum! {
    pub enum StencilOp {
        Keep = gl::KEEP,
        Zero = gl::ZERO,
        Replace = gl::REPLACE,
        Increment = gl::INCR,
        IncrementWrap = gl::INCR_WRAP,
        Decrement = gl::DECR,
        DecrementWrap = gl::DECR_WRAP,
        Invert = gl::INVERT,
    }
}

gl_enum! {
    pub enum Face {
        Front = gl::FRONT,
        Back = gl::BACK,
        FrontAndBack = gl::FRONT_AND_BACK,
    }
}

gl_enum! {
    pub enum FrontFace {
        Clockwise = gl::CW,
        CounterClockwise = gl::CCW,
    }
}

gl_enum! {
    pub enum PolygonMode {
        Point = gl::POINT,
        Line = gl::LINE,
        Fill = gl::FILL,
    }
}

gl_enum! {
    pub enum LogicOp {
        Clear = gl::CLEAR,
        And = gl::AND,
        AndReverse = gl::AND_REVERSE,
        Copy = gl::COPY,
        AndInverted = gl::AND_INVERTED,
        NoOp = gl::NOOP,
        Xor = gl::XOR,
        Or = gl::OR,
        Nor = gl::NOR,
        Equiv = gl::EQUIV,
        Invert = gl::INVERT,
        OrReverse = gl::OR_REVERSE,
        CopyInverted = gl::COPY_INVERTED,
        OrInverted = gl::OR_INVERTED,
        Nand = gl::NAND,
        Set = gl::SET,
    }
}

gl_enum! {
    pub enum HintTarget {
        LineSmooth = gl::LINE_SMOOTH_HINT,
        PolygonSmooth = gl::POLYGON_SMOOTH_HINT,
        TextureCompression = gl::TEXTURE_COMPRESSION_HINT,
        FragmentShaderDerivative = gl::FRAGMENT_SHADER_DERIVATIVE_HINT,
    }
}

gl_enum! {
    pub enum HintMode {
        Fastest = gl::FASTEST,
        Nicest = gl::NICEST,
        DontCare = gl::DONT_CARE,
    }
}

gl_enum! {
    pub enum PrimitiveType {
        Points = gl::POINTS,
        LineStrip = gl::LINE_STRIP,
        LineLoop = gl::LINE_LOOP,
        Lines = gl::LINES,
        LineStripAdjacency = gl::LINE_STRIP_ADJACENCY,
        LinesAdjacency = gl::LINES_ADJACENCY,
        TriangleStrip = gl::TRIANGLE_STRIP,
        TriangleFan = gl::TRIANGLE_FAN,
        Triangles = gl::TRIANGLES,
        TriangleStripAdjacency = gl::TRIANGLE_STRIP_ADJACENCY,
        TrianglesAdjacency = gl::TRIANGLES_ADJACENCY,
        Patches = gl::PATCHES,
    }
}

gl_enum! {
    pub enum IndexType {
        UnsignedByte = gl::UNSIGNED_BYTE,
        UnsignedShort = gl::UNSIGNED_SHORT,
        UnsignedInt = gl::UNSIGNED_INT,
    }
}

gl_enum! {
    pub enum TextureTarget {
        Texture1D = gl::TEXTURE_1D,
        Texture2D = gl::TEXTURE_2D,
        Texture3D = gl::TEXTURE_3D,
        Texture1DArray = gl::TEXTURE_1D_ARRAY,
        Texture2DArray = gl::TEXTURE_2D_ARRAY,
        Rectangle = gl::TEXTURE_RECTANGLE,
        CubeMap = gl::TEXTURE_CUBE_MAP,
        CubeMapArray = gl::TEXTURE_CUBE_MAP_ARRAY,
        CubeMapPositiveX = gl::TEXTURE_CUBE_MAP_POSITIVE_X,
        CubeMapNegativeX = gl::TEXTURE_CUBE_MAP_NEGATIVE_X,
        CubeMapPositiveY = gl::TEXTURE_CUBE_MAP_POSITIVE_Y,
        CubeMapNegativeY = gl::TEXTURE_CUBE_MAP_NEGATIVE_Y,
        CubeMapPositiveZ = gl::TEXTURE_CUBE_MAP_POSITIVE_Z,
        CubeMapNegativeZ = gl::TEXTURE_CUBE_MAP_NEGATIVE_Z,
        Buffer = gl::TEXTURE_BUFFER,
        Texture2DMultisample = gl::TEXTURE_2D_MULTISAMPLE,
        Texture2DMultisampleArray = gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
    }
}

gl_enum! {
    pub enum InternalFormat {
        Red = gl::RED,
        RG = gl::RG,
        RGB = gl::RGB,
        RGBA = gl::RGBA,
        DepthComponent = gl::DEPTH_COMPONENT,
        DepthStencil = gl::DEPTH_STENCIL,
        R8 = gl::R8,
        R8SNorm = gl::R8_SNORM,
        R16 = gl::R16,
        R16SNorm = gl::R16_SNORM,
        RG8 = gl::RG8,
        RG8SNorm = gl::RG8_SNORM,
        RG16 = gl::RG16,
        RG16SNorm = gl::RG16_SNORM,
        RGB565 = gl::RGB565,
        RGB8 = gl::RGB8,
        RGB8SNorm = gl::RGB8_SNORM,
        RGB10 = gl::RGB10,
        RGB16 = gl::RGB16,
        RGB16SNorm = gl::RGB16_SNORM,
        RGBA4 = gl::RGBA4,
        RGB5A1 = gl::RGB5_A1,
        RGBA8 = gl::RGBA8,
        RGBA8SNorm = gl::RGBA8_SNORM,
        RGB10A2 = gl::RGB10_A2,
        RGB10A2UI = gl::RGB10_A2UI,
        RGBA16 = gl::RGBA16,
        SRGB8 = gl::SRGB8,
        SRGB8Alpha8 = gl::SRGB8_ALPHA8,
        R16F = gl::R16F,
        RG16F = gl::RG16F,
        RGB16F = gl::RGB16F,
        RGBA16F = gl::RGBA16F,
        R32F = gl::R32F,
        RG32F = gl::RG32F,
        RGB32F = gl::RGB32F,
        RGBA32F = gl::RGBA32F,
        R11FG11FB10F = gl::R11F_G11F_B10F,
        RGB9E5 = gl::RGB9_E5,
        R8I = gl::R8I,
        R8UI = gl::R8UI,
        R16I = gl::R16I,
        R16UI = gl::R16UI,
        R32I = gl::R32I,
        R32UI = gl::R32UI,
        RG8I = gl::RG8I,
        RG8UI = gl::RG8UI,
        RG16I = gl::RG16I,
        RG16UI = gl::RG16UI,
        RG32I = gl::RG32I,
        RG32UI = gl::RG32UI,
        RGB8I = gl::RGB8I,
        RGB8UI = gl::RGB8UI,
        RGB16I = gl::RGB16I,
        RGB16UI = gl::RGB16UI,
        RGB32I = gl::RGB32I,
        RGB32UI = gl::RGB32UI,
        RGBA8I = gl::RGBA8I,
        RGBA8UI = gl::RGBA8UI,
        RGBA16I = gl::RGBA16I,
        RGBA16UI = gl::RGBA16UI,
        RGBA32I = gl::RGBA32I,
        RGBA32UI = gl::RGBA32UI,
        DepthComponent16 = gl::DEPTH_COMPONENT16,
        DepthComponent24 = gl::DEPTH_COMPONENT24,
        DepthComponent32 = gl::DEPTH_COMPONENT32,
        DepthComponent32F = gl::DEPTH_COMPONENT32F,
        Depth24Stencil8 = gl::DEPTH24_STENCIL8,
        Depth32FStencil8 = gl::DEPTH32F_STENCIL8,
        StencilIndex8 = gl::STENCIL_INDEX8,
        CompressedRedRGTC1 = gl::COMPRESSED_RED_RGTC1,
        CompressedSignedRedRGTC1 = gl::COMPRESSED_SIGNED_RED_RGTC1,
        CompressedRGRGTC2 = gl::COMPRESSED_RG_RGTC2,
        CompressedSignedRGRGTC2 = gl::COMPRESSED_SIGNED_RG_RGTC2,
        CompressedRGBABPTCUNorm = gl::COMPRESSED_RGBA_BPTC_UNORM,
        CompressedSRGBAlphaBPTCUNorm = gl::COMPRESSED_SRGB_ALPHA_BPTC_UNORM,
        CompressedRGBBPTCSignedFloat = gl::COMPRESSED_RGB_BPTC_SIGNED_FLOAT,
        CompressedRGBBPTCUnsignedFloat = gl::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT,
        CompressedRGB8ETC2 = gl::COMPRESSED_RGB8_ETC2,
        CompressedRGBA8ETC2EAC = gl::COMPRESSED_RGBA8_ETC2_EAC,
    }
}

gl_enum! {
    /// Client-side pixel layouts.
    pub enum PixelFormat {
        Red = gl::RED,
        Green = gl::GREEN,
        Blue = gl::BLUE,
        RG = gl::RG,
        RGB = gl::RGB,
        BGR = gl::BGR,
        RGBA = gl::RGBA,
        BGRA = gl::BGRA,
        RedInteger = gl::RED_INTEGER,
        RGInteger = gl::RG_INTEGER,
        RGBInteger = gl::RGB_INTEGER,
        BGRInteger = gl::BGR_INTEGER,
        RGBAInteger = gl::RGBA_INTEGER,
        BGRAInteger = gl::BGRA_INTEGER,
        DepthComponent = gl::DEPTH_COMPONENT,
        StencilIndex = gl::STENCIL_INDEX,
        DepthStencil = gl::DEPTH_STENCIL,
    }
}

gl_enum! {
    /// Client-side pixel component types.
    pub enum PixelType {
        UnsignedByte = gl::UNSIGNED_BYTE,
        Byte = gl::BYTE,
        UnsignedShort = gl::UNSIGNED_SHORT,
        Short = gl::SHORT,
        UnsignedInt = gl::UNSIGNED_INT,
        Int = gl::INT,
        HalfFloat = gl::HALF_FLOAT,
        Float = gl::FLOAT,
        UnsignedByte332 = gl::UNSIGNED_BYTE_3_3_2,
        UnsignedByte233Rev = gl::UNSIGNED_BYTE_2_3_3_REV,
        UnsignedShort565 = gl::UNSIGNED_SHORT_5_6_5,
        UnsignedShort565Rev = gl::UNSIGNED_SHORT_5_6_5_REV,
        UnsignedShort4444 = gl::UNSIGNED_SHORT_4_4_4_4,
        UnsignedShort4444Rev = gl::UNSIGNED_SHORT_4_4_4_4_REV,
        UnsignedShort5551 = gl::UNSIGNED_SHORT_5_5_5_1,
        UnsignedShort1555Rev = gl::UNSIGNED_SHORT_1_5_5_5_REV,
        UnsignedInt8888 = gl::UNSIGNED_INT_8_8_8_8,
        UnsignedInt8888Rev = gl::UNSIGNED_INT_8_8_8_8_REV,
        UnsignedInt1010102 = gl::UNSIGNED_INT_10_10_10_2,
        UnsignedInt2101010Rev = gl::UNSIGNED_INT_2_10_10_10_REV,
        UnsignedInt248 = gl::UNSIGNED_INT_24_8,
        UnsignedInt10F11F11FRev = gl::UNSIGNED_INT_10F_11F_11F_REV,
        UnsignedInt5999Rev = gl::UNSIGNED_INT_5_9_9_9_REV,
        Float32UnsignedInt248Rev = gl::FLOAT_32_UNSIGNED_INT_24_8_REV,
    }
}

gl_enum! {
    pub enum TextureParameter {
        MinFilter = gl::TEXTURE_MIN_FILTER,
        MagFilter = gl::TEXTURE_MAG_FILTER,
        WrapS = gl::TEXTURE_WRAP_S,
        WrapT = gl::TEXTURE_WRAP_T,
        WrapR = gl::TEXTURE_WRAP_R,
        MinLod = gl::TEXTURE_MIN_LOD,
        MaxLod = gl::TEXTURE_MAX_LOD,
        BaseLevel = gl::TEXTURE_BASE_LEVEL,
        MaxLevel = gl::TEXTURE_MAX_LEVEL,
        LodBias = gl::TEXTURE_LOD_BIAS,
        CompareMode = gl::TEXTURE_COMPARE_MODE,
        CompareFunc = gl::TEXTURE_COMPARE_FUNC,
        BorderColor = gl::TEXTURE_BORDER_COLOR,
        SwizzleR = gl::TEXTURE_SWIZZLE_R,
        SwizzleG = gl::TEXTURE_SWIZZLE_G,
        SwizzleB = gl::TEXTURE_SWIZZLE_B,
        SwizzleA = gl::TEXTURE_SWIZZLE_A,
        SwizzleRGBA = gl::TEXTURE_SWIZZLE_RGBA,
        DepthStencilTextureMode = gl::DEPTH_STENCIL_TEXTURE_MODE,
        MaxAnisotropy = gl::TEXTURE_MAX_ANISOTROPY,
        ImmutableFormat = gl::TEXTURE_IMMUTABLE_FORMAT,
        ImmutableLevels = gl::TEXTURE_IMMUTABLE_LEVELS,
        ViewMinLevel = gl::TEXTURE_VIEW_MIN_LEVEL,
        ViewNumLevels = gl::TEXTURE_VIEW_NUM_LEVELS,
        ViewMinLayer = gl::TEXTURE_VIEW_MIN_LAYER,
        ViewNumLayers = gl::TEXTURE_VIEW_NUM_LAYERS,
        Target = gl::TEXTURE_TARGET,
    }
}

gl_enum! {
    pub enum TextureLevelParameter {
        Width = gl::TEXTURE_WIDTH,
        Height = gl::TEXTURE_HEIGHT,
        Depth = gl::TEXTURE_DEPTH,
        InternalFormat = gl::TEXTURE_INTERNAL_FORMAT,
        RedSize = gl::TEXTURE_RED_SIZE,
        GreenSize = gl::TEXTURE_GREEN_SIZE,
        BlueSize = gl::TEXTURE_BLUE_SIZE,
        AlphaSize = gl::TEXTURE_ALPHA_SIZE,
        DepthSize = gl::TEXTURE_DEPTH_SIZE,
        StencilSize = gl::TEXTURE_STENCIL_SIZE,
        Compressed = gl::TEXTURE_COMPRESSED,
        CompressedImageSize = gl::TEXTURE_COMPRESSED_IMAGE_SIZE,
        Samples = gl::TEXTURE_SAMPLES,
        FixedSampleLocations = gl::TEXTURE_FIXED_SAMPLE_LOCATIONS,
    }
}

gl_enum! {
    pub enum TextureFilter {
        Nearest = gl::NEAREST,
        Linear = gl::LINEAR,
        NearestMipmapNearest = gl::NEAREST_MIPMAP_NEAREST,
        LinearMipmapNearest = gl::LINEAR_MIPMAP_NEAREST,
        NearestMipmapLinear = gl::NEAREST_MIPMAP_LINEAR,
        LinearMipmapLinear = gl::LINEAR_MIPMAP_LINEAR,
    }
}

gl_enum! {
    pub enum TextureWrap {
        Repeat = gl::REPEAT,
        MirroredRepeat = gl::MIRRORED_REPEAT,
        ClampToEdge = gl::CLAMP_TO_EDGE,
        ClampToBorder = gl::CLAMP_TO_BORDER,
        MirrorClampToEdge = gl::MIRROR_CLAMP_TO_EDGE,
    }
}

gl_enum! {
    pub enum StringName {
        Vendor = gl::VENDOR,
        Renderer = gl::RENDERER,
        Version = gl::VERSION,
        ShadingLanguageVersion = gl::SHADING_LANGUAGE_VERSION,
        Extensions = gl::EXTENSIONS,
    }
}

gl_enum! {
    pub enum PixelStoreParameter {
        PackSwapBytes = gl::PACK_SWAP_BYTES,
        PackLsbFirst = gl::PACK_LSB_FIRST,
        PackRowLength = gl::PACK_ROW_LENGTH,
        PackImageHeight = gl::PACK_IMAGE_HEIGHT,
        PackSkipRows = gl::PACK_SKIP_ROWS,
        PackSkipPixels = gl::PACK_SKIP_PIXELS,
        PackSkipImages = gl::PACK_SKIP_IMAGES,
        PackAlignment = gl::PACK_ALIGNMENT,
        UnpackSwapBytes = gl::UNPACK_SWAP_BYTES,
        UnpackLsbFirst = gl::UNPACK_LSB_FIRST,
        UnpackRowLength = gl::UNPACK_ROW_LENGTH,
        UnpackImageHeight = gl::UNPACK_IMAGE_HEIGHT,
        UnpackSkipRows = gl::UNPACK_SKIP_ROWS,
        UnpackSkipPixels = gl::UNPACK_SKIP_PIXELS,
        UnpackSkipImages = gl::UNPACK_SKIP_IMAGES,
        UnpackAlignment = gl::UNPACK_ALIGNMENT,
    }
}

gl_enum! {
    /// Color buffers selected for drawing or reading.
    pub enum DrawBufferMode {
        None = gl::NONE,
        FrontLeft = gl::FRONT_LEFT,
        FrontRight = gl::FRONT_RIGHT,
        BackLeft = gl::BACK_LEFT,
        BackRight = gl::BACK_RIGHT,
        Front = gl::FRONT,
        Back = gl::BACK,
        Left = gl::LEFT,
        Right = gl::RIGHT,
        FrontAndBack = gl::FRONT_AND_BACK,
        ColorAttachment0 = gl::COLOR_ATTACHMENT0,
        ColorAttachment1 = gl::COLOR_ATTACHMENT1,
        ColorAttachment2 = gl::COLOR_ATTACHMENT2,
        ColorAttachment3 = gl::COLOR_ATTACHMENT3,
        ColorAttachment4 = gl::COLOR_ATTACHMENT4,
        ColorAttachment5 = gl::COLOR_ATTACHMENT5,
        ColorAttachment6 = gl::COLOR_ATTACHMENT6,
        ColorAttachment7 = gl::COLOR_ATTACHMENT7,
    }
}

gl_enum! {
    pub enum ShaderType {
        Vertex = gl::VERTEX_SHADER,
        TessControl = gl::TESS_CONTROL_SHADER,
        TessEvaluation = gl::TESS_EVALUATION_SHADER,
        Geometry = gl::GEOMETRY_SHADER,
        Fragment = gl::FRAGMENT_SHADER,
        Compute = gl::COMPUTE_SHADER,
    }
}

gl_enum! {
    pub enum BufferTarget {
        Array = gl::ARRAY_BUFFER,
        AtomicCounter = gl::ATOMIC_COUNTER_BUFFER,
        CopyRead = gl::COPY_READ_BUFFER,
        CopyWrite = gl::COPY_WRITE_BUFFER,
        DispatchIndirect = gl::DISPATCH_INDIRECT_BUFFER,
        DrawIndirect = gl::DRAW_INDIRECT_BUFFER,
        ElementArray = gl::ELEMENT_ARRAY_BUFFER,
        ParameterBuffer = gl::PARAMETER_BUFFER,
        PixelPack = gl::PIXEL_PACK_BUFFER,
        PixelUnpack = gl::PIXEL_UNPACK_BUFFER,
        Query = gl::QUERY_BUFFER,
        ShaderStorage = gl::SHADER_STORAGE_BUFFER,
        Texture = gl::TEXTURE_BUFFER,
        TransformFeedback = gl::TRANSFORM_FEEDBACK_BUFFER,
        Uniform = gl::UNIFORM_BUFFER,
    }
}

gl_enum! {
    /// Buffer targets with indexed binding points.
    pub enum IndexedBufferTarget {
        AtomicCounter = gl::ATOMIC_COUNTER_BUFFER,
        ShaderStorage = gl::SHADER_STORAGE_BUFFER,
        TransformFeedback = gl::TRANSFORM_FEEDBACK_BUFFER,
        Uniform = gl::UNIFORM_BUFFER,
    }
}

gl_enum! {
    pub enum BufferUsage {
        StreamDraw = gl::STREAM_DRAW,
        StreamRead = gl::STREAM_READ,
        StreamCopy = gl::STREAM_COPY,
        StaticDraw = gl::STATIC_DRAW,
        StaticRead = gl::STATIC_READ,
        StaticCopy = gl::STATIC_COPY,
        DynamicDraw = gl::DYNAMIC_DRAW,
        DynamicRead = gl::DYNAMIC_READ,
        DynamicCopy = gl::DYNAMIC_COPY,
    }
}

gl_enum! {
    pub enum BufferAccess {
        ReadOnly = gl::READ_ONLY,
        WriteOnly = gl::WRITE_ONLY,
        ReadWrite = gl::READ_WRITE,
    }
}

gl_enum! {
    pub enum BufferParameter {
        Size = gl::BUFFER_SIZE,
        Usage = gl::BUFFER_USAGE,
        Access = gl::BUFFER_ACCESS,
        AccessFlags = gl::BUFFER_ACCESS_FLAGS,
        Mapped = gl::BUFFER_MAPPED,
        MapLength = gl::BUFFER_MAP_LENGTH,
        MapOffset = gl::BUFFER_MAP_OFFSET,
        ImmutableStorage = gl::BUFFER_IMMUTABLE_STORAGE,
        StorageFlags = gl::BUFFER_STORAGE_FLAGS,
    }
}

gl_enum! {
    pub enum QueryTarget {
        SamplesPassed = gl::SAMPLES_PASSED,
        AnySamplesPassed = gl::ANY_SAMPLES_PASSED,
        AnySamplesPassedConservative = gl::ANY_SAMPLES_PASSED_CONSERVATIVE,
        PrimitivesGenerated = gl::PRIMITIVES_GENERATED,
        TransformFeedbackPrimitivesWritten = gl::TRANSFORM_FEEDBACK_PRIMITIVES_WRITTEN,
        TimeElapsed = gl::TIME_ELAPSED,
        Timestamp = gl::TIMESTAMP,
    }
}

gl_enum! {
    pub enum QueryObjectParameter {
        Result = gl::QUERY_RESULT,
        ResultAvailable = gl::QUERY_RESULT_AVAILABLE,
        ResultNoWait = gl::QUERY_RESULT_NO_WAIT,
        Target = gl::QUERY_TARGET,
    }
}

gl_enum! {
    pub enum VertexAttribType {
        Byte = gl::BYTE,
        UnsignedByte = gl::UNSIGNED_BYTE,
        Short = gl::SHORT,
        UnsignedShort = gl::UNSIGNED_SHORT,
        Int = gl::INT,
        UnsignedInt = gl::UNSIGNED_INT,
        HalfFloat = gl::HALF_FLOAT,
        Float = gl::FLOAT,
        Double = gl::DOUBLE,
        Fixed = gl::FIXED,
        Int2101010Rev = gl::INT_2_10_10_10_REV,
        UnsignedInt2101010Rev = gl::UNSIGNED_INT_2_10_10_10_REV,
        UnsignedInt10F11F11FRev = gl::UNSIGNED_INT_10F_11F_11F_REV,
    }
}

gl_enum! {
    pub enum FramebufferTarget {
        Framebuffer = gl::FRAMEBUFFER,
        Draw = gl::DRAW_FRAMEBUFFER,
        Read = gl::READ_FRAMEBUFFER,
    }
}

gl_enum! {
    pub enum FramebufferAttachment {
        Color0 = gl::COLOR_ATTACHMENT0,
        Color1 = gl::COLOR_ATTACHMENT1,
        Color2 = gl::COLOR_ATTACHMENT2,
        Color3 = gl::COLOR_ATTACHMENT3,
        Color4 = gl::COLOR_ATTACHMENT4,
        Color5 = gl::COLOR_ATTACHMENT5,
        Color6 = gl::COLOR_ATTACHMENT6,
        Color7 = gl::COLOR_ATTACHMENT7,
        Color8 = gl::COLOR_ATTACHMENT8,
        Color9 = gl::COLOR_ATTACHMENT9,
        Color10 = gl::COLOR_ATTACHMENT10,
        Color11 = gl::COLOR_ATTACHMENT11,
        Color12 = gl::COLOR_ATTACHMENT12,
        Color13 = gl::COLOR_ATTACHMENT13,
        Color14 = gl::COLOR_ATTACHMENT14,
        Color15 = gl::COLOR_ATTACHMENT15,
        Depth = gl::DEPTH_ATTACHMENT,
        Stencil = gl::STENCIL_ATTACHMENT,
        DepthStencil = gl::DEPTH_STENCIL_ATTACHMENT,
    }
}

gl_enum! {
    pub enum FramebufferStatus {
        Complete = gl::FRAMEBUFFER_COMPLETE,
        Undefined = gl::FRAMEBUFFER_UNDEFINED,
        IncompleteAttachment = gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
        IncompleteMissingAttachment = gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
        IncompleteDrawBuffer = gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER,
        IncompleteReadBuffer = gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER,
        Unsupported = gl::FRAMEBUFFER_UNSUPPORTED,
        IncompleteMultisample = gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE,
        IncompleteLayerTargets = gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS,
    }
}

gl_enum! {
    /// Filters for `glBlitFramebuffer`.
    pub enum BlitFilter {
        Nearest = gl::NEAREST,
        Linear = gl::LINEAR,
    }
}

gl_enum! {
    /// Buffers cleared by `glClearBuffer*`.
    pub enum ClearBuffer {
        Color = gl::COLOR,
        Depth = gl::DEPTH,
        Stencil = gl::STENCIL,
        DepthStencil = gl::DEPTH_STENCIL,
    }
}

gl_enum! {
    pub enum TransformFeedbackPrimitive {
        Points = gl::POINTS,
        Lines = gl::LINES,
        Triangles = gl::TRIANGLES,
    }
}

gl_enum! {
    /// Object namespaces for labels and resource queries.
    pub enum ObjectIdentifier {
        Buffer = gl::BUFFER,
        Shader = gl::SHADER,
        Program = gl::PROGRAM,
        VertexArray = gl::VERTEX_ARRAY,
        Query = gl::QUERY,
        ProgramPipeline = gl::PROGRAM_PIPELINE,
        TransformFeedback = gl::TRANSFORM_FEEDBACK,
        Sampler = gl::SAMPLER,
        Texture = gl::TEXTURE,
        Renderbuffer = gl::RENDERBUFFER,
        Framebuffer = gl::FRAMEBUFFER,
    }
}

bitflags! {
    /// Buffers cleared by `glClear`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BufferMask: GLbitfield {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

bitflags! {
    /// Access flags for `glMapBufferRange`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MapAccess: GLbitfield {
        const READ = gl::MAP_READ_BIT;
        const WRITE = gl::MAP_WRITE_BIT;
        const INVALIDATE_RANGE = gl::MAP_INVALIDATE_RANGE_BIT;
        const INVALIDATE_BUFFER = gl::MAP_INVALIDATE_BUFFER_BIT;
        const FLUSH_EXPLICIT = gl::MAP_FLUSH_EXPLICIT_BIT;
        const UNSYNCHRONIZED = gl::MAP_UNSYNCHRONIZED_BIT;
        const PERSISTENT = gl::MAP_PERSISTENT_BIT;
        const COHERENT = gl::MAP_COHERENT_BIT;
    }
}

bitflags! {
    /// Flags for `glBufferStorage`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BufferStorageFlags: GLbitfield {
        const MAP_READ = gl::MAP_READ_BIT;
        const MAP_WRITE = gl::MAP_WRITE_BIT;
        const MAP_PERSISTENT = gl::MAP_PERSISTENT_BIT;
        const MAP_COHERENT = gl::MAP_COHERENT_BIT;
        const DYNAMIC_STORAGE = gl::DYNAMIC_STORAGE_BIT;
        const CLIENT_STORAGE = gl::CLIENT_STORAGE_BIT;
    }
}

bitflags! {
    /// Barriers for `glMemoryBarrier`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MemoryBarrier: GLbitfield {
        const VERTEX_ATTRIB_ARRAY = gl::VERTEX_ATTRIB_ARRAY_BARRIER_BIT;
        const ELEMENT_ARRAY = gl::ELEMENT_ARRAY_BARRIER_BIT;
        const UNIFORM = gl::UNIFORM_BARRIER_BIT;
        const TEXTURE_FETCH = gl::TEXTURE_FETCH_BARRIER_BIT;
        const SHADER_IMAGE_ACCESS = gl::SHADER_IMAGE_ACCESS_BARRIER_BIT;
        const COMMAND = gl::COMMAND_BARRIER_BIT;
        const PIXEL_BUFFER = gl::PIXEL_BUFFER_BARRIER_BIT;
        const TEXTURE_UPDATE = gl::TEXTURE_UPDATE_BARRIER_BIT;
        const BUFFER_UPDATE = gl::BUFFER_UPDATE_BARRIER_BIT;
        const FRAMEBUFFER = gl::FRAMEBUFFER_BARRIER_BIT;
        const TRANSFORM_FEEDBACK = gl::TRANSFORM_FEEDBACK_BARRIER_BIT;
        const ATOMIC_COUNTER = gl::ATOMIC_COUNTER_BARRIER_BIT;
        const SHADER_STORAGE = gl::SHADER_STORAGE_BARRIER_BIT;
        const CLIENT_MAPPED_BUFFER = gl::CLIENT_MAPPED_BUFFER_BARRIER_BIT;
        const QUERY_BUFFER = gl::QUERY_BUFFER_BARRIER_BIT;
    }
}

impl MemoryBarrier {
    /// `GL_ALL_BARRIER_BITS`, which also covers bits added by later versions.
    pub const ALL_BARRIER_BITS: MemoryBarrier = MemoryBarrier::from_bits_retain(gl::ALL_BARRIER_BITS);
}

bitflags! {
    /// Shader stages for program pipelines.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ProgramStages: GLbitfield {
        const VERTEX = gl::VERTEX_SHADER_BIT;
        const TESS_CONTROL = gl::TESS_CONTROL_SHADER_BIT;
        const TESS_EVALUATION = gl::TESS_EVALUATION_SHADER_BIT;
        const GEOMETRY = gl::GEOMETRY_SHADER_BIT;
        const FRAGMENT = gl::FRAGMENT_SHADER_BIT;
        const COMPUTE = gl::COMPUTE_SHADER_BIT;
    }
}

impl ProgramStages {
    pub const ALL_SHADER_BITS: ProgramStages = ProgramStages::from_bits_retain(gl::ALL_SHADER_BITS);
}

bitflags! {
    /// Flags for `glClientWaitSync`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SyncFlags: GLbitfield {
        const FLUSH_COMMANDS = gl::SYNC_FLUSH_COMMANDS_BIT;
    }
}

bitflags! {
    /// The value of `GL_CONTEXT_FLAGS`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ContextFlags: GLbitfield {
        const FORWARD_COMPATIBLE = gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT;
        const DEBUG = gl::CONTEXT_FLAG_DEBUG_BIT;
        const ROBUST_ACCESS = gl::CONTEXT_FLAG_ROBUST_ACCESS_BIT;
        const NO_ERROR = gl::CONTEXT_FLAG_NO_ERROR_BIT;
    }
}
