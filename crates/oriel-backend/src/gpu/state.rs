use crate::coords::Vec2;

/// Blend equation applied when blending is enabled.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendOp {
    Add,
    Subtract,
    ReverseSubtract,
}

/// Blend factor vocabulary of the fixed-function unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
}

/// Framebuffer blend configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Blend {
    pub op: BlendOp,
    pub src: BlendFactor,
    pub dst: BlendFactor,
}

impl Blend {
    /// Standard source-over alpha compositing.
    pub const SOURCE_OVER: Blend = Blend {
        op: BlendOp::Add,
        src: BlendFactor::SrcAlpha,
        dst: BlendFactor::OneMinusSrcAlpha,
    };
}

/// How the texture unit combines sampled texels with vertex color.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TexCombine {
    Modulate,
    Decal,
    Replace,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FilterMode {
    Nearest,
    Bilinear,
}

/// Texture unit configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureStage {
    pub combine: TexCombine,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    /// Applied to incoming UVs before sampling. Identity for this crate:
    /// vertices already carry texel coordinates.
    pub uv_scale: Vec2,
    pub uv_offset: Vec2,
}

impl Default for TextureStage {
    fn default() -> Self {
        Self {
            combine: TexCombine::Modulate,
            min_filter: FilterMode::Bilinear,
            mag_filter: FilterMode::Bilinear,
            uv_scale: Vec2::splat(1.0),
            uv_offset: Vec2::zero(),
        }
    }
}

/// Fixed-function state programmed once per frame, before the command loop.
///
/// The default is the UI compositing state: depth test off but depth writes
/// on, scissor test on, source-over blending, bilinear modulate texturing
/// with an identity UV transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineState {
    pub depth_test: bool,
    pub depth_write: bool,
    pub scissor_test: bool,
    /// `None` disables blending.
    pub blend: Option<Blend>,
    /// `None` disables texturing.
    pub texture: Option<TextureStage>,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            depth_test: false,
            depth_write: true,
            scissor_test: true,
            blend: Some(Blend::SOURCE_OVER),
            texture: Some(TextureStage::default()),
        }
    }
}

/// Scissor rectangle in integer screen pixels. Only ever constructed
/// non-empty; degenerate rectangles are rejected before reaching the GPU.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
