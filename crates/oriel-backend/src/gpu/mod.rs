//! Platform GPU seam.
//!
//! The target is a fixed-function mobile GPU driven through a caller-owned
//! command buffer: state setters, a scissor register, a per-frame scratch
//! arena for vertex memory, and a "draw this triangle list" primitive. This
//! crate never talks to hardware; it drives whatever implements [`Gpu`].
//! `RecordingGpu` is the shipped headless implementation used by tests and
//! host smoke checks.

mod recording;
mod state;
mod texture;
mod vertex;

pub use recording::{GpuCall, RecordingGpu};
pub use state::{
    Blend,
    BlendFactor,
    BlendOp,
    FilterMode,
    PipelineState,
    ScissorRect,
    TexCombine,
    TextureStage,
};
pub use texture::{TextureBinding, TextureId};
pub use vertex::GpuVertex;

/// Fixed-function GPU command stream, as the external frame loop exposes it.
///
/// Calls append to the caller's current command buffer; nothing here blocks
/// or syncs. Vertex memory comes from a per-frame scratch arena owned by the
/// implementation: `begin_triangles` reserves a slice, the caller fills it,
/// `submit_triangles` consumes the reservation as a non-indexed triangle
/// list in the [`GpuVertex`] wire layout under the 2D orthographic
/// transform. The slice is only valid until the matching submit; a `None`
/// reservation means the arena is exhausted for this frame.
pub trait Gpu {
    fn set_pipeline_state(&mut self, state: &PipelineState);

    fn bind_texture(&mut self, binding: TextureBinding<'_>);

    fn set_scissor(&mut self, rect: ScissorRect);

    /// Reserves `count` vertices of per-frame scratch. Contents are
    /// unspecified until written; `None` means the arena cannot serve the
    /// request.
    fn begin_triangles(&mut self, count: usize) -> Option<&mut [GpuVertex]>;

    /// Draws the most recent reservation. Must follow a successful
    /// `begin_triangles` with no other reservation in between.
    fn submit_triangles(&mut self);
}
