use bytemuck::Zeroable;

use super::Gpu;
use super::state::{PipelineState, ScissorRect};
use super::texture::{TextureBinding, TextureId};
use super::vertex::GpuVertex;

/// One recorded command-stream call.
///
/// Texture texels are summarized by length; the recorder does not copy
/// them.
#[derive(Debug, Clone, PartialEq)]
pub enum GpuCall {
    SetPipelineState(PipelineState),
    BindTexture {
        id: TextureId,
        width: u32,
        height: u32,
        stride: u32,
        texel_bytes: usize,
    },
    SetScissor(ScissorRect),
    DrawTriangles(Vec<GpuVertex>),
}

/// Headless [`Gpu`] that records every call for inspection.
///
/// An optional scratch budget models the per-frame vertex arena: once the
/// budget is spent, `begin_triangles` returns `None` like a real arena that
/// ran dry. Reservations come back zero-filled, so untouched slots are
/// assertable. Pairing violations of begin/submit panic; they are caller
/// bugs, not recordable outcomes.
#[derive(Debug, Default)]
pub struct RecordingGpu {
    pub calls: Vec<GpuCall>,
    scratch_remaining: Option<usize>,
    pending: Option<Vec<GpuVertex>>,
}

impl RecordingGpu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder whose scratch arena serves at most `vertices` vertices.
    pub fn with_scratch_limit(vertices: usize) -> Self {
        Self {
            calls: Vec::new(),
            scratch_remaining: Some(vertices),
            pending: None,
        }
    }

    /// Submitted triangle batches, in submission order.
    pub fn triangle_batches(&self) -> impl Iterator<Item = &[GpuVertex]> {
        self.calls.iter().filter_map(|call| match call {
            GpuCall::DrawTriangles(verts) => Some(verts.as_slice()),
            _ => None,
        })
    }

    /// Scissor rectangles, in programming order.
    pub fn scissors(&self) -> impl Iterator<Item = ScissorRect> + '_ {
        self.calls.iter().filter_map(|call| match call {
            GpuCall::SetScissor(rect) => Some(*rect),
            _ => None,
        })
    }
}

impl Gpu for RecordingGpu {
    fn set_pipeline_state(&mut self, state: &PipelineState) {
        self.calls.push(GpuCall::SetPipelineState(*state));
    }

    fn bind_texture(&mut self, binding: TextureBinding<'_>) {
        self.calls.push(GpuCall::BindTexture {
            id: binding.id,
            width: binding.width,
            height: binding.height,
            stride: binding.stride,
            texel_bytes: binding.texels.len(),
        });
    }

    fn set_scissor(&mut self, rect: ScissorRect) {
        self.calls.push(GpuCall::SetScissor(rect));
    }

    fn begin_triangles(&mut self, count: usize) -> Option<&mut [GpuVertex]> {
        if self.pending.is_some() {
            panic!("begin_triangles while a reservation is open");
        }
        if let Some(remaining) = &mut self.scratch_remaining {
            if count > *remaining {
                return None;
            }
            *remaining -= count;
        }
        self.pending = Some(vec![GpuVertex::zeroed(); count]);
        self.pending.as_deref_mut()
    }

    fn submit_triangles(&mut self) {
        let Some(verts) = self.pending.take() else {
            panic!("submit_triangles without a reservation");
        };
        self.calls.push(GpuCall::DrawTriangles(verts));
    }
}
