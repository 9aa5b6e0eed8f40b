use crate::coords::{Rect, Vec2};
use crate::gpu::TextureId;

use super::vertex::{DrawIdx, DrawVert};

/// Hook invoked in place of drawing a command.
///
/// The UI layer uses these to splice host rendering into the middle of a
/// frame. The command still consumes its index range.
pub type DrawCallback = fn(&DrawList, &DrawCmd);

/// One draw command: a contiguous run of indices sharing one clip
/// rectangle and texture.
///
/// Commands do not store their start offset; they are consumed in order
/// with a running cursor over the owning list's index array.
#[derive(Debug, Copy, Clone)]
pub struct DrawCmd {
    /// Clip rectangle in screen pixels, pre framebuffer scale.
    pub clip_rect: Rect,

    /// Number of indices this command consumes from the shared array.
    pub elem_count: usize,

    /// Texture the UI layer believes is bound, echoed from the id handed
    /// out at atlas install.
    pub texture: Option<TextureId>,

    /// When set the command emits no geometry and the hook runs instead.
    pub callback: Option<DrawCallback>,
}

/// One draw list: shared vertex/index arrays plus the commands slicing
/// into them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vertices: Vec<DrawVert>,
    pub indices: Vec<DrawIdx>,
    pub commands: Vec<DrawCmd>,
}

/// Everything the UI layer emits for one frame.
#[derive(Debug, Clone)]
pub struct DrawData {
    /// Lists in submission order.
    pub lists: Vec<DrawList>,

    /// Top-left of the UI coordinate space in screen pixels.
    pub display_pos: Vec2,

    /// UI-to-framebuffer scale applied to positions (not UVs).
    pub framebuffer_scale: Vec2,
}

impl DrawData {
    /// Total vertices across all lists. Zero means nothing to draw.
    pub fn total_vertex_count(&self) -> usize {
        self.lists.iter().map(|l| l.vertices.len()).sum()
    }
}

impl Default for DrawData {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            display_pos: Vec2::zero(),
            framebuffer_scale: Vec2::splat(1.0),
        }
    }
}
