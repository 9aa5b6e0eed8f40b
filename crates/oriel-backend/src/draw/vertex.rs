use bytemuck::{Pod, Zeroable};

/// Index into a draw list's vertex array.
pub type DrawIdx = u16;

/// UI vertex layout (20 bytes):
///
///  offset  0  pos    [f32; 2]   screen pixels, pre framebuffer scale
///  offset  8  uv     [f32; 2]   normalized 0..=1 atlas coordinates
///  offset 16  color  u32        packed RGBA8, R in the low byte
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_ui_wire_format() {
        assert_eq!(std::mem::size_of::<DrawVert>(), 20);
        assert_eq!(std::mem::align_of::<DrawVert>(), 4);
    }
}
