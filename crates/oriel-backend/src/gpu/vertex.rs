use bytemuck::{Pod, Zeroable};

/// Hardware vertex layout (24 bytes), in fetch order:
///
///  offset  0  u      f32   texture coordinate, texel units
///  offset  4  v      f32   texture coordinate, texel units
///  offset  8  color  u32   packed RGBA8, R in the low byte
///  offset 12  x      f32   screen pixels
///  offset 16  y      f32   screen pixels
///  offset 20  z      f32   always 0; the pipeline is 2D
///
/// The fixed-function vertex fetch reads texture coordinates, then color,
/// then position. Field order here is the wire format; do not reorder.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub u: f32,
    pub v: f32,
    pub color: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
