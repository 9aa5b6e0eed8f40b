use crate::coords::{Rect, Viewport};
use crate::gpu::ScissorRect;

/// Intersects a clip rectangle with the screen and converts it to integer
/// scissor arguments.
///
/// Corner coordinates are truncated toward zero, then the min corner is
/// clamped to 0 and the max corner to the screen extent. Returns `None`
/// when nothing survives; the hardware scissor must never be programmed
/// with a degenerate rectangle.
pub(crate) fn clip_to_scissor(clip: Rect, screen: Viewport) -> Option<ScissorRect> {
    if clip.is_empty() {
        return None;
    }

    let x0 = (clip.min().x as i32).max(0);
    let y0 = (clip.min().y as i32).max(0);
    let x1 = (clip.max().x as i32).min(screen.width as i32);
    let y1 = (clip.max().y as i32).min(screen.height as i32);

    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(ScissorRect {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0) as u32,
        height: (y1 - y0) as u32,
    })
}
