//! Coordinate and geometry types shared across the backend.
//!
//! Canonical space:
//! - Screen pixels on the fixed display (default 480x272)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The GPU consumes these coordinates directly under its 2D transform;
//! there is no NDC conversion anywhere in this crate.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
