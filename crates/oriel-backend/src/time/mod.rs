//! Frame timing.
//!
//! The UI layer wants one delta-time value per frame. The platform gives us a
//! monotonic tick counter plus its resolution; `FrameClock` turns consecutive
//! readings into seconds, substituting a fixed 60 Hz fallback on the first
//! frame and on clock anomalies so downstream animation code never sees a
//! zero or negative step.

mod frame_clock;
mod source;

pub use frame_clock::{FrameClock, FrameTime};
pub use source::{ManualTicks, MonotonicClock, TickSource};
