//! Input subsystem.
//!
//! The platform hands us one raw pad sample per frame (two analog axes, a
//! button word). `PadSampler` turns that into what the UI layer actually
//! consumes: a synthesized pointer driven by the analog stick, one primary
//! button, and the d-pad/face buttons as keys. Events are level-reported;
//! the UI layer owns any press/release edge detection it needs.

mod events;
mod pad;
mod sampler;

pub use events::{GamepadKey, InputFrame, UiEvent};
pub use pad::{PadButtons, PadSample, PadSource, ScriptedPad};
pub use sampler::{PadSampler, PointerConfig};
