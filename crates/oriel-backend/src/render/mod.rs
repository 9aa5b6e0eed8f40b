//! Draw-data translation.
//!
//! Walks the UI layer's per-frame draw lists and turns them into
//! fixed-function GPU commands: one scissor + one non-indexed triangle
//! batch per visible command, with vertices re-indexed into the hardware
//! layout on the way through. The interesting invariants live in the
//! per-command state machine: a command may run a callback, be clipped
//! out, or emit geometry, but its index range is consumed in all three
//! cases so list iteration stays stable.

mod scissor;
mod translator;

pub use translator::DrawTranslator;
