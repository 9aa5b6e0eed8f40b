use std::collections::VecDeque;

use bitflags::bitflags;

bitflags! {
    /// Button word as the controller reports it.
    ///
    /// Bit values match the hardware report word. Face buttons are named by
    /// position (NORTH/EAST/SOUTH/WEST) so the key mapping stays readable
    /// without hardcoding glyph names.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
    pub struct PadButtons: u32 {
        const SELECT    = 0x0001;
        const START     = 0x0008;
        const UP        = 0x0010;
        const RIGHT     = 0x0020;
        const DOWN      = 0x0040;
        const LEFT      = 0x0080;
        const TRIGGER_L = 0x0100;
        const TRIGGER_R = 0x0200;
        const NORTH     = 0x1000;
        const EAST      = 0x2000;
        const SOUTH     = 0x4000;
        const WEST      = 0x8000;
    }
}

/// One raw controller reading.
///
/// Axes are unsigned 0..=255 with the stick at rest reporting the center
/// value. The platform layer is expected to have analog sampling enabled
/// before the first read.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PadSample {
    pub axis_x: u8,
    pub axis_y: u8,
    pub buttons: PadButtons,
}

impl PadSample {
    /// Axis value reported by a stick at rest.
    pub const AXIS_CENTER: u8 = 128;

    /// Neutral stick, no buttons held.
    pub const fn centered() -> Self {
        Self {
            axis_x: Self::AXIS_CENTER,
            axis_y: Self::AXIS_CENTER,
            buttons: PadButtons::empty(),
        }
    }
}

impl Default for PadSample {
    fn default() -> Self {
        Self::centered()
    }
}

/// Polled pad provider. Read exactly once per frame.
pub trait PadSource {
    fn sample(&mut self) -> PadSample;
}

/// Pad source replaying a scripted sample sequence.
///
/// Once the queue drains it keeps returning the last sample, which makes
/// "hold this stick position for n frames" tests trivial. Starts centered.
#[derive(Debug)]
pub struct ScriptedPad {
    queue: VecDeque<PadSample>,
    held: PadSample,
}

impl ScriptedPad {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            held: PadSample::centered(),
        }
    }

    pub fn push(&mut self, sample: PadSample) {
        self.queue.push_back(sample);
    }
}

impl Default for ScriptedPad {
    fn default() -> Self {
        Self::new()
    }
}

impl PadSource for ScriptedPad {
    fn sample(&mut self) -> PadSample {
        if let Some(next) = self.queue.pop_front() {
            self.held = next;
        }
        self.held
    }
}
