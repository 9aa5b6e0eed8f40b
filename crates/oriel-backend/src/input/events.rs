use crate::coords::Vec2;

/// Gamepad keys forwarded to the UI layer.
///
/// Face buttons are identified by position; the UI layer decides what they
/// mean (activate, cancel, navigation).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GamepadKey {
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    FaceDown,
    FaceRight,
    FaceLeft,
    FaceUp,
}

/// Input events the backend emits toward the UI layer.
///
/// All of these are level-reported: the sampler restates the full pointer
/// and button state every frame rather than emitting transitions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UiEvent {
    /// Absolute pointer position after integration and clamping.
    PointerMoved { pos: Vec2 },

    /// Primary (activate) button state.
    PointerButton { down: bool },

    Key { key: GamepadKey, down: bool },
}

/// Per-frame event batch.
///
/// Reused across frames; clearing keeps the allocation.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Events in emission order.
    pub events: Vec<UiEvent>,
}

impl InputFrame {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, ev: UiEvent) {
        self.events.push(ev);
    }
}
