use crate::coords::{Vec2, Viewport};

use super::events::{GamepadKey, InputFrame, UiEvent};
use super::pad::{PadButtons, PadSample};

/// Analog stick half-range in raw axis units.
const AXIS_RANGE: f32 = 128.0;

/// Button-to-key mapping, in emission order. Hosts and tests rely on the
/// order being stable.
const KEY_MAP: [(PadButtons, GamepadKey); 8] = [
    (PadButtons::UP, GamepadKey::DpadUp),
    (PadButtons::DOWN, GamepadKey::DpadDown),
    (PadButtons::LEFT, GamepadKey::DpadLeft),
    (PadButtons::RIGHT, GamepadKey::DpadRight),
    (PadButtons::SOUTH, GamepadKey::FaceDown),
    (PadButtons::EAST, GamepadKey::FaceRight),
    (PadButtons::WEST, GamepadKey::FaceLeft),
    (PadButtons::NORTH, GamepadKey::FaceUp),
];

/// Pointer synthesis tuning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerConfig {
    /// Raw axis units below which an axis contributes no motion.
    pub deadzone: f32,

    /// Velocity scale: a fully deflected axis moves about this many pixels
    /// per frame.
    pub speed: f32,

    /// Button bits reported as the pointer's primary click. Any set bit
    /// held on the pad counts as down.
    pub primary_button: PadButtons,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            deadzone: 20.0,
            speed: 5.0,
            primary_button: PadButtons::SOUTH,
        }
    }
}

/// Turns raw pad samples into the per-frame UI event batch.
///
/// Owns the synthesized pointer position, the only input state that
/// persists across frames. The pointer spawns at the display center and
/// stays inside `[0, w-1] x [0, h-1]`.
#[derive(Debug)]
pub struct PadSampler {
    display: Viewport,
    config: PointerConfig,
    pos: Vec2,
}

impl PadSampler {
    pub fn new(display: Viewport, config: PointerConfig) -> Self {
        Self {
            display,
            config,
            pos: display.center(),
        }
    }

    /// Current pointer position.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pos
    }

    /// Integrates one pad reading and emits this frame's events.
    ///
    /// Emission order: `PointerMoved`, `PointerButton`, then the eight keys
    /// in `KEY_MAP` order. Everything is level-reported each frame; motion
    /// is intentionally frame-rate dependent to match the feel of the
    /// hardware UI this mirrors.
    pub fn sample(&mut self, pad: &PadSample, frame: &mut InputFrame) {
        frame.clear();

        let delta = Vec2::new(self.axis_delta(pad.axis_x), self.axis_delta(pad.axis_y));
        self.pos = self.pos + delta * (self.config.speed / AXIS_RANGE);
        self.pos.x = self.pos.x.clamp(0.0, (self.display.width - 1.0).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (self.display.height - 1.0).max(0.0));

        frame.push(UiEvent::PointerMoved { pos: self.pos });
        frame.push(UiEvent::PointerButton {
            down: pad.buttons.intersects(self.config.primary_button),
        });
        for (bit, key) in KEY_MAP {
            frame.push(UiEvent::Key {
                key,
                down: pad.buttons.contains(bit),
            });
        }
    }

    /// Centered delta for one axis, zeroed inside the deadzone.
    fn axis_delta(&self, raw: u8) -> f32 {
        let d = f32::from(raw) - f32::from(PadSample::AXIS_CENTER);
        if d.abs() < self.config.deadzone { 0.0 } else { d }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler() -> PadSampler {
        PadSampler::new(Viewport::new(480.0, 272.0), PointerConfig::default())
    }

    fn stick(x: u8, y: u8) -> PadSample {
        PadSample {
            axis_x: x,
            axis_y: y,
            buttons: PadButtons::empty(),
        }
    }

    // ── pointer motion ────────────────────────────────────────────────────

    #[test]
    fn pointer_spawns_at_display_center() {
        assert_eq!(sampler().pointer(), Vec2::new(240.0, 136.0));
    }

    #[test]
    fn sub_deadzone_deflection_does_not_move() {
        let mut s = sampler();
        let mut frame = InputFrame::new();

        s.sample(&stick(147, 109), &mut frame);

        assert_eq!(s.pointer(), Vec2::new(240.0, 136.0));
        assert_eq!(frame.events[0], UiEvent::PointerMoved { pos: s.pointer() });
    }

    #[test]
    fn deadzone_applies_per_axis() {
        let mut s = sampler();
        let mut frame = InputFrame::new();

        // X fully deflected, Y inside the deadzone.
        s.sample(&stick(255, 130), &mut frame);

        assert_eq!(s.pointer().y, 136.0);
        assert!(s.pointer().x > 240.0);
    }

    #[test]
    fn full_deflection_moves_speed_scaled_delta() {
        let mut s = sampler();
        let mut frame = InputFrame::new();

        s.sample(&stick(255, 255), &mut frame);

        // 127 * 5 / 128 from the center.
        assert_eq!(s.pointer(), Vec2::new(244.9609375, 140.9609375));
    }

    #[test]
    fn deadzone_boundary_moves() {
        let mut s = sampler();
        let mut frame = InputFrame::new();

        s.sample(&stick(148, 128), &mut frame);

        assert_eq!(s.pointer().x, 240.0 + 20.0 * 5.0 / 128.0);
    }

    #[test]
    fn pointer_clamps_to_display_bounds() {
        let mut s = sampler();
        let mut frame = InputFrame::new();

        for _ in 0..200 {
            s.sample(&stick(255, 0), &mut frame);
            let p = s.pointer();
            assert!(p.x <= 479.0 && p.y >= 0.0);
        }

        assert_eq!(s.pointer(), Vec2::new(479.0, 0.0));
    }

    // ── event emission ────────────────────────────────────────────────────

    #[test]
    fn emits_full_batch_in_stable_order() {
        let mut s = sampler();
        let mut frame = InputFrame::new();

        let pad = PadSample {
            axis_x: 128,
            axis_y: 128,
            buttons: PadButtons::UP | PadButtons::SOUTH,
        };
        s.sample(&pad, &mut frame);

        let expected = vec![
            UiEvent::PointerMoved { pos: Vec2::new(240.0, 136.0) },
            UiEvent::PointerButton { down: true },
            UiEvent::Key { key: GamepadKey::DpadUp, down: true },
            UiEvent::Key { key: GamepadKey::DpadDown, down: false },
            UiEvent::Key { key: GamepadKey::DpadLeft, down: false },
            UiEvent::Key { key: GamepadKey::DpadRight, down: false },
            UiEvent::Key { key: GamepadKey::FaceDown, down: true },
            UiEvent::Key { key: GamepadKey::FaceRight, down: false },
            UiEvent::Key { key: GamepadKey::FaceLeft, down: false },
            UiEvent::Key { key: GamepadKey::FaceUp, down: false },
        ];
        assert_eq!(frame.events, expected);
    }

    #[test]
    fn held_buttons_are_reported_every_frame() {
        let mut s = sampler();
        let mut frame = InputFrame::new();
        let pad = PadSample {
            axis_x: 128,
            axis_y: 128,
            buttons: PadButtons::SOUTH,
        };

        for _ in 0..3 {
            s.sample(&pad, &mut frame);
            assert!(frame.events.contains(&UiEvent::Key {
                key: GamepadKey::FaceDown,
                down: true,
            }));
            assert!(frame.events.contains(&UiEvent::PointerButton { down: true }));
        }
    }

    #[test]
    fn sample_clears_stale_events() {
        let mut s = sampler();
        let mut frame = InputFrame::new();
        frame.push(UiEvent::PointerButton { down: true });

        s.sample(&stick(128, 128), &mut frame);

        assert_eq!(frame.events.len(), 10);
        assert_eq!(frame.events[1], UiEvent::PointerButton { down: false });
    }

    #[test]
    fn primary_button_is_configurable() {
        let config = PointerConfig {
            primary_button: PadButtons::TRIGGER_R,
            ..PointerConfig::default()
        };
        let mut s = PadSampler::new(Viewport::new(480.0, 272.0), config);
        let mut frame = InputFrame::new();

        let pad = PadSample {
            axis_x: 128,
            axis_y: 128,
            buttons: PadButtons::SOUTH,
        };
        s.sample(&pad, &mut frame);
        assert_eq!(frame.events[1], UiEvent::PointerButton { down: false });

        let pad = PadSample {
            axis_x: 128,
            axis_y: 128,
            buttons: PadButtons::TRIGGER_R,
        };
        s.sample(&pad, &mut frame);
        assert_eq!(frame.events[1], UiEvent::PointerButton { down: true });
    }
}
