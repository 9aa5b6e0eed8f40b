use super::TickSource;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    /// Always finite and strictly positive.
    pub dt: f32,

    /// Raw counter value taken at the tick.
    pub tick: u64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots from a `TickSource`.
///
/// The first tick has no baseline to difference against, so it reports the
/// fallback delta. The same fallback covers clock anomalies: a counter that
/// did not advance, went backwards, or a source reporting zero resolution.
/// The baseline still advances on every call, so one bad reading never
/// poisons the next frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<u64>,
    frame_index: u64,
}

impl FrameClock {
    /// Delta reported when no real one can be computed: one 60 Hz frame.
    pub const FALLBACK_DT: f32 = 1.0 / 60.0;

    pub const fn new() -> Self {
        Self {
            last: None,
            frame_index: 0,
        }
    }

    /// Drops the baseline; the next tick reports the fallback delta.
    ///
    /// Useful when the host suspends and resumes the frame loop.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self, source: &impl TickSource) -> FrameTime {
        let now = source.ticks();
        let per_second = source.ticks_per_second();

        let dt = match self.last {
            Some(last) if per_second > 0 => {
                let elapsed = now.saturating_sub(last) as f64 / per_second as f64;
                let dt = elapsed as f32;
                if dt.is_finite() && dt > 0.0 {
                    dt
                } else {
                    Self::FALLBACK_DT
                }
            }
            _ => Self::FALLBACK_DT,
        };

        self.last = Some(now);

        let ft = FrameTime {
            dt,
            tick: now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
