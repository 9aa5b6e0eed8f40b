use std::time::Instant;

/// Monotonic tick counter as the platform exposes it.
///
/// `ticks` must never decrease between calls; `ticks_per_second` is the
/// counter resolution and is expected to stay constant for the lifetime of
/// the source.
pub trait TickSource {
    fn ticks(&self) -> u64;
    fn ticks_per_second(&self) -> u64;
}

/// Tick source backed by the process monotonic clock, in nanoseconds.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicClock {
    #[inline]
    fn ticks(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }

    #[inline]
    fn ticks_per_second(&self) -> u64 {
        1_000_000_000
    }
}

/// Hand-driven tick source for tests and headless hosts.
///
/// Set `now` between frames; the clock under test reads it through the
/// trait like any hardware counter.
#[derive(Debug, Copy, Clone)]
pub struct ManualTicks {
    pub now: u64,
    pub per_second: u64,
}

impl ManualTicks {
    pub const fn new(per_second: u64) -> Self {
        Self { now: 0, per_second }
    }
}

impl TickSource for ManualTicks {
    #[inline]
    fn ticks(&self) -> u64 {
        self.now
    }

    #[inline]
    fn ticks_per_second(&self) -> u64 {
        self.per_second
    }
}
