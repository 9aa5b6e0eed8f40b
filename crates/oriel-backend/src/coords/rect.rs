use super::Vec2;

/// Axis-aligned rectangle in screen pixels (top-left origin).
///
/// Clip rectangles from the UI layer arrive as min/max corners; stored here
/// as origin + size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds from corner points. A max corner at or before the min corner
    /// yields an empty rectangle, not a normalized one.
    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── corners ───────────────────────────────────────────────────────────

    #[test]
    fn from_min_max_round_trips_corners() {
        let rect = Rect::from_min_max(Vec2::new(10.0, 20.0), Vec2::new(50.0, 60.0));
        assert_eq!(rect.min(), Vec2::new(10.0, 20.0));
        assert_eq!(rect.max(), Vec2::new(50.0, 60.0));
        assert_eq!(rect, r(10.0, 20.0, 40.0, 40.0));
    }

    #[test]
    fn from_min_max_reversed_corners_is_empty() {
        let rect = Rect::from_min_max(Vec2::new(50.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(rect.is_empty());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
