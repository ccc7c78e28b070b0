use crate::ContentExtent;

/// How many times the content sequence is repeated so the wrap is seamless.
/// Two copies are the minimum; the wrap boundary sits at half the
/// duplicated extent, i.e. exactly one copy's width.
const CONTENT_COPIES: usize = 2;

/// One horizontally scrolling lane of repeated content items.
///
/// The offset advances by the signed per-tick speed and carries its
/// remainder past the wrap boundary, so after every tick
/// `-wrap_extent < offset < wrap_extent`. Renderers draw the duplicated
/// sequence shifted by `-offset` to create the infinite-loop illusion.
#[derive(Debug, Clone, PartialEq)]
pub struct Strip<T> {
    /// The original content sequence (one copy).
    items: Vec<T>,

    /// Current scroll offset.
    offset: f64,

    /// Signed offset advance per tick.
    speed: f64,

    /// The offset magnitude at which the strip wraps: half the measured
    /// duplicated-content extent.
    wrap_extent: f64,

    /// Suspends offset advancement without resetting position.
    paused: bool,
}

impl<T> Strip<T> {
    /// Create a strip by measuring its container.
    ///
    /// Returns `None` when the container reports no extent or a
    /// non-positive one (not yet mounted / already unmounted); callers must
    /// not schedule work for such a strip.
    pub fn measure(items: Vec<T>, speed: f64, probe: &dyn ContentExtent) -> Option<Self> {
        let extent = probe.measure_content_extent()?;
        if !extent.is_finite() || extent <= 0.0 {
            return None;
        }
        Some(Self {
            items,
            offset: 0.0,
            speed,
            wrap_extent: extent / 2.0,
            paused: false,
        })
    }

    /// Advance the offset by one tick's worth of speed.
    ///
    /// No-op while paused. Crossing the wrap boundary carries the
    /// remainder, so a strip with speed `s` lands in `[0, s)` right after a
    /// positive wrap (mirrored for negative speeds). The fold keeps
    /// `|offset| < wrap_extent` even when a single tick overshoots the
    /// boundary by more than one wrap.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.offset += self.speed;
        if self.offset >= self.wrap_extent {
            self.offset = self.offset.rem_euclid(self.wrap_extent);
        } else if self.offset <= -self.wrap_extent {
            self.offset = -(-self.offset).rem_euclid(self.wrap_extent);
        }
    }

    /// Suspend offset advancement, keeping the current position.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume offset advancement from the held position.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Check if the strip is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the current offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Get the signed per-tick speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Get the wrap boundary (half the duplicated-content extent).
    pub fn wrap_extent(&self) -> f64 {
        self.wrap_extent
    }

    /// Get the original content sequence (one copy).
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate the duplicated content sequence renderers actually draw.
    pub fn repeated(&self) -> impl Iterator<Item = &T> {
        std::iter::repeat_n(&self.items, CONTENT_COPIES).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedExtent, extent::Unmounted};

    fn strip(speed: f64, extent: f64) -> Strip<&'static str> {
        Strip::measure(vec!["a", "b", "c"], speed, &FixedExtent::new(extent)).unwrap()
    }

    #[test]
    fn offset_is_ticks_times_speed_before_wrap() {
        let mut s = strip(2.0, 100.0);
        for _ in 0..7 {
            s.tick();
        }
        assert_eq!(s.offset(), 14.0);
    }

    #[test]
    fn wrap_carries_remainder_into_speed_interval() {
        // wrap boundary = 10; offsets go 3, 6, 9, then 12 -> 2
        let mut s = strip(3.0, 20.0);
        for _ in 0..3 {
            s.tick();
        }
        assert_eq!(s.offset(), 9.0);
        s.tick();
        assert!(s.offset() >= 0.0 && s.offset() < s.speed());
        assert_eq!(s.offset(), 2.0);
    }

    #[test]
    fn negative_speed_wraps_mirrored() {
        let mut s = strip(-3.0, 20.0);
        for _ in 0..4 {
            s.tick();
        }
        assert!(s.offset() <= 0.0 && s.offset() > s.speed());
        assert_eq!(s.offset(), -2.0);
    }

    #[test]
    fn oversized_speed_still_lands_inside_the_wrap() {
        // wrap boundary = 10; one tick overshoots it twice over
        let mut s = strip(25.0, 20.0);
        s.tick();
        assert!(s.offset().abs() < s.wrap_extent());
        assert_eq!(s.offset(), 5.0);

        let mut s = strip(-25.0, 20.0);
        s.tick();
        assert!(s.offset().abs() < s.wrap_extent());
        assert_eq!(s.offset(), -5.0);
    }

    #[test]
    fn pause_holds_position_and_resume_continues() {
        let mut s = strip(1.5, 100.0);
        s.tick();
        s.pause();
        s.tick();
        s.tick();
        assert_eq!(s.offset(), 1.5);
        s.resume();
        s.tick();
        assert_eq!(s.offset(), 3.0);
    }

    #[test]
    fn opposite_signs_diverge() {
        let mut left = strip(2.0, 100.0);
        let mut right = strip(-2.0, 100.0);
        for _ in 0..5 {
            left.tick();
            right.tick();
        }
        assert_ne!(left.offset(), right.offset());
    }

    #[test]
    fn absent_container_yields_no_strip() {
        assert!(Strip::measure(vec!["a"], 1.0, &Unmounted).is_none());
        assert!(Strip::measure(vec!["a"], 1.0, &FixedExtent::new(0.0)).is_none());
        assert!(Strip::measure(vec!["a"], 1.0, &FixedExtent::new(-4.0)).is_none());
    }

    #[test]
    fn repeated_duplicates_content() {
        let s = strip(1.0, 10.0);
        let rendered: Vec<_> = s.repeated().copied().collect();
        assert_eq!(rendered, vec!["a", "b", "c", "a", "b", "c"]);
    }
}
