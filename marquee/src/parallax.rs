use crate::{ContentExtent, Strip};

/// A stack of scrolling lanes with independent speeds and directions.
///
/// Adjacent lanes alternate direction so they visually drift apart,
/// creating the parallax illusion. Lanes are ticked together but hold their
/// own state; pausing one (say, under a hover target) leaves the rest
/// moving.
#[derive(Debug, Clone, Default)]
pub struct ParallaxRows<T> {
    lanes: Vec<Strip<T>>,
}

impl<T> ParallaxRows<T> {
    /// Create an empty group.
    pub fn new() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Build alternating-direction lanes from content rows.
    ///
    /// Lane `i` gets speed `base_speed * (-1)^i`, so any two adjacent lanes
    /// use opposite signs. Rows whose container reports no extent are
    /// skipped entirely (they never animate).
    pub fn alternating(
        rows: impl IntoIterator<Item = Vec<T>>,
        base_speed: f64,
        probe: &dyn ContentExtent,
    ) -> Self {
        let lanes = rows
            .into_iter()
            .enumerate()
            .filter_map(|(i, items)| {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                Strip::measure(items, base_speed * sign, probe)
            })
            .collect();
        Self { lanes }
    }

    /// Add a pre-measured lane.
    pub fn push(&mut self, lane: Strip<T>) {
        self.lanes.push(lane);
    }

    /// Advance every lane by one tick.
    pub fn tick(&mut self) {
        for lane in &mut self.lanes {
            lane.tick();
        }
    }

    /// Pause a single lane by index (hover target), if it exists.
    pub fn pause_lane(&mut self, index: usize) {
        if let Some(lane) = self.lanes.get_mut(index) {
            lane.pause();
        }
    }

    /// Resume a single lane by index, if it exists.
    pub fn resume_lane(&mut self, index: usize) {
        if let Some(lane) = self.lanes.get_mut(index) {
            lane.resume();
        }
    }

    /// Get the lanes.
    pub fn lanes(&self) -> &[Strip<T>] {
        &self.lanes
    }

    /// Get mutable access to the lanes.
    pub fn lanes_mut(&mut self) -> &mut [Strip<T>] {
        &mut self.lanes
    }

    /// Get the number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Check if the group has no lanes.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedExtent, Unmounted};

    #[test]
    fn alternating_lanes_have_opposite_signs() {
        let rows = vec![vec!["a", "b"], vec!["c", "d"]];
        let group = ParallaxRows::alternating(rows, 2.0, &FixedExtent::new(50.0));
        assert_eq!(group.len(), 2);
        assert_eq!(group.lanes()[0].speed(), 2.0);
        assert_eq!(group.lanes()[1].speed(), -2.0);
    }

    #[test]
    fn lanes_diverge_after_ticks() {
        let rows = vec![vec!["a"], vec!["b"]];
        let mut group = ParallaxRows::alternating(rows, 1.0, &FixedExtent::new(50.0));
        group.tick();
        let offsets: Vec<_> = group.lanes().iter().map(Strip::offset).collect();
        assert_ne!(offsets[0], offsets[1]);
    }

    #[test]
    fn pause_one_lane_leaves_others_moving() {
        let rows = vec![vec!["a"], vec!["b"]];
        let mut group = ParallaxRows::alternating(rows, 1.0, &FixedExtent::new(50.0));
        group.pause_lane(0);
        group.tick();
        assert_eq!(group.lanes()[0].offset(), 0.0);
        assert_eq!(group.lanes()[1].offset(), -1.0);
    }

    #[test]
    fn unmounted_rows_are_skipped() {
        let rows = vec![vec!["a"], vec!["b"]];
        let group = ParallaxRows::alternating(rows, 1.0, &Unmounted);
        assert!(group.is_empty());
    }
}
