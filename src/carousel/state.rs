//! Carousel paging state.
//!
//! Owns the only mutable datum of the carousel: the current image index.
//! Displacement is accumulated per frame while a drag is in progress and
//! resolved once on release, so the decision rule in
//! [`super::gesture`] only ever sees completed gestures.

use super::gesture::{resolve_swipe, DragSummary};

#[derive(Debug, Clone)]
pub struct CarouselState {
    index: usize,
    count: usize,
    drag_dx: f32,
    dragging: bool,
}

impl CarouselState {
    /// Creates paging state for an image set of `count` images.
    /// The caller guarantees `count >= 1`.
    pub fn new(count: usize) -> Self {
        debug_assert!(count >= 1);
        Self {
            index: 0,
            count: count.max(1),
            drag_dx: 0.0,
            dragging: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Net displacement of the drag currently in progress, for rendering
    /// the image shifted under the pointer. Zero when idle.
    pub fn drag_offset(&self) -> f32 {
        self.drag_dx
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Marker tap: jumps to position `k` unconditionally, bypassing the
    /// threshold logic. The caller guarantees `k < count`.
    pub fn select(&mut self, k: usize) {
        debug_assert!(k < self.count);
        self.index = k.min(self.count - 1);
        self.drag_dx = 0.0;
        self.dragging = false;
    }

    /// Arrow button: next image, wrapping from last to first.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.count;
    }

    /// Arrow button: previous image, wrapping from first to last.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.count - 1) % self.count;
    }

    /// Accumulates per-frame drag displacement while the pointer is down.
    pub fn drag_by(&mut self, delta_x: f32) {
        self.dragging = true;
        self.drag_dx += delta_x;
    }

    /// Completes the gesture. `vx` is the release velocity in points per
    /// millisecond; the accumulated displacement and the velocity are
    /// resolved together, then the accumulator is cleared.
    pub fn release(&mut self, vx: f32) {
        let summary = DragSummary::new(self.drag_dx, vx);
        self.index = resolve_swipe(summary, self.index, self.count);
        self.drag_dx = 0.0;
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulated_drag_resolves_on_release() {
        let mut state = CarouselState::new(5);
        state.drag_by(-20.0);
        state.drag_by(-25.0);
        state.drag_by(-20.0);
        assert!(state.is_dragging());
        state.release(0.0);
        assert_eq!(state.index(), 1);
        assert_eq!(state.drag_offset(), 0.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn short_slow_drag_leaves_index_unchanged() {
        let mut state = CarouselState::new(5);
        state.drag_by(10.0);
        state.release(0.1);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn marker_selection_overrides_pending_drag() {
        let mut state = CarouselState::new(4);
        state.drag_by(-200.0);
        state.select(3);
        assert_eq!(state.index(), 3);
        assert_eq!(state.drag_offset(), 0.0);
        // The abandoned drag must not leak into the next release.
        state.release(0.0);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn index_stays_in_range_over_arbitrary_gesture_sequences() {
        let mut state = CarouselState::new(3);
        let gestures = [
            (-80.0, 0.0),
            (-80.0, 0.0),
            (-80.0, -1.2),
            (80.0, 0.0),
            (0.0, 0.7),
            (5.0, 0.0),
            (-80.0, 0.0),
        ];
        for (dx, vx) in gestures {
            state.drag_by(dx);
            state.release(vx);
            assert!(state.index() < state.count());
        }
    }

    #[test]
    fn arrows_wrap_like_gestures() {
        let mut state = CarouselState::new(3);
        state.retreat();
        assert_eq!(state.index(), 2);
        state.advance();
        assert_eq!(state.index(), 0);
    }
}
