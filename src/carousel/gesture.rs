//! Pure swipe decision logic.
//!
//! A completed drag is summarized by its net horizontal displacement and
//! release velocity. Either threshold alone qualifies a gesture, so a
//! short fast flick and a slow long drag both page the carousel.

/// Minimum net displacement (points) for a drag to count as a swipe.
pub const SWIPE_DISTANCE: f32 = 50.0;

/// Minimum release velocity (points per millisecond) for a flick to
/// count as a swipe.
pub const SWIPE_VELOCITY: f32 = 0.5;

/// Summary of a completed drag gesture.
///
/// `dx` is the net horizontal displacement in points, `vx` the release
/// velocity in points per millisecond. Positive values point rightward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSummary {
    pub dx: f32,
    pub vx: f32,
}

impl DragSummary {
    pub fn new(dx: f32, vx: f32) -> Self {
        Self { dx, vx }
    }
}

/// Discrete interpretation of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Rightward swipe, reveals the previous image.
    Right,
    /// Leftward swipe, reveals the next image.
    Left,
    /// Below both thresholds, the index stays put.
    Stay,
}

/// Classifies a completed drag against the distance and velocity
/// thresholds. The thresholds are independent ORs; the sign constraints
/// make it impossible for one gesture to satisfy both directions.
pub fn classify(summary: DragSummary) -> SwipeDirection {
    if summary.dx > SWIPE_DISTANCE || summary.vx > SWIPE_VELOCITY {
        SwipeDirection::Right
    } else if summary.dx < -SWIPE_DISTANCE || summary.vx < -SWIPE_VELOCITY {
        SwipeDirection::Left
    } else {
        SwipeDirection::Stay
    }
}

/// Resolves a completed drag into the new image index.
///
/// Wraps at both ends: retreating from the first image lands on the
/// last, advancing from the last lands on the first. Total for
/// `count >= 1`; the caller guarantees `index < count`.
pub fn resolve_swipe(summary: DragSummary, index: usize, count: usize) -> usize {
    debug_assert!(count >= 1);
    debug_assert!(index < count);

    match classify(summary) {
        SwipeDirection::Right => (index + count - 1) % count,
        SwipeDirection::Left => (index + 1) % count,
        SwipeDirection::Stay => index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_drag_advances_for_every_start_index() {
        for count in 1..=6 {
            for index in 0..count {
                let next = resolve_swipe(DragSummary::new(-60.0, 0.0), index, count);
                assert_eq!(next, (index + 1) % count, "count={count} index={index}");
            }
        }
    }

    #[test]
    fn rightward_drag_retreats_for_every_start_index() {
        for count in 1..=6 {
            for index in 0..count {
                let next = resolve_swipe(DragSummary::new(60.0, 0.0), index, count);
                assert_eq!(
                    next,
                    (index + count - 1) % count,
                    "count={count} index={index}"
                );
            }
        }
    }

    #[test]
    fn below_both_thresholds_keeps_index() {
        assert_eq!(resolve_swipe(DragSummary::new(10.0, 0.1), 2, 5), 2);
        assert_eq!(classify(DragSummary::new(-10.0, -0.1)), SwipeDirection::Stay);
    }

    #[test]
    fn velocity_alone_triggers_paging() {
        // A fast flick with no net displacement still pages.
        assert_eq!(resolve_swipe(DragSummary::new(0.0, 0.6), 2, 5), 1);
        assert_eq!(resolve_swipe(DragSummary::new(0.0, -0.6), 2, 5), 3);
    }

    #[test]
    fn thresholds_are_exclusive_at_the_boundary() {
        assert_eq!(classify(DragSummary::new(50.0, 0.0)), SwipeDirection::Stay);
        assert_eq!(classify(DragSummary::new(0.0, 0.5)), SwipeDirection::Stay);
        assert_eq!(classify(DragSummary::new(50.1, 0.0)), SwipeDirection::Right);
    }

    #[test]
    fn wraps_at_both_ends() {
        // N=5: advancing from the last image wraps to the first.
        assert_eq!(resolve_swipe(DragSummary::new(-60.0, 0.0), 4, 5), 0);
        // Retreating from the first image wraps to the last.
        assert_eq!(resolve_swipe(DragSummary::new(60.0, 0.0), 0, 5), 4);
        // Worked example from the decision table: N=5, i=0, dx=-60 -> 1.
        assert_eq!(resolve_swipe(DragSummary::new(-60.0, 0.0), 0, 5), 1);
    }

    #[test]
    fn single_image_carousel_never_moves() {
        assert_eq!(resolve_swipe(DragSummary::new(-300.0, -2.0), 0, 1), 0);
        assert_eq!(resolve_swipe(DragSummary::new(300.0, 2.0), 0, 1), 0);
    }
}
