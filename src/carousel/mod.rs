//! # Image Carousel Core
//!
//! Turns completed drag gestures into discrete paging decisions over a
//! bounded, wrapping image index. The decision rule lives in a pure
//! function ([`gesture::resolve_swipe`]) so it stays testable without
//! any egui plumbing; [`state::CarouselState`] owns the index and the
//! in-progress drag accumulator that the detail screen feeds each frame.

pub mod gesture;
pub mod state;

pub use gesture::{resolve_swipe, DragSummary, SwipeDirection};
pub use state::CarouselState;
