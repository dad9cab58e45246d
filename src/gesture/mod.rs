//! Pointer gesture state for the carousel.
//!
//! Only single-pointer swipes are recognized: no taps, pinches or
//! velocities. Touch and mouse drags share one tracker.

pub mod touch;

pub use touch::{PointerSource, SwipeAxis, SwipeDirection, SwipeTracker, TouchPoint, SWIPE_THRESHOLD};
