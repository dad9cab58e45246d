//! Swipe Tracking
//!
//! Turns a start/end pointer pair into a swipe direction:
//! - touch-start / mouse-down records the start coordinate on one axis
//! - touch-end / mouse-up measures the displacement and clears the state
//! - displacement must strictly exceed the threshold in either direction
//!
//! A start that never sees its end is harmless: the next start overwrites
//! it, and `cancel` drops it outright.

use serde::Deserialize;

/// Default minimum displacement in logical pixels.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Touch point in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis a swipe is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwipeAxis {
    #[default]
    Horizontal,
    Vertical,
}

impl SwipeAxis {
    fn coordinate(self, point: TouchPoint) -> f32 {
        match self {
            SwipeAxis::Horizontal => point.x,
            SwipeAxis::Vertical => point.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Finger moved toward increasing coordinates (right or down).
    pub fn is_positive(self) -> bool {
        matches!(self, SwipeDirection::Right | SwipeDirection::Down)
    }
}

/// Which device started the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Touch,
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SwipeStart {
    coord: f32,
    source: PointerSource,
}

/// Ephemeral per-interaction swipe state.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    axis: SwipeAxis,
    /// Displacement must be strictly greater than this
    threshold: f32,
    /// Start of the interaction in progress, if any
    start: Option<SwipeStart>,
}

impl SwipeTracker {
    pub fn new(axis: SwipeAxis, threshold: f32) -> Self {
        Self {
            axis,
            threshold,
            start: None,
        }
    }

    pub fn axis(&self) -> SwipeAxis {
        self.axis
    }

    /// Start an interaction. Any stale start is discarded.
    pub fn begin(&mut self, source: PointerSource, point: TouchPoint) {
        if let Some(stale) = self.start {
            log::debug!("discarding abandoned {:?} swipe", stale.source);
        }
        self.start = Some(SwipeStart {
            coord: self.axis.coordinate(point),
            source,
        });
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn is_tracking_source(&self, source: PointerSource) -> bool {
        self.start.is_some_and(|s| s.source == source)
    }

    /// Finish the interaction started by `source`.
    ///
    /// Returns the swipe direction when the displacement clears the
    /// threshold. The state is cleared either way. An end from a different
    /// source than the one in progress is ignored and leaves it intact.
    pub fn end(&mut self, source: PointerSource, point: TouchPoint) -> Option<SwipeDirection> {
        if !self.is_tracking_source(source) {
            return None;
        }
        let start = self.start.take()?;
        let diff = self.axis.coordinate(point) - start.coord;
        self.classify(diff)
    }

    /// Drop the interaction in progress without navigating.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    fn classify(&self, diff: f32) -> Option<SwipeDirection> {
        if diff > self.threshold {
            Some(match self.axis {
                SwipeAxis::Horizontal => SwipeDirection::Right,
                SwipeAxis::Vertical => SwipeDirection::Down,
            })
        } else if diff < -self.threshold {
            Some(match self.axis {
                SwipeAxis::Horizontal => SwipeDirection::Left,
                SwipeAxis::Vertical => SwipeDirection::Up,
            })
        } else {
            None
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SwipeAxis::Horizontal, SWIPE_THRESHOLD)
    }
}
