//! Browser-style input events and the controller's response to them.

use crate::gesture::TouchPoint;

/// Which arrow element was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

/// Keys the carousel reacts to; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    Other,
}

/// Answer of the `(hover: hover) and (pointer: fine)` capability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerCapabilities {
    pub hover: bool,
    pub fine_pointer: bool,
}

impl PointerCapabilities {
    /// Mouse or trackpad.
    pub const MOUSE: Self = Self { hover: true, fine_pointer: true };
    /// Touch screen only.
    pub const TOUCH: Self = Self { hover: false, fine_pointer: false };

    pub fn is_pointer_capable(&self) -> bool {
        self.hover && self.fine_pointer
    }
}

impl Default for PointerCapabilities {
    fn default() -> Self {
        Self::MOUSE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// DOM content loaded
    ContentReady(PointerCapabilities),
    TouchStart {
        /// Number of fingers on the surface, including this one
        touches: usize,
        point: TouchPoint,
        inside_container: bool,
    },
    TouchMove,
    TouchEnd(TouchPoint),
    TouchCancel,
    MouseDown {
        point: TouchPoint,
        inside_container: bool,
    },
    MouseMove,
    MouseUp(TouchPoint),
    MouseLeave,
    ArrowClick(ArrowSide),
    DotClick(usize),
    KeyDown(NavKey),
    Resize(PointerCapabilities),
}

/// What the host must do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// The active section changed
    Navigated { from: usize, to: usize },
    /// Call `preventDefault` so native scrolling does not fight the swipe
    SuppressDefault,
    None,
}
