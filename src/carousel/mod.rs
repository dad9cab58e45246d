//! Carousel Controller
//!
//! Owns the active section index and is the only code that writes it to
//! the page. Every input modality ends in `show_section`:
//!
//! - touch swipe / mouse drag → `next_section` / `prev_section`
//! - arrow click               → `next_section` / `prev_section`
//! - dot click                 → `show_section(i)`
//! - ArrowUp / ArrowDown       → `prev_section` / `next_section`
//!
//! The carousel is circular: both directions wrap.

pub mod events;
pub mod options;
pub mod surface;

pub use events::{ArrowSide, CarouselAction, CarouselEvent, NavKey, PointerCapabilities};

use crate::gesture::{PointerSource, SwipeDirection, SwipeTracker};
use options::{ArrowVisibility, CarouselOptions};
use surface::CarouselSurface;

/// Index after `current`, wrapping to 0. `None` for an empty carousel.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (current + 1) % len)
}

/// Index before `current`, wrapping to the last. `None` for an empty carousel.
pub fn prev_index(current: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (current % len + len - 1) % len)
}

pub struct CarouselController<S: CarouselSurface> {
    surface: S,
    options: CarouselOptions,
    /// Always < section count once a section has been shown
    current: usize,
    swipe: SwipeTracker,
    capabilities: PointerCapabilities,
}

impl<S: CarouselSurface> CarouselController<S> {
    pub fn new(surface: S, options: CarouselOptions) -> Self {
        let swipe = SwipeTracker::new(options.swipe_axis, options.swipe_threshold);
        Self {
            surface,
            options,
            current: 0,
            swipe,
            capabilities: PointerCapabilities::default(),
        }
    }

    /// Content-ready: show the first section and apply the arrow policy.
    pub fn init(&mut self, capabilities: PointerCapabilities) {
        self.capabilities = capabilities;
        self.swipe.cancel();
        self.show_section(0);
        self.apply_arrow_policy();
        log::info!(
            "carousel ready: {} sections, {:?} swipes, arrows {}",
            self.len(),
            self.swipe.axis(),
            if self.arrows_visible() { "shown" } else { "hidden" },
        );
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.surface.section_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Whether a swipe or drag is in progress.
    pub fn is_swiping(&self) -> bool {
        self.swipe.is_tracking()
    }

    /// Make section `idx` the only visible one and highlight its dot.
    ///
    /// `idx` is reduced modulo the section count; an empty carousel is left
    /// untouched.
    pub fn show_section(&mut self, idx: usize) {
        let len = self.surface.section_count();
        if len == 0 {
            return;
        }
        let idx = idx % len;
        for i in 0..len {
            self.surface.set_section_active(i, i == idx);
        }
        for i in 0..self.surface.dot_count() {
            self.surface.set_dot_active(i, i == idx);
        }
        if idx != self.current {
            log::debug!("section {} -> {}", self.current, idx);
        }
        self.current = idx;
    }

    pub fn next_section(&mut self) {
        if let Some(idx) = next_index(self.current, self.len()) {
            self.show_section(idx);
        }
    }

    pub fn prev_section(&mut self) {
        if let Some(idx) = prev_index(self.current, self.len()) {
            self.show_section(idx);
        }
    }

    /// Whether the arrow elements should currently be displayed.
    pub fn arrows_visible(&self) -> bool {
        self.options.enable_arrows
            && match self.options.arrow_visibility {
                ArrowVisibility::Always => true,
                ArrowVisibility::PointerCapable => self.capabilities.is_pointer_capable(),
            }
    }

    fn apply_arrow_policy(&mut self) {
        if self.surface.has_arrows() {
            let visible = self.arrows_visible();
            self.surface.set_arrows_visible(visible);
        }
    }

    /// Process one input event. Events must be fed in arrival order.
    pub fn handle_event(&mut self, event: CarouselEvent) -> CarouselAction {
        match event {
            CarouselEvent::ContentReady(capabilities) => {
                self.init(capabilities);
                CarouselAction::None
            }

            CarouselEvent::TouchStart { touches, point, inside_container } => {
                if touches == 1 && inside_container {
                    self.swipe.begin(PointerSource::Touch, point);
                } else {
                    self.swipe.cancel();
                }
                CarouselAction::None
            }

            CarouselEvent::TouchMove => self.suppress_while(PointerSource::Touch),

            CarouselEvent::TouchEnd(point) => {
                let direction = self.swipe.end(PointerSource::Touch, point);
                self.apply_swipe(direction)
            }

            CarouselEvent::TouchCancel => {
                if self.swipe.is_tracking_source(PointerSource::Touch) {
                    self.swipe.cancel();
                }
                CarouselAction::None
            }

            CarouselEvent::MouseDown { point, inside_container } => {
                if self.options.enable_mouse_drag && inside_container {
                    self.swipe.begin(PointerSource::Mouse, point);
                } else if self.swipe.is_tracking_source(PointerSource::Mouse) {
                    self.swipe.cancel();
                }
                CarouselAction::None
            }

            CarouselEvent::MouseMove => self.suppress_while(PointerSource::Mouse),

            CarouselEvent::MouseUp(point) => {
                let direction = self.swipe.end(PointerSource::Mouse, point);
                self.apply_swipe(direction)
            }

            CarouselEvent::MouseLeave => {
                if self.swipe.is_tracking_source(PointerSource::Mouse) {
                    log::debug!("drag left the carousel; dropped");
                    self.swipe.cancel();
                }
                CarouselAction::None
            }

            CarouselEvent::ArrowClick(side) => {
                if !self.options.enable_arrows {
                    return CarouselAction::None;
                }
                match side {
                    ArrowSide::Left => self.navigate(Self::prev_section),
                    ArrowSide::Right => self.navigate(Self::next_section),
                }
            }

            CarouselEvent::DotClick(idx) => {
                if idx >= self.len() {
                    log::debug!("dot {} has no section", idx);
                    return CarouselAction::None;
                }
                self.navigate(|c| c.show_section(idx))
            }

            CarouselEvent::KeyDown(key) => {
                if !self.options.enable_keyboard {
                    return CarouselAction::None;
                }
                match key {
                    NavKey::ArrowUp => self.navigate(Self::prev_section),
                    NavKey::ArrowDown => self.navigate(Self::next_section),
                    NavKey::Other => CarouselAction::None,
                }
            }

            CarouselEvent::Resize(capabilities) => {
                self.capabilities = capabilities;
                self.show_section(self.current);
                self.apply_arrow_policy();
                CarouselAction::None
            }
        }
    }

    fn suppress_while(&self, source: PointerSource) -> CarouselAction {
        if self.swipe.is_tracking_source(source) {
            CarouselAction::SuppressDefault
        } else {
            CarouselAction::None
        }
    }

    /// Positive displacement (right/down) goes back, negative goes forward.
    fn apply_swipe(&mut self, direction: Option<SwipeDirection>) -> CarouselAction {
        match direction {
            Some(dir) if dir.is_positive() => self.navigate(Self::prev_section),
            Some(_) => self.navigate(Self::next_section),
            None => CarouselAction::None,
        }
    }

    fn navigate(&mut self, step: impl FnOnce(&mut Self)) -> CarouselAction {
        if self.is_empty() {
            return CarouselAction::None;
        }
        let from = self.current;
        step(self);
        if self.current == from {
            return CarouselAction::None;
        }
        CarouselAction::Navigated { from, to: self.current }
    }
}
