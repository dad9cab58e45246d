//! `PreviewApp`: the egui host around one carousel.
//!
//! - `input`: egui input → browser-style carousel events
//! - `content`: what the DOM state says is visible

pub mod content;
pub mod input;

use swipe_carousel::{CarouselAction, CarouselController, CarouselEvent, DomSurface};

use input::InputTranslator;

pub struct PreviewApp {
    pub carousel: CarouselController<DomSurface>,
    pub input: InputTranslator,
    /// Container area from the previous frame, for hit-testing pointers
    pub container_rect: Option<egui::Rect>,
    /// Drag-to-scroll is off while a swipe is in progress
    pub suppress_scroll: bool,
    pub started: bool,
}

impl PreviewApp {
    pub fn new(carousel: CarouselController<DomSurface>) -> Self {
        Self {
            carousel,
            input: InputTranslator::new(),
            container_rect: None,
            suppress_scroll: false,
            started: false,
        }
    }

    pub fn dispatch(&mut self, event: CarouselEvent) {
        match self.carousel.handle_event(event) {
            CarouselAction::Navigated { from, to } => {
                log::debug!("navigated {} -> {}", from, to);
            }
            CarouselAction::SuppressDefault => self.suppress_scroll = true,
            CarouselAction::None => {}
        }
        if !self.carousel.is_swiping() {
            self.suppress_scroll = false;
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            let capabilities = self.input.capabilities();
            self.dispatch(CarouselEvent::ContentReady(capabilities));
        }

        for event in self.input.translate(ctx, self.container_rect) {
            self.dispatch(event);
        }

        for event in self.draw(ctx) {
            self.dispatch(event);
            ctx.request_repaint();
        }
    }
}
