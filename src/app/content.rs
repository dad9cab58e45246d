//! Carousel rendering for `PreviewApp`.
//!
//! Nothing here decides what is visible: sections, dots and arrows are
//! drawn from the inline display and active class the controller wrote.

use swipe_carousel::carousel::ArrowSide;
use swipe_carousel::dom::DomNode;
use swipe_carousel::{CarouselEvent, CarouselSurface};

use super::PreviewApp;

impl PreviewApp {
    /// Draw one frame. Returns the clicks on arrows and dots.
    pub fn draw(&mut self, ctx: &egui::Context) -> Vec<CarouselEvent> {
        let mut clicks = Vec::new();
        let surface = self.carousel.surface();

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(surface.tree().title.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.carousel.is_empty() {
                        ui.weak(format!("{} / {}", self.carousel.current() + 1, self.carousel.len()));
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("dots").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                draw_arrow(ui, surface.arrow_left(), "<", ArrowSide::Left, &mut clicks);
                for i in 0..surface.dot_count() {
                    let Some(dot) = surface.dot(i) else { continue };
                    let (glyph, color) = if surface.is_active(dot) {
                        ("\u{25CF}", ui.visuals().strong_text_color())
                    } else {
                        ("\u{25CB}", ui.visuals().weak_text_color())
                    };
                    let button = egui::Button::new(egui::RichText::new(glyph).size(16.0).color(color))
                        .frame(false);
                    if ui.add(button).clicked() {
                        clicks.push(CarouselEvent::DotClick(i));
                    }
                }
                draw_arrow(ui, surface.arrow_right(), ">", ArrowSide::Right, &mut clicks);
            });
            ui.add_space(4.0);
        });

        let suppress_scroll = self.suppress_scroll;
        let panel = egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .drag_to_scroll(!suppress_scroll)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if self.carousel.is_empty() {
                        ui.weak("No carousel sections on this page.");
                    }
                    for i in 0..self.carousel.len() {
                        if let Some(section) = surface.section(i).filter(|s| !s.is_hidden()) {
                            draw_section(ui, section);
                        }
                    }
                });
        });
        if surface.has_container() {
            self.container_rect = Some(panel.response.rect);
        }

        clicks
    }
}

fn draw_arrow(
    ui: &mut egui::Ui,
    arrow: Option<&DomNode>,
    fallback: &str,
    side: ArrowSide,
    clicks: &mut Vec<CarouselEvent>,
) {
    let Some(arrow) = arrow.filter(|a| !a.is_hidden()) else {
        return;
    };
    let text = arrow.collect_text();
    let label = if text.is_empty() { fallback.to_string() } else { text };
    if ui
        .add(egui::Button::new(egui::RichText::new(label).size(18.0)).min_size(egui::vec2(32.0, 28.0)))
        .clicked()
    {
        clicks.push(CarouselEvent::ArrowClick(side));
    }
}

fn draw_section(ui: &mut egui::Ui, section: &DomNode) {
    for child in &section.children {
        let text = child.collect_text();
        if text.is_empty() {
            continue;
        }
        match child.tag.as_str() {
            "h1" | "h2" | "h3" => {
                ui.heading(text);
            }
            _ => {
                ui.label(text);
            }
        }
        ui.add_space(6.0);
    }
}
