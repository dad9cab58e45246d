//! Translation of egui input into carousel events.
//!
//! egui mirrors the first finger of a touch as pointer events; those are
//! dropped while a touch is down so one swipe is never seen twice.

use swipe_carousel::carousel::{NavKey, PointerCapabilities};
use swipe_carousel::gesture::TouchPoint;
use swipe_carousel::CarouselEvent;

fn point(pos: egui::Pos2) -> TouchPoint {
    TouchPoint::new(pos.x, pos.y)
}

fn contains(container: Option<egui::Rect>, pos: egui::Pos2) -> bool {
    container.is_some_and(|rect| rect.contains(pos))
}

pub struct InputTranslator {
    capabilities: PointerCapabilities,
    active_touches: usize,
    pointer_inside: bool,
    screen_size: Option<egui::Vec2>,
}

impl InputTranslator {
    /// Assumes a mouse until the first touch says otherwise.
    pub fn new() -> Self {
        Self {
            capabilities: PointerCapabilities::MOUSE,
            active_touches: 0,
            pointer_inside: false,
            screen_size: None,
        }
    }

    pub fn capabilities(&self) -> PointerCapabilities {
        self.capabilities
    }

    /// Events of this frame, in arrival order.
    pub fn translate(
        &mut self,
        ctx: &egui::Context,
        container: Option<egui::Rect>,
    ) -> Vec<CarouselEvent> {
        let (events, screen) = ctx.input(|i| (i.events.clone(), i.screen_rect().size()));
        let mut out = Vec::new();

        if self.screen_size.is_some_and(|prev| prev != screen) {
            out.push(CarouselEvent::Resize(self.capabilities));
        }
        self.screen_size = Some(screen);

        for event in events {
            match event {
                egui::Event::Touch { phase, pos, .. } => {
                    self.on_touch(phase, pos, container, &mut out);
                }
                egui::Event::PointerMoved(pos) => {
                    if self.active_touches > 0 {
                        continue;
                    }
                    self.set_capabilities(PointerCapabilities::MOUSE, &mut out);
                    let inside = contains(container, pos);
                    if inside {
                        out.push(CarouselEvent::MouseMove);
                    } else if self.pointer_inside {
                        out.push(CarouselEvent::MouseLeave);
                    }
                    self.pointer_inside = inside;
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if self.active_touches > 0 {
                        continue;
                    }
                    if pressed {
                        out.push(CarouselEvent::MouseDown {
                            point: point(pos),
                            inside_container: contains(container, pos),
                        });
                    } else {
                        out.push(CarouselEvent::MouseUp(point(pos)));
                    }
                }
                egui::Event::PointerGone => {
                    self.pointer_inside = false;
                    out.push(CarouselEvent::MouseLeave);
                }
                egui::Event::Key { key, pressed: true, .. } => {
                    let key = match key {
                        egui::Key::ArrowUp => NavKey::ArrowUp,
                        egui::Key::ArrowDown => NavKey::ArrowDown,
                        _ => continue,
                    };
                    out.push(CarouselEvent::KeyDown(key));
                }
                _ => {}
            }
        }

        out
    }

    fn on_touch(
        &mut self,
        phase: egui::TouchPhase,
        pos: egui::Pos2,
        container: Option<egui::Rect>,
        out: &mut Vec<CarouselEvent>,
    ) {
        match phase {
            egui::TouchPhase::Start => {
                self.set_capabilities(PointerCapabilities::TOUCH, out);
                self.active_touches += 1;
                out.push(CarouselEvent::TouchStart {
                    touches: self.active_touches,
                    point: point(pos),
                    inside_container: contains(container, pos),
                });
            }
            egui::TouchPhase::Move => out.push(CarouselEvent::TouchMove),
            egui::TouchPhase::End => {
                self.active_touches = self.active_touches.saturating_sub(1);
                out.push(CarouselEvent::TouchEnd(point(pos)));
            }
            egui::TouchPhase::Cancel => {
                self.active_touches = self.active_touches.saturating_sub(1);
                out.push(CarouselEvent::TouchCancel);
            }
        }
    }

    /// Capability changes are reported like a resize so the arrow policy
    /// is re-evaluated.
    fn set_capabilities(&mut self, capabilities: PointerCapabilities, out: &mut Vec<CarouselEvent>) {
        if self.capabilities != capabilities {
            log::info!("pointer capabilities changed: {:?}", capabilities);
            self.capabilities = capabilities;
            out.push(CarouselEvent::Resize(capabilities));
        }
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: egui::Vec2 = egui::vec2(420.0, 720.0);

    fn container() -> Option<egui::Rect> {
        Some(egui::Rect::from_min_size(egui::pos2(0.0, 100.0), egui::vec2(420.0, 400.0)))
    }

    fn frame(
        ctx: &egui::Context,
        translator: &mut InputTranslator,
        screen: egui::Vec2,
        events: Vec<egui::Event>,
    ) -> Vec<CarouselEvent> {
        let raw = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, screen)),
            events,
            ..Default::default()
        };
        let mut out = Vec::new();
        let _ = ctx.run(raw, |ctx| out = translator.translate(ctx, container()));
        out
    }

    fn touch(phase: egui::TouchPhase, x: f32, y: f32) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(1),
            phase,
            pos: egui::pos2(x, y),
            force: None,
        }
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_touch_start_inside_container() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        let out = frame(&ctx, &mut t, SCREEN, vec![touch(egui::TouchPhase::Start, 200.0, 300.0)]);
        assert_eq!(
            out,
            vec![
                CarouselEvent::Resize(PointerCapabilities::TOUCH),
                CarouselEvent::TouchStart {
                    touches: 1,
                    point: TouchPoint::new(200.0, 300.0),
                    inside_container: true,
                },
            ]
        );
        assert_eq!(t.capabilities(), PointerCapabilities::TOUCH);
    }

    #[test]
    fn test_touch_start_outside_container() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        let out = frame(&ctx, &mut t, SCREEN, vec![touch(egui::TouchPhase::Start, 200.0, 50.0)]);
        assert!(matches!(
            out.last(),
            Some(CarouselEvent::TouchStart { inside_container: false, .. })
        ));
    }

    #[test]
    fn test_mirrored_pointer_dropped_during_touch() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        let out = frame(
            &ctx,
            &mut t,
            SCREEN,
            vec![
                touch(egui::TouchPhase::Start, 300.0, 300.0),
                egui::Event::PointerMoved(egui::pos2(300.0, 300.0)),
                button(300.0, 300.0, true),
            ],
        );
        assert_eq!(out.len(), 2);
        assert!(!out.iter().any(|e| matches!(e, CarouselEvent::MouseDown { .. })));

        let out = frame(
            &ctx,
            &mut t,
            SCREEN,
            vec![touch(egui::TouchPhase::End, 200.0, 300.0), button(200.0, 300.0, false)],
        );
        assert_eq!(out, vec![CarouselEvent::TouchEnd(TouchPoint::new(200.0, 300.0))]);
    }

    #[test]
    fn test_pointer_leaving_container() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        let out = frame(&ctx, &mut t, SCREEN, vec![egui::Event::PointerMoved(egui::pos2(100.0, 200.0))]);
        assert_eq!(out, vec![CarouselEvent::MouseMove]);

        let out = frame(&ctx, &mut t, SCREEN, vec![egui::Event::PointerMoved(egui::pos2(100.0, 600.0))]);
        assert_eq!(out, vec![CarouselEvent::MouseLeave]);

        // already outside
        let out = frame(&ctx, &mut t, SCREEN, vec![egui::Event::PointerMoved(egui::pos2(100.0, 650.0))]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_mouse_press_and_release() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        let out = frame(&ctx, &mut t, SCREEN, vec![button(300.0, 200.0, true), button(100.0, 200.0, false)]);
        assert_eq!(
            out,
            vec![
                CarouselEvent::MouseDown {
                    point: TouchPoint::new(300.0, 200.0),
                    inside_container: true,
                },
                CarouselEvent::MouseUp(TouchPoint::new(100.0, 200.0)),
            ]
        );
    }

    #[test]
    fn test_capability_flip_reports_resize() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        frame(
            &ctx,
            &mut t,
            SCREEN,
            vec![touch(egui::TouchPhase::Start, 200.0, 300.0), touch(egui::TouchPhase::End, 200.0, 300.0)],
        );
        assert_eq!(t.capabilities(), PointerCapabilities::TOUCH);

        let out = frame(&ctx, &mut t, SCREEN, vec![egui::Event::PointerMoved(egui::pos2(10.0, 10.0))]);
        assert_eq!(out, vec![CarouselEvent::Resize(PointerCapabilities::MOUSE)]);
        assert_eq!(t.capabilities(), PointerCapabilities::MOUSE);
    }

    #[test]
    fn test_screen_size_change_reports_resize() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        assert!(frame(&ctx, &mut t, SCREEN, Vec::new()).is_empty());
        assert!(frame(&ctx, &mut t, SCREEN, Vec::new()).is_empty());
        let out = frame(&ctx, &mut t, egui::vec2(800.0, 600.0), Vec::new());
        assert_eq!(out, vec![CarouselEvent::Resize(PointerCapabilities::MOUSE)]);
    }

    #[test]
    fn test_only_vertical_arrow_keys() {
        let ctx = egui::Context::default();
        let mut t = InputTranslator::new();
        let key = |key| egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        let out = frame(
            &ctx,
            &mut t,
            SCREEN,
            vec![key(egui::Key::ArrowDown), key(egui::Key::ArrowLeft), key(egui::Key::ArrowUp)],
        );
        assert_eq!(
            out,
            vec![CarouselEvent::KeyDown(NavKey::ArrowDown), CarouselEvent::KeyDown(NavKey::ArrowUp)]
        );
    }
}
