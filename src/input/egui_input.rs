use egui::{Context, MouseWheelUnit, PointerButton, Pos2, Rect};

use super::state::{TouchPhase, TouchState};
use super::InputEvent;

/// Screen pixels per wheel "line" when the platform reports line deltas
const LINE_HEIGHT_PX: f32 = 40.0;

/// Converts raw egui input into [`InputEvent`]s for the drawing canvas.
///
/// Pointer and touch events are only picked up inside the canvas rectangle.
/// Leaving the rectangle reports [`InputEvent::PointerLeave`]. Key events are
/// passed through regardless of where the pointer is.
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    last_pointer_pos: Option<Pos2>,
    pointer_inside: bool,
    primary_down: bool,
    touches: TouchState,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the canvas rectangle; call once per frame before processing input
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    fn in_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(pos))
    }

    /// Drain this frame's egui events into canvas input events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        ctx.input(|input| {
            for event in &input.events {
                self.translate(event, &mut events);
            }
        });
        events
    }

    /// Translate a single egui event, pushing zero or more canvas events
    pub fn translate(&mut self, event: &egui::Event, out: &mut Vec<InputEvent>) {
        match event {
            egui::Event::PointerMoved(pos) => {
                self.last_pointer_pos = Some(*pos);
                if self.in_canvas(*pos) {
                    self.pointer_inside = true;
                    out.push(InputEvent::PointerMove { pos: *pos });
                } else if self.pointer_inside {
                    self.pointer_inside = false;
                    out.push(InputEvent::PointerLeave);
                }
            }
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                self.last_pointer_pos = Some(*pos);
                if *pressed {
                    if self.in_canvas(*pos) {
                        self.pointer_inside = true;
                        self.primary_down = true;
                        out.push(InputEvent::PointerDown { pos: *pos });
                    }
                } else if self.primary_down {
                    self.primary_down = false;
                    out.push(InputEvent::PointerUp { pos: *pos });
                }
            }
            egui::Event::PointerGone => {
                self.last_pointer_pos = None;
                if self.pointer_inside {
                    self.pointer_inside = false;
                    out.push(InputEvent::PointerLeave);
                }
            }
            egui::Event::Touch { id, phase, pos, .. } => {
                if let Some(event) = self.touch(id.0, (*phase).into(), *pos) {
                    out.push(event);
                }
            }
            egui::Event::MouseWheel { unit, delta, .. } => {
                let Some(pos) = self.last_pointer_pos.filter(|pos| self.in_canvas(*pos)) else {
                    return;
                };
                let pixels = match unit {
                    MouseWheelUnit::Point => delta.y,
                    MouseWheelUnit::Line => delta.y * LINE_HEIGHT_PX,
                    MouseWheelUnit::Page => {
                        delta.y * self.canvas_rect.map_or(0.0, |rect| rect.height())
                    }
                };
                // egui reports scrolling down as negative; the canvas expects
                // the browser convention where down is positive.
                out.push(InputEvent::Wheel { pos, delta_y: -pixels });
            }
            egui::Event::Zoom(magnify) => {
                if let Some(pos) = self.last_pointer_pos.filter(|pos| self.in_canvas(*pos)) {
                    out.push(InputEvent::Magnify { pos, magnify: *magnify });
                }
            }
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                out.push(InputEvent::KeyDown {
                    key: *key,
                    modifiers: *modifiers,
                });
            }
            _ => {}
        }
    }

    /// Track one touch point. New touches outside the canvas are ignored;
    /// touches already being tracked are followed wherever they go.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, pos: Pos2) -> Option<InputEvent> {
        if phase == TouchPhase::Started && !self.in_canvas(pos) {
            return None;
        }
        self.touches.update(id, phase, pos)
    }
}
