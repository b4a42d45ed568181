//! Turns the raw [`InputEvent`] stream into tool gestures and zoom requests.
//!
//! A two-finger touch owns the input exclusively: while it lasts every pointer
//! event is dropped, so a pinch never leaks strokes into the active tool.

use egui::{Pos2, Rect};

use super::InputEvent;
use crate::geometry;
use crate::viewport::Viewport;

/// A recognised gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Single-pointer interaction began at a logical point
    Start(Pos2),
    /// Pointer moved to a logical point during an interaction
    Move(Pos2),
    /// Interaction finished normally
    End,
    /// Interaction was interrupted and must leave no trace
    Cancel,
    /// Rescale the viewport around a screen point; `factor < 1` zooms in
    Zoom { screen: Pos2, factor: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    SinglePointer,
    TwoFinger { last_distance: f32 },
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: GestureState,
    /// Minimum relative distance change before a pinch step zooms
    pinch_threshold: f32,
    /// Wheel zoom base: each unit of `delta_y` scales by `1 + zoom_sensitivity`
    zoom_sensitivity: f32,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(0.01, 0.001)
    }
}

impl GestureTracker {
    pub fn new(pinch_threshold: f32, zoom_sensitivity: f32) -> Self {
        Self {
            state: GestureState::Idle,
            pinch_threshold,
            zoom_sensitivity,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.state, GestureState::TwoFinger { .. })
    }

    pub fn set_pinch_threshold(&mut self, threshold: f32) {
        self.pinch_threshold = threshold;
    }

    pub fn set_zoom_sensitivity(&mut self, sensitivity: f32) {
        self.zoom_sensitivity = sensitivity;
    }

    /// Feed one event. `screen` is the surface's current on-screen bounds.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        viewport: &Viewport,
        screen: Rect,
    ) -> Option<Gesture> {
        match event {
            InputEvent::PointerDown { pos } => {
                // A pinch owns the input; a repeated press belongs to the
                // interaction already running
                if self.state != GestureState::Idle {
                    return None;
                }
                let logical = viewport.to_logical(*pos, screen)?;
                self.state = GestureState::SinglePointer;
                log::debug!("Gesture start at {:?}", logical);
                Some(Gesture::Start(logical))
            }
            InputEvent::PointerMove { pos } => {
                if self.state != GestureState::SinglePointer {
                    return None;
                }
                viewport.to_logical(*pos, screen).map(Gesture::Move)
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                if self.state != GestureState::SinglePointer {
                    return None;
                }
                self.state = GestureState::Idle;
                log::debug!("Gesture end");
                Some(Gesture::End)
            }
            InputEvent::TouchStart { touches } => {
                let [a, b] = touches.as_slice() else {
                    return None;
                };
                let interrupted = self.state == GestureState::SinglePointer;
                self.state = GestureState::TwoFinger {
                    last_distance: geometry::pinch_distance(*a, *b),
                };
                if interrupted {
                    log::debug!("Pinch interrupted a pointer gesture");
                    Some(Gesture::Cancel)
                } else {
                    None
                }
            }
            InputEvent::TouchMove { touches } => {
                let GestureState::TwoFinger { last_distance } = self.state else {
                    return None;
                };
                let [a, b] = touches.as_slice() else {
                    return None;
                };

                let distance = geometry::pinch_distance(*a, *b);
                self.state = GestureState::TwoFinger { last_distance: distance };
                if last_distance == 0.0 {
                    return None;
                }

                let factor = distance / last_distance;
                if (1.0 - factor).abs() > self.pinch_threshold {
                    Some(Gesture::Zoom {
                        screen: geometry::midpoint(*a, *b),
                        factor,
                    })
                } else {
                    None
                }
            }
            InputEvent::TouchEnd { .. } => {
                if self.is_pinching() {
                    self.state = GestureState::Idle;
                }
                None
            }
            InputEvent::Wheel { pos, delta_y } => {
                if *delta_y == 0.0 {
                    return None;
                }
                let factor = (1.0 + self.zoom_sensitivity).powf(*delta_y);
                factor.is_finite().then_some(Gesture::Zoom { screen: *pos, factor })
            }
            InputEvent::Magnify { pos, magnify } => {
                if self.is_pinching() || *magnify == 1.0 {
                    return None;
                }
                let factor = magnify.recip();
                (factor.is_finite() && factor > 0.0)
                    .then_some(Gesture::Zoom { screen: *pos, factor })
            }
            InputEvent::KeyDown { .. } => None,
        }
    }
}
