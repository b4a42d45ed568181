//! The visible window onto the infinite canvas.
//!
//! A [`Viewport`] is a logical-space rectangle plus a cumulative scale. The
//! rendering surface stretches that rectangle over its on-screen bounding box,
//! so every pointer position is interpreted relative to both: see
//! [`Viewport::to_logical`].

use egui::{Pos2, Rect, Vec2};

use crate::error::ViewportError;
use crate::geometry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    rect: Rect,
    scale: f32,
}

impl Viewport {
    /// Create a viewport showing `width` x `height` logical units from `(x, y)`.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, ViewportError> {
        Self::with_scale(x, y, width, height, 1.0)
    }

    /// Like [`Viewport::new`] with an explicit starting scale.
    pub fn with_scale(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        scale: f32,
    ) -> Result<Self, ViewportError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ViewportError::InvalidOrigin { x, y });
        }
        if !is_positive(width) || !is_positive(height) {
            return Err(ViewportError::InvalidSize { width, height });
        }
        if !is_positive(scale) {
            return Err(ViewportError::InvalidScale(scale));
        }

        Ok(Self {
            rect: Rect::from_min_size(Pos2::new(x, y), Vec2::new(width, height)),
            scale,
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> f32 {
        self.rect.min.x
    }

    pub fn y(&self) -> f32 {
        self.rect.min.y
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    /// Inverse of the cumulative zoom factor; grows as the user zooms in.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Translate the visible rectangle by a logical-space delta. The canvas is
    /// unbounded, so no clamping happens.
    pub fn pan(&mut self, delta: Vec2) {
        if !delta.x.is_finite() || !delta.y.is_finite() {
            return;
        }
        self.rect = self.rect.translate(delta);
    }

    /// Rescale the visible rectangle by `factor`, keeping `anchor` (logical)
    /// at the same place on screen. `factor < 1` zooms in.
    pub fn zoom(&mut self, anchor: Pos2, factor: f32) {
        if !is_positive(factor) || !anchor.x.is_finite() || !anchor.y.is_finite() {
            return;
        }

        let min = anchor - (anchor - self.rect.min) * factor;
        let size = self.rect.size() * factor;
        let scale = self.scale / factor;
        let finite_origin = min.x.is_finite() && min.y.is_finite();
        if !finite_origin || !is_positive(size.x) || !is_positive(size.y) || !is_positive(scale) {
            return;
        }

        self.rect = Rect::from_min_size(min, size);
        self.scale = scale;
    }

    /// Map a screen-space point into logical space. `screen` is the surface's
    /// current on-screen bounding box; it is taken per call because it changes
    /// whenever the window is resized.
    pub fn to_logical(&self, point: Pos2, screen: Rect) -> Option<Pos2> {
        geometry::screen_to_logical(point, screen, self.rect)
    }

    /// Map a logical point back to screen space. Exact inverse of [`Viewport::to_logical`].
    pub fn to_screen(&self, point: Pos2, screen: Rect) -> Option<Pos2> {
        geometry::logical_to_screen(point, screen, self.rect)
    }

    /// Convert a horizontal screen distance into logical units.
    pub fn screen_dist_to_logical(&self, distance: f32, screen: Rect) -> f32 {
        if screen.width() <= 0.0 {
            return distance;
        }
        distance * self.rect.width() / screen.width()
    }

    /// Convert a logical distance into screen pixels.
    pub fn logical_dist_to_screen(&self, distance: f32, screen: Rect) -> f32 {
        distance * screen.width() / self.rect.width()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
            scale: 1.0,
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
