use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry;

/// Unique identifier for a drawable element
pub type ElementId = Uuid;

/// The kind of a drawable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Freehand polyline
    Path,
    Rectangle,
    Circle,
    Line,
}

/// Shape-specific parameters of an element, in logical coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Path { points: Vec<Pos2> },
    Rectangle { rect: Rect },
    Circle { center: Pos2, radius: f32 },
    Line { start: Pos2, end: Pos2 },
}

impl Geometry {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Path { .. } => ElementKind::Path,
            Self::Rectangle { .. } => ElementKind::Rectangle,
            Self::Circle { .. } => ElementKind::Circle,
            Self::Line { .. } => ElementKind::Line,
        }
    }

    /// Whether a fill color applies to this geometry at all
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Rectangle { .. } | Self::Circle { .. })
    }
}

/// Stroke color, stroke width and optional fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub fill: Option<Color32>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 2.0,
            fill: None,
        }
    }
}

impl StrokeStyle {
    pub fn stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.width, self.color)
    }
}

/// A shape on the drawing surface.
///
/// Elements are plain values. Whoever detaches one from the surface (an erase
/// command, a tool holding a provisional shape) owns it until it goes back.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    geometry: Geometry,
    style: StrokeStyle,
}

impl Element {
    pub fn new(geometry: Geometry, style: StrokeStyle) -> Self {
        let style = if geometry.is_closed() {
            style
        } else {
            StrokeStyle { fill: None, ..style }
        };

        Self {
            id: Uuid::new_v4(),
            geometry,
            style,
        }
    }

    /// A freehand path starting at `start`
    pub fn path(start: Pos2, style: StrokeStyle) -> Self {
        Self::new(Geometry::Path { points: vec![start] }, style)
    }

    /// A zero-sized rectangle anchored at `corner`
    pub fn rectangle(corner: Pos2, style: StrokeStyle) -> Self {
        Self::new(
            Geometry::Rectangle {
                rect: Rect::from_min_size(corner, Vec2::ZERO),
            },
            style,
        )
    }

    /// A zero-radius circle centered at `center`
    pub fn circle(center: Pos2, style: StrokeStyle) -> Self {
        Self::new(Geometry::Circle { center, radius: 0.0 }, style)
    }

    /// A zero-length line starting at `start`
    pub fn line(start: Pos2, style: StrokeStyle) -> Self {
        Self::new(Geometry::Line { start, end: start }, style)
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// Append a point to a path. Other kinds are left untouched.
    pub fn push_point(&mut self, point: Pos2) {
        if let Geometry::Path { points } = &mut self.geometry {
            points.push(point);
        }
    }

    /// Whether the painted area of this element lies within `tolerance`
    /// logical units of `pos`.
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        let reach = self.style.width / 2.0 + tolerance.max(0.0);
        let filled = self.style.fill.is_some();

        match &self.geometry {
            Geometry::Path { points } => geometry::distance_to_polyline(pos, points) <= reach,
            Geometry::Line { start, end } => {
                geometry::distance_to_segment(pos, *start, *end) <= reach
            }
            Geometry::Rectangle { rect } => {
                if filled && rect.contains(pos) {
                    return true;
                }
                let corners = [
                    rect.left_top(),
                    rect.right_top(),
                    rect.right_bottom(),
                    rect.left_bottom(),
                ];
                (0..4).any(|i| {
                    geometry::distance_to_segment(pos, corners[i], corners[(i + 1) % 4]) <= reach
                })
            }
            Geometry::Circle { center, radius } => {
                let distance = pos.distance(*center);
                (filled && distance <= *radius) || (distance - radius).abs() <= reach
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_open_shapes_drop_fill() {
        let style = StrokeStyle {
            fill: Some(Color32::RED),
            ..Default::default()
        };
        assert_eq!(Element::line(pos2(0.0, 0.0), style).style().fill, None);
        assert_eq!(Element::path(pos2(0.0, 0.0), style).style().fill, None);
        assert_eq!(Element::circle(pos2(0.0, 0.0), style).style().fill, Some(Color32::RED));
    }

    #[test]
    fn test_unfilled_rectangle_hits_outline_only() {
        let mut element = Element::rectangle(pos2(0.0, 0.0), StrokeStyle::default());
        element.set_geometry(Geometry::Rectangle {
            rect: Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 50.0)),
        });

        assert!(element.hit_test(pos2(50.0, 0.5), 0.0));
        assert!(!element.hit_test(pos2(50.0, 25.0), 0.0));
        assert!(element.hit_test(pos2(50.0, 25.0), 30.0));
    }

    #[test]
    fn test_circle_hit_test() {
        let mut element = Element::circle(pos2(0.0, 0.0), StrokeStyle::default());
        element.set_geometry(Geometry::Circle {
            center: pos2(0.0, 0.0),
            radius: 10.0,
        });

        assert!(element.hit_test(pos2(10.0, 0.0), 0.0));
        assert!(!element.hit_test(pos2(0.0, 0.0), 1.0));
    }

    #[test]
    fn test_path_accumulates_points() {
        let mut element = Element::path(pos2(0.0, 0.0), StrokeStyle::default());
        element.push_point(pos2(10.0, 0.0));
        element.push_point(pos2(10.0, 10.0));

        let Geometry::Path { points } = element.geometry() else {
            panic!("expected a path");
        };
        assert_eq!(points.len(), 3);
        assert!(element.hit_test(pos2(10.5, 5.0), 0.0));
        assert!(!element.hit_test(pos2(5.0, 5.0), 0.0));
    }
}
