use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::document::Document;
use crate::element::{Element, Geometry};
use crate::viewport::Viewport;

/// Paints a document through a viewport with the egui painter
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the visible layers, then the in-progress preview on top.
    /// `rect` is the canvas rectangle on screen.
    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document, viewport: &Viewport) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);

        for element in document.visible_elements() {
            painter.extend(element_shapes(element, viewport, rect));
        }
        if let Some(preview) = document.preview() {
            painter.extend(element_shapes(preview, viewport, rect));
        }
    }
}

/// Screen-space shapes for one element. Elements whose coordinates cannot be
/// mapped produce nothing.
pub fn element_shapes(element: &Element, viewport: &Viewport, screen: Rect) -> Vec<Shape> {
    let style = element.style();
    let stroke = Stroke::new(viewport.logical_dist_to_screen(style.width, screen), style.color);
    let to_screen = |point: Pos2| viewport.to_screen(point, screen);

    let mut shapes = Vec::new();
    match element.geometry() {
        Geometry::Path { points } => {
            let points: Option<Vec<_>> = points.iter().map(|p| to_screen(*p)).collect();
            let Some(points) = points else {
                return shapes;
            };
            match points.as_slice() {
                [] => {}
                [dot] => shapes.push(Shape::circle_filled(*dot, stroke.width / 2.0, stroke.color)),
                _ => shapes.push(Shape::line(points, stroke)),
            }
        }
        Geometry::Rectangle { rect } => {
            let (Some(min), Some(max)) = (to_screen(rect.min), to_screen(rect.max)) else {
                return shapes;
            };
            let rect = Rect::from_min_max(min, max);
            if let Some(fill) = style.fill {
                shapes.push(Shape::rect_filled(rect, 0.0, fill));
            }
            shapes.push(Shape::rect_stroke(rect, 0.0, stroke));
        }
        Geometry::Circle { center, radius } => {
            let Some(center) = to_screen(*center) else {
                return shapes;
            };
            let radius = viewport.logical_dist_to_screen(*radius, screen);
            if let Some(fill) = style.fill {
                shapes.push(Shape::circle_filled(center, radius, fill));
            }
            shapes.push(Shape::circle_stroke(center, radius, stroke));
        }
        Geometry::Line { start, end } => {
            let (Some(start), Some(end)) = (to_screen(*start), to_screen(*end)) else {
                return shapes;
            };
            shapes.push(Shape::line_segment([start, end], stroke));
        }
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::StrokeStyle;
    use crate::surface::{Placement, Surface};
    use egui::pos2;

    fn screen() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    fn bounds(shapes: &[Shape]) -> Rect {
        shapes
            .iter()
            .fold(Rect::NOTHING, |acc, shape| acc.union(shape.visual_bounding_rect()))
    }

    #[test]
    fn test_line_scales_with_zoom() {
        let mut line = Element::line(pos2(0.0, 0.0), StrokeStyle::default());
        line.set_geometry(Geometry::Line {
            start: pos2(0.0, 0.0),
            end: pos2(100.0, 0.0),
        });
        let mut viewport = Viewport::default();
        viewport.zoom(pos2(0.0, 0.0), 0.5);

        let shapes = element_shapes(&line, &viewport, screen());
        assert_eq!(shapes.len(), 1);
        assert!((bounds(&shapes).max.x - 202.0).abs() < 0.01);
    }

    #[test]
    fn test_filled_circle_has_fill_and_outline() {
        let style = StrokeStyle {
            fill: Some(Color32::RED),
            ..Default::default()
        };
        let circle = Element::circle(pos2(10.0, 10.0), style);
        assert_eq!(element_shapes(&circle, &Viewport::default(), screen()).len(), 2);
    }

    #[test]
    fn test_render_basics() {
        let renderer = Renderer::new();
        let mut document = Document::new();
        let layer = document.active_layer_id().unwrap();
        document
            .insert(Element::path(pos2(5.0, 5.0), StrokeStyle::default()), Placement::append(layer))
            .unwrap();
        document.set_preview(Some(Element::line(pos2(1.0, 1.0), StrokeStyle::default())));

        let ctx = egui::Context::default();
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), screen());
        renderer.render(&painter, screen(), &document, &Viewport::default());
    }
}
