use egui::{Pos2, Rect};

use super::{Tool, ToolContext, ToolKind};
use crate::command::Command;
use crate::element::{Element, Geometry, StrokeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Line => "line",
        }
    }

    /// Zero-sized element anchored at `origin`
    fn start(self, origin: Pos2, style: StrokeStyle) -> Element {
        match self {
            Self::Rectangle => Element::rectangle(origin, style),
            Self::Circle => Element::circle(origin, style),
            Self::Line => Element::line(origin, style),
        }
    }

    /// Geometry for a drag from `origin` to `current`
    pub fn geometry(self, origin: Pos2, current: Pos2) -> Geometry {
        match self {
            Self::Rectangle => Geometry::Rectangle {
                rect: Rect::from_two_pos(origin, current),
            },
            Self::Circle => Geometry::Circle {
                center: origin,
                radius: origin.distance(current),
            },
            Self::Line => Geometry::Line {
                start: origin,
                end: current,
            },
        }
    }
}

/// Rubber-band tool for rectangles, circles and lines
#[derive(Debug, Clone)]
pub struct ShapeTool {
    shape: ShapeKind,
    origin: Pos2,
    current: Option<Element>,
}

impl ShapeTool {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            origin: Pos2::ZERO,
            current: None,
        }
    }
}

impl Tool for ShapeTool {
    fn kind(&self) -> ToolKind {
        match self.shape {
            ShapeKind::Rectangle => ToolKind::Rectangle,
            ShapeKind::Circle => ToolKind::Circle,
            ShapeKind::Line => ToolKind::Line,
        }
    }

    fn on_start(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        let element = self.shape.start(point, ctx.style);
        ctx.surface.set_preview(Some(element.clone()));
        self.origin = point;
        self.current = Some(element);
    }

    fn on_move(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        if let Some(element) = &mut self.current {
            element.set_geometry(self.shape.geometry(self.origin, point));
            ctx.surface.set_preview(Some(element.clone()));
        }
    }

    fn on_end(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(element) = self.current.take() else {
            return;
        };
        ctx.surface.set_preview(None);

        match ctx.layer {
            Some(parent) => {
                ctx.commands.execute(Command::Shape { element, parent }, &mut *ctx.surface)
            }
            None => log::warn!("No active layer, {} discarded", self.shape.name()),
        }
    }

    fn on_cancel(&mut self, ctx: &mut ToolContext<'_>) {
        if self.current.take().is_some() {
            ctx.surface.set_preview(None);
        }
    }

    fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
