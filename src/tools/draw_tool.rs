use egui::Pos2;

use super::{Tool, ToolContext, ToolKind};
use crate::command::Command;
use crate::element::Element;

/// Freehand drawing
#[derive(Debug, Clone, Default)]
pub struct DrawTool {
    // The stroke being drawn, if any
    current: Option<Element>,
}

impl DrawTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for DrawTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Draw
    }

    fn on_start(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        let stroke = Element::path(point, ctx.style);
        ctx.surface.set_preview(Some(stroke.clone()));
        self.current = Some(stroke);
    }

    fn on_move(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        if let Some(stroke) = &mut self.current {
            stroke.push_point(point);
            ctx.surface.set_preview(Some(stroke.clone()));
        }
    }

    fn on_end(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(element) = self.current.take() else {
            return;
        };
        ctx.surface.set_preview(None);

        match ctx.layer {
            Some(parent) => {
                ctx.commands.execute(Command::Draw { element, parent }, &mut *ctx.surface)
            }
            None => log::warn!("No active layer, stroke discarded"),
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
