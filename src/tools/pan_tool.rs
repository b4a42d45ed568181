use egui::Pos2;

use super::{Tool, ToolContext, ToolKind};

/// Drags the viewport so the grabbed logical point stays under the pointer
#[derive(Debug, Clone, Default)]
pub struct PanTool {
    grab: Option<Pos2>,
}

impl PanTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for PanTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pan
    }

    fn on_start(&mut self, point: Pos2, _ctx: &mut ToolContext<'_>) {
        self.grab = Some(point);
    }

    fn on_move(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        // `point` is mapped through the already panned viewport, so the
        // offset from the grab point is the remaining correction.
        if let Some(grab) = self.grab {
            ctx.viewport.pan(grab - point);
        }
    }

    fn on_end(&mut self, _ctx: &mut ToolContext<'_>) {
        self.grab = None;
    }

    fn on_cancel(&mut self, _ctx: &mut ToolContext<'_>) {
        self.grab = None;
    }

    fn is_active(&self) -> bool {
        self.grab.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandManager;
    use crate::document::Document;
    use crate::element::StrokeStyle;
    use crate::viewport::Viewport;
    use egui::{pos2, Rect};

    #[test]
    fn test_grabbed_point_stays_under_pointer() {
        let mut doc = Document::new();
        let mut viewport = Viewport::default();
        let mut commands = CommandManager::new();
        let screen = Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0));
        let mut tool = PanTool::new();

        let grab = viewport.to_logical(pos2(100.0, 100.0), screen).unwrap();
        let mut ctx = ToolContext {
            surface: &mut doc,
            viewport: &mut viewport,
            commands: &mut commands,
            style: StrokeStyle::default(),
            layer: None,
            erase_tolerance: 1.0,
        };
        tool.on_start(grab, &mut ctx);
        for screen_pos in [pos2(150.0, 120.0), pos2(200.0, 140.0)] {
            let point = ctx.viewport.to_logical(screen_pos, screen).unwrap();
            tool.on_move(point, &mut ctx);
            let under = ctx.viewport.to_logical(screen_pos, screen).unwrap();
            assert!((under - grab).length() < 1e-3);
        }
        tool.on_end(&mut ctx);

        assert_eq!(viewport.x(), -100.0);
        assert_eq!(viewport.y(), -40.0);
        assert!(commands.undo_stack().is_empty());
    }
}
