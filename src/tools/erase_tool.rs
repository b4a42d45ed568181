use egui::Pos2;

use super::{Tool, ToolContext, ToolKind};
use crate::command::{Command, EraseCommand};

/// Removes every element under the pointer while dragging. The whole drag is
/// recorded as a single erase command.
#[derive(Debug, Clone, Default)]
pub struct EraseTool {
    pending: Option<EraseCommand>,
}

impl EraseTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn erase_at(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        let Some(pending) = &mut self.pending else {
            return;
        };
        let hits = ctx.surface.elements_at_point(point, ctx.erase_tolerance);
        if hits.is_empty() {
            return;
        }
        let removed = pending.erase_now(&mut *ctx.surface, &hits);
        log::debug!("Erased {} element(s) at {:?}", removed, point);
    }

    /// Record what the current drag removed, if anything
    fn commit(&mut self, ctx: &mut ToolContext<'_>) {
        let Some(erase) = self.pending.take() else {
            return;
        };
        if !erase.is_empty() {
            ctx.commands.record(Command::Erase(erase));
        }
    }
}

impl Tool for EraseTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Erase
    }

    fn on_start(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        self.commit(ctx);
        self.pending = Some(EraseCommand::new());
        self.erase_at(point, ctx);
    }

    fn on_move(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        self.erase_at(point, ctx);
    }

    fn on_end(&mut self, ctx: &mut ToolContext<'_>) {
        self.commit(ctx);
    }

    fn on_cancel(&mut self, ctx: &mut ToolContext<'_>) {
        if let Some(erase) = self.pending.take() {
            Command::Erase(erase).revert(&mut *ctx.surface);
        }
    }

    fn is_active(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandManager;
    use crate::document::Document;
    use crate::element::{Element, StrokeStyle};
    use crate::surface::{Placement, Surface};
    use crate::viewport::Viewport;
    use egui::pos2;

    #[test]
    fn test_miss_records_nothing() {
        let mut doc = Document::new();
        let mut viewport = Viewport::default();
        let mut commands = CommandManager::new();
        let mut tool = EraseTool::new();
        let mut ctx = ToolContext {
            surface: &mut doc,
            viewport: &mut viewport,
            commands: &mut commands,
            style: StrokeStyle::default(),
            layer: None,
            erase_tolerance: 1.0,
        };

        tool.on_start(pos2(10.0, 10.0), &mut ctx);
        tool.on_end(&mut ctx);
        assert!(!commands.can_undo());
    }

    #[test]
    fn test_cancel_restores_removed_elements() {
        let mut doc = Document::new();
        let layer = doc.active_layer_id().unwrap();
        let a = Element::path(pos2(0.0, 0.0), StrokeStyle::default());
        let b = Element::path(pos2(50.0, 0.0), StrokeStyle::default());
        let ids = vec![a.id(), b.id()];
        doc.insert(a, Placement::append(layer)).unwrap();
        doc.insert(b, Placement::append(layer)).unwrap();

        let mut viewport = Viewport::default();
        let mut commands = CommandManager::new();
        let mut tool = EraseTool::new();
        let mut ctx = ToolContext {
            surface: &mut doc,
            viewport: &mut viewport,
            commands: &mut commands,
            style: StrokeStyle::default(),
            layer: Some(layer),
            erase_tolerance: 1.0,
        };

        tool.on_start(pos2(0.0, 0.0), &mut ctx);
        tool.on_move(pos2(50.0, 0.0), &mut ctx);
        tool.on_cancel(&mut ctx);

        assert_eq!(doc.element_ids(), ids);
        assert!(!commands.can_undo());
    }

    #[test]
    fn test_restart_keeps_earlier_removals_undoable() {
        let mut doc = Document::new();
        let layer = doc.active_layer_id().unwrap();
        let a = Element::path(pos2(0.0, 0.0), StrokeStyle::default());
        let a_id = a.id();
        doc.insert(a, Placement::append(layer)).unwrap();

        let mut viewport = Viewport::default();
        let mut commands = CommandManager::new();
        let mut tool = EraseTool::new();
        let mut ctx = ToolContext {
            surface: &mut doc,
            viewport: &mut viewport,
            commands: &mut commands,
            style: StrokeStyle::default(),
            layer: Some(layer),
            erase_tolerance: 1.0,
        };

        tool.on_start(pos2(0.0, 0.0), &mut ctx);
        tool.on_start(pos2(500.0, 500.0), &mut ctx);
        tool.on_end(&mut ctx);
        assert!(doc.is_empty());
        assert_eq!(commands.undo_stack().len(), 1);

        commands.undo(&mut doc);
        assert_eq!(doc.element_ids(), vec![a_id]);
    }
}
