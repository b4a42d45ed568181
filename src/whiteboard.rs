//! The whiteboard context: one document, one viewport, one history and the
//! active tool, wired to the gesture tracker.

use egui::{CursorIcon, Pos2, Rect};

use crate::command::{Command, CommandManager};
use crate::config::WhiteboardConfig;
use crate::document::{Document, Layer, LayerId};
use crate::element::StrokeStyle;
use crate::error::{ConfigError, SurfaceError};
use crate::input::{Gesture, GestureState, GestureTracker, InputEvent, Shortcut};
use crate::tools::{Tool, ToolContext, ToolKind, ToolType};
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ZoomRequest {
    screen: Pos2,
    factor: f32,
}

#[derive(Debug)]
pub struct Whiteboard {
    document: Document,
    viewport: Viewport,
    commands: CommandManager,
    gestures: GestureTracker,
    tool: ToolType,
    style: StrokeStyle,
    config: WhiteboardConfig,
    // Latest zoom request of the current frame
    pending_zoom: Option<ZoomRequest>,
}

impl Default for Whiteboard {
    fn default() -> Self {
        let config = WhiteboardConfig::default();
        Self {
            document: Document::new(),
            viewport: Viewport::default(),
            commands: CommandManager::new(),
            gestures: GestureTracker::new(config.pinch_threshold, config.zoom_sensitivity),
            tool: ToolType::default(),
            style: config.style,
            config,
            pending_zoom: None,
        }
    }
}

impl Whiteboard {
    pub fn new(config: WhiteboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            document: Document::new(),
            viewport: config.viewport()?,
            commands: CommandManager::new(),
            gestures: GestureTracker::new(config.pinch_threshold, config.zoom_sensitivity),
            tool: ToolType::default(),
            style: config.style,
            config,
            pending_zoom: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn commands(&self) -> &CommandManager {
        &self.commands
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    /// Route one input event: shortcuts first, then gestures to the tool
    pub fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::KeyDown { key, modifiers } = event {
            match Shortcut::from_key(*key, *modifiers) {
                Some(Shortcut::Undo) => self.undo(),
                Some(Shortcut::Redo) => self.redo(),
                None => {}
            }
            return;
        }

        let screen = self.document.screen_rect();
        let Some(gesture) = self.gestures.handle(event, &self.viewport, screen) else {
            return;
        };

        match gesture {
            Gesture::Start(point) => self.with_tool(|tool, ctx| tool.on_start(point, ctx)),
            Gesture::Move(point) => self.with_tool(|tool, ctx| tool.on_move(point, ctx)),
            Gesture::End => self.with_tool(|tool, ctx| tool.on_end(ctx)),
            Gesture::Cancel => self.with_tool(|tool, ctx| tool.on_cancel(ctx)),
            Gesture::Zoom { screen, factor } => self.request_zoom(screen, factor),
        }
    }

    fn with_tool(&mut self, f: impl FnOnce(&mut ToolType, &mut ToolContext<'_>)) {
        let erase_tolerance = self
            .viewport
            .screen_dist_to_logical(self.config.erase_radius, self.document.screen_rect());
        let layer = self.document.active_layer_id();
        let mut ctx = ToolContext {
            surface: &mut self.document,
            viewport: &mut self.viewport,
            commands: &mut self.commands,
            style: self.style,
            layer,
            erase_tolerance,
        };
        f(&mut self.tool, &mut ctx);
    }

    /// Queue a zoom around a screen point. Only the latest request before the
    /// next [`Whiteboard::flush_frame`] is applied.
    pub fn request_zoom(&mut self, screen: Pos2, factor: f32) {
        self.pending_zoom = Some(ZoomRequest { screen, factor });
    }

    pub fn has_pending_zoom(&self) -> bool {
        self.pending_zoom.is_some()
    }

    /// Apply the queued zoom, anchored at the logical point that is under the
    /// requested screen point right now.
    pub fn flush_frame(&mut self) {
        let Some(ZoomRequest { screen, factor }) = self.pending_zoom.take() else {
            return;
        };
        let Some(anchor) = self.viewport.to_logical(screen, self.document.screen_rect()) else {
            return;
        };
        self.viewport.zoom(anchor, factor);
        log::debug!(
            "Zoomed by {} around {:?}, scale now {}",
            factor,
            anchor,
            self.viewport.scale()
        );
    }

    /// Abort the gesture in progress, if any, leaving no trace of it
    pub fn cancel_gesture(&mut self) {
        if self.tool.is_active() {
            self.with_tool(|tool, ctx| tool.on_cancel(ctx));
        }
    }

    pub fn undo(&mut self) {
        self.cancel_gesture();
        self.commands.undo(&mut self.document);
    }

    pub fn redo(&mut self) {
        self.cancel_gesture();
        self.commands.redo(&mut self.document);
    }

    pub fn can_undo(&self) -> bool {
        self.commands.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.commands.can_redo()
    }

    /// Remove every element and forget the history
    pub fn clear_canvas(&mut self) {
        self.cancel_gesture();
        self.document.clear();
        self.commands.clear();
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    /// Switch tools. A gesture in progress with the old tool is cancelled.
    pub fn set_tool(&mut self, kind: ToolKind) {
        if self.tool.kind() == kind {
            return;
        }
        self.cancel_gesture();
        self.tool = ToolType::new(kind);
        log::info!("Tool changed to {}", kind.name());
    }

    /// Cursor to show over the canvas
    pub fn cursor(&self) -> CursorIcon {
        self.tool.kind().cursor(self.tool.is_active())
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Style for elements created from now on; existing elements keep theirs
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn screen_rect(&self) -> Rect {
        self.document.screen_rect()
    }

    pub fn set_screen_rect(&mut self, rect: Rect) {
        self.document.set_screen_rect(rect);
    }

    /// Replace the tunables. The current viewport is kept.
    pub fn apply_config(&mut self, config: WhiteboardConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.gestures.set_pinch_threshold(config.pinch_threshold);
        self.gestures.set_zoom_sensitivity(config.zoom_sensitivity);
        self.style = config.style;
        self.config = config;
        Ok(())
    }

    /// Return to the configured starting view
    pub fn reset_view(&mut self) -> Result<(), ConfigError> {
        self.viewport = self.config.viewport()?;
        self.pending_zoom = None;
        Ok(())
    }

    pub fn layers(&self) -> &[Layer] {
        self.document.layers()
    }

    pub fn add_layer(&mut self, name: &str) -> LayerId {
        self.document.add_layer(name)
    }

    /// Remove a layer and its elements as one undoable step
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        self.cancel_gesture();
        let Some((index, layer)) = self
            .document
            .layers()
            .iter()
            .enumerate()
            .find(|(_, layer)| layer.id() == id)
            .map(|(index, layer)| (index, layer.clone()))
        else {
            return false;
        };
        self.commands.execute(Command::RemoveLayer { layer, index }, &mut self.document);
        true
    }

    pub fn set_active_layer(&mut self, id: LayerId) -> Result<(), SurfaceError> {
        self.cancel_gesture();
        self.document.set_active_layer(id)
    }

    pub fn set_layer_visible(&mut self, id: LayerId, visible: bool) {
        self.document.set_layer_visible(id, visible);
    }
}
