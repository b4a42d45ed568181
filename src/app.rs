use crate::config::WhiteboardConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::tools::ToolKind;
use crate::whiteboard::Whiteboard;

/// We derive Deserialize/Serialize so settings survive a restart. Drawings
/// themselves are not persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct WhiteboardApp {
    config: WhiteboardConfig,
    tool: ToolKind,
    #[serde(skip)]
    whiteboard: Whiteboard,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let saved: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(saved.config, saved.tool)
    }

    /// Build an app from settings, falling back to defaults if they are invalid
    pub fn with_settings(config: WhiteboardConfig, tool: ToolKind) -> Self {
        let mut whiteboard = match Whiteboard::new(config.clone()) {
            Ok(whiteboard) => whiteboard,
            Err(err) => {
                log::warn!("Ignoring saved settings: {}", err);
                Whiteboard::default()
            }
        };
        whiteboard.set_tool(tool);

        Self {
            config: whiteboard.config().clone(),
            tool,
            whiteboard,
            renderer: Renderer::new(),
            input: InputHandler::new(),
        }
    }

    pub fn whiteboard(&self) -> &Whiteboard {
        &self.whiteboard
    }

    pub fn whiteboard_mut(&mut self) -> &mut Whiteboard {
        &mut self.whiteboard
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Feed this frame's input to the whiteboard and apply any pending zoom.
    /// `canvas_rect` is where the canvas sits on screen this frame.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.whiteboard.set_screen_rect(canvas_rect);
        self.input.set_canvas_rect(canvas_rect);

        for event in self.input.process_input(ctx) {
            self.whiteboard.handle_event(&event);
        }
        self.whiteboard.flush_frame();
    }
}

impl eframe::App for WhiteboardApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config = WhiteboardConfig {
            style: self.whiteboard.style(),
            ..self.whiteboard.config().clone()
        };
        self.tool = self.whiteboard.tool_kind();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
