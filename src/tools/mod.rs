use egui::{CursorIcon, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::CommandManager;
use crate::document::LayerId;
use crate::element::StrokeStyle;
use crate::surface::Surface;
use crate::viewport::Viewport;

mod draw_tool;
mod erase_tool;
mod pan_tool;
mod shape_tool;

pub use draw_tool::DrawTool;
pub use erase_tool::EraseTool;
pub use pan_tool::PanTool;
pub use shape_tool::{ShapeKind, ShapeTool};

/// Everything a tool may touch while handling a gesture
pub struct ToolContext<'a> {
    pub surface: &'a mut dyn Surface,
    pub viewport: &'a mut Viewport,
    pub commands: &'a mut CommandManager,
    /// Style for newly created elements
    pub style: StrokeStyle,
    /// Layer new elements go into; `None` when the document has no layers
    pub layer: Option<LayerId>,
    /// Erase hit tolerance in logical units
    pub erase_tolerance: f32,
}

/// Gesture handlers shared by every tool.
///
/// Points are in logical coordinates. `on_cancel` must leave the surface and
/// the history as they were before `on_start`.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    fn on_start(&mut self, point: Pos2, ctx: &mut ToolContext<'_>);

    fn on_move(&mut self, point: Pos2, ctx: &mut ToolContext<'_>);

    fn on_end(&mut self, ctx: &mut ToolContext<'_>);

    fn on_cancel(&mut self, ctx: &mut ToolContext<'_>);

    /// Whether a gesture is in progress
    fn is_active(&self) -> bool;
}

/// The selectable tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Draw,
    Pan,
    Erase,
    Rectangle,
    Circle,
    Line,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Draw,
        ToolKind::Pan,
        ToolKind::Erase,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Pan => "Pan",
            Self::Erase => "Erase",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Line => "Line",
        }
    }

    /// Cursor shown over the canvas while this tool is selected
    pub fn cursor(self, active: bool) -> CursorIcon {
        match self {
            Self::Pan if active => CursorIcon::Grabbing,
            Self::Pan => CursorIcon::Grab,
            Self::Erase => CursorIcon::PointingHand,
            Self::Draw | Self::Rectangle | Self::Circle | Self::Line => CursorIcon::Crosshair,
        }
    }
}

/// All tool implementations, dispatched without boxing
#[derive(Debug, Clone)]
pub enum ToolType {
    Draw(DrawTool),
    Pan(PanTool),
    Erase(EraseTool),
    Shape(ShapeTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Draw => Self::Draw(DrawTool::new()),
            ToolKind::Pan => Self::Pan(PanTool::new()),
            ToolKind::Erase => Self::Erase(EraseTool::new()),
            ToolKind::Rectangle => Self::Shape(ShapeTool::new(ShapeKind::Rectangle)),
            ToolKind::Circle => Self::Shape(ShapeTool::new(ShapeKind::Circle)),
            ToolKind::Line => Self::Shape(ShapeTool::new(ShapeKind::Line)),
        }
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::new(ToolKind::default())
    }
}

impl Tool for ToolType {
    fn kind(&self) -> ToolKind {
        match self {
            Self::Draw(tool) => tool.kind(),
            Self::Pan(tool) => tool.kind(),
            Self::Erase(tool) => tool.kind(),
            Self::Shape(tool) => tool.kind(),
        }
    }

    fn on_start(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Draw(tool) => tool.on_start(point, ctx),
            Self::Pan(tool) => tool.on_start(point, ctx),
            Self::Erase(tool) => tool.on_start(point, ctx),
            Self::Shape(tool) => tool.on_start(point, ctx),
        }
    }

    fn on_move(&mut self, point: Pos2, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Draw(tool) => tool.on_move(point, ctx),
            Self::Pan(tool) => tool.on_move(point, ctx),
            Self::Erase(tool) => tool.on_move(point, ctx),
            Self::Shape(tool) => tool.on_move(point, ctx),
        }
    }

    fn on_end(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Draw(tool) => tool.on_end(ctx),
            Self::Pan(tool) => tool.on_end(ctx),
            Self::Erase(tool) => tool.on_end(ctx),
            Self::Shape(tool) => tool.on_end(ctx),
        }
    }

    fn on_cancel(&mut self, ctx: &mut ToolContext<'_>) {
        match self {
            Self::Draw(tool) => tool.on_cancel(ctx),
            Self::Pan(tool) => tool.on_cancel(ctx),
            Self::Erase(tool) => tool.on_cancel(ctx),
            Self::Shape(tool) => tool.on_cancel(ctx),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            Self::Draw(tool) => tool.is_active(),
            Self::Pan(tool) => tool.is_active(),
            Self::Erase(tool) => tool.is_active(),
            Self::Shape(tool) => tool.is_active(),
        }
    }
}
