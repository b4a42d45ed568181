#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layer;
pub mod panels;
pub mod renderer;
pub mod surface;
pub mod tools;
pub mod viewport;
pub mod whiteboard;

pub use app::WhiteboardApp;
pub use command::{Command, CommandManager, EraseCommand};
pub use config::WhiteboardConfig;
pub use document::Document;
pub use element::{Element, ElementId, ElementKind, Geometry, StrokeStyle};
pub use error::{ConfigError, SurfaceError, ViewportError};
pub use input::{Gesture, GestureTracker, InputEvent, InputHandler, Shortcut};
pub use renderer::Renderer;
pub use surface::{Placement, Surface};
pub use tools::{Tool, ToolKind, ToolType};
pub use viewport::Viewport;
pub use whiteboard::Whiteboard;
