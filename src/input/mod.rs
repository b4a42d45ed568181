use egui::{Key, Modifiers, Pos2};

mod egui_input;
pub mod gestures;
mod state;

pub use egui_input::InputHandler;
pub use gestures::{Gesture, GestureState, GestureTracker};
pub use state::{TouchPhase, TouchState};

/// Device-independent input events, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed or a single finger touched down
    PointerDown { pos: Pos2 },
    /// Pointer moved, with or without a button held
    PointerMove { pos: Pos2 },
    /// Primary button released or the finger lifted
    PointerUp { pos: Pos2 },
    /// Pointer left the drawing surface
    PointerLeave,
    /// A touch began; `touches` holds every active touch point
    TouchStart { touches: Vec<Pos2> },
    /// Active touches moved
    TouchMove { touches: Vec<Pos2> },
    /// A touch ended; `touches` holds the ones still down
    TouchEnd { touches: Vec<Pos2> },
    /// Scroll wheel; positive `delta_y` scrolls down (zooms out)
    Wheel { pos: Pos2, delta_y: f32 },
    /// Trackpad pinch; `magnify > 1` enlarges the content under `pos`
    Magnify { pos: Pos2, magnify: f32 },
    KeyDown { key: Key, modifiers: Modifiers },
}

/// History shortcuts recognised on key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    /// Ctrl/Cmd+Z undoes; Ctrl/Cmd+Shift+Z and Ctrl/Cmd+Y redo.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        let command = modifiers.ctrl || modifiers.mac_cmd || modifiers.command;
        if !command {
            return None;
        }

        match key {
            Key::Z if modifiers.shift => Some(Self::Redo),
            Key::Z => Some(Self::Undo),
            Key::Y => Some(Self::Redo),
            _ => None,
        }
    }
}
