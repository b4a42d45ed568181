use super::Command;
use crate::surface::Surface;

/// Linear undo/redo history over surface commands
#[derive(Debug, Default)]
pub struct CommandManager {
    /// Commands that can be undone, most recent last
    undo_stack: Vec<Command>,
    /// Commands that can be redone, most recent last
    redo_stack: Vec<Command>,
}

impl CommandManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command and add it to the history.
    ///
    /// A command the surface rejects is logged and dropped; the history is
    /// left as it was.
    pub fn execute(&mut self, command: Command, surface: &mut dyn Surface) {
        if let Err(err) = command.apply(surface) {
            log::warn!("{} failed, not recorded: {}", command.name(), err);
            return;
        }
        log::debug!("Executed {}", command.name());
        self.record(command);
    }

    /// Add a command whose effect is already on the surface
    pub fn record(&mut self, command: Command) {
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Revert the most recent command. Does nothing when there is none.
    pub fn undo(&mut self, surface: &mut dyn Surface) {
        let Some(command) = self.undo_stack.pop() else {
            return;
        };
        command.revert(surface);
        log::debug!("Undid {}", command.name());
        self.redo_stack.push(command);
    }

    /// Re-apply the most recently undone command. Does nothing when there is none.
    pub fn redo(&mut self, surface: &mut dyn Surface) {
        let Some(command) = self.redo_stack.pop() else {
            return;
        };
        match command.apply(surface) {
            Ok(()) => {
                log::debug!("Redid {}", command.name());
                self.undo_stack.push(command);
            }
            Err(err) => log::warn!("Redo of {} failed, dropping it: {}", command.name(), err),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Forget all history. The surface is not touched.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        log::info!("Command history cleared");
    }
}
