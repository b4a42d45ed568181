mod commands;
mod history;

pub use commands::{Command, EraseCommand};
pub use history::CommandManager;
