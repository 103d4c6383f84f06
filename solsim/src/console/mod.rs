//! Text menu around the driver
//!
//! The console reads one command per line, dispatches on its first letter
//! and prints a one-line result after every command.

pub mod input;
pub mod repl;

pub use input::{parse_int, InputError};
pub use repl::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Status,
    Quit,
}

impl Command {
    /// Trimmed, case-insensitive, first letter decides; `None` for anything
    /// off the menu
    pub fn parse(line: &str) -> Option<Self> {
        let first = line.trim().chars().next()?.to_ascii_lowercase();
        match first {
            's' => Some(Command::Start),
            'p' => Some(Command::Pause),
            'r' => Some(Command::Resume),
            'g' => Some(Command::Status),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}
