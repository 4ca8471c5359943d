//! Stdin commands from the terminal view to the rotation controller.

use std::str::FromStr;

use rotation_core::Carousel;
use shared::domain::SlideDescriptor;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    Next,
    Previous,
    GoTo(usize),
    Status,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command; try next, prev, goto <index>, status or quit")]
    Empty,
    #[error("unknown command '{0}'; try next, prev, goto <index>, status or quit")]
    Unknown(String),
    #[error("goto needs a slide index, e.g. 'goto 2'")]
    MissingIndex,
    #[error("'{0}' is not a slide index")]
    InvalidIndex(String),
}

impl FromStr for ViewCommand {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(ParseCommandError::Empty);
        };
        match verb.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "prev" | "previous" | "p" => Ok(Self::Previous),
            "status" | "s" => Ok(Self::Status),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "goto" | "g" => {
                let raw = parts.next().ok_or(ParseCommandError::MissingIndex)?;
                raw.parse::<usize>()
                    .map(Self::GoTo)
                    .map_err(|_| ParseCommandError::InvalidIndex(raw.to_string()))
            }
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// Applies a navigation command. Returns whether the controller accepted it;
/// `Status` and `Quit` are handled by the view loop and always return false.
pub fn dispatch_view_command(carousel: &Carousel<SlideDescriptor>, cmd: ViewCommand) -> bool {
    let (cmd_name, accepted) = match cmd {
        ViewCommand::Next => ("next", carousel.next()),
        ViewCommand::Previous => ("previous", carousel.previous()),
        ViewCommand::GoTo(index) => ("go_to", carousel.go_to(index)),
        ViewCommand::Status | ViewCommand::Quit => return false,
    };
    tracing::debug!(command = cmd_name, accepted, "dispatched view command");
    accepted
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
