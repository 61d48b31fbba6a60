use core::iter::Enumerate;
use core::str::Lines;

use rovers_core::{Grid, InputError, Location, RoverPlan, RoverSource};

use crate::parser::{parse_command_line, parse_grid_line, parse_rover_line};

/// A complete rover description, validated block by block on demand.
///
/// Layout:
///
/// ```text
/// <width> <height>
/// <x> <y> <orientation>
/// <commands>
/// ...
/// ```
///
/// The grid must be on the first line. Blank lines between rover blocks are
/// skipped, but the line directly after a rover declaration is always that
/// rover's command line, so a blank one there means "no commands".
///
/// A rover with no commands therefore needs that blank line:
/// `"5 5\n1 2 N\n\n"` leaves the rover at `1 2 N`, while `"5 5\n1 2 N\n"`
/// ends before any command line and fails with `ROV_INPUT_007`.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Enumerate<Lines<'a>>,
    rovers: usize,
}

impl<'a> Document<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            rovers: 0,
        }
    }

    fn block(&mut self, id: usize, line_number: usize, line: &str) -> Result<RoverPlan, InputError> {
        let declaration = parse_rover_line(line, line_number, id)?;
        let Some((index, command_line)) = self.lines.next() else {
            return Err(InputError::missing_commands(
                id,
                Location::new(line_number + 1, 1),
            ));
        };
        let commands = parse_command_line(command_line, index + 1, id)?;
        Ok(RoverPlan {
            id,
            position: declaration.position,
            orientation: declaration.orientation,
            commands,
            location: declaration.location,
        })
    }
}

impl RoverSource for Document<'_> {
    fn grid(&mut self) -> Result<Grid, InputError> {
        match self.lines.next() {
            Some((index, line)) if !line.trim().is_empty() => parse_grid_line(line, index + 1),
            _ => Err(InputError::missing_grid()),
        }
    }

    fn next_rover(&mut self) -> Option<Result<RoverPlan, InputError>> {
        let (index, line) = self.lines.find(|(_, line)| !line.trim().is_empty())?;
        self.rovers += 1;
        let id = self.rovers;
        Some(self.block(id, index + 1, line))
    }
}

#[cfg(test)]
mod tests {
    use rovers_core::{Command, ErrorCode, Orientation, Position};

    use super::*;

    #[test]
    fn test_blocks_in_order() {
        let mut doc = Document::new("5 5\n1 2 N\nLM\n\n3 3 E\nR\n");
        assert_eq!(doc.grid().unwrap(), Grid::new(5, 5));

        let first = doc.next_rover().unwrap().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.position, Position::new(1, 2));
        assert_eq!(first.commands, [Command::Left, Command::Move]);
        assert_eq!(first.location, Location::new(2, 1));

        let second = doc.next_rover().unwrap().unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(second.orientation, Orientation::East);
        assert_eq!(second.location.line, 5);

        assert!(doc.next_rover().is_none());
    }

    #[test]
    fn test_blank_command_line_is_empty_commands() {
        let mut doc = Document::new("5 5\n1 2 N\n\n");
        doc.grid().unwrap();
        let plan = doc.next_rover().unwrap().unwrap();
        assert!(plan.commands.is_empty());
        assert!(doc.next_rover().is_none());
    }

    #[test]
    fn test_missing_command_line() {
        let mut doc = Document::new("5 5\n1 2 N");
        doc.grid().unwrap();
        let err = doc.next_rover().unwrap().unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingCommands);
        assert_eq!(err.arguments(), ["1"]);
        assert_eq!(err.location, Location::new(3, 1));
    }

    #[test]
    fn test_trailing_newline_is_not_an_empty_command_line() {
        let mut doc = Document::new("5 5\n1 2 N\n");
        doc.grid().unwrap();
        let err = doc.next_rover().unwrap().unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingCommands);

        let mut doc = Document::new("5 5\n1 2 N\n\n");
        doc.grid().unwrap();
        assert!(doc.next_rover().unwrap().unwrap().commands.is_empty());
    }

    #[test]
    fn test_missing_grid() {
        for input in ["", "\n5 5\n", "   \n"] {
            let err = Document::new(input).grid().unwrap_err();
            assert_eq!(err.code(), ErrorCode::MissingGrid, "{input:?}");
        }
    }

    #[test]
    fn test_later_block_is_not_validated_early() {
        let mut doc = Document::new("5 5\n1 2 N\nM\nbad line here\n");
        doc.grid().unwrap();
        assert!(doc.next_rover().unwrap().is_ok());
        let err = doc.next_rover().unwrap().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCoordinate);
        assert_eq!(err.arguments(), ["bad", "2", "1"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut doc = Document::new("5 5\r\n1 2 N\r\nLMLMLMLMM\r\n");
        assert_eq!(doc.grid().unwrap(), Grid::new(5, 5));
        let plan = doc.next_rover().unwrap().unwrap();
        assert_eq!(plan.commands.len(), 9);
    }
}
