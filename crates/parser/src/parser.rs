//! Winnow-based validators for the rover description grammar.
//!
//! Grammar, one line at a time:
//! ```text
//! grid_line    = natural WS natural
//! rover_line   = natural WS natural WS orientation
//! command_line = command*
//! natural      = DIGIT+                  -- fits in u32
//! orientation  = "N" | "E" | "S" | "W"
//! command      = "L" | "R" | "M"
//! ```
//!
//! Fields are split by the lexer and checked left to right; the first field
//! that fails becomes the reported [`InputError`].

use rovers_core::{Command, Grid, InputError, Location, Orientation, Position};
use winnow::ascii::digit1;
use winnow::prelude::*;
use winnow::token::any;
use winnow::ModalResult;

use crate::lexer::{fields, Field};

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// A non-negative base-10 integer. Signs are not accepted; leading zeros are.
fn natural(input: &mut &str) -> ModalResult<u32> {
    digit1.try_map(str::parse::<u32>).parse_next(input)
}

fn orientation(input: &mut &str) -> ModalResult<Orientation> {
    any.verify_map(Orientation::from_letter).parse_next(input)
}

fn command(input: &mut &str) -> ModalResult<Command> {
    any.verify_map(Command::from_letter).parse_next(input)
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

/// A validated rover declaration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoverDeclaration {
    pub position: Position,
    pub orientation: Orientation,
    /// Location of the first field.
    pub location: Location,
}

/// Walks the fields of one line, reporting absent and surplus fields.
struct FieldCursor<'a> {
    line: &'a str,
    line_number: usize,
    fields: std::vec::IntoIter<Field<'a>>,
}

impl<'a> FieldCursor<'a> {
    fn new(line: &'a str, line_number: usize) -> Self {
        Self {
            line,
            line_number,
            fields: fields(line).into_iter(),
        }
    }

    fn location(&self, field: Field<'_>) -> Location {
        Location::new(self.line_number, field.column)
    }

    fn end_column(&self) -> usize {
        self.line.trim_end().chars().count() + 1
    }

    /// The next field, or a `ROV_INPUT_005` error naming it.
    fn require(&mut self, name: &str) -> Result<Field<'a>, InputError> {
        self.fields.next().ok_or_else(|| {
            InputError::missing_field(name, Location::new(self.line_number, self.end_column()))
        })
    }

    /// The next field, or an empty one just past the end of the line.
    ///
    /// Numeric fields use this so that an absent value fails the same way as
    /// a malformed one.
    fn next_or_empty(&mut self) -> Field<'a> {
        let column = self.end_column();
        self.fields.next().unwrap_or(Field { text: "", column })
    }

    /// Fail with `ROV_INPUT_006` if any field is left.
    fn finish(mut self) -> Result<(), InputError> {
        match self.fields.next() {
            Some(extra) => Err(InputError::unexpected_field(
                extra.text,
                self.location(extra),
            )),
            None => Ok(()),
        }
    }
}

/// Validate the grid line (`<width> <height>`).
///
/// # Errors
///
/// `ROV_INPUT_001` for a dimension that is missing or not a non-negative
/// integer, and `ROV_INPUT_006` for extra fields.
pub fn parse_grid_line(line: &str, line_number: usize) -> Result<Grid, InputError> {
    let mut cursor = FieldCursor::new(line, line_number);
    let width = grid_dimension(cursor.next_or_empty(), 1, line_number)?;
    let height = grid_dimension(cursor.next_or_empty(), 2, line_number)?;
    cursor.finish()?;
    Ok(Grid::new(width, height))
}

fn grid_dimension(f: Field<'_>, field: usize, line_number: usize) -> Result<u32, InputError> {
    natural.parse(f.text).map_err(|_| {
        InputError::invalid_grid_size(f.text, field, Location::new(line_number, f.column))
    })
}

/// Validate the declaration line of rover number `rover` (`<x> <y> <orientation>`).
///
/// # Errors
///
/// `ROV_INPUT_003` for a missing or bad coordinate, `ROV_INPUT_002` for a bad
/// orientation, `ROV_INPUT_005` for a missing orientation and `ROV_INPUT_006`
/// for extra fields.
pub fn parse_rover_line(
    line: &str,
    line_number: usize,
    rover: usize,
) -> Result<RoverDeclaration, InputError> {
    let mut cursor = FieldCursor::new(line, line_number);

    let x_field = cursor.next_or_empty();
    let location = cursor.location(x_field);
    let x = coordinate(x_field, rover, 1, line_number)?;
    let y = coordinate(cursor.next_or_empty(), rover, 2, line_number)?;

    let o_field = cursor.require("orientation")?;
    let orientation = orientation
        .parse(o_field.text)
        .map_err(|_| InputError::invalid_orientation(o_field.text, rover, cursor.location(o_field)))?;

    cursor.finish()?;
    Ok(RoverDeclaration {
        position: Position::new(x, y),
        orientation,
        location,
    })
}

fn coordinate(
    f: Field<'_>,
    rover: usize,
    field: usize,
    line_number: usize,
) -> Result<u32, InputError> {
    natural.parse(f.text).map_err(|_| {
        InputError::invalid_coordinate(f.text, rover, field, Location::new(line_number, f.column))
    })
}

/// Validate the command line of rover number `rover`.
///
/// A blank line is an empty command string.
///
/// # Errors
///
/// `ROV_INPUT_004` naming the first character outside `{L, R, M}` and its
/// 1-based index, or `ROV_INPUT_006` if the commands are split by whitespace.
pub fn parse_command_line(
    line: &str,
    line_number: usize,
    rover: usize,
) -> Result<Vec<Command>, InputError> {
    let mut cursor = FieldCursor::new(line, line_number);
    let Some(field) = cursor.fields.next() else {
        return Ok(Vec::new());
    };

    let mut rest = field.text;
    let mut commands = Vec::with_capacity(rest.len());
    while !rest.is_empty() {
        let before = rest;
        if let Ok(c) = command.parse_next(&mut rest) {
            commands.push(c);
            continue;
        }
        let bad = before.chars().next().unwrap_or_default();
        let consumed = field.text.len() - before.len();
        let column = field.column + field.text[..consumed].chars().count();
        return Err(InputError::invalid_command(
            bad,
            rover,
            commands.len() + 1,
            Location::new(line_number, column),
        ));
    }

    cursor.finish()?;
    Ok(commands)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
