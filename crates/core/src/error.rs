use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result};

use derive_more::From;

use crate::rover::types::{Position, RoverState};

/// Which of the two failure classes a code belongs to.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    Movement,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Movement => write!(f, "movement"),
        }
    }
}

/// Symbolic error codes, one per catalog key.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `ROV_INPUT_001`: (literal, field)
    InvalidGridSize,
    /// `ROV_INPUT_002`: (literal, rover)
    InvalidOrientation,
    /// `ROV_INPUT_003`: (literal, rover, field)
    InvalidCoordinate,
    /// `ROV_INPUT_004`: (literal, rover, command index)
    InvalidCommand,
    /// `ROV_INPUT_005`: (field name, line), for the orientation field
    MissingField,
    /// `ROV_INPUT_006`: (literal, line)
    UnexpectedField,
    /// `ROV_INPUT_007`: (rover)
    MissingCommands,
    /// `ROV_INPUT_008`: ()
    MissingGrid,
    /// `ROV_INPUT_009`: (rover, x, y)
    RoverOutOfBounds,
    /// `ROV_MOVE_001`: (rover, command index, x, y, orientation)
    OutOfBounds,
}

impl ErrorCode {
    pub const ALL: [Self; 10] = [
        Self::InvalidGridSize,
        Self::InvalidOrientation,
        Self::InvalidCoordinate,
        Self::InvalidCommand,
        Self::MissingField,
        Self::UnexpectedField,
        Self::MissingCommands,
        Self::MissingGrid,
        Self::RoverOutOfBounds,
        Self::OutOfBounds,
    ];

    /// The catalog key for this code.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InvalidGridSize => "ROV_INPUT_001",
            Self::InvalidOrientation => "ROV_INPUT_002",
            Self::InvalidCoordinate => "ROV_INPUT_003",
            Self::InvalidCommand => "ROV_INPUT_004",
            Self::MissingField => "ROV_INPUT_005",
            Self::UnexpectedField => "ROV_INPUT_006",
            Self::MissingCommands => "ROV_INPUT_007",
            Self::MissingGrid => "ROV_INPUT_008",
            Self::RoverOutOfBounds => "ROV_INPUT_009",
            Self::OutOfBounds => "ROV_MOVE_001",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.key() == key)
    }

    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::OutOfBounds => ErrorKind::Movement,
            _ => ErrorKind::Input,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.key())
    }
}

/// A code plus its positional arguments, not yet rendered to text.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub code: ErrorCode,
    pub arguments: Vec<String>,
}

impl ErrorRecord {
    #[must_use]
    pub const fn new(code: ErrorCode, arguments: Vec<String>) -> Self {
        Self { code, arguments }
    }
}

impl Display for ErrorRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}(", self.code)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument:?}")?;
        }
        write!(f, ")")
    }
}

/// 1-based line and column of an offending token.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The input text does not follow the grammar.
///
/// `location` points at the offending token; it is kept out of the catalog
/// arguments so that message templates stay independent of source layout.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    pub record: ErrorRecord,
    pub location: Location,
}

impl InputError {
    fn new(code: ErrorCode, arguments: Vec<String>, location: Location) -> Self {
        Self {
            record: ErrorRecord::new(code, arguments),
            location,
        }
    }

    /// Grid dimension `literal` at 1-based `field` is not a non-negative integer.
    /// An absent dimension has an empty `literal`.
    #[must_use]
    pub fn invalid_grid_size(literal: &str, field: usize, location: Location) -> Self {
        Self::new(
            ErrorCode::InvalidGridSize,
            vec![literal.to_string(), field.to_string()],
            location,
        )
    }

    #[must_use]
    pub fn invalid_orientation(literal: &str, rover: usize, location: Location) -> Self {
        Self::new(
            ErrorCode::InvalidOrientation,
            vec![literal.to_string(), rover.to_string()],
            location,
        )
    }

    #[must_use]
    pub fn invalid_coordinate(
        literal: &str,
        rover: usize,
        field: usize,
        location: Location,
    ) -> Self {
        Self::new(
            ErrorCode::InvalidCoordinate,
            vec![literal.to_string(), rover.to_string(), field.to_string()],
            location,
        )
    }

    #[must_use]
    pub fn invalid_command(literal: char, rover: usize, index: usize, location: Location) -> Self {
        Self::new(
            ErrorCode::InvalidCommand,
            vec![literal.to_string(), rover.to_string(), index.to_string()],
            location,
        )
    }

    #[must_use]
    pub fn missing_field(name: &str, location: Location) -> Self {
        Self::new(
            ErrorCode::MissingField,
            vec![name.to_string(), location.line.to_string()],
            location,
        )
    }

    #[must_use]
    pub fn unexpected_field(literal: &str, location: Location) -> Self {
        Self::new(
            ErrorCode::UnexpectedField,
            vec![literal.to_string(), location.line.to_string()],
            location,
        )
    }

    #[must_use]
    pub fn missing_commands(rover: usize, location: Location) -> Self {
        Self::new(
            ErrorCode::MissingCommands,
            vec![rover.to_string()],
            location,
        )
    }

    #[must_use]
    pub fn missing_grid() -> Self {
        Self::new(ErrorCode::MissingGrid, Vec::new(), Location::new(1, 1))
    }

    #[must_use]
    pub fn rover_out_of_bounds(rover: usize, position: Position, location: Location) -> Self {
        Self::new(
            ErrorCode::RoverOutOfBounds,
            vec![
                rover.to_string(),
                position.x.to_string(),
                position.y.to_string(),
            ],
            location,
        )
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.record.code
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.record.arguments
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "input error at line {}, column {}: {}",
            self.location.line, self.location.column, self.record
        )
    }
}

impl core::error::Error for InputError {}

/// A well-formed command would take a rover off the grid.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementError {
    pub record: ErrorRecord,
    /// The rover as it stood before the rejected command.
    pub last_state: RoverState,
    /// 1-based index of the rejected command within the rover's command string.
    pub command_index: usize,
}

impl MovementError {
    #[must_use]
    pub fn out_of_bounds(last_state: RoverState, command_index: usize) -> Self {
        let record = ErrorRecord::new(
            ErrorCode::OutOfBounds,
            vec![
                last_state.id.to_string(),
                command_index.to_string(),
                last_state.position.x.to_string(),
                last_state.position.y.to_string(),
                last_state.orientation.to_string(),
            ],
        );
        Self {
            record,
            last_state,
            command_index,
        }
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.record.code
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.record.arguments
    }
}

impl Display for MovementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "movement error for rover {} at command {}: {}",
            self.last_state.id, self.command_index, self.record
        )
    }
}

impl core::error::Error for MovementError {}

/// Every way a run can fail.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Error {
    /// The description is malformed.
    Input(InputError),
    /// The description is well-formed but a rover would leave the grid.
    Movement(MovementError),
}

impl Error {
    #[must_use]
    pub const fn record(&self) -> &ErrorRecord {
        match self {
            Self::Input(e) => &e.record,
            Self::Movement(e) => &e.record,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) => ErrorKind::Input,
            Self::Movement(_) => ErrorKind::Movement,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::Movement(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rover::types::Orientation;

    #[test]
    fn test_keys_are_unique_and_resolvable() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_key(code.key()), Some(code));
        }
        assert_eq!(ErrorCode::from_key("ROV_INPUT_999"), None);
    }

    #[test]
    fn test_only_move_code_is_movement_kind() {
        for code in ErrorCode::ALL {
            let expected = if code == ErrorCode::OutOfBounds {
                ErrorKind::Movement
            } else {
                ErrorKind::Input
            };
            assert_eq!(code.kind(), expected, "{code}");
        }
    }

    #[test]
    fn test_invalid_orientation_arguments() {
        let e = InputError::invalid_orientation("M", 1, Location::new(2, 5));
        assert_eq!(e.code(), ErrorCode::InvalidOrientation);
        assert_eq!(e.arguments(), ["M", "1"]);
        assert_eq!(e.location.line, 2);
    }

    #[test]
    fn test_movement_error_arguments() {
        let state = RoverState {
            id: 2,
            position: Position::new(0, 5),
            orientation: Orientation::North,
        };
        let e = MovementError::out_of_bounds(state, 6);
        assert_eq!(e.arguments(), ["2", "6", "0", "5", "N"]);
        let err = Error::from(e);
        assert_eq!(err.kind(), ErrorKind::Movement);
        assert_eq!(err.record().code, ErrorCode::OutOfBounds);
    }

    #[test]
    fn test_display_contains_code_and_location() {
        let err = Error::from(InputError::missing_field("height", Location::new(1, 4)));
        let msg = err.to_string();
        assert!(msg.contains("ROV_INPUT_005"), "{msg}");
        assert!(msg.contains("line 1, column 4"), "{msg}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serializes_with_code_and_arguments() {
        let err = Error::from(InputError::invalid_orientation("M", 1, Location::new(2, 5)));
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["Input"]["record"]["code"], "InvalidOrientation");
        assert_eq!(value["Input"]["record"]["arguments"], serde_json::json!(["M", "1"]));
    }
}
