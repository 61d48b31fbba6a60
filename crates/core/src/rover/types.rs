use core::fmt::{Display, Formatter, Result};

/// One of the four compass directions a rover can face.
///
/// The cycle `N → E → S → W → N` is clockwise; [`Orientation::right`] walks it
/// forwards and [`Orientation::left`] walks it backwards.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order starting at north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Quarter turn counter-clockwise.
    #[must_use]
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Quarter turn clockwise.
    #[must_use]
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.letter())
    }
}

/// A single rover instruction.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// `L`: turn left in place.
    Left,
    /// `R`: turn right in place.
    Right,
    /// `M`: advance one cell in the current orientation.
    Move,
}

impl Command {
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Move];

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'M' => Some(Self::Move),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Move => 'M',
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.letter())
    }
}

/// A grid cell. Coordinates are never negative; a step that would go below
/// zero has no position at all (see [`Position::step`]).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in direction `orientation`, or `None` when the
    /// coordinate would leave the `u32` range.
    #[must_use]
    pub fn step(self, orientation: Orientation) -> Option<Self> {
        let Self { x, y } = self;
        match orientation {
            Orientation::North => y.checked_add(1).map(|y| Self { x, y }),
            Orientation::South => y.checked_sub(1).map(|y| Self { x, y }),
            Orientation::East => x.checked_add(1).map(|x| Self { x, y }),
            Orientation::West => x.checked_sub(1).map(|x| Self { x, y }),
        }
    }
}

/// Observable state of one rover: where it is and which way it faces.
///
/// `id` is the 1-based declaration ordinal.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RoverState {
    pub id: usize,
    pub position: Position,
    pub orientation: Orientation,
}

impl Display for RoverState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.orientation
        )
    }
}
