use core::fmt::{Display, Formatter, Result};

use crate::rover::types::Position;

/// The plateau rovers are confined to.
///
/// Both bounds are inclusive: a `5 5` grid has cells `(0..=5, 0..=5)`, and a
/// `0 0` grid has exactly one cell.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x <= self.width && position.y <= self.height
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.width, self.height)
    }
}
