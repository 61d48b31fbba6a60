pub mod types;

use crate::error::{InputError, Location, MovementError};
use crate::grid::Grid;
use crate::rover::types::{Command, Orientation, Position, RoverState};

/// A rover bound to the grid it was placed on.
///
/// A `Rover` can only be obtained through [`Rover::place`], which rejects
/// start positions outside the grid, and every transition keeps it inside.
/// Its position is therefore in bounds for as long as it exists.
#[derive(Debug, Clone)]
pub struct Rover<'grid> {
    grid: &'grid Grid,
    state: RoverState,
}

impl<'grid> Rover<'grid> {
    /// Put rover number `id` on `grid`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] with code `ROV_INPUT_009` when `position` is
    /// outside the grid. `location` is the rover's declaration line.
    pub fn place(
        grid: &'grid Grid,
        id: usize,
        position: Position,
        orientation: Orientation,
        location: Location,
    ) -> Result<Self, InputError> {
        if !grid.contains(position) {
            return Err(InputError::rover_out_of_bounds(id, position, location));
        }
        Ok(Self {
            grid,
            state: RoverState {
                id,
                position,
                orientation,
            },
        })
    }

    #[must_use]
    pub const fn state(&self) -> RoverState {
        self.state
    }

    /// Apply a single command. `index` is its 1-based position in the
    /// command string and only appears in the error.
    ///
    /// # Errors
    ///
    /// Returns a [`MovementError`] when `command` is a move that would leave
    /// the grid. The rover is left where it was.
    pub fn apply(&mut self, command: Command, index: usize) -> Result<(), MovementError> {
        let grid = self.grid;
        let state = &mut self.state;
        match command {
            Command::Left => state.orientation = state.orientation.left(),
            Command::Right => state.orientation = state.orientation.right(),
            Command::Move => {
                let next = state
                    .position
                    .step(state.orientation)
                    .filter(|p| grid.contains(*p))
                    .ok_or_else(|| MovementError::out_of_bounds(*state, index))?;
                state.position = next;
            }
        }
        tracing::trace!(rover = state.id, %command, state = %state, "applied command");
        Ok(())
    }

    /// Replay `commands` in order, stopping at the first illegal move.
    ///
    /// # Errors
    ///
    /// Returns the [`MovementError`] of the first move that would leave the
    /// grid; no later command is applied.
    pub fn replay(&mut self, commands: &[Command]) -> Result<RoverState, MovementError> {
        for (i, command) in commands.iter().enumerate() {
            self.apply(*command, i + 1)?;
        }
        Ok(self.state)
    }
}
