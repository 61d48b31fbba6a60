use alloc::vec::Vec;

use crate::error::{Error, InputError, Location};
use crate::grid::Grid;
use crate::rover::types::{Command, Orientation, Position, RoverState};
use crate::rover::Rover;

/// One validated rover block: its declaration and command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverPlan {
    /// 1-based declaration ordinal.
    pub id: usize,
    pub position: Position,
    pub orientation: Orientation,
    pub commands: Vec<Command>,
    /// Where the declaration line starts.
    pub location: Location,
}

/// A source of validated declarations, consumed strictly in order.
///
/// Implementations must be lazy: [`RoverSource::next_rover`] validates only
/// the lines of the block it returns, so that an error in a later block is
/// never reported before an earlier block has been replayed.
pub trait RoverSource {
    /// The grid declaration. Called exactly once, before any rover.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the grid line is absent or malformed.
    fn grid(&mut self) -> Result<Grid, InputError>;

    /// The next rover block, or `None` once the input is exhausted.
    fn next_rover(&mut self) -> Option<Result<RoverPlan, InputError>>;
}

/// Run every rover from `source` to completion.
///
/// Rovers are placed and replayed one at a time in declaration order; each
/// rover only sees the grid, never the other rovers, so several may share a
/// cell. The first error ends the run and is returned unchanged.
///
/// # Errors
///
/// [`Error::Input`] for malformed input, including a rover declared outside
/// the grid, and [`Error::Movement`] for a move that would leave the grid.
pub fn process_source<S: RoverSource>(source: &mut S) -> Result<Vec<RoverState>, Error> {
    let grid = source.grid().inspect_err(log_abort)?;
    tracing::debug!(width = grid.width(), height = grid.height(), "grid declared");

    let mut finished = Vec::new();
    while let Some(plan) = source.next_rover() {
        let plan = plan.inspect_err(log_abort)?;
        let state = replay(&grid, &plan).inspect_err(log_abort)?;
        tracing::debug!(rover = state.id, state = %state, "rover finished");
        finished.push(state);
    }
    Ok(finished)
}

fn replay(grid: &Grid, plan: &RoverPlan) -> Result<RoverState, Error> {
    let mut rover = Rover::place(
        grid,
        plan.id,
        plan.position,
        plan.orientation,
        plan.location,
    )?;
    Ok(rover.replay(&plan.commands)?)
}

fn log_abort<E: core::fmt::Display>(error: &E) {
    tracing::warn!(%error, "processing aborted");
}
