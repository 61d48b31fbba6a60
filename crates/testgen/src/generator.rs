use std::fmt::Write;

use rand::RngExt;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rovers_core::{Command, Grid, Orientation, Position, RoverState};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct ScenarioParams {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub n_rover: usize,
    pub n_command: usize,
}

/// A rover description together with the final states it must produce.
#[derive(Deserialize, Serialize, Debug)]
pub struct Scenario {
    params: ScenarioParams,
    input: String,
    expected: Vec<RoverState>,
}

impl Scenario {
    #[must_use]
    pub const fn new(params: ScenarioParams, input: String, expected: Vec<RoverState>) -> Self {
        Self {
            params,
            input,
            expected,
        }
    }

    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub fn get_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn get_expected(&self) -> &[RoverState] {
        &self.expected
    }

    #[must_use]
    pub const fn get_params(&self) -> &ScenarioParams {
        &self.params
    }
}

/// Generate one rover description for a `width × height` grid with `n_rover`
/// rovers of `n_command` commands each, and the final states it leads to.
///
/// # Validity invariant
///
/// The description always processes successfully:
/// 1. Every start position is drawn from inside the grid.
/// 2. Each command is drawn uniformly from `L`, `R`, `M`, but an `M` that
///    would leave the grid is replaced by a random turn.
///
/// Rovers are independent, so they may start on or pass through the same
/// cell.
#[must_use]
pub fn generate_single_scenario(
    width: u32,
    height: u32,
    n_rover: usize,
    n_command: usize,
) -> (String, Vec<RoverState>) {
    let grid = Grid::new(width, height);
    let mut random_generator = rand::rng();
    let mut input = format!("{grid}\n");
    let mut expected = Vec::new();

    for id in 1..=n_rover {
        let start = Position::new(
            random_generator.random_range(0..=width),
            random_generator.random_range(0..=height),
        );
        let orientation = Orientation::ALL[random_generator.random_range(0..4_usize)];
        let _ = writeln!(input, "{} {} {orientation}", start.x, start.y);

        let mut position = start;
        let mut facing = orientation;
        for _ in 0..n_command {
            let mut command = Command::ALL[random_generator.random_range(0..3_usize)];
            if command == Command::Move {
                if let Some(next) = position.step(facing).filter(|p| grid.contains(*p)) {
                    position = next;
                } else if random_generator.random::<bool>() {
                    command = Command::Left;
                } else {
                    command = Command::Right;
                }
            }
            match command {
                Command::Left => facing = facing.left(),
                Command::Right => facing = facing.right(),
                Command::Move => {}
            }
            input.push(command.letter());
        }
        input.push('\n');

        expected.push(RoverState {
            id,
            position,
            orientation: facing,
        });
    }

    (input, expected)
}

#[must_use]
pub fn generate_mult_scenarios(
    n_scenario: u64,
    width: u32,
    height: u32,
    n_rover: usize,
    n_command: usize,
) -> Vec<Scenario> {
    (0..n_scenario)
        .into_par_iter()
        .map(|id| {
            let (input, expected) = generate_single_scenario(width, height, n_rover, n_command);
            let params = ScenarioParams::builder()
                .id(id)
                .width(width)
                .height(height)
                .n_rover(n_rover)
                .n_command(n_command)
                .build();
            Scenario::new(params, input, expected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_shape() {
        let (input, expected) = generate_single_scenario(4, 3, 5, 12);
        let lines: Vec<&str> = input.lines().collect();
        assert_eq!(lines.len(), 1 + 2 * 5);
        assert_eq!(lines[0], "4 3");
        for commands in lines.iter().skip(2).step_by(2) {
            assert_eq!(commands.len(), 12);
            assert!(commands.chars().all(|c| Command::from_letter(c).is_some()));
        }
        assert_eq!(expected.len(), 5);
        let ids: Vec<usize> = expected.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_expected_states_stay_on_grid() {
        let grid = Grid::new(2, 6);
        let (_, expected) = generate_single_scenario(2, 6, 20, 40);
        assert!(expected.iter().all(|s| grid.contains(s.position)));
    }

    #[test]
    fn test_zero_grid_never_moves() {
        let (input, expected) = generate_single_scenario(0, 0, 3, 30);
        assert!(!input.lines().skip(2).step_by(2).any(|l| l.contains('M')));
        assert!(expected.iter().all(|s| s.position == Position::new(0, 0)));
    }

    #[test]
    fn test_mult_scenarios_ids() {
        let scenarios = generate_mult_scenarios(8, 5, 5, 2, 10);
        let mut ids: Vec<u64> = scenarios.iter().map(Scenario::get_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
        assert!(scenarios.iter().all(|s| s.get_params().n_rover == 2));
    }
}
