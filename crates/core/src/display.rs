use alloc::string::String;
use core::fmt::Write;

use crate::rover::types::RoverState;

/// Format final rover states one per line as `<x> <y> <orientation>`.
///
/// The output ends with a trailing newline unless `states` is empty.
#[must_use]
pub fn format_report(states: &[RoverState]) -> String {
    let mut output = String::new();
    for state in states {
        let _ = writeln!(output, "{state}");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rover::types::{Orientation, Position};

    fn state(id: usize, x: u32, y: u32, orientation: Orientation) -> RoverState {
        RoverState {
            id,
            position: Position::new(x, y),
            orientation,
        }
    }

    #[test]
    fn test_format_report_two_rovers() {
        let states = [
            state(1, 1, 3, Orientation::North),
            state(2, 5, 1, Orientation::East),
        ];
        assert_eq!(format_report(&states), "1 3 N\n5 1 E\n");
    }

    #[test]
    fn test_format_report_empty() {
        assert_eq!(format_report(&[]), "");
    }
}
