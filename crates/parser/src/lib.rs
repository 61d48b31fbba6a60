//! Text front end for `rovers_core`.
//!
//! - [`lexer`] splits lines into fields,
//! - [`parser`] validates fields against the grid, rover and command grammar,
//! - [`document`] walks a whole description lazily as a [`RoverSource`],
//! - [`catalog`] reads message catalogs from `.properties` text.
//!
//! [`RoverSource`]: rovers_core::RoverSource

pub mod catalog;
pub mod document;
pub mod lexer;
pub mod parser;

pub use catalog::{bundled_catalog, load_catalog, parse_catalog, CATALOG_NAME};
pub use document::Document;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse_command_line, parse_grid_line, parse_rover_line, RoverDeclaration};

use rovers_core::{process_source, Error, RoverState};

/// Validate and run a complete rover description.
///
/// Returns the final state of every rover in declaration order.
///
/// # Errors
///
/// The first [`Error`] met: an input error for malformed text or a movement
/// error for a rover that would leave the grid. Rovers are handled one at a
/// time, so a later rover's malformed lines are only reported after every
/// earlier rover has finished successfully.
pub fn process(input: &str) -> Result<Vec<RoverState>, Error> {
    process_source(&mut Document::new(input))
}
