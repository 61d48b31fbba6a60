//! Grid-bounded rover simulation.
//!
//! `rovers_core` models a rectangular plateau and the rovers driven across
//! it. A rover faces one of four compass directions and understands three
//! commands: turn left (`L`), turn right (`R`) and advance one cell (`M`).
//! Any advance that would take a rover off the plateau is rejected.
//!
//! # Entry point
//!
//! [`process_source()`] pulls the grid and then one rover block at a time
//! from a [`RoverSource`], replaying each rover before asking for the next.
//! It returns the final [`RoverState`] of every rover in declaration order, or
//! the first [`Error`] encountered:
//!
//! - [`Error::Input`] when the description is malformed,
//! - [`Error::Movement`] when a well-formed command would leave the grid.
//!
//! Errors carry a symbolic [`ErrorCode`] and positional arguments. They are
//! turned into text only by a [`Catalog`] at the point of presentation.
//!
//! ```rust,ignore
//! use rovers_core::{process_source, Catalog};
//!
//! match process_source(&mut source) {
//!     Ok(states) => print!("{}", rovers_core::display::format_report(&states)),
//!     Err(err) => eprintln!("{}", catalog.render_error(&err)?),
//! }
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on the data
//!   model, the error types and [`Catalog`].
//!
//! This crate is `no_std` compatible (requires `alloc`). The text grammar and
//! the catalog file format live in the separate `rovers_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod catalog;
pub mod display;
pub mod error;
pub mod grid;
pub mod process;
pub mod rover;

pub use catalog::{Catalog, CatalogError};
pub use error::{Error, ErrorCode, ErrorKind, ErrorRecord, InputError, Location, MovementError};
pub use grid::Grid;
pub use process::{process_source, RoverPlan, RoverSource};
pub use rover::types::{Command, Orientation, Position, RoverState};
pub use rover::Rover;
