//! Core data structures for the xdoku solver.
//!
//! This crate provides the data model shared by the solving and front-end
//! components:
//!
//! - [`Digit`] and [`DigitSet`]: type-safe digits 1-9 and 9-bit candidate sets
//! - [`Cell`] and [`CellSet`]: board positions and 81-bit position sets
//! - [`Unit`]: a constraint group of nine cells (row, column, box, or diagonal)
//! - [`Topology`]: the unit list, unit-membership map, and peer map derived
//!   once from the grid geometry and an optional diagonal constraint
//! - [`Board`]: the candidate sets of all 81 cells, with a textual codec
//!
//! # Examples
//!
//! ```
//! use xdoku_core::{Board, Cell, Digit, Topology};
//!
//! let topology = Topology::new();
//! let board: Board =
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
//!         .parse()?;
//!
//! assert_eq!(board.value(Cell::new(0, 2)), Some(Digit::D3));
//! assert_eq!(board.candidates(Cell::new(0, 0)).len(), 9);
//! assert_eq!(topology.units().len(), 27);
//! # Ok::<(), xdoku_core::ParseBoardError>(())
//! ```

pub use self::{
    board::{Board, ParseBoardError},
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    topology::Topology,
    unit::{DiagonalKind, Unit},
};

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod topology;
pub mod unit;
