//! Constraint propagation and search for Sudoku and X-Sudoku puzzles.
//!
//! The solver reduces a [`Board`](xdoku_core::Board) with three local
//! inference rules (elimination, only-choice, naked-twins), re-applied to a
//! fixed point, and resolves whatever propagation cannot decide with a
//! depth-first search that branches on the most constrained cell.
//!
//! # Examples
//!
//! ```
//! use xdoku_core::{Board, Topology};
//! use xdoku_solver::Solver;
//!
//! let board: Board =
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
//!         .parse()?;
//! let solver = Solver::new(Topology::new());
//!
//! let solved = solver.solve(&board).unwrap();
//! assert!(solved.is_complete());
//! # Ok::<(), xdoku_core::ParseBoardError>(())
//! ```

pub use self::{
    error::SolveError,
    solver::{Reduction, Solver},
    trace::Trace,
};

mod error;
pub mod rule;
mod solver;
mod trace;

#[cfg(test)]
mod testing;
