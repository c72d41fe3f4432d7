//! Solver error types.

/// Errors returned by [`Solver::solve`](crate::Solver::solve).
///
/// A contradiction inside a single search branch is not an error; it is
/// consumed by backtracking. Only the terminal outcomes surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// Every branch of the search was exhausted without reaching a fully
    /// solved board.
    #[display("puzzle has no solution")]
    Unsolvable,
    /// The search gave up after expanding its node budget, without proving
    /// the puzzle unsolvable.
    #[display("search aborted after {nodes} nodes")]
    BudgetExhausted {
        /// Number of search nodes expanded before giving up.
        nodes: usize,
    },
}
