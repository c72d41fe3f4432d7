//! Observational solve traces.

use xdoku_core::Board;

/// An append-only log of board snapshots taken while solving.
///
/// The solver records a snapshot each time propagation or branching newly
/// solves at least one cell. The trace is purely observational; the solver
/// never reads it back. External consumers (e.g. a step-by-step
/// visualization) can replay the snapshots in order.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Board, Topology};
/// use xdoku_solver::{Solver, Trace};
///
/// let board: Board =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
///         .parse()?;
/// let solver = Solver::new(Topology::new());
///
/// let mut trace = Trace::new();
/// let solved = solver.solve_traced(&board, &mut trace).unwrap();
/// assert_eq!(trace.snapshots().last(), Some(&solved));
/// # Ok::<(), xdoku_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    snapshots: Vec<Board>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded snapshots, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub(crate) fn record(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }
}
