//! Depth-first branch-and-propagate search.

use xdoku_core::{Board, Cell, Topology};

use crate::{
    SolveError, Trace,
    rule::{self, BoxedRule},
};

/// Outcome of reducing a board to a propagation fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Every cell holds exactly one candidate.
    Solved,
    /// No rule makes further progress; branching is required.
    Stalled,
    /// Some cell's candidate set became empty.
    Contradiction,
}

/// Default bound on the number of search nodes expanded per solve.
///
/// Far above what any 9×9 puzzle needs, while still guaranteeing
/// termination on pathological input.
const DEFAULT_NODE_BUDGET: usize = 1 << 20;

/// A branch-and-propagate solver over a fixed [`Topology`].
///
/// Each solve alternates two phases: the propagation rules are applied
/// until a fixed point, and when that is not enough to decide the board,
/// the search branches on the unsolved cell with the fewest candidates
/// (ties broken by row-major order), trying its digits in ascending order
/// on an independent copy of the board. The first fully consistent board
/// found is returned; branch order is fixed, so repeated solves of the
/// same input yield the same output.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Board, Topology};
/// use xdoku_solver::{SolveError, Solver};
///
/// let solver = Solver::new(Topology::with_diagonals());
/// let board: Board =
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
///         .parse()?;
///
/// let solved = solver.solve(&board).unwrap();
/// assert!(solved.is_complete());
///
/// // A board with the same given twice in one row has no solution.
/// let broken: Board =
///     "22..............................................................................."
///         .parse()?;
/// assert_eq!(solver.solve(&broken), Err(SolveError::Unsolvable));
/// # Ok::<(), xdoku_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    topology: Topology,
    rules: Vec<BoxedRule>,
    node_budget: usize,
}

/// Bookkeeping threaded through the recursive search.
struct SearchState<'a> {
    nodes: usize,
    out_of_budget: bool,
    trace: Option<&'a mut Trace>,
}

impl Solver {
    /// Creates a solver over the given topology with the standard rules.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self::with_rules(topology, rule::standard_rules())
    }

    /// Creates a solver with a custom rule list, applied in order.
    #[must_use]
    pub fn with_rules(topology: Topology, rules: Vec<BoxedRule>) -> Self {
        Self {
            topology,
            rules,
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }

    /// Replaces the node budget, the maximum number of search nodes a
    /// single solve may expand.
    #[must_use]
    pub fn node_budget(mut self, budget: usize) -> Self {
        self.node_budget = budget;
        self
    }

    /// Returns the topology this solver operates on.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves the board, returning the first fully consistent completion.
    ///
    /// The input board is not modified; the solution is an independent
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] when every branch is exhausted,
    /// and [`SolveError::BudgetExhausted`] when the node budget ran out
    /// first.
    pub fn solve(&self, board: &Board) -> Result<Board, SolveError> {
        self.solve_inner(board, None)
    }

    /// Solves the board while recording a snapshot into `trace` each time
    /// a cell becomes solved.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve). Snapshots recorded before a failed
    /// branch was abandoned remain in the trace.
    pub fn solve_traced(&self, board: &Board, trace: &mut Trace) -> Result<Board, SolveError> {
        self.solve_inner(board, Some(trace))
    }

    /// Applies the rules repeatedly until a full pass no longer increases
    /// the number of solved cells, a contradiction appears, or the board
    /// completes.
    ///
    /// The board is left at the fixed point (or at the first contradictory
    /// state) in all cases.
    pub fn reduce(&self, board: &mut Board) -> Reduction {
        self.reduce_with(board, &mut None)
    }

    fn solve_inner(&self, board: &Board, trace: Option<&mut Trace>) -> Result<Board, SolveError> {
        let mut state = SearchState {
            nodes: 0,
            out_of_budget: false,
            trace,
        };
        match self.search(board.clone(), &mut state) {
            Some(solved) => {
                log::debug!("solved after {} nodes", state.nodes);
                Ok(solved)
            }
            None if state.out_of_budget => Err(SolveError::BudgetExhausted { nodes: state.nodes }),
            None => Err(SolveError::Unsolvable),
        }
    }

    fn reduce_with(&self, board: &mut Board, trace: &mut Option<&mut Trace>) -> Reduction {
        loop {
            let solved_before_pass = board.solved_count();
            for rule in &self.rules {
                let solved_before = board.solved_count();
                if rule.apply(&self.topology, board) {
                    log::trace!("rule {} narrowed the board", rule.name());
                    if board.solved_count() > solved_before
                        && let Some(trace) = trace.as_deref_mut()
                    {
                        trace.record(board);
                    }
                }
            }
            if board.contradiction().is_some() {
                return Reduction::Contradiction;
            }
            if board.is_complete() {
                return Reduction::Solved;
            }
            if board.solved_count() == solved_before_pass {
                return Reduction::Stalled;
            }
        }
    }

    fn search(&self, mut board: Board, state: &mut SearchState<'_>) -> Option<Board> {
        state.nodes += 1;
        if state.nodes > self.node_budget {
            state.out_of_budget = true;
            return None;
        }
        match self.reduce_with(&mut board, &mut state.trace) {
            Reduction::Contradiction => {
                log::trace!("contradiction, backtracking");
                None
            }
            Reduction::Solved => Some(board),
            Reduction::Stalled => {
                let cell = self.branch_cell(&board)?;
                let candidates = board.candidates(cell);
                log::debug!("branching on {cell} across {candidates}");
                for digit in candidates {
                    let mut child = board.clone();
                    child.assign(cell, digit);
                    if let Some(trace) = state.trace.as_deref_mut() {
                        trace.record(&child);
                    }
                    if let Some(solved) = self.search(child, state) {
                        return Some(solved);
                    }
                    if state.out_of_budget {
                        return None;
                    }
                }
                None
            }
        }
    }

    /// Selects the unsolved cell with the fewest candidates, keeping the
    /// first such cell in row-major order on ties.
    fn branch_cell(&self, board: &Board) -> Option<Cell> {
        let mut best: Option<(usize, Cell)> = None;
        for cell in Cell::all() {
            let len = board.candidates(cell).len();
            if len > 1 && best.is_none_or(|(best_len, _)| len < best_len) {
                best = Some((len, cell));
            }
        }
        best.map(|(_, cell)| cell)
    }
}
