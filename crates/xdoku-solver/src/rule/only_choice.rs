use xdoku_core::{Board, Cell, Topology};

use crate::rule::{BoxedRule, Rule};

const NAME: &str = "only choice";

/// Assigns a digit that fits in only one cell of one of its units.
///
/// For every unsolved cell, each remaining candidate is checked against the
/// units the cell belongs to, in membership order (row, column, box, then
/// diagonals). If some unit admits the digit in exactly one of its nine
/// cells, that cell must take the digit: it is assigned on the spot and the
/// scan moves on to the next cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, topology: &Topology, board: &mut Board) -> bool {
        let mut changed = false;
        'cells: for cell in Cell::all() {
            if board.value(cell).is_some() {
                continue;
            }
            for digit in board.candidates(cell) {
                for unit in topology.units_of(cell) {
                    let fits = unit
                        .cells()
                        .into_iter()
                        .filter(|&c| board.candidates(c).contains(digit))
                        .count();
                    if fits == 1 {
                        board.assign(cell, digit);
                        changed = true;
                        continue 'cells;
                    }
                }
            }
        }
        changed
    }
}
