use xdoku_core::{Board, Topology};

use crate::rule::{BoxedRule, Rule};

const NAME: &str = "naked twins";

/// Clears a two-digit pair confined to two cells from the rest of a unit.
///
/// When exactly two cells of a unit hold an identical 2-candidate set,
/// those two digits must end up in exactly those two cells, so they can be
/// removed from every other cell of the unit. The rule scans every unit of
/// the topology uniformly: rows, columns, boxes, and diagonals when the
/// topology includes them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, topology: &Topology, board: &mut Board) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            let cells = unit.cells();
            for (i, &first) in cells.iter().enumerate() {
                let pair = board.candidates(first);
                if pair.len() != 2 {
                    continue;
                }
                // Handle each distinct pair once per unit.
                if cells[..i].iter().any(|&c| board.candidates(c) == pair) {
                    continue;
                }
                let twins = cells
                    .iter()
                    .filter(|&&c| board.candidates(c) == pair)
                    .count();
                if twins != 2 {
                    continue;
                }
                for &other in &cells {
                    if board.candidates(other) != pair {
                        changed |= board.remove_candidates(other, pair);
                    }
                }
            }
        }
        changed
    }
}
