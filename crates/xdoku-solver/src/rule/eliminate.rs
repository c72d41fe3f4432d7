use xdoku_core::{Board, Cell, Topology};

use crate::rule::{BoxedRule, Rule};

const NAME: &str = "eliminate";

/// Removes each solved cell's digit from the candidates of its peers.
///
/// A unit constraint forbids two cells of the same unit from holding the
/// same digit, so a digit fixed in one cell is impossible for every peer.
/// When two peers were given the same digit, each strips the other down to
/// an empty candidate set, which is how duplicate givens are detected.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, topology: &Topology, board: &mut Board) -> bool {
        let mut changed = false;
        for cell in Cell::all() {
            let Some(digit) = board.value(cell) else {
                continue;
            };
            for peer in topology.peers(cell) {
                changed |= board.remove_candidate(peer, digit);
            }
        }
        changed
    }
}
