//! Shared helpers for solver tests.

use xdoku_core::{Board, DigitSet, Topology};

/// Panics unless `board` is complete and every unit of `topology` holds
/// each digit exactly once.
#[track_caller]
pub(crate) fn assert_valid(board: &Board, topology: &Topology) {
    for unit in topology.units() {
        let mut seen = DigitSet::EMPTY;
        for cell in unit.cells() {
            let digit = board
                .value(cell)
                .unwrap_or_else(|| panic!("cell {cell} is unsolved"));
            assert!(!seen.contains(digit), "digit {digit} repeated in {unit:?}");
            seen.insert(digit);
        }
    }
}
