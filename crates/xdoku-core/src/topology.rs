//! Structural relationships among cells.

use tinyvec::ArrayVec;

use crate::{cell::Cell, cell_set::CellSet, unit::Unit};

/// The fixed structure of a puzzle: its units, unit memberships, and peers.
///
/// A topology is derived once from the grid geometry and the diagonal
/// configuration, and is immutable afterwards; one value can be shared by
/// any number of solves.
///
/// The unit list always holds the 9 rows, 9 columns, and 9 boxes in that
/// order; [`with_diagonals`](Self::with_diagonals) appends the two main
/// diagonals. Per-cell memberships keep the same order, which is also the
/// priority order the only-choice rule scans units in.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, Topology};
///
/// let plain = Topology::new();
/// assert_eq!(plain.units().len(), 27);
/// assert_eq!(plain.peers(Cell::new(0, 0)).len(), 20);
///
/// let x_sudoku = Topology::with_diagonals();
/// assert_eq!(x_sudoku.units().len(), 29);
/// // A corner cell lies on a diagonal and gains six peers.
/// assert_eq!(x_sudoku.peers(Cell::new(0, 0)).len(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    units: Vec<Unit>,
    units_of: [ArrayVec<[u8; 5]>; 81],
    peers: [CellSet; 81],
    include_diagonals: bool,
}

impl Topology {
    /// Creates the topology of a plain Sudoku puzzle (rows, columns, boxes).
    #[must_use]
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Creates the topology of an X-Sudoku puzzle, which additionally
    /// constrains the two main diagonals.
    #[must_use]
    pub fn with_diagonals() -> Self {
        Self::build(true)
    }

    fn build(include_diagonals: bool) -> Self {
        let mut units: Vec<Unit> = Vec::with_capacity(29);
        units.extend(Unit::ROWS);
        units.extend(Unit::COLUMNS);
        units.extend(Unit::BOXES);
        if include_diagonals {
            units.extend(Unit::DIAGONALS);
        }

        let mut units_of = [ArrayVec::<[u8; 5]>::new(); 81];
        let mut peers = [CellSet::EMPTY; 81];
        for (i, unit) in units.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let unit_index = i as u8;
            for cell in unit.cells() {
                units_of[cell.index()].push(unit_index);
                for other in unit.cells() {
                    if other != cell {
                        peers[cell.index()].insert(other);
                    }
                }
            }
        }

        Self {
            units,
            units_of,
            peers,
            include_diagonals,
        }
    }

    /// Returns every unit of this topology.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the units the cell belongs to, in row, column, box,
    /// diagonal order.
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = Unit> + '_ {
        self.units_of[cell.index()]
            .iter()
            .map(|&i| self.units[usize::from(i)])
    }

    /// Returns the cells sharing at least one unit with the cell,
    /// excluding the cell itself.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }

    /// Returns `true` when this topology constrains the main diagonals.
    #[must_use]
    pub const fn include_diagonals(&self) -> bool {
        self.include_diagonals
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::unit::DiagonalKind;

    #[test]
    fn test_unit_counts() {
        assert_eq!(Topology::new().units().len(), 27);
        assert_eq!(Topology::with_diagonals().units().len(), 29);
        assert!(!Topology::new().include_diagonals());
        assert!(Topology::with_diagonals().include_diagonals());
    }

    #[test]
    fn test_every_cell_has_row_column_box() {
        let topology = Topology::new();
        for cell in Cell::all() {
            let units: Vec<_> = topology.units_of(cell).collect();
            assert_eq!(units.len(), 3);
            assert_eq!(units[0], Unit::Row { row: cell.row() });
            assert_eq!(units[1], Unit::Column { col: cell.col() });
            assert_eq!(
                units[2],
                Unit::Box {
                    index: cell.box_index()
                }
            );
        }
    }

    #[test]
    fn test_diagonal_memberships() {
        let topology = Topology::with_diagonals();

        // Off-diagonal cells keep exactly three units.
        assert_eq!(topology.units_of(Cell::new(0, 1)).count(), 3);

        // Corner cells pick up one diagonal.
        let corner: Vec<_> = topology.units_of(Cell::new(0, 0)).collect();
        assert_eq!(corner.len(), 4);
        assert_eq!(
            corner[3],
            Unit::Diagonal {
                kind: DiagonalKind::Down
            }
        );

        // The center cell lies on both diagonals.
        assert_eq!(topology.units_of(Cell::new(4, 4)).count(), 5);
    }

    #[test]
    fn test_peer_counts() {
        let plain = Topology::new();
        for cell in Cell::all() {
            assert_eq!(plain.peers(cell).len(), 20, "peers of {cell}");
        }

        let x_sudoku = Topology::with_diagonals();
        assert_eq!(x_sudoku.peers(Cell::new(0, 0)).len(), 26);
        assert_eq!(x_sudoku.peers(Cell::new(8, 0)).len(), 26);
        assert_eq!(x_sudoku.peers(Cell::new(4, 4)).len(), 32);
        assert_eq!(x_sudoku.peers(Cell::new(0, 1)).len(), 20);
    }

    proptest! {
        #[test]
        fn peer_relation_is_symmetric_and_irreflexive(
            a in 0u8..81,
            b in 0u8..81,
            diagonals: bool,
        ) {
            let topology = if diagonals {
                Topology::with_diagonals()
            } else {
                Topology::new()
            };
            let (a, b) = (Cell::from_index(a), Cell::from_index(b));
            prop_assert_eq!(topology.peers(a).contains(b), topology.peers(b).contains(a));
            prop_assert!(!topology.peers(a).contains(a));
        }
    }
}
