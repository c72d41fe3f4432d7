//! Constraint groups.

use crate::cell::Cell;

/// Orientation of a main diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalKind {
    /// The diagonal running from the top-left corner to the bottom-right
    /// corner (A1 through I9).
    Down,
    /// The diagonal running from the bottom-left corner to the top-right
    /// corner (I1 through A9).
    Up,
}

/// A group of nine cells whose solved values must be pairwise distinct.
///
/// Rows, columns, and boxes exist for every puzzle; the two diagonals are
/// added by [`Topology::with_diagonals`](crate::Topology::with_diagonals)
/// for the X-Sudoku variant.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Cell, DiagonalKind, Unit};
///
/// let row = Unit::Row { row: 0 };
/// assert_eq!(row.cell(3), Cell::new(0, 3));
///
/// let diagonal = Unit::Diagonal {
///     kind: DiagonalKind::Up,
/// };
/// assert_eq!(diagonal.cell(0), Cell::new(8, 0));
/// assert_eq!(diagonal.cell(8), Cell::new(0, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A row identified by its index (0-8, top to bottom).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its index (0-8, left to right).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
    /// One of the two main diagonals.
    Diagonal {
        /// Which diagonal.
        kind: DiagonalKind,
    },
}

impl Unit {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut units = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            units[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        units
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut units = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            units[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        units
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut units = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            units[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        units
    };

    /// Array containing both main diagonals.
    pub const DIAGONALS: [Self; 2] = [
        Self::Diagonal {
            kind: DiagonalKind::Down,
        },
        Self::Diagonal {
            kind: DiagonalKind::Up,
        },
    ];

    /// Returns the `i`-th cell of this unit.
    ///
    /// Rows and diagonals are ordered left to right, columns top to bottom,
    /// and boxes row-major within the box.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn cell(self, i: u8) -> Cell {
        assert!(i < 9);
        match self {
            Self::Row { row } => Cell::new(row, i),
            Self::Column { col } => Cell::new(i, col),
            Self::Box { index } => Cell::new((index / 3) * 3 + i / 3, (index % 3) * 3 + i % 3),
            Self::Diagonal {
                kind: DiagonalKind::Down,
            } => Cell::new(i, i),
            Self::Diagonal {
                kind: DiagonalKind::Up,
            } => Cell::new(8 - i, i),
        }
    }

    /// Returns the nine cells of this unit.
    #[must_use]
    pub const fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell::from_index(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            cells[i] = self.cell(i as u8);
            i += 1;
        }
        cells
    }
}
