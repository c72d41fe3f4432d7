//! Board state and the textual grid codec.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet};

/// Errors from parsing a textual grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input does not contain exactly 81 cells.
    #[display("expected 81 cells, found {len}")]
    WrongLength {
        /// Number of cells found in the input.
        len: usize,
    },
    /// The input contains a character outside `1`-`9` and `.`.
    #[display("invalid character {found:?} at cell {index}")]
    InvalidCharacter {
        /// Row-major index of the offending cell.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// The candidate sets of all 81 cells.
///
/// A cell is *solved* when its candidate set has exactly one member. An
/// empty candidate set marks a contradiction; the board itself never
/// rejects one, it is the solver's job to detect it via
/// [`contradiction`](Self::contradiction) and abandon the branch.
///
/// `Board` is value-like: [`Clone`] produces a fully independent copy, so a
/// search branch can mutate its copy without affecting siblings.
///
/// # Textual form
///
/// [`FromStr`] accepts 81 characters in row-major order, `1`-`9` for given
/// digits and `.` for blanks, with surrounding whitespace ignored.
/// [`Display`] renders a 9×9 grid of candidate sets with box separators,
/// and [`to_line`](Self::to_line) renders the flat 81-character form back.
///
/// # Examples
///
/// ```
/// use xdoku_core::{Board, Cell, Digit};
///
/// let mut board = Board::new();
/// assert_eq!(board.candidates(Cell::new(0, 0)).len(), 9);
///
/// board.assign(Cell::new(0, 0), Digit::D5);
/// assert_eq!(board.value(Cell::new(0, 0)), Some(Digit::D5));
/// assert_eq!(board.solved_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Board {
    /// Creates a board where every cell holds the full candidate set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set of the cell.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Reduces the cell's candidate set to a single digit.
    pub fn assign(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.index()] = DigitSet::singleton(digit);
    }

    /// Removes a single candidate from the cell, returning `true` when the
    /// set shrank.
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Removes every digit of `digits` from the cell's candidates,
    /// returning `true` when the set shrank.
    pub fn remove_candidates(&mut self, cell: Cell, digits: DigitSet) -> bool {
        self.cells[cell.index()].remove_all(digits)
    }

    /// Returns the cell's digit when it is solved.
    #[must_use]
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()].as_single()
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` when every cell is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Returns the first cell whose candidate set is empty, if any.
    #[must_use]
    pub fn contradiction(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.cells[cell.index()].is_empty())
    }

    /// Renders the flat 81-character form: solved cells as their digit,
    /// everything else as `.`.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|set| set.as_single().map_or('.', Digit::to_char))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseBoardError::WrongLength { len });
        }

        let mut cells = [DigitSet::FULL; 81];
        for (index, c) in s.chars().enumerate() {
            match c {
                '.' => {}
                _ => match Digit::from_char(c) {
                    Some(digit) => cells[index] = DigitSet::singleton(digit),
                    None => return Err(ParseBoardError::InvalidCharacter { index, found: c }),
                },
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Board {
    /// Renders the board as a 9×9 grid of candidate sets with box
    /// separators, widening columns to the largest candidate set present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(|set| set.len()).max().unwrap_or(1);
        let segment = "-".repeat(width * 3);
        let line = [segment.as_str(); 3].join("+");
        for row in 0..9 {
            for col in 0..9 {
                let candidates = self.candidates(Cell::new(row, col)).to_string();
                write!(f, "{candidates:^width$}")?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY_GRID: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

    #[test]
    fn test_parse_givens_and_blanks() {
        let board: Board = EASY_GRID.parse().unwrap();
        assert_eq!(board.value(Cell::new(0, 2)), Some(Digit::D3));
        assert_eq!(board.value(Cell::new(8, 2)), Some(Digit::D5));
        assert_eq!(board.value(Cell::new(0, 0)), None);
        assert_eq!(board.candidates(Cell::new(0, 0)), DigitSet::FULL);
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        let padded = format!("  {EASY_GRID}\n");
        let board: Board = padded.parse().unwrap();
        assert_eq!(board.to_line(), EASY_GRID);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = EASY_GRID[..80].parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongLength { len: 80 });
    }

    #[test]
    fn test_parse_rejects_long_input() {
        let long = format!("{EASY_GRID}.");
        let err = long.parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongLength { len: 82 });
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let mut grid: Vec<char> = EASY_GRID.chars().collect();
        grid[40] = '0';
        let text: String = grid.into_iter().collect();
        let err = text.parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            ParseBoardError::InvalidCharacter {
                index: 40,
                found: '0'
            }
        );
    }

    #[test]
    fn test_to_line_round_trip() {
        let board: Board = EASY_GRID.parse().unwrap();
        assert_eq!(board.to_line(), EASY_GRID);
    }

    #[test]
    fn test_assign_and_remove() {
        let mut board = Board::new();
        let cell = Cell::new(4, 4);

        assert!(board.remove_candidate(cell, Digit::D3));
        assert!(!board.remove_candidate(cell, Digit::D3));
        assert_eq!(board.candidates(cell).len(), 8);

        board.assign(cell, Digit::D7);
        assert_eq!(board.value(cell), Some(Digit::D7));
        assert_eq!(board.solved_count(), 1);
    }

    #[test]
    fn test_contradiction_detection() {
        let mut board = Board::new();
        assert_eq!(board.contradiction(), None);

        let cell = Cell::new(2, 3);
        board.remove_candidates(cell, DigitSet::FULL);
        assert_eq!(board.contradiction(), Some(cell));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::new();
        let mut copy = original.clone();
        copy.assign(Cell::new(0, 0), Digit::D1);

        assert_eq!(original.value(Cell::new(0, 0)), None);
        original.assign(Cell::new(0, 0), Digit::D2);
        assert_eq!(copy.value(Cell::new(0, 0)), Some(Digit::D1));
    }

    #[test]
    fn test_display_layout() {
        let board: Board = EASY_GRID.parse().unwrap();
        let rendered = board.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[3].contains('+'));
        assert!(lines[0].contains('|'));
    }
}
