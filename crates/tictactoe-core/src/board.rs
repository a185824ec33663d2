//! Board representation for the 3x3 grid.
//!
//! This module contains:
//! - Mark types for the two sides (player crosses, computer circles)
//! - The cell type and the fixed 9-cell board
//! - The 8 winning lines and line queries
//! - Row/column helpers and a plain-text rendering of the grid

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a cell on the board (0-8, row-major)
pub type CellIndex = usize;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the grid
pub const SIDE: usize = 3;

/// Every triple of cells that wins when held by a single mark.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
pub const WINNING_LINES: [[CellIndex; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// The two marks that can occupy a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player, drawn as a cross
    Player,
    /// The computer, drawn as a circle
    Computer,
}

impl Mark {
    /// Both marks, in turn order
    pub const ALL: [Mark; 2] = [Mark::Player, Mark::Computer];

    /// The mark that moves on the given turn. Even turns belong to the player.
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Mark::Player
        } else {
            Mark::Computer
        }
    }

    /// The other side
    pub fn opponent(&self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Symbol used when rendering the mark as text
    pub fn symbol(&self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// Whether nothing has been placed here
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(*mark),
        }
    }
}

/// The 3x3 game board
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at an index, or `None` if the index is off the board
    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Whether the index is on the board and nothing has been placed there
    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Place a mark. Callers are responsible for checking the cell is free.
    pub(crate) fn set(&mut self, index: CellIndex, mark: Mark) {
        self.cells[index] = Cell::Marked(mark);
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of every empty cell, in ascending order
    pub fn empty_cells(&self) -> Vec<CellIndex> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.filled_count() == CELL_COUNT
    }

    /// Whether any winning line is held entirely by `mark`
    pub fn has_line(&self, mark: Mark) -> bool {
        self.completed_line(mark).is_some()
    }

    /// The first winning line held entirely by `mark`
    pub fn completed_line(&self, mark: Mark) -> Option<[CellIndex; 3]> {
        let target = Cell::Marked(mark);
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&index| self.cells[index] == target))
            .copied()
    }

    /// Convert a row and column (0-indexed) to a cell index
    pub fn index_of(row: usize, col: usize) -> Option<CellIndex> {
        if row < SIDE && col < SIDE {
            Some(row * SIDE + col)
        } else {
            None
        }
    }

    /// Convert a cell index to its row and column
    pub fn coords_of(index: CellIndex) -> Option<(usize, usize)> {
        if index < CELL_COUNT {
            Some((index / SIDE, index % SIDE))
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(mark) => mark.symbol().to_string(),
                })
                .collect();
            writeln!(f, "{}", symbols.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(CellIndex, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board.set(index, mark);
        }
        board
    }

    #[test]
    fn test_mark_for_turn_alternates() {
        assert_eq!(Mark::for_turn(0), Mark::Player);
        assert_eq!(Mark::for_turn(1), Mark::Computer);
        assert_eq!(Mark::for_turn(2), Mark::Player);
        assert_eq!(Mark::for_turn(7), Mark::Computer);
    }

    #[test]
    fn test_mark_symbols() {
        assert_eq!(Mark::Player.symbol(), 'X');
        assert_eq!(Mark::Computer.symbol(), 'O');
        assert_eq!(Mark::Player.opponent(), Mark::Computer);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(board.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_winning_lines_cover_rows_columns_diagonals() {
        assert_eq!(WINNING_LINES.len(), 8);
        // The center cell sits on both diagonals, its row and its column
        let through_center = WINNING_LINES.iter().filter(|l| l.contains(&4)).count();
        assert_eq!(through_center, 4);
    }

    #[test]
    fn test_has_line_row() {
        let board = board_from(&[(0, Mark::Player), (1, Mark::Player), (2, Mark::Player)]);
        assert!(board.has_line(Mark::Player));
        assert!(!board.has_line(Mark::Computer));
        assert_eq!(board.completed_line(Mark::Player), Some([0, 1, 2]));
    }

    #[test]
    fn test_has_line_column() {
        let board = board_from(&[(2, Mark::Computer), (5, Mark::Computer), (8, Mark::Computer)]);
        assert!(board.has_line(Mark::Computer));
        assert_eq!(board.completed_line(Mark::Computer), Some([2, 5, 8]));
    }

    #[test]
    fn test_has_line_anti_diagonal() {
        let board = board_from(&[(2, Mark::Player), (4, Mark::Player), (6, Mark::Player)]);
        assert_eq!(board.completed_line(Mark::Player), Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(0, Mark::Player), (1, Mark::Computer), (2, Mark::Player)]);
        assert!(!board.has_line(Mark::Player));
        assert!(!board.has_line(Mark::Computer));
    }

    #[test]
    fn test_index_coords_conversion() {
        assert_eq!(Board::index_of(0, 0), Some(0));
        assert_eq!(Board::index_of(1, 2), Some(5));
        assert_eq!(Board::index_of(2, 2), Some(8));
        assert_eq!(Board::index_of(3, 0), None);
        assert_eq!(Board::coords_of(7), Some((2, 1)));
        assert_eq!(Board::coords_of(9), None);
    }

    #[test]
    fn test_display_grid() {
        let board = board_from(&[(0, Mark::Player), (4, Mark::Computer)]);
        let expected = "X | . | .\n---------\n. | O | .\n---------\n. | . | .\n";
        assert_eq!(board.to_string(), expected);
    }
}
