//! 3x3 board state, move legality, and win/tie queries.

use crate::player::Player;
use derive_more::{Display, Error};
use std::rc::Rc;

/// Rows and columns per side. Fixed; the board does not generalize.
const SIZE: usize = 3;

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Errors that can occur when placing a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Row or column index is outside 0-2.
    #[display("cell ({row}, {column}) is out of bounds")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// Cell is already occupied.
    #[display("cell ({row}, {column}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Each cell is empty or holds a shared reference to the occupying player;
/// the displayed marker is always derived from the occupant. The board is
/// created empty and never shrinks or resets within a game.
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: [[Option<Rc<Player>>; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `player` into the given cell, 0-based indices.
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::OutOfBounds` if either index exceeds 2, or
    /// `PlaceError::Occupied` if the cell already holds a player. Callers
    /// that pre-filter against [`Board::available_cells`] never see either.
    pub fn place(&mut self, row: usize, column: usize, player: &Rc<Player>) -> Result<(), PlaceError> {
        if row >= SIZE || column >= SIZE {
            return Err(PlaceError::OutOfBounds { row, column });
        }
        let cell = &mut self.cells[row][column];
        if cell.is_some() {
            return Err(PlaceError::Occupied { row, column });
        }
        *cell = Some(Rc::clone(player));
        Ok(())
    }

    /// Checks whether the cell holds exactly this player identity.
    ///
    /// Out-of-range queries return false.
    pub fn is_occupied_by(&self, row: usize, column: usize, player: &Player) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .is_some_and(|cell| cell.as_deref() == Some(player))
    }

    /// Returns all empty cells as `(row, column)` pairs in row-major order.
    pub fn available_cells(&self) -> Vec<(usize, usize)> {
        let mut open = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    open.push((row, column));
                }
            }
        }
        open
    }

    /// Checks whether `player` occupies all three cells of any winning line.
    pub fn has_winner(&self, player: &Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(row, column)| self.is_occupied_by(row, column, player)))
    }

    /// Formats the board for display.
    ///
    /// Each cell shows its occupant's marker or a single space, columns are
    /// joined by `|` with no trailing separator, and every row ends with a
    /// newline, the last included.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for cells in &self.cells {
            for (column, cell) in cells.iter().enumerate() {
                match cell {
                    Some(player) => out.push(player.marker()),
                    None => out.push(' '),
                }
                if column < SIZE - 1 {
                    out.push('|');
                }
            }
            out.push('\n');
        }
        out
    }
}
