use log::trace;
use serde::Serialize;

use super::{Cell, Player, BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::C4Error;

/// The 7 x 6 grid. Indexed `[row][column]`, row 0 at the top.
///
/// A board is a plain value: `drop_piece` hands back a new board and leaves
/// the original alone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    ///
    /// Builds a board from a text grid, one line per row from the top.
    ///
    /// `.` is empty, `X` is P1 and `O` is P2 (either case). Whitespace inside
    /// a line is ignored, as are blank lines. Pieces must rest on the bottom
    /// or on another piece.
    ///
    pub fn load(layout: &str) -> Result<Board, C4Error> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .filter(|row: &Vec<char>| !row.is_empty())
            .collect();
        if rows.len() != BOARD_HEIGHT {
            return Err(C4Error::InvalidLayout(format!(
                "expected {} rows, found {}",
                BOARD_HEIGHT,
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != BOARD_WIDTH {
                return Err(C4Error::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    glyphs.len(),
                    BOARD_WIDTH
                )));
            }
            for (column, glyph) in glyphs.iter().enumerate() {
                board.cells[row][column] = match glyph {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::Occupied(Player::P1),
                    'O' | 'o' => Cell::Occupied(Player::P2),
                    other => {
                        return Err(C4Error::InvalidLayout(format!(
                            "unknown cell '{}' at column {}, row {}",
                            other, column, row
                        )))
                    }
                };
            }
        }

        for column in 0..BOARD_WIDTH {
            for row in 0..BOARD_HEIGHT - 1 {
                if !board.cells[row][column].is_empty() && board.cells[row + 1][column].is_empty() {
                    return Err(C4Error::InvalidLayout(format!(
                        "floating piece at column {}, row {}",
                        column, row
                    )));
                }
            }
        }
        Ok(board)
    }

    /// `None` when the coordinates are off the board
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
    }

    /// Columns that still have room, left to right
    pub fn available_columns(&self) -> Vec<usize> {
        (0..BOARD_WIDTH)
            .filter(|&column| self.cells[0][column].is_empty())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.available_columns().is_empty()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    ///
    /// Drops a piece for `player` into `column`, returning the new board.
    ///
    /// The piece lands in the lowest empty row of the column.
    ///
    pub fn drop_piece(&self, column: usize, player: Player) -> Result<Board, C4Error> {
        if column >= BOARD_WIDTH {
            return Err(C4Error::InvalidColumn { column });
        }
        let row = (0..BOARD_HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .ok_or(C4Error::ColumnFull { column })?;

        trace!("{} lands at column {}, row {}", player, column, row);
        let mut new_board = *self;
        new_board.cells[row][column] = Cell::Occupied(player);
        Ok(new_board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}
