//! Text rendering of a board: six lines, top row first, seven glyphs each.
use std::fmt;

use super::{Board, Cell, Player, BOARD_HEIGHT, BOARD_WIDTH};

pub const EMPTY_GLYPH: char = '◦';

pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Occupied(Player::P1) => '●',
        Cell::Occupied(Player::P2) => '◯',
    }
}

/// Column numbers, lined up over `Board`'s `Display` output
pub fn column_header() -> String {
    (0..BOARD_WIDTH).map(|column| column.to_string()).collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_HEIGHT {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..BOARD_WIDTH {
                write!(
                    f,
                    "{}",
                    glyph(self.cell(column, row).unwrap_or(Cell::Empty))
                )?;
            }
        }
        Ok(())
    }
}
