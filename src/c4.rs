//! Connect Four on the standard 7 x 6 board.
//!
//! Columns run 0 (left) to 6 (right), rows run 0 (top) to 5 (bottom).
//! Pieces fall to the lowest empty row of the column they are dropped in.
mod board;
pub mod render;
mod state;
pub mod win;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use board::Board;
pub use state::{GameState, Status};

pub const BOARD_WIDTH: usize = 7;
pub const BOARD_HEIGHT: usize = 6;
/// Pieces in a line needed to win
pub const CONNECT: usize = 4;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize, ValueEnum)]
pub enum Player {
    #[default]
    #[value(name = "P1")]
    P1,
    #[value(name = "P2")]
    P2,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// 0 for P1, 1 for P2
    pub fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::P1 => write!(f, "P1"),
            Player::P2 => write!(f, "P2"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}
