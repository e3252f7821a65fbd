//! Four-in-a-row detection.
//!
//! Each check looks for a line of `CONNECT` cells owned by one player.
//! Only the player who just moved needs checking: a move can't complete a
//! line for the opponent.
use log::trace;

use super::{Board, Cell, Player, BOARD_HEIGHT, BOARD_WIDTH, CONNECT};

fn owned_by(board: &Board, column: usize, row: usize, player: Player) -> bool {
    board.cell(column, row) == Some(Cell::Occupied(player))
}

pub fn check_vertical(board: &Board, player: Player) -> bool {
    for column in 0..BOARD_WIDTH {
        let mut consecutive = 0;
        for row in 0..BOARD_HEIGHT {
            if owned_by(board, column, row, player) {
                consecutive += 1;
                if consecutive == CONNECT {
                    return true;
                }
            } else {
                consecutive = 0;
            }
        }
    }
    false
}

pub fn check_horizontal(board: &Board, player: Player) -> bool {
    for row in 0..BOARD_HEIGHT {
        let mut consecutive = 0;
        for column in 0..BOARD_WIDTH {
            if owned_by(board, column, row, player) {
                consecutive += 1;
                if consecutive == CONNECT {
                    return true;
                }
            } else {
                consecutive = 0;
            }
        }
    }
    false
}

/// Bottom-left to top-right (`/`)
pub fn check_diagonal_rising(board: &Board, player: Player) -> bool {
    for column in 0..=BOARD_WIDTH - CONNECT {
        for row in CONNECT - 1..BOARD_HEIGHT {
            if (0..CONNECT).all(|i| owned_by(board, column + i, row - i, player)) {
                return true;
            }
        }
    }
    false
}

/// Bottom-right to top-left (`\`)
pub fn check_diagonal_falling(board: &Board, player: Player) -> bool {
    for column in CONNECT - 1..BOARD_WIDTH {
        for row in CONNECT - 1..BOARD_HEIGHT {
            if (0..CONNECT).all(|i| owned_by(board, column - i, row - i, player)) {
                return true;
            }
        }
    }
    false
}

pub fn check_win(board: &Board, player: Player) -> bool {
    let won = check_vertical(board, player)
        || check_horizontal(board, player)
        || check_diagonal_rising(board, player)
        || check_diagonal_falling(board, player);
    if won {
        trace!("{} has four in a row", player);
    }
    won
}
