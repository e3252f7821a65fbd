use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::win::check_win;
use super::{Board, Player};
use crate::error::C4Error;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::Won(player) => write!(f, "{} won", player),
            Status::Draw => write!(f, "draw"),
        }
    }
}

///
/// One step of a game: the board, whose turn it is and whether it's over.
///
/// States only move forward through `apply_move`, which returns the next
/// state and leaves this one as it was.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
}

impl GameState {
    pub fn new(first_player: Player) -> GameState {
        GameState {
            board: Board::empty(),
            current_player: first_player,
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move, or the winner once the game is won
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn available_columns(&self) -> Vec<usize> {
        self.board.available_columns()
    }

    pub fn moves_played(&self) -> usize {
        self.board.occupied_count()
    }

    ///
    /// Drops the current player's piece into `column` and works out what
    /// happens next.
    ///
    /// A winning move keeps `current_player` on the winner. A move that fills
    /// the board without a win is a draw. Anything else passes the turn.
    ///
    pub fn apply_move(&self, column: usize) -> Result<GameState, C4Error> {
        if self.status.is_terminal() {
            return Err(C4Error::GameAlreadyOver {
                status: self.status,
            });
        }

        let mover = self.current_player;
        let board = self.board.drop_piece(column, mover)?;
        debug!("Player {} plays column {}", mover, column);

        let status = if check_win(&board, mover) {
            Status::Won(mover)
        } else if board.is_full() {
            Status::Draw
        } else {
            Status::InProgress
        };
        if status.is_terminal() {
            info!(
                "Game over after {} moves: {}",
                board.occupied_count(),
                status
            );
        }

        Ok(GameState {
            board,
            current_player: match status {
                Status::InProgress => mover.other(),
                _ => mover,
            },
            status,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Player::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::c4::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

    fn play(state: GameState, columns: &[usize]) -> GameState {
        columns
            .iter()
            .fold(state, |state, &column| state.apply_move(column).unwrap())
    }

    /// A full game with no four in a row, P1 moving first.
    const DRAWN_GAME: [usize; 42] = [
        5, 3, 2, 3, 1, 5, 3, 1, 0, 1, 4, 1, 2, 5, 0, 5, 6, 6, 2, 0, 6, 0, 4, 2, 3, 0, 3, 4, 2, 3,
        2, 6, 0, 4, 1, 1, 5, 4, 4, 5, 6, 6,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.current_player(), Player::P1);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.moves_played(), 0);
        assert_eq!(*state.board(), Board::empty());

        let state = GameState::new(Player::P2);
        assert_eq!(state.current_player(), Player::P2);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new(Player::P2);
        for (i, column) in [3, 3, 4, 0, 6].into_iter().enumerate() {
            let before = state.current_player();
            state = state.apply_move(column).unwrap();
            assert_eq!(state.current_player(), before.other());
            assert_eq!(state.moves_played(), i + 1);
        }
    }

    #[test]
    fn test_vertical_win_keeps_winner_as_current() {
        // P1 stacks column 0, P2 stacks column 1
        let state = play(GameState::default(), &[0, 1, 0, 1, 0, 1]);
        assert_eq!(state.status(), Status::InProgress);
        let state = state.apply_move(0).unwrap();
        assert_eq!(state.status(), Status::Won(Player::P1));
        assert_eq!(state.current_player(), Player::P1);
        assert_eq!(state.moves_played(), 7);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let won = play(GameState::default(), &[0, 1, 0, 1, 0, 1, 0]);
        let before = won;
        assert!(matches!(
            won.apply_move(2),
            Err(C4Error::GameAlreadyOver {
                status: Status::Won(Player::P1)
            })
        ));
        assert_eq!(won, before);
        assert_eq!(won.board().cell(2, BOARD_HEIGHT - 1), Some(Cell::Empty));
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let state = play(GameState::default(), &[5, 5, 5, 5, 5, 5]);
        assert!(matches!(
            state.apply_move(5),
            Err(C4Error::ColumnFull { column: 5 })
        ));
        assert!(matches!(
            state.apply_move(BOARD_WIDTH),
            Err(C4Error::InvalidColumn { .. })
        ));
        assert_eq!(state.current_player(), Player::P1);
        assert_eq!(state.moves_played(), 6);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let (last, rest) = DRAWN_GAME.split_last().unwrap();
        let state = play(GameState::default(), rest);
        assert_eq!(state.status(), Status::InProgress);

        let state = state.apply_move(*last).unwrap();
        assert_eq!(state.status(), Status::Draw);
        assert!(state.board().is_full());
        assert_eq!(state.current_player(), Player::P2);
        assert_eq!(state.moves_played(), BOARD_WIDTH * BOARD_HEIGHT);
        assert!(matches!(
            state.apply_move(0),
            Err(C4Error::GameAlreadyOver {
                status: Status::Draw
            })
        ));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::InProgress.to_string(), "in progress");
        assert_eq!(Status::Won(Player::P1).to_string(), "P1 won");
        assert_eq!(Status::Draw.to_string(), "draw");
    }
}
