//! Game loop: ask the player to move for a column, apply it, repeat.
use log::debug;
use serde::Serialize;

use crate::c4::{GameState, Player, Status};
use crate::error::C4Error;
use crate::strategy::PlayerStrategy;

///
/// Plays `initial` out to a win or a draw.
///
/// `strategies` is indexed by `Player::index`. `observe` sees every state
/// after a move is applied, including the final one. Errors from a strategy
/// or a rejected move end the game early and are handed back.
///
pub fn play_game(
    initial: GameState,
    strategies: &mut [Box<dyn PlayerStrategy>; 2],
    mut observe: impl FnMut(&GameState),
) -> Result<GameState, C4Error> {
    let mut state = initial;
    while !state.is_terminal() {
        let player = state.current_player();
        let strategy = &mut strategies[player.index()];
        let column = strategy.select_column(&state)?;
        debug!("{} ({}) picks column {}", player, strategy.name(), column);
        state = state.apply_move(column)?;
        observe(&state);
    }
    Ok(state)
}

/// Outcome counts over a run of games
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Won(Player::P1) => self.p1_wins += 1,
            Status::Won(Player::P2) => self.p2_wins += 1,
            Status::Draw => self.draws += 1,
            Status::InProgress => {}
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::P1 => self.p1_wins,
            Player::P2 => self.p2_wins,
        }
    }

    pub fn games(&self) -> usize {
        self.p1_wins + self.p2_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{RandomStrategy, ScriptedStrategy};

    #[test]
    fn test_scripted_game_reaches_win() {
        let mut strategies: [Box<dyn PlayerStrategy>; 2] = [
            Box::new(ScriptedStrategy::new([3, 3, 3, 3])),
            Box::new(ScriptedStrategy::new([0, 0, 0])),
        ];
        let mut seen = vec![];
        let state = play_game(GameState::default(), &mut strategies, |state| {
            seen.push(state.moves_played())
        })
        .unwrap();
        assert_eq!(state.status(), Status::Won(Player::P1));
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_second_player_can_start() {
        let mut strategies: [Box<dyn PlayerStrategy>; 2] = [
            Box::new(ScriptedStrategy::new([0, 0, 0])),
            Box::new(ScriptedStrategy::new([1, 2, 3, 4])),
        ];
        let state = play_game(GameState::new(Player::P2), &mut strategies, |_| {}).unwrap();
        assert_eq!(state.status(), Status::Won(Player::P2));
        assert_eq!(state.moves_played(), 7);
    }

    #[test]
    fn test_rejected_move_stops_game() {
        let mut strategies: [Box<dyn PlayerStrategy>; 2] = [
            Box::new(ScriptedStrategy::new([0, 8])),
            Box::new(ScriptedStrategy::new([1])),
        ];
        let mut last = GameState::default();
        let result = play_game(GameState::default(), &mut strategies, |state| last = *state);
        assert!(matches!(result, Err(C4Error::InvalidColumn { column: 8 })));
        assert_eq!(last.moves_played(), 2);
    }

    #[test]
    fn test_random_games_always_finish() {
        for seed in 0..50 {
            let mut strategies: [Box<dyn PlayerStrategy>; 2] = [
                Box::new(RandomStrategy::seeded(seed)),
                Box::new(RandomStrategy::seeded(seed + 1000)),
            ];
            let state = play_game(GameState::default(), &mut strategies, |_| {}).unwrap();
            assert!(state.is_terminal());
            assert!(state.moves_played() <= 42);
        }
    }

    #[test]
    fn test_tally() {
        let mut tally = Tally::default();
        tally.record(Status::Won(Player::P1));
        tally.record(Status::Won(Player::P1));
        tally.record(Status::Won(Player::P2));
        tally.record(Status::Draw);
        tally.record(Status::InProgress);
        assert_eq!(tally.wins(Player::P1), 2);
        assert_eq!(tally.wins(Player::P2), 1);
        assert_eq!(tally.draws, 1);
        assert_eq!(tally.games(), 4);
    }
}
