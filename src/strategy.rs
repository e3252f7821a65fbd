//! Sources of moves for the game loop.
mod human;

use std::collections::VecDeque;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::c4::GameState;
use crate::error::C4Error;

pub use human::HumanStrategy;

/// Picks the column for the player whose turn it is.
pub trait PlayerStrategy {
    fn select_column(&mut self, state: &GameState) -> Result<usize, C4Error>;

    fn name(&self) -> &str;
}

/// Uniformly random choice among the available columns.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStrategy for RandomStrategy {
    fn select_column(&mut self, state: &GameState) -> Result<usize, C4Error> {
        let available = state.available_columns();
        if available.is_empty() {
            return Err(C4Error::NoAvailableColumns);
        }
        let column = available[self.rng.gen_range(0..available.len())];
        trace!("Random pick {} from {:?}", column, available);
        Ok(column)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

///
/// Replays a fixed list of columns, one per call.
///
/// The columns are handed out as given, even if they aren't playable, so a
/// script can be used to drive rejected moves too.
///
pub struct ScriptedStrategy {
    columns: VecDeque<usize>,
}

impl ScriptedStrategy {
    pub fn new(columns: impl IntoIterator<Item = usize>) -> Self {
        ScriptedStrategy {
            columns: columns.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.columns.len()
    }
}

impl PlayerStrategy for ScriptedStrategy {
    fn select_column(&mut self, state: &GameState) -> Result<usize, C4Error> {
        if state.board().is_full() {
            return Err(C4Error::NoAvailableColumns);
        }
        self.columns.pop_front().ok_or(C4Error::NoAvailableColumns)
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
