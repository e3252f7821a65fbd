//! Arena settings, read from a JSON file.
//!
//! ```json
//! {
//!     "episodes": 100,
//!     "first_player": "P1",
//!     "seed": 7,
//!     "players": [{ "type": "Random" }, { "type": "Scripted", "columns": [3, 3, 3] }]
//! }
//! ```
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::c4::Player;
use crate::error::ConfigError;
use crate::strategy::{PlayerStrategy, RandomStrategy, ScriptedStrategy};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ArenaSettings {
    pub episodes: usize,
    #[serde(default)]
    pub first_player: Player,
    #[serde(default)]
    pub seed: Option<u64>,
    pub players: Vec<PlayerSettings>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum PlayerSettings {
    Random,
    Scripted { columns: Vec<usize> },
}

impl PlayerSettings {
    /// Seeded strategies get `seed`; unseeded ones draw from entropy.
    pub fn strategy(&self, seed: Option<u64>) -> Box<dyn PlayerStrategy> {
        match self {
            PlayerSettings::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::seeded(seed)),
                None => Box::new(RandomStrategy::new()),
            },
            PlayerSettings::Scripted { columns } => {
                Box::new(ScriptedStrategy::new(columns.iter().copied()))
            }
        }
    }
}

impl ArenaSettings {
    pub fn load(path: &Path) -> Result<ArenaSettings, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        ArenaSettings::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<ArenaSettings, ConfigError> {
        let settings: ArenaSettings = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::Validation(format!(
                "expected 2 players, found {}",
                self.players.len()
            )));
        }
        if self.episodes == 0 {
            return Err(ConfigError::Validation(
                "episodes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    ///
    /// Fresh strategies for one episode, indexed by `Player::index`.
    ///
    /// With a seed, episode `n` uses `seed + 2n` for P1 and `seed + 2n + 1`
    /// for P2 so a whole run can be replayed.
    ///
    pub fn strategies(&self, episode: usize) -> [Box<dyn PlayerStrategy>; 2] {
        let seed_for = |offset: u64| {
            let step = (episode as u64).wrapping_mul(2).wrapping_add(offset);
            self.seed.map(|seed| seed.wrapping_add(step))
        };
        [
            self.players[0].strategy(seed_for(0)),
            self.players[1].strategy(seed_for(1)),
        ]
    }
}
