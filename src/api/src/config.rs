use crate::error::ConfigError;
use crate::game::board::{parse_layout, STANDARD_LAYOUT};
use crate::game::rack::DEFAULT_RACK_SIZE;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_seeder::Seeder;
use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub board_layout: String,
    pub seed: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_RACK_SIZE,
            board_layout: STANDARD_LAYOUT.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(size) = env::var("HAND_SIZE") {
            if let Ok(value) = size.parse::<usize>() {
                config.hand_size = value;
            }
        }

        if let Ok(layout) = env::var("BOARD_LAYOUT") {
            if !layout.trim().is_empty() {
                config.board_layout = layout;
            }
        }

        if let Ok(seed) = env::var("GAME_SEED") {
            if !seed.is_empty() {
                config.seed = Some(seed);
            }
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        parse_layout(&self.board_layout)?;
        Ok(())
    }

    /// Seeded games are reproducible: the same seed string always deals the
    /// same tiles.
    pub fn rng(&self) -> StdRng {
        match &self.seed {
            Some(seed) => StdRng::from_seed(Seeder::from(seed.as_str()).make_seed()),
            None => StdRng::from_entropy(),
        }
    }
}
