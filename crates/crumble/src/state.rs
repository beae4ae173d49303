//! Game-wide state: score, lives, pause and game-over flags.
//!
//! One live instance, owned by the [`Context`](crate::context::Context) and
//! replaced wholesale on reset (new game, level change) — never partially
//! mutated during a reset. `game_over` is one-way: once lives hit zero the
//! state becomes absorbing and further scoring or life loss are no-ops.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    pub paused: bool,
    /// Active-play time between food spawns.
    pub food_spawn_interval: Duration,
}

impl GameState {
    /// Fresh state. The game starts paused, waiting for the first input.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            game_over: false,
            paused: true,
            food_spawn_interval: config.food_spawn_interval,
        }
    }

    /// Add points. No-op once the game is over.
    pub fn add_score(&mut self, points: u32) {
        if self.game_over {
            return;
        }
        self.score += points;
    }

    /// Deduct one life; sets `game_over` exactly when lives reaches zero.
    /// No-op once the game is over.
    pub fn lose_life(&mut self) {
        if self.game_over {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            info!("out of lives, game over at score {}", self.score);
        }
    }
}
