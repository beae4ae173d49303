//! Startup configuration.
//!
//! A [`GameConfig`] is built once at startup and treated as immutable for
//! the process lifetime. [`GameConfig::default`] carries the canonical
//! constants; [`GameConfig::slow_mode`] is the debug variant with a 1-second
//! tick and a one-minute spawn interval. Configs round-trip through JSON so
//! a variant can be kept on disk next to the binary.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Food spawned in a given scene: sprite identity, point value, fall weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodConfig {
    pub sprite: String,
    pub value: u32,
    /// Constant fall speed in pixels per tick. Heavier falls faster.
    pub weight: f32,
}

/// When and where a scene hands over to the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceRule {
    /// Score that triggers the transition while this scene is current.
    pub score: u32,
    pub next: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    pub food: FoodConfig,
    /// `None` for the final scene.
    pub advance: Option<AdvanceRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Timer period of the scheduler loop.
    pub tick_period: Duration,
    pub initial_player_position: Vec2,
    /// Horizontal speed in pixels per tick while a movement key is held.
    pub player_movement_speed: f32,
    /// Downward speed in pixels per tick while falling.
    pub player_fall_speed: f32,
    /// Upward velocity applied on jump (negative: y grows downward).
    pub jump_height: f32,
    /// Wall-clock delay before the jump-completion check fires.
    pub jump_check_delay: Duration,
    /// Discrete x positions food may spawn at.
    pub food_spawn_positions: Vec<f32>,
    pub food_spawn_y: f32,
    /// y the player stands at when grounded on the tile row.
    pub walkable_ground_level: f32,
    /// y of the tile row itself.
    pub ground_level: f32,
    pub starting_lives: u32,
    pub food_spawn_interval: Duration,
    /// Seed for the spawn-position RNG; fixed seed gives reproducible runs.
    pub rng_seed: u64,
    pub scenes: Vec<SceneConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 500.0,
            window_height: 500.0,
            tick_period: Duration::from_micros(16_667), // ~60 ticks/s
            initial_player_position: Vec2::new(300.0, 300.0),
            player_movement_speed: 3.0,
            player_fall_speed: 3.0,
            jump_height: -6.0,
            jump_check_delay: Duration::from_millis(500),
            food_spawn_positions: (0..10).map(|i| 2.0 + 50.0 * i as f32).collect(),
            food_spawn_y: 20.0,
            walkable_ground_level: 350.0,
            ground_level: 400.0,
            starting_lives: 5,
            food_spawn_interval: Duration::from_millis(2000),
            rng_seed: 0,
            scenes: vec![
                SceneConfig {
                    name: "cupcake-world".to_string(),
                    food: FoodConfig {
                        sprite: "cupcake".to_string(),
                        value: 1,
                        weight: 3.0,
                    },
                    advance: Some(AdvanceRule {
                        score: 10,
                        next: "space-world".to_string(),
                    }),
                },
                SceneConfig {
                    name: "space-world".to_string(),
                    food: FoodConfig {
                        sprite: "star".to_string(),
                        value: 10,
                        weight: 5.0,
                    },
                    advance: None,
                },
            ],
        }
    }
}

impl GameConfig {
    /// Debug variant: one tick per second, one food per minute.
    pub fn slow_mode() -> Self {
        Self {
            tick_period: Duration::from_millis(1000),
            food_spawn_interval: Duration::from_secs(60),
            ..Self::default()
        }
    }

    /// Look up a scene's configuration by name.
    pub fn scene(&self, name: &str) -> Option<&SceneConfig> {
        self.scenes.iter().find(|s| s.name == name)
    }

    /// Name of the scene the game begins in.
    pub fn initial_scene(&self) -> &str {
        self.scenes.first().map(|s| s.name.as_str()).unwrap_or("")
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.window_width, 500.0);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.food_spawn_interval, Duration::from_millis(2000));
        assert_eq!(
            config.food_spawn_positions,
            vec![2.0, 52.0, 102.0, 152.0, 202.0, 252.0, 302.0, 352.0, 402.0, 452.0]
        );
        assert_eq!(config.initial_scene(), "cupcake-world");
        assert_eq!(config.scene("space-world").unwrap().food.value, 10);
        assert!(config.scene("moon-world").is_none());
    }

    #[test]
    fn slow_mode_stretches_timers_only() {
        let config = GameConfig::slow_mode();
        assert_eq!(config.tick_period, Duration::from_millis(1000));
        assert_eq!(config.food_spawn_interval, Duration::from_secs(60));
        assert_eq!(config.starting_lives, 5);
    }

    #[test]
    fn json_round_trip() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();
        let back = GameConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"starting_lives": 3}"#).unwrap();
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.window_height, 500.0);
        assert_eq!(config.scenes.len(), 2);
    }
}
