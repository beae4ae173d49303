//! Interval-gated food spawning.
//!
//! Spawning is gated on the suspend-aware clock: a food entity is created
//! when elapsed play time passes the last spawn mark plus the current
//! interval, and the mark is then set to the current elapsed reading. A
//! paused game never catches up missed spawns. At most one food spawns per
//! tick.
//!
//! Positions come from the configured discrete x set, chosen by a seeded
//! PCG so runs are reproducible.

use std::time::Duration;

use glam::Vec2;
use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::context::Context;
use crate::entities;

pub struct FoodSpawner {
    last_spawn: Duration,
    rng: Pcg32,
}

impl FoodSpawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            last_spawn: Duration::ZERO,
            rng: Pcg32::seed_from_u64(config.rng_seed),
        }
    }

    /// Spawn at most one food entity for the current scene, if the
    /// interval has elapsed since the last spawn mark.
    pub fn run(&mut self, ctx: &mut Context, scene: &str) {
        if ctx.elapsed <= self.last_spawn + ctx.state.food_spawn_interval {
            return;
        }
        let Some(scene_cfg) = ctx.config.scene(scene) else {
            warn!("no scene {scene:?} in config, skipping spawn");
            return;
        };
        let positions = &ctx.config.food_spawn_positions;
        if positions.is_empty() {
            return;
        }
        self.last_spawn = ctx.elapsed;
        let x = positions[self.rng.random_range(0..positions.len())];
        let position = Vec2::new(x, ctx.config.food_spawn_y);
        let food = entities::spawn_food(&mut ctx.registry, position, &scene_cfg.food);
        debug!(
            "spawned {} {food:?} at x={x} ({}ms elapsed)",
            scene_cfg.food.sprite,
            ctx.elapsed.as_millis()
        );
    }
}
