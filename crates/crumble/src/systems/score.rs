//! Scoring: the player eats food.
//!
//! Every food entity in the player's overlap list is consumed: removed
//! from the registry, its point value added to the score. Scoring is
//! absorbing after game over.

use log::info;

use crate::context::Context;
use crate::ecs::EntityType;

pub fn run(ctx: &mut Context) {
    let Some(player) = ctx.registry.player() else {
        return;
    };
    let touching = ctx
        .registry
        .collision(player)
        .map(|c| c.touching.clone())
        .unwrap_or_default();

    for other in touching {
        if ctx.registry.entity_type(other) != Some(EntityType::Food) {
            continue;
        }
        let Some(value) = ctx.registry.consumable(other).map(|c| c.value) else {
            continue;
        };
        ctx.registry.remove(other);
        ctx.state.add_score(value);
        info!("ate {other} for {value}, score {}", ctx.state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::entities;
    use glam::Vec2;

    fn setup() -> Context {
        let mut ctx = Context::new(GameConfig::default());
        entities::spawn_player(&mut ctx.registry, &ctx.config);
        ctx
    }

    #[test]
    fn overlapping_food_is_consumed() {
        let mut ctx = setup();
        // on top of the player at (300,300)
        entities::spawn_food(
            &mut ctx.registry,
            Vec2::new(303.0, 303.0),
            &ctx.config.scenes[0].food.clone(),
        );
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(ctx.state.score, 1);
        assert!(ctx.registry.entities_of(EntityType::Food).is_empty());
    }

    #[test]
    fn distant_food_is_untouched() {
        let mut ctx = setup();
        entities::spawn_food(
            &mut ctx.registry,
            Vec2::new(2.0, 20.0),
            &ctx.config.scenes[0].food.clone(),
        );
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(ctx.state.score, 0);
        assert_eq!(ctx.registry.entities_of(EntityType::Food).len(), 1);
    }

    #[test]
    fn scene_value_drives_the_points() {
        let mut ctx = setup();
        entities::spawn_food(
            &mut ctx.registry,
            Vec2::new(303.0, 303.0),
            &ctx.config.scenes[1].food.clone(),
        );
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(ctx.state.score, 10);
    }

    #[test]
    fn eating_after_game_over_scores_nothing() {
        let mut ctx = setup();
        ctx.state.game_over = true;
        entities::spawn_food(
            &mut ctx.registry,
            Vec2::new(303.0, 303.0),
            &ctx.config.scenes[0].food.clone(),
        );
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        // food still consumed, but no points past game over
        assert!(ctx.registry.entities_of(EntityType::Food).is_empty());
        assert_eq!(ctx.state.score, 0);
    }
}
