//! Gravity and velocity integration.
//!
//! Gravity here is a constant terminal fall speed, not an accelerator:
//! entities carrying `Gravity` get `velocity.y = weight` each tick before
//! integration. Heavier food falls faster, nothing accumulates. The player
//! carries no `Gravity`; its vertical speed belongs to the movement state
//! machine.

use crate::ecs::{ComponentKind, Registry};

/// Apply gravity, then integrate every moving entity's position.
pub fn run(registry: &mut Registry) {
    for entity in registry.entities_with(ComponentKind::Gravity) {
        let Some(weight) = registry.gravity(entity).map(|g| g.weight) else {
            continue;
        };
        if let Some(movement) = registry.movement_mut(entity) {
            movement.velocity.y = weight;
        }
    }

    for entity in registry.entities_with(ComponentKind::Movement) {
        let Some(velocity) = registry.movement(entity).map(|m| m.velocity) else {
            continue;
        };
        if let Some(graphics) = registry.graphics_mut(entity) {
            graphics.position += velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::entities;
    use glam::Vec2;

    #[test]
    fn food_falls_at_its_weight() {
        let config = GameConfig::default();
        let mut reg = Registry::new();
        let food = entities::spawn_food(&mut reg, Vec2::new(52.0, 20.0), &config.scenes[0].food);

        run(&mut reg);
        assert_eq!(reg.graphics(food).unwrap().position, Vec2::new(52.0, 23.0));
        run(&mut reg);
        assert_eq!(reg.graphics(food).unwrap().position, Vec2::new(52.0, 26.0));
    }

    #[test]
    fn fall_speed_does_not_accumulate() {
        let config = GameConfig::default();
        let mut reg = Registry::new();
        let food = entities::spawn_food(&mut reg, Vec2::new(0.0, 0.0), &config.scenes[0].food);

        for _ in 0..10 {
            run(&mut reg);
        }
        assert_eq!(reg.movement(food).unwrap().velocity.y, 3.0);
        assert_eq!(reg.graphics(food).unwrap().position.y, 30.0);
    }

    #[test]
    fn player_velocity_integrates_untouched() {
        let config = GameConfig::default();
        let mut reg = Registry::new();
        let player = entities::spawn_player(&mut reg, &config);
        reg.movement_mut(player).unwrap().velocity = Vec2::new(3.0, -6.0);

        run(&mut reg);
        // no Gravity on the player, vy stays what the state machine set
        assert_eq!(reg.movement(player).unwrap().velocity, Vec2::new(3.0, -6.0));
        assert_eq!(reg.graphics(player).unwrap().position, Vec2::new(303.0, 294.0));
    }

    #[test]
    fn static_entities_stay_put() {
        let mut reg = Registry::new();
        let tile = entities::spawn_tile(
            &mut reg,
            Vec2::new(100.0, 400.0),
            entities::TileVariant::Mid,
        );
        run(&mut reg);
        assert_eq!(reg.graphics(tile).unwrap().position, Vec2::new(100.0, 400.0));
    }
}
