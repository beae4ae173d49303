//! The player's vertical movement state machine.
//!
//! Three states, driven by tile overlap:
//! - Grounded with no tile under foot becomes Falling (walked off the row).
//! - Falling onto a tile becomes Grounded: vertical velocity zeroed and y
//!   snapped to the walkable level so the player stands on the row, not in
//!   it.
//! - Falling keeps the configured fall speed applied.
//! - Jumping is never exited here; only the delayed jump-completion check
//!   (serviced by the scheduler) leaves it.

use crate::context::Context;
use crate::ecs::component::MovementState;
use crate::ecs::{Entity, EntityType, Registry};

/// True if any entity in `entity`'s overlap list is a tile.
pub(crate) fn touching_tile(registry: &Registry, entity: Entity) -> bool {
    registry.collision(entity).is_some_and(|c| {
        c.touching
            .iter()
            .any(|&other| registry.entity_type(other) == Some(EntityType::Tile))
    })
}

pub fn run(ctx: &mut Context) {
    let Some(player) = ctx.registry.player() else {
        return;
    };
    let Some(state) = ctx.registry.player_control(player).map(|c| c.state) else {
        return;
    };
    let grounded_now = touching_tile(&ctx.registry, player);

    match state {
        MovementState::Grounded => {
            if !grounded_now {
                if let Some(control) = ctx.registry.player_control_mut(player) {
                    control.state = MovementState::Falling;
                }
            }
        }
        MovementState::Falling => {
            if grounded_now {
                if let Some(control) = ctx.registry.player_control_mut(player) {
                    control.state = MovementState::Grounded;
                }
                if let Some(movement) = ctx.registry.movement_mut(player) {
                    movement.velocity.y = 0.0;
                }
                if let Some(graphics) = ctx.registry.graphics_mut(player) {
                    graphics.position.y = ctx.config.walkable_ground_level;
                }
            } else if let Some(movement) = ctx.registry.movement_mut(player) {
                movement.velocity.y = ctx.config.player_fall_speed;
            }
        }
        // exited only by the delayed jump check
        MovementState::Jumping => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::entities;
    use glam::Vec2;

    fn grounded_setup() -> (Context, Entity) {
        let mut ctx = Context::new(GameConfig::default());
        let player = entities::spawn_player(&mut ctx.registry, &ctx.config);
        entities::layout_tiles(&mut ctx.registry, &ctx.config);
        (ctx, player)
    }

    fn set_state(ctx: &mut Context, player: Entity, state: MovementState) {
        ctx.registry.player_control_mut(player).unwrap().state = state;
    }

    fn state_of(ctx: &Context, player: Entity) -> MovementState {
        ctx.registry.player_control(player).unwrap().state
    }

    #[test]
    fn falling_onto_a_tile_grounds_and_snaps() {
        let (mut ctx, player) = grounded_setup();
        // just below the walkable level, overlapping the row
        ctx.registry.graphics_mut(player).unwrap().position = Vec2::new(100.0, 355.0);
        ctx.registry.movement_mut(player).unwrap().velocity.y = 3.0;
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(state_of(&ctx, player), MovementState::Grounded);
        assert_eq!(ctx.registry.movement(player).unwrap().velocity.y, 0.0);
        assert_eq!(ctx.registry.graphics(player).unwrap().position.y, 350.0);
    }

    #[test]
    fn falling_in_the_air_keeps_fall_speed() {
        let (mut ctx, player) = grounded_setup();
        ctx.registry.graphics_mut(player).unwrap().position = Vec2::new(100.0, 100.0);
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(state_of(&ctx, player), MovementState::Falling);
        assert_eq!(ctx.registry.movement(player).unwrap().velocity.y, 3.0);
    }

    #[test]
    fn walking_off_the_row_starts_falling() {
        let (mut ctx, player) = grounded_setup();
        set_state(&mut ctx, player, MovementState::Grounded);
        ctx.registry.graphics_mut(player).unwrap().position = Vec2::new(100.0, 100.0);
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(state_of(&ctx, player), MovementState::Falling);
    }

    #[test]
    fn grounded_on_a_tile_stays_grounded() {
        let (mut ctx, player) = grounded_setup();
        set_state(&mut ctx, player, MovementState::Grounded);
        ctx.registry.graphics_mut(player).unwrap().position = Vec2::new(100.0, 350.0);
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(state_of(&ctx, player), MovementState::Grounded);
    }

    #[test]
    fn jumping_is_left_alone() {
        let (mut ctx, player) = grounded_setup();
        set_state(&mut ctx, player, MovementState::Jumping);
        ctx.registry.movement_mut(player).unwrap().velocity.y = -6.0;
        // still overlapping the row just after takeoff
        ctx.registry.graphics_mut(player).unwrap().position = Vec2::new(100.0, 350.0);
        crate::collision::run(&mut ctx.registry);

        run(&mut ctx);
        assert_eq!(state_of(&ctx, player), MovementState::Jumping);
        assert_eq!(ctx.registry.movement(player).unwrap().velocity.y, -6.0);
    }

    #[test]
    fn no_player_is_a_no_op() {
        let mut ctx = Context::new(GameConfig::default());
        run(&mut ctx); // must not panic
    }
}
