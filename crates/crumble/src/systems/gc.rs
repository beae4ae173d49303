//! Off-screen garbage collection.
//!
//! Any drawable entity whose y position passes the window height is
//! removed. The player is the exception: it is reset to its initial state
//! and position instead of being destroyed.

use log::debug;

use crate::context::Context;
use crate::ecs::{ComponentKind, EntityType};
use crate::entities;

pub fn run(ctx: &mut Context) {
    for entity in ctx.registry.entities_with(ComponentKind::Graphics) {
        let Some(y) = ctx.registry.graphics(entity).map(|g| g.position.y) else {
            continue;
        };
        if y <= ctx.config.window_height {
            continue;
        }
        if ctx.registry.entity_type(entity) == Some(EntityType::Player) {
            debug!("player fell off-screen, resetting");
            entities::reset_player(&mut ctx.registry, entity, &ctx.config);
        } else {
            ctx.registry.remove(entity);
        }
    }
}
