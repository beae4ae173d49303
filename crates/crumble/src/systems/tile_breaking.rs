//! Tile breaking.
//!
//! A falling food entity that lands on a tile breaks it: the tile is
//! removed within the same tick and one life is deducted. The food itself
//! is left alone; it keeps falling and is collected off-screen by gc.
//! Life loss is absorbing after game over.

use log::info;

use crate::context::Context;
use crate::ecs::EntityType;

pub fn run(ctx: &mut Context) {
    for tile in ctx.registry.entities_of(EntityType::Tile) {
        let hit = ctx.registry.collision(tile).is_some_and(|c| {
            c.touching
                .iter()
                .any(|&other| ctx.registry.entity_type(other) == Some(EntityType::Food))
        });
        if !hit {
            continue;
        }
        ctx.registry.remove(tile);
        ctx.state.lose_life();
        info!("tile {tile} broken, {} lives left", ctx.state.lives);
    }
}
