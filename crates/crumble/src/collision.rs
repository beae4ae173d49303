//! # Collision Engine
//!
//! Once per active tick, recomputes the overlap set of every collidable
//! entity pair: clear every overlap list, then test each unordered pair
//! whose layer pairing is interactive and record hits symmetrically.
//!
//! The clear-then-rebuild is atomic with respect to the rest of the
//! pipeline: the engine runs after movement integration and before any
//! reaction system reads the lists, so within a tick the lists are always
//! either fully stale (before) or fully fresh (after), never half-built.
//! Output is a pure function of current positions, shapes and flags —
//! running the engine twice without movement in between yields identical
//! lists.
//!
//! Pairing is naive O(n²) over collidable entities, with an AABB fast
//! reject before the exact predicate. The game produces tens of entities,
//! not thousands; a spatial partition could slot in here without changing
//! the contract.

use crate::ecs::{ComponentKind, Entity, Registry};
use crate::geometry::{Collider, Layer};

/// Run one collision pass over the registry.
pub fn run(registry: &mut Registry) {
    let collidable = registry.entities_with(ComponentKind::Collision);

    // Every list is cleared, including those of ignored entities.
    for &entity in &collidable {
        if let Some(collision) = registry.collision_mut(entity) {
            collision.touching.clear();
        }
    }

    // Position each participating collider from its Graphics component.
    // Ignored entities neither emit nor receive; entities without Graphics
    // have no position and are skipped (factories always pair the two).
    let mut candidates: Vec<(Entity, Layer, Collider)> = Vec::with_capacity(collidable.len());
    for &entity in &collidable {
        let Some(collision) = registry.collision(entity) else {
            continue;
        };
        if collision.ignore {
            continue;
        }
        let (shape, layer) = (collision.shape, collision.layer);
        let Some(graphics) = registry.graphics(entity) else {
            continue;
        };
        candidates.push((entity, layer, shape.at(graphics.position)));
    }

    // Each unordered pair is tested at most once, so symmetric recording
    // below cannot produce duplicate entries.
    let mut hits: Vec<(Entity, Entity)> = Vec::new();
    for i in 0..candidates.len() {
        let (a, layer_a, ref collider_a) = candidates[i];
        let aabb_a = collider_a.aabb();
        for (b, layer_b, collider_b) in &candidates[i + 1..] {
            if !Layer::interacts(layer_a, *layer_b) {
                continue;
            }
            if !aabb_a.intersects(&collider_b.aabb()) {
                continue;
            }
            if collider_a.overlaps(collider_b) {
                hits.push((a, *b));
            }
        }
    }

    for (a, b) in hits {
        if let Some(collision) = registry.collision_mut(a) {
            collision.touching.push(b);
        }
        if let Some(collision) = registry.collision_mut(b) {
            collision.touching.push(a);
        }
    }
}
