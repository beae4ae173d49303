//! Entity factories.
//!
//! All entity composition lives here: which components each entity type
//! carries, on which collision layer, with which sprite. Systems never
//! assemble entities themselves.

use glam::Vec2;
use log::debug;

use crate::config::{FoodConfig, GameConfig};
use crate::ecs::component::{
    Collision, Component, Consumable, Graphics, Gravity, Movement, MovementState, PlayerControl,
};
use crate::ecs::{Entity, EntityType, Registry};
use crate::geometry::{ColliderShape, Layer};

pub const PLAYER_SIZE: f32 = 50.0;
pub const TILE_WIDTH: f32 = 50.0;
pub const TILE_HEIGHT: f32 = 20.0;
pub const FOOD_SIZE: f32 = 44.0;

/// Which end of the tile row a tile sits at, for sprite selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileVariant {
    Left,
    Mid,
    Right,
}

impl TileVariant {
    fn sprite(self) -> &'static str {
        match self {
            TileVariant::Left => "tile_left",
            TileVariant::Mid => "tile_mid",
            TileVariant::Right => "tile_right",
        }
    }
}

/// Create the player at its configured start position, falling, controls
/// enabled.
pub fn spawn_player(registry: &mut Registry, config: &GameConfig) -> Entity {
    let e = registry.create(EntityType::Player);
    registry.attach(
        e,
        Component::Graphics(Graphics {
            position: config.initial_player_position,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            sprite: "player_default".to_string(),
        }),
    );
    registry.attach(e, Component::Movement(Movement::default()));
    registry.attach(
        e,
        Component::Collision(Collision::new(
            ColliderShape::Rect { width: PLAYER_SIZE, height: PLAYER_SIZE },
            Layer::Main,
        )),
    );
    registry.attach(e, Component::PlayerControl(PlayerControl::new(config.jump_height)));
    e
}

/// Restore the player to its initial state and position, in place.
pub fn reset_player(registry: &mut Registry, player: Entity, config: &GameConfig) {
    debug!("resetting player {player:?}");
    if let Some(graphics) = registry.graphics_mut(player) {
        graphics.position = config.initial_player_position;
    }
    if let Some(movement) = registry.movement_mut(player) {
        movement.velocity = Vec2::ZERO;
    }
    if let Some(control) = registry.player_control_mut(player) {
        control.state = MovementState::Falling;
        control.enabled = true;
    }
}

/// Create one ground tile at `position`.
pub fn spawn_tile(registry: &mut Registry, position: Vec2, variant: TileVariant) -> Entity {
    let e = registry.create(EntityType::Tile);
    registry.attach(
        e,
        Component::Graphics(Graphics {
            position,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
            sprite: variant.sprite().to_string(),
        }),
    );
    registry.attach(
        e,
        Component::Collision(Collision::new(
            ColliderShape::Rect { width: TILE_WIDTH, height: TILE_HEIGHT },
            Layer::Main,
        )),
    );
    e
}

/// Lay out the ten-tile ground row at the configured ground level: a left
/// end cap, eight mid tiles, a right end cap.
pub fn layout_tiles(registry: &mut Registry, config: &GameConfig) {
    for i in 0..10 {
        let variant = match i {
            0 => TileVariant::Left,
            9 => TileVariant::Right,
            _ => TileVariant::Mid,
        };
        spawn_tile(
            registry,
            Vec2::new(i as f32 * TILE_WIDTH, config.ground_level),
            variant,
        );
    }
}

/// Create a falling food item at `position`, with the current scene's
/// sprite, point value and fall weight.
pub fn spawn_food(registry: &mut Registry, position: Vec2, food: &FoodConfig) -> Entity {
    let e = registry.create(EntityType::Food);
    registry.attach(
        e,
        Component::Graphics(Graphics {
            position,
            width: FOOD_SIZE,
            height: FOOD_SIZE,
            sprite: food.sprite.clone(),
        }),
    );
    registry.attach(e, Component::Consumable(Consumable { value: food.value }));
    registry.attach(
        e,
        Component::Collision(Collision::new(
            ColliderShape::circle_from_dimensions(FOOD_SIZE, FOOD_SIZE),
            Layer::Food,
        )),
    );
    registry.attach(e, Component::Gravity(Gravity { weight: food.weight }));
    registry.attach(e, Component::Movement(Movement::default()));
    e
}

/// Remove every tile and food entity. Used when a scene hands over to the
/// next one; the player survives transitions.
pub fn clear_scene_entities(registry: &mut Registry) {
    for e in registry.entities() {
        match registry.entity_type(e) {
            Some(EntityType::Tile) | Some(EntityType::Food) => {
                registry.remove(e);
            }
            _ => {}
        }
    }
}
