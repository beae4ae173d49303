//! # The Closed Component Set
//!
//! Components are plain data bags attached to entities. Instead of a
//! string-keyed map of `dyn Any`-style bags, the set is a closed tagged
//! union: every kind the game will ever use is a variant of
//! [`Component`], and the registry exposes one typed accessor per kind
//! (`registry.graphics(e) -> Option<&Graphics>` and so on). A missing
//! component is `None`, never a crash, and a kind mismatch is impossible by
//! construction.
//!
//! An entity holds **at most one component per kind** — attaching a second
//! instance of the same kind overwrites the first (last-write-wins, by
//! design). Components never reference their owning entity; all lookups go
//! entity → component, so no reference cycles can form.

use glam::Vec2;

use super::entity::Entity;
use crate::geometry::{ColliderShape, Layer};

/// Position, size and sprite identity of a drawable entity.
///
/// `position` is the top-left corner in window coordinates (y grows
/// downward). The collision engine also reads it to place colliders, so a
/// moved entity's collider can never disagree with its drawn position.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphics {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Sprite identity consumed by the renderer. The core never interprets it.
    pub sprite: String,
}

/// Velocity in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Movement {
    pub velocity: Vec2,
}

/// Constant downward fall speed in pixels per tick.
///
/// Heavier food falls faster. The player deliberately has no `Gravity`; its
/// vertical speed is owned by the movement state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub weight: f32,
}

/// Collider shape, interaction layer and the per-tick overlap list.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub shape: ColliderShape,
    pub layer: Layer,
    /// Entities whose collider currently intersects this one. Rebuilt from
    /// scratch by the collision engine every active tick.
    pub touching: Vec<Entity>,
    /// While set, this entity neither emits nor receives collisions (its
    /// `touching` list is still cleared each pass).
    pub ignore: bool,
}

impl Collision {
    pub fn new(shape: ColliderShape, layer: Layer) -> Self {
        Self {
            shape,
            layer,
            touching: Vec::new(),
            ignore: false,
        }
    }
}

/// Point value awarded when the player eats this entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consumable {
    pub value: u32,
}

/// The player's three-state vertical movement machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Grounded,
    Jumping,
    Falling,
}

/// Jump parameters and movement state for the player-controlled entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerControl {
    /// Upward velocity applied on jump (negative: y grows downward).
    pub jump_height: f32,
    pub enabled: bool,
    pub state: MovementState,
}

impl PlayerControl {
    pub fn new(jump_height: f32) -> Self {
        Self {
            jump_height,
            enabled: true,
            state: MovementState::Falling,
        }
    }
}

/// A component of any kind, as passed to
/// [`Registry::attach`](super::registry::Registry::attach).
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Graphics(Graphics),
    Movement(Movement),
    Gravity(Gravity),
    Collision(Collision),
    Consumable(Consumable),
    PlayerControl(PlayerControl),
}

/// Discriminant for [`Component`], used for presence checks and filtered
/// queries. The names are stable identifiers across the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Graphics,
    Movement,
    Gravity,
    Collision,
    Consumable,
    PlayerControl,
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Graphics(_) => ComponentKind::Graphics,
            Component::Movement(_) => ComponentKind::Movement,
            Component::Gravity(_) => ComponentKind::Gravity,
            Component::Collision(_) => ComponentKind::Collision,
            Component::Consumable(_) => ComponentKind::Consumable,
            Component::PlayerControl(_) => ComponentKind::PlayerControl,
        }
    }
}
