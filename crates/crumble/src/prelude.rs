//! Convenience re-exports for the common case.

pub use crate::config::{AdvanceRule, FoodConfig, GameConfig, SceneConfig};
pub use crate::context::Context;
pub use crate::diag::{DiagSink, DiagSnapshot, NullDiagSink};
pub use crate::ecs::{Component, ComponentKind, Entity, EntityType, Registry};
pub use crate::ecs::component::{
    Collision, Consumable, Graphics, Gravity, Movement, MovementState, PlayerControl,
};
pub use crate::geometry::{Collider, ColliderShape, Layer};
pub use crate::input::{Direction, Intent, IntentQueue};
pub use crate::render::{NullRenderer, Renderer, SpriteInstance};
pub use crate::scene::{LoadStatus, SceneProvider, StubSceneProvider};
pub use crate::scheduler::Runtime;
pub use crate::state::GameState;
pub use crate::time::Clock;

pub use glam::Vec2;
