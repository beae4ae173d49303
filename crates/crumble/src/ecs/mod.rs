//! # Entity/Component Registry
//!
//! A deliberately small ECS tailored to this game. Unlike a general-purpose
//! framework there is no type erasure and no archetype storage: the component
//! set is *closed* (six kinds, see [`component`]), so the registry can store
//! them as plain `Option` fields and hand out typed accessors with
//! compile-time kind safety.
//!
//! - [`entity`] — generational entity handles
//! - [`component`] — the closed component set
//! - [`registry`] — arena-backed storage, snapshot queries

pub mod component;
pub mod entity;
pub mod registry;

pub use component::{Component, ComponentKind};
pub use entity::Entity;
pub use registry::{EntityType, Registry};
