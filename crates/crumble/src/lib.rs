//! # Crumble — a tick-driven 2D platformer runtime
//!
//! Entities (player, tiles, falling food) are composed from a closed set of
//! components, updated by a fixed-order pipeline of systems once per tick,
//! and checked for pairwise overlap to drive the gameplay rules: grounding,
//! tile breaking, scoring and game-over.
//!
//! The crate is the *core* of the game only. Rendering, asset loading and
//! input capture live behind small trait seams ([`render::Renderer`],
//! [`scene::SceneProvider`], [`input::IntentQueue`]) so the runtime can be
//! driven headless, which is also how the tests exercise it.
//!
//! Start with [`scheduler::Runtime`] and `use crumble::prelude::*`.

pub mod collision;
pub mod config;
pub mod context;
pub mod diag;
pub mod ecs;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod state;
pub mod systems;
pub mod time;
