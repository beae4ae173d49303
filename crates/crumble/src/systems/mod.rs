//! # Gameplay Reaction Systems
//!
//! Each system is one pass over the context, run by the scheduler in a
//! fixed order every active tick:
//!
//! spawn → movement → collision → player_state → tile_breaking → score →
//! render → gc → level.
//!
//! Systems react to what the collision engine recorded this tick; none of
//! them mutate another system's inputs mid-pass. Only the spawner carries
//! state of its own (last spawn mark, RNG); everything else is a free
//! function over the [`Context`](crate::context::Context).

pub mod gc;
pub mod level;
pub mod movement;
pub mod player_state;
pub mod score;
pub mod spawn;
pub mod tile_breaking;
