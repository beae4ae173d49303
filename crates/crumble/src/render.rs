//! Renderer boundary.
//!
//! The core never draws pixels. Once per active tick it collects every
//! drawable entity into a flat sprite batch and hands it to whatever
//! implements [`Renderer`] — a canvas, a window, or nothing at all
//! ([`NullRenderer`], used headless and in tests). Purely a sink: nothing
//! flows back into core state.

use glam::Vec2;

use crate::ecs::{ComponentKind, Registry};

/// One drawable entity, as the renderer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInstance {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub sprite: String,
}

pub trait Renderer {
    /// Receive the full set of drawables for this tick.
    fn draw(&mut self, frame: &[SpriteInstance]);
}

/// Discards every frame.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &[SpriteInstance]) {}
}

/// Collect every entity carrying a Graphics component into a sprite batch.
pub fn collect_frame(registry: &Registry) -> Vec<SpriteInstance> {
    registry
        .entities_with(ComponentKind::Graphics)
        .into_iter()
        .filter_map(|e| registry.graphics(e))
        .map(|g| SpriteInstance {
            position: g.position,
            width: g.width,
            height: g.height,
            sprite: g.sprite.clone(),
        })
        .collect()
}
