//! Entity handles.
//!
//! An [`Entity`] is an index into the registry's slot arena paired with a
//! generation counter. Slots are recycled when entities are removed; the
//! generation is bumped on every recycle, so a stale handle held across a
//! removal fails lookups safely instead of silently reading the entity that
//! now occupies the slot. Systems routinely hold handles across removals
//! (the collision overlap lists, the delayed jump check), so this is
//! load-bearing, not belt-and-braces.

use std::fmt;

/// A lightweight handle to an entity in the
/// [`Registry`](super::registry::Registry).
///
/// Valid only for the registry that created it, and only while its
/// generation matches the slot's current generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Entity {
    /// Raw slot index. For diagnostics output, not general use.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Generation counter. For diagnostics output.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
