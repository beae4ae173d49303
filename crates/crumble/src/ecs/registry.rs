//! # Registry — Entity Identity and Component Attachment
//!
//! The [`Registry`] owns every entity in the game. Storage is a slot arena:
//! each slot carries a generation counter and an optional payload (type tag
//! plus the component set). Removal bumps the generation and pushes the slot
//! onto a free list; stale handles then fail every lookup with `None`.
//!
//! ## Iteration safety
//!
//! Query methods ([`entities`](Registry::entities),
//! [`entities_of`](Registry::entities_of),
//! [`entities_with`](Registry::entities_with)) return a point-in-time
//! snapshot `Vec<Entity>`. Systems iterate the snapshot while freely removing
//! entities from the registry: a handle removed mid-iteration simply resolves
//! to `None` on its next access, and is never revisited because snapshots are
//! not live views.
//!
//! ## Failure mode
//!
//! Looking up a component kind that is not present yields `None`, never a
//! crash. A system that *assumes* presence (movement assuming Graphics, say)
//! violates its caller contract; the registry stays indifferent.

use log::debug;

use super::component::{
    Collision, Component, ComponentKind, Consumable, Graphics, Gravity, Movement, PlayerControl,
};
use super::entity::Entity;

/// Fixed type tag of an entity, chosen at creation and immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Player,
    Tile,
    Food,
}

impl EntityType {
    /// Stable lowercase name, used in diagnostics snapshots.
    pub fn name(self) -> &'static str {
        match self {
            EntityType::Player => "player",
            EntityType::Tile => "tile",
            EntityType::Food => "food",
        }
    }
}

/// One component of each kind, at most. Attach overwrites (last-write-wins).
#[derive(Debug, Default)]
struct ComponentSet {
    graphics: Option<Graphics>,
    movement: Option<Movement>,
    gravity: Option<Gravity>,
    collision: Option<Collision>,
    consumable: Option<Consumable>,
    player_control: Option<PlayerControl>,
}

#[derive(Debug)]
struct EntityData {
    ty: EntityType,
    components: ComponentSet,
}

#[derive(Debug)]
struct Slot {
    /// Bumped every time the slot is vacated, invalidating old handles.
    generation: u32,
    data: Option<EntityData>,
}

/// Exclusive owner of all entities and their components.
#[derive(Debug, Default)]
pub struct Registry {
    slots: Vec<Slot>,
    /// Indices of vacated slots, available for reuse.
    free: Vec<u32>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Creation / removal ───────────────────────────────────────────

    /// Allocate a fresh entity with the given type tag and no components.
    /// Never fails.
    pub fn create(&mut self, ty: EntityType) -> Entity {
        let data = EntityData {
            ty,
            components: ComponentSet::default(),
        };
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.data = Some(data);
            Entity {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                data: Some(data),
            });
            Entity {
                index,
                generation: 0,
            }
        }
    }

    /// Remove an entity and destroy all its components.
    ///
    /// Returns `false` if the handle was already stale. Safe to call while
    /// other code iterates an earlier snapshot: the removed entity will fail
    /// their lookups rather than being observed half-dead.
    pub fn remove(&mut self, entity: Entity) -> bool {
        let Some(slot) = self.slot_mut(entity) else {
            return false;
        };
        slot.data = None;
        slot.generation += 1;
        self.free.push(entity.index);
        debug!("removed {entity:?}");
        true
    }

    /// Remove every entity. Used on full game resets.
    pub fn clear(&mut self) {
        for e in self.entities() {
            self.remove(e);
        }
    }

    /// Whether the handle still refers to a live entity.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.data(entity).is_some()
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Component attachment ─────────────────────────────────────────

    /// Store `component` under its kind, replacing any prior component of
    /// that kind on the same entity. Attaching to a stale handle is a
    /// caller bug; it is a no-op outside debug builds.
    pub fn attach(&mut self, entity: Entity, component: Component) {
        let Some(data) = self.data_mut(entity) else {
            debug_assert!(false, "attach on dead entity {entity:?}");
            return;
        };
        let set = &mut data.components;
        match component {
            Component::Graphics(c) => set.graphics = Some(c),
            Component::Movement(c) => set.movement = Some(c),
            Component::Gravity(c) => set.gravity = Some(c),
            Component::Collision(c) => set.collision = Some(c),
            Component::Consumable(c) => set.consumable = Some(c),
            Component::PlayerControl(c) => set.player_control = Some(c),
        }
    }

    /// Whether the entity carries a component of this kind.
    pub fn has(&self, entity: Entity, kind: ComponentKind) -> bool {
        let Some(data) = self.data(entity) else {
            return false;
        };
        let set = &data.components;
        match kind {
            ComponentKind::Graphics => set.graphics.is_some(),
            ComponentKind::Movement => set.movement.is_some(),
            ComponentKind::Gravity => set.gravity.is_some(),
            ComponentKind::Collision => set.collision.is_some(),
            ComponentKind::Consumable => set.consumable.is_some(),
            ComponentKind::PlayerControl => set.player_control.is_some(),
        }
    }

    /// The entity's type tag, or `None` for a stale handle.
    pub fn entity_type(&self, entity: Entity) -> Option<EntityType> {
        self.data(entity).map(|d| d.ty)
    }

    // ── Typed accessors (one pair per kind) ──────────────────────────

    pub fn graphics(&self, entity: Entity) -> Option<&Graphics> {
        self.data(entity).and_then(|d| d.components.graphics.as_ref())
    }

    pub fn graphics_mut(&mut self, entity: Entity) -> Option<&mut Graphics> {
        self.data_mut(entity).and_then(|d| d.components.graphics.as_mut())
    }

    pub fn movement(&self, entity: Entity) -> Option<&Movement> {
        self.data(entity).and_then(|d| d.components.movement.as_ref())
    }

    pub fn movement_mut(&mut self, entity: Entity) -> Option<&mut Movement> {
        self.data_mut(entity).and_then(|d| d.components.movement.as_mut())
    }

    pub fn gravity(&self, entity: Entity) -> Option<&Gravity> {
        self.data(entity).and_then(|d| d.components.gravity.as_ref())
    }

    pub fn gravity_mut(&mut self, entity: Entity) -> Option<&mut Gravity> {
        self.data_mut(entity).and_then(|d| d.components.gravity.as_mut())
    }

    pub fn collision(&self, entity: Entity) -> Option<&Collision> {
        self.data(entity).and_then(|d| d.components.collision.as_ref())
    }

    pub fn collision_mut(&mut self, entity: Entity) -> Option<&mut Collision> {
        self.data_mut(entity).and_then(|d| d.components.collision.as_mut())
    }

    pub fn consumable(&self, entity: Entity) -> Option<&Consumable> {
        self.data(entity).and_then(|d| d.components.consumable.as_ref())
    }

    pub fn consumable_mut(&mut self, entity: Entity) -> Option<&mut Consumable> {
        self.data_mut(entity).and_then(|d| d.components.consumable.as_mut())
    }

    pub fn player_control(&self, entity: Entity) -> Option<&PlayerControl> {
        self.data(entity).and_then(|d| d.components.player_control.as_ref())
    }

    pub fn player_control_mut(&mut self, entity: Entity) -> Option<&mut PlayerControl> {
        self.data_mut(entity)
            .and_then(|d| d.components.player_control.as_mut())
    }

    // ── Snapshot queries ─────────────────────────────────────────────

    /// Snapshot of all live entities, in slot order.
    pub fn entities(&self) -> Vec<Entity> {
        self.snapshot(|_| true)
    }

    /// Snapshot of live entities with the given type tag.
    pub fn entities_of(&self, ty: EntityType) -> Vec<Entity> {
        self.snapshot(|d| d.ty == ty)
    }

    /// Snapshot of live entities carrying a component of the given kind.
    pub fn entities_with(&self, kind: ComponentKind) -> Vec<Entity> {
        let mut out = self.snapshot(|_| true);
        out.retain(|&e| self.has(e, kind));
        out
    }

    /// The single player entity, if present. The game maintains exactly one.
    pub fn player(&self) -> Option<Entity> {
        self.entities_of(EntityType::Player).into_iter().next()
    }

    /// Type-tag names of all live entities, for diagnostics output.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.entities()
            .into_iter()
            .filter_map(|e| self.entity_type(e))
            .map(EntityType::name)
            .collect()
    }

    fn snapshot(&self, pred: impl Fn(&EntityData) -> bool) -> Vec<Entity> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.data.as_ref().filter(|d| pred(d)).map(|_| Entity {
                    index: i as u32,
                    generation: slot.generation,
                })
            })
            .collect()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn slot_mut(&mut self, entity: Entity) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(entity.index as usize)?;
        (slot.generation == entity.generation && slot.data.is_some()).then_some(slot)
    }

    fn data(&self, entity: Entity) -> Option<&EntityData> {
        let slot = self.slots.get(entity.index as usize)?;
        (slot.generation == entity.generation)
            .then_some(slot.data.as_ref())
            .flatten()
    }

    fn data_mut(&mut self, entity: Entity) -> Option<&mut EntityData> {
        let slot = self.slots.get_mut(entity.index as usize)?;
        (slot.generation == entity.generation)
            .then_some(slot.data.as_mut())
            .flatten()
    }
}
