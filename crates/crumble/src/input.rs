//! # Input Intents
//!
//! Input is event-driven, not polled: whatever captures keys at the outer
//! edge (a window event loop, a test script) resolves them to [`Intent`]s
//! and pushes them onto the [`IntentQueue`]. The scheduler drains the queue
//! at the start of every timer firing — including paused ones, or unpausing
//! would be impossible — and applies the intents to the player's components
//! there. Serializing input through the queue gives every tick a
//! deterministic view of the world: no component mutates *during* a tick
//! body from a callback.
//!
//! The queue is bounded; past capacity new intents are dropped with a
//! warning rather than growing without limit.

use std::collections::VecDeque;

use log::warn;

/// Default queue capacity. Generous for keyboard input at 60 ticks/s.
pub const DEFAULT_INTENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A discrete input event, already resolved from whatever raw key produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Movement key pressed: set horizontal velocity toward `Direction`.
    Move(Direction),
    /// Movement key released. Only takes effect if this direction was the
    /// most recent movement press, so releasing an old key does not cancel
    /// a newer one.
    StopMoving(Direction),
    Jump,
    TogglePause,
}

/// Bounded FIFO of pending intents.
#[derive(Debug)]
pub struct IntentQueue {
    queue: VecDeque<Intent>,
    capacity: usize,
}

impl IntentQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Enqueue an intent; drops it with a warning when the queue is full.
    pub fn push(&mut self, intent: Intent) {
        if self.queue.len() >= self.capacity {
            warn!("intent queue full, dropping {intent:?}");
            return;
        }
        self.queue.push_back(intent);
    }

    /// Dequeue the oldest pending intent.
    pub fn pop(&mut self) -> Option<Intent> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new(DEFAULT_INTENT_CAPACITY)
    }
}
