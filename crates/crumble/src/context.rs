//! Context — the game's shared state, passed explicitly into every system.
//!
//! There are no process-wide singletons: registry, game state, clock and
//! config travel together in one [`Context`] owned by the
//! [`Runtime`](crate::scheduler::Runtime). A reset replaces the relevant
//! piece wholesale (a fresh [`GameState`], a cleared registry), so partial-
//! reset bugs cannot arise.

use std::time::Duration;

use crate::config::GameConfig;
use crate::ecs::Registry;
use crate::state::GameState;
use crate::time::Clock;

pub struct Context {
    pub registry: Registry,
    pub state: GameState,
    pub clock: Clock,
    pub config: GameConfig,
    /// The clock reading captured at the top of the current tick. All
    /// systems in one tick see the same value.
    pub elapsed: Duration,
}

impl Context {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            registry: Registry::new(),
            state,
            clock: Clock::start(),
            config,
            elapsed: Duration::ZERO,
        }
    }

    /// Replace the game state wholesale (new game).
    pub fn reset_state(&mut self) {
        self.state = GameState::new(&self.config);
    }
}
