//! # The Scheduler
//!
//! [`Runtime`] owns everything: the [`Context`] (registry, state, clock,
//! config), the scene provider, the renderer, the diagnostics sink, the
//! intent queue, the food spawner and the pending jump-check deadlines.
//! [`Runtime::run`] drives a fixed-period timer loop; each firing is one
//! [`Runtime::tick`]:
//!
//! 1. Service due jump-completion checks (always, even paused).
//! 2. Drain the intent queue (always — unpausing must work while paused).
//! 3. Poll a pending scene transition (resume on ready, stay paused on
//!    failure).
//! 4. If unpaused and no transition is in flight, run the gameplay
//!    pipeline in strict order: spawn → movement → collision →
//!    player-state → tile-breaking → score → render → gc → level check.
//! 5. Publish a diagnostics snapshot (always).
//!
//! No gameplay tick runs between a level transition starting and its scene
//! load completing; collision and clock state survive the suspension
//! untouched. While a transition is in flight the pause state belongs to
//! the transition machinery, so user pause toggles are ignored until the
//! load resolves. A failed load halts the runtime: it stays paused for
//! good until [`Runtime::new_game`].
//!
//! The jump-completion check runs on a *wall-clock* delay from the jump
//! instant, uncoupled from the suspend-aware clock: pausing mid-jump does
//! not pause the 500 ms window. Inherited behavior, kept as is.
//!
//! Every time-touching entry point has an `*_at(now)` form for tests.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::collision;
use crate::config::GameConfig;
use crate::context::Context;
use crate::diag::{DiagSink, DiagSnapshot};
use crate::ecs::component::MovementState;
use crate::entities;
use crate::input::{Direction, Intent, IntentQueue};
use crate::render::{self, Renderer};
use crate::scene::{LoadStatus, SceneProvider};
use crate::systems;
use crate::systems::spawn::FoodSpawner;
use crate::time::Clock;

pub struct Runtime {
    ctx: Context,
    scenes: Box<dyn SceneProvider>,
    renderer: Box<dyn Renderer>,
    diag: Box<dyn DiagSink>,
    intents: IntentQueue,
    spawner: FoodSpawner,
    /// Wall-clock deadlines of pending jump-completion checks.
    jump_checks: Vec<Instant>,
    /// Name of the scene being loaded, while a transition is in flight.
    transition: Option<String>,
    /// Set when a scene load fails. The runtime refuses to unpause until
    /// a new game is started.
    halted: bool,
    /// Most recent movement press; a stop intent only cancels this one.
    last_move: Option<Direction>,
    /// Flips on the first intent ever received; the game starts paused
    /// until then.
    started: bool,
    tick_count: u64,
}

impl Runtime {
    pub fn new(
        config: GameConfig,
        scenes: Box<dyn SceneProvider>,
        renderer: Box<dyn Renderer>,
        diag: Box<dyn DiagSink>,
    ) -> Self {
        Self::new_at(config, scenes, renderer, diag, Instant::now())
    }

    pub fn new_at(
        config: GameConfig,
        scenes: Box<dyn SceneProvider>,
        renderer: Box<dyn Renderer>,
        diag: Box<dyn DiagSink>,
        now: Instant,
    ) -> Self {
        let mut ctx = Context::new(config);
        // paused until the first input; the clock must not count that wait
        ctx.clock = Clock::start_at(now);
        ctx.clock.suspend_at(now);

        let spawner = FoodSpawner::new(&ctx.config);
        entities::spawn_player(&mut ctx.registry, &ctx.config);
        entities::layout_tiles(&mut ctx.registry, &ctx.config);

        Self {
            ctx,
            scenes,
            renderer,
            diag,
            intents: IntentQueue::default(),
            spawner,
            jump_checks: Vec::new(),
            transition: None,
            halted: false,
            last_move: None,
            started: false,
            tick_count: 0,
        }
    }

    /// Enqueue an input intent for the next firing.
    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn scene_name(&self) -> &str {
        self.scenes.current()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Start over in the currently loaded scene: game state replaced
    /// wholesale, entities rebuilt, clock back to zero and suspended until
    /// the next input. Clears a halt left by a failed scene load.
    pub fn new_game(&mut self) {
        self.new_game_at(Instant::now());
    }

    pub fn new_game_at(&mut self, now: Instant) {
        info!("new game");
        self.ctx.reset_state();
        self.ctx.registry.clear();
        self.ctx.clock = Clock::start_at(now);
        self.ctx.clock.suspend_at(now);
        self.ctx.elapsed = Duration::ZERO;
        self.spawner = FoodSpawner::new(&self.ctx.config);
        self.jump_checks.clear();
        self.transition = None;
        self.halted = false;
        self.last_move = None;
        self.started = false;
        entities::spawn_player(&mut self.ctx.registry, &self.ctx.config);
        entities::layout_tiles(&mut self.ctx.registry, &self.ctx.config);
    }

    /// One timer firing.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.service_jump_checks(now);
        self.drain_intents(now);
        self.poll_transition(now);

        if !self.ctx.state.paused && self.transition.is_none() {
            // all systems in this tick see the same clock reading
            self.ctx.elapsed = self.ctx.clock.elapsed_at(now);
            let scene = self.scenes.current().to_string();

            self.spawner.run(&mut self.ctx, &scene);
            systems::movement::run(&mut self.ctx.registry);
            collision::run(&mut self.ctx.registry);
            systems::player_state::run(&mut self.ctx);
            systems::tile_breaking::run(&mut self.ctx);
            systems::score::run(&mut self.ctx);
            self.renderer.draw(&render::collect_frame(&self.ctx.registry));
            systems::gc::run(&mut self.ctx);
            if let Some(next) = systems::level::check(&self.ctx, &scene) {
                self.begin_transition(now, next);
            }
        }

        let snapshot = DiagSnapshot::capture(&self.ctx, self.tick_count, self.scenes.current());
        self.diag.publish(&snapshot);
        self.tick_count += 1;
    }

    /// Tick at the configured period until game over.
    pub fn run(&mut self) {
        self.run_for(u64::MAX);
    }

    /// Tick at the configured period until game over or `ticks` firings.
    /// Sleeping is drift-compensated against the scheduled firing instant.
    pub fn run_for(&mut self, ticks: u64) {
        let period = self.ctx.config.tick_period;
        let mut next_firing = Instant::now();
        for _ in 0..ticks {
            self.tick_at(next_firing);
            if self.ctx.state.game_over {
                info!("game over after {} ticks, score {}", self.tick_count, self.ctx.state.score);
                return;
            }
            next_firing += period;
            let now = Instant::now();
            if next_firing > now {
                thread::sleep(next_firing - now);
            } else {
                // fell behind; re-anchor instead of bursting to catch up
                next_firing = now;
            }
        }
    }

    /// Fire any jump-completion check whose wall-clock deadline has passed.
    /// Runs even while paused. Overlap lists are those of the last active
    /// tick. No-ops if the player is gone or no longer jumping.
    fn service_jump_checks(&mut self, now: Instant) {
        let before = self.jump_checks.len();
        self.jump_checks.retain(|&deadline| deadline > now);
        if self.jump_checks.len() == before {
            return;
        }
        let Some(player) = self.ctx.registry.player() else {
            return;
        };
        let Some(control) = self.ctx.registry.player_control(player) else {
            return;
        };
        if control.state != MovementState::Jumping {
            return;
        }
        if systems::player_state::touching_tile(&self.ctx.registry, player) {
            debug!("jump check: landed");
            if let Some(control) = self.ctx.registry.player_control_mut(player) {
                control.state = MovementState::Grounded;
            }
            if let Some(movement) = self.ctx.registry.movement_mut(player) {
                movement.velocity.y = 0.0;
            }
            if let Some(graphics) = self.ctx.registry.graphics_mut(player) {
                graphics.position.y = self.ctx.config.walkable_ground_level;
            }
        } else {
            debug!("jump check: airborne, falling");
            if let Some(control) = self.ctx.registry.player_control_mut(player) {
                control.state = MovementState::Falling;
            }
        }
    }

    fn drain_intents(&mut self, now: Instant) {
        while let Some(intent) = self.intents.pop() {
            if !self.started {
                self.started = true;
                info!("first input received, starting");
                self.ctx.state.paused = false;
                self.ctx.clock.resume_at(now);
            }
            self.apply_intent(intent, now);
        }
    }

    fn apply_intent(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::Move(direction) => {
                self.last_move = Some(direction);
                let speed = self.ctx.config.player_movement_speed;
                let Some(player) = self.ctx.registry.player() else {
                    return;
                };
                if let Some(movement) = self.ctx.registry.movement_mut(player) {
                    movement.velocity.x = match direction {
                        Direction::Left => -speed,
                        Direction::Right => speed,
                    };
                }
            }
            Intent::StopMoving(direction) => {
                // releasing an older key must not cancel a newer press
                if self.last_move != Some(direction) {
                    return;
                }
                let Some(player) = self.ctx.registry.player() else {
                    return;
                };
                if let Some(movement) = self.ctx.registry.movement_mut(player) {
                    movement.velocity.x = 0.0;
                }
            }
            Intent::Jump => self.apply_jump(now),
            Intent::TogglePause => {
                // the transition machinery owns the pause state while a
                // load is in flight or after one has failed
                if self.transition.is_some() || self.halted {
                    debug!("ignoring pause toggle during scene transition");
                    return;
                }
                self.toggle_pause(now);
            }
        }
    }

    fn apply_jump(&mut self, now: Instant) {
        let Some(player) = self.ctx.registry.player() else {
            return;
        };
        let Some(control) = self.ctx.registry.player_control(player) else {
            return;
        };
        if !control.enabled || control.state != MovementState::Grounded {
            return;
        }
        let jump_height = control.jump_height;
        if let Some(movement) = self.ctx.registry.movement_mut(player) {
            movement.velocity.y = jump_height;
        }
        if let Some(control) = self.ctx.registry.player_control_mut(player) {
            control.state = MovementState::Jumping;
        }
        self.jump_checks.push(now + self.ctx.config.jump_check_delay);
        debug!("jump started, check in {:?}", self.ctx.config.jump_check_delay);
    }

    fn toggle_pause(&mut self, now: Instant) {
        if self.ctx.state.paused {
            self.ctx.state.paused = false;
            self.ctx.clock.resume_at(now);
            info!("resumed");
        } else {
            self.ctx.state.paused = true;
            self.ctx.clock.suspend_at(now);
            info!("paused");
        }
    }

    fn begin_transition(&mut self, now: Instant, next: String) {
        info!("advancing to scene {next:?}");
        self.ctx.state.paused = true;
        self.ctx.clock.suspend_at(now);
        entities::clear_scene_entities(&mut self.ctx.registry);
        self.scenes.begin_load(&next);
        self.transition = Some(next);
    }

    fn poll_transition(&mut self, now: Instant) {
        let Some(next) = self.transition.clone() else {
            return;
        };
        match self.scenes.poll() {
            LoadStatus::Loading => {}
            LoadStatus::Ready => {
                self.transition = None;
                entities::layout_tiles(&mut self.ctx.registry, &self.ctx.config);
                if let Some(player) = self.ctx.registry.player() {
                    entities::reset_player(&mut self.ctx.registry, player, &self.ctx.config);
                }
                self.ctx.state.paused = false;
                self.ctx.clock.resume_at(now);
                info!("scene {next:?} ready, resuming");
            }
            LoadStatus::Failed(reason) => {
                self.transition = None;
                self.halted = true;
                error!("scene {next:?} failed to load ({reason}); halting until a new game");
            }
        }
    }
}
