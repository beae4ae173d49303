//! # Scene Provider Boundary
//!
//! Asset loading lives outside the core. The runtime only needs three
//! things from whoever owns the assets: start loading a named scene, poll
//! whether that load has finished, and read the current scene name (to
//! decide progression thresholds). That is the [`SceneProvider`] trait.
//!
//! Loading is asynchronous from the runtime's point of view: the scheduler
//! pauses, polls once per timer firing, and resumes only on
//! [`LoadStatus::Ready`]. A failed load leaves the game paused indefinitely
//! rather than resuming into a half-loaded scene.
//!
//! [`StubSceneProvider`] is the in-memory implementation used by tests and
//! headless runs: configurable poll latency and an optional injected
//! failure.

use log::info;

/// Result of polling an in-flight scene load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Still loading; poll again next firing.
    Loading,
    /// The scene's assets are ready; safe to resume.
    Ready,
    /// The load failed. The runtime stays paused.
    Failed(String),
}

pub trait SceneProvider {
    /// Begin loading the named scene. The previous scene stays current
    /// until a poll reports [`LoadStatus::Ready`].
    fn begin_load(&mut self, name: &str);

    /// Poll the in-flight load. Returns `Ready` when no load is in flight.
    fn poll(&mut self) -> LoadStatus;

    /// Name of the currently loaded scene.
    fn current(&self) -> &str;
}

/// In-memory provider: completes a load after a fixed number of polls,
/// optionally failing for one configured scene name.
#[derive(Debug)]
pub struct StubSceneProvider {
    current: String,
    /// Polls a load takes to complete.
    latency: u32,
    pending: Option<(String, u32)>,
    /// Scene name whose load should fail, if any.
    fail_scene: Option<String>,
}

impl StubSceneProvider {
    pub fn new(initial: &str) -> Self {
        Self {
            current: initial.to_string(),
            latency: 0,
            pending: None,
            fail_scene: None,
        }
    }

    /// Make every load take `polls` polls before reporting ready.
    pub fn with_latency(mut self, polls: u32) -> Self {
        self.latency = polls;
        self
    }

    /// Make loading the named scene fail.
    pub fn failing_on(mut self, scene: &str) -> Self {
        self.fail_scene = Some(scene.to_string());
        self
    }
}

impl SceneProvider for StubSceneProvider {
    fn begin_load(&mut self, name: &str) {
        info!("loading scene {name:?}");
        self.pending = Some((name.to_string(), self.latency));
    }

    fn poll(&mut self) -> LoadStatus {
        let Some((name, remaining)) = self.pending.take() else {
            return LoadStatus::Ready;
        };
        if remaining > 0 {
            self.pending = Some((name, remaining - 1));
            return LoadStatus::Loading;
        }
        if self.fail_scene.as_deref() == Some(name.as_str()) {
            return LoadStatus::Failed(format!("assets for {name:?} unavailable"));
        }
        self.current = name;
        LoadStatus::Ready
    }

    fn current(&self) -> &str {
        &self.current
    }
}
