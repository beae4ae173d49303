//! Diagnostics sink.
//!
//! Once per timer firing — paused or not — the scheduler builds a
//! [`DiagSnapshot`] and hands it to whatever implements [`DiagSink`].
//! Tests capture snapshots in memory; with the `diagnostics` feature
//! (default) a [`UdpDiagSender`] serializes them as JSON datagrams to
//! `127.0.0.1:9100`, fire-and-forget, throttled to 10 Hz so a 60 Hz tick
//! loop does not flood the socket.

#[cfg(feature = "diagnostics")]
use std::net::UdpSocket;
#[cfg(feature = "diagnostics")]
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::context::Context;

/// Wire-format snapshot of one timer firing.
#[derive(Debug, Clone, Serialize)]
pub struct DiagSnapshot {
    pub tick: u64,
    pub entity_count: usize,
    /// Type tag of every live entity, e.g. `["player", "tile", "food"]`.
    pub entities: Vec<&'static str>,
    pub score: u32,
    pub lives: u32,
    pub paused: bool,
    pub game_over: bool,
    pub spawn_interval_ms: u64,
    pub elapsed_ms: u64,
    pub scene: String,
}

impl DiagSnapshot {
    pub fn capture(ctx: &Context, tick: u64, scene: &str) -> Self {
        Self {
            tick,
            entity_count: ctx.registry.len(),
            entities: ctx.registry.type_names(),
            score: ctx.state.score,
            lives: ctx.state.lives,
            paused: ctx.state.paused,
            game_over: ctx.state.game_over,
            spawn_interval_ms: ctx.state.food_spawn_interval.as_millis() as u64,
            elapsed_ms: ctx.elapsed.as_millis() as u64,
            scene: scene.to_string(),
        }
    }
}

pub trait DiagSink {
    fn publish(&mut self, snapshot: &DiagSnapshot);
}

/// Discards every snapshot.
pub struct NullDiagSink;

impl DiagSink for NullDiagSink {
    fn publish(&mut self, _snapshot: &DiagSnapshot) {}
}

/// Ships snapshots as JSON datagrams to a local telemetry listener.
#[cfg(feature = "diagnostics")]
pub struct UdpDiagSender {
    socket: UdpSocket,
    last_send: Instant,
}

#[cfg(feature = "diagnostics")]
impl UdpDiagSender {
    /// Bind an ephemeral local port aimed at `127.0.0.1:9100`. Returns
    /// `None` if the socket cannot be set up; diagnostics are optional and
    /// never fail the game.
    pub fn new() -> Option<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").ok()?;
        socket.connect("127.0.0.1:9100").ok()?;
        socket.set_nonblocking(true).ok()?;
        Some(Self {
            socket,
            // send immediately on the first firing
            last_send: Instant::now() - Duration::from_secs(1),
        })
    }
}

#[cfg(feature = "diagnostics")]
impl DiagSink for UdpDiagSender {
    fn publish(&mut self, snapshot: &DiagSnapshot) {
        let now = Instant::now();
        if now.duration_since(self.last_send).as_millis() < 100 {
            return;
        }
        self.last_send = now;

        // fire-and-forget: send errors are ignored
        if let Ok(json) = serde_json::to_vec(snapshot) {
            let _ = self.socket.send(&json);
        }
    }
}
