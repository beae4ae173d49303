//! Headless run — a scripted slice of the game without a window.
//!
//! Wires the runtime to the stub scene provider and a logging diagnostics
//! sink, scripts a burst of input, and drives the loop at full speed for
//! half a minute of simulated play. Run with `RUST_LOG=info` to watch
//! spawns, breaks and scoring go by.

use crumble::prelude::*;

struct LogDiagSink;

impl DiagSink for LogDiagSink {
    fn publish(&mut self, snapshot: &DiagSnapshot) {
        if snapshot.tick % 60 == 0 {
            log::info!(
                "tick {:>4}  scene {}  score {:>3}  lives {}  entities {}{}",
                snapshot.tick,
                snapshot.scene,
                snapshot.score,
                snapshot.lives,
                snapshot.entity_count,
                if snapshot.paused { "  [paused]" } else { "" },
            );
        }
    }
}

fn main() {
    env_logger::init();

    let mut runtime = Runtime::new(
        GameConfig::default(),
        Box::new(StubSceneProvider::new("cupcake-world")),
        Box::new(NullRenderer),
        Box::new(LogDiagSink),
    );

    // a player's opening moves: walk right, hop, walk back left
    runtime.push_intent(Intent::Move(Direction::Right));
    runtime.run_for(30);
    runtime.push_intent(Intent::Jump);
    runtime.run_for(60);
    runtime.push_intent(Intent::StopMoving(Direction::Right));
    runtime.push_intent(Intent::Move(Direction::Left));
    runtime.run_for(60);
    runtime.push_intent(Intent::StopMoving(Direction::Left));

    // let the simulation run on its own for ~30 seconds of play
    runtime.run_for(1800);

    let state = &runtime.context().state;
    log::info!(
        "done after {} ticks: score {}, lives {}, scene {}",
        runtime.tick_count(),
        state.score,
        state.lives,
        runtime.scene_name(),
    );
}
