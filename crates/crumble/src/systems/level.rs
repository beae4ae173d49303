//! Level progression check.
//!
//! Pure decision: given the current scene, report the next scene to load
//! once the score has reached that scene's advance threshold. The
//! scheduler owns the transition mechanics (pause, clock suspend, load,
//! reset, resume); this system only says when and where to go.

use crate::context::Context;

/// Next scene to load, if the current scene's threshold has been reached.
pub fn check(ctx: &Context, current_scene: &str) -> Option<String> {
    let scene = ctx.config.scene(current_scene)?;
    let rule = scene.advance.as_ref()?;
    (ctx.state.score >= rule.score).then(|| rule.next.clone())
}
