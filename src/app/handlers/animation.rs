//! Handler für die Demo-Animation.

use crate::app::animation::{DEMO_START, DEMO_TARGET};
use crate::app::state::apply_keyframe;
use crate::app::AppState;

/// Startet bzw. pausiert die Animation.
pub fn toggle(state: &mut AppState) {
    if state.timeline.is_running() {
        state.timeline.stop();
        log::debug!("Animation pausiert bei t = {:.3}", state.timeline.position());
    } else {
        state.timeline.start();
        log::debug!("Animation gestartet");
    }
}

/// Treibt die Zeitachse voran und überträgt den interpolierten
/// Keyframe auf die Kurve.
pub fn advance(state: &mut AppState, dt: f64) {
    let t = state.timeline.advance(dt);
    let frame = DEMO_START.lerp(&DEMO_TARGET, t);
    apply_keyframe(&mut state.curve, &frame);
}
