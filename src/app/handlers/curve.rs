//! Handler für direkte Kurvenparameter-Änderungen.

use crate::app::animation::{DEMO_HANDLE_DISTANCE, DEMO_START};
use crate::app::state::apply_keyframe;
use crate::app::AppState;
use crate::core::NODE_COUNT;

/// Setzt die normierte Magnitude eines Knotens.
pub fn set_magnitude(state: &mut AppState, node: usize, value: f64) {
    if node >= NODE_COUNT {
        log::warn!("Magnitude für ungültigen Knoten-Slot {} ignoriert", node);
        return;
    }
    state.curve.set_magnitude(node, value);
}

/// Setzt die normierte Phase eines Knotens.
pub fn set_phase(state: &mut AppState, node: usize, value: f64) {
    if node >= NODE_COUNT {
        log::warn!("Phase für ungültigen Knoten-Slot {} ignoriert", node);
        return;
    }
    state.curve.set_phase(node, value);
}

/// Setzt die kurvenweite Handle-Distanz.
pub fn set_handle_distance(state: &mut AppState, value: f64) {
    state.curve.set_handle_distance(value);
}

/// Setzt Kurve und Animation auf die Demo-Parameter zurück.
pub fn reset_parameters(state: &mut AppState) {
    state.timeline.rewind();
    apply_keyframe(&mut state.curve, &DEMO_START);
    state.curve.set_handle_distance(DEMO_HANDLE_DISTANCE);
    log::info!("Kurvenparameter auf Demo-Zustand zurückgesetzt");
}
