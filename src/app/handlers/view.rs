//! Handler für Viewport und Zeichenebenen.

use crate::app::state::CanvasLayer;
use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die Viewport-Größe und zentriert die Kurve darin.
///
/// Das Kurven-Zentrum folgt immer der halben Canvas-Größe; ein
/// Fenster-Resize verformt die Kurve damit sofort mit.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    let center = DVec2::new(f64::from(size[0]) / 2.0, f64::from(size[1]) / 2.0);
    if state.curve.center() != center {
        state.curve.set_center(center);
    }
}

/// Übernimmt die Mausposition über dem Canvas.
pub fn set_pointer_position(state: &mut AppState, pos: Option<[f32; 2]>) {
    state.view.pointer_pos = pos;
}

/// Setzt die Sichtbarkeit einer Zeichenebene.
pub fn set_layer_visible(state: &mut AppState, layer: CanvasLayer, visible: bool) {
    state.visibility.set(layer, visible);
}
