//! Application State — zentrale Datenhaltung.

use super::animation::{Timeline, DEMO_HANDLE_DISTANCE, DEMO_START};
use crate::core::{ClosedBezierCurve, NODE_COUNT};
use crate::shared::StudioOptions;

/// Zeichenebene des Canvas, einzeln schaltbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasLayer {
    /// Knotenpunkte
    Points,
    /// Radius-Linien Zentrum → Knoten
    Radii,
    /// Kontrollpolygon durch die vier Knoten
    Polygon,
    /// Handles samt Verbindungslinien
    Handles,
    /// Die Kurve selbst
    Curve,
}

/// Sichtbarkeit der einzelnen Zeichenebenen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    pub points: bool,
    pub radii: bool,
    pub polygon: bool,
    pub handles: bool,
    pub curve: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            points: true,
            radii: false,
            polygon: false,
            handles: true,
            curve: true,
        }
    }
}

impl LayerVisibility {
    /// Liest die Sichtbarkeit einer Ebene.
    pub fn get(&self, layer: CanvasLayer) -> bool {
        match layer {
            CanvasLayer::Points => self.points,
            CanvasLayer::Radii => self.radii,
            CanvasLayer::Polygon => self.polygon,
            CanvasLayer::Handles => self.handles,
            CanvasLayer::Curve => self.curve,
        }
    }

    /// Setzt die Sichtbarkeit einer Ebene.
    pub fn set(&mut self, layer: CanvasLayer, visible: bool) {
        match layer {
            CanvasLayer::Points => self.points = visible,
            CanvasLayer::Radii => self.radii = visible,
            CanvasLayer::Polygon => self.polygon = visible,
            CanvasLayer::Handles => self.handles = visible,
            CanvasLayer::Curve => self.curve = visible,
        }
    }
}

/// Viewport-bezogener Zustand.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixeln.
    pub viewport_size: [f32; 2],
    /// Letzte Mausposition über dem Canvas, falls vorhanden.
    pub pointer_pos: Option<[f32; 2]>,
}

/// Zentrale Datenhaltung der Anwendung.
pub struct AppState {
    /// Das reaktive Kurvenmodell.
    pub curve: ClosedBezierCurve,
    /// Sichtbarkeit der Zeichenebenen.
    pub visibility: LayerVisibility,
    /// Viewport-Zustand.
    pub view: ViewState,
    /// Zeitachse der Demo-Animation.
    pub timeline: Timeline,
    /// Laufzeit-Optionen.
    pub options: StudioOptions,
    /// Ob der Optionen-Dialog sichtbar ist.
    pub show_options_dialog: bool,
    /// Beenden-Flag, vom Frontend ausgewertet.
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit der Demo-Kurve.
    pub fn new(options: StudioOptions) -> Self {
        let mut curve = ClosedBezierCurve::new();
        apply_keyframe(&mut curve, &DEMO_START);
        curve.set_handle_distance(DEMO_HANDLE_DISTANCE);
        let timeline = Timeline::new(options.animation_period_secs);
        Self {
            curve,
            visibility: LayerVisibility::default(),
            view: ViewState::default(),
            timeline,
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StudioOptions::default())
    }
}

/// Überträgt einen Keyframe vollständig auf die Kurve.
pub fn apply_keyframe(curve: &mut ClosedBezierCurve, frame: &super::animation::CurveKeyframe) {
    for node in 0..NODE_COUNT {
        curve.set_magnitude(node, frame.magnitudes[node]);
        curve.set_phase(node, frame.phases[node]);
    }
}
