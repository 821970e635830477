//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::CanvasLayer;
use crate::shared::StudioOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Magnitude-Slider eines Knotens bewegt
    MagnitudeChanged { node: usize, value: f64 },
    /// Phase-Slider eines Knotens bewegt
    PhaseChanged { node: usize, value: f64 },
    /// Handle-Distanz-Slider bewegt
    HandleDistanceChanged { value: f64 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Mausposition über dem Canvas (None = außerhalb)
    PointerMoved { pos: Option<[f32; 2]> },
    /// Sichtbarkeit einer Zeichenebene umgeschaltet
    LayerToggled { layer: CanvasLayer, visible: bool },
    /// Animation starten bzw. anhalten
    AnimationToggleRequested,
    /// Frame-Tick der laufenden Animation
    AnimationTick { dt: f64 },
    /// Kurve auf die Demo-Parameter zurücksetzen
    ResetRequested,
    /// Optionen-Dialog öffnen
    OptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: StudioOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen als TOML-Datei speichern
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende App-Commands, vom Controller ausgeführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Magnitude eines Knotens setzen
    SetMagnitude { node: usize, value: f64 },
    /// Phase eines Knotens setzen
    SetPhase { node: usize, value: f64 },
    /// Handle-Distanz setzen
    SetHandleDistance { value: f64 },
    /// Viewport-Größe übernehmen (setzt das Kurven-Zentrum)
    SetViewportSize { size: [f32; 2] },
    /// Mausposition übernehmen
    SetPointerPosition { pos: Option<[f32; 2]> },
    /// Sichtbarkeit einer Zeichenebene setzen
    SetLayerVisible { layer: CanvasLayer, visible: bool },
    /// Animation starten bzw. anhalten
    ToggleAnimation,
    /// Animation um dt Sekunden voranbringen und Kurve aktualisieren
    AdvanceAnimation { dt: f64 },
    /// Kurve auf die Demo-Parameter zurücksetzen
    ResetParameters,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Geänderte Optionen übernehmen
    ApplyOptions { options: StudioOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen als TOML-Datei speichern
    SaveOptions,
    /// Beenden-Flag setzen
    RequestExit,
}
