//! Handler für Optionen-Dialog und Anwendungs-Lifecycle.

use crate::app::AppState;
use crate::shared::StudioOptions;

/// Öffnet den Optionen-Dialog.
pub fn open_options(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt geänderte Optionen in den State.
pub fn apply_options(state: &mut AppState, options: StudioOptions) {
    state.timeline.set_period(options.animation_period_secs);
    state.options = options;
}

/// Setzt die Optionen auf die Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    apply_options(state, StudioOptions::default());
    log::info!("Optionen auf Standardwerte zurückgesetzt");
}

/// Speichert die aktuellen Optionen als TOML-Datei neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&StudioOptions::config_path())
}

/// Setzt das Beenden-Flag; das Frontend wertet es im nächsten Frame aus.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
