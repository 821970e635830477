//! Toolbar: Animation, Reset, Layer-Sichtbarkeiten und Optionen.

use crate::app::{AppIntent, AppState, CanvasLayer};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let play_label = if state.timeline.is_running() {
                "⏸ Pause"
            } else {
                "▶ Animation"
            };
            if ui.button(play_label).clicked() {
                events.push(AppIntent::AnimationToggleRequested);
            }
            if ui.button("↺ Zurücksetzen").clicked() {
                events.push(AppIntent::ResetRequested);
            }

            ui.separator();

            layer_checkbox(ui, &mut events, state, CanvasLayer::Points, "Punkte");
            layer_checkbox(ui, &mut events, state, CanvasLayer::Radii, "Radien");
            layer_checkbox(ui, &mut events, state, CanvasLayer::Polygon, "Polygon");
            layer_checkbox(ui, &mut events, state, CanvasLayer::Handles, "Handles");
            layer_checkbox(ui, &mut events, state, CanvasLayer::Curve, "Kurve");

            ui.separator();

            if ui.button("Optionen…").clicked() {
                events.push(AppIntent::OptionsDialogRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}

fn layer_checkbox(
    ui: &mut egui::Ui,
    events: &mut Vec<AppIntent>,
    state: &AppState,
    layer: CanvasLayer,
    label: &str,
) {
    let mut visible = state.visibility.get(layer);
    if ui.checkbox(&mut visible, label).changed() {
        events.push(AppIntent::LayerToggled { layer, visible });
    }
}
