//! Properties-Panel (rechte Seitenleiste) für die Kurvenparameter.

use crate::app::{AppIntent, AppState};
use crate::core::NODE_COUNT;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let animating = state.timeline.is_running();

    egui::SidePanel::right("properties_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Parameter");
            ui.separator();

            // Slider sind während der Animation gesperrt; sie würden
            // sonst pro Frame vom Keyframe überschrieben.
            ui.add_enabled_ui(!animating, |ui| {
                for node in 0..NODE_COUNT {
                    ui.label(format!("Punkt {}", node + 1));

                    let mut magnitude = state.curve.node(node).normalized_magnitude();
                    if ui
                        .add(
                            egui::Slider::new(&mut magnitude, 0.0..=1.0)
                                .text("Magnitude")
                                .fixed_decimals(2),
                        )
                        .changed()
                    {
                        events.push(AppIntent::MagnitudeChanged {
                            node,
                            value: magnitude,
                        });
                    }

                    let mut phase = state.curve.node(node).normalized_phase();
                    if ui
                        .add(
                            egui::Slider::new(&mut phase, 0.0..=1.0)
                                .text("Phase")
                                .fixed_decimals(2),
                        )
                        .changed()
                    {
                        events.push(AppIntent::PhaseChanged { node, value: phase });
                    }

                    ui.separator();
                }

                let mut distance = state.curve.handle_distance();
                if ui
                    .add(
                        egui::Slider::new(&mut distance, 0.0..=300.0)
                            .text("Handle-Distanz")
                            .fixed_decimals(0),
                    )
                    .changed()
                {
                    events.push(AppIntent::HandleDistanceChanged { value: distance });
                }
            });

            ui.separator();
            ui.label("SVG-Pfad:");
            ui.add(
                egui::Label::new(
                    egui::RichText::new(state.curve.path().to_string()).monospace(),
                )
                .wrap(),
            );
        });

    events
}
