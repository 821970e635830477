//! Optionen-Dialog für Farben, Größen und Animationsdauer.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Punkte ──────────────────────────────────────
            ui.collapsing("Punkte", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.point_radius_px)
                                .range(1.0..=20.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Knotenfarbe:", &mut opts.point_color);
                changed |= color_edit(ui, "Handle-Farbe:", &mut opts.control_point_color);
            });

            // ── Hilfslinien ─────────────────────────────────
            ui.collapsing("Hilfslinien", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Linienstärke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.line_width_px)
                                .range(0.5..=10.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Radien:", &mut opts.radius_color);
                changed |= color_edit(ui, "Polygon:", &mut opts.polygon_color);
                changed |= color_edit(ui, "Handle-Linien:", &mut opts.control_line_color);
            });

            // ── Kurve ───────────────────────────────────────
            ui.collapsing("Kurve", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Strichstärke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_width_px)
                                .range(0.5..=15.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Kurvenfarbe:", &mut opts.curve_color);
            });

            // ── Animation ───────────────────────────────────
            ui.collapsing("Animation", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Periode (s):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.animation_period_secs)
                                .range(0.1..=30.0)
                                .speed(0.1),
                        )
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
