//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.view.pointer_pos {
                Some([x, y]) => ui.label(format!("Maus: ({:.2}, {:.2})", x, y)),
                None => ui.label("Maus: außerhalb"),
            };

            ui.separator();

            let center = state.curve.center();
            ui.label(format!("Zentrum: ({:.0}, {:.0})", center.x, center.y));

            ui.separator();

            if state.timeline.is_running() {
                ui.label(format!("Animation: t = {:.2}", state.timeline.position()));
            } else {
                ui.label("Animation: pausiert");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
