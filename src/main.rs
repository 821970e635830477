//! Polar Bézier Studio.
//!
//! Interaktiver Demonstrator für geschlossene kubische Bézier-Kurven:
//! vier Polar-Knoten um ein bewegliches Zentrum, symmetrische Handles,
//! SVG-Pfadtext und Demo-Animation.

use eframe::egui;
use polar_bezier_studio::{ui, AppController, AppIntent, AppState, StudioOptions};

fn main() -> Result<(), eframe::Error> {
    StudioRunner::run()
}

struct StudioRunner;

impl StudioRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Polar Bézier Studio v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1600.0, 1200.0])
                .with_title("Geschlossene Bézier-Kurve"),
            ..Default::default()
        };

        eframe::run_native(
            "Polar Bézier Studio",
            options,
            Box::new(|_cc| Ok(Box::new(StudioApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct StudioApp {
    state: AppState,
    controller: AppController,
}

impl StudioApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = StudioOptions::config_path();
        let studio_options = StudioOptions::load_from_file(&config_path);

        Self {
            state: AppState::new(studio_options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);

        if self.state.timeline.is_running() {
            let dt = f64::from(ctx.input(|i| i.stable_dt));
            events.push(AppIntent::AnimationTick { dt });
            ctx.request_repaint();
        }

        self.process_events(events);
    }
}

impl StudioApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        // Canvas zuletzt: CentralPanel füllt den Rest des Fensters
        events.extend(ui::render_canvas(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
