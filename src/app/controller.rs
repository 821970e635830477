//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Kurvenparameter ===
            AppCommand::SetMagnitude { node, value } => {
                handlers::curve::set_magnitude(state, node, value)
            }
            AppCommand::SetPhase { node, value } => handlers::curve::set_phase(state, node, value),
            AppCommand::SetHandleDistance { value } => {
                handlers::curve::set_handle_distance(state, value)
            }
            AppCommand::ResetParameters => handlers::curve::reset_parameters(state),

            // === Viewport & Layer ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetPointerPosition { pos } => {
                handlers::view::set_pointer_position(state, pos)
            }
            AppCommand::SetLayerVisible { layer, visible } => {
                handlers::view::set_layer_visible(state, layer, visible)
            }

            // === Animation ===
            AppCommand::ToggleAnimation => handlers::animation::toggle(state),
            AppCommand::AdvanceAnimation { dt } => handlers::animation::advance(state, dt),

            // === Dialog & Lifecycle ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
