//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MagnitudeChanged { node, value } => {
            vec![AppCommand::SetMagnitude { node, value }]
        }
        AppIntent::PhaseChanged { node, value } => vec![AppCommand::SetPhase { node, value }],
        AppIntent::HandleDistanceChanged { value } => {
            vec![AppCommand::SetHandleDistance { value }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerMoved { pos } => vec![AppCommand::SetPointerPosition { pos }],
        AppIntent::LayerToggled { layer, visible } => {
            vec![AppCommand::SetLayerVisible { layer, visible }]
        }
        AppIntent::AnimationToggleRequested => vec![AppCommand::ToggleAnimation],
        AppIntent::AnimationTick { dt } => {
            // Ticks ohne laufende Animation sind Frame-Rauschen
            if state.timeline.is_running() {
                vec![AppCommand::AdvanceAnimation { dt }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ResetRequested => vec![AppCommand::ResetParameters],
        AppIntent::OptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
