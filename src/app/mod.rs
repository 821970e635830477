//! Application-Layer: Controller, State, Events und Animation.

pub mod animation;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kurvenmodell, View, Animation).
pub mod state;

pub use animation::{CurveKeyframe, Timeline, DEMO_HANDLE_DISTANCE, DEMO_START, DEMO_TARGET};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, CanvasLayer, LayerVisibility, ViewState};
