//! Polar Bézier Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CanvasLayer, LayerVisibility, Timeline,
    ViewState,
};
pub use core::{
    derive_coordinate, ClosedBezierCurve, ControlPoint, PathDescription, PathSegment, PolarPoint,
    Quadrant, HANDLE_COUNT, NODE_COUNT,
};
pub use shared::StudioOptions;
