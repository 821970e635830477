//! UI-Komponenten: Toolbar, Canvas, Properties, Status-Bar, Dialoge.

pub mod canvas;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use canvas::{expand_smooth_segments, render_canvas};
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
