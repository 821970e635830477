//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Konstanten, die zwischen `app` und `ui`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::StudioOptions;
pub use options::{ANIMATION_PERIOD_SECS, POINT_RADIUS_PX};
