//! Reaktiver Geometrie-Kern: Polar-Punkte, Handles, Kurve und Datenfluss.
//!
//! Der Kern kennt keine UI: Eingänge sind skalare Zuweisungen (Magnitude,
//! Phase, Zentrum, Handle-Distanz), Ausgänge sind die zwölf Punkt-Koordinaten
//! und die Pfadbeschreibung. Alle Operationen sind total über reellen
//! Eingaben; degenerierte Geometrie wird gezeichnet, nicht abgelehnt.

pub mod control_point;
pub mod curve;
pub mod dataflow;
pub mod path;
pub mod polar_point;
pub mod quadrant;

pub use control_point::ControlPoint;
pub use curve::{ClosedBezierCurve, HANDLE_COUNT, NODE_COUNT};
pub use dataflow::{CellId, DependencyGraph};
pub use path::{PathDescription, PathSegment};
pub use polar_point::{derive_coordinate, PolarPoint};
pub use quadrant::Quadrant;
