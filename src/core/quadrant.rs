//! Quadranten-Zuordnung der vier Kurven-Knoten.

use std::f64::consts::FRAC_PI_2;

/// Einer der vier 90°-Sektoren, in dem ein Knoten verankert ist.
///
/// Der Offset zählt Vierteldrehungen ab der positiven X-Achse in
/// Screen-Koordinaten (Y zeigt nach unten). Er wird bei Konstruktion
/// fixiert und ändert sich nie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Unten rechts (Offset 0)
    LowerRight,
    /// Unten links (Offset 1)
    LowerLeft,
    /// Oben links (Offset 2)
    UpperLeft,
    /// Oben rechts (Offset 3)
    UpperRight,
}

impl Quadrant {
    /// Vierteldrehungs-Offset des Sektors (0..=3).
    pub const fn offset(self) -> u8 {
        match self {
            Quadrant::LowerRight => 0,
            Quadrant::LowerLeft => 1,
            Quadrant::UpperLeft => 2,
            Quadrant::UpperRight => 3,
        }
    }

    /// Basis-Winkel des Sektors in Radiant (`offset · 90°`).
    pub fn angle_offset(self) -> f64 {
        FRAC_PI_2 * self.offset() as f64
    }
}
