//! Polar definierter Knotenpunkt: (Magnitude, Phase, Quadrant) → Kartesisch.

use super::Quadrant;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Verschiebt `origin` um `magnitude` in Richtung `angle` (Radiant).
pub(crate) fn polar_offset(origin: DVec2, magnitude: f64, angle: f64) -> DVec2 {
    origin + magnitude * DVec2::new(angle.cos(), angle.sin())
}

/// Reine Ableitungsfunktion des Knotenpunkts.
///
/// `magnitude` und `phase` sind normiert: Die absolute Magnitude ist
/// `magnitude · min(center.x, center.y)`, die absolute Phase
/// `phase · 90°` plus Quadranten-Offset.
pub fn derive_coordinate(magnitude: f64, phase: f64, center: DVec2, quadrant: Quadrant) -> DVec2 {
    let absolute_magnitude = magnitude * center.x.min(center.y);
    let angle = phase * FRAC_PI_2 + quadrant.angle_offset();
    polar_offset(center, absolute_magnitude, angle)
}

/// Knotenpunkt in Polarform um ein bewegliches Zentrum.
///
/// Magnitude und Phase sind normiert (konventionell [0,1]), werden aber
/// bewusst nicht geklemmt: Werte außerhalb extrapolieren über den
/// nominellen Sektor hinaus, NaN/Infinity laufen unverändert durch.
/// Die Koordinate ist eine reine Funktion der Eingänge; sie wird gecacht,
/// ist aber nie autoritativ. Die Neuberechnung stößt der Besitzer über
/// den Abhängigkeitsgraphen an.
#[derive(Debug, Clone)]
pub struct PolarPoint {
    quadrant: Quadrant,
    normalized_magnitude: f64,
    normalized_phase: f64,
    center: DVec2,
    coordinate: DVec2,
}

impl PolarPoint {
    /// Erstellt einen Knotenpunkt mit Null-Eingängen im gegebenen Quadranten.
    pub fn new(quadrant: Quadrant) -> Self {
        Self {
            quadrant,
            normalized_magnitude: 0.0,
            normalized_phase: 0.0,
            center: DVec2::ZERO,
            coordinate: DVec2::ZERO,
        }
    }

    /// Quadrant des Knotens (bei Konstruktion fixiert).
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Normierte Magnitude (Eingang, ungeklemmt).
    pub fn normalized_magnitude(&self) -> f64 {
        self.normalized_magnitude
    }

    /// Normierte Phase (Eingang, ungeklemmt; 1.0 = eine Vierteldrehung).
    pub fn normalized_phase(&self) -> f64 {
        self.normalized_phase
    }

    /// Aktuelles Zentrum.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Absolute Magnitude: `m · min(center.x, center.y)`.
    pub fn absolute_magnitude(&self) -> f64 {
        self.normalized_magnitude * self.center.x.min(self.center.y)
    }

    /// Absolute Phase in Radiant (`p · 90°`, ohne Quadranten-Offset).
    pub fn absolute_phase(&self) -> f64 {
        self.normalized_phase * FRAC_PI_2
    }

    /// Setzt die normierte Magnitude. Keine Validierung, keine Neuberechnung.
    pub fn set_normalized_magnitude(&mut self, value: f64) {
        self.normalized_magnitude = value;
    }

    /// Setzt die normierte Phase. Keine Validierung, keine Neuberechnung.
    pub fn set_normalized_phase(&mut self, value: f64) {
        self.normalized_phase = value;
    }

    /// Setzt das Zentrum (extern getrieben, z.B. von der Viewport-Größe).
    pub fn set_center(&mut self, center: DVec2) {
        self.center = center;
    }

    /// Rechnet die Koordinate aus den aktuellen Eingängen neu.
    pub(crate) fn recompute(&mut self) {
        self.coordinate = derive_coordinate(
            self.normalized_magnitude,
            self.normalized_phase,
            self.center,
            self.quadrant,
        );
    }

    /// Zuletzt berechnete Kartesisch-Koordinate.
    pub fn coordinate(&self) -> DVec2 {
        self.coordinate
    }
}
