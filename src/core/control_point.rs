//! Tangenten-Handle eines Knotenpunkts.

use super::polar_point::polar_offset;
use super::Quadrant;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Bézier-Handle, am Knoten verankert und um `distance` Pixel versetzt.
///
/// Kein Subtyp von `PolarPoint`: Die Überschreibungen des ursprünglichen
/// Modells (Magnitude-Quelle = Distanz statt `min(cx, cy)`-Skalierung,
/// Phasen-Quelle = Knoten-Phase ± 1) sind total und zur Compile-Zeit
/// bekannt, daher Komposition mit eigener Ableitungsfunktion. Der Quadrant
/// wird unverändert vom Knoten übernommen.
#[derive(Debug, Clone)]
pub struct ControlPoint {
    quadrant: Quadrant,
    opposite: bool,
    distance: f64,
    coordinate: DVec2,
}

impl ControlPoint {
    /// Erstellt ein Handle für einen Knoten im gegebenen Quadranten.
    ///
    /// `opposite` bestimmt das Vorzeichen der Phasen-Verschiebung:
    /// `false` → +1 Vierteldrehung, `true` → −1 Vierteldrehung.
    pub fn new(quadrant: Quadrant, opposite: bool) -> Self {
        Self {
            quadrant,
            opposite,
            distance: 0.0,
            coordinate: DVec2::ZERO,
        }
    }

    /// Quadrant (vom Knoten übernommen).
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Ob das Handle die −1-Richtung nutzt.
    pub fn is_opposite(&self) -> bool {
        self.opposite
    }

    /// Handle-Länge in Pixel (kurvenweit geteilter Wert).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Setzt die Handle-Länge. Keine Neuberechnung.
    pub fn set_distance(&mut self, value: f64) {
        self.distance = value;
    }

    /// Effektive normierte Phase: Knoten-Phase ± 1 Vierteldrehung.
    ///
    /// Bewusst keine echte Tangente an den lokalen Kurvenverlauf: Die
    /// Glattheit der Kurve entsteht allein aus der ±1-Symmetrie der
    /// beiden Handles eines Knotens (180° Winkelabstand, gleiche Länge).
    pub fn effective_phase(&self, node_phase: f64) -> f64 {
        node_phase + if self.opposite { -1.0 } else { 1.0 }
    }

    /// Rechnet die Koordinate aus Knoten-Phase und Knoten-Koordinate neu.
    ///
    /// Das Zentrum des Handles ist die Knoten-Koordinate selbst; die
    /// absolute Magnitude ist direkt `distance` (keine Skalierung).
    pub(crate) fn recompute(&mut self, node_phase: f64, node_coordinate: DVec2) {
        let angle = self.effective_phase(node_phase) * FRAC_PI_2 + self.quadrant.angle_offset();
        self.coordinate = polar_offset(node_coordinate, self.distance, angle);
    }

    /// Zuletzt berechnete Kartesisch-Koordinate.
    pub fn coordinate(&self) -> DVec2 {
        self.coordinate
    }
}
