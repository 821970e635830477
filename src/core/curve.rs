//! Geschlossene kubische Bézier-Kurve über vier Polar-Knoten.

use super::control_point::ControlPoint;
use super::dataflow::{CellId, DependencyGraph};
use super::path::{PathDescription, PathSegment};
use super::polar_point::PolarPoint;
use super::Quadrant;
use glam::DVec2;

/// Anzahl der Knotenpunkte (fixiert; kein variabler Punktbestand).
pub const NODE_COUNT: usize = 4;
/// Anzahl der Handles (zwei pro Knoten).
pub const HANDLE_COUNT: usize = 2 * NODE_COUNT;

/// Quadranten-Rolle je Knoten-Slot, in fester zyklischer Reihenfolge.
const NODE_QUADRANTS: [Quadrant; NODE_COUNT] = [
    Quadrant::UpperRight,
    Quadrant::UpperLeft,
    Quadrant::LowerLeft,
    Quadrant::LowerRight,
];

// Zell-Layout des Abhängigkeitsgraphen:
//   0..4   Knoten-Koordinaten
//   4..12  Handle-Koordinaten (2i = +1-Handle, 2i+1 = −1-Handle von Knoten i)
//   12     Pfadbeschreibung
const CELL_NODE_BASE: CellId = 0;
const CELL_HANDLE_BASE: CellId = NODE_COUNT;
const CELL_PATH: CellId = NODE_COUNT + HANDLE_COUNT;
const CELL_COUNT: usize = CELL_PATH + 1;

/// Geschlossene Kurve: vier Knoten, acht Handles, eine Pfadbeschreibung.
///
/// Jede Eingangs-Änderung (Magnitude, Phase, Zentrum, Handle-Distanz)
/// stößt synchron die Neuberechnung aller transitiv abhängigen Werte an:
/// Knoten-Koordinaten vor Handle-Koordinaten vor der Pfadbeschreibung.
/// Die Pfadbeschreibung wird dabei immer vollständig neu erzeugt; bei
/// vier Segmenten lohnt kein inkrementelles Update.
pub struct ClosedBezierCurve {
    nodes: [PolarPoint; NODE_COUNT],
    handles: [ControlPoint; HANDLE_COUNT],
    handle_distance: f64,
    graph: DependencyGraph,
    path: PathDescription,
}

impl ClosedBezierCurve {
    /// Erstellt die Kurve mit Null-Parametern um das Zentrum (0, 0).
    pub fn new() -> Self {
        let nodes = NODE_QUADRANTS.map(PolarPoint::new);
        let handles = std::array::from_fn(|i| ControlPoint::new(NODE_QUADRANTS[i / 2], i % 2 == 1));

        let mut graph = DependencyGraph::new(CELL_COUNT);
        for node in 0..NODE_COUNT {
            let node_cell = CELL_NODE_BASE + node;
            graph.add_dependency(node_cell, CELL_HANDLE_BASE + 2 * node);
            graph.add_dependency(node_cell, CELL_HANDLE_BASE + 2 * node + 1);
            graph.add_dependency(node_cell, CELL_PATH);
        }
        for handle in 0..HANDLE_COUNT {
            graph.add_dependency(CELL_HANDLE_BASE + handle, CELL_PATH);
        }
        graph.seal();

        let mut curve = Self {
            nodes,
            handles,
            handle_distance: 0.0,
            graph,
            path: PathDescription::default(),
        };
        for node in 0..NODE_COUNT {
            curve.graph.invalidate(CELL_NODE_BASE + node);
        }
        curve.propagate();
        curve
    }

    // ── Eingänge ────────────────────────────────────────────────────────

    /// Setzt die normierte Magnitude eines Knotens.
    ///
    /// Werte außerhalb [0, 1] sind zulässig und extrapolieren.
    ///
    /// # Panics
    /// Bei `node >= NODE_COUNT`.
    pub fn set_magnitude(&mut self, node: usize, value: f64) {
        if self.nodes[node].normalized_magnitude() == value {
            return;
        }
        self.nodes[node].set_normalized_magnitude(value);
        self.graph.invalidate(CELL_NODE_BASE + node);
        self.propagate();
    }

    /// Setzt die normierte Phase eines Knotens (1.0 = eine Vierteldrehung).
    ///
    /// # Panics
    /// Bei `node >= NODE_COUNT`.
    pub fn set_phase(&mut self, node: usize, value: f64) {
        if self.nodes[node].normalized_phase() == value {
            return;
        }
        self.nodes[node].set_normalized_phase(value);
        self.graph.invalidate(CELL_NODE_BASE + node);
        self.propagate();
    }

    /// Setzt das gemeinsame Zentrum aller vier Knoten.
    ///
    /// Das Zentrum wird pro Durchlauf injiziert (typisch: halbe
    /// Viewport-Größe); es gibt keinen geteilten mutablen Zustand.
    pub fn set_center(&mut self, center: DVec2) {
        if self.nodes[0].center() == center {
            return;
        }
        for node in 0..NODE_COUNT {
            self.nodes[node].set_center(center);
            self.graph.invalidate(CELL_NODE_BASE + node);
        }
        self.propagate();
    }

    /// Setzt die kurvenweite Handle-Distanz in Pixel.
    ///
    /// Beide Handles jedes Knotens teilen denselben Wert; genau diese
    /// Symmetrie erzeugt die Tangentenstetigkeit an den Knoten.
    pub fn set_handle_distance(&mut self, value: f64) {
        if self.handle_distance == value {
            return;
        }
        self.handle_distance = value;
        for handle in 0..HANDLE_COUNT {
            self.handles[handle].set_distance(value);
            self.graph.invalidate(CELL_HANDLE_BASE + handle);
        }
        self.propagate();
    }

    // ── Ausgänge ────────────────────────────────────────────────────────

    /// Gemeinsames Zentrum der Knoten.
    pub fn center(&self) -> DVec2 {
        self.nodes[0].center()
    }

    /// Aktuelle Handle-Distanz in Pixel.
    pub fn handle_distance(&self) -> f64 {
        self.handle_distance
    }

    /// Knotenpunkt eines Slots (0..=3).
    ///
    /// # Panics
    /// Bei `node >= NODE_COUNT`.
    pub fn node(&self, node: usize) -> &PolarPoint {
        &self.nodes[node]
    }

    /// Koordinate eines Knotens.
    ///
    /// # Panics
    /// Bei `node >= NODE_COUNT`.
    pub fn node_coordinate(&self, node: usize) -> DVec2 {
        self.nodes[node].coordinate()
    }

    /// Beide Handles eines Knotens: (+1-Handle, −1-Handle).
    ///
    /// # Panics
    /// Bei `node >= NODE_COUNT`.
    pub fn handles_for_node(&self, node: usize) -> (&ControlPoint, &ControlPoint) {
        (&self.handles[2 * node], &self.handles[2 * node + 1])
    }

    /// Aktuelle Pfadbeschreibung.
    pub fn path(&self) -> &PathDescription {
        &self.path
    }

    /// Wie oft die Pfadbeschreibung bisher neu erzeugt wurde.
    pub fn path_generation(&self) -> u64 {
        self.graph.recompute_count(CELL_PATH)
    }

    // ── Propagation ─────────────────────────────────────────────────────

    fn propagate(&mut self) {
        for cell in self.graph.drain_dirty() {
            self.recompute_cell(cell);
        }
    }

    fn recompute_cell(&mut self, cell: CellId) {
        match cell {
            c if c < CELL_HANDLE_BASE => self.nodes[c].recompute(),
            c if c < CELL_PATH => {
                let handle = c - CELL_HANDLE_BASE;
                let node = handle / 2;
                let phase = self.nodes[node].normalized_phase();
                let coordinate = self.nodes[node].coordinate();
                self.handles[handle].recompute(phase, coordinate);
            }
            _ => self.rebuild_path(),
        }
    }

    /// Baut die Pfadbeschreibung vollständig neu auf.
    ///
    /// Segment 0 als volles `C` (ausgehendes −1-Handle von Knoten 0,
    /// eingehendes +1-Handle von Knoten 1), danach `S`-Fortsetzungen mit
    /// dem jeweiligen +1-Handle des Zielknotens. Den eingehenden
    /// Kontrollpunkt der `S`-Segmente spiegelt erst der Konsument.
    fn rebuild_path(&mut self) {
        self.path.clear();
        self.path.push(PathSegment::Lead {
            start: self.nodes[0].coordinate(),
            control1: self.handles[1].coordinate(),
            control2: self.handles[2].coordinate(),
            end: self.nodes[1].coordinate(),
        });
        for node in 2..NODE_COUNT {
            self.path.push(PathSegment::Smooth {
                control: self.handles[2 * node].coordinate(),
                end: self.nodes[node].coordinate(),
            });
        }
        // Schluss-Segment zurück zum ersten Knoten
        self.path.push(PathSegment::Smooth {
            control: self.handles[0].coordinate(),
            end: self.nodes[0].coordinate(),
        });
        log::debug!("Pfad neu erzeugt: {}", self.path);
    }
}

impl Default for ClosedBezierCurve {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_knoten_slots_tragen_feste_quadranten() {
        let curve = ClosedBezierCurve::new();
        assert_eq!(curve.node(0).quadrant(), Quadrant::UpperRight);
        assert_eq!(curve.node(1).quadrant(), Quadrant::UpperLeft);
        assert_eq!(curve.node(2).quadrant(), Quadrant::LowerLeft);
        assert_eq!(curve.node(3).quadrant(), Quadrant::LowerRight);
    }

    #[test]
    fn test_konstruktion_erzeugt_konsistenten_initialpfad() {
        let curve = ClosedBezierCurve::new();
        assert_eq!(curve.path().segments().len(), NODE_COUNT);
        assert_eq!(curve.path_generation(), 1);
    }

    #[test]
    fn test_zentrum_aenderung_verschiebt_knoten_und_handles() {
        let mut curve = ClosedBezierCurve::new();
        curve.set_magnitude(3, 1.0);
        curve.set_handle_distance(10.0);
        curve.set_center(DVec2::new(100.0, 100.0));

        assert_relative_eq!(curve.node_coordinate(3).x, 200.0, epsilon = 1e-9);
        let (plus, _) = curve.handles_for_node(3);
        assert_relative_eq!(
            plus.coordinate().distance(curve.node_coordinate(3)),
            10.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_handle_distanz_wirkt_auf_alle_acht_handles() {
        let mut curve = ClosedBezierCurve::new();
        curve.set_center(DVec2::new(400.0, 300.0));
        curve.set_handle_distance(25.0);
        for node in 0..NODE_COUNT {
            let (plus, minus) = curve.handles_for_node(node);
            let coordinate = curve.node_coordinate(node);
            assert_relative_eq!(plus.coordinate().distance(coordinate), 25.0, epsilon = 1e-9);
            assert_relative_eq!(minus.coordinate().distance(coordinate), 25.0, epsilon = 1e-9);
        }
    }
}
