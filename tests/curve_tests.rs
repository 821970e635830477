//! Integrationstests für das Kurvenmodell:
//! - Polar-Ableitung der Knoten-Koordinaten
//! - Handle-Symmetrie und Pfad-Aufbau
//! - Recompute-Verhalten bei Eingangs-Änderungen
//! - SVG-Pfadtext-Grammatik

use glam::DVec2;
use polar_bezier_studio::ui::expand_smooth_segments;
use polar_bezier_studio::{derive_coordinate, ClosedBezierCurve, Quadrant, NODE_COUNT};

use approx::assert_relative_eq;

/// Erstellt die Demo-Kurve um das Zentrum (800, 600).
fn demo_curve() -> ClosedBezierCurve {
    let mut curve = ClosedBezierCurve::new();
    curve.set_center(DVec2::new(800.0, 600.0));
    let magnitudes = [1.0, 0.75, 0.5, 0.25];
    let phases = [0.15, 0.3, 0.5, 0.6];
    for node in 0..NODE_COUNT {
        curve.set_magnitude(node, magnitudes[node]);
        curve.set_phase(node, phases[node]);
    }
    curve.set_handle_distance(100.0);
    curve
}

// ─── Koordinaten-Ableitung ───────────────────────────────────────────────────

#[test]
fn test_knoten_im_unteren_rechten_quadranten_auf_x_achse() {
    let mut curve = ClosedBezierCurve::new();
    curve.set_center(DVec2::new(100.0, 100.0));
    curve.set_magnitude(3, 1.0);
    // Slot 3 = LowerRight, Phase 0: volle Magnitude entlang +X
    assert_relative_eq!(curve.node_coordinate(3).x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(curve.node_coordinate(3).y, 100.0, epsilon = 1e-9);
}

#[test]
fn test_knoten_oben_rechts_mit_nicht_quadratischem_viewport() {
    let curve = demo_curve();
    // Slot 0 = UpperRight, m = 1.0, p = 0.15, Zentrum (800, 600):
    // absolute Magnitude = 600 (kleinere Zentrumskomponente)
    let coordinate = curve.node_coordinate(0);
    assert_relative_eq!(coordinate.x, 940.05, epsilon = 0.1);
    assert_relative_eq!(coordinate.y, 16.65, epsilon = 0.1);
    // Exakt gegen die Ableitungsfunktion
    let expected = derive_coordinate(1.0, 0.15, DVec2::new(800.0, 600.0), Quadrant::UpperRight);
    assert_relative_eq!(coordinate.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(coordinate.y, expected.y, epsilon = 1e-9);
}

#[test]
fn test_alle_knoten_liegen_auf_ihrem_radius() {
    let curve = demo_curve();
    let center = curve.center();
    let magnitudes = [1.0, 0.75, 0.5, 0.25];
    for node in 0..NODE_COUNT {
        let radius = curve.node_coordinate(node).distance(center);
        assert_relative_eq!(radius, magnitudes[node] * 600.0, epsilon = 1e-9);
    }
}

// ─── Handle-Symmetrie ────────────────────────────────────────────────────────

#[test]
fn test_handles_liegen_diametral_um_den_knoten() {
    let curve = demo_curve();
    for node in 0..NODE_COUNT {
        let coordinate = curve.node_coordinate(node);
        let (plus, minus) = curve.handles_for_node(node);
        assert_relative_eq!(plus.coordinate().distance(coordinate), 100.0, epsilon = 1e-9);
        assert_relative_eq!(
            minus.coordinate().distance(coordinate),
            100.0,
            epsilon = 1e-9
        );
        // ±1 Vierteldrehung = 180° Winkelabstand: Knoten ist Mittelpunkt
        let midpoint = (plus.coordinate() + minus.coordinate()) / 2.0;
        assert_relative_eq!(midpoint.x, coordinate.x, epsilon = 1e-9);
        assert_relative_eq!(midpoint.y, coordinate.y, epsilon = 1e-9);
    }
}

#[test]
fn test_handle_distanz_ist_absolut_nicht_skaliert() {
    let mut curve = demo_curve();
    // Zentrum ändern skaliert die Knoten-Radien, nicht die Handle-Längen
    curve.set_center(DVec2::new(200.0, 150.0));
    for node in 0..NODE_COUNT {
        let (plus, _) = curve.handles_for_node(node);
        assert_relative_eq!(
            plus.coordinate().distance(curve.node_coordinate(node)),
            100.0,
            epsilon = 1e-9
        );
    }
}

// ─── Recompute-Verhalten ─────────────────────────────────────────────────────

#[test]
fn test_jede_eingangsaenderung_erzeugt_den_pfad_neu() {
    let mut curve = demo_curve();
    let mut generation = curve.path_generation();

    curve.set_magnitude(2, 0.9);
    assert_eq!(curve.path_generation(), generation + 1);
    generation += 1;

    curve.set_phase(1, 0.7);
    assert_eq!(curve.path_generation(), generation + 1);
    generation += 1;

    curve.set_center(DVec2::new(500.0, 500.0));
    assert_eq!(curve.path_generation(), generation + 1);
    generation += 1;

    curve.set_handle_distance(50.0);
    assert_eq!(curve.path_generation(), generation + 1);
}

#[test]
fn test_gleicher_wert_loest_keine_neuberechnung_aus() {
    let mut curve = demo_curve();
    let generation = curve.path_generation();
    let text = curve.path().to_string();

    curve.set_magnitude(0, 1.0);
    curve.set_phase(0, 0.15);
    curve.set_handle_distance(100.0);
    curve.set_center(DVec2::new(800.0, 600.0));

    assert_eq!(curve.path_generation(), generation);
    assert_eq!(curve.path().to_string(), text);
}

#[test]
fn test_aenderung_eines_knotens_laesst_andere_knoten_unberuehrt() {
    let mut curve = demo_curve();
    let before: Vec<DVec2> = (1..NODE_COUNT).map(|n| curve.node_coordinate(n)).collect();

    curve.set_magnitude(0, 0.42);

    for (i, node) in (1..NODE_COUNT).enumerate() {
        assert_eq!(curve.node_coordinate(node), before[i]);
    }
}

// ─── Pfad-Aufbau und Schluss ─────────────────────────────────────────────────

#[test]
fn test_pfad_endet_im_startknoten() {
    let curve = demo_curve();
    let end = curve.path().end_coordinate().unwrap();
    assert_relative_eq!(end.x, curve.node_coordinate(0).x, epsilon = 1e-9);
    assert_relative_eq!(end.y, curve.node_coordinate(0).y, epsilon = 1e-9);
}

#[test]
fn test_expandierte_segmente_bilden_geschlossenen_zug() {
    let curve = demo_curve();
    let segments = expand_smooth_segments(curve.path());
    assert_eq!(segments.len(), NODE_COUNT);
    for window in segments.windows(2) {
        assert_relative_eq!(window[0][3].x, window[1][0].x, epsilon = 1e-9);
        assert_relative_eq!(window[0][3].y, window[1][0].y, epsilon = 1e-9);
    }
    assert_relative_eq!(segments[0][0].x, segments[3][3].x, epsilon = 1e-9);
    assert_relative_eq!(segments[0][0].y, segments[3][3].y, epsilon = 1e-9);
}

#[test]
fn test_expandierte_kurve_ist_tangentenstetig() {
    let curve = demo_curve();
    let segments = expand_smooth_segments(curve.path());
    // An jedem inneren Knoten: gespiegelter Eingangs-Kontrollpunkt des
    // Folgesegments liegt diametral zum Ausgangs-Kontrollpunkt
    for window in segments.windows(2) {
        let joint = window[0][3];
        let outgoing = window[0][2];
        let incoming = window[1][1];
        assert_relative_eq!((outgoing + incoming).x / 2.0, joint.x, epsilon = 1e-9);
        assert_relative_eq!((outgoing + incoming).y / 2.0, joint.y, epsilon = 1e-9);
    }
}

// ─── SVG-Pfadtext ────────────────────────────────────────────────────────────

#[test]
fn test_pfadtext_grammatik() {
    let curve = demo_curve();
    let text = curve.path().to_string();
    let tokens: Vec<&str> = text.split(' ').collect();

    // M x y C x8 S x4 S x4 S x4 Z
    assert_eq!(tokens.len(), 28);
    assert_eq!(tokens[0], "M");
    assert_eq!(tokens[3], "C");
    assert_eq!(tokens[12], "S");
    assert_eq!(tokens[17], "S");
    assert_eq!(tokens[22], "S");
    assert_eq!(tokens[27], "Z");

    // Alle Zahl-Tokens: Festkomma mit zwei Nachkommastellen
    for token in tokens.iter().filter(|t| !["M", "C", "S", "Z"].contains(t)) {
        let (_, decimals) = token.split_once('.').expect("Dezimalpunkt erwartet");
        assert_eq!(decimals.len(), 2, "Token {token} hat keine zwei Stellen");
        token.parse::<f64>().expect("Token muss eine Zahl sein");
    }
}

#[test]
fn test_degenerierte_geometrie_liefert_nullpfad() {
    // Kein Zentrum, keine Magnituden: alle zwölf Punkte fallen zusammen
    let curve = ClosedBezierCurve::new();
    assert_eq!(
        curve.path().to_string(),
        "M 0.00 0.00 C 0.00 0.00 0.00 0.00 0.00 0.00 \
         S 0.00 0.00 0.00 0.00 S 0.00 0.00 0.00 0.00 S 0.00 0.00 0.00 0.00 Z"
    );
}

#[test]
fn test_extrapolation_und_nan_laufen_ohne_panik_durch() {
    let mut curve = demo_curve();
    curve.set_magnitude(0, 2.5);
    curve.set_phase(0, -1.0);
    assert!(curve.path().to_string().starts_with("M "));

    curve.set_magnitude(1, f64::NAN);
    // NaN fließt durch die Ableitung in den Text, ohne Panik
    let text = curve.path().to_string();
    assert!(text.contains("NaN"));
}
