//! Canvas: zeichnet Kurve, Hilfslinien, Knoten und Handles.

use crate::app::{AppIntent, AppState};
use crate::core::{PathDescription, PathSegment, NODE_COUNT};
use glam::DVec2;

/// Rendert den Canvas (CentralPanel) und gibt erzeugte Events zurück.
pub fn render_canvas(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        let size = [rect.width(), rect.height()];
        if state.view.viewport_size != size {
            events.push(AppIntent::ViewportResized { size });
        }

        let response = ui.allocate_rect(rect, egui::Sense::hover());
        let pointer = response
            .hover_pos()
            .map(|pos| [pos.x - rect.min.x, pos.y - rect.min.y]);
        if state.view.pointer_pos != pointer {
            events.push(AppIntent::PointerMoved { pos: pointer });
        }

        let painter = ui.painter_at(rect);
        paint_layers(&painter, rect.min, state);
    });

    events
}

fn paint_layers(painter: &egui::Painter, origin: egui::Pos2, state: &AppState) {
    let opts = &state.options;
    let center = to_screen(origin, state.curve.center());

    if state.visibility.radii {
        let stroke = egui::Stroke::new(opts.line_width_px, color(opts.radius_color));
        for node in 0..NODE_COUNT {
            let coordinate = to_screen(origin, state.curve.node_coordinate(node));
            painter.line_segment([center, coordinate], stroke);
        }
    }

    if state.visibility.polygon {
        let stroke = egui::Stroke::new(opts.line_width_px, color(opts.polygon_color));
        for node in 0..NODE_COUNT {
            let from = to_screen(origin, state.curve.node_coordinate(node));
            let to = to_screen(origin, state.curve.node_coordinate((node + 1) % NODE_COUNT));
            painter.line_segment([from, to], stroke);
        }
    }

    if state.visibility.handles {
        let stroke = egui::Stroke::new(opts.line_width_px, color(opts.control_line_color));
        for node in 0..NODE_COUNT {
            let coordinate = to_screen(origin, state.curve.node_coordinate(node));
            let (plus, minus) = state.curve.handles_for_node(node);
            for handle in [plus, minus] {
                let handle_pos = to_screen(origin, handle.coordinate());
                painter.line_segment([coordinate, handle_pos], stroke);
                painter.circle_filled(
                    handle_pos,
                    opts.point_radius_px,
                    color(opts.control_point_color),
                );
            }
        }
    }

    if state.visibility.curve {
        let stroke = egui::Stroke::new(opts.curve_width_px, color(opts.curve_color));
        for segment in expand_smooth_segments(state.curve.path()) {
            let points = segment.map(|p| to_screen(origin, p));
            painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
                points,
                false,
                egui::Color32::TRANSPARENT,
                stroke,
            ));
        }
    }

    if state.visibility.points {
        for node in 0..NODE_COUNT {
            let coordinate = to_screen(origin, state.curve.node_coordinate(node));
            painter.circle_filled(coordinate, opts.point_radius_px, color(opts.point_color));
        }
    }
}

/// Expandiert die Pfadbeschreibung zu vier vollständigen kubischen
/// Segmenten `[start, control1, control2, end]`.
///
/// Die `S`-Segmente tragen nur ihren zweiten Kontrollpunkt; der erste
/// ist per SVG-Konvention das Spiegelbild des letzten Kontrollpunkts
/// des Vorgängers am gemeinsamen Knoten: `2 · start − prev_control`.
pub fn expand_smooth_segments(path: &PathDescription) -> Vec<[DVec2; 4]> {
    let mut segments = Vec::with_capacity(path.segments().len());
    let mut cursor = DVec2::ZERO;
    let mut prev_control = DVec2::ZERO;

    for segment in path.segments() {
        match *segment {
            PathSegment::Lead {
                start,
                control1,
                control2,
                end,
            } => {
                segments.push([start, control1, control2, end]);
                cursor = end;
                prev_control = control2;
            }
            PathSegment::Smooth { control, end } => {
                let reflected = 2.0 * cursor - prev_control;
                segments.push([cursor, reflected, control, end]);
                cursor = end;
                prev_control = control;
            }
        }
    }

    segments
}

fn to_screen(origin: egui::Pos2, point: DVec2) -> egui::Pos2 {
    egui::Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClosedBezierCurve;
    use approx::assert_relative_eq;

    #[test]
    fn test_expansion_spiegelt_kontrollpunkte() {
        let mut curve = ClosedBezierCurve::new();
        curve.set_center(DVec2::new(100.0, 100.0));
        curve.set_magnitude(0, 0.5);
        curve.set_handle_distance(40.0);

        let expanded = expand_smooth_segments(curve.path());
        assert_eq!(expanded.len(), NODE_COUNT);
        // Jedes Segment beginnt am Ende des Vorgängers
        for window in expanded.windows(2) {
            assert_relative_eq!(window[0][3].x, window[1][0].x);
            assert_relative_eq!(window[0][3].y, window[1][0].y);
        }
        // Der reflektierte Kontrollpunkt liegt diametral zum Vorgänger
        let reflected = expanded[1][1];
        let expected = 2.0 * expanded[0][3] - expanded[0][2];
        assert_relative_eq!(reflected.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(reflected.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn test_expansion_schliesst_zum_startpunkt() {
        let mut curve = ClosedBezierCurve::new();
        curve.set_center(DVec2::new(400.0, 300.0));
        curve.set_magnitude(2, 0.8);
        let expanded = expand_smooth_segments(curve.path());
        let first_start = expanded[0][0];
        let last_end = expanded[NODE_COUNT - 1][3];
        assert_relative_eq!(first_start.x, last_end.x, epsilon = 1e-9);
        assert_relative_eq!(first_start.y, last_end.y, epsilon = 1e-9);
    }
}
