//! Pfadbeschreibung der geschlossenen Kurve: Segmentliste plus SVG-Text.

use glam::DVec2;
use std::fmt;

/// Ein Segment der Pfadbeschreibung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Eröffnungssegment: `M start C control1 control2 end`.
    Lead {
        start: DVec2,
        control1: DVec2,
        control2: DVec2,
        end: DVec2,
    },
    /// Glatte Fortsetzung: `S control end`.
    ///
    /// Der eingehende Kontrollpunkt ist per SVG-Konvention das Spiegelbild
    /// des letzten Kontrollpunkts des Vorgänger-Segments am gemeinsamen
    /// Knoten. Er wird hier weder gespeichert noch berechnet; das ist
    /// Sache des Konsumenten des Pfadformats.
    Smooth { control: DVec2, end: DVec2 },
}

impl PathSegment {
    /// Endpunkt des Segments.
    pub fn end(&self) -> DVec2 {
        match *self {
            PathSegment::Lead { end, .. } => end,
            PathSegment::Smooth { end, .. } => end,
        }
    }
}

/// Geordnete Segmentfolge einer geschlossenen Kurve.
///
/// Die Kurve ist immer `Z`-geschlossen: Das letzte Segment endet im
/// Startpunkt des ersten.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathDescription {
    segments: Vec<PathSegment>,
}

impl PathDescription {
    /// Die Segmente in Zeichenreihenfolge.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Ob die Beschreibung (noch) keine Segmente enthält.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Endkoordinate des letzten Segments, falls vorhanden.
    pub fn end_coordinate(&self) -> Option<DVec2> {
        self.segments.last().map(PathSegment::end)
    }

    pub(crate) fn clear(&mut self) {
        self.segments.clear();
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }
}

impl fmt::Display for PathDescription {
    /// SVG-Pfadtext: `M x y C x y x y x y S x y x y … Z`.
    ///
    /// Festkomma mit zwei Nachkommastellen, ASCII-Dezimalpunkt, Felder
    /// durch einzelne Leerzeichen getrennt. Dieses Format ist die
    /// Kompatibilitätsfläche für nachgelagerte Renderer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match *segment {
                PathSegment::Lead {
                    start,
                    control1,
                    control2,
                    end,
                } => write!(
                    f,
                    "M {:.2} {:.2} C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2} ",
                    start.x, start.y, control1.x, control1.y, control2.x, control2.y, end.x, end.y
                )?,
                PathSegment::Smooth { control, end } => write!(
                    f,
                    "S {:.2} {:.2} {:.2} {:.2} ",
                    control.x, control.y, end.x, end.y
                )?,
            }
        }
        write!(f, "Z")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_text_format() {
        let mut path = PathDescription::default();
        path.push(PathSegment::Lead {
            start: DVec2::new(1.0, 2.0),
            control1: DVec2::new(3.5, 4.25),
            control2: DVec2::new(5.0, 6.0),
            end: DVec2::new(7.0, 8.0),
        });
        path.push(PathSegment::Smooth {
            control: DVec2::new(9.125, 10.0),
            end: DVec2::new(11.0, 12.0),
        });
        assert_eq!(
            path.to_string(),
            "M 1.00 2.00 C 3.50 4.25 5.00 6.00 7.00 8.00 S 9.13 10.00 11.00 12.00 Z"
        );
    }

    #[test]
    fn test_negative_koordinaten_mit_dezimalpunkt() {
        let mut path = PathDescription::default();
        path.push(PathSegment::Smooth {
            control: DVec2::new(-0.25, 100.0),
            end: DVec2::new(-3.1, 0.0),
        });
        assert_eq!(path.to_string(), "S -0.25 100.00 -3.10 0.00 Z");
    }

    #[test]
    fn test_endkoordinate_des_letzten_segments() {
        let mut path = PathDescription::default();
        assert_eq!(path.end_coordinate(), None);
        path.push(PathSegment::Smooth {
            control: DVec2::ZERO,
            end: DVec2::new(4.0, 5.0),
        });
        assert_eq!(path.end_coordinate(), Some(DVec2::new(4.0, 5.0)));
    }
}
