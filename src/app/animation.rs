//! Demo-Animation: Keyframes und Zeitsteuerung mit Auto-Reverse.

/// Ein vollständiger Parametersatz der vier Knoten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveKeyframe {
    /// Normierte Magnituden je Knoten-Slot.
    pub magnitudes: [f64; 4],
    /// Normierte Phasen je Knoten-Slot.
    pub phases: [f64; 4],
}

/// Ausgangszustand der Demo-Kurve.
pub const DEMO_START: CurveKeyframe = CurveKeyframe {
    magnitudes: [1.0, 0.75, 0.5, 0.25],
    phases: [0.15, 0.3, 0.5, 0.6],
};

/// Zielzustand der Demo-Animation.
pub const DEMO_TARGET: CurveKeyframe = CurveKeyframe {
    magnitudes: [0.1, 0.1, 0.9, 0.75],
    phases: [0.85, 0.85, 0.2, 0.1],
};

/// Handle-Distanz der Demo-Kurve in Pixel.
pub const DEMO_HANDLE_DISTANCE: f64 = 100.0;

impl CurveKeyframe {
    /// Lineare Interpolation zwischen zwei Keyframes, komponentenweise.
    pub fn lerp(&self, target: &CurveKeyframe, t: f64) -> CurveKeyframe {
        let mut frame = *self;
        for i in 0..4 {
            frame.magnitudes[i] += (target.magnitudes[i] - self.magnitudes[i]) * t;
            frame.phases[i] += (target.phases[i] - self.phases[i]) * t;
        }
        frame
    }
}

/// Zeitachse der Demo-Animation: Hin- und Rückweg, endlos.
///
/// Die Position läuft in `period_secs` von 0 nach 1, kehrt dann um
/// (Auto-Reverse) und wiederholt sich unbegrenzt. Getrieben wird sie
/// pro Frame über `advance` mit der Frame-Dauer.
#[derive(Debug, Clone)]
pub struct Timeline {
    period_secs: f64,
    elapsed: f64,
    forward: bool,
    running: bool,
}

/// Untergrenze der Periodendauer in Sekunden.
const MIN_PERIOD_SECS: f64 = 0.1;

impl Timeline {
    /// Erstellt eine angehaltene Zeitachse an Position 0.
    pub fn new(period_secs: f64) -> Self {
        Self {
            period_secs: period_secs.max(MIN_PERIOD_SECS),
            elapsed: 0.0,
            forward: true,
            running: false,
        }
    }

    /// Ob die Animation gerade läuft.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Dauer eines Hinwegs in Sekunden.
    pub fn period_secs(&self) -> f64 {
        self.period_secs
    }

    /// Setzt die Periodendauer, geklemmt auf ein sinnvolles Minimum.
    pub fn set_period(&mut self, period_secs: f64) {
        self.period_secs = period_secs.max(MIN_PERIOD_SECS);
    }

    /// Startet bzw. setzt die Animation fort.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Hält die Animation an, behält die Position.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Setzt die Position auf den Anfang zurück (vorwärts, angehalten).
    pub fn rewind(&mut self) {
        self.elapsed = 0.0;
        self.forward = true;
        self.running = false;
    }

    /// Treibt die Zeitachse um `dt` Sekunden voran und liefert die neue
    /// Position. Überläufe kehren die Richtung um, auch mehrfach, falls
    /// `dt` länger als eine Periode ist.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.running && dt > 0.0 {
            self.elapsed += dt;
            while self.elapsed > self.period_secs {
                self.elapsed -= self.period_secs;
                self.forward = !self.forward;
            }
        }
        self.position()
    }

    /// Aktuelle Position in [0, 1], richtungsbereinigt.
    pub fn position(&self) -> f64 {
        let t = self.elapsed / self.period_secs;
        if self.forward {
            t
        } else {
            1.0 - t
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_interpoliert_komponentenweise() {
        let frame = DEMO_START.lerp(&DEMO_TARGET, 0.5);
        assert_relative_eq!(frame.magnitudes[0], 0.55);
        assert_relative_eq!(frame.phases[0], 0.5);
    }

    #[test]
    fn test_lerp_randwerte() {
        assert_eq!(DEMO_START.lerp(&DEMO_TARGET, 0.0), DEMO_START);
        let end = DEMO_START.lerp(&DEMO_TARGET, 1.0);
        for i in 0..4 {
            assert_relative_eq!(end.magnitudes[i], DEMO_TARGET.magnitudes[i], epsilon = 1e-12);
            assert_relative_eq!(end.phases[i], DEMO_TARGET.phases[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_angehaltene_zeitachse_bewegt_sich_nicht() {
        let mut timeline = Timeline::new(2.0);
        assert_relative_eq!(timeline.advance(0.5), 0.0);
    }

    #[test]
    fn test_auto_reverse_kehrt_richtung_um() {
        let mut timeline = Timeline::new(2.0);
        timeline.start();
        assert_relative_eq!(timeline.advance(0.5), 0.25);
        assert_relative_eq!(timeline.advance(1.0), 0.75);
        // Überlauf über 2.0s: Rückweg
        assert_relative_eq!(timeline.advance(1.0), 0.75);
        assert_relative_eq!(timeline.advance(1.0), 0.25);
    }

    #[test]
    fn test_grosses_dt_ueberspringt_mehrere_perioden() {
        let mut timeline = Timeline::new(1.0);
        timeline.start();
        // 2.5 Perioden: hin, zurück, halber Hinweg
        assert_relative_eq!(timeline.advance(2.5), 0.5);
    }

    #[test]
    fn test_periode_wird_nach_unten_geklemmt() {
        let mut timeline = Timeline::new(2.0);
        timeline.set_period(0.0);
        assert_relative_eq!(timeline.period_secs(), 0.1);
    }

    #[test]
    fn test_rewind_setzt_zurueck() {
        let mut timeline = Timeline::new(2.0);
        timeline.start();
        timeline.advance(1.3);
        timeline.rewind();
        assert!(!timeline.is_running());
        assert_relative_eq!(timeline.position(), 0.0);
    }
}
