//! Zentrale Konfiguration für den Bézier-Demonstrator.
//!
//! `StudioOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Punkte ──────────────────────────────────────────────────────────

/// Radius der gezeichneten Knotenpunkte in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Farbe der Knotenpunkte (RGBA: Rot).
pub const POINT_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe der Handle-Punkte (RGBA: Grün).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.1, 0.7, 0.2, 1.0];

// ── Hilfslinien ─────────────────────────────────────────────────────

/// Linienstärke der Hilfslinien in Screen-Pixeln.
pub const LINE_WIDTH_PX: f32 = 1.0;
/// Farbe der Radius-Linien Zentrum → Knoten (RGBA: helles Grau).
pub const RADIUS_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Farbe des Kontrollpolygons (RGBA: dunkles Grau).
pub const POLYGON_COLOR: [f32; 4] = [0.4, 0.4, 0.45, 1.0];
/// Farbe der Linien Knoten → Handle (RGBA: blasses Grün).
pub const CONTROL_LINE_COLOR: [f32; 4] = [0.3, 0.6, 0.4, 1.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Strichstärke der Kurve in Screen-Pixeln.
pub const CURVE_WIDTH_PX: f32 = 3.0;
/// Farbe der Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.15, 0.4, 0.9, 1.0];

// ── Animation ───────────────────────────────────────────────────────

/// Dauer eines Hinwegs der Demo-Animation in Sekunden.
pub const ANIMATION_PERIOD_SECS: f64 = 2.0;

/// Alle zur Laufzeit änderbaren Darstellungsoptionen.
/// Wird als `polar_bezier_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Radius der gezeichneten Punkte in Screen-Pixeln
    pub point_radius_px: f32,
    /// Farbe der Knotenpunkte (RGBA)
    pub point_color: [f32; 4],
    /// Farbe der Handle-Punkte (RGBA)
    pub control_point_color: [f32; 4],

    // ── Hilfslinien ─────────────────────────────────────────────
    /// Linienstärke der Hilfslinien in Screen-Pixeln
    pub line_width_px: f32,
    /// Farbe der Radius-Linien Zentrum → Knoten
    pub radius_color: [f32; 4],
    /// Farbe des Kontrollpolygons
    pub polygon_color: [f32; 4],
    /// Farbe der Linien Knoten → Handle
    pub control_line_color: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Strichstärke der Kurve in Screen-Pixeln
    pub curve_width_px: f32,
    /// Farbe der Kurve
    pub curve_color: [f32; 4],

    // ── Animation ───────────────────────────────────────────────
    /// Dauer eines Hinwegs der Demo-Animation in Sekunden
    #[serde(default = "default_animation_period_secs")]
    pub animation_period_secs: f64,
}

impl Default for StudioOptions {
    fn default() -> Self {
        Self {
            point_radius_px: POINT_RADIUS_PX,
            point_color: POINT_COLOR,
            control_point_color: CONTROL_POINT_COLOR,

            line_width_px: LINE_WIDTH_PX,
            radius_color: RADIUS_COLOR,
            polygon_color: POLYGON_COLOR,
            control_line_color: CONTROL_LINE_COLOR,

            curve_width_px: CURVE_WIDTH_PX,
            curve_color: CURVE_COLOR,

            animation_period_secs: ANIMATION_PERIOD_SECS,
        }
    }
}

/// Serde-Default für `animation_period_secs` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_animation_period_secs() -> f64 {
    ANIMATION_PERIOD_SECS
}

impl StudioOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("polar_bezier_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("polar_bezier_studio.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let mut options = StudioOptions::default();
        options.curve_width_px = 5.5;
        options.animation_period_secs = 4.0;
        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: StudioOptions = toml::from_str(&text).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_fehlende_animationsdauer_nutzt_default() {
        // TOML ohne das später ergänzte Feld muss weiterhin laden
        let options = StudioOptions::default();
        let mut text = toml::to_string_pretty(&options).unwrap();
        text = text
            .lines()
            .filter(|line| !line.starts_with("animation_period_secs"))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: StudioOptions = toml::from_str(&text).unwrap();
        assert_eq!(parsed.animation_period_secs, ANIMATION_PERIOD_SECS);
    }
}
