//! Climate-to-form derivation.
//!
//! The "design language" of the morphing building: three fixed linear maps
//! from climate readings to geometry parameters. These formulas are contract
//! constants — the HUD, the parametric model, and the golden-value tests all
//! assume them verbatim. They are O(1) arithmetic, recomputed on every read;
//! nothing caches them.

use serde::{Deserialize, Serialize};

use crate::climate::ClimateVector;

/// Roof pitch in degrees. Dry climates lean flat (15°); pitch grows linearly
/// with rainfall and is deliberately unclamped above the nominal 2000 mm/yr
/// ceiling.
pub fn roof_pitch_degrees(c: &ClimateVector) -> f64 {
    15.0 + (c.rainfall / 2000.0) * 45.0
}

/// Eaves overhang in metres, 0.1–0.8 for sunlight in 0–1. Stronger sun asks
/// for deeper shade.
pub fn eaves_overhang_meters(c: &ClimateVector) -> f64 {
    0.1 + c.sunlight * 0.7
}

/// Window-to-wall openness ratio. Defensive need shrinks openings, floored
/// at 0.17 so a dwelling is never windowless; for defense ≥ 12 the floor
/// dominates the unclamped linear term.
pub fn window_openness(c: &ClimateVector) -> f64 {
    (1.0 - c.defense / 12.0).max(0.17)
}

/// The three derived geometry parameters bundled for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormParams {
    pub roof_pitch_deg: f64,
    pub eaves_overhang_m: f64,
    pub window_openness: f64,
}

impl FormParams {
    pub fn from_climate(c: &ClimateVector) -> Self {
        Self {
            roof_pitch_deg: roof_pitch_degrees(c),
            eaves_overhang_m: eaves_overhang_meters(c),
            window_openness: window_openness(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_rainfall(mm: f64) -> ClimateVector {
        ClimateVector { rainfall: mm, ..ClimateVector::default() }
    }

    #[test]
    fn roof_pitch_spans_dry_to_wet() {
        assert_relative_eq!(roof_pitch_degrees(&with_rainfall(0.0)), 15.0);
        assert_relative_eq!(roof_pitch_degrees(&with_rainfall(2000.0)), 60.0);
        // Above the nominal ceiling the pitch keeps growing.
        assert_relative_eq!(roof_pitch_degrees(&with_rainfall(3000.0)), 82.5);
    }

    #[test]
    fn eaves_overhang_tracks_sunlight() {
        let mut c = ClimateVector::default();
        c.sunlight = 0.0;
        assert_relative_eq!(eaves_overhang_meters(&c), 0.1);
        c.sunlight = 1.0;
        assert_relative_eq!(eaves_overhang_meters(&c), 0.8);
    }

    #[test]
    fn window_openness_floors_at_high_defense() {
        let mut c = ClimateVector::default();
        for defense in [12.0, 13.0, 50.0] {
            c.defense = defense;
            assert_eq!(window_openness(&c), 0.17, "defense={defense} must hit the floor");
        }
        c.defense = 0.0;
        assert_relative_eq!(window_openness(&c), 1.0);
        c.defense = 6.0;
        assert_relative_eq!(window_openness(&c), 0.5);
    }

    #[test]
    fn form_params_bundle_matches_scalars() {
        let c = ClimateVector::default();
        let p = FormParams::from_climate(&c);
        assert_eq!(p.roof_pitch_deg, roof_pitch_degrees(&c));
        assert_eq!(p.eaves_overhang_m, eaves_overhang_meters(&c));
        assert_eq!(p.window_openness, window_openness(&c));
    }
}
