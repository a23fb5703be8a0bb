//! Climate dissimilarity scoring and boundary-crossing detection.
//!
//! The mutation index is a weighted-Manhattan dissimilarity in normalized
//! units: each field difference is divided by its domain maximum, weighted,
//! summed, and scaled to a 0–100 figure. The normalizers are domain maxima,
//! not guaranteed bounds, so manually-driven extreme inputs can push the
//! index past 100 — that is a valid output, not an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::climate::{ClimateField, ClimateVector};

impl ClimateField {
    /// Weight of this field in the mutation index. Weights sum to 1.
    pub fn weight(self) -> f64 {
        match self {
            ClimateField::Rainfall => 0.35,
            ClimateField::Humidity => 0.15,
            ClimateField::Temperature => 0.15,
            ClimateField::Altitude => 0.10,
            ClimateField::Sunlight => 0.10,
            ClimateField::Defense => 0.15,
        }
    }

    /// Normalizing divisor: the nominal maximum of the field's domain.
    pub fn normalizer(self) -> f64 {
        match self {
            ClimateField::Rainfall => 2000.0,
            ClimateField::Humidity => 100.0,
            ClimateField::Temperature => 30.0,
            ClimateField::Altitude => 4000.0,
            ClimateField::Sunlight => 1.0,
            ClimateField::Defense => 10.0,
        }
    }
}

/// Weighted dissimilarity between two climate vectors, rounded half-up to an
/// integer. Symmetric, zero on identical inputs, designed to land in 0–100
/// for realistic station pairs.
pub fn mutation_index(a: &ClimateVector, b: &ClimateVector) -> u32 {
    let total: f64 = ClimateField::ALL
        .iter()
        .map(|&field| {
            let diff = (a.get(field) - b.get(field)).abs() / field.normalizer();
            diff * field.weight()
        })
        .sum();
    (total * 100.0).round() as u32
}

/// A named climatic or social threshold lying between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCrossing {
    /// The 800 mm isohyet: the humid / semi-arid divide.
    Rainfall800,
    /// The 400 mm isohyet: the semi-arid / arid divide.
    Rainfall400,
    /// The 2000 m contour: highland dwelling territory.
    Altitude2000,
    /// A defense-level jump of 5 or more: an abrupt social-environment shift.
    DefenseShift,
}

impl BoundaryCrossing {
    /// Narration line for this crossing.
    pub fn message(self) -> &'static str {
        match self {
            BoundaryCrossing::Rainfall800 => {
                "Crossing the 800 mm isohyet — roof forms shift from pitched to flat"
            }
            BoundaryCrossing::Rainfall400 => {
                "Crossing the 400 mm isohyet — entering the arid lands"
            }
            BoundaryCrossing::Altitude2000 => {
                "Crossing the 2000 m contour — highland dwelling traits emerge"
            }
            BoundaryCrossing::DefenseShift => {
                "The social environment shifts abruptly — defensive forms transform"
            }
        }
    }
}

impl fmt::Display for BoundaryCrossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// True when `line` lies strictly between `x` and `y`.
/// Equality with the line on either side never counts as a crossing.
fn straddles(x: f64, y: f64, line: f64) -> bool {
    (x > line && y < line) || (x < line && y > line)
}

/// All threshold lines lying between two climate vectors, in fixed check
/// order (rainfall 800, rainfall 400, altitude 2000, defense jump). The
/// order is independent of which endpoint is larger, and nothing is merged
/// or deduplicated.
pub fn crossed_boundaries(a: &ClimateVector, b: &ClimateVector) -> Vec<BoundaryCrossing> {
    let mut crossings = Vec::new();

    if straddles(a.rainfall, b.rainfall, 800.0) {
        crossings.push(BoundaryCrossing::Rainfall800);
    }
    if straddles(a.rainfall, b.rainfall, 400.0) {
        crossings.push(BoundaryCrossing::Rainfall400);
    }
    if straddles(a.altitude, b.altitude, 2000.0) {
        crossings.push(BoundaryCrossing::Altitude2000);
    }
    if (a.defense - b.defense).abs() >= 5.0 {
        crossings.push(BoundaryCrossing::DefenseShift);
    }

    crossings
}
