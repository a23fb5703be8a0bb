//! The six-dimensional climate measurement and per-field interpolation.
//!
//! A [`ClimateVector`] carries the raw environmental readings a station (or
//! an interpolated point along a route) is described by. Fields are plain
//! `f64` values with conventional units; nothing here clamps or validates
//! ranges — manual control is allowed to push any field outside its typical
//! domain, and every consumer must produce a well-defined result anyway.

use serde::{Deserialize, Serialize};

/// Climate readings for one location.
///
/// Typical domains (not enforced): rainfall 0–2000 mm/yr, humidity 0–100 %,
/// temperature −10–30 °C, altitude −100–4000 m, sunlight 0–1, defense 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateVector {
    /// Annual precipitation in mm/yr.
    pub rainfall: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Mean temperature in °C.
    pub temperature: f64,
    /// Elevation in metres.
    pub altitude: f64,
    /// Solar intensity index, 0–1.
    pub sunlight: f64,
    /// Sociopolitical / defensive need index, 0–10.
    pub defense: f64,
}

impl ClimateVector {
    pub fn new(
        rainfall: f64,
        humidity: f64,
        temperature: f64,
        altitude: f64,
        sunlight: f64,
        defense: f64,
    ) -> Self {
        Self { rainfall, humidity, temperature, altitude, sunlight, defense }
    }

    /// Read one field by identifier.
    pub fn get(&self, field: ClimateField) -> f64 {
        match field {
            ClimateField::Rainfall => self.rainfall,
            ClimateField::Humidity => self.humidity,
            ClimateField::Temperature => self.temperature,
            ClimateField::Altitude => self.altitude,
            ClimateField::Sunlight => self.sunlight,
            ClimateField::Defense => self.defense,
        }
    }

    /// Overwrite one field by identifier, leaving the others untouched.
    pub fn set(&mut self, field: ClimateField, value: f64) {
        match field {
            ClimateField::Rainfall => self.rainfall = value,
            ClimateField::Humidity => self.humidity = value,
            ClimateField::Temperature => self.temperature = value,
            ClimateField::Altitude => self.altitude = value,
            ClimateField::Sunlight => self.sunlight = value,
            ClimateField::Defense => self.defense = value,
        }
    }
}

impl Default for ClimateVector {
    /// Session-start climate: a humid lowland river-delta profile.
    fn default() -> Self {
        Self {
            rainfall: 1200.0,
            humidity: 80.0,
            temperature: 18.0,
            altitude: 50.0,
            sunlight: 0.6,
            defense: 2.0,
        }
    }
}

/// Identifier for a single climate field.
///
/// Used wherever exactly one field must be addressed (manual slider writes,
/// the mutation metric's per-field weights) so that "set one field, others
/// untouched" is expressed in the type system rather than by string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateField {
    Rainfall,
    Humidity,
    Temperature,
    Altitude,
    Sunlight,
    Defense,
}

impl ClimateField {
    /// All six fields, in declaration order.
    pub const ALL: [ClimateField; 6] = [
        ClimateField::Rainfall,
        ClimateField::Humidity,
        ClimateField::Temperature,
        ClimateField::Altitude,
        ClimateField::Sunlight,
        ClimateField::Defense,
    ];
}

/// Linear interpolation between two scalars. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate two climate vectors field-by-field.
///
/// Each field is lerped independently; there is no cross-field coupling.
/// `t` is expected in 0–1 but deliberately not clamped — the caller decides
/// whether overshoot is meaningful.
pub fn interpolate(start: &ClimateVector, end: &ClimateVector, t: f64) -> ClimateVector {
    ClimateVector {
        rainfall: lerp(start.rainfall, end.rainfall, t),
        humidity: lerp(start.humidity, end.humidity, t),
        temperature: lerp(start.temperature, end.temperature, t),
        altitude: lerp(start.altitude, end.altitude, t),
        sunlight: lerp(start.sunlight, end.sunlight, t),
        defense: lerp(start.defense, end.defense, t),
    }
}
