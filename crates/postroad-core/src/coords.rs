//! Geographic and scene-placement coordinate types.
//! Geographic math uses f64; scene placement uses f32 (render precision).

use serde::{Deserialize, Serialize};

/// A point on the globe in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees, -90 to +90.
    pub lat: f64,
    /// Longitude in degrees, -180 to +180.
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to radians.
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

/// Placement of a station marker in the stylized map scene.
///
/// This is not a projection of the geographic coordinates — the map scene
/// is an artistic arrangement, so each station carries an authored x/y/z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ScenePosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for ScenePosition {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radians_conversion() {
        let ll = LatLon::new(90.0, -180.0);
        let (lat, lon) = ll.to_radians();
        assert!((lat - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((lon + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn scene_position_from_array() {
        let p = ScenePosition::from([-4.0, 0.3, 4.0]);
        assert_eq!(p, ScenePosition::new(-4.0, 0.3, 4.0));
    }
}
