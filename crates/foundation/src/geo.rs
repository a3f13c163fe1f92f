use serde::{Deserialize, Serialize};

pub const MAX_LAT_DEG: f64 = 90.0;
pub const MAX_LNG_DEG: f64 = 180.0;

/// Geographic position in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= MAX_LAT_DEG
            && self.lng.abs() <= MAX_LNG_DEG
    }

    /// Longitude folded back into `[-180, 180]`; maps report positions past
    /// the antimeridian after the user pans across it.
    pub fn wrapped(self) -> Self {
        if self.lng.abs() <= MAX_LNG_DEG || !self.lng.is_finite() {
            return self;
        }
        let lng = (self.lng + MAX_LNG_DEG).rem_euclid(2.0 * MAX_LNG_DEG) - MAX_LNG_DEG;
        Self::new(self.lat, lng)
    }

    /// `[lat, lng]`, the pair order Leaflet expects.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl From<[f64; 2]> for LatLng {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}
