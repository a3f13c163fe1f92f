use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// Geographic bounding box in degrees, `south_west` to `north_east`.
///
/// Used as the pan limit of the map: viewport centers outside the box are
/// pulled back onto its edge.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl GeoBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        GeoBounds {
            south_west,
            north_east,
        }
    }

    /// Whole-world bounds.
    pub fn world() -> Self {
        GeoBounds::new(LatLng::new(-90.0, -180.0), LatLng::new(90.0, 180.0))
    }

    pub fn is_valid(&self) -> bool {
        self.south_west.is_valid()
            && self.north_east.is_valid()
            && self.south_west.lat <= self.north_east.lat
            && self.south_west.lng <= self.north_east.lng
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }

    pub fn clamp(&self, p: LatLng) -> LatLng {
        LatLng::new(
            p.lat.clamp(self.south_west.lat, self.north_east.lat),
            p.lng.clamp(self.south_west.lng, self.north_east.lng),
        )
    }

    /// `[[south, west], [north, east]]`, Leaflet's `LatLngBounds` literal.
    pub fn to_corner_arrays(self) -> [[f64; 2]; 2] {
        [self.south_west.to_array(), self.north_east.to_array()]
    }
}
