use foundation::{GeoBounds, LatLng};
use serde::{Deserialize, Serialize};

/// How the map moves to a newly selected event.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusPolicy {
    /// Jump to the event at the current zoom.
    #[default]
    SetView,
    /// Animate to the event, keeping the zoom.
    PanTo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub focus: FocusPolicy,
    /// Pan limit for the map; `None` leaves panning unbounded.
    pub max_bounds: Option<GeoBounds>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(35.0, 105.0),
            default_zoom: 4,
            min_zoom: 2,
            max_zoom: 18,
            focus: FocusPolicy::SetView,
            max_bounds: None,
        }
    }
}

impl NavigationConfig {
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        let (lo, hi) = if self.min_zoom <= self.max_zoom {
            (self.min_zoom, self.max_zoom)
        } else {
            (self.max_zoom, self.min_zoom)
        };
        zoom.clamp(lo, hi)
    }

    pub fn clamp_center(&self, center: LatLng) -> LatLng {
        match self.max_bounds {
            Some(b) if b.is_valid() => b.clamp(center),
            _ => center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusPolicy, NavigationConfig};
    use foundation::LatLng;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_yields_defaults() {
        let cfg: NavigationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, NavigationConfig::default());
        assert_eq!(cfg.default_center, LatLng::new(35.0, 105.0));
    }

    #[test]
    fn partial_json_overrides_named_fields() {
        let cfg: NavigationConfig = serde_json::from_str(
            r#"{"focus": "pan_to", "max_bounds": {
                "south_west": {"lat": 0, "lng": 60},
                "north_east": {"lat": 60, "lng": 150}}}"#,
        )
        .unwrap();
        assert_eq!(cfg.focus, FocusPolicy::PanTo);
        assert_eq!(cfg.default_zoom, 4);
        assert_eq!(
            cfg.clamp_center(LatLng::new(70.0, 10.0)),
            LatLng::new(60.0, 60.0)
        );
    }

    #[test]
    fn clamp_zoom_tolerates_swapped_limits() {
        let mut cfg = NavigationConfig::default();
        assert_eq!(cfg.clamp_zoom(0), 2);
        assert_eq!(cfg.clamp_zoom(30), 18);
        cfg.min_zoom = 10;
        cfg.max_zoom = 5;
        assert_eq!(cfg.clamp_zoom(7), 7);
        assert_eq!(cfg.clamp_zoom(1), 5);
    }
}
