use events::EventStore;
use events::popup::{PopupLabels, popup_html};
use foundation::LatLng;
use navigation::NavigationConfig;
use tracing::debug;

use crate::config::TileSource;
use crate::leaflet::{self, Map, Marker, TileLayer};

/// The Leaflet map with one marker per event, indexed like the store.
pub struct MapView {
    map: Map,
    markers: Vec<Marker>,
    tiles: Option<TileLayer>,
}

impl MapView {
    pub fn new(map: Map, config: &NavigationConfig) -> Self {
        map.set_min_zoom(f64::from(config.min_zoom.min(config.max_zoom)));
        map.set_max_zoom(f64::from(config.max_zoom.max(config.min_zoom)));
        if let Some(bounds) = config.max_bounds.filter(|b| b.is_valid()) {
            map.set_max_bounds(&leaflet::lat_lng_bounds(bounds));
        }
        map.set_view(
            &leaflet::lat_lng(config.default_center),
            f64::from(config.default_zoom),
        );
        Self {
            map,
            markers: Vec::new(),
            tiles: None,
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Creates detached markers with bound popups; `ShowMarkers` adds them.
    pub fn build_markers(&mut self, store: &EventStore, labels: &PopupLabels) -> &[Marker] {
        for marker in self.markers.drain(..) {
            self.map.remove_layer(&marker);
        }
        self.markers = store
            .iter()
            .map(|event| {
                let marker = leaflet::new_marker(&leaflet::lat_lng(event.location));
                marker.bind_popup(&popup_html(event, labels));
                marker
            })
            .collect();
        &self.markers
    }

    pub fn set_tiles(&mut self, source: &TileSource) {
        if let Some(old) = self.tiles.take() {
            self.map.remove_layer(&old);
        }
        let layer = leaflet::new_tile_layer(&source.url, &leaflet::tile_options(&source.attribution));
        layer.add_to(&self.map);
        self.tiles = Some(layer);
    }

    pub fn show_markers(&self, indices: &[usize]) {
        let mut wanted = indices.iter().copied().peekable();
        for (i, marker) in self.markers.iter().enumerate() {
            while wanted.next_if(|&w| w < i).is_some() {}
            let show = wanted.next_if_eq(&i).is_some();
            let shown = self.map.has_layer(marker);
            if show && !shown {
                marker.add_to(&self.map);
            } else if !show && shown {
                self.map.remove_layer(marker);
            }
        }
    }

    pub fn open_popup(&self, index: usize) {
        match self.markers.get(index) {
            Some(marker) => {
                marker.open_popup();
            }
            None => debug!(index, "no marker to open"),
        }
    }

    pub fn close_popup(&self, index: usize) {
        if let Some(marker) = self.markers.get(index) {
            marker.close_popup();
        }
    }

    pub fn set_view(&self, center: LatLng, zoom: u8) {
        self.map.set_view(&leaflet::lat_lng(center), f64::from(zoom));
    }

    pub fn pan_to(&self, center: LatLng) {
        self.map.pan_to(&leaflet::lat_lng(center));
    }
}
