//! Bindings to the subset of the global Leaflet `L` object the map view uses.

use foundation::{GeoBounds, LatLng};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn new_map(element_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &Map, center: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setMaxBounds)]
    pub fn set_max_bounds(this: &Map, bounds: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setMinZoom)]
    pub fn set_min_zoom(this: &Map, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = setMaxZoom)]
    pub fn set_max_zoom(this: &Map, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> JsLatLng;

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &Map) -> f64;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method, js_name = hasLayer)]
    pub fn has_layer(this: &Map, layer: &Layer) -> bool;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &Map, layer: &Layer) -> Map;

    pub type JsLatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &JsLatLng) -> f64;

    #[derive(Clone)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map) -> Layer;

    #[derive(Clone)]
    #[wasm_bindgen(extends = Layer)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(at: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method, js_name = closePopup)]
    pub fn close_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on_marker(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;

    #[wasm_bindgen(extends = Layer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;
}

/// `[lat, lng]`, which Leaflet accepts anywhere a `LatLng` is expected.
pub fn lat_lng(p: LatLng) -> JsValue {
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_f64(p.lat));
    arr.push(&JsValue::from_f64(p.lng));
    arr.into()
}

/// `[[south, west], [north, east]]`.
pub fn lat_lng_bounds(b: GeoBounds) -> JsValue {
    let arr = js_sys::Array::new();
    arr.push(&lat_lng(b.south_west));
    arr.push(&lat_lng(b.north_east));
    arr.into()
}

pub fn tile_options(attribution: &str) -> JsValue {
    let opts = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &opts,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(attribution),
    );
    opts.into()
}

impl JsLatLng {
    pub fn to_lat_lng(&self) -> LatLng {
        LatLng::new(self.lat(), self.lng())
    }
}

impl Map {
    /// Centre and whole-number zoom; `None` while Leaflet reports no zoom.
    pub fn settled_view(&self) -> Option<(LatLng, u8)> {
        let zoom = self.get_zoom();
        if !zoom.is_finite() {
            return None;
        }
        let zoom = zoom.round().clamp(0.0, f64::from(u8::MAX)) as u8;
        Some((self.get_center().to_lat_lng(), zoom))
    }
}
