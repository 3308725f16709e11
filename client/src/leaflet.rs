//! Thin bindings over the global Leaflet (`L`) namespace.
//!
//! Only the handful of calls the flood map needs are bound. Constructors use
//! `catch` so a missing `L` global or a missing container surfaces as an error
//! instead of a trap.

use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use flood_watch_shared::{LatLng, StatusIcon};

use crate::map::{MapError, MapSurface};

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    pub type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url_template: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tile_layer_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type DivIcon;

    #[wasm_bindgen(catch, js_namespace = L, js_name = divIcon)]
    fn create_div_icon(options: &JsValue) -> Result<DivIcon, JsValue>;

    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn create_marker(lat_lng: &JsValue, options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;
}

#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
}

/// A live Leaflet map bound to a DOM container.
pub struct LeafletSurface {
    map: LeafletMap,
}

impl LeafletSurface {
    pub fn create(element_id: &str, center: LatLng, zoom: u8) -> Result<Self, MapError> {
        let map = create_map(element_id).map_err(|e| MapError::Create(js_error_text(&e)))?;
        let center = to_js(&center.to_array())?;
        map.set_view(&center, zoom);
        Ok(Self { map })
    }
}

impl MapSurface for LeafletSurface {
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<(), MapError> {
        let options = to_js(&TileLayerOptions { attribution })?;
        let layer = create_tile_layer(url_template, &options)
            .map_err(|e| MapError::Layer(js_error_text(&e)))?;
        layer.add_tile_layer_to(&self.map);
        Ok(())
    }

    fn add_marker(
        &mut self,
        at: LatLng,
        icon: &StatusIcon,
        popup_html: &str,
    ) -> Result<(), MapError> {
        let icon_options = to_js(icon)?;
        let icon = create_div_icon(&icon_options).map_err(|e| MapError::Marker(js_error_text(&e)))?;

        let marker_options = Object::new();
        Reflect::set(&marker_options, &JsValue::from_str("icon"), &icon)
            .map_err(|e| MapError::Marker(js_error_text(&e)))?;

        let marker = create_marker(&to_js(&at.to_array())?, &marker_options)
            .map_err(|e| MapError::Marker(js_error_text(&e)))?;
        marker.add_marker_to(&self.map).bind_popup(popup_html);
        Ok(())
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Options(e.to_string()))
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}
