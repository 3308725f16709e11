use crate::district::LatLng;

/// DOM id of the map container.
pub const MAP_ELEMENT_ID: &str = "flood-map";
/// Geographic center of Sri Lanka.
pub const MAP_CENTER: LatLng = LatLng::new(7.8731, 80.7718);
pub const MAP_ZOOM: u8 = 8;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
