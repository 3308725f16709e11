use std::fmt;

use flood_watch_shared::map_view::{
    MAP_CENTER, MAP_ELEMENT_ID, MAP_ZOOM, TILE_ATTRIBUTION, TILE_URL_TEMPLATE,
};
use flood_watch_shared::{DistrictRecord, LatLng, StatusIcon, popup_html, status_icon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    Create(String),
    Layer(String),
    Marker(String),
    Options(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create(msg) => write!(f, "failed to create map view: {msg}"),
            Self::Layer(msg) => write!(f, "failed to add tile layer: {msg}"),
            Self::Marker(msg) => write!(f, "failed to place marker: {msg}"),
            Self::Options(msg) => write!(f, "failed to encode map options: {msg}"),
        }
    }
}

/// The slice of a mapping library the flood map draws through.
pub trait MapSurface {
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<(), MapError>;

    fn add_marker(&mut self, at: LatLng, icon: &StatusIcon, popup_html: &str)
    -> Result<(), MapError>;
}

#[derive(Debug, Default)]
pub struct RenderSummary {
    pub placed: usize,
    pub failures: Vec<(&'static str, MapError)>,
}

/// Place one status marker with its popup per district. A failed marker does
/// not stop the rest.
pub fn render_districts(surface: &mut impl MapSurface, records: &[DistrictRecord]) -> RenderSummary {
    let mut summary = RenderSummary::default();
    for record in records {
        let icon = status_icon(record.status);
        match surface.add_marker(record.coordinates, &icon, &popup_html(record)) {
            Ok(()) => summary.placed += 1,
            Err(e) => summary.failures.push((record.name, e)),
        }
    }
    summary
}

/// Tile layer plus district markers.
pub fn render_flood_map(
    surface: &mut impl MapSurface,
    records: &[DistrictRecord],
) -> Result<RenderSummary, MapError> {
    surface.add_tile_layer(TILE_URL_TEMPLATE, TILE_ATTRIBUTION)?;
    Ok(render_districts(surface, records))
}

/// Create the Leaflet view in `#flood-map` and draw the dataset on it.
pub fn init_flood_map(records: &[DistrictRecord]) -> Result<RenderSummary, MapError> {
    let mut surface = crate::leaflet::LeafletSurface::create(MAP_ELEMENT_ID, MAP_CENTER, MAP_ZOOM)?;
    render_flood_map(&mut surface, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flood_watch_shared::{FloodStatus, districts};

    #[derive(Default)]
    struct RecordingSurface {
        tile_layers: Vec<(String, String)>,
        markers: Vec<(LatLng, StatusIcon, String)>,
        reject_at: Option<LatLng>,
    }

    impl MapSurface for RecordingSurface {
        fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> Result<(), MapError> {
            self.tile_layers
                .push((url_template.to_string(), attribution.to_string()));
            Ok(())
        }

        fn add_marker(
            &mut self,
            at: LatLng,
            icon: &StatusIcon,
            popup_html: &str,
        ) -> Result<(), MapError> {
            if self.reject_at == Some(at) {
                return Err(MapError::Marker("rejected".into()));
            }
            self.markers.push((at, icon.clone(), popup_html.to_string()));
            Ok(())
        }
    }

    #[test]
    fn one_marker_per_district_at_its_coordinates() {
        let mut surface = RecordingSurface::default();
        let summary = render_flood_map(&mut surface, districts()).expect("render");

        assert_eq!(summary.placed, districts().len());
        assert!(summary.failures.is_empty());
        assert_eq!(surface.markers.len(), districts().len());
        for (record, (at, icon, popup)) in districts().iter().zip(&surface.markers) {
            assert_eq!(*at, record.coordinates);
            assert_eq!(icon, &status_icon(record.status));
            assert!(popup.contains(record.name));
            assert!(popup.contains(record.description));
            assert!(popup.contains(&record.status.label()));
        }
    }

    #[test]
    fn tile_layer_is_added_once_before_markers() {
        let mut surface = RecordingSurface::default();
        render_flood_map(&mut surface, &districts()[..1]).expect("render");
        assert_eq!(surface.tile_layers.len(), 1);
        assert_eq!(surface.tile_layers[0].0, TILE_URL_TEMPLATE);
        assert!(surface.tile_layers[0].1.contains("OpenStreetMap"));
    }

    #[test]
    fn colombo_marker_uses_critical_icon() {
        let mut surface = RecordingSurface::default();
        render_districts(&mut surface, districts());
        let (_, icon, popup) = &surface.markers[0];
        assert_eq!(icon.class_name, "flood-icon critical");
        assert!(popup.contains(r#"<p class="status critical">Critical</p>"#));
        assert_eq!(districts()[0].status, FloodStatus::Critical);
    }

    #[test]
    fn failed_marker_is_reported_and_rest_still_placed() {
        let mut surface = RecordingSurface {
            reject_at: Some(districts()[2].coordinates),
            ..Default::default()
        };
        let summary = render_districts(&mut surface, districts());
        assert_eq!(summary.placed, districts().len() - 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "Ratnapura District");
    }

    #[test]
    fn error_messages_name_the_stage() {
        assert_eq!(
            MapError::Create("L is not defined".into()).to_string(),
            "failed to create map view: L is not defined"
        );
    }
}
