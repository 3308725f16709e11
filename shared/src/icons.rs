use serde::Serialize;

use crate::district::FloodStatus;

pub const MARKER_GLYPH_HTML: &str = r#"<i class="fas fa-water"></i>"#;
pub const MARKER_SIZE_PX: u32 = 30;

/// Presentation descriptor for a status marker, shaped like a Leaflet `divIcon` option bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusIcon {
    pub class_name: String,
    pub html: &'static str,
    pub icon_size: [u32; 2],
}

/// Status -> icon. Exhaustive, so every status has an entry.
pub fn status_icon(status: FloodStatus) -> StatusIcon {
    StatusIcon {
        class_name: format!("flood-icon {}", status.as_str()),
        html: MARKER_GLYPH_HTML,
        icon_size: [MARKER_SIZE_PX, MARKER_SIZE_PX],
    }
}

/// Legend swatch color per status, matching the marker stylesheet.
pub fn status_color(status: FloodStatus) -> &'static str {
    match status {
        FloodStatus::Critical => "#d32f2f",
        FloodStatus::Warning => "#f57c00",
        FloodStatus::Alert => "#fbc02d",
    }
}
