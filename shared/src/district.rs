use serde::Serialize;

/// Flood severity for a district, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FloodStatus {
    Critical,
    Warning,
    Alert,
}

impl FloodStatus {
    pub const ALL: [FloodStatus; 3] = [Self::Critical, Self::Warning, Self::Alert];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Alert => "alert",
        }
    }

    /// Parse the lowercase wire name. Anything else is unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "critical" => Some(Self::Critical),
            "warning" => Some(Self::Warning),
            "alert" => Some(Self::Alert),
            _ => None,
        }
    }

    /// Display label: "critical" -> "Critical".
    pub fn label(self) -> String {
        capitalize_first(self.as_str())
    }
}

/// Upper-case the first character and leave the remainder untouched.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistrictRecord {
    pub name: &'static str,
    pub coordinates: LatLng,
    pub status: FloodStatus,
    pub description: &'static str,
}

impl DistrictRecord {
    /// Stable DOM-friendly id: "Nuwara Eliya District" -> "nuwara-eliya-district".
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(|word| word.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

const fn district(
    name: &'static str,
    lat: f64,
    lng: f64,
    status: FloodStatus,
    description: &'static str,
) -> DistrictRecord {
    DistrictRecord {
        name,
        coordinates: LatLng::new(lat, lng),
        status,
        description,
    }
}

pub static DISTRICTS: [DistrictRecord; 12] = [
    district(
        "Colombo District",
        6.9271,
        79.8612,
        FloodStatus::Critical,
        "Severe flooding in multiple areas due to heavy monsoon rains. Evacuation advised for low-lying regions.",
    ),
    district(
        "Kalutara District",
        6.5854,
        80.0716,
        FloodStatus::Warning,
        "Rising water levels in Kelani River. Residents in flood-prone areas should stay alert.",
    ),
    district(
        "Ratnapura District",
        6.6828,
        80.3992,
        FloodStatus::Critical,
        "Kelani River overflowing. Evacuation advised for riverside communities. Road closures reported.",
    ),
    district(
        "Kegalle District",
        7.1210,
        80.3389,
        FloodStatus::Alert,
        "Minor flooding reported after continuous rainfall. Agricultural areas affected.",
    ),
    district(
        "Gampaha District",
        7.0833,
        80.0000,
        FloodStatus::Warning,
        "Waterlogging in urban areas. Drainage systems overwhelmed. Traffic disruptions reported.",
    ),
    district(
        "Matara District",
        5.9485,
        80.5353,
        FloodStatus::Alert,
        "Coastal flooding risk due to high tides and heavy rainfall. Fishing communities advised to stay alert.",
    ),
    district(
        "Hambantota District",
        6.1235,
        81.1194,
        FloodStatus::Warning,
        "Localized flooding reported in low-lying areas. Agricultural land affected.",
    ),
    district(
        "Badulla District",
        6.9833,
        81.0500,
        FloodStatus::Alert,
        "Landslide risk due to heavy rainfall. Hill country roads slippery.",
    ),
    district(
        "Nuwara Eliya District",
        6.9437,
        80.7282,
        FloodStatus::Alert,
        "Landslide risk in tea plantation areas. Caution advised for hill country travel.",
    ),
    district(
        "Kandy District",
        7.2906,
        80.6337,
        FloodStatus::Warning,
        "Urban flooding reported in low-lying areas. Drainage systems overwhelmed.",
    ),
    district(
        "Matale District",
        7.4667,
        80.6333,
        FloodStatus::Alert,
        "Minor flooding in agricultural areas. Caution advised near water bodies.",
    ),
    district(
        "Puttalam District",
        8.0333,
        79.8333,
        FloodStatus::Warning,
        "Coastal flooding risk and urban waterlogging. Fishermen advised to avoid sea travel.",
    ),
];

pub fn districts() -> &'static [DistrictRecord] {
    &DISTRICTS
}

/// Count of districts per status, in `FloodStatus::ALL` order.
pub fn status_counts(records: &[DistrictRecord]) -> [(FloodStatus, usize); 3] {
    FloodStatus::ALL.map(|status| {
        let count = records.iter().filter(|r| r.status == status).count();
        (status, count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_capitalizes_only_first_letter() {
        assert_eq!(FloodStatus::Critical.label(), "Critical");
        assert_eq!(FloodStatus::Warning.label(), "Warning");
        assert_eq!(FloodStatus::Alert.label(), "Alert");
        assert_eq!(capitalize_first("hIGH"), "HIGH");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn parse_accepts_wire_names_only() {
        for status in FloodStatus::ALL {
            assert_eq!(FloodStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(FloodStatus::parse("Critical"), None);
        assert_eq!(FloodStatus::parse("severe"), None);
    }

    #[test]
    fn dataset_keeps_source_order() {
        let names: Vec<_> = districts().iter().map(|d| d.name).collect();
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "Colombo District");
        assert_eq!(names[8], "Nuwara Eliya District");
        assert_eq!(names[11], "Puttalam District");
    }

    #[test]
    fn colombo_is_critical_at_source_coordinates() {
        let colombo = &districts()[0];
        assert_eq!(colombo.status, FloodStatus::Critical);
        assert_eq!(colombo.coordinates.to_array(), [6.9271, 79.8612]);
    }

    #[test]
    fn coordinates_fall_inside_sri_lanka() {
        for d in districts() {
            assert!((5.8..=9.9).contains(&d.coordinates.lat), "{}", d.name);
            assert!((79.5..=82.0).contains(&d.coordinates.lng), "{}", d.name);
        }
    }

    #[test]
    fn slug_joins_words_with_dashes() {
        assert_eq!(districts()[8].slug(), "nuwara-eliya-district");
        assert_eq!(districts()[0].slug(), "colombo-district");
    }

    #[test]
    fn status_counts_cover_every_record() {
        let counts = status_counts(districts());
        assert_eq!(counts[0], (FloodStatus::Critical, 2));
        assert_eq!(counts[1], (FloodStatus::Warning, 5));
        assert_eq!(counts[2], (FloodStatus::Alert, 5));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&FloodStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
