use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loosely-typed boolean as delivered by the facilities endpoint.
///
/// Exactly four encodings count as true: `true`, `"true"`, `1` and `"1"`.
/// Every other value, `null` and a missing field included, is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LooseBool(bool);

impl LooseBool {
    pub fn from_value(value: &Value) -> Self {
        let truthy = match value {
            Value::Bool(b) => *b,
            Value::String(s) => s == "true" || s == "1",
            Value::Number(n) => n.as_f64() == Some(1.0),
            _ => false,
        };
        Self(truthy)
    }

    pub fn is_true(self) -> bool {
        self.0
    }
}

impl From<bool> for LooseBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A point of interest as returned by `GET /api/facilities`.
///
/// Decoding never fails on an individual record: fields with an unexpected
/// shape are treated as absent, and an array element that is not an object
/// becomes a facility with every field absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Value")]
pub struct Facility {
    pub id: Option<i64>,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub practice_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wheelchair_accessible: LooseBool,
}

impl Facility {
    /// Where a marker goes. Both coordinates must be present; zero is a valid value.
    pub fn position(&self) -> Option<LatLon> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(LatLon::new(lat, lon)),
            _ => None,
        }
    }

    /// Where selecting the card recenters the map. Zero coordinates count as missing.
    pub fn focus_point(&self) -> Option<LatLon> {
        self.position()
            .filter(|p| p.latitude != 0.0 && p.longitude != 0.0)
    }

    pub fn is_wheelchair_accessible(&self) -> bool {
        self.wheelchair_accessible.is_true()
    }
}

impl From<Value> for Facility {
    fn from(value: Value) -> Self {
        let Value::Object(obj) = value else {
            return Facility::default();
        };

        Facility {
            id: obj.get("id").and_then(lenient_integer),
            external_id: obj.get("externalId").and_then(lenient_text),
            name: obj.get("name").and_then(lenient_text),
            practice_name: obj.get("practiceName").and_then(lenient_text),
            kind: obj.get("type").and_then(lenient_text),
            latitude: obj.get("latitude").and_then(lenient_number),
            longitude: obj.get("longitude").and_then(lenient_number),
            wheelchair_accessible: obj
                .get("wheelchairAccessible")
                .map(LooseBool::from_value)
                .unwrap_or_default(),
        }
    }
}

fn lenient_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn lenient_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Current text query and accessibility toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub accessible_only: bool,
}

impl FilterState {
    pub fn new(query: impl Into<String>, accessible_only: bool) -> Self {
        Self {
            query: query.into(),
            accessible_only,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLabel {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLon,
    pub label: MarkerLabel,
}

/// One entry of the facility list.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub practice_name: Option<String>,
    pub kind: String,
    pub accessibility: Option<String>,
    pub focus: Option<LatLon>,
}

/// Everything one render pass puts on screen, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendering {
    pub markers: Vec<Marker>,
    pub cards: Vec<Card>,
}

impl Rendering {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Loading,
    Error,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub center: LatLon,
    pub zoom: u8,
    pub focus_zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: LatLon::new(51.5177, 7.0857),
            zoom: 12,
            focus_zoom: 14,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub no_name_placeholder: String,
    pub accessible_label: String,
    pub error_message: String,
    pub loading_message: String,
    pub empty_message: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            no_name_placeholder: "no name".to_string(),
            accessible_label: "♿ wheelchair accessible".to_string(),
            error_message: "Facilities could not be loaded".to_string(),
            loading_message: "Loading facilities…".to_string(),
            empty_message: "No facilities match the current filter".to_string(),
        }
    }
}
