use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the species content file.
///
/// Only the fields the globe and catalog read are typed; every other key is
/// kept in `extra` and written back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery: Option<Discovery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_where: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_model: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SpeciesRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            scientific_name: String::new(),
            period: String::new(),
            location: None,
            discovery: None,
            discovery_where: None,
            images: Vec::new(),
            model: None,
            has_model: false,
            extra: serde_json::Map::new(),
        }
    }

    /// First non-empty of `location`, `discovery.where` and the flat
    /// `discoveryWhere` key.
    pub fn location_text(&self) -> Option<&str> {
        [
            self.location.as_deref(),
            self.discovery.as_ref().and_then(|d| d.site.as_deref()),
            self.discovery_where.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
    }

    pub fn is_model_tagged(&self) -> bool {
        self.has_model || self.model.as_deref().is_some_and(|path| !path.is_empty())
    }
}

/// The `discovery` block of a species entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Discovery {
    pub fn at(site: impl Into<String>) -> Self {
        Self {
            site: Some(site.into()),
            ..Self::default()
        }
    }
}

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Returns `None` when either component is outside its range or not finite.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        (lat_ok && lng_ok).then_some(Self { lat, lng })
    }

    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// A species record together with the coordinate it resolved to.
///
/// Serializes as the record's own fields plus `lat` and `lng`, which is the
/// point shape the globe renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSpecies {
    #[serde(flatten)]
    pub record: SpeciesRecord,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl ResolvedSpecies {
    pub fn new(record: SpeciesRecord, coordinate: Coordinate) -> Self {
        Self { record, coordinate }
    }
}

/// Records that can be partitioned by the daily sampler.
pub trait ModelTagged {
    fn has_model(&self) -> bool;
}

impl ModelTagged for SpeciesRecord {
    fn has_model(&self) -> bool {
        self.is_model_tagged()
    }
}

impl ModelTagged for ResolvedSpecies {
    fn has_model(&self) -> bool {
        self.record.is_model_tagged()
    }
}

/// Outcome of resolving a batch of records.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub resolved: Vec<ResolvedSpecies>,
    pub excluded: Vec<String>,
}

/// The subset of records shown on the globe for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySelection<T = ResolvedSpecies> {
    pub date: NaiveDate,
    pub seed: i64,
    #[serde(rename = "points")]
    pub entries: Vec<T>,
}

impl<T: ModelTagged> DailySelection<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn model_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.has_model()).count()
    }
}

/// Everything the load phase writes.
#[derive(Debug, Clone)]
pub struct GlobeDataset {
    pub selection: DailySelection,
    pub total_records: usize,
    pub excluded: Vec<String>,
}
