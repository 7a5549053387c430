use crate::domain::model::SpeciesRecord;
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::HashSet;

/// Geological periods from oldest to youngest.
pub const PERIOD_ORDER: [&str; 11] = [
    "Cambrian",
    "Devonian",
    "Carboniferous",
    "Permian",
    "Triassic",
    "Jurassic",
    "Cretaceous",
    "Paleogene",
    "Neogene",
    "Pleistocene",
    "Holocene",
];

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Browse and search helpers over the species content file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<SpeciesRecord>,
}

impl Catalog {
    pub fn new(records: Vec<SpeciesRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(Self::new(serde_json::from_slice(data)?))
    }

    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SpeciesRecord> {
        self.records
    }

    /// Distinct periods, oldest first. Periods outside [`PERIOD_ORDER`] sort
    /// ahead of the known ones, in the order they first appear.
    pub fn periods(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut periods: Vec<&str> = self
            .records
            .iter()
            .map(|record| record.period.as_str())
            .filter(|period| seen.insert(*period))
            .collect();

        periods.sort_by_key(|period| PERIOD_ORDER.iter().position(|known| known == period));
        periods
    }

    pub fn by_period<'a>(&'a self, period: &'a str) -> impl Iterator<Item = &'a SpeciesRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.period == period)
    }

    pub fn find(&self, id: &str) -> Option<&SpeciesRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Type-ahead suggestions: name, scientific name or period containing
    /// `term`, ignoring case, in file order.
    pub fn search(&self, term: &str, limit: usize) -> Vec<&SpeciesRecord> {
        if term.is_empty() {
            return Vec::new();
        }

        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                [&record.name, &record.scientific_name, &record.period]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .take(limit)
            .collect()
    }
}

/// Prefixes a site-relative asset path with the deployment base URL.
///
/// Absolute `http(s)` URLs pass through and a single leading `/` is dropped
/// so `base_url` (which ends in `/`) is not doubled.
pub fn resolve_image_path(path: &str, base_url: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") {
        return path.to_string();
    }

    let clean = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", base_url, clean)
}

/// Strips one leading `/` from every `images` entry of the raw species
/// array. Nothing else in the document is touched, so the file can be
/// written back as-is. Returns how many paths changed.
pub fn normalize_image_paths(species: &mut Value) -> usize {
    let Some(entries) = species.as_array_mut() else {
        return 0;
    };

    let mut changed = 0;
    for image in entries
        .iter_mut()
        .filter_map(|entry| entry.get_mut("images"))
        .filter_map(Value::as_array_mut)
        .flatten()
    {
        let fixed = image
            .as_str()
            .and_then(|path| path.strip_prefix('/'))
            .map(str::to_owned);
        if let Some(fixed) = fixed {
            *image = Value::String(fixed);
            changed += 1;
        }
    }
    changed
}
