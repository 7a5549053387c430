use crate::core::reference_data::{LOCATION_SITES, SPECIES_SITES};
use crate::domain::model::{Coordinate, Resolution, ResolvedSpecies, SpeciesRecord};
use crate::utils::error::{GlobeError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static CURATED: Lazy<CoordinateIndex> = Lazy::new(|| {
    let mut index = CoordinateIndex::default();
    for &(id, lat, lng) in SPECIES_SITES {
        index
            .by_species
            .insert(id.to_string(), Coordinate::new_unchecked(lat, lng));
    }
    for &(name, lat, lng) in LOCATION_SITES {
        index.push_location(name.to_string(), Coordinate::new_unchecked(lat, lng));
    }
    index
});

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("parenthetical pattern is valid"));

#[derive(Debug, Clone)]
struct LocationEntry {
    name: String,
    lowered: String,
    coordinate: Coordinate,
}

/// Read-only lookup tables from species ids and location names to coordinates.
///
/// Location entries keep their insertion order, which decides the winner when
/// several names occur inside the same free-text location.
#[derive(Debug, Clone, Default)]
pub struct CoordinateIndex {
    by_species: HashMap<String, Coordinate>,
    locations: Vec<LocationEntry>,
    location_positions: HashMap<String, usize>,
}

impl CoordinateIndex {
    /// The curated fossil-site tables, built on first use.
    pub fn curated() -> &'static CoordinateIndex {
        &CURATED
    }

    pub fn builder() -> CoordinateIndexBuilder {
        CoordinateIndexBuilder::default()
    }

    pub fn species_count(&self) -> usize {
        self.by_species.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Location names in lookup order.
    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|entry| entry.name.as_str())
    }

    fn push_location(&mut self, name: String, coordinate: Coordinate) {
        self.location_positions
            .insert(name.clone(), self.locations.len());
        self.locations.push(LocationEntry {
            lowered: name.to_lowercase(),
            name,
            coordinate,
        });
    }

    fn species(&self, id: &str) -> Option<Coordinate> {
        self.by_species.get(id).copied()
    }

    fn location(&self, name: &str) -> Option<Coordinate> {
        self.location_positions
            .get(name)
            .map(|&position| self.locations[position].coordinate)
    }
}

#[derive(Debug, Default)]
pub struct CoordinateIndexBuilder {
    index: CoordinateIndex,
    errors: Vec<String>,
}

impl CoordinateIndexBuilder {
    pub fn species(mut self, id: &str, lat: f64, lng: f64) -> Self {
        match Coordinate::new(lat, lng) {
            Some(_) if self.index.by_species.contains_key(id) => {
                self.errors.push(format!("duplicate species id '{}'", id));
            }
            Some(coordinate) => {
                self.index.by_species.insert(id.to_string(), coordinate);
            }
            None => self
                .errors
                .push(format!("species '{}' has out-of-range coordinate ({}, {})", id, lat, lng)),
        }
        self
    }

    /// Appends a location; lookup order is the order of these calls.
    pub fn location(mut self, name: &str, lat: f64, lng: f64) -> Self {
        match Coordinate::new(lat, lng) {
            Some(_) if self.index.location_positions.contains_key(name) => {
                self.errors.push(format!("duplicate location '{}'", name));
            }
            Some(coordinate) => self.index.push_location(name.to_string(), coordinate),
            None => self.errors.push(format!(
                "location '{}' has out-of-range coordinate ({}, {})",
                name, lat, lng
            )),
        }
        self
    }

    pub fn build(self) -> Result<CoordinateIndex> {
        if self.errors.is_empty() {
            Ok(self.index)
        } else {
            Err(GlobeError::ConfigValidationError {
                field: "coordinate_index".to_string(),
                message: self.errors.join("; "),
            })
        }
    }
}

/// Maps species records to globe coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateResolver<'a> {
    index: &'a CoordinateIndex,
}

impl CoordinateResolver<'static> {
    pub fn curated() -> Self {
        Self::new(CoordinateIndex::curated())
    }
}

impl<'a> CoordinateResolver<'a> {
    pub fn new(index: &'a CoordinateIndex) -> Self {
        Self { index }
    }

    /// Exact, case-sensitive species id lookup.
    pub fn resolve_by_id(&self, id: &str) -> Option<Coordinate> {
        self.index.species(id)
    }

    /// Resolves free text in three stages, first hit wins:
    /// exact name, then the first name (in index order) that occurs in the
    /// text ignoring case, then an exact lookup of the first `(...)` segment.
    pub fn resolve_by_location(&self, text: &str) -> Option<Coordinate> {
        if text.is_empty() {
            return None;
        }

        if let Some(coordinate) = self.index.location(text) {
            return Some(coordinate);
        }

        let lowered = text.to_lowercase();
        if let Some(entry) = self
            .index
            .locations
            .iter()
            .find(|entry| lowered.contains(&entry.lowered))
        {
            return Some(entry.coordinate);
        }

        PARENTHETICAL
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|inner| self.index.location(inner.as_str()))
    }

    /// Species id first, then the record's location text.
    pub fn resolve(&self, record: &SpeciesRecord) -> Option<Coordinate> {
        self.resolve_by_id(&record.id)
            .or_else(|| record.location_text().and_then(|text| self.resolve_by_location(text)))
    }

    /// Resolves a batch, keeping input order and dropping unresolved records.
    pub fn resolve_all(&self, records: Vec<SpeciesRecord>) -> Resolution {
        let mut resolution = Resolution::default();

        for record in records {
            match self.resolve(&record) {
                Some(coordinate) => resolution
                    .resolved
                    .push(ResolvedSpecies::new(record, coordinate)),
                None => {
                    tracing::debug!(
                        "No coordinate for '{}' (location: {:?})",
                        record.id,
                        record.location_text()
                    );
                    resolution.excluded.push(record.id);
                }
            }
        }

        if !resolution.excluded.is_empty() {
            tracing::warn!(
                "⚠️ {} species excluded from the globe: no known discovery site",
                resolution.excluded.len()
            );
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> CoordinateIndex {
        CoordinateIndex::builder()
            .species("kaprosuchus", 16.0, 8.0)
            .location("Montana, USA", 47.0, -110.0)
            .location("Hell Creek Formation, Montana, USA", 46.9, -101.5)
            .location("Niger", 16.0, 8.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_id_lookup_is_exact() {
        let index = fixture();
        let resolver = CoordinateResolver::new(&index);

        assert_eq!(
            resolver.resolve_by_id("kaprosuchus"),
            Coordinate::new(16.0, 8.0)
        );
        assert_eq!(resolver.resolve_by_id("Kaprosuchus"), None);
        assert_eq!(resolver.resolve_by_id(""), None);
    }

    #[test]
    fn test_exact_location_beats_substring_order() {
        let index = fixture();
        let resolver = CoordinateResolver::new(&index);

        let hell_creek = resolver.resolve_by_location("Hell Creek Formation, Montana, USA");
        assert_eq!(hell_creek, Coordinate::new(46.9, -101.5));
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let index = fixture();
        let resolver = CoordinateResolver::new(&index);

        assert_eq!(
            resolver.resolve_by_location("badlands of eastern MONTANA, usa"),
            Coordinate::new(47.0, -110.0)
        );
    }

    #[test]
    fn test_empty_text_is_not_found() {
        let index = fixture();
        let resolver = CoordinateResolver::new(&index);
        assert_eq!(resolver.resolve_by_location(""), None);
    }

    #[test]
    fn test_builder_rejects_bad_entries() {
        let result = CoordinateIndex::builder()
            .location("Niger", 16.0, 8.0)
            .location("Niger", 17.0, 9.0)
            .species("nowhere", 123.0, 0.0)
            .build();

        match result {
            Err(GlobeError::ConfigValidationError { message, .. }) => {
                assert!(message.contains("duplicate location 'Niger'"));
                assert!(message.contains("nowhere"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_curated_tables_are_loaded_in_order() {
        let index = CoordinateIndex::curated();
        assert_eq!(index.species_count(), SPECIES_SITES.len());
        assert_eq!(index.location_count(), LOCATION_SITES.len());
        assert_eq!(index.location_names().next(), Some("North America"));
    }
}
