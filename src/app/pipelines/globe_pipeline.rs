use crate::core::catalog::{resolve_image_path, Catalog};
use crate::core::resolver::{CoordinateIndex, CoordinateResolver};
use crate::core::sampler::select_daily;
use crate::domain::model::{DailySelection, GlobeDataset, ModelTagged, SpeciesRecord};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{GlobeError, Result};
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;

/// Builds the day's globe dataset from the species content file.
///
/// The selection day is read from the config once, at construction, so a
/// run that crosses midnight still builds the day it started on.
pub struct GlobePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    date: NaiveDate,
    index: Cow<'static, CoordinateIndex>,
}

impl<S: Storage, C: ConfigProvider> GlobePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let date = config.selection_date();
        Self {
            storage,
            config,
            date,
            index: Cow::Borrowed(CoordinateIndex::curated()),
        }
    }

    /// Uses `index` instead of the curated fossil-site tables.
    pub fn with_index(mut self, index: CoordinateIndex) -> Self {
        self.index = Cow::Owned(index);
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn selection_date(&self) -> NaiveDate {
        self.date
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }

    fn render_json(&self, dataset: &GlobeDataset) -> Result<Vec<u8>> {
        let document = GlobeDocument {
            selection: &dataset.selection,
            total_records: dataset.total_records,
            excluded: &dataset.excluded,
        };
        Ok(serde_json::to_vec_pretty(&document)?)
    }

    fn render_csv(&self, selection: &DailySelection) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for point in &selection.entries {
            writer.serialize(CsvRow {
                id: &point.record.id,
                name: &point.record.name,
                period: &point.record.period,
                lat: point.coordinate.lat(),
                lng: point.coordinate.lng(),
                has_model: point.has_model(),
            })?;
        }
        writer.into_inner().map_err(|e| GlobeError::from(e.into_error()))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GlobeDocument<'a> {
    #[serde(flatten)]
    selection: &'a DailySelection,
    total_records: usize,
    excluded: &'a [String],
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    period: &'a str,
    lat: f64,
    lng: f64,
    has_model: bool,
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GlobePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SpeciesRecord>> {
        let species_file = self.config.species_file();
        tracing::info!("📖 Reading species from: {}", species_file);

        let data = self.storage.read_file(species_file).await?;
        let records = Catalog::from_json(&data)?.into_records();

        tracing::info!("Loaded {} species records", records.len());
        Ok(records)
    }

    async fn transform(&self, mut records: Vec<SpeciesRecord>) -> Result<GlobeDataset> {
        let total_records = records.len();

        if let Some(base_url) = self.config.image_base_url() {
            for record in &mut records {
                for image in &mut record.images {
                    *image = resolve_image_path(image, base_url);
                }
            }
            tracing::debug!("Image paths prefixed with {}", base_url);
        }

        let resolver = CoordinateResolver::new(&self.index);
        let resolution = resolver.resolve_all(records);
        tracing::info!(
            "🌍 Resolved {} of {} species to discovery sites",
            resolution.resolved.len(),
            total_records
        );

        let policy = self.config.selection_policy();
        policy.validate()?;

        let date = self.date;
        let selection = select_daily(&resolution.resolved, date, &policy);
        tracing::info!(
            "🎯 Selected {} species for {} ({} with 3D model)",
            selection.len(),
            date,
            selection.model_count()
        );

        Ok(GlobeDataset {
            selection,
            total_records,
            excluded: resolution.excluded,
        })
    }

    async fn load(&self, dataset: GlobeDataset) -> Result<String> {
        for format in self.config.output_formats() {
            let (filename, bytes) = match format.as_str() {
                "json" => (self.config.json_filename(), self.render_json(&dataset)?),
                "csv" => (self.config.csv_filename(), self.render_csv(&dataset.selection)?),
                other => {
                    return Err(GlobeError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported output format".to_string(),
                    })
                }
            };

            let path = self.output_file(filename);
            self.storage.write_file(&path, &bytes).await?;
            tracing::info!("💾 Wrote {} ({} bytes)", path, bytes.len());
        }

        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::SelectionPolicy;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                GlobeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct FixedConfig {
        formats: Vec<String>,
        base_url: Option<String>,
    }

    /// Reports a later day every time it is asked, like a clock crossing midnight.
    struct AdvancingConfig {
        formats: Vec<String>,
        reads: AtomicU32,
    }

    impl ConfigProvider for AdvancingConfig {
        fn species_file(&self) -> &str {
            "species.json"
        }

        fn output_path(&self) -> &str {
            "out"
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn selection_policy(&self) -> SelectionPolicy {
            SelectionPolicy::new(3, 1)
        }

        fn selection_date(&self) -> NaiveDate {
            let reads = self.reads.fetch_add(1, Ordering::SeqCst);
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap() + chrono::Days::new(reads as u64)
        }

        fn image_base_url(&self) -> Option<&str> {
            None
        }
    }

    impl ConfigProvider for FixedConfig {
        fn species_file(&self) -> &str {
            "species.json"
        }

        fn output_path(&self) -> &str {
            "out"
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn selection_policy(&self) -> SelectionPolicy {
            SelectionPolicy::new(3, 1)
        }

        fn selection_date(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
        }

        fn image_base_url(&self) -> Option<&str> {
            self.base_url.as_deref()
        }
    }

    const SPECIES: &str = r#"[
        {"id": "dodo", "name": "Dodo", "period": "Holocene", "images": ["/images/dodo-0.jpg"]},
        {"id": "velociraptor", "name": "Velociraptor", "period": "Cretaceous", "model": "/models/raptor.glb"},
        {"id": "unknown-beast", "name": "Unknown", "period": "Permian", "location": "Atlantis"},
        {"id": "new-find", "name": "New Find", "period": "Jurassic", "discoveryWhere": "Quarry near Solnhofen, Germany"}
    ]"#;

    fn pipeline(formats: &[&str], base_url: Option<&str>) -> GlobePipeline<MockStorage, FixedConfig> {
        GlobePipeline::new(
            MockStorage::with_file("species.json", SPECIES.as_bytes()),
            FixedConfig {
                formats: formats.iter().map(|f| f.to_string()).collect(),
                base_url: base_url.map(str::to_string),
            },
        )
    }

    #[tokio::test]
    async fn test_transform_drops_unresolved_species() {
        let pipeline = pipeline(&["json"], None);
        let records = pipeline.extract().await.unwrap();
        assert_eq!(records.len(), 4);

        let dataset = pipeline.transform(records).await.unwrap();
        assert_eq!(dataset.total_records, 4);
        assert_eq!(dataset.excluded, vec!["unknown-beast"]);
        assert_eq!(dataset.selection.len(), 3);
        assert_eq!(dataset.selection.entries[0].record.id, "velociraptor");
        assert_eq!(dataset.selection.model_count(), 1);
    }

    #[tokio::test]
    async fn test_image_paths_use_base_url() {
        let pipeline = pipeline(&["json"], Some("/ARCH/"));
        let records = pipeline.extract().await.unwrap();
        let dataset = pipeline.transform(records).await.unwrap();

        let dodo = dataset
            .selection
            .entries
            .iter()
            .find(|p| p.record.id == "dodo")
            .unwrap();
        assert_eq!(dodo.record.images, vec!["/ARCH/images/dodo-0.jpg"]);
    }

    #[tokio::test]
    async fn test_load_writes_requested_formats() {
        let pipeline = pipeline(&["json", "csv"], None);
        let records = pipeline.extract().await.unwrap();
        let dataset = pipeline.transform(records).await.unwrap();

        let output = pipeline.load(dataset).await.unwrap();
        assert_eq!(output, "out");

        let json = pipeline
            .storage
            .get_file(&pipeline.output_file("globe_points.json"))
            .await
            .unwrap();
        let document: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(document["date"], "2024-05-20");
        assert_eq!(document["seed"], 20240520);
        assert_eq!(document["totalRecords"], 4);
        assert_eq!(document["points"].as_array().unwrap().len(), 3);

        let csv = pipeline
            .storage
            .get_file(&pipeline.output_file("globe_points.csv"))
            .await
            .unwrap();
        let csv = String::from_utf8(csv).unwrap();
        assert!(csv.starts_with("id,name,period,lat,lng,has_model\n"));
        assert!(csv.contains("velociraptor,Velociraptor,Cretaceous,44.14,103.72,true"));
    }

    #[tokio::test]
    async fn test_missing_species_file_fails_extract() {
        let pipeline = GlobePipeline::new(
            MockStorage::with_file("other.json", b"[]"),
            FixedConfig {
                formats: vec!["json".to_string()],
                base_url: None,
            },
        );
        assert!(matches!(
            pipeline.extract().await,
            Err(GlobeError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_index_replaces_curated_tables() {
        let index = CoordinateIndex::builder()
            .location("Atlantis", 0.0, -30.0)
            .build()
            .unwrap();
        let pipeline = pipeline(&["json"], None).with_index(index);

        let records = pipeline.extract().await.unwrap();
        let dataset = pipeline.transform(records).await.unwrap();

        assert_eq!(dataset.selection.len(), 1);
        assert_eq!(dataset.selection.entries[0].record.id, "unknown-beast");
        assert_eq!(dataset.excluded.len(), 3);
    }

    #[tokio::test]
    async fn test_selection_day_is_read_once() {
        let pipeline = GlobePipeline::new(
            MockStorage::with_file("species.json", SPECIES.as_bytes()),
            AdvancingConfig {
                formats: Vec::new(),
                reads: AtomicU32::new(0),
            },
        );
        let started = pipeline.selection_date();
        assert_eq!(started, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

        let records = pipeline.extract().await.unwrap();
        let dataset = pipeline.transform(records).await.unwrap();

        assert_eq!(dataset.selection.date, started);
        assert_eq!(dataset.selection.seed, 20241231);
        assert_eq!(pipeline.config().reads.load(Ordering::SeqCst), 1);
    }
}
