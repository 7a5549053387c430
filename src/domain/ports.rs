use crate::domain::model::{GlobeDataset, SpeciesRecord};
use crate::domain::policy::SelectionPolicy;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub const DEFAULT_JSON_FILENAME: &str = "globe_points.json";
pub const DEFAULT_CSV_FILENAME: &str = "globe_points.csv";

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Species content file, relative to the storage root.
    fn species_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn selection_policy(&self) -> SelectionPolicy;
    /// The calendar day to build the selection for.
    fn selection_date(&self) -> NaiveDate;
    fn image_base_url(&self) -> Option<&str>;

    fn json_filename(&self) -> &str {
        DEFAULT_JSON_FILENAME
    }

    fn csv_filename(&self) -> &str {
        DEFAULT_CSV_FILENAME
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SpeciesRecord>>;
    async fn transform(&self, records: Vec<SpeciesRecord>) -> Result<GlobeDataset>;
    async fn load(&self, dataset: GlobeDataset) -> Result<String>;
}
