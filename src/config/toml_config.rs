use crate::domain::policy::{DayClock, SelectionPolicy, DEFAULT_CAP, DEFAULT_MAX_WITH_MODEL};
use crate::domain::ports::{ConfigProvider, DEFAULT_CSV_FILENAME, DEFAULT_JSON_FILENAME};
use crate::utils::error::{GlobeError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub species_file: String,
    pub image_base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub cap: Option<usize>,
    pub max_with_model: Option<usize>,
    /// Pins the selection to a fixed day, `YYYY-MM-DD`.
    pub date: Option<String>,
    pub clock: Option<DayClock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub json: Option<String>,
    pub csv: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GlobeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SPECIES_FILE})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("source.species_file", &self.source.species_file)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;
        self.selection_policy().validate()?;
        self.pinned_date()?;
        Ok(())
    }

    /// The `[selection] date`, if one is set.
    pub fn pinned_date(&self) -> Result<Option<NaiveDate>> {
        self.selection
            .date
            .as_deref()
            .map(validation::parse_date)
            .transpose()
    }

    pub fn clock(&self) -> DayClock {
        self.selection.clock.unwrap_or_default()
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn species_file(&self) -> &str {
        &self.source.species_file
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy::new(
            self.selection.cap.unwrap_or(DEFAULT_CAP),
            self.selection.max_with_model.unwrap_or(DEFAULT_MAX_WITH_MODEL),
        )
    }

    fn selection_date(&self) -> NaiveDate {
        // an unparsable date is reported by validate(); fall back to the clock here
        match self.pinned_date() {
            Ok(Some(date)) => date,
            _ => self.clock().today(),
        }
    }

    fn image_base_url(&self) -> Option<&str> {
        self.source.image_base_url.as_deref()
    }

    fn json_filename(&self) -> &str {
        self.load
            .filenames
            .as_ref()
            .and_then(|f| f.json.as_deref())
            .unwrap_or(DEFAULT_JSON_FILENAME)
    }

    fn csv_filename(&self) -> &str {
        self.load
            .filenames
            .as_ref()
            .and_then(|f| f.csv.as_deref())
            .unwrap_or(DEFAULT_CSV_FILENAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[pipeline]
name = "daily-globe"
version = "1.0.0"

[source]
species_file = "src/data/species.json"
image_base_url = "/ARCH/"

[selection]
cap = 10
date = "2024-03-01"
clock = "utc"

[load]
output_path = "./public/globe"
output_formats = ["json", "csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "daily-globe");
        assert_eq!(config.species_file(), "src/data/species.json");
        assert_eq!(config.selection_policy(), SelectionPolicy::new(10, 2));
        assert_eq!(
            config.selection_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(config.clock(), DayClock::Utc);
        assert_eq!(config.image_base_url(), Some("/ARCH/"));
        assert_eq!(config.json_filename(), "globe_points.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_selection_section_is_optional() {
        let toml_content = r#"
[pipeline]
name = "defaults"
version = "1.0"

[source]
species_file = "species.json"

[load]
output_path = "./output"
output_formats = ["json"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.selection_policy(), SelectionPolicy::default());
        assert_eq!(config.clock(), DayClock::Local);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOSSIL_GLOBE_TEST_SPECIES", "/srv/content/species.json");

        let toml_content = r#"
[pipeline]
name = "test"
version = "1.0"

[source]
species_file = "${FOSSIL_GLOBE_TEST_SPECIES}"

[load]
output_path = "${FOSSIL_GLOBE_TEST_UNSET_DIR}"
output_formats = ["json"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.species_file, "/srv/content/species.json");
        assert_eq!(config.load.output_path, "${FOSSIL_GLOBE_TEST_UNSET_DIR}");

        std::env::remove_var("FOSSIL_GLOBE_TEST_SPECIES");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[pipeline]
name = "test"
version = "1.0"

[source]
species_file = "species.json"

[selection]
date = "March 1st"

[load]
output_path = "./output"
output_formats = ["xml"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let mut fixed = config.clone();
        fixed.load.output_formats = vec!["csv".to_string()];
        assert!(matches!(
            fixed.validate(),
            Err(GlobeError::InvalidDateError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"
version = "1.0"

[source]
species_file = "species.json"

[load]
output_path = "./output"
output_formats = ["csv"]

[load.filenames]
csv = "today.csv"

[monitoring]
enabled = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
        assert_eq!(config.csv_filename(), "today.csv");
        assert!(config.monitoring_enabled());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[pipeline\nname = ");
        assert!(matches!(
            result,
            Err(GlobeError::ConfigValidationError { .. })
        ));
    }
}
