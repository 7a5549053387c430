pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::policy::{DayClock, SelectionPolicy, DEFAULT_CAP, DEFAULT_MAX_WITH_MODEL};
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fossil-globe")]
#[command(about = "Build today's fossil discovery dataset for the globe")]
pub struct CliConfig {
    #[arg(long, default_value = "src/data/species.json")]
    pub species_file: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_CAP, help = "Maximum species on the globe")]
    pub cap: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_WITH_MODEL, help = "Maximum species with a 3D model")]
    pub max_with_model: usize,

    #[arg(long, value_parser = validation::parse_date, help = "Build for this day (YYYY-MM-DD) instead of today")]
    pub date: Option<NaiveDate>,

    #[arg(long, default_value_t = DayClock::Local, help = "Calendar used for today: local or utc")]
    pub clock: DayClock,

    #[arg(long, help = "Prefix relative image paths with this base URL, e.g. /ARCH/")]
    pub image_base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log memory and timing per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn species_file(&self) -> &str {
        &self.species_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy::new(self.cap, self.max_with_model)
    }

    fn selection_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| self.clock.today())
    }

    fn image_base_url(&self) -> Option<&str> {
        self.image_base_url.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("species_file", &self.species_file)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("output_formats", &self.output_formats)?;
        self.selection_policy().validate()
    }
}
