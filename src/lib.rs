pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::app::pipelines::globe_pipeline::GlobePipeline;
pub use crate::core::catalog::Catalog;
pub use crate::core::engine::GlobeEngine;
pub use crate::core::resolver::{CoordinateIndex, CoordinateResolver};
pub use crate::core::sampler::{daily_seed, seeded_random, select_daily, shuffle};
pub use crate::domain::model::{
    Coordinate, DailySelection, Discovery, ResolvedSpecies, SpeciesRecord,
};
pub use crate::domain::policy::{DayClock, SelectionPolicy};
pub use crate::utils::error::{GlobeError, Result};
