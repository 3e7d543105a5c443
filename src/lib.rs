pub mod browser;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use browser::{BrowserOptions, BrowserSession, ChromePage};
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, filter::SundayFilter, pipeline::ScrapePipeline};
pub use domain::model::{FacilityRecord, Selectors};
pub use utils::error::{Result, ScrapeError};
