#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::browser::BrowserOptions;
#[cfg(feature = "cli")]
use crate::core::filter::SundayFilter;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{ScrollSettings, Selectors, DEFAULT_POLL_INTERVAL};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_OUTPUT_FILE: &str = "gyms_open_on_sundays.csv";

/// Command-line configuration. Every required value can also come from the
/// environment (or a `.env` file loaded before parsing).
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sunday-gyms")]
#[command(about = "Scrape a gym-chain listing and keep the facilities open on Sundays")]
pub struct CliConfig {
    /// Listing page URL
    #[arg(long, env = "GYM_URL")]
    pub url: String,

    /// Selector matching each facility card
    #[arg(long, env = "GYM_SELECTOR_FACILITIES")]
    pub facilities_selector: String,

    /// Selector for the facility name, relative to a card
    #[arg(long, env = "GYM_SELECTOR_NAME")]
    pub name_selector: String,

    /// Selector for the facility location, relative to a card
    #[arg(long, env = "GYM_SELECTOR_LOCATION")]
    pub location_selector: String,

    /// Selector for schedule lines, relative to a card
    #[arg(long, env = "GYM_SELECTOR_SCHEDULE")]
    pub schedule_selector: String,

    /// Selector for the "load more" control
    #[arg(long, env = "GYM_SELECTOR_LOAD_MORE_BTN")]
    pub load_more_selector: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, default_value = "20")]
    pub max_clicks: usize,

    /// Seconds to wait for new cards after each click
    #[arg(long, default_value = "30")]
    pub wait_timeout_secs: u64,

    /// Word marking a Sunday schedule line
    #[arg(long, default_value = crate::core::filter::DEFAULT_DAY_KEYWORD)]
    pub day_keyword: String,

    /// Word marking a closed schedule line
    #[arg(long, default_value = crate::core::filter::DEFAULT_CLOSED_KEYWORD)]
    pub closed_keyword: String,

    #[arg(long, help = "Run the browser without a window")]
    pub headless: bool,

    #[arg(long, help = "Disable the Chrome sandbox (containers, root)")]
    pub no_sandbox: bool,

    #[arg(long, env = "CHROME_PATH")]
    pub chrome_path: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(skip)]
    selectors: Selectors,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Parses arguments and environment, with `.env` loaded first.
    pub fn load() -> Self {
        let _ = dotenv::dotenv();
        Self::parse().with_selectors()
    }

    /// Collects the individual selector flags into a [`Selectors`] value.
    pub fn with_selectors(mut self) -> Self {
        self.selectors = Selectors {
            facility: self.facilities_selector.clone(),
            name: self.name_selector.clone(),
            location: self.location_selector.clone(),
            schedule: self.schedule_selector.clone(),
            load_more: self.load_more_selector.clone(),
        };
        self
    }

    pub fn browser_options(&self) -> BrowserOptions {
        BrowserOptions {
            headless: self.headless,
            no_sandbox: self.no_sandbox,
            chrome_path: self.chrome_path.clone(),
            ..BrowserOptions::default()
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn target_url(&self) -> &str {
        &self.url
    }

    fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            max_clicks: self.max_clicks,
            wait_timeout: Duration::from_secs(self.wait_timeout_secs),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    fn sunday_filter(&self) -> SundayFilter {
        SundayFilter::new(&self.day_keyword, &self.closed_keyword)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("url", &self.url)?;
        validation::validate_selectors("selectors", &self.selectors)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_name("output_file", &self.output_file)?;
        validation::validate_range("max_clicks", self.max_clicks, 1, 1000)?;
        validation::validate_range("wait_timeout_secs", self.wait_timeout_secs, 1, 600)?;
        validation::validate_required_value("day_keyword", &self.day_keyword)?;
        validation::validate_required_value("closed_keyword", &self.closed_keyword)?;

        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}
