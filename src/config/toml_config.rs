use crate::browser::BrowserOptions;
use crate::core::filter::{SundayFilter, DEFAULT_CLOSED_KEYWORD, DEFAULT_DAY_KEYWORD};
use crate::core::ConfigProvider;
use crate::domain::model::{ScrollSettings, Selectors, DEFAULT_MAX_CLICKS};
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A site profile: where the listing lives and how to read it.
///
/// ```toml
/// [site]
/// url = "${GYM_URL}"
///
/// [selectors]
/// facility = ".gym-card"
/// name = ".gym-card__name"
/// location = ".gym-card__address"
/// schedule = ".gym-card__hours p"
/// load_more = "button.load-more"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: SiteConfig,
    pub selectors: Selectors,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollConfig {
    pub max_clicks: Option<usize>,
    pub wait_timeout_seconds: Option<u64>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub day_keyword: Option<String>,
    pub closed_keyword: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserConfig {
    pub headless: Option<bool>,
    pub no_sandbox: Option<bool>,
    pub chrome_path: Option<PathBuf>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub file: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a profile file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left
    /// in place for validation to report.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static placeholder pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn browser_options(&self) -> BrowserOptions {
        let defaults = BrowserOptions::default();
        BrowserOptions {
            headless: self.browser.headless.unwrap_or(defaults.headless),
            no_sandbox: self.browser.no_sandbox.unwrap_or(defaults.no_sandbox),
            chrome_path: self.browser.chrome_path.clone(),
            request_timeout: self
                .browser
                .request_timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn target_url(&self) -> &str {
        &self.site.url
    }

    fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    fn scroll_settings(&self) -> ScrollSettings {
        let defaults = ScrollSettings::default();
        ScrollSettings {
            max_clicks: self.scroll.max_clicks.unwrap_or(DEFAULT_MAX_CLICKS),
            wait_timeout: self
                .scroll
                .wait_timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.wait_timeout),
            poll_interval: self
                .scroll
                .poll_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
        }
    }

    fn sunday_filter(&self) -> SundayFilter {
        SundayFilter::new(
            self.filter.day_keyword.as_deref().unwrap_or(DEFAULT_DAY_KEYWORD),
            self.filter
                .closed_keyword
                .as_deref()
                .unwrap_or(DEFAULT_CLOSED_KEYWORD),
        )
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(".")
    }

    fn output_file(&self) -> &str {
        self.output
            .file
            .as_deref()
            .unwrap_or(super::DEFAULT_OUTPUT_FILE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_no_placeholder("site.url", &self.site.url)?;
        validation::validate_url("site.url", &self.site.url)?;
        validation::validate_selectors("selectors", &self.selectors)?;

        let scroll = self.scroll_settings();
        validation::validate_range("scroll.max_clicks", scroll.max_clicks, 1, 1000)?;
        validation::validate_range(
            "scroll.wait_timeout_seconds",
            scroll.wait_timeout.as_secs(),
            1,
            600,
        )?;

        let filter = self.sunday_filter();
        validation::validate_required_value("filter.day_keyword", filter.day_keyword())?;
        validation::validate_required_value("filter.closed_keyword", filter.closed_keyword())?;

        validation::validate_path("output.path", self.output_path())?;
        validation::validate_file_name("output.file", self.output_file())?;
        Ok(())
    }
}
