use crate::core::filter::SundayFilter;
use crate::domain::model::{FacilityRecord, FilterResult, ScrollSettings, Selectors};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn target_url(&self) -> &str;
    fn selectors(&self) -> &Selectors;
    fn scroll_settings(&self) -> ScrollSettings;
    fn sunday_filter(&self) -> SundayFilter;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
}

/// The slice of a live browser tab the scraper needs.
#[async_trait]
pub trait BrowserPage: Send + Sync {
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Evaluates a JavaScript expression and returns its JSON value.
    async fn evaluate(&self, script: &str) -> Result<serde_json::Value>;

    /// Clicks the first element matching `selector`. Returns `false` when
    /// nothing matches.
    async fn click(&self, selector: &str) -> Result<bool>;

    async fn count(&self, selector: &str) -> Result<usize> {
        let value = self
            .evaluate(&crate::core::extractor::count_script(selector)?)
            .await?;
        value
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| crate::utils::error::ScrapeError::ExtractionError {
                message: format!("element count for '{}' was not a number: {}", selector, value),
            })
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<FacilityRecord>>;
    async fn transform(&self, data: Vec<FacilityRecord>) -> Result<FilterResult>;
    async fn load(&self, result: FilterResult) -> Result<String>;
}
