use crate::core::{extractor, loader, writer};
use crate::core::{BrowserPage, ConfigProvider, FacilityRecord, FilterResult, Pipeline, Storage};
use crate::utils::error::Result;

/// Listing page → Sunday filter → CSV.
pub struct ScrapePipeline<P: BrowserPage, S: Storage, C: ConfigProvider> {
    page: P,
    storage: S,
    config: C,
}

impl<P: BrowserPage, S: Storage, C: ConfigProvider> ScrapePipeline<P, S, C> {
    pub fn new(page: P, storage: S, config: C) -> Self {
        Self {
            page,
            storage,
            config,
        }
    }

    pub fn output_location(&self) -> String {
        std::path::Path::new(self.config.output_path())
            .join(self.config.output_file())
            .display()
            .to_string()
    }
}

#[async_trait::async_trait]
impl<P: BrowserPage, S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<P, S, C> {
    async fn extract(&self) -> Result<Vec<FacilityRecord>> {
        let selectors = self.config.selectors();

        tracing::info!("🚀 Opening listing: {}", self.config.target_url());
        self.page.navigate(self.config.target_url()).await?;

        loader::load_all(
            &self.page,
            &selectors.facility,
            &selectors.load_more,
            &self.config.scroll_settings(),
        )
        .await?;

        let records = extractor::extract_facilities(&self.page, selectors).await?;
        tracing::info!("📊 Extracted {} facilities", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<FacilityRecord>) -> Result<FilterResult> {
        let filter = self.config.sunday_filter();
        let result = filter.apply(data);

        tracing::info!(
            "🔧 {} facilities open on '{}', {} dropped",
            result.kept.len(),
            filter.day_keyword(),
            result.dropped
        );
        Ok(result)
    }

    async fn load(&self, result: FilterResult) -> Result<String> {
        println!("{}", serde_json::to_string_pretty(&result.kept)?);

        let data = writer::to_csv_bytes(&result.kept)?;
        tracing::debug!("Writing CSV ({} bytes)", data.len());
        self.storage
            .write_file(self.config.output_file(), &data)
            .await?;

        let output_path = self.output_location();
        tracing::info!("💾 Saved {} rows to {}", result.kept.len(), output_path);
        Ok(output_path)
    }
}
