use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting scrape");

        // Extract
        let facilities = self.pipeline.extract().await?;
        tracing::info!("Extracted {} facilities", facilities.len());

        // Transform
        let filtered = self.pipeline.transform(facilities).await?;
        tracing::info!("Kept {} facilities", filtered.kept.len());

        // Load
        let output_path = self.pipeline.load(filtered).await?;
        tracing::info!("Finished in {:?}", started.elapsed());

        Ok(output_path)
    }
}
