use sunday_gyms::core::ConfigProvider;
use sunday_gyms::utils::{logger, validation::Validate};
use sunday_gyms::{BrowserSession, CliConfig, EtlEngine, LocalStorage, ScrapePipeline};

#[tokio::main]
async fn main() {
    let config = CliConfig::load();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting sunday-gyms");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(config.output_path());
    let browser_options = config.browser_options();

    let outcome = BrowserSession::with_page(&browser_options, |page| async move {
        let pipeline = ScrapePipeline::new(page, storage, config);
        EtlEngine::new(pipeline).run().await
    })
    .await;

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Scrape completed successfully");
            println!("Data saved in: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scrape failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
