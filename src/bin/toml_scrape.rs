use clap::Parser;
use sunday_gyms::core::ConfigProvider;
use sunday_gyms::utils::{logger, validation::Validate};
use sunday_gyms::{BrowserSession, EtlEngine, LocalStorage, ScrapePipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-scrape")]
#[command(about = "Scrape a gym listing described by a TOML site profile")]
struct Args {
    /// Path to TOML site profile
    #[arg(short, long, default_value = "scrape-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the profile's headless setting
    #[arg(long)]
    headless: Option<bool>,

    /// Validate the profile and show the plan without launching a browser
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading site profile from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(headless) = args.headless {
        config.browser.headless = Some(headless);
        tracing::info!("🔧 Headless overridden to: {}", headless);
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        print_plan(&config);
        return;
    }

    let storage = LocalStorage::new(config.output_path());
    let browser_options = config.browser_options();

    let outcome = BrowserSession::with_page(&browser_options, |page| async move {
        let pipeline = ScrapePipeline::new(page, storage, config);
        EtlEngine::new(pipeline).run().await
    })
    .await;

    match outcome {
        Ok(output_path) => println!("Data saved in: {}", output_path),
        Err(e) => {
            tracing::error!("❌ Scrape failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn print_plan(config: &TomlConfig) {
    let selectors = config.selectors();
    let scroll = config.scroll_settings();
    let filter = config.sunday_filter();

    println!("🔍 Dry run - nothing will be scraped");
    println!("  URL:          {}", config.target_url());
    println!("  Cards:        {}", selectors.facility);
    println!("  Name:         {}", selectors.name);
    println!("  Location:     {}", selectors.location);
    println!("  Schedule:     {}", selectors.schedule);
    println!("  Load more:    {}", selectors.load_more);
    println!(
        "  Loading:      up to {} clicks, {:?} per click",
        scroll.max_clicks, scroll.wait_timeout
    );
    println!(
        "  Keep:         lines with '{}' and without '{}'",
        filter.day_keyword(),
        filter.closed_keyword()
    );
    println!(
        "  Output:       {}",
        std::path::Path::new(config.output_path())
            .join(config.output_file())
            .display()
    );
}
