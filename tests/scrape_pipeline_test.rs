use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use sunday_gyms::core::{BrowserPage, ConfigProvider, Pipeline, Storage};
use sunday_gyms::domain::model::{ScrollSettings, Selectors};
use sunday_gyms::{
    EtlEngine, FacilityRecord, LocalStorage, Result, ScrapeError, ScrapePipeline, SundayFilter,
};
use tempfile::TempDir;

/// A paginated listing: `page_size` cards are visible at first and each
/// click on the load-more control reveals the next `page_size`. The control
/// disappears once every card is shown.
struct PaginatedListing {
    cards: Vec<FacilityRecord>,
    page_size: usize,
    visible: AtomicUsize,
}

impl PaginatedListing {
    fn new(cards: Vec<FacilityRecord>, page_size: usize) -> Self {
        let visible = page_size.min(cards.len());
        Self {
            cards,
            page_size,
            visible: AtomicUsize::new(visible),
        }
    }
}

#[async_trait]
impl BrowserPage for PaginatedListing {
    async fn navigate(&self, url: &str) -> Result<()> {
        if !url.starts_with("https://") {
            return Err(ScrapeError::ExtractionError {
                message: format!("unreachable: {}", url),
            });
        }
        Ok(())
    }

    async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        assert!(script.contains(r#"querySelectorAll(".gym-card")"#));
        let visible = self.visible.load(Ordering::SeqCst);
        Ok(serde_json::to_value(&self.cards[..visible])?)
    }

    async fn click(&self, selector: &str) -> Result<bool> {
        assert_eq!(selector, "button.ver-mas");
        let visible = self.visible.load(Ordering::SeqCst);
        if visible >= self.cards.len() {
            return Ok(false);
        }
        self.visible.store(
            (visible + self.page_size).min(self.cards.len()),
            Ordering::SeqCst,
        );
        Ok(true)
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        assert_eq!(selector, ".gym-card");
        Ok(self.visible.load(Ordering::SeqCst))
    }
}

struct TestConfig {
    url: String,
    selectors: Selectors,
    output_path: String,
    max_clicks: usize,
}

impl TestConfig {
    fn new(output_path: &str) -> Self {
        Self {
            url: "https://gimnasios.example.com/sedes".to_string(),
            selectors: Selectors {
                facility: ".gym-card".to_string(),
                name: ".gym-card__name".to_string(),
                location: ".gym-card__address".to_string(),
                schedule: ".gym-card__hours p".to_string(),
                load_more: "button.ver-mas".to_string(),
            },
            output_path: output_path.to_string(),
            max_clicks: 20,
        }
    }
}

impl ConfigProvider for TestConfig {
    fn target_url(&self) -> &str {
        &self.url
    }

    fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            max_clicks: self.max_clicks,
            wait_timeout: Duration::from_millis(50),
            poll_interval: Duration::from_millis(5),
        }
    }

    fn sunday_filter(&self) -> SundayFilter {
        SundayFilter::default()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        "gyms_open_on_sundays.csv"
    }
}

fn card(name: &str, location: Option<&str>, hours: &[&str]) -> FacilityRecord {
    FacilityRecord {
        name: Some(name.to_string()),
        location: location.map(str::to_string),
        hours: hours.iter().map(|s| s.to_string()).collect(),
    }
}

/// 25 cards; every third one opens on Sunday, every fifth says closed.
fn listing_cards() -> Vec<FacilityRecord> {
    (1..=25)
        .map(|i| {
            let sunday = if i % 5 == 0 {
                "Domingo: Cerrado"
            } else if i % 3 == 0 {
                "Domingo: 8:00 - 14:00"
            } else {
                "Sábado: 8:00 - 14:00"
            };
            card(
                &format!("Sede {}", i),
                Some(&format!("Calle {}, Ciudad", i)),
                &["Lunes a Viernes: 6:00 - 23:00", sunday],
            )
        })
        .collect()
}

fn expected_names() -> Vec<String> {
    (1..=25)
        .filter(|i| i % 3 == 0 && i % 5 != 0)
        .map(|i| format!("Sede {}", i))
        .collect()
}

#[tokio::test]
async fn test_end_to_end_scrape_writes_sunday_facilities() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let page = PaginatedListing::new(listing_cards(), 10);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ScrapePipeline::new(page, storage.clone(), TestConfig::new(&output_path));

    let result = EtlEngine::new(pipeline).run().await.unwrap();

    assert!(result.ends_with("gyms_open_on_sundays.csv"));
    assert!(temp_dir.path().join("gyms_open_on_sundays.csv").exists());

    let data = storage
        .read_file("gyms_open_on_sundays.csv")
        .await
        .unwrap();
    let mut reader = csv::Reader::from_reader(data.as_slice());
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["Name", "Location", "Hours"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    let names: Vec<String> = rows.iter().map(|r| r[0].to_string()).collect();
    assert_eq!(names, expected_names());

    assert_eq!(&rows[0][1], "Calle 3, Ciudad");
    assert_eq!(
        &rows[0][2],
        "Lunes a Viernes: 6:00 - 23:00 | Domingo: 8:00 - 14:00"
    );
}

#[tokio::test]
async fn test_click_budget_limits_what_is_scraped() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = TestConfig::new(&output_path);
    config.max_clicks = 1;
    let pipeline = ScrapePipeline::new(
        PaginatedListing::new(listing_cards(), 10),
        LocalStorage::new(output_path.clone()),
        config,
    );

    let records = pipeline.extract().await.unwrap();

    // 10 on first load plus one page of 10.
    assert_eq!(records.len(), 20);
}

#[tokio::test]
async fn test_no_sunday_facilities_still_writes_header() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let cards = vec![
        card("Sede Norte", Some("Av. Norte 1"), &["Domingo: cerrado"]),
        card("Sede Sur", None, &[]),
    ];
    let pipeline = ScrapePipeline::new(
        PaginatedListing::new(cards, 10),
        LocalStorage::new(output_path.clone()),
        TestConfig::new(&output_path),
    );

    EtlEngine::new(pipeline).run().await.unwrap();

    let csv = std::fs::read_to_string(temp_dir.path().join("gyms_open_on_sundays.csv")).unwrap();
    assert_eq!(csv, "Name,Location,Hours\n");
}

#[tokio::test]
async fn test_existing_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let target = temp_dir.path().join("gyms_open_on_sundays.csv");
    std::fs::write(&target, "stale,data\n1,2\n3,4\n5,6\n7,8\n9,10\n11,12\n").unwrap();

    let cards = vec![card("Sede Centro", None, &["Domingo 9-13"])];
    let pipeline = ScrapePipeline::new(
        PaginatedListing::new(cards, 10),
        LocalStorage::new(output_path.clone()),
        TestConfig::new(&output_path),
    );

    EtlEngine::new(pipeline).run().await.unwrap();

    let csv = std::fs::read_to_string(&target).unwrap();
    assert_eq!(csv, "Name,Location,Hours\nSede Centro,,Domingo 9-13\n");
}

#[tokio::test]
async fn test_navigation_failure_stops_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = TestConfig::new(&output_path);
    config.url = "http://insecure.example.com".to_string();
    let pipeline = ScrapePipeline::new(
        PaginatedListing::new(listing_cards(), 10),
        LocalStorage::new(output_path.clone()),
        config,
    );

    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, ScrapeError::ExtractionError { .. }));
    assert!(!temp_dir.path().join("gyms_open_on_sundays.csv").exists());
}
