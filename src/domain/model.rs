use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Separator placed between schedule lines in the CSV `Hours` column.
pub const HOURS_SEPARATOR: &str = " | ";

/// One facility card as read from the listing page.
///
/// `name` and `location` are `None` when the card has no matching child
/// element; partial cards are expected and kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub hours: Vec<String>,
}

impl FacilityRecord {
    pub fn joined_hours(&self) -> String {
        self.hours.join(HOURS_SEPARATOR)
    }
}

/// CSS selectors locating facility data on the listing page.
///
/// `name`, `location` and `schedule` are resolved relative to each facility
/// card; `facility` and `load_more` against the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    pub facility: String,
    pub name: String,
    pub location: String,
    pub schedule: String,
    pub load_more: String,
}

impl Selectors {
    pub fn named(&self) -> [(&'static str, &str); 5] {
        [
            ("facility", &self.facility),
            ("name", &self.name),
            ("location", &self.location),
            ("schedule", &self.schedule),
            ("load_more", &self.load_more),
        ]
    }
}

pub const DEFAULT_MAX_CLICKS: usize = 20;
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSettings {
    pub max_clicks: usize,
    /// How long one click may take to reveal new cards.
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            max_clicks: DEFAULT_MAX_CLICKS,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The load-more control was not on the page.
    TriggerMissing,
    /// A click did not reveal new cards before the wait timeout.
    Stalled,
    ClickBudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    pub clicks: usize,
    pub items: usize,
    pub stop_reason: StopReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    pub kept: Vec<FacilityRecord>,
    pub dropped: usize,
}
