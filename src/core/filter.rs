use crate::domain::model::{FacilityRecord, FilterResult};

pub const DEFAULT_DAY_KEYWORD: &str = "domingo";
pub const DEFAULT_CLOSED_KEYWORD: &str = "cerrado";

/// Lexical Sunday-opening check over free-text schedule lines.
///
/// A facility counts as open on Sunday when at least one schedule line
/// mentions the day keyword and that same line does not mention the closed
/// keyword. Both checks are case-insensitive substring matches; no time
/// ranges are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SundayFilter {
    day_keyword: String,
    closed_keyword: String,
}

impl SundayFilter {
    pub fn new(day_keyword: &str, closed_keyword: &str) -> Self {
        Self {
            day_keyword: day_keyword.to_lowercase(),
            closed_keyword: closed_keyword.to_lowercase(),
        }
    }

    pub fn day_keyword(&self) -> &str {
        &self.day_keyword
    }

    pub fn closed_keyword(&self) -> &str {
        &self.closed_keyword
    }

    pub fn is_open_line(&self, line: &str) -> bool {
        let line = line.to_lowercase();
        line.contains(&self.day_keyword) && !line.contains(&self.closed_keyword)
    }

    pub fn is_open(&self, hours: &[String]) -> bool {
        hours.iter().any(|line| self.is_open_line(line))
    }

    pub fn apply(&self, records: Vec<FacilityRecord>) -> FilterResult {
        let total = records.len();
        let kept: Vec<FacilityRecord> = records
            .into_iter()
            .filter(|record| {
                let open = self.is_open(&record.hours);
                if !open {
                    tracing::debug!(
                        "Dropping {:?}: no open '{}' line",
                        record.name.as_deref().unwrap_or("<unnamed>"),
                        self.day_keyword
                    );
                }
                open
            })
            .collect();

        FilterResult {
            dropped: total - kept.len(),
            kept,
        }
    }
}

impl Default for SundayFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DAY_KEYWORD, DEFAULT_CLOSED_KEYWORD)
    }
}
