//! In-page extraction of facility cards.
//!
//! Selectors are embedded in the generated scripts as JSON string literals,
//! so quotes or backslashes inside a selector cannot break out of the script.

use crate::domain::model::{FacilityRecord, Selectors};
use crate::domain::ports::BrowserPage;
use crate::utils::error::{Result, ScrapeError};

fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn count_script(selector: &str) -> Result<String> {
    Ok(format!(
        "document.querySelectorAll({}).length",
        js_string(selector)?
    ))
}

/// Builds the single evaluation that reads every loaded facility card.
///
/// Missing name/location elements come back as `null`; `hours` is always an
/// array.
pub fn extraction_script(selectors: &Selectors) -> Result<String> {
    Ok(format!(
        r#"(() => {{
    const text = (el) => (el ? el.innerText : null);
    return Array.from(document.querySelectorAll({facility})).map((card) => ({{
        name: text(card.querySelector({name})),
        location: text(card.querySelector({location})),
        hours: Array.from(card.querySelectorAll({schedule})).map((line) => line.innerText),
    }}));
}})()"#,
        facility = js_string(&selectors.facility)?,
        name = js_string(&selectors.name)?,
        location = js_string(&selectors.location)?,
        schedule = js_string(&selectors.schedule)?,
    ))
}

pub fn parse_records(value: serde_json::Value) -> Result<Vec<FacilityRecord>> {
    if !value.is_array() {
        return Err(ScrapeError::ExtractionError {
            message: format!("expected an array of facility cards, got: {}", value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

pub async fn extract_facilities<P: BrowserPage + ?Sized>(
    page: &P,
    selectors: &Selectors,
) -> Result<Vec<FacilityRecord>> {
    let script = extraction_script(selectors)?;
    tracing::debug!("Evaluating extraction script ({} bytes)", script.len());

    let records = parse_records(page.evaluate(&script).await?)?;

    let partial = records
        .iter()
        .filter(|r| r.name.is_none() || r.location.is_none())
        .count();
    if partial > 0 {
        tracing::warn!(
            "{} of {} facility cards are missing a name or location",
            partial,
            records.len()
        );
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> Selectors {
        Selectors {
            facility: "div[data-type=\"gym\"]".to_string(),
            name: "h3.title".to_string(),
            location: ".address".to_string(),
            schedule: ".schedule p".to_string(),
            load_more: "#more".to_string(),
        }
    }

    #[test]
    fn test_count_script_quotes_selector() {
        assert_eq!(
            count_script("a[href='x']").unwrap(),
            r#"document.querySelectorAll("a[href='x']").length"#
        );
    }

    #[test]
    fn test_extraction_script_escapes_selectors() {
        let script = extraction_script(&selectors()).unwrap();
        assert!(script.contains(r#"document.querySelectorAll("div[data-type=\"gym\"]")"#));
        assert!(script.contains(r#"card.querySelector("h3.title")"#));
        assert!(script.contains(r#"card.querySelector(".address")"#));
        assert!(script.contains(r#"card.querySelectorAll(".schedule p")"#));
        assert!(!script.contains("#more"));
    }

    #[test]
    fn test_parse_records_keeps_partial_cards() {
        let value = serde_json::json!([
            { "name": "Centro", "location": "Av. Principal 1", "hours": ["Domingo: 8-14"] },
            { "name": null, "location": null, "hours": [] }
        ]);

        let records = parse_records(value).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hours, vec!["Domingo: 8-14".to_string()]);
        assert_eq!(records[1], FacilityRecord::default());
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        let err = parse_records(serde_json::json!({ "error": "boom" })).unwrap_err();
        assert!(matches!(err, ScrapeError::ExtractionError { .. }));
    }
}
