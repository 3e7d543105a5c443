use crate::domain::model::{LoadOutcome, ScrollSettings, StopReason};
use crate::domain::ports::BrowserPage;
use crate::utils::error::Result;
use tokio::time::{sleep, Instant};

/// Clicks the load-more control until it disappears, a click stops revealing
/// new cards, or the click budget runs out.
pub async fn load_all<P: BrowserPage + ?Sized>(
    page: &P,
    item_selector: &str,
    trigger_selector: &str,
    settings: &ScrollSettings,
) -> Result<LoadOutcome> {
    let mut clicks = 0;
    // Cards are often rendered after the load event; give them one wait.
    let mut items = match wait_for_growth(page, item_selector, 0, settings).await? {
        Some(count) => count,
        None => {
            tracing::warn!(
                "⚠️ No cards matched '{}' within {:?}",
                item_selector,
                settings.wait_timeout
            );
            0
        }
    };
    tracing::info!("📋 {} facility cards on first load", items);

    let stop_reason = loop {
        if clicks >= settings.max_clicks {
            break StopReason::ClickBudgetExhausted;
        }

        if !page.click(trigger_selector).await? {
            tracing::debug!("Load-more control '{}' not found", trigger_selector);
            break StopReason::TriggerMissing;
        }
        clicks += 1;

        match wait_for_growth(page, item_selector, items, settings).await? {
            Some(count) => {
                tracing::debug!("Click {}: {} -> {} cards", clicks, items, count);
                items = count;
            }
            None => {
                tracing::warn!(
                    "⚠️ Click {} revealed no new cards within {:?}, stopping",
                    clicks,
                    settings.wait_timeout
                );
                break StopReason::Stalled;
            }
        }
    };

    tracing::info!(
        "✅ Loading finished after {} clicks with {} cards ({:?})",
        clicks,
        items,
        stop_reason
    );

    Ok(LoadOutcome {
        clicks,
        items,
        stop_reason,
    })
}

/// Polls the card count until it exceeds `previous`. `None` on timeout.
async fn wait_for_growth<P: BrowserPage + ?Sized>(
    page: &P,
    item_selector: &str,
    previous: usize,
    settings: &ScrollSettings,
) -> Result<Option<usize>> {
    let deadline = Instant::now() + settings.wait_timeout;
    loop {
        let count = page.count(item_selector).await?;
        if count > previous {
            return Ok(Some(count));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        sleep(settings.poll_interval).await;
    }
}
