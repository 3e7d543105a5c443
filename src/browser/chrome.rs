use super::BrowserOptions;
use crate::domain::ports::BrowserPage;
use crate::utils::error::{Result, ScrapeError};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::Page;
use futures::StreamExt;
use std::future::Future;
use tokio::task::JoinHandle;

/// A launched browser with one open tab.
pub struct BrowserSession {
    browser: Browser,
    page: ChromePage,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    pub async fn launch(options: &BrowserOptions) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .request_timeout(options.request_timeout)
            .viewport(None::<Viewport>);
        if !options.headless {
            builder = builder.with_head();
        }
        if options.no_sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(path) = &options.chrome_path {
            builder = builder.chrome_executable(path);
        }
        let config = builder
            .build()
            .map_err(|message| ScrapeError::BrowserLaunchError { message })?;

        tracing::info!(
            "🌐 Launching browser ({})",
            if options.headless { "headless" } else { "headed" }
        );
        let (mut browser, mut handler) =
            Browser::launch(config)
                .await
                .map_err(|e| ScrapeError::BrowserLaunchError {
                    message: e.to_string(),
                })?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("Browser event loop ended: {}", e);
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => ChromePage { page },
            Err(e) => {
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler.abort();
                return Err(e.into());
            }
        };

        Ok(Self {
            browser,
            page,
            handler,
        })
    }

    pub fn page(&self) -> ChromePage {
        self.page.clone()
    }

    /// Shuts the browser down. Failures are logged, not returned, so they
    /// never hide the error of the work that ran inside the session.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("Failed to wait for browser exit: {}", e);
        }
        // The process is gone; the event loop has nothing left to drive.
        self.handler.abort();
        tracing::debug!("Browser closed");
    }

    /// Runs `work` against a fresh tab and closes the browser on every exit
    /// path.
    pub async fn with_page<F, Fut, T>(options: &BrowserOptions, work: F) -> Result<T>
    where
        F: FnOnce(ChromePage) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let session = Self::launch(options).await?;
        let outcome = work(session.page()).await;
        session.close().await;
        outcome
    }
}

#[derive(Clone)]
pub struct ChromePage {
    page: Page,
}

#[async_trait]
impl BrowserPage for ChromePage {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.page.goto(url).await?;
        tracing::debug!("Navigation to {} finished", url);
        Ok(())
    }

    async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let result = self.page.evaluate(script.to_string()).await?;
        Ok(result.into_value::<serde_json::Value>()?)
    }

    async fn click(&self, selector: &str) -> Result<bool> {
        let Some(element) = self.page.find_elements(selector).await?.into_iter().next() else {
            return Ok(false);
        };
        // A control that is present but hidden or detached cannot be clicked;
        // listings commonly hide the button once everything is shown.
        match element.click().await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::debug!("Load-more control '{}' is not clickable: {}", selector, e);
                Ok(false)
            }
        }
    }
}
