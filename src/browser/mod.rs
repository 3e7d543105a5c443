//! Chrome/Chromium driver for the scraper, built on chromiumoxide.
//!
//! [`BrowserSession::with_page`] is the entry point: it launches the browser,
//! hands a [`ChromePage`] to the caller and closes the browser afterwards,
//! whether the caller succeeded or not.

mod chrome;

pub use chrome::{BrowserSession, ChromePage};

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    pub headless: bool,
    /// Needed when running as root inside containers.
    pub no_sandbox: bool,
    pub chrome_path: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: false,
            no_sandbox: false,
            chrome_path: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}
