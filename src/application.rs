//! Application-level services available to screens.

use async_trait::async_trait;
use url::Url;

/// URL scheme that opens this app's page in the system settings.
pub const OPEN_SETTINGS_URL: &str = "app-settings:";

/// Opens URLs outside the app (system settings, other apps, the browser).
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Returns whether the URL was handled.
    async fn open(&self, url: Url) -> bool;
}

/// Opener for headless environments: records the request in the log.
pub struct LoggingUrlOpener;

#[async_trait]
impl UrlOpener for LoggingUrlOpener {
    async fn open(&self, url: Url) -> bool {
        tracing::info!(url = %url, "open external url");
        true
    }
}

pub fn settings_url() -> Result<Url, url::ParseError> {
    Url::parse(OPEN_SETTINGS_URL)
}
