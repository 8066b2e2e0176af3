use async_trait::async_trait;
use url::Url;

use crate::{Error, Result};

/// Capability for handing an article off to an external browser. The core
/// only validates the URL; where it opens is the boundary's business.
#[async_trait]
pub trait LinkOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

/// Logs the request instead of opening anything. Used headless and in tests.
pub struct LoggingLinkOpener;

#[async_trait]
impl LinkOpener for LoggingLinkOpener {
    async fn open(&self, url: &str) -> Result<()> {
        let parsed =
            Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        tracing::info!("🔗 Opening external link: {}", parsed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_valid_url() {
        let opener = LoggingLinkOpener;
        assert!(opener.open("https://example.com/story").await.is_ok());
    }

    #[tokio::test]
    async fn test_open_invalid_url() {
        let opener = LoggingLinkOpener;
        assert!(opener.open("not a url").await.is_err());
    }
}
