use std::time::Duration;

use async_trait::async_trait;
use nd_core::Result;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};

use crate::config::FeedConfig;

pub mod guardian;
pub mod newsapi;
pub mod rss;

pub use guardian::GuardianAdapter;
pub use newsapi::NewsApiAdapter;
pub use rss::RssAdapter;

/// One upstream record before normalization. Field names are already mapped
/// onto the canonical set, but every value is still raw source text. Lives
/// only inside a single fetch.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub body_text: Option<String>,
    pub published_at: Option<String>,
    pub source_name: Option<String>,
}

/// Translates one upstream source's native format into raw records.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Stable label for this source, used in logs, issue messages, and as
    /// the fallback `source_name` for its records.
    fn name(&self) -> &str;

    /// One network round trip and one parse. No retries, no caching.
    /// Transport and status failures come back as `Error::SourceUnavailable`,
    /// unparsable bodies as `Error::MalformedPayload`; never a panic.
    async fn fetch(&self) -> Result<Vec<RawRecord>>;
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Client with cache-busting headers, shared by all adapters.
pub(crate) fn http_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(FETCH_TIMEOUT)
        .build()?;
    Ok(client)
}

/// All live adapters in merge-priority order. Dedup keeps the first
/// occurrence of a URL, so earlier adapters win collisions.
pub fn default_adapters(config: &FeedConfig) -> Result<Vec<Box<dyn SourceAdapter>>> {
    Ok(vec![
        Box::new(GuardianAdapter::new(config)?),
        Box::new(NewsApiAdapter::new(config)?),
        Box::new(RssAdapter::new(config)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_adapter_order() {
        let adapters = default_adapters(&FeedConfig::default()).unwrap();
        let names: Vec<&str> = adapters.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["The Guardian", "NewsAPI", "BBC World"]);
    }
}
