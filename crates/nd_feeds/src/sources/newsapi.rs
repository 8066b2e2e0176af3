use async_trait::async_trait;
use nd_core::{Error, Result};
use serde_json::Value;

use crate::config::FeedConfig;
use crate::sources::{http_client, RawRecord, SourceAdapter};

const SOURCE_NAME: &str = "NewsAPI";

/// Top-headlines document in the NewsAPI shape: a top-level `articles` list
/// with `source.name` nested one level down. A payload without that list is
/// zero articles, not an error.
pub struct NewsApiAdapter {
    client: reqwest::Client,
    endpoint: String,
}

impl NewsApiAdapter {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: config.newsapi_endpoint.clone(),
        })
    }

    fn record_from_article(item: &Value) -> RawRecord {
        let field = |name: &str| {
            item.get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        RawRecord {
            title: field("title"),
            url: field("url"),
            image_url: field("urlToImage"),
            author: field("author"),
            description: field("description"),
            body_text: field("content"),
            published_at: field("publishedAt"),
            source_name: item
                .get("source")
                .and_then(|source| source.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    pub(crate) fn parse_payload(payload: &Value) -> Vec<RawRecord> {
        payload
            .get("articles")
            .and_then(Value::as_array)
            .map(|articles| articles.iter().map(Self::record_from_article).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SourceAdapter for NewsApiAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<Vec<RawRecord>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SourceUnavailable(format!("HTTP {}", status)));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::MalformedPayload(e.to_string()))?;

        Ok(Self::parse_payload(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_articles() {
        let payload: Value = serde_json::from_str(
            r#"{
                "status": "ok",
                "articles": [
                    {
                        "source": {"id": null, "name": "The Hindu"},
                        "author": "Special Correspondent",
                        "title": "Monsoon session wraps up",
                        "description": "A recap of the session.",
                        "url": "https://www.thehindu.com/monsoon-session",
                        "urlToImage": "https://www.thehindu.com/session.jpg",
                        "publishedAt": "2024-08-12T10:15:00Z",
                        "content": "The session closed on Friday… [+2100 chars]"
                    },
                    {
                        "source": {},
                        "title": null,
                        "url": "https://example.com/untitled"
                    }
                ]
            }"#,
        )
        .unwrap();

        let records = NewsApiAdapter::parse_payload(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source_name.as_deref(), Some("The Hindu"));
        assert_eq!(records[0].image_url.as_deref(), Some("https://www.thehindu.com/session.jpg"));
        assert!(records[1].title.is_none());
        assert!(records[1].source_name.is_none());
    }

    #[test]
    fn test_missing_articles_is_empty_success() {
        let payload: Value = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(NewsApiAdapter::parse_payload(&payload).is_empty());

        let payload: Value = serde_json::from_str(r#"{"articles": 7}"#).unwrap();
        assert!(NewsApiAdapter::parse_payload(&payload).is_empty());
    }
}
