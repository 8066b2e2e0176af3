use async_trait::async_trait;
use nd_core::{Error, Result};
use serde_json::Value;

use crate::config::FeedConfig;
use crate::sources::{http_client, RawRecord, SourceAdapter};

const SOURCE_NAME: &str = "The Guardian";

/// Guardian Open Platform content search. The response nests everything
/// under `response.results`; a payload without that list is zero articles,
/// not an error.
pub struct GuardianAdapter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    section: String,
    page_size: u32,
}

impl GuardianAdapter {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: config.guardian_endpoint.clone(),
            api_key: config.guardian_api_key.clone(),
            section: config.guardian_section.clone(),
            page_size: config.guardian_page_size,
        })
    }

    fn record_from_result(item: &Value) -> RawRecord {
        let fields = item.get("fields");
        let field = |name: &str| {
            fields
                .and_then(|f| f.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        RawRecord {
            title: item
                .get("webTitle")
                .and_then(Value::as_str)
                .map(str::to_string),
            url: item
                .get("webUrl")
                .and_then(Value::as_str)
                .map(str::to_string),
            image_url: field("thumbnail"),
            author: field("byline"),
            description: field("trailText"),
            body_text: field("bodyText"),
            published_at: item
                .get("webPublicationDate")
                .and_then(Value::as_str)
                .map(str::to_string),
            source_name: Some(SOURCE_NAME.to_string()),
        }
    }

    pub(crate) fn parse_payload(payload: &Value) -> Vec<RawRecord> {
        payload
            .get("response")
            .and_then(|response| response.get("results"))
            .and_then(Value::as_array)
            .map(|results| results.iter().map(Self::record_from_result).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SourceAdapter for GuardianAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<Vec<RawRecord>> {
        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("section", self.section.as_str()),
                ("order-by", "newest"),
                ("page-size", page_size.as_str()),
                ("show-fields", "thumbnail,trailText,byline,bodyText"),
                ("api-key", self.api_key.as_str()),
            ])
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
    fn test_parse_results() {
        let payload: Value = serde_json::from_str(
            r#"{
                "response": {
                    "status": "ok",
                    "results": [
                        {
                            "webTitle": "Parliament votes on the new budget",
                            "webUrl": "https://www.theguardian.com/politics/budget",
                            "webPublicationDate": "2024-11-02T08:30:00Z",
                            "fields": {
                                "thumbnail": "https://media.guim.co.uk/budget.jpg",
                                "byline": "Political correspondent",
                                "trailText": "The vote passed narrowly.",
                                "bodyText": "Members voted late into the night."
                            }
                        },
                        {
                            "webTitle": "Minimal item",
                            "webUrl": "https://www.theguardian.com/minimal"
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        let records = GuardianAdapter::parse_payload(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].title.as_deref(),
            Some("Parliament votes on the new budget")
        );
        assert_eq!(
            records[0].image_url.as_deref(),
            Some("https://media.guim.co.uk/budget.jpg")
        );
        assert_eq!(records[0].source_name.as_deref(), Some("The Guardian"));
        assert!(records[1].image_url.is_none());
        assert!(records[1].author.is_none());
        assert!(records[1].body_text.is_none());
    }

    #[test]
    fn test_missing_results_is_empty_success() {
        let payload: Value = serde_json::from_str(r#"{"response": {"status": "ok"}}"#).unwrap();
        assert!(GuardianAdapter::parse_payload(&payload).is_empty());

        let payload: Value =
            serde_json::from_str(r#"{"response": {"results": "not-a-list"}}"#).unwrap();
        assert!(GuardianAdapter::parse_payload(&payload).is_empty());

        let payload: Value = serde_json::from_str(r#""just a string""#).unwrap();
        assert!(GuardianAdapter::parse_payload(&payload).is_empty());
    }
}
