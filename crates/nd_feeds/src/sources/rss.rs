use async_trait::async_trait;
use nd_core::{Error, Result};
use rss::{Channel, Item};

use crate::config::FeedConfig;
use crate::sources::{http_client, RawRecord, SourceAdapter};

/// RSS 2.0 channel/item feed. Handles the optional namespaced extras real
/// feeds carry: `dc:creator` bylines, `content:encoded` bodies, and
/// `media:thumbnail`/`media:content` imagery.
pub struct RssAdapter {
    client: reqwest::Client,
    endpoint: String,
    label: String,
}

impl RssAdapter {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: config.rss_endpoint.clone(),
            label: config.rss_label.clone(),
        })
    }

    fn image_from_item(item: &Item) -> Option<String> {
        if let Some(media) = item.extensions().get("media") {
            for key in ["thumbnail", "content"] {
                if let Some(elements) = media.get(key) {
                    for element in elements {
                        let is_image = key == "thumbnail"
                            || element.attrs().get("medium").map(String::as_str)
                                == Some("image")
                            || element
                                .attrs()
                                .get("type")
                                .map(|t| t.starts_with("image/"))
                                .unwrap_or(false);
                        if is_image {
                            if let Some(url) = element.attrs().get("url") {
                                return Some(url.clone());
                            }
                        }
                    }
                }
            }
        }

        item.enclosure()
            .filter(|enclosure| enclosure.mime_type().starts_with("image/"))
            .map(|enclosure| enclosure.url().to_string())
    }

    fn record_from_item(item: &Item, channel_title: &str) -> RawRecord {
        let author = item
            .dublin_core_ext()
            .and_then(|dc| dc.creators().first().cloned())
            .or_else(|| item.author().map(str::to_string));

        let source_name = if channel_title.trim().is_empty() {
            None
        } else {
            Some(channel_title.trim().to_string())
        };

        RawRecord {
            title: item.title().map(str::to_string),
            url: item.link().map(str::to_string),
            image_url: Self::image_from_item(item),
            author,
            description: item.description().map(str::to_string),
            body_text: item.content().map(str::to_string),
            published_at: item.pub_date().map(str::to_string),
            source_name,
        }
    }

    pub(crate) fn parse_document(body: &[u8]) -> Result<Vec<RawRecord>> {
        let channel =
            Channel::read_from(body).map_err(|e| Error::MalformedPayload(e.to_string()))?;

        let channel_title = channel.title().to_string();
        Ok(channel
            .items()
            .iter()
            .map(|item| Self::record_from_item(item, &channel_title))
            .collect())
    }
}

#[async_trait]
impl SourceAdapter for RssAdapter {
    fn name(&self) -> &str {
        &self.label
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

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::SourceUnavailable(e.to_string()))?;

        Self::parse_document(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <rss version="2.0"
             xmlns:media="http://search.yahoo.com/mrss/"
             xmlns:dc="http://purl.org/dc/elements/1.1/"
             xmlns:content="http://purl.org/rss/1.0/modules/content/">
          <channel>
            <title>World Service</title>
            <link>https://news.example.org</link>
            <item>
              <title>Summit ends with a joint declaration</title>
              <link>https://news.example.org/summit</link>
              <description>&lt;p&gt;Leaders agreed on a timetable.&lt;/p&gt;</description>
              <pubDate>Mon, 04 Nov 2024 17:00:00 GMT</pubDate>
              <dc:creator>Diplomatic desk</dc:creator>
              <content:encoded>&lt;p&gt;The closing session ran long.&lt;/p&gt;</content:encoded>
              <media:thumbnail url="https://news.example.org/summit.jpg"/>
            </item>
            <item>
              <title>Markets steady after rate decision</title>
              <link>https://news.example.org/markets</link>
              <pubDate>Mon, 04 Nov 2024 09:00:00 GMT</pubDate>
            </item>
          </channel>
        </rss>"#;

    #[test]
    fn test_parse_items() {
        let records = RssAdapter::parse_document(FEED.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(
            first.title.as_deref(),
            Some("Summit ends with a joint declaration")
        );
        assert_eq!(first.url.as_deref(), Some("https://news.example.org/summit"));
        assert_eq!(first.author.as_deref(), Some("Diplomatic desk"));
        assert_eq!(
            first.image_url.as_deref(),
            Some("https://news.example.org/summit.jpg")
        );
        assert_eq!(first.source_name.as_deref(), Some("World Service"));
        assert!(first.body_text.as_deref().unwrap_or("").contains("closing session"));

        let second = &records[1];
        assert!(second.image_url.is_none());
        assert!(second.author.is_none());
    }

    #[test]
    fn test_single_item_channel() {
        let feed = r#"<?xml version="1.0"?>
            <rss version="2.0">
              <channel>
                <title>Single</title>
                <item>
                  <title>Only story</title>
                  <link>https://news.example.org/only</link>
                </item>
              </channel>
            </rss>"#;
        let records = RssAdapter::parse_document(feed.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Only story"));
    }

    #[test]
    fn test_invalid_document_is_malformed() {
        let result = RssAdapter::parse_document(b"<html>not a feed</html>");
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }
}
