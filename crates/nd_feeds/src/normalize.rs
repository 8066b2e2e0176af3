use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use nd_core::{Article, Category};

use crate::sanitize::{clean_body_text, clean_text};
use crate::sources::RawRecord;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_SOURCE: &str = "Unknown source";

/// A canonical article minus its category. What the normalizer hands to the
/// classifier.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub body_text: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub source_name: String,
}

impl ArticleDraft {
    pub fn into_article(self, category: Category) -> Article {
        Article {
            title: self.title,
            url: self.url,
            image_url: self.image_url,
            author: self.author,
            description: self.description,
            body_text: self.body_text,
            published_at: self.published_at,
            source_name: self.source_name,
            category,
        }
    }
}

/// Map one raw record onto the canonical field set. Returns `None` when the
/// record has no usable URL; everything else degrades to defaults.
pub fn normalize(raw: RawRecord, default_source: &str) -> Option<ArticleDraft> {
    let url = raw
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())?
        .to_string();

    let title = raw
        .title
        .as_deref()
        .and_then(clean_text)
        .unwrap_or_else(|| UNTITLED.to_string());

    let description = raw.description.as_deref().and_then(clean_text);
    let body_text = raw.body_text.as_deref().and_then(clean_body_text);
    // Body text stands in for a missing summary.
    let description = description.or_else(|| body_text.clone());

    let source_name = raw
        .source_name
        .as_deref()
        .and_then(clean_text)
        .or_else(|| {
            let label = default_source.trim();
            if label.is_empty() {
                None
            } else {
                Some(label.to_string())
            }
        })
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    Some(ArticleDraft {
        title,
        url,
        image_url: raw
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        author: raw.author.as_deref().and_then(clean_text),
        description,
        body_text,
        published_at: raw.published_at.as_deref().and_then(parse_timestamp),
        source_name,
    })
}

/// Accepts RFC 3339, RFC 2822, and the common naive forms; anything else is
/// unparsable and will sort as oldest.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            DateTime::parse_from_rfc2822(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
        })
}
