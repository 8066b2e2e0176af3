use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed topical buckets, in display and tie-break order. The first variant
/// is the default when no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Science,
    Climate,
    Entertainment,
    Art,
    Technology,
}

impl Category {
    /// Every category, in enumeration order.
    pub const ALL: [Category; 6] = [
        Category::Politics,
        Category::Science,
        Category::Climate,
        Category::Entertainment,
        Category::Art,
        Category::Technology,
    ];

    pub const DEFAULT: Category = Category::Politics;

    pub fn label(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Science => "Science",
            Category::Climate => "Climate",
            Category::Entertainment => "Entertainment",
            Category::Art => "Art",
            Category::Technology => "Technology",
        }
    }
}

/// The canonical, source-agnostic representation of one news item.
/// Immutable once built; a refresh produces a whole new set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub body_text: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub source_name: String,
    pub category: Category,
}

/// One category's slice of the digest. Only produced for categories that
/// have at least one article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSection {
    pub category: Category,
    pub articles: Vec<Article>,
}

/// The outcome of one aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsDigest {
    pub sections: Vec<ArticleSection>,
    pub articles: Vec<Article>,
    pub using_fallback: bool,
    pub issues: Option<String>,
}

impl NewsDigest {
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
            articles: Vec::new(),
            using_fallback: false,
            issues: None,
        }
    }

    /// Look an article back up by its URL, the stable identity a boundary
    /// holds across a navigation handoff.
    pub fn article_by_url(&self, url: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.url == url)
    }
}

/// The digest tuple published to the presentation boundary, tagged with the
/// generation of the pass that produced it. Replaced wholesale, never
/// field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub digest: NewsDigest,
}

impl Snapshot {
    pub fn initial() -> Self {
        Self {
            generation: 0,
            digest: NewsDigest::empty(),
        }
    }
}
