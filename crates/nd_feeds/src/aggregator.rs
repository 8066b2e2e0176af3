use std::collections::HashSet;

use futures::future::join_all;
use nd_core::{Article, ArticleSection, Category, NewsDigest, Result};
use tracing::{info, warn};

use crate::classify::classify;
use crate::config::FeedConfig;
use crate::fallback;
use crate::normalize::normalize;
use crate::sources::{default_adapters, RawRecord, SourceAdapter};

/// Runs one full refresh: every adapter concurrently, settle-all, then the
/// synchronous merge. A failing source only shrinks the merge; the bundled
/// fallback set substitutes when nothing usable remains.
pub struct Aggregator {
    adapters: Vec<Box<dyn SourceAdapter>>,
}

impl Aggregator {
    pub fn new(adapters: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self { adapters }
    }

    pub fn with_default_sources(config: &FeedConfig) -> Result<Self> {
        Ok(Self::new(default_adapters(config)?))
    }

    pub fn source_names(&self) -> Vec<String> {
        self.adapters
            .iter()
            .map(|adapter| adapter.name().to_string())
            .collect()
    }

    pub async fn run(&self) -> NewsDigest {
        let outcomes = join_all(self.adapters.iter().map(|adapter| adapter.fetch())).await;

        let mut articles = Vec::new();
        let mut issues = Vec::new();
        // join_all keeps input order, so the merge follows adapter priority
        // regardless of which request finished first.
        for (adapter, outcome) in self.adapters.iter().zip(outcomes) {
            match outcome {
                Ok(records) => {
                    let fetched = records.len();
                    let mut usable = finish_records(records, adapter.name());
                    info!(
                        "✓ {}: {} records fetched, {} usable",
                        adapter.name(),
                        fetched,
                        usable.len()
                    );
                    articles.append(&mut usable);
                }
                Err(e) => {
                    warn!("✗ {}: {}", adapter.name(), e);
                    issues.push(format!("{}: {}", adapter.name(), e));
                }
            }
        }

        dedup_by_url(&mut articles);
        sort_by_recency(&mut articles);

        let mut using_fallback = false;
        if articles.is_empty() {
            warn!(
                "No usable live articles, substituting bundled set {}",
                fallback::FALLBACK_VERSION
            );
            articles = finish_records(fallback::raw_records(), "");
            using_fallback = true;
        }

        let sections = group_into_sections(&articles);
        let issues = if issues.is_empty() {
            None
        } else {
            Some(issues.join("; "))
        };

        NewsDigest {
            sections,
            articles,
            using_fallback,
            issues,
        }
    }
}

fn finish_records(records: Vec<RawRecord>, default_source: &str) -> Vec<Article> {
    records
        .into_iter()
        .filter_map(|record| normalize(record, default_source))
        .map(|draft| {
            let category = classify(&draft);
            draft.into_article(category)
        })
        .collect()
}

/// First occurrence of a URL wins; callers rely on the input being in
/// adapter-priority order.
fn dedup_by_url(articles: &mut Vec<Article>) {
    let mut seen = HashSet::new();
    articles.retain(|article| seen.insert(article.url.clone()));
}

/// Newest first; missing or unparsable timestamps sort last. The sort is
/// stable, so equal keys keep their merge order.
fn sort_by_recency(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

fn group_into_sections(articles: &[Article]) -> Vec<ArticleSection> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let bucket: Vec<Article> = articles
                .iter()
                .filter(|article| article.category == category)
                .cloned()
                .collect();
            if bucket.is_empty() {
                None
            } else {
                Some(ArticleSection {
                    category,
                    articles: bucket,
                })
            }
        })
        .collect()
}
