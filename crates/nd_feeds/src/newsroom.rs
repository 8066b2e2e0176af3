use std::sync::atomic::{AtomicU64, Ordering};

use nd_core::{NewsDigest, Snapshot};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::aggregator::Aggregator;

/// Owns the published digest. Refreshes run whole aggregation passes and
/// publish last-started-wins: a slow pass that resolves after a newer one
/// has published is discarded, so readers never regress. The snapshot is
/// swapped as one value under a single write lock.
pub struct Newsroom {
    aggregator: Aggregator,
    state: RwLock<Snapshot>,
    generation: AtomicU64,
}

impl Newsroom {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            state: RwLock::new(Snapshot::initial()),
            generation: AtomicU64::new(0),
        }
    }

    /// Run one aggregation pass and publish it. `manual` only picks the
    /// boundary's spinner; the pass itself is identical either way.
    pub async fn refresh(&self, manual: bool) -> Snapshot {
        let generation = self.begin_pass();
        if manual {
            info!("🔄 Manual refresh started (pass {})", generation);
        } else {
            info!("Refresh started (pass {})", generation);
        }

        let digest = self.aggregator.run().await;
        self.complete_pass(generation, digest).await
    }

    pub async fn current(&self) -> Snapshot {
        self.state.read().await.clone()
    }

    fn begin_pass(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a finished pass unless a newer one already did. Returns the
    /// snapshot the boundary should show.
    async fn complete_pass(&self, generation: u64, digest: NewsDigest) -> Snapshot {
        let mut current = self.state.write().await;
        if generation >= current.generation {
            *current = Snapshot { generation, digest };
        } else {
            debug!(
                "Discarding stale pass {} (pass {} already published)",
                generation, current.generation
            );
        }
        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{RawRecord, SourceAdapter};
    use async_trait::async_trait;
    use nd_core::Result;

    struct StaticAdapter {
        records: Vec<RawRecord>,
    }

    #[async_trait]
    impl SourceAdapter for StaticAdapter {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch(&self) -> Result<Vec<RawRecord>> {
            Ok(self.records.clone())
        }
    }

    fn newsroom_with(titles: &[&str]) -> Newsroom {
        let records = titles
            .iter()
            .enumerate()
            .map(|(i, title)| RawRecord {
                title: Some(title.to_string()),
                url: Some(format!("http://example.com/{}", i)),
                ..RawRecord::default()
            })
            .collect();
        Newsroom::new(Aggregator::new(vec![Box::new(StaticAdapter { records })]))
    }

    #[tokio::test]
    async fn test_refresh_publishes_snapshot() {
        let newsroom = newsroom_with(&["First story"]);
        assert_eq!(newsroom.current().await.generation, 0);

        let snapshot = newsroom.refresh(false).await;
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.digest.articles.len(), 1);
        assert_eq!(newsroom.current().await.generation, 1);
    }

    #[tokio::test]
    async fn test_manual_flag_does_not_change_output() {
        let newsroom = newsroom_with(&["Story"]);
        let initial = newsroom.refresh(false).await;
        let manual = newsroom.refresh(true).await;
        assert_eq!(
            initial.digest.articles[0].url,
            manual.digest.articles[0].url
        );
    }

    #[tokio::test]
    async fn test_stale_pass_does_not_overwrite_newer() {
        let newsroom = newsroom_with(&[]);

        let slow = newsroom.begin_pass();
        let fast = newsroom.begin_pass();
        assert!(fast > slow);

        let mut fast_digest = NewsDigest::empty();
        fast_digest.issues = Some("fast pass".to_string());
        newsroom.complete_pass(fast, fast_digest).await;

        // The earlier pass resolves late; its result must be discarded.
        let mut slow_digest = NewsDigest::empty();
        slow_digest.issues = Some("slow pass".to_string());
        let published = newsroom.complete_pass(slow, slow_digest).await;

        assert_eq!(published.generation, fast);
        assert_eq!(published.digest.issues.as_deref(), Some("fast pass"));
        let current = newsroom.current().await;
        assert_eq!(current.generation, fast);
        assert_eq!(current.digest.issues.as_deref(), Some("fast pass"));
    }
}
