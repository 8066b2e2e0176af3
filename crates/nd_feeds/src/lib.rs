pub mod aggregator;
pub mod classify;
pub mod config;
pub mod fallback;
pub mod normalize;
pub mod newsroom;
pub mod sanitize;
pub mod sources;

pub use aggregator::Aggregator;
pub use config::FeedConfig;
pub use newsroom::Newsroom;
pub use sources::SourceAdapter;

pub mod prelude {
    pub use super::sources::{RawRecord, SourceAdapter};
    pub use super::{Aggregator, FeedConfig, Newsroom};
    pub use nd_core::{Article, ArticleSection, Category, NewsDigest, Result, Snapshot};
}
