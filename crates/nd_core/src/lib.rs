pub mod error;
pub mod kv;
pub mod links;
pub mod types;

pub use error::Error;
pub use kv::{KeyValueStore, MemoryKeyValueStore};
pub use links::LinkOpener;
pub use types::{Article, ArticleSection, Category, NewsDigest, Snapshot};

pub type Result<T> = std::result::Result<T, Error>;
