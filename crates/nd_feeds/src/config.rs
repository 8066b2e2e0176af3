use std::env;

/// Endpoints and credentials for the live sources. The API key comes from
/// the environment so builds never embed a real credential; `"test"` is the
/// public rate-limited placeholder.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub guardian_endpoint: String,
    pub guardian_api_key: String,
    pub guardian_section: String,
    pub guardian_page_size: u32,
    pub newsapi_endpoint: String,
    pub rss_endpoint: String,
    pub rss_label: String,
}

pub const GUARDIAN_API_KEY_VAR: &str = "GUARDIAN_API_KEY";

impl FeedConfig {
    pub fn from_env() -> Self {
        Self {
            guardian_api_key: env::var(GUARDIAN_API_KEY_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| "test".to_string()),
            ..Self::default()
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            guardian_endpoint: "https://content.guardianapis.com/search".to_string(),
            guardian_api_key: "test".to_string(),
            guardian_section: "news".to_string(),
            guardian_page_size: 20,
            newsapi_endpoint:
                "https://saurav.tech/NewsAPI/top-headlines/category/general/in.json"
                    .to_string(),
            rss_endpoint: "https://feeds.bbci.co.uk/news/world/rss.xml".to_string(),
            rss_label: "BBC World".to_string(),
        }
    }
}
