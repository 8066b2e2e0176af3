use std::sync::Arc;

use nd_feeds::Newsroom;

pub struct AppState {
    pub newsroom: Arc<Newsroom>,
}
