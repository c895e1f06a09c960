use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{client::CollectionApi, matcher::SearchMode, session::AdminSession};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CollectionApi>,
    pub session: Arc<Mutex<AdminSession>>,
    pub search_mode: SearchMode,
}

impl AppState {
    pub fn new(api: Arc<dyn CollectionApi>, search_mode: SearchMode) -> Self {
        Self {
            api,
            session: Arc::new(Mutex::new(AdminSession::new())),
            search_mode,
        }
    }
}
