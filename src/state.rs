//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::ShortenerService;
use crate::domain::repositories::UrlStore;
use crate::utils::token_generator::TokenGenerator;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub store: Arc<dyn UrlStore>,
    /// Deadline applied to each request's store calls; `None` disables it.
    pub store_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UrlStore>,
        tokens: Arc<dyn TokenGenerator>,
        store_timeout: Option<Duration>,
    ) -> Self {
        let shortener = Arc::new(ShortenerService::new(store.clone(), tokens));

        Self {
            shortener,
            store,
            store_timeout,
        }
    }
}
