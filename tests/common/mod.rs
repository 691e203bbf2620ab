#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use url_shortener::domain::context::RequestContext;
use url_shortener::domain::repositories::{StoreError, UrlStore};
use url_shortener::infrastructure::persistence::MemoryUrlStore;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;
use url_shortener::utils::token_generator::{TokenGenerator, UuidTokenGenerator};

/// Store whose every operation fails with a backend fault.
pub struct FailingStore;

#[async_trait]
impl UrlStore for FailingStore {
    async fn set(&self, _ctx: &RequestContext, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::write(std::io::Error::other("connection refused")))
    }

    async fn get(&self, _ctx: &RequestContext, _key: &str) -> Result<String, StoreError> {
        Err(StoreError::read(std::io::Error::other("Oops, something went wrong")))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Store that never answers within any reasonable deadline.
pub struct StalledStore;

#[async_trait]
impl UrlStore for StalledStore {
    async fn set(&self, ctx: &RequestContext, _key: &str, _value: &str) -> Result<(), StoreError> {
        ctx.run(tokio::time::sleep(Duration::from_secs(60)))
            .await
            .map_err(StoreError::write)
    }

    async fn get(&self, ctx: &RequestContext, _key: &str) -> Result<String, StoreError> {
        ctx.run(tokio::time::sleep(Duration::from_secs(60)))
            .await
            .map_err(StoreError::read)?;
        Ok("https://example.com".to_string())
    }
}

pub fn fixed_token(token: &'static str) -> Arc<dyn TokenGenerator> {
    Arc::new(move || token.to_string())
}

pub fn create_test_state(store: Arc<dyn UrlStore>, tokens: Arc<dyn TokenGenerator>) -> AppState {
    AppState::new(store, tokens, Some(Duration::from_secs(5)))
}

/// Full application router over an empty in-memory store.
pub fn memory_server(tokens: Arc<dyn TokenGenerator>) -> TestServer {
    let state = create_test_state(Arc::new(MemoryUrlStore::new()), tokens);
    TestServer::new(app_router(state)).unwrap()
}

pub fn server_with_store(store: Arc<dyn UrlStore>) -> TestServer {
    let state = create_test_state(store, Arc::new(UuidTokenGenerator));
    TestServer::new(app_router(state)).unwrap()
}
