//! Mapping creation and resolution service.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::context::RequestContext;
use crate::domain::entities::Mapping;
use crate::domain::repositories::{StoreError, UrlStore};
use crate::error::AppError;
use crate::utils::token_generator::TokenGenerator;
use crate::utils::url_validator::parse_target_url;

/// Service for creating and resolving shortened URLs.
///
/// Holds exactly one store, chosen at startup, and the generator used for new
/// tokens. Cheap to share across request tasks behind an `Arc`.
pub struct ShortenerService {
    store: Arc<dyn UrlStore>,
    tokens: Arc<dyn TokenGenerator>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(store: Arc<dyn UrlStore>, tokens: Arc<dyn TokenGenerator>) -> Self {
        Self { store, tokens }
    }

    /// Validates `raw_url`, assigns it a fresh token and stores the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `raw_url` is not an absolute URL;
    /// the store is not touched in that case.
    ///
    /// Returns [`AppError::Storage`] if the store rejects the write, including
    /// a token collision.
    pub async fn save_url(&self, ctx: &RequestContext, raw_url: &str) -> Result<Mapping, AppError> {
        let target_url = parse_target_url(raw_url).map_err(|source| {
            info!(request_id = %ctx.request_id(), url = raw_url, error = %source, "cannot parse URL");
            AppError::InvalidUrl {
                raw: raw_url.to_string(),
                source,
            }
        })?;

        let token = self.tokens.generate();

        if let Err(e) = self.store.set(ctx, &token, &target_url).await {
            error!(request_id = %ctx.request_id(), token = %token, error = %e, "cannot save URL");
            return Err(AppError::Storage(e));
        }

        info!(request_id = %ctx.request_id(), token = %token, url = %target_url, "saved URL");

        Ok(Mapping::new(token, target_url))
    }

    /// Looks up the URL stored under `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `token`.
    /// Returns [`AppError::Storage`] on any other store failure.
    pub async fn resolve_url(&self, ctx: &RequestContext, token: &str) -> Result<String, AppError> {
        match self.store.get(ctx, token).await {
            Ok(url) => {
                info!(request_id = %ctx.request_id(), token, url = %url, "resolved URL");
                Ok(url)
            }
            Err(StoreError::NotFound { .. }) => {
                debug!(request_id = %ctx.request_id(), token, "cannot find URL for token");
                Err(AppError::NotFound {
                    token: token.to_string(),
                })
            }
            Err(e) => {
                error!(request_id = %ctx.request_id(), token, error = %e, "cannot read URL");
                Err(AppError::Storage(e))
            }
        }
    }
}
