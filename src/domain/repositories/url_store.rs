//! Storage contract for token → URL mappings.

use crate::domain::context::RequestContext;
use async_trait::async_trait;

/// Boxed error used as the source of backend faults.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by [`UrlStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("key {key:?} already exists")]
    DuplicateKey { key: String },

    #[error("key {key:?} does not exist")]
    NotFound { key: String },

    #[error("cannot read data from store: {source}")]
    Read {
        #[source]
        source: BoxError,
    },

    #[error("cannot insert data: {source}")]
    Write {
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub fn read(source: impl Into<BoxError>) -> Self {
        Self::Read {
            source: source.into(),
        }
    }

    pub fn write(source: impl Into<BoxError>) -> Self {
        Self::Write {
            source: source.into(),
        }
    }
}

/// Key/value store mapping tokens to target URLs.
///
/// Keys are unique: [`UrlStore::set`] never overwrites an existing entry.
/// Every call receives the [`RequestContext`] of the request it serves and
/// must honour its deadline.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlStore`] - process-local map
/// - [`crate::infrastructure::persistence::PgUrlStore`] - PostgreSQL `urls` table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if `key` is already present.
    /// Returns [`StoreError::Write`] on backend failures or when the context
    /// deadline passes.
    async fn set(&self, ctx: &RequestContext, key: &str, value: &str) -> Result<(), StoreError>;

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `key` is absent.
    /// Returns [`StoreError::Read`] on backend failures or when the context
    /// deadline passes.
    async fn get(&self, ctx: &RequestContext, key: &str) -> Result<String, StoreError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool {
        true
    }
}
