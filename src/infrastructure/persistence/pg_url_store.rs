//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::domain::context::RequestContext;
use crate::domain::repositories::{StoreError, UrlStore};

/// PostgreSQL store over the `urls(token, url)` table.
///
/// Each call is a single statement on a pooled connection, without a
/// transaction. Statements run under the request deadline.
pub struct PgUrlStore {
    pool: Arc<PgPool>,
}

impl PgUrlStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Upper bound on the `/health` ping, independent of the pool acquire timeout.
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

#[async_trait]
impl UrlStore for PgUrlStore {
    async fn set(&self, ctx: &RequestContext, key: &str, value: &str) -> Result<(), StoreError> {
        let insert = sqlx::query("INSERT INTO urls (token, url) VALUES ($1, $2)")
            .bind(key)
            .bind(value)
            .execute(self.pool.as_ref());

        match ctx.run(insert).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) if is_unique_violation(&e) => {
                error!(request_id = %ctx.request_id(), token = key, "token already exists");
                Err(StoreError::DuplicateKey {
                    key: key.to_string(),
                })
            }
            Ok(Err(e)) => {
                error!(request_id = %ctx.request_id(), token = key, error = %e, "cannot insert into database");
                Err(StoreError::write(e))
            }
            Err(elapsed) => {
                error!(request_id = %ctx.request_id(), token = key, "insert exceeded request deadline");
                Err(StoreError::write(elapsed))
            }
        }
    }

    async fn get(&self, ctx: &RequestContext, key: &str) -> Result<String, StoreError> {
        let lookup = sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE token = $1")
            .bind(key)
            .fetch_optional(self.pool.as_ref());

        match ctx.run(lookup).await {
            Ok(Ok(Some(url))) => Ok(url),
            Ok(Ok(None)) => {
                debug!(request_id = %ctx.request_id(), token = key, "cannot find URL for token");
                Err(StoreError::NotFound {
                    key: key.to_string(),
                })
            }
            Ok(Err(e)) => {
                error!(request_id = %ctx.request_id(), token = key, error = %e, "cannot read data from database");
                Err(StoreError::read(e))
            }
            Err(elapsed) => {
                error!(request_id = %ctx.request_id(), token = key, "lookup exceeded request deadline");
                Err(StoreError::read(elapsed))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let ping = sqlx::query("SELECT 1").execute(self.pool.as_ref());

        match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, ping).await {
            Ok(result) => result.is_ok(),
            Err(_) => {
                warn!("database health check timed out");
                false
            }
        }
    }
}
