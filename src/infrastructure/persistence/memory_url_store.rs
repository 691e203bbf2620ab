//! In-process implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::domain::context::RequestContext;
use crate::domain::repositories::{StoreError, UrlStore};

/// URL store backed by a map held in process memory.
///
/// Every read and write goes through an async `RwLock`, so the store can be
/// shared across request tasks. Waiting for the lock counts against the
/// request deadline. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryUrlStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn set(&self, ctx: &RequestContext, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match ctx.run(self.entries.write()).await {
            Ok(guard) => guard,
            Err(elapsed) => {
                error!(request_id = %ctx.request_id(), token = key, "write lock not acquired before deadline");
                return Err(StoreError::write(elapsed));
            }
        };

        match entries.entry(key.to_string()) {
            Entry::Occupied(_) => {
                warn!(request_id = %ctx.request_id(), token = key, "key already exists");
                Err(StoreError::DuplicateKey {
                    key: key.to_string(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(())
            }
        }
    }

    async fn get(&self, ctx: &RequestContext, key: &str) -> Result<String, StoreError> {
        let entries = match ctx.run(self.entries.read()).await {
            Ok(guard) => guard,
            Err(elapsed) => {
                error!(request_id = %ctx.request_id(), token = key, "read lock not acquired before deadline");
                return Err(StoreError::read(elapsed));
            }
        };

        entries.get(key).cloned().ok_or_else(|| {
            debug!(request_id = %ctx.request_id(), token = key, "key does not exist");
            StoreError::NotFound {
                key: key.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::RequestId;
    use std::sync::Arc;
    use std::time::Duration;

    fn ctx_with_timeout(ms: u64) -> RequestContext {
        RequestContext::new(RequestId::new("test"), Some(Duration::from_millis(ms)))
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryUrlStore::new();
        let ctx = RequestContext::background();

        store.set(&ctx, "abc", "https://example.com").await.unwrap();

        let value = store.get(&ctx, "abc").await.unwrap();
        assert_eq!(value, "https://example.com");
    }

    #[tokio::test]
    async fn test_set_duplicate_key_keeps_first_value() {
        let store = MemoryUrlStore::new();
        let ctx = RequestContext::background();

        store.set(&ctx, "abc", "https://first.com").await.unwrap();
        let result = store.set(&ctx, "abc", "https://second.com").await;

        assert!(matches!(result, Err(StoreError::DuplicateKey { ref key }) if key == "abc"));
        assert_eq!(store.get(&ctx, "abc").await.unwrap(), "https://first.com");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryUrlStore::new();
        let ctx = RequestContext::background();

        let result = store.get(&ctx, "missing").await;

        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryUrlStore::new();

        assert!(store.is_empty().await);
        assert!(store.health_check().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sets_of_distinct_keys() {
        let store = Arc::new(MemoryUrlStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let ctx = RequestContext::background();
                    store
                        .set(&ctx, &format!("key-{i}"), &format!("https://example.com/{i}"))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.len().await, 64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sets_of_same_key_admit_one_writer() {
        let store = Arc::new(MemoryUrlStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let ctx = RequestContext::background();
                    store
                        .set(&ctx, "shared", &format!("https://example.com/{i}"))
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => successes += 1,
                Err(StoreError::DuplicateKey { .. }) => duplicates += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 31);
    }

    #[tokio::test]
    async fn test_get_gives_up_on_held_lock_at_deadline() {
        let store = MemoryUrlStore::new();
        let _writer = store.entries.write().await;

        let result = tokio::time::timeout(
            Duration::from_millis(500),
            store.get(&ctx_with_timeout(20), "abc"),
        )
        .await
        .expect("get should return once its deadline passes");

        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[tokio::test]
    async fn test_set_gives_up_on_held_lock_at_deadline() {
        let store = MemoryUrlStore::new();
        let reader = store.entries.read().await;

        let result = tokio::time::timeout(
            Duration::from_millis(500),
            store.set(&ctx_with_timeout(20), "abc", "https://example.com"),
        )
        .await
        .expect("set should return once its deadline passes");

        assert!(matches!(result, Err(StoreError::Write { .. })));
        drop(reader);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_deadline_unused_when_lock_is_free() {
        let store = MemoryUrlStore::new();
        let ctx = ctx_with_timeout(1_000);

        store.set(&ctx, "abc", "https://example.com").await.unwrap();

        assert_eq!(store.get(&ctx, "abc").await.unwrap(), "https://example.com");
    }
}
