//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.

pub mod url_store;

pub use url_store::{BoxError, StoreError, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
