//! Storage backend implementations.
//!
//! - [`MemoryUrlStore`] - In-process map guarded by a lock
//! - [`PgUrlStore`] - PostgreSQL `urls` table via SQLx

pub mod memory_url_store;
pub mod pg_url_store;

pub use memory_url_store::MemoryUrlStore;
pub use pg_url_store::PgUrlStore;
