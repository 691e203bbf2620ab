//! # URL Shortener
//!
//! A small URL shortening service built with Axum. Long URLs are stored under
//! random tokens in a pluggable store and resolved back with a temporary
//! redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, storage trait, request context
//! - **Application Layer** ([`application`]) - Shortener service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and PostgreSQL stores
//! - **API Layer** ([`api`]) - HTTP handlers, extractors and middleware
//!
//! ## Endpoints
//!
//! - `GET /save?url=<absolute-url>` → `200 Your new url is: {token}`
//! - `GET /go?to=<token>` → `307` redirect to the stored URL
//! - `GET /health` → store health
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory store, nothing else required
//! STORE_BACKEND=memory cargo run
//!
//! # PostgreSQL store
//! export DB_CONN_STR="postgres://db_user@localhost:5432/url?sslmode=disable"
//! DB_RUN_MIGRATIONS=true cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::context::{RequestContext, RequestId};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::{StoreError, UrlStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryUrlStore, PgUrlStore};
    pub use crate::state::AppState;
    pub use crate::utils::token_generator::{TokenGenerator, UuidTokenGenerator};
}
