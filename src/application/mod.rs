//! Application layer services implementing business logic.
//!
//! Services consume the storage trait and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::shortener_service::ShortenerService`] - Mapping creation and resolution

pub mod services;
