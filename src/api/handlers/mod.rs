//! HTTP request handlers.

pub mod health;
pub mod resolve;
pub mod save;

pub use health::health_handler;
pub use resolve::resolve_handler;
pub use save::save_handler;
