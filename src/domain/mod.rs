//! Domain layer containing entities, the storage contract and the
//! request context shared by every layer.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`context`] - Request id and deadline passed to storage calls

pub mod context;
pub mod entities;
pub mod repositories;
