//! Token generation for new mappings.
//!
//! The service receives its generator as a trait object so tests can swap in
//! a deterministic one. Any `Fn() -> String` closure is a generator.

use uuid::Uuid;

/// Produces fresh tokens for new mappings.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator: hyphenated random UUID v4, e.g.
/// `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> TokenGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
