//! Mapping entity representing one token → URL association.

/// A shortened URL mapping.
///
/// `token` is generated once and never changes; `target_url` has already been
/// validated as an absolute URL by the time a `Mapping` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub token: String,
    pub target_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(token: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            target_url: target_url.into(),
        }
    }
}
