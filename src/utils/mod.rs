//! Utility functions for token generation and URL validation.
//!
//! - [`token_generator`] - Token generation capability and its UUID default
//! - [`url_validator`] - Absolute URL validation

pub mod token_generator;
pub mod url_validator;
