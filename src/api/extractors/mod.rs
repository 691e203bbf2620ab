//! Custom request extractors.

pub mod request_context;
