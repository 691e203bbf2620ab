//! Query string parameters of the shortener endpoints.

use serde::Deserialize;

/// Parameters of `GET /save`.
///
/// A missing `url` is treated as an empty string so it is reported the same
/// way as any other unparsable URL.
#[derive(Debug, Deserialize)]
pub struct SaveParams {
    #[serde(default)]
    pub url: String,
}

/// Parameters of `GET /go`.
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    #[serde(default)]
    pub to: String,
}
