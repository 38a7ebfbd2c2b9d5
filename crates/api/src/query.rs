//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /readings`.
///
/// `limit` is taken as a raw string so that non-numeric values fall back to
/// the default instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ReadingsParams {
    pub limit: Option<String>,
}
