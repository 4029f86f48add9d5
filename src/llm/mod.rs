mod client;
mod types;

pub use client::*;
pub use types::*;

use crate::{Error, Result};
use tracing::debug;

/// Picks the effective API key for one request: the request-supplied key
/// wins over the configured one (the config layer already folds in the
/// environment fallback at load time). Empty strings count as absent.
pub fn resolve_api_key(request_key: Option<&str>, configured_key: Option<&str>) -> Result<String> {
    if let Some(key) = request_key.filter(|key| !key.is_empty()) {
        debug!("Using API key provided in request data");
        return Ok(key.to_string());
    }

    if let Some(key) = configured_key.filter(|key| !key.is_empty()) {
        debug!("Using API key from configuration");
        return Ok(key.to_string());
    }

    debug!("No OpenAI API key found from any source");
    Err(Error::ApiKeyNotConfigured)
}
