//! HTTP transports
//!
//! [`HttpClient`] is the seam between the entity services and the wire.
//! [`NetworkHttpClient`] talks to a real backend over reqwest;
//! [`OneshotHttpClient`] dispatches into an in-process axum `Router`.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;

use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult};

/// Content type for partial updates
pub(crate) const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Decode a success body. Empty bodies and JSON `null` are both "absent".
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<Option<T>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}
