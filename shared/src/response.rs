//! API Response types
//!
//! Every entity call yields an [`HttpResponse`]: the status, the headers the
//! backend attached, and a body that may be absent.

use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

/// Application name used as the prefix of backend alert headers
pub const APP_NAME: &str = "boostclientApp";

/// Header carrying the backend's alert key (e.g. `boostclientApp.quote.created`)
pub const ALERT_HEADER: &str = "x-boostclientapp-alert";

/// Header carrying the alert parameter (usually the record id)
pub const ALERT_PARAMS_HEADER: &str = "x-boostclientapp-params";

/// Response wrapper returned by every entity operation
#[derive(Debug, Clone)]
pub struct HttpResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `None` when the backend sent no body (or a JSON `null`)
    pub body: Option<T>,
}

impl<T> HttpResponse<T> {
    pub fn new(status: StatusCode, body: Option<T>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Take the body out
    pub fn into_body(self) -> Option<T> {
        self.body
    }

    /// Transform the body, keeping status and headers
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> HttpResponse<U> {
        HttpResponse {
            status: self.status,
            headers: self.headers,
            body: self.body.map(f),
        }
    }

    /// Backend alert attached to the response, if any
    pub fn alert(&self) -> Option<Alert> {
        let key = self.headers.get(ALERT_HEADER)?.to_str().ok()?;
        let param = self
            .headers
            .get(ALERT_PARAMS_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Some(Alert {
            key: key.to_string(),
            param,
        })
    }
}

/// Translation key plus parameter sent by the backend after a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub key: String,
    pub param: Option<String>,
}

/// Problem details body (RFC 7807) sent by the backend on failures
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Translation key such as `error.idnull`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
}

impl ProblemDetails {
    /// Best human-readable summary
    pub fn summary(&self) -> String {
        self.detail
            .clone()
            .or_else(|| self.title.clone())
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }

    /// A body only counts as problem details if it names a title or message
    pub fn is_meaningful(&self) -> bool {
        self.title.is_some() || self.message.is_some()
    }
}
