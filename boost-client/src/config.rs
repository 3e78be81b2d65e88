//! Client configuration

/// Client configuration for connecting to the REST backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Prefix prepended to every resource path (e.g. "services/boost/")
    pub endpoint_prefix: String,

    /// Bearer token attached to every request, if any
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint_prefix: String::new(),
            token: None,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | BOOST_API_URL | http://localhost:8080 |
    /// | BOOST_ENDPOINT_PREFIX | (empty) |
    /// | BOOST_API_TOKEN | (none) |
    /// | BOOST_API_TIMEOUT_SECS | 30 |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BOOST_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let mut config = Self::new(base_url);
        if let Ok(prefix) = std::env::var("BOOST_ENDPOINT_PREFIX") {
            config.endpoint_prefix = prefix;
        }
        config.token = std::env::var("BOOST_API_TOKEN").ok().filter(|t| !t.is_empty());
        config.timeout = std::env::var("BOOST_API_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);
        config
    }

    /// Set the endpoint prefix
    pub fn with_endpoint_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.endpoint_prefix = prefix.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Full resource path for an API path such as `api/quotes`
    pub fn endpoint_for(&self, api: &str) -> String {
        format!("{}{}", self.endpoint_prefix, api)
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
