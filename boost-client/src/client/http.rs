// boost-client/src/client/http.rs
// HTTP 客户端 - 网络通信

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use shared::HttpResponse;

use super::{MERGE_PATCH_JSON, decode_body};
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP 客户端 trait
///
/// One call per method, relative `path` resolved against the transport's
/// base address. Non-2xx statuses come back as `Err`; a 2xx without body
/// comes back as `Ok` with `body: None`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<HttpResponse<T>>;

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>>;

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>>;

    /// JSON merge patch (`application/merge-patch+json`)
    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>>;

    /// Delete; any response body is ignored
    async fn delete(&self, path: &str) -> ClientResult<HttpResponse<()>>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    /// Send and reject non-2xx responses; the raw body is returned untouched
    async fn execute(&self, req: RequestBuilder) -> ClientResult<(StatusCode, HeaderMap, Vec<u8>)> {
        let response = self.authorize(req).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(ClientError::from_status(status, text));
        }

        Ok((status, headers, bytes.to_vec()))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<HttpResponse<T>> {
        let (status, headers, bytes) = self.execute(req).await?;
        let body = decode_body(&bytes)?;
        Ok(HttpResponse::new(status, body).with_headers(headers))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<HttpResponse<T>> {
        let mut req = self.client.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send(req).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>> {
        let req = self.client.post(self.url(path)).json(body);
        self.send(req).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>> {
        let req = self.client.put(self.url(path)).json(body);
        self.send(req).await
    }

    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>> {
        let bytes = serde_json::to_vec(body)?;
        let req = self
            .client
            .patch(self.url(path))
            .header(header::CONTENT_TYPE, MERGE_PATCH_JSON)
            .body(bytes);
        self.send(req).await
    }

    async fn delete(&self, path: &str) -> ClientResult<HttpResponse<()>> {
        let req = self.client.delete(self.url(path));
        let (status, headers, _) = self.execute(req).await?;
        Ok(HttpResponse::new(status, None).with_headers(headers))
    }
}
