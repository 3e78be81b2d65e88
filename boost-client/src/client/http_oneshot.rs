// boost-client/src/client/http_oneshot.rs
// Oneshot HTTP 客户端 - 内存通信
//
// 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Method, Request, StatusCode, header};
use reqwest::Url;
use serde::{Serialize, de::DeserializeOwned};
use shared::HttpResponse;
use tower::ServiceExt;

use super::http::HttpClient;
use super::{MERGE_PATCH_JSON, decode_body};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP 客户端 (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 适用于同进程的后端或测试替身，零网络开销。
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use boost_client::OneshotHttpClient;
///
/// let router: Router = build_backend();
/// let client = OneshotHttpClient::new(router);
/// let quotes = EntityService::<Quote, _>::new(client, &ClientConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// 创建新的 Oneshot HTTP 客户端
    ///
    /// # Arguments
    /// * `router` - 已初始化的 Axum Router (with_state 已调用)
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    /// 设置认证 token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn uri(path: &str, query: &[(String, String)]) -> ClientResult<String> {
        let path = format!("/{}", path.trim_start_matches('/'));
        if query.is_empty() {
            return Ok(path);
        }

        let mut url = Url::parse(&format!("http://in-process{}", path))
            .map_err(|e| ClientError::Internal(format!("Invalid path {}: {}", path, e)))?;
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Ok(format!("{}?{}", url.path(), url.query().unwrap_or_default()))
    }

    /// 构建请求
    fn build_request(
        &self,
        method: Method,
        uri: &str,
        content_type: &str,
        body: Body,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        builder
            .header(header::CONTENT_TYPE, content_type)
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        content_type: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let body_bytes = serde_json::to_vec(body)?;
        let uri = Self::uri(path, &[])?;
        self.build_request(method, &uri, content_type, Body::from(body_bytes))
    }

    /// 执行请求, 非 2xx 直接返回错误
    async fn execute(
        &self,
        request: Request<Body>,
    ) -> ClientResult<(StatusCode, HeaderMap, Vec<u8>)> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::from_status(status, text));
        }

        Ok((status, headers, body_bytes.to_vec()))
    }

    async fn send<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<HttpResponse<T>> {
        let (status, headers, bytes) = self.execute(request).await?;
        let body = decode_body(&bytes)?;
        Ok(HttpResponse::new(status, body).with_headers(headers))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<HttpResponse<T>> {
        let uri = Self::uri(path, query)?;
        let request = self.build_request(Method::GET, &uri, "application/json", Body::empty())?;
        self.send(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>> {
        let request = self.build_request_with_body(Method::POST, path, "application/json", body)?;
        self.send(request).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>> {
        let request = self.build_request_with_body(Method::PUT, path, "application/json", body)?;
        self.send(request).await
    }

    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<HttpResponse<T>> {
        let request = self.build_request_with_body(Method::PATCH, path, MERGE_PATCH_JSON, body)?;
        self.send(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<HttpResponse<()>> {
        let uri = Self::uri(path, &[])?;
        let request = self.build_request(Method::DELETE, &uri, "application/json", Body::empty())?;
        let (status, headers, _) = self.execute(request).await?;
        Ok(HttpResponse::new(status, None).with_headers(headers))
    }
}
