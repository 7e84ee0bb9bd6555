//! The network-call capability the client depends on.
//!
//! `ApiClient` only ever sees `ApiRequest` in and `ApiResponse` out, so tests
//! substitute an in-memory transport and production wires in
//! [`ReqwestTransport`].

use std::time::Duration;

use reqwest::Method;

use crate::errors::Result;

/// A single outbound request. Query parameters are kept as an ordered list;
/// the transport must emit them in the order given.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json(mut self, value: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self
    }

    pub fn with_multipart(mut self, form: ScreenshotUpload) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    /// Sent with a JSON content type.
    Json(serde_json::Value),
    /// Sent as multipart form data. Only the screenshot upload uses this.
    Multipart(ScreenshotUpload),
}

#[derive(Clone, Debug)]
pub struct ScreenshotUpload {
    pub description: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw response as the transport saw it. Header names are lowercased by
/// reqwest; fakes should do the same.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// One fire-and-forget round trip. Transport failures surface as errors;
/// HTTP error statuses come back as ordinary responses for the client layer
/// to interpret.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Production transport over a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .connect_timeout(Duration::from_secs(6))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);
        tracing::debug!(method = %request.method, %url, "dispatching request");

        let mut builder = self.client.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        match request.body {
            Some(RequestBody::Json(payload)) => {
                builder = builder.json(&payload);
            }
            Some(RequestBody::Multipart(upload)) => {
                let part = reqwest::multipart::Part::bytes(upload.bytes)
                    .file_name(upload.file_name);
                let form = reqwest::multipart::Form::new()
                    .text("description", upload.description)
                    .part("screenshot", part);
                builder = builder.multipart(form);
            }
            None => {}
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
