use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ApiError, Result};
use crate::models::ListResult;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, ScreenshotUpload};

/// Maps raw transport responses into typed results. One instance is shared
/// by all resource services; it holds no state beyond the transport.
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.get_with_query(path, Vec::new()).await
    }

    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<R> {
        let response = self
            .execute(ApiRequest::new(Method::GET, path).with_query(query))
            .await?;
        decode(&response.body)
    }

    /// List fetch that also surfaces the `total-count` header. A missing or
    /// non-numeric header yields `total: None`.
    pub async fn get_with_total<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<ListResult<R>> {
        let response = self
            .execute(ApiRequest::new(Method::GET, path).with_query(query))
            .await?;
        let total = response
            .header("total-count")
            .and_then(|value| value.parse::<u64>().ok());
        let items = decode(&response.body)?;
        Ok(ListResult { items, total })
    }

    pub async fn post<R: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<R: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<R> {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn patch<R: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        self.send_json(Method::PATCH, path, body).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.execute(ApiRequest::new(Method::DELETE, path)).await?;
        decode(&response.body)
    }

    /// The screenshot upload is the one multipart endpoint.
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        upload: ScreenshotUpload,
    ) -> Result<R> {
        let response = self
            .execute(ApiRequest::new(Method::POST, path).with_multipart(upload))
            .await?;
        decode(&response.body)
    }

    async fn send_json<R: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let payload = serde_json::to_value(body)?;
        let response = self
            .execute(ApiRequest::new(method, path).with_json(payload))
            .await?;
        decode(&response.body)
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.transport.send(request).await?;
        if !(200..300).contains(&response.status) {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            tracing::warn!(status = response.status, "request failed");
            return Err(ApiError::Http {
                status: response.status,
                body,
            });
        }
        Ok(response)
    }
}

/// Some mutation endpoints answer with an empty body; treat that as JSON
/// `null` so callers asking for `serde_json::Value` get `Null` back.
fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    if body.is_empty() {
        Ok(serde_json::from_slice(b"null")?)
    } else {
        Ok(serde_json::from_slice(body)?)
    }
}
