//! Thin request helpers over `gloo-net` shared by every API module.

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 или 403: сервер требует (валидный) bearer токен
    #[error("authentication required (HTTP {0})")]
    Unauthorized(u16),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    /// Ответ получен, но браузер не смог сохранить файл
    #[error("failed to save download: {0}")]
    Download(String),
}

impl ApiError {
    /// Классификация неуспешного статуса
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized(status),
            other => ApiError::Status(other),
        }
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Value of the `Authorization` header for an optional bearer token
pub fn bearer_value(token: Option<&str>) -> Option<String> {
    token
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}

/// Добавляет bearer токен, если он есть; без токена запрос всё равно
/// уходит на сервер.
pub fn with_auth(builder: RequestBuilder, authorization: Option<&str>) -> RequestBuilder {
    match authorization {
        Some(value) => builder.header("Authorization", value),
        None => builder,
    }
}

pub async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    ensure_success(response)
}

pub fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::from_status(response.status()))
    }
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn read_bytes(response: Response) -> Result<Vec<u8>, ApiError> {
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
