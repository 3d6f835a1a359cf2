//! API utilities for frontend-backend communication
//!
//! Every backend response is an envelope `{ success, data, message, errors }`.
//! It is decoded here once; callers only see `Result<_, ApiError>`.

use contracts::shared::api::{parse_envelope, ApiFailure, ApiResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::config;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("{}", .0.display_message("request rejected"))]
    Rejected(ApiFailure),
}

impl ApiError {
    /// Text for the operator. Only a rejected envelope carries a message
    /// worth showing; transport problems show `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(failure) => failure.display_message(fallback),
            _ => fallback.to_string(),
        }
    }
}

/// Get the base URL for API requests
///
/// Built from the current window location, the configured port and prefix.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Just the prefix if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    let window = match web_sys::window() {
        Some(w) => w,
        None => return api.prefix.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}{}", protocol, hostname, api.port, api.prefix)
}

/// Build a full API URL from a path like "/branches/3"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append `?name=value` when `value` is present
pub fn with_query(path: &str, name: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!("{}?{}={}", path, name, urlencoding::encode(v)),
        None => path.to_string(),
    }
}

/// Turn a response body into data.
///
/// A rejected envelope wins over the HTTP status so that validation errors
/// sent with 422 still reach the form.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    let ok = (200..300).contains(&status);
    match parse_envelope::<T>(body) {
        Ok(ApiResponse::Error(failure)) => Err(ApiError::Rejected(failure)),
        Ok(ApiResponse::Ok(data)) if ok => Ok(data),
        Ok(ApiResponse::Ok(_)) => Err(ApiError::Http { status }),
        Err(_) if !ok => Err(ApiError::Http { status }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

async fn read(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

async fn send<T: DeserializeOwned>(method: &str, path: &str, request: Request) -> Result<Option<T>, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let (status, body) = read(response).await?;
    let result = decode_body(status, &body);
    if let Err(e) = &result {
        log::warn!("{} {} failed: {}", method, path, e);
    }
    result
}

async fn send_empty<T: DeserializeOwned>(method: &str, path: &str, builder: RequestBuilder) -> Result<Option<T>, ApiError> {
    let request = builder
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(method, path, request).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<Option<T>, ApiError> {
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    send(method, path, request).await
}

/// GET a list; a missing `data` is an empty list
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let data: Option<Vec<T>> = send_empty("GET", path, Request::get(&api_url(path))).await?;
    Ok(data.unwrap_or_default())
}

/// GET a single record; `data` must be present
pub async fn get_one<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let data: Option<T> = send_empty("GET", path, Request::get(&api_url(path))).await?;
    data.ok_or_else(|| ApiError::Decode(format!("no data in response to {}", path)))
}

/// POST a JSON body; whatever comes back in `data` is ignored
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json::<B, serde_json::Value>("POST", path, Request::post(&api_url(path)), body).await?;
    Ok(())
}

pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json::<B, serde_json::Value>("PUT", path, Request::put(&api_url(path)), body).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send_empty::<serde_json::Value>("DELETE", path, Request::delete(&api_url(path))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_body() {
        let data: Option<Vec<i64>> = decode_body(200, r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(data, Some(vec![1, 2]));
    }

    #[test]
    fn test_rejected_envelope_keeps_field_errors() {
        let err = decode_body::<Value>(
            422,
            r#"{"success": false, "errors": {"name": ["required"], "brand": ["too long"]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.display_message("Failed to save"), "required\ntoo long");
    }

    #[test]
    fn test_non_json_error_is_http() {
        let err = decode_body::<Value>(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 502 });
        assert_eq!(err.display_message("Failed to load"), "Failed to load");
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let err = decode_body::<Value>(200, "OK").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_success_envelope_with_error_status() {
        let err = decode_body::<Value>(500, r#"{"success": true}"#).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 500 });
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/software-licenses", "branch_id", Some("4")), "/software-licenses?branch_id=4");
        assert_eq!(with_query("/software-licenses", "branch_id", Some(" ")), "/software-licenses");
        assert_eq!(with_query("/software-licenses", "branch_id", None), "/software-licenses");
    }
}
