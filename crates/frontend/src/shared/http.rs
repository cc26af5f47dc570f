//! Remote data client
//!
//! Thin wrappers over `gloo-net`. Mutating endpoints answer the
//! `{ response_type, data | message }` envelope, so success is decided by
//! the envelope body, not by the HTTP status alone.

use crate::shared::api_utils::api_url;
use contracts::shared::envelope::{ApiResponse, DeleteRequest};
use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure, request never produced a response
    Network(String),
    /// Non-2xx status without a parseable envelope
    Http(u16),
    /// Server answered `response_type: "error"`
    Application(String),
    /// Body could not be decoded as the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Http(status) => write!(f, "Server returned status {}", status),
            ApiError::Application(message) => write!(f, "{}", message),
            ApiError::Decode(e) => write!(f, "Unexpected response: {}", e),
        }
    }
}

/// GET a plain JSON body (list and single-record envelopes)
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body and branch on the response envelope
pub async fn post_envelope<B, T>(path: &str, body: &B) -> Result<Option<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    send_with_body(Method::POST, path, body).await
}

/// PUT a JSON body and branch on the response envelope
pub async fn put_envelope<B, T>(path: &str, body: &B) -> Result<Option<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    send_with_body(Method::PUT, path, body).await
}

/// DELETE by id (`{ "id": n }` body) and branch on the response envelope
pub async fn delete_envelope(path: &str, id: i64) -> Result<(), ApiError> {
    let _: Option<serde_json::Value> =
        send_with_body(Method::DELETE, path, &DeleteRequest { id }).await?;
    Ok(())
}

/// POST that expects a raw binary document back (bill generation).
///
/// A JSON answer here always means the server refused, so it is parsed as
/// an error envelope and never handed to the caller as document bytes.
pub async fn post_binary<B: Serialize>(path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
    let response = gloo_net::http::Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_default();
    if content_type.contains("application/json") {
        let status = response.status();
        return match response.json::<ApiResponse<serde_json::Value>>().await {
            Ok(envelope) => match envelope.into_result() {
                Ok(_) => Err(ApiError::Decode("expected a binary document".to_string())),
                Err(message) => Err(ApiError::Application(message)),
            },
            Err(_) => Err(ApiError::Http(status)),
        };
    }

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_with_body<B, T>(method: Method, path: &str, body: &B) -> Result<Option<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = RequestBuilder::new(&api_url(path))
        .method(method)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    parse_envelope(response).await
}

async fn parse_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let status = response.status();
    match response.json::<ApiResponse<T>>().await {
        Ok(envelope) => envelope.into_result().map_err(ApiError::Application),
        // No envelope in the body: fall back to the HTTP status
        Err(_) if status >= 400 => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::Application("Order not found".to_string()).to_string(),
            "Order not found"
        );
        assert_eq!(ApiError::Http(502).to_string(), "Server returned status 502");
        assert_eq!(
            ApiError::Network("timed out".to_string()).to_string(),
            "Network error: timed out"
        );
    }
}
