//! Wire envelopes shared by every entity endpoint
//!
//! Mutating endpoints answer `{ "response_type": "success"|"error",
//! "data"|"message": ... }` and the client branches on `response_type`,
//! never on the HTTP status alone. List endpoints wrap their page as
//! `{ "data": { "data": [...], "totalPages": n } }`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Error,
}

/// Mutation response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub response_type: ResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.response_type == ResponseType::Success
    }

    /// Success payload, or the server-supplied message (generic fallback
    /// when the server sent none)
    pub fn into_result(self) -> Result<Option<T>, String> {
        match self.response_type {
            ResponseType::Success => Ok(self.data),
            ResponseType::Error => Err(self
                .message
                .unwrap_or_else(|| "Request failed".to_string())),
        }
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData<T> {
    pub data: Vec<T>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: usize,
}

/// Outer wrapper of every `get/all` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: PageData<T>,
}

/// Wrapper of single-record `get?id=` responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEnvelope<T> {
    pub data: T,
}

/// `allIdsAndNames` entry used by picker dropdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdAndName {
    pub id: i64,
    pub name: String,
}

/// Body of every `DELETE /<entity>/delete` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let raw = r#"{"response_type":"success","data":{"id":7}}"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(parsed.is_success());
        let data = parsed.into_result().unwrap().unwrap();
        assert_eq!(data["id"], 7);
    }

    #[test]
    fn test_error_envelope_uses_server_message() {
        let raw = r#"{"response_type":"error","message":"Order not found"}"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_result().unwrap_err(), "Order not found");
    }

    #[test]
    fn test_error_envelope_without_message_falls_back() {
        let raw = r#"{"response_type":"error"}"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_result().unwrap_err(), "Request failed");
    }

    #[test]
    fn test_list_envelope_total_pages() {
        let raw = r#"{"data":{"data":[{"id":1},{"id":2}],"totalPages":9}}"#;
        let parsed: ListEnvelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data.data.len(), 2);
        assert_eq!(parsed.data.total_pages, 9);
    }
}
