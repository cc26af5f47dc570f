//! List request descriptor
//!
//! Deterministic description of one list fetch. Equality of two descriptors
//! means the same page of data; the frontend memoizes fetches and discards
//! stale responses by comparing descriptors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Parameters of a `get/all` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    pub page: usize,
    pub limit: usize,
    #[serde(default)]
    pub search: String,
    #[serde(rename = "dateFrom", default)]
    pub date_from: Option<String>,
    #[serde(rename = "dateTo", default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub sort: String,
    pub order: SortOrder,
}

impl ListRequest {
    pub fn new(limit: usize, sort: &str) -> Self {
        Self {
            page: 1,
            limit,
            search: String::new(),
            date_from: None,
            date_to: None,
            status: None,
            sort: sort.to_string(),
            order: SortOrder::Asc,
        }
    }

    /// Stable query-string form, empty filters omitted. Key order is fixed
    /// so equal descriptors always serialize identically.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.limit);
        if !self.search.is_empty() {
            query.push_str(&format!("&search={}", encode(&self.search)));
        }
        if let Some(from) = self.date_from.as_deref().filter(|v| !v.is_empty()) {
            query.push_str(&format!("&dateFrom={}", encode(from)));
        }
        if let Some(to) = self.date_to.as_deref().filter(|v| !v.is_empty()) {
            query.push_str(&format!("&dateTo={}", encode(to)));
        }
        if let Some(status) = self.status.as_deref().filter(|v| !v.is_empty()) {
            query.push_str(&format!("&status={}", encode(status)));
        }
        query.push_str(&format!("&sort={}&order={}", encode(&self.sort), self.order.as_str()));
        query
    }
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_omits_empty_filters() {
        let request = ListRequest::new(10, "id");
        assert_eq!(request.to_query_string(), "page=1&limit=10&sort=id&order=ASC");
    }

    #[test]
    fn test_query_string_includes_all_filters() {
        let mut request = ListRequest::new(10, "received_at");
        request.page = 3;
        request.search = "jagad 42".to_string();
        request.date_from = Some("2025-01-01".to_string());
        request.date_to = Some("2025-01-31".to_string());
        request.status = Some("PENDING".to_string());
        request.order = SortOrder::Desc;
        assert_eq!(
            request.to_query_string(),
            "page=3&limit=10&search=jagad%2042&dateFrom=2025-01-01&dateTo=2025-01-31\
             &status=PENDING&sort=received_at&order=DESC"
        );
    }

    #[test]
    fn test_descriptor_equality() {
        let a = ListRequest::new(10, "id");
        let mut b = ListRequest::new(10, "id");
        assert_eq!(a, b);
        b.status = Some("PENDING".to_string());
        assert_ne!(a, b);
    }
}
