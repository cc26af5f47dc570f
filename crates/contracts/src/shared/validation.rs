//! Field-path-keyed validation results for form DTOs
//!
//! A form either validates cleanly or yields a `ValidationErrors` value
//! listing every violation at once, keyed by field path
//! (`order_details.0.no_of_diamonds`). Validation never panics and never
//! reaches the network.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// One violation, addressed by a dotted field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Ordered collection of violations for a single candidate record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for the exact field path
    pub fn first_for(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when empty, `Err(self)` otherwise
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Implemented by every form DTO submitted through the remote client
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Ten digits, nothing else
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex"));

/// Digits only (length is checked separately so the message can differ)
pub static DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits regex"));

/// GSTIN tax-registration code, fixed 15-char alphanumeric layout
pub static GSTIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("gstin regex")
});

pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// Parse a date-time as produced by `datetime-local` inputs or the API
/// (seconds and sub-seconds optional, trailing `Z` tolerated)
pub fn parse_datetime(value: &str) -> Option<chrono::NaiveDateTime> {
    let trimmed = value.trim().trim_end_matches('Z');
    if trimmed.is_empty() {
        return None;
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    // Plain date inputs come through without a time component
    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a `yyyy-mm-dd` date string
pub fn parse_date(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_errors() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        errors.push("email", "Invalid email address");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first_for("name"), Some("Name is required"));
        assert!(errors.has("email"));
        assert!(!errors.has("phone"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_gstin_pattern() {
        assert!(GSTIN_RE.is_match("22AAAAA0000A1Z5"));
        assert!(!GSTIN_RE.is_match("22AAAAA0000A0Z5")); // entity digit 0 not allowed
        assert!(!GSTIN_RE.is_match("22aaaaa0000a1z5"));
        assert!(!GSTIN_RE.is_match("22AAAAA0000A1Z"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE_RE.is_match("9876543210"));
        assert!(!PHONE_RE.is_match("987654321"));
        assert!(!PHONE_RE.is_match("98765432101"));
        assert!(!PHONE_RE.is_match("98765 4321"));
    }

    #[test]
    fn test_parse_datetime_variants() {
        assert!(parse_datetime("2024-03-15T14:02").is_some());
        assert!(parse_datetime("2024-03-15T14:02:26").is_some());
        assert!(parse_datetime("2024-03-15T14:02:26.123Z").is_some());
        assert!(parse_datetime("2024-03-15").is_some());
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("not-a-date").is_none());
    }
}
