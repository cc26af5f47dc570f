use crate::shared::validation::{parse_datetime, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status shared by orders and their lots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    Started,
    Completed,
    Cancelled,
    OnHold,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::Started,
        Status::Completed,
        Status::Cancelled,
        Status::OnHold,
    ];

    /// Wire value, also used in the status filter query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Started => "STARTED",
            Status::Completed => "COMPLETED",
            Status::Cancelled => "CANCELLED",
            Status::OnHold => "ON_HOLD",
        }
    }

    /// Human-readable label for selects and badges
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Started => "Started",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
            Status::OnHold => "On Hold",
        }
    }

    pub fn from_str(value: &str) -> Option<Status> {
        Status::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

// ============================================================================
// Records (API-backed shape)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    pub id: i64,
    pub order_id: i64,
    pub no_of_diamonds: i64,
    pub price_per_caret: f64,
    pub total_caret: f64,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub party_id: i64,
    #[serde(default)]
    pub party_name: Option<String>,
    pub jagad_no: String,
    pub status: Status,
    pub received_at: String,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub delivered_by: Option<i64>,
    #[serde(default)]
    pub order_details: Vec<Lot>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// ============================================================================
// Form DTOs
// ============================================================================

/// One lot row inside the order form. Numeric fields stay `Option` until
/// the user types a parseable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotForm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub order_id: Option<i64>,
    pub no_of_diamonds: Option<i64>,
    pub price_per_caret: Option<f64>,
    pub total_caret: Option<f64>,
    pub status: Status,
}

impl Default for LotForm {
    fn default() -> Self {
        Self {
            id: None,
            order_id: None,
            no_of_diamonds: None,
            price_per_caret: None,
            total_caret: None,
            status: Status::Pending,
        }
    }
}

impl LotForm {
    pub fn from_record(lot: &Lot) -> Self {
        Self {
            id: Some(lot.id),
            order_id: Some(lot.order_id),
            no_of_diamonds: Some(lot.no_of_diamonds),
            price_per_caret: Some(lot.price_per_caret),
            total_caret: Some(lot.total_caret),
            status: lot.status,
        }
    }

    /// Field-level rules, reported under `<path>.<field>` (or the bare
    /// field name when validated standalone)
    fn validate_at(&self, path: &str, errors: &mut ValidationErrors) {
        match self.no_of_diamonds {
            None => errors.push(
                field_path(path, "no_of_diamonds"),
                "Number of diamonds is required",
            ),
            Some(n) if n <= 0 => errors.push(
                field_path(path, "no_of_diamonds"),
                "Number of diamonds must be greater than 0",
            ),
            _ => {}
        }
        match self.price_per_caret {
            None => errors.push(
                field_path(path, "price_per_caret"),
                "Price per carat is required",
            ),
            Some(p) if p <= 0.0 => errors.push(
                field_path(path, "price_per_caret"),
                "Price per carat must be greater than 0",
            ),
            _ => {}
        }
        match self.total_caret {
            None => errors.push(field_path(path, "total_caret"), "Total carats is required"),
            Some(c) if c <= 0.0 => errors.push(
                field_path(path, "total_caret"),
                "Total carats must be greater than 0",
            ),
            _ => {}
        }
    }
}

fn field_path(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

/// Standalone validation for the single-lot dialog; errors use bare
/// field names
impl Validate for LotForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.validate_at("", &mut errors);
        errors.into_result()
    }
}

/// Order create/update payload, nested lots included. Lots removed in the
/// form keep their ids in `removed_lot_ids` so the server can hard-delete
/// them on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub id: Option<i64>,
    pub party_id: Option<i64>,
    pub jagad_no: String,
    pub status: Status,
    pub received_at: String,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub delivered_by: Option<i64>,
    pub order_details: Vec<LotForm>,
    #[serde(default)]
    pub removed_lot_ids: Vec<i64>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            id: None,
            party_id: None,
            jagad_no: String::new(),
            status: Status::Pending,
            received_at: String::new(),
            delivered_at: None,
            delivered_by: None,
            order_details: vec![LotForm::default()],
            removed_lot_ids: Vec::new(),
        }
    }
}

impl OrderForm {
    pub fn from_record(order: &Order) -> Self {
        Self {
            id: Some(order.id),
            party_id: Some(order.party_id),
            jagad_no: order.jagad_no.clone(),
            status: order.status,
            received_at: order.received_at.clone(),
            delivered_at: order.delivered_at.clone(),
            delivered_by: order.delivered_by,
            order_details: order.order_details.iter().map(LotForm::from_record).collect(),
            removed_lot_ids: Vec::new(),
        }
    }
}

impl Validate for OrderForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match self.party_id {
            Some(id) if id >= 1 => {}
            _ => errors.push("party_id", "Party is required"),
        }
        if self.jagad_no.trim().is_empty() {
            errors.push("jagad_no", "Jagad number is required");
        }

        let received = match parse_datetime(&self.received_at) {
            Some(dt) => {
                if dt > chrono::Utc::now().naive_utc() {
                    errors.push("received_at", "Received date cannot be in the future");
                }
                Some(dt)
            }
            None => {
                errors.push("received_at", "Received date is required");
                None
            }
        };

        let delivered = match self.delivered_at.as_deref().filter(|v| !v.trim().is_empty()) {
            Some(raw) => match parse_datetime(raw) {
                Some(dt) => Some(dt),
                None => {
                    errors.push("delivered_at", "Delivered date must be a valid date");
                    None
                }
            },
            None => None,
        };

        if self.order_details.is_empty() {
            errors.push("order_details", "At least one lot is required");
        }
        for (index, lot) in self.order_details.iter().enumerate() {
            lot.validate_at(&format!("order_details.{index}"), &mut errors);
        }

        // Cross-field refinements run only on a field-level-clean record
        if !errors.is_empty() {
            return Err(errors);
        }

        let delivered_at_set = delivered.is_some();
        let delivered_by_set = self.delivered_by.is_some();
        if delivered_at_set != delivered_by_set {
            errors.push(
                "delivered_by",
                "Both Delivered At and Delivered By must be filled or both must be empty",
            );
        }

        if let (Some(received), Some(delivered)) = (received, delivered) {
            if delivered < received {
                errors.push("delivered_at", "Delivered date cannot be before Received date");
            }
        }

        if self.status == Status::Completed
            && self.order_details.iter().any(|lot| lot.status != Status::Completed)
        {
            errors.push(
                "order_details",
                "All lot statuses must be COMPLETED when order status is COMPLETED",
            );
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lot() -> LotForm {
        LotForm {
            id: None,
            order_id: None,
            no_of_diamonds: Some(25),
            price_per_caret: Some(1450.0),
            total_caret: Some(12.5),
            status: Status::Pending,
        }
    }

    fn valid_form() -> OrderForm {
        OrderForm {
            id: None,
            party_id: Some(3),
            jagad_no: "JGD-118".to_string(),
            status: Status::Pending,
            received_at: "2024-03-10T09:30".to_string(),
            delivered_at: None,
            delivered_by: None,
            order_details: vec![valid_lot()],
            removed_lot_ids: Vec::new(),
        }
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_field_errors_reported_together() {
        let mut form = valid_form();
        form.party_id = None;
        form.jagad_no = "  ".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.has("party_id"));
        assert!(errors.has("jagad_no"));
    }

    #[test]
    fn test_received_in_future_rejected() {
        let mut form = valid_form();
        let tomorrow = chrono::Utc::now().naive_utc() + chrono::Duration::days(1);
        form.received_at = tomorrow.format("%Y-%m-%dT%H:%M").to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("received_at"),
            Some("Received date cannot be in the future")
        );
    }

    #[test]
    fn test_delivered_at_without_delivered_by_rejected() {
        let mut form = valid_form();
        form.delivered_at = Some("2024-03-11T10:00".to_string());
        let errors = form.validate().unwrap_err();
        assert!(errors.has("delivered_by"));
    }

    #[test]
    fn test_delivered_by_without_delivered_at_rejected() {
        let mut form = valid_form();
        form.delivered_by = Some(4);
        let errors = form.validate().unwrap_err();
        assert!(errors.has("delivered_by"));
    }

    #[test]
    fn test_delivered_pair_accepted() {
        let mut form = valid_form();
        form.delivered_at = Some("2024-03-11T10:00".to_string());
        form.delivered_by = Some(4);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_delivered_before_received_rejected() {
        let mut form = valid_form();
        form.delivered_at = Some("2024-03-09T10:00".to_string());
        form.delivered_by = Some(4);
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("delivered_at"),
            Some("Delivered date cannot be before Received date")
        );
    }

    #[test]
    fn test_completed_order_requires_completed_lots() {
        let mut form = valid_form();
        form.status = Status::Completed;
        form.order_details[0].status = Status::Started;
        let errors = form.validate().unwrap_err();
        assert!(errors.has("order_details"));

        form.order_details[0].status = Status::Completed;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_at_least_one_lot_required() {
        let mut form = valid_form();
        form.order_details.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("order_details"),
            Some("At least one lot is required")
        );
    }

    #[test]
    fn test_lot_bounds() {
        let mut form = valid_form();
        form.order_details[0].no_of_diamonds = Some(0);
        form.order_details[0].price_per_caret = Some(-1.0);
        form.order_details[0].total_caret = None;
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("order_details.0.no_of_diamonds"),
            Some("Number of diamonds must be greater than 0")
        );
        assert!(errors.has("order_details.0.price_per_caret"));
        assert_eq!(
            errors.first_for("order_details.0.total_caret"),
            Some("Total carats is required")
        );
    }

    #[test]
    fn test_refinements_skipped_until_fields_pass() {
        // Broken field rule and a broken refinement: only the field error
        // is reported on the first pass
        let mut form = valid_form();
        form.jagad_no = String::new();
        form.delivered_at = Some("2024-03-11T10:00".to_string());
        let errors = form.validate().unwrap_err();
        assert!(errors.has("jagad_no"));
        assert!(!errors.has("delivered_by"));
    }

    #[test]
    fn test_standalone_lot_uses_bare_field_paths() {
        let lot = LotForm {
            no_of_diamonds: Some(0),
            ..LotForm::default()
        };
        let errors = lot.validate().unwrap_err();
        assert_eq!(
            errors.first_for("no_of_diamonds"),
            Some("Number of diamonds must be greater than 0")
        );
        assert!(errors.has("price_per_caret"));
        assert!(valid_lot().validate().is_ok());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&Status::OnHold).unwrap(), "\"ON_HOLD\"");
        assert_eq!(Status::from_str("CANCELLED"), Some(Status::Cancelled));
        assert_eq!(Status::from_str("UNKNOWN"), None);
    }
}
