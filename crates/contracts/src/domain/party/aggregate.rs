use crate::shared::validation::{Validate, ValidationErrors, DIGITS_RE, EMAIL_RE, GSTIN_RE};
use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub address: String,
    pub landmark: String,
    pub pincode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub personal_phone: Option<String>,
    #[serde(default)]
    pub office_phone: Option<String>,
    #[serde(default)]
    pub gstin_no: Option<String>,
    #[serde(default)]
    pub party_addresses: Vec<Address>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// ============================================================================
// Form DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressForm {
    #[serde(default)]
    pub id: Option<i64>,
    pub address: String,
    pub landmark: String,
    pub pincode: String,
}

impl Default for AddressForm {
    fn default() -> Self {
        Self {
            id: None,
            address: String::new(),
            landmark: String::new(),
            pincode: String::new(),
        }
    }
}

impl AddressForm {
    pub fn from_record(record: &Address) -> Self {
        Self {
            id: Some(record.id),
            address: record.address.clone(),
            landmark: record.landmark.clone(),
            pincode: record.pincode.clone(),
        }
    }

    fn validate_at(&self, path: &str, errors: &mut ValidationErrors) {
        if self.address.trim().is_empty() {
            errors.push(format!("{path}.address"), "Address is required");
        }
        if self.landmark.trim().is_empty() {
            errors.push(format!("{path}.landmark"), "Landmark is required");
        }
        if self.pincode.len() != 6 {
            errors.push(format!("{path}.pincode"), "Pincode must be 6 digits");
        } else if !DIGITS_RE.is_match(&self.pincode) {
            errors.push(format!("{path}.pincode"), "Pincode must contain only numbers");
        }
    }
}

/// Party create/update payload with its repeatable addresses. Removed
/// persisted addresses ride along in `removed_address_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyForm {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub personal_phone: String,
    pub office_phone: String,
    #[serde(default)]
    pub gstin_no: String,
    pub party_addresses: Vec<AddressForm>,
    #[serde(default)]
    pub removed_address_ids: Vec<i64>,
}

impl Default for PartyForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            personal_phone: String::new(),
            office_phone: String::new(),
            gstin_no: String::new(),
            party_addresses: vec![AddressForm::default()],
            removed_address_ids: Vec::new(),
        }
    }
}

impl PartyForm {
    pub fn from_record(party: &Party) -> Self {
        Self {
            id: Some(party.id),
            name: party.name.clone(),
            email: party.email.clone().unwrap_or_default(),
            personal_phone: party.personal_phone.clone().unwrap_or_default(),
            office_phone: party.office_phone.clone().unwrap_or_default(),
            gstin_no: party.gstin_no.clone().unwrap_or_default(),
            party_addresses: party
                .party_addresses
                .iter()
                .map(AddressForm::from_record)
                .collect(),
            removed_address_ids: Vec::new(),
        }
    }
}

impl Validate for PartyForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push("name", "Name is required");
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push("email", "Invalid email address");
        }
        if self.personal_phone.trim().is_empty() {
            errors.push("personal_phone", "Phone number is required");
        }
        if self.office_phone.trim().is_empty() {
            errors.push("office_phone", "Office phone number is required");
        }
        // GSTIN is optional; an empty string means "not registered"
        if !self.gstin_no.is_empty() && !GSTIN_RE.is_match(&self.gstin_no) {
            errors.push("gstin_no", "Invalid GST number");
        }

        if self.party_addresses.is_empty() {
            errors.push("party_addresses", "At least one address is required");
        }
        for (index, address) in self.party_addresses.iter().enumerate() {
            address.validate_at(&format!("party_addresses.{index}"), &mut errors);
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> AddressForm {
        AddressForm {
            id: None,
            address: "14 Ring Road".to_string(),
            landmark: "Opp. city mall".to_string(),
            pincode: "395007".to_string(),
        }
    }

    fn valid_form() -> PartyForm {
        PartyForm {
            id: None,
            name: "Mehta Gems".to_string(),
            email: "contact@mehtagems.example".to_string(),
            personal_phone: "9876543210".to_string(),
            office_phone: "0261234567".to_string(),
            gstin_no: String::new(),
            party_addresses: vec![valid_address()],
            removed_address_ids: Vec::new(),
        }
    }

    #[test]
    fn test_valid_party_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_at_least_one_address() {
        let mut form = valid_form();
        form.party_addresses.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("party_addresses"),
            Some("At least one address is required")
        );
    }

    #[test]
    fn test_pincode_length() {
        for bad in ["39500", "3950071"] {
            let mut form = valid_form();
            form.party_addresses[0].pincode = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.first_for("party_addresses.0.pincode"),
                Some("Pincode must be 6 digits")
            );
        }
        let mut form = valid_form();
        form.party_addresses[0].pincode = "39500a".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("party_addresses.0.pincode"),
            Some("Pincode must contain only numbers")
        );
    }

    #[test]
    fn test_six_digit_pincode_accepted() {
        let mut form = valid_form();
        form.party_addresses[0].pincode = "400001".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_gstin_optional_but_checked() {
        let mut form = valid_form();
        form.gstin_no = "22AAAAA0000A1Z5".to_string();
        assert!(form.validate().is_ok());

        form.gstin_no = "not-a-gstin".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first_for("gstin_no"), Some("Invalid GST number"));
    }

    #[test]
    fn test_email_checked() {
        let mut form = valid_form();
        form.email = "broken-at-nowhere".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first_for("email"), Some("Invalid email address"));
    }
}
