use crate::shared::validation::{Validate, ValidationErrors, PHONE_RE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_str(value: &str) -> Option<Gender> {
        Gender::ALL.iter().copied().find(|g| g.as_str() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub age: i64,
    pub primary_phone: String,
    #[serde(default)]
    pub secondary_phone: Option<String>,
    pub address: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Staff create/update payload. `gender` stays a raw string until submit so
/// the select can hold an unset placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffForm {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: Option<i64>,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub address: String,
}

impl Default for StaffForm {
    fn default() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            gender: String::new(),
            age: None,
            primary_phone: String::new(),
            secondary_phone: String::new(),
            address: String::new(),
        }
    }
}

impl StaffForm {
    pub fn from_record(staff: &StaffMember) -> Self {
        Self {
            id: Some(staff.id),
            first_name: staff.first_name.clone(),
            last_name: staff.last_name.clone(),
            gender: staff.gender.as_str().to_string(),
            age: Some(staff.age),
            primary_phone: staff.primary_phone.clone(),
            secondary_phone: staff.secondary_phone.clone().unwrap_or_default(),
            address: staff.address.clone(),
        }
    }
}

impl Validate for StaffForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.first_name.trim().is_empty() {
            errors.push("first_name", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.push("last_name", "Last name is required");
        }
        if Gender::from_str(&self.gender).is_none() {
            errors.push("gender", "Gender is required");
        }
        match self.age {
            None => errors.push("age", "Age is required"),
            // 18 itself is accepted
            Some(age) if age < 18 => errors.push("age", "Age must be greater than 18"),
            _ => {}
        }
        if self.primary_phone.trim().is_empty() {
            errors.push("primary_phone", "Phone number is required");
        } else if !PHONE_RE.is_match(&self.primary_phone) {
            errors.push("primary_phone", "Invalid phone number");
        }
        if self.secondary_phone.trim().is_empty() {
            errors.push("secondary_phone", "Secondary phone number is required");
        } else if !PHONE_RE.is_match(&self.secondary_phone) {
            errors.push("secondary_phone", "Invalid phone number");
        }
        if self.address.trim().is_empty() {
            errors.push("address", "Address is required");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> StaffForm {
        StaffForm {
            id: None,
            first_name: "Asha".to_string(),
            last_name: "Patel".to_string(),
            gender: "female".to_string(),
            age: Some(26),
            primary_phone: "9876543210".to_string(),
            secondary_phone: "9123456780".to_string(),
            address: "7 Diamond Lane".to_string(),
        }
    }

    #[test]
    fn test_valid_staff_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_age_boundary() {
        let mut form = valid_form();
        form.age = Some(17);
        assert!(form.validate().unwrap_err().has("age"));

        form.age = Some(18);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_phone_length() {
        for bad in ["987654321", "98765432101"] {
            let mut form = valid_form();
            form.primary_phone = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.first_for("primary_phone"), Some("Invalid phone number"));
        }
        let mut form = valid_form();
        form.secondary_phone = "12345".to_string();
        assert!(form.validate().unwrap_err().has("secondary_phone"));
    }

    #[test]
    fn test_gender_must_be_known() {
        let mut form = valid_form();
        form.gender = String::new();
        assert!(form.validate().unwrap_err().has("gender"));
        form.gender = "unknown".to_string();
        assert!(form.validate().unwrap_err().has("gender"));
    }

    #[test]
    fn test_gender_wire_format() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(Gender::from_str("other"), Some(Gender::Other));
    }
}
