use crate::shared::validation::{Validate, ValidationErrors, EMAIL_RE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push("email", "Invalid email address");
        }
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let form = LoginForm {
            email: "admin@desk.example".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(form.validate().is_ok());

        let form = LoginForm {
            email: "nope".to_string(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has("email"));
        assert!(errors.has("password"));
    }
}
