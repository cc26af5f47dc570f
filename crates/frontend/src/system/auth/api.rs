use crate::shared::http::{self, ApiError};
use contracts::system::auth::{LoginForm, UserInfo};

/// Sign in with email and password
pub async fn login(form: &LoginForm) -> Result<UserInfo, ApiError> {
    http::post_envelope::<_, UserInfo>("/auth/login", form)
        .await?
        .ok_or_else(|| ApiError::Decode("login response carried no user".to_string()))
}
