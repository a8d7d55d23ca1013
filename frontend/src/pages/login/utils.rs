use crate::api::{ApiError, LoginRequest};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter your password")]
    MissingPassword,
}

impl From<LoginValidationError> for ApiError {
    fn from(error: LoginValidationError) -> Self {
        ApiError::validation(error.to_string())
    }
}

pub fn build_login_request(email: &str, password: &str) -> Result<LoginRequest, LoginValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginValidationError::MissingEmail);
    }
    if password.is_empty() {
        return Err(LoginValidationError::MissingPassword);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}
