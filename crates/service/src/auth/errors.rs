use serde::Serialize;
use thiserror::Error;

/// One field-level validation issue; lists keep schema order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

/// Business errors for credential workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("User with this email already exists")]
    DuplicateEmail,
    // Deliberately identical for unknown email and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Registration failed: {0}")]
    Registration(String),
    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::DuplicateEmail => 1002,
            AuthError::InvalidCredentials => 1003,
            AuthError::Registration(_) => 1101,
            AuthError::Authentication(_) => 1102,
        }
    }
}
