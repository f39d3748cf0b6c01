use super::domain::{LoginInput, RegisterInput};
use super::errors::FieldError;

/// Explicit validator interface: each input validates into either a typed
/// value (itself, unchanged) or an ordered list of field issues. Any other
/// validation engine can be substituted by replacing these impls.
pub trait ValidateInput {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // Require a dotted domain, not at either edge
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

impl ValidateInput for RegisterInput {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut issues = Vec::new();
        if !is_valid_email(&self.email) {
            issues.push(FieldError::new("email", "Invalid email address"));
        }
        if self.password.chars().count() < 6 {
            issues.push(FieldError::new("password", "Password must be at least 6 characters"));
        }
        if let Some(name) = &self.name {
            if name.is_empty() {
                issues.push(FieldError::new("name", "Name is required"));
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

impl ValidateInput for LoginInput {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut issues = Vec::new();
        if !is_valid_email(&self.email) {
            issues.push(FieldError::new("email", "Invalid email address"));
        }
        if self.password.is_empty() {
            issues.push(FieldError::new("password", "Password is required"));
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
