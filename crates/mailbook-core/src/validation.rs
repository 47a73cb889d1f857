//! Form-input validation for the create-customer and create-email forms.
//!
//! The backend performs its own checks and answers with a plain-text
//! verdict; these validations only catch the obvious cases before a round
//! trip is spent.

use thiserror::Error;

/// Validation error for form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The customer key field is empty.
    #[error("Customer key is required")]
    EmptyKey,
    /// The first-name field is empty.
    #[error("First name is required")]
    EmptyFirstName,
    /// The last-name field is empty.
    #[error("Last name is required")]
    EmptyLastName,
    /// The email address field is empty.
    #[error("Email address is required")]
    EmptyAddress,
    /// The email address does not look like `local@domain.tld`.
    #[error("Invalid email address format")]
    InvalidAddress,
}

/// Result of validating a form.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validates the create-customer form. All fields are required after
/// trimming.
///
/// # Errors
///
/// Returns every failed check, not just the first.
pub fn validate_customer_form(key: &str, first_name: &str, last_name: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if key.trim().is_empty() {
        errors.push(ValidationError::EmptyKey);
    }
    if first_name.trim().is_empty() {
        errors.push(ValidationError::EmptyFirstName);
    }
    if last_name.trim().is_empty() {
        errors.push(ValidationError::EmptyLastName);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates the create-email form: key required, address required and
/// roughly well-formed.
///
/// # Errors
///
/// Returns every failed check, not just the first.
pub fn validate_email_form(key: &str, address: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if key.trim().is_empty() {
        errors.push(ValidationError::EmptyKey);
    }
    if address.trim().is_empty() {
        errors.push(ValidationError::EmptyAddress);
    } else if !is_valid_email(address) {
        errors.push(ValidationError::InvalidAddress);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Basic email validation: one `@`, non-empty local part, dotted domain
/// with no empty labels.
fn is_valid_email(address: &str) -> bool {
    let address = address.trim();

    let parts: Vec<&str> = address.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user@sub.example.com"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@example..com"));
    }

    #[test]
    fn customer_form_requires_all_fields() {
        let errors = validate_customer_form("  ", "Ana", "").unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyKey, ValidationError::EmptyLastName]
        );
        assert!(validate_customer_form("1", "Ana", "Li").is_ok());
    }

    #[test]
    fn email_form_checks_format_only_when_present() {
        let errors = validate_email_form("1", "").unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyAddress]);

        let errors = validate_email_form("1", "nope").unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidAddress]);

        assert!(validate_email_form("1", "a@b.com").is_ok());
    }
}
