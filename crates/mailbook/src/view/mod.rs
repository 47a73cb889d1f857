//! View components for the application.

mod customer_form;
mod email_form;
mod header;
mod home;
mod listing;
mod settings;

pub use customer_form::view_customer_form;
pub use email_form::view_email_form;
pub use header::view_header;
pub use home::view_home;
pub use listing::view_listing;
pub use settings::view_settings;

/// Classifies a status/feedback line as an error for styling purposes.
///
/// The backend answers in prose (Spanish), so this keyword match covers
/// both its verdicts and our own English messages.
#[must_use]
pub fn is_error_text(message: &str) -> bool {
    let lower = message.to_lowercase();
    ["error", "failed", "required", "invalid", "no existe", "no se ha"]
        .iter()
        .any(|needle| lower.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_keywords_are_detected() {
        assert!(is_error_text("Failed to load customers: HTTP 500"));
        assert!(is_error_text("Invalid email address format"));
        assert!(is_error_text(
            "No existe un cliente con el DNI: 9. No se ha agregado un correo nuevo."
        ));
        assert!(!is_error_text("Correo agregado correctamente"));
        assert!(!is_error_text("Customer key copied to clipboard"));
    }
}
