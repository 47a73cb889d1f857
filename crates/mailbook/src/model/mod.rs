//! Data models for the application.

mod customer_form;
mod email_form;
mod settings;

pub use customer_form::CustomerFormState;
pub use email_form::EmailFormState;
pub use settings::{AppSettings, DEFAULT_BASE_URL, SettingsState};

/// An email delete waiting for the user's confirmation.
///
/// Deleting is irrecoverable, so the listing renders a confirmation bar
/// before anything is sent; this holds what the bar refers to.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    /// Id of the email to delete.
    pub id: u32,
    /// Address shown in the prompt.
    pub address: String,
}
