//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use mailbook_api::{Customer, Email};
use mailbook_core::DeleteOutcome;

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Navigate to a different view.
    NavigateTo(View),

    // Listing
    /// Reload both collections from the backend.
    Refresh,
    /// Customers fetch completed.
    CustomersLoaded(Result<Vec<Customer>, String>),
    /// Emails fetch completed.
    EmailsLoaded(Result<Vec<Email>, String>),
    /// Show or hide a customer's email sublist.
    ToggleExpand(String),
    /// Ask to delete an email (opens the confirmation bar).
    RequestDeleteEmail(u32, String),
    /// The user accepted the pending delete.
    ConfirmDelete,
    /// The user dismissed the pending delete.
    CancelDelete,
    /// Delete flow finished.
    DeleteFinished(DeleteOutcome),
    /// Copy a customer key to the clipboard.
    CopyCustomerKey(String),
    /// Copy an email address to the clipboard.
    CopyEmailAddress(String),

    // Forms
    /// Create-customer form messages.
    CustomerForm(CustomerFormMessage),
    /// Create-customer request completed.
    CustomerSaved(Result<String, String>),
    /// Create-email form messages.
    EmailForm(EmailFormMessage),
    /// Create-email request completed.
    EmailSaved(Result<String, String>),

    // Settings
    /// Settings screen messages.
    Settings(SettingsMessage),
    /// Settings loaded from disk at startup.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings persisted to disk.
    SettingsSaved(Result<(), String>),

    // Keyboard
    /// A non-shortcut key event; ignored.
    NoOp,
}

/// Messages for the create-customer form.
#[derive(Debug, Clone)]
pub enum CustomerFormMessage {
    /// Customer key (natural id) changed.
    KeyChanged(String),
    /// First name changed.
    FirstNameChanged(String),
    /// Last name changed.
    LastNameChanged(String),
    /// Submit the form.
    Submit,
    /// Clear all fields and feedback.
    Clear,
}

/// Messages for the create-email form.
#[derive(Debug, Clone)]
pub enum EmailFormMessage {
    /// Owning customer key changed.
    KeyChanged(String),
    /// Email address changed.
    AddressChanged(String),
    /// Submit the form.
    Submit,
    /// Clear all fields and feedback.
    Clear,
}

/// Messages for the settings screen.
#[derive(Debug, Clone)]
pub enum SettingsMessage {
    /// Backend base URL input changed.
    BaseUrlChanged(String),
    /// Apply and persist the entered base URL.
    Apply,
    /// Toggle between light and dark theme.
    ToggleTheme,
}

/// Application views/screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen with shortcuts to the three workflows.
    #[default]
    Home,
    /// Create-customer form.
    CreateCustomer,
    /// Create-email form.
    CreateEmail,
    /// Combined customer/email listing.
    Listing,
    /// Settings screen.
    Settings,
}
