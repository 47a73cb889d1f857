//! Mailbook - desktop client for managing customers and their email
//! addresses against a REST backend.
//!
//! Built with Rust and the iced GUI framework.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod host;
mod message;
mod model;
mod style;
mod view;

use iced::keyboard::{self, Key};
use iced::widget::column;
use iced::{Element, Subscription, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailbook_api::{ApiClient, Customer, Email};
use mailbook_core::{
    DeleteOutcome, ListingState, copy_customer_key, copy_email_address, delete_email,
    validate_customer_form, validate_email_form,
};

use host::GuiHost;
use message::{CustomerFormMessage, EmailFormMessage, Message, SettingsMessage, View};
use model::{
    AppSettings, CustomerFormState, EmailFormState, DEFAULT_BASE_URL, PendingDelete, SettingsState,
};
use style::palette;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailbook=debug,mailbook_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mailbook");

    iced::application(Mailbook::new, Mailbook::update, Mailbook::view)
        .title("Mailbook")
        .subscription(Mailbook::subscription)
        .run()
}

/// Main application state.
struct Mailbook {
    /// Current view/screen.
    current_view: View,
    /// Client for the configured backend.
    client: ApiClient,
    /// Listing view-model (collections, status, expansion).
    listing: ListingState,
    /// Email delete waiting for confirmation, if any.
    pending_delete: Option<PendingDelete>,
    /// Create-customer form state.
    customer_form: CustomerFormState,
    /// Create-email form state.
    email_form: EmailFormState,
    /// Settings screen state.
    settings_state: SettingsState,
    /// Persisted settings (base URL, theme).
    settings: AppSettings,
}

impl Default for Mailbook {
    fn default() -> Self {
        Self {
            current_view: View::Home,
            client: default_client(),
            listing: ListingState::new(),
            pending_delete: None,
            customer_form: CustomerFormState::new(),
            email_form: EmailFormState::new(),
            settings_state: SettingsState::default(),
            settings: AppSettings::default(),
        }
    }
}

/// Client for the built-in default base URL.
#[allow(clippy::expect_used)] // the default base URL is a valid constant
fn default_client() -> ApiClient {
    ApiClient::new(DEFAULT_BASE_URL).expect("default base URL is valid")
}

impl Mailbook {
    /// Creates the app and kicks off the settings load.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        palette::set_theme(self.settings.theme_mode);
    }

    /// Launches the two independent fetches of a refresh. Either may finish
    /// first; each updates only its own collection.
    fn start_refresh(&mut self) -> Task<Message> {
        self.listing.begin_refresh();
        let customers = Task::perform(
            fetch_customers(self.client.clone()),
            Message::CustomersLoaded,
        );
        let emails = Task::perform(fetch_emails(self.client.clone()), Message::EmailsLoaded);
        Task::batch([customers, emails])
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(view) => {
                self.current_view = view;
                if view == View::Listing {
                    // The listing refreshes on entry, like the web page did
                    // on mount.
                    return self.start_refresh();
                }
            }
            Message::Refresh => {
                if self.current_view == View::Listing {
                    return self.start_refresh();
                }
            }
            Message::CustomersLoaded(result) => {
                self.listing.apply_customers(result);
            }
            Message::EmailsLoaded(result) => {
                self.listing.apply_emails(result);
            }
            Message::ToggleExpand(key) => {
                self.listing.toggle_expand(&key);
            }
            Message::RequestDeleteEmail(id, address) => {
                self.pending_delete = Some(PendingDelete { id, address });
            }
            Message::CancelDelete => {
                // Declined: nothing was sent, state stays as it is.
                self.pending_delete = None;
            }
            Message::ConfirmDelete => {
                if let Some(pending) = self.pending_delete.take() {
                    let client = self.client.clone();
                    return Task::perform(
                        async move {
                            let host = GuiHost::accepting();
                            delete_email(&host, &client, pending.id, &pending.address).await
                        },
                        Message::DeleteFinished,
                    );
                }
            }
            Message::DeleteFinished(outcome) => {
                if let DeleteOutcome::Completed(status) = outcome {
                    self.listing.set_status(status);
                    // Refresh unconditionally so the view re-syncs with
                    // server state even after a failed delete.
                    return self.start_refresh();
                }
            }
            Message::CopyCustomerKey(key) => {
                let gui = GuiHost::accepting();
                let status = copy_customer_key(&gui, &key);
                self.listing.set_status(status);
                if let Some(text) = gui.take_copied() {
                    return iced::clipboard::write(text);
                }
            }
            Message::CopyEmailAddress(address) => {
                let gui = GuiHost::accepting();
                let status = copy_email_address(&gui, &address);
                self.listing.set_status(status);
                if let Some(text) = gui.take_copied() {
                    return iced::clipboard::write(text);
                }
            }
            Message::CustomerForm(msg) => {
                return self.handle_customer_form(msg);
            }
            Message::CustomerSaved(result) => {
                self.customer_form.is_saving = false;
                match result {
                    Ok(text) => {
                        self.customer_form.feedback = Some(text);
                        self.customer_form.clear_fields();
                    }
                    Err(e) => {
                        self.customer_form.feedback = Some(format!("Network error: {e}"));
                    }
                }
            }
            Message::EmailForm(msg) => {
                return self.handle_email_form(msg);
            }
            Message::EmailSaved(result) => {
                self.email_form.is_saving = false;
                match result {
                    Ok(text) => {
                        self.email_form.feedback = Some(text);
                        self.email_form.clear_fields();
                    }
                    Err(e) => {
                        self.email_form.feedback = Some(format!("Network error: {e}"));
                    }
                }
            }
            Message::Settings(msg) => {
                return self.handle_settings(msg);
            }
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => self.apply_settings(settings),
                    Err(e) => warn!("Failed to load settings, using defaults: {e}"),
                }
                // First refresh happens once the base URL is known.
                return self.start_refresh();
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    self.settings_state.feedback = Some(format!("Failed to save settings: {e}"));
                }
            }
            Message::NoOp => {}
        }
        Task::none()
    }

    /// Handles create-customer form events.
    fn handle_customer_form(&mut self, msg: CustomerFormMessage) -> Task<Message> {
        match msg {
            CustomerFormMessage::KeyChanged(s) => self.customer_form.key = s,
            CustomerFormMessage::FirstNameChanged(s) => self.customer_form.first_name = s,
            CustomerFormMessage::LastNameChanged(s) => self.customer_form.last_name = s,
            CustomerFormMessage::Clear => self.customer_form.clear(),
            CustomerFormMessage::Submit => {
                let form = &mut self.customer_form;
                if let Err(errors) =
                    validate_customer_form(&form.key, &form.first_name, &form.last_name)
                {
                    form.feedback = Some(join_errors(&errors));
                    return Task::none();
                }
                form.is_saving = true;
                form.feedback = Some("Saving...".to_owned());
                return Task::perform(
                    save_customer(
                        self.client.clone(),
                        self.customer_form.key.clone(),
                        self.customer_form.first_name.clone(),
                        self.customer_form.last_name.clone(),
                    ),
                    Message::CustomerSaved,
                );
            }
        }
        Task::none()
    }

    /// Handles create-email form events.
    fn handle_email_form(&mut self, msg: EmailFormMessage) -> Task<Message> {
        match msg {
            EmailFormMessage::KeyChanged(s) => self.email_form.key = s,
            EmailFormMessage::AddressChanged(s) => self.email_form.address = s,
            EmailFormMessage::Clear => self.email_form.clear(),
            EmailFormMessage::Submit => {
                let form = &mut self.email_form;
                if let Err(errors) = validate_email_form(&form.key, &form.address) {
                    form.feedback = Some(join_errors(&errors));
                    return Task::none();
                }
                form.is_saving = true;
                form.feedback = Some("Saving...".to_owned());
                return Task::perform(
                    save_email(
                        self.client.clone(),
                        self.email_form.key.clone(),
                        self.email_form.address.clone(),
                    ),
                    Message::EmailSaved,
                );
            }
        }
        Task::none()
    }

    /// Handles settings screen events.
    fn handle_settings(&mut self, msg: SettingsMessage) -> Task<Message> {
        match msg {
            SettingsMessage::BaseUrlChanged(s) => {
                self.settings_state.base_url_input = s;
            }
            SettingsMessage::Apply => {
                let entered = self.settings_state.base_url_input.trim().to_owned();
                match ApiClient::new(&entered) {
                    Ok(client) => {
                        self.client = client;
                        self.settings.base_url = entered;
                        self.settings_state.feedback = Some("Backend URL applied".to_owned());
                        return Task::perform(
                            save_settings(self.settings.clone()),
                            Message::SettingsSaved,
                        );
                    }
                    Err(e) => {
                        self.settings_state.feedback = Some(format!("Invalid base URL: {e}"));
                    }
                }
            }
            SettingsMessage::ToggleTheme => {
                self.settings.theme_mode = match self.settings.theme_mode {
                    palette::ThemeMode::Light => palette::ThemeMode::Dark,
                    palette::ThemeMode::Dark => palette::ThemeMode::Light,
                };
                self.apply_theme();
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
        }
        Task::none()
    }

    /// Applies loaded settings: theme, base URL, and the client built from
    /// it. A bad stored URL falls back to the default client, and the
    /// stored value is replaced so every screen shows the address actually
    /// in use.
    fn apply_settings(&mut self, mut settings: AppSettings) {
        match ApiClient::new(&settings.base_url) {
            Ok(client) => self.client = client,
            Err(e) => {
                warn!("Stored base URL is invalid ({e}), keeping default");
                settings.base_url = DEFAULT_BASE_URL.to_owned();
                self.settings_state.feedback =
                    Some(format!("Stored backend URL was invalid: {e}"));
            }
        }
        self.settings_state.base_url_input = settings.base_url.clone();
        self.settings = settings;
        self.apply_theme();
    }

    /// Render the current view under the navigation header.
    fn view(&self) -> Element<'_, Message> {
        let body = match self.current_view {
            View::Home => view::view_home(&self.settings.base_url),
            View::CreateCustomer => view::view_customer_form(&self.customer_form),
            View::CreateEmail => view::view_email_form(&self.email_form),
            View::Listing => view::view_listing(&self.listing, self.pending_delete.as_ref()),
            View::Settings => view::view_settings(
                &self.settings_state,
                &self.settings.base_url,
                self.settings.theme_mode,
            ),
        };

        iced::widget::container(column![view::view_header(self.current_view), body])
            .width(iced::Length::Fill)
            .height(iced::Length::Fill)
            .style(style::background_style)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, .. } = event {
                handle_key_press(&key).unwrap_or(Message::NoOp)
            } else {
                Message::NoOp
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key) -> Option<Message> {
    match key {
        // F5: Refresh the listing
        Key::Named(keyboard::key::Named::F5) => Some(Message::Refresh),
        // Escape: dismiss a pending delete
        Key::Named(keyboard::key::Named::Escape) => Some(Message::CancelDelete),
        _ => None,
    }
}

/// Joins validation errors into one feedback line.
fn join_errors(errors: &[mailbook_core::ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Fetch all customers.
async fn fetch_customers(client: ApiClient) -> Result<Vec<Customer>, String> {
    client.list_customers().await.map_err(|e| e.to_string())
}

/// Fetch all emails.
async fn fetch_emails(client: ApiClient) -> Result<Vec<Email>, String> {
    client.list_emails().await.map_err(|e| e.to_string())
}

/// Create a customer; resolves to the backend's plain-text verdict.
async fn save_customer(
    client: ApiClient,
    key: String,
    first_name: String,
    last_name: String,
) -> Result<String, String> {
    client
        .create_customer(&key, &first_name, &last_name)
        .await
        .map_err(|e| e.to_string())
}

/// Create an email; resolves to the backend's plain-text verdict.
async fn save_email(client: ApiClient, key: String, address: String) -> Result<String, String> {
    client
        .create_email(&key, &address)
        .await
        .map_err(|e| e.to_string())
}

/// Where settings are persisted.
fn settings_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mailbook")
        .join("settings.json")
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let path = settings_path();

    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let path = settings_path();

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::style::palette::ThemeMode;

    #[test]
    fn invalid_stored_base_url_is_not_adopted() {
        let mut app = Mailbook::default();

        app.apply_settings(AppSettings {
            base_url: "localhost:8083".to_owned(),
            theme_mode: ThemeMode::Dark,
        });

        // The client kept the default, so the displayed address must be
        // the default too, not the unusable stored value.
        assert_eq!(app.settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(app.settings_state.base_url_input, DEFAULT_BASE_URL);
        assert_eq!(app.client.base().as_str(), "http://localhost:8083/");
        assert!(app.settings_state.feedback.is_some());
        // Everything else in the stored settings still applies.
        assert_eq!(app.settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn valid_stored_base_url_is_applied() {
        let mut app = Mailbook::default();

        app.apply_settings(AppSettings {
            base_url: "http://backend.example.com/api/".to_owned(),
            theme_mode: ThemeMode::Light,
        });

        assert_eq!(app.settings.base_url, "http://backend.example.com/api/");
        assert_eq!(app.client.base().as_str(), "http://backend.example.com/api/");
        assert!(app.settings_state.feedback.is_none());
    }
}
