//! Create-email form model.

/// State for the create-email form.
#[derive(Debug, Clone, Default)]
pub struct EmailFormState {
    /// Key of the customer the address belongs to.
    pub key: String,
    /// Email address input.
    pub address: String,
    /// Feedback line under the form.
    pub feedback: Option<String>,
    /// Whether a save request is in flight.
    pub is_saving: bool,
}

impl EmailFormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears inputs and feedback.
    pub fn clear(&mut self) {
        self.key.clear();
        self.address.clear();
        self.feedback = None;
    }

    /// Clears only the inputs, keeping feedback visible.
    pub fn clear_fields(&mut self) {
        self.key.clear();
        self.address.clear();
    }
}
