//! Create-customer form model.

/// State for the create-customer form.
#[derive(Debug, Clone, Default)]
pub struct CustomerFormState {
    /// Natural key (national ID) input.
    pub key: String,
    /// First name input.
    pub first_name: String,
    /// Last name input.
    pub last_name: String,
    /// Feedback line under the form: validation errors, the backend's
    /// plain-text verdict, or a network error.
    pub feedback: Option<String>,
    /// Whether a save request is in flight.
    pub is_saving: bool,
}

impl CustomerFormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears inputs and feedback.
    pub fn clear(&mut self) {
        self.key.clear();
        self.first_name.clear();
        self.last_name.clear();
        self.feedback = None;
    }

    /// Clears only the inputs, keeping feedback visible. Used after a
    /// completed save so the verdict stays on screen.
    pub fn clear_fields(&mut self) {
        self.key.clear();
        self.first_name.clear();
        self.last_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_everything() {
        let mut form = CustomerFormState {
            key: "1".into(),
            first_name: "Ana".into(),
            last_name: "Li".into(),
            feedback: Some("Saved".into()),
            is_saving: false,
        };
        form.clear();
        assert!(form.key.is_empty());
        assert!(form.feedback.is_none());
    }

    #[test]
    fn clear_fields_keeps_feedback() {
        let mut form = CustomerFormState::new();
        form.key = "1".into();
        form.feedback = Some("Saved".into());
        form.clear_fields();
        assert!(form.key.is_empty());
        assert_eq!(form.feedback.as_deref(), Some("Saved"));
    }
}
