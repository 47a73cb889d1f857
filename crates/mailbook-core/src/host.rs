//! Environment-provided capabilities.
//!
//! Confirmation dialogs and clipboard access belong to the host UI toolkit,
//! not to the view logic. Abstracting them behind a trait keeps the
//! listing/service code testable with a scripted stand-in.

/// Capabilities the hosting UI must provide.
pub trait HostCapabilities {
    /// Asks the user to confirm an irrecoverable action. Returns `true`
    /// only if the user explicitly accepted.
    fn confirm(&self, prompt: &str) -> bool;

    /// Places `text` on the system clipboard.
    fn copy_to_clipboard(&self, text: &str);
}

#[cfg(test)]
pub(crate) mod mock {
    use super::HostCapabilities;
    use std::cell::RefCell;

    /// Scripted host for tests: answers `confirm` with a fixed verdict and
    /// records everything that reaches the clipboard.
    pub struct ScriptedHost {
        pub accept: bool,
        pub prompts: RefCell<Vec<String>>,
        pub clipboard: RefCell<Vec<String>>,
    }

    impl ScriptedHost {
        pub fn new(accept: bool) -> Self {
            Self {
                accept,
                prompts: RefCell::new(Vec::new()),
                clipboard: RefCell::new(Vec::new()),
            }
        }
    }

    impl HostCapabilities for ScriptedHost {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_owned());
            self.accept
        }

        fn copy_to_clipboard(&self, text: &str) {
            self.clipboard.borrow_mut().push(text.to_owned());
        }
    }
}
