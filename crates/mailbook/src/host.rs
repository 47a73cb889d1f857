//! GUI adapter for the core host capabilities.

use std::sync::Mutex;

use mailbook_core::HostCapabilities;

/// Host implementation backed by the iced shell.
///
/// Confirmation dialogs are rendered in-app as a pending-delete bar, so by
/// the time a core flow asks `confirm` the user has already answered; this
/// adapter replays that answer. Clipboard writes are collected here and
/// turned into an `iced::clipboard` task by the caller, since iced exposes
/// the clipboard only through tasks. A `Mutex` holds the copied text so the
/// flows stay `Send` for `Task::perform`.
pub struct GuiHost {
    decision: bool,
    copied: Mutex<Option<String>>,
}

impl GuiHost {
    /// Host that replays an accepted confirmation.
    #[must_use]
    pub const fn accepting() -> Self {
        Self {
            decision: true,
            copied: Mutex::new(None),
        }
    }

    /// Takes the text a core flow asked to copy, if any.
    pub fn take_copied(&self) -> Option<String> {
        self.copied.lock().map_or(None, |mut copied| copied.take())
    }
}

impl HostCapabilities for GuiHost {
    fn confirm(&self, _prompt: &str) -> bool {
        self.decision
    }

    fn copy_to_clipboard(&self, text: &str) {
        if let Ok(mut copied) = self.copied.lock() {
            *copied = Some(text.to_owned());
        }
    }
}
