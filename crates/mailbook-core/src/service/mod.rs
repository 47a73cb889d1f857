//! Orchestration of view actions that touch the backend or the host.

use mailbook_api::ApiClient;
use tracing::{debug, info};

use crate::host::HostCapabilities;

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// The delete request ran. Carries the status text to display; the
    /// caller must refresh regardless of whether the server reported
    /// success, so the view re-syncs with server state either way.
    Completed(String),
}

/// Asks the host for confirmation, then deletes the email with the given
/// id. Declined confirmation short-circuits before any network activity.
pub async fn delete_email<H: HostCapabilities>(
    host: &H,
    client: &ApiClient,
    id: u32,
    address: &str,
) -> DeleteOutcome {
    let prompt = format!("Delete {address}? This cannot be undone.");
    if !host.confirm(&prompt) {
        debug!(id, "delete declined");
        return DeleteOutcome::Declined;
    }

    info!(id, "deleting email");
    let status = match client.delete_email(id).await {
        Ok(text) => text,
        Err(e) => format!("Failed to delete email: {e}"),
    };
    DeleteOutcome::Completed(status)
}

/// Copies a customer key to the clipboard; returns the status line to show.
pub fn copy_customer_key<H: HostCapabilities>(host: &H, key: &str) -> String {
    host.copy_to_clipboard(key);
    "Customer key copied to clipboard".to_owned()
}

/// Copies an email address to the clipboard; returns the status line to
/// show.
pub fn copy_email_address<H: HostCapabilities>(host: &H, address: &str) -> String {
    host.copy_to_clipboard(address);
    "Email address copied to clipboard".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::host::mock::ScriptedHost;

    #[tokio::test]
    async fn declined_confirmation_sends_nothing() {
        let host = ScriptedHost::new(false);
        // TEST-NET-1 base: any attempt to actually connect would hang or
        // fail, so a clean Declined proves the request was never sent.
        let client = ApiClient::new("http://192.0.2.1:9").unwrap();

        let outcome = delete_email(&host, &client, 5, "a@b.com").await;

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(host.prompts.borrow().len(), 1);
        assert!(host.prompts.borrow()[0].contains("a@b.com"));
    }

    #[tokio::test]
    async fn confirmed_delete_reports_network_failure_as_status() {
        let host = ScriptedHost::new(true);
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();

        let outcome = delete_email(&host, &client, 5, "a@b.com").await;

        match outcome {
            DeleteOutcome::Completed(status) => {
                assert!(status.contains("Failed to delete email"));
            }
            DeleteOutcome::Declined => panic!("confirmation was accepted"),
        }
    }

    #[test]
    fn copy_helpers_reach_clipboard_and_report() {
        let host = ScriptedHost::new(true);

        let status = copy_customer_key(&host, "12345678");
        assert_eq!(status, "Customer key copied to clipboard");

        let status = copy_email_address(&host, "a@b.com");
        assert_eq!(status, "Email address copied to clipboard");

        assert_eq!(*host.clipboard.borrow(), vec!["12345678", "a@b.com"]);
    }
}
