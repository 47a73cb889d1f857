//! State and pure transitions for the listing view.

use mailbook_api::{Customer, Email};
use tracing::warn;

/// Transient state of the listing view.
///
/// The two collections are fetched independently and rebuilt on every
/// refresh. Referential integrity between them is assumed, never verified;
/// an email whose key matches no customer simply never displays.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    /// All customers, in fetch order.
    pub customers: Vec<Customer>,
    /// All emails, in fetch order.
    pub emails: Vec<Email>,
    /// Human-readable status line (errors, copy confirmations, delete
    /// verdicts). Last writer wins.
    pub status: String,
    /// Key of the single customer whose email sublist is visible, if any.
    pub expanded_key: Option<String>,
}

impl ListingState {
    /// Creates an empty listing state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the status line at the start of a refresh, before the two
    /// fetches are launched.
    pub fn begin_refresh(&mut self) {
        self.status.clear();
    }

    /// Applies the outcome of the customers fetch. On failure the
    /// collection resets to empty and the error lands in `status`.
    pub fn apply_customers(&mut self, result: Result<Vec<Customer>, String>) {
        match result {
            Ok(customers) => self.customers = customers,
            Err(e) => {
                warn!("customer fetch failed: {e}");
                self.customers = Vec::new();
                self.status = format!("Failed to load customers: {e}");
            }
        }
    }

    /// Applies the outcome of the emails fetch, independent of the
    /// customers fetch.
    pub fn apply_emails(&mut self, result: Result<Vec<Email>, String>) {
        match result {
            Ok(emails) => self.emails = emails,
            Err(e) => {
                warn!("email fetch failed: {e}");
                self.emails = Vec::new();
                self.status = format!("Failed to load emails: {e}");
            }
        }
    }

    /// Emails belonging to the customer with the given key, in fetch order.
    /// Recomputed on every call; the collections are small.
    pub fn emails_for(&self, key: &str) -> impl Iterator<Item = &Email> {
        self.emails.iter().filter(move |e| e.customer_key == key)
    }

    /// Number of emails belonging to the customer with the given key.
    #[must_use]
    pub fn email_count(&self, key: &str) -> usize {
        self.emails_for(key).count()
    }

    /// Expands the given customer, or collapses it if it was already the
    /// expanded one. At most one customer is expanded at a time.
    pub fn toggle_expand(&mut self, key: &str) {
        if self.expanded_key.as_deref() == Some(key) {
            self.expanded_key = None;
        } else {
            self.expanded_key = Some(key.to_owned());
        }
    }

    /// Whether the given customer's email sublist is currently visible.
    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_key.as_deref() == Some(key)
    }

    /// Records a status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn customer(key: &str, first: &str, last: &str) -> Customer {
        Customer {
            key: key.into(),
            first_name: first.into(),
            last_name: last.into(),
        }
    }

    fn email(id: u32, address: &str, key: &str) -> Email {
        Email {
            id,
            address: address.into(),
            customer_key: key.into(),
        }
    }

    #[test]
    fn emails_for_unknown_key_is_empty() {
        let mut state = ListingState::new();
        state.apply_emails(Ok(vec![email(5, "a@b.com", "1")]));
        assert_eq!(state.emails_for("2").count(), 0);
        assert_eq!(state.email_count("2"), 0);
    }

    #[test]
    fn emails_for_matches_example_payload() {
        let mut state = ListingState::new();
        state.apply_customers(Ok(vec![customer("1", "Ana", "Li")]));
        state.apply_emails(Ok(vec![email(5, "a@b.com", "1")]));

        let found: Vec<_> = state.emails_for("1").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 5);
        assert_eq!(found[0].address, "a@b.com");
    }

    #[test]
    fn failed_customers_fetch_resets_only_customers() {
        let mut state = ListingState::new();
        state.apply_customers(Ok(vec![customer("1", "Ana", "Li")]));
        state.begin_refresh();

        // Customers endpoint answers HTTP 500, emails endpoint answers [].
        state.apply_customers(Err("HTTP 500: boom".into()));
        state.apply_emails(Ok(Vec::new()));

        assert!(state.customers.is_empty());
        assert!(state.emails.is_empty());
        assert!(state.status.contains("Failed to load customers"));
    }

    #[test]
    fn fetch_results_apply_in_either_order() {
        let mut a = ListingState::new();
        let mut b = ListingState::new();
        let customers = vec![customer("1", "Ana", "Li")];
        let emails = vec![email(5, "a@b.com", "1")];

        a.apply_customers(Ok(customers.clone()));
        a.apply_emails(Ok(emails.clone()));
        b.apply_emails(Ok(emails));
        b.apply_customers(Ok(customers));

        assert_eq!(a.customers, b.customers);
        assert_eq!(a.emails, b.emails);
    }

    #[test]
    fn begin_refresh_clears_status() {
        let mut state = ListingState::new();
        state.set_status("Copied");
        state.begin_refresh();
        assert!(state.status.is_empty());
    }

    #[test]
    fn expanding_second_customer_collapses_first() {
        let mut state = ListingState::new();
        state.toggle_expand("1");
        assert!(state.is_expanded("1"));
        state.toggle_expand("2");
        assert!(state.is_expanded("2"));
        assert!(!state.is_expanded("1"));
    }

    proptest! {
        #[test]
        fn toggle_expand_twice_is_involution(
            initial in proptest::option::of("[0-9]{1,8}"),
            key in "[0-9]{1,8}",
        ) {
            let mut state = ListingState::new();
            state.expanded_key = initial.clone();
            state.toggle_expand(&key);
            state.toggle_expand(&key);
            prop_assert_eq!(state.expanded_key, initial);
        }

        #[test]
        fn emails_for_preserves_fetch_order(
            keys in proptest::collection::vec("[0-3]", 0..32),
            wanted in "[0-3]",
        ) {
            let mut state = ListingState::new();
            let emails: Vec<Email> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| email(u32::try_from(i).unwrap(), "x@y.com", k))
                .collect();
            state.apply_emails(Ok(emails));

            let ids: Vec<u32> = state.emails_for(&wanted).map(|e| e.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            // Ids were assigned in fetch order, so order preservation means
            // the filtered ids come out already sorted.
            prop_assert_eq!(ids, sorted);
        }
    }
}
