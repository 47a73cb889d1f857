//! Async client for the customer/email backend.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::endpoints;
use crate::error::{Error, Result};
use crate::model::{Customer, Email};

/// Client for the backend REST surface.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted.
/// Each call is a single attempt with no retry, matching the backend's
/// fire-and-forget contract.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the given base URL, e.g. `http://localhost:8083`
    /// or a proxied `http://localhost:3000/api/`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not a valid URL.
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: endpoints::parse_base(base)?,
        })
    }

    /// The base URL this client talks to.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Lists all customers. An empty response body decodes as an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a
    /// malformed JSON body.
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.get_json_list(endpoints::list_customers(&self.base))
            .await
    }

    /// Lists all emails, each carrying its owner's key.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a
    /// malformed JSON body.
    pub async fn list_emails(&self) -> Result<Vec<Email>> {
        self.get_json_list(endpoints::list_emails(&self.base)).await
    }

    /// Looks up a single customer by key. The backend answers with an empty
    /// body when no customer matches, which maps to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a
    /// malformed JSON body.
    pub async fn find_customer(&self, key: &str) -> Result<Option<Customer>> {
        let url = endpoints::find_customer(&self.base, key);
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let body = Self::success_text(response).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Creates a customer; returns the backend's plain-text verdict.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or non-success status.
    pub async fn create_customer(
        &self,
        key: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<String> {
        self.get_text(endpoints::create_customer(
            &self.base, key, first_name, last_name,
        ))
        .await
    }

    /// Deletes a customer by key; returns the backend's plain-text verdict.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or non-success status.
    pub async fn delete_customer(&self, key: &str) -> Result<String> {
        let url = endpoints::delete_customer(&self.base, key);
        debug!(%url, "DELETE");
        let response = self.http.delete(url).send().await?;
        Self::success_text(response).await
    }

    /// Attaches a new email address to an existing customer; returns the
    /// backend's plain-text verdict (which also reports an unknown key).
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or non-success status.
    pub async fn create_email(&self, key: &str, address: &str) -> Result<String> {
        self.get_text(endpoints::create_email(&self.base, key, address))
            .await
    }

    /// Rewrites the address of an existing email.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or non-success status.
    pub async fn update_email(&self, id: u32, address: &str) -> Result<String> {
        let url = endpoints::update_email(&self.base, id, address);
        debug!(%url, "POST");
        let response = self.http.post(url).send().await?;
        Self::success_text(response).await
    }

    /// Deletes an email by id; returns the backend's plain-text verdict.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or non-success status.
    pub async fn delete_email(&self, id: u32) -> Result<String> {
        let url = endpoints::delete_email(&self.base, id);
        debug!(%url, "DELETE");
        let response = self.http.delete(url).send().await?;
        Self::success_text(response).await
    }

    /// GET returning the raw plain-text body.
    async fn get_text(&self, url: Url) -> Result<String> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Self::success_text(response).await
    }

    /// GET returning a JSON array, with the backend quirk that an empty or
    /// whitespace-only body stands for an empty array.
    async fn get_json_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        let body = self.get_text(url).await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Reads the body on success, or turns a non-success status into
    /// [`Error::Status`] carrying whatever diagnostic text the server sent.
    async fn success_text(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_garbage_base() {
        assert!(matches!(ApiClient::new("not a url"), Err(Error::BaseUrl(_))));
        assert!(matches!(
            ApiClient::new("localhost:8083"),
            Err(Error::UnsupportedBase(_))
        ));
    }

    #[test]
    fn new_accepts_proxied_base() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base().as_str(), "http://localhost:3000/api/");
    }

    #[tokio::test]
    async fn unreachable_backend_surfaces_as_network_error() {
        // Nothing listens on port 1; the connection is refused immediately.
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        assert!(matches!(
            client.list_customers().await,
            Err(Error::Network(_))
        ));
        assert!(matches!(
            client.delete_email(5).await,
            Err(Error::Network(_))
        ));
    }

    #[test]
    fn list_payload_preserves_order() {
        let body = r#"[
            {"idCorreo":5,"correo":"a@b.com","cliente06":{"dni":"1"}},
            {"idCorreo":2,"correo":"c@d.com","cliente06":{"dni":"2"}},
            {"idCorreo":9,"correo":"e@f.com","cliente06":{"dni":"1"}}
        ]"#;
        let emails: Vec<Email> = serde_json::from_str(body).unwrap();
        let ids: Vec<u32> = emails.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}
