//! # mailbook-api
//!
//! REST client for the customer/email backend.
//!
//! The backend exposes a small REST-like surface: customers are created and
//! listed under `/clientes`, email addresses under `/correos`. List endpoints
//! return JSON arrays (or an empty body, which decodes as an empty list);
//! mutation endpoints return a human-readable plain-text result.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailbook_api::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:8083")?;
//!
//!     let msg = client.create_customer("12345678", "Ana", "Li").await?;
//!     println!("{msg}");
//!
//!     let customers = client.list_customers().await?;
//!     let emails = client.list_emails().await?;
//!     for c in &customers {
//!         let count = emails.iter().filter(|e| e.customer_key == c.key).count();
//!         println!("{} {} <{}>: {count} address(es)", c.first_name, c.last_name, c.key);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod endpoints;
mod error;
mod model;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use model::{Customer, Email};
