//! # mailbook-core
//!
//! View-model and business logic for the `mailbook` client.
//!
//! This crate provides:
//! - The listing view-model: two independently fetched collections joined
//!   in memory by customer key, with single-expansion state
//! - Host capability abstraction (confirmation dialogs, clipboard) so the
//!   view logic is testable without a rendering environment
//! - Form-input validation for the create-customer and create-email forms
//! - Orchestration of the confirm-then-delete-then-refresh flow

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod host;
pub mod listing;
pub mod service;
pub mod validation;

pub use host::HostCapabilities;
pub use listing::ListingState;
pub use service::{DeleteOutcome, copy_customer_key, copy_email_address, delete_email};
pub use validation::{
    ValidationError, ValidationResult, validate_customer_form, validate_email_form,
};
