//! Listing view-model: the customer/email join with expansion state.

mod model;

pub use model::ListingState;
