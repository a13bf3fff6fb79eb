//! Read-only queries over the store
//!
//! Search filters, live dashboard aggregates, and the fixed analytics
//! snapshot used by the reports screen. Nothing here mutates state.

pub mod reports;
pub mod search;
pub mod stats;
