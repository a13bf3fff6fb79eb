//! Core types shared across AIRTRACK facilities
//!
//! This crate provides foundational types used by the entity store and
//! the console surfaces built on top of it:
//!
//! - **Identifier types**: FlightId, PassengerId, BookingId, SessionId
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;
pub mod sensitive;

pub use ids::{BookingId, FlightId, PassengerId, SessionId};
pub use sensitive::Sensitive;
