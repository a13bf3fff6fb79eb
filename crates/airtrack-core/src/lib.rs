//! AIRTRACK Core - Canonical in-memory operations store
//!
//! This crate provides the foundational data structures and operations
//! for the airline operations console, including:
//! - Flight, Passenger, and Booking models with full CRUD semantics
//! - Automatic derived-counter maintenance across the booking lifecycle
//! - Newest-first collection ordering as a contract
//! - Form gating for raw input, with a typed error taxonomy
//! - Static route network catalog (airports, schedules, fares)
//! - Generated booking references, frequent flyer numbers, and seats
//! - Search, live dashboard aggregates, and the analytics snapshot
//!
//! Mutations flow through `apply(state, command)`, which is infallible:
//! unknown ids are silent no-ops, never errors.

pub mod apply;
pub mod codes;
pub mod commands;
pub mod errors;
pub mod forms;
pub mod logging_facility;
pub mod model;
pub mod network;
pub mod ops;
pub mod queries;
pub mod seed;

// Re-export commonly used types
pub use apply::apply;
pub use codes::CodeSequence;
pub use commands::Command;
pub use errors::{AirtrackError, Result};
pub use model::{
    Booking, BookingStatus, Flight, FlightStatus, FlightUpdate, Passenger, PassengerUpdate,
    SeatClass,
};
pub use ops::Store;
