//! Command types representing all store mutations
//!
//! This module defines the command inventory processed by the `apply()`
//! function, which takes ownership of the current state, executes the
//! command, and returns the new state.

use airtrack_core_types::{BookingId, FlightId, PassengerId};

use crate::model::{Booking, Flight, FlightUpdate, Passenger, PassengerUpdate};

/// Command enum covering every mutation the store supports
///
/// Entities arrive fully formed: form validation and code generation
/// happen before a command is built (see `forms`), so commands carry no
/// fallible construction of their own. There is deliberately no
/// `BookingUpdate`: bookings are immutable snapshots, added and deleted
/// only.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a fully formed flight
    FlightAdd { flight: Flight },

    /// Merge partial fields into an existing flight
    FlightUpdate {
        flight_id: FlightId,
        update: FlightUpdate,
    },

    /// Remove a flight (no cascade to bookings)
    FlightDelete { flight_id: FlightId },

    /// Add a fully formed passenger
    PassengerAdd { passenger: Passenger },

    /// Merge partial identity fields into an existing passenger
    PassengerUpdate {
        passenger_id: PassengerId,
        update: PassengerUpdate,
    },

    /// Remove a passenger (no cascade to bookings)
    PassengerDelete { passenger_id: PassengerId },

    /// Add a booking and apply its counter side effects
    BookingAdd { booking: Booking },

    /// Remove a booking and reverse its counter side effects
    BookingDelete { booking_id: BookingId },
}
