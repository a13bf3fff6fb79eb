//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry
//! point for state mutations in the functional-boundary style.
//!
//! ## Mutation Contract
//!
//! The `apply()` function guarantees:
//! - **Infallible**: Every command produces a new state. Unknown ids
//!   are silent no-ops, never errors or panics
//! - **Ownership transfer**: The caller gives up the old state and
//!   receives the new one, so no caller can observe a half-applied
//!   command
//! - **Counter maintenance**: Booking commands adjust the derived
//!   `booked` and `total_flights` counters in the same application
//!
//! ## Example
//!
//! ```
//! use airtrack_core::{apply, Command, Store};
//! use airtrack_core_types::FlightId;
//!
//! let state = Store::new();
//! let cmd = Command::FlightDelete {
//!     flight_id: FlightId::from_string("missing".to_string()),
//! };
//!
//! // Unknown id: the state comes back unchanged
//! let new_state = apply(state, cmd);
//! assert!(new_state.is_empty());
//! ```

use crate::commands::Command;
use crate::ops::{booking_ops, flight_ops, passenger_ops, Store};

/// Apply a command to a store, returning the new store state
///
/// Takes ownership of the current state, executes the command, and
/// returns the resulting state. The only observable states are the one
/// before the call and the one returned.
///
/// Commands addressing ids not present in the store are silent no-ops:
/// the returned state equals the input state. Nothing here returns an
/// error or panics; anything fallible (parsing, validation, code
/// generation) happens before the command is built.
pub fn apply(mut state: Store, cmd: Command) -> Store {
    match cmd {
        Command::FlightAdd { flight } => {
            flight_ops::add_flight(&mut state, flight);
        }

        Command::FlightUpdate { flight_id, update } => {
            flight_ops::update_flight(&mut state, &flight_id, update);
        }

        Command::FlightDelete { flight_id } => {
            flight_ops::delete_flight(&mut state, &flight_id);
        }

        Command::PassengerAdd { passenger } => {
            passenger_ops::add_passenger(&mut state, passenger);
        }

        Command::PassengerUpdate {
            passenger_id,
            update,
        } => {
            passenger_ops::update_passenger(&mut state, &passenger_id, update);
        }

        Command::PassengerDelete { passenger_id } => {
            passenger_ops::delete_passenger(&mut state, &passenger_id);
        }

        Command::BookingAdd { booking } => {
            booking_ops::add_booking(&mut state, booking);
        }

        Command::BookingDelete { booking_id } => {
            booking_ops::delete_booking(&mut state, &booking_id);
        }
    }

    state
}
