//! Substring search over the three collections
//!
//! Matching is case-insensitive substring containment on the searchable
//! fields of each entity, except passenger phone numbers which match
//! case-sensitively (digits and punctuation have no case, and the "+"
//! prefix should match literally). An empty term matches everything.
//! Results keep store order, newest first.

use crate::model::{Booking, Flight, Passenger};
use crate::ops::Store;

/// Flights whose number, departure, or arrival contains the term
pub fn filter_flights<'a>(store: &'a Store, term: &str) -> Vec<&'a Flight> {
    let needle = term.to_lowercase();
    store
        .flights()
        .iter()
        .filter(|flight| {
            flight.flight_number.to_lowercase().contains(&needle)
                || flight.departure.to_lowercase().contains(&needle)
                || flight.arrival.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Passengers whose name, email, phone, or frequent flyer number contains the term
pub fn filter_passengers<'a>(store: &'a Store, term: &str) -> Vec<&'a Passenger> {
    let needle = term.to_lowercase();
    store
        .passengers()
        .iter()
        .filter(|passenger| {
            passenger.name.to_lowercase().contains(&needle)
                || passenger.email.to_lowercase().contains(&needle)
                || passenger.phone.contains(term)
                || passenger
                    .frequent_flyer_number
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

/// Bookings whose reference, passenger name, or flight number contains the term
pub fn filter_bookings<'a>(store: &'a Store, term: &str) -> Vec<&'a Booking> {
    let needle = term.to_lowercase();
    store
        .bookings()
        .iter()
        .filter(|booking| {
            booking.reference.to_lowercase().contains(&needle)
                || booking.passenger_name.to_lowercase().contains(&needle)
                || booking.flight_number.to_lowercase().contains(&needle)
        })
        .collect()
}
