use airtrack_core_types::FlightId;

use super::store::Store;
use crate::model::{Flight, FlightUpdate};

/// Add a flight to the store
///
/// Inserts at the front of the flight collection (newest first). Flight
/// numbers are not checked for uniqueness; a duplicate number widens
/// the fan-out of later booking counter updates.
pub fn add_flight(store: &mut Store, flight: Flight) {
    tracing::debug!(flight_id = flight.id.as_str(), flight_number = %flight.flight_number, "adding flight");
    store.insert_flight(flight);
}

/// Merge the provided fields into the flight with the matching id
///
/// Fields left as `None` keep their current value. `booked` is not
/// updatable here; it moves only through the booking lifecycle. If no
/// flight matches the id this is a silent no-op.
pub fn update_flight(store: &mut Store, id: &FlightId, update: FlightUpdate) {
    let Some(flight) = store.get_flight_mut(id) else {
        tracing::debug!(flight_id = id.as_str(), "update targets unknown flight, skipping");
        return;
    };

    if let Some(flight_number) = update.flight_number {
        flight.flight_number = flight_number;
    }
    if let Some(departure) = update.departure {
        flight.departure = departure;
    }
    if let Some(arrival) = update.arrival {
        flight.arrival = arrival;
    }
    if let Some(date) = update.date {
        flight.date = date;
    }
    if let Some(time) = update.time {
        flight.time = time;
    }
    if let Some(capacity) = update.capacity {
        flight.capacity = capacity;
    }
    if let Some(status) = update.status {
        flight.status = status;
    }
    if let Some(economy_price) = update.economy_price {
        flight.economy_price = economy_price;
    }
    if let Some(business_price) = update.business_price {
        flight.business_price = business_price;
    }
    if let Some(first_price) = update.first_price {
        flight.first_price = first_price;
    }
}

/// Remove the flight with the matching id
///
/// If no flight matches this is a silent no-op. Bookings referencing
/// the flight's number are not cascaded; they keep their snapshot and
/// dangle until deleted themselves.
pub fn delete_flight(store: &mut Store, id: &FlightId) {
    store.flights.retain(|flight| &flight.id != id);
}
