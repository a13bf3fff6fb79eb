use airtrack_core_types::BookingId;

use super::store::Store;
use crate::model::Booking;

/// Add a booking and apply its counter side effects
///
/// Inserts at the front of the booking collection (newest first), then
/// increments `total_flights` on every passenger whose name equals the
/// booking's `passenger_name` and `booked` on every flight whose number
/// equals the booking's `flight_number`. Matching is exact string
/// equality on the denormalized values:
///
/// - zero matches (a dangling reference) adjusts nothing
/// - multiple matches (duplicate names or numbers) all adjust
///
/// The booking is stored either way.
pub fn add_booking(store: &mut Store, booking: Booking) {
    let mut matched_passengers = 0usize;
    for passenger in store
        .passengers
        .iter_mut()
        .filter(|passenger| passenger.name == booking.passenger_name)
    {
        passenger.total_flights = passenger.total_flights.saturating_add(1);
        matched_passengers += 1;
    }

    let mut matched_flights = 0usize;
    for flight in store
        .flights
        .iter_mut()
        .filter(|flight| flight.flight_number == booking.flight_number)
    {
        flight.booked = flight.booked.saturating_add(1);
        matched_flights += 1;
    }

    tracing::debug!(
        booking_id = booking.id.as_str(),
        matched_passengers,
        matched_flights,
        "booking added, counters adjusted"
    );
    store.insert_booking(booking);
}

/// Remove the booking with the matching id and reverse its counter effects
///
/// Looks up the booking first; if no booking matches the id this is a
/// silent no-op. Otherwise decrements `booked` on every flight matching
/// the booking's `flight_number` and `total_flights` on every passenger
/// matching its `passenger_name`, each decrement floored at zero, then
/// removes the booking.
///
/// Floor-at-zero makes delete-after-add asymmetric when a counter was
/// already zero: the add incremented a match, an external edit or a
/// rename may have moved the counter since, and the delete will not
/// push it negative.
pub fn delete_booking(store: &mut Store, id: &BookingId) {
    let (passenger_name, flight_number) = match store.get_booking(id) {
        Some(booking) => (
            booking.passenger_name.clone(),
            booking.flight_number.clone(),
        ),
        None => {
            tracing::debug!(booking_id = id.as_str(), "delete targets unknown booking, skipping");
            return;
        }
    };

    for flight in store
        .flights
        .iter_mut()
        .filter(|flight| flight.flight_number == flight_number)
    {
        flight.booked = flight.booked.saturating_sub(1);
    }

    for passenger in store
        .passengers
        .iter_mut()
        .filter(|passenger| passenger.name == passenger_name)
    {
        passenger.total_flights = passenger.total_flights.saturating_sub(1);
    }

    store.bookings.retain(|booking| &booking.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, Flight, FlightStatus, Passenger, SeatClass};
    use airtrack_core_types::{FlightId, PassengerId};
    use chrono::{NaiveDate, NaiveTime};

    fn flight(id: &str, number: &str, booked: u32) -> Flight {
        Flight {
            id: FlightId::from_string(id.to_string()),
            flight_number: number.to_string(),
            departure: "Nairobi (NBO)".to_string(),
            arrival: "London (LHR)".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            time: NaiveTime::from_hms_opt(23, 45, 0).unwrap(),
            capacity: 280,
            booked,
            status: FlightStatus::OnTime,
            economy_price: 85_000,
            business_price: 285_000,
            first_price: 520_000,
        }
    }

    fn passenger(id: &str, name: &str, total_flights: u32) -> Passenger {
        Passenger {
            id: PassengerId::from_string(id.to_string()),
            name: name.to_string(),
            email: "test@email.com".to_string(),
            phone: "+254 700 000 000".to_string(),
            nationality: "Kenyan".to_string(),
            passport_number: "A0000000".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            total_flights,
            member_since: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            frequent_flyer_number: "KQ000000001".to_string(),
        }
    }

    fn booking(id: &str, passenger_name: &str, flight_number: &str) -> Booking {
        Booking {
            id: BookingId::from_string(id.to_string()),
            reference: format!("KQ{}", id),
            passenger_name: passenger_name.to_string(),
            flight_number: flight_number.to_string(),
            route: "Nairobi → London".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            time: NaiveTime::from_hms_opt(23, 45, 0).unwrap(),
            seat_class: SeatClass::Economy,
            price: 85_000,
            status: BookingStatus::Confirmed,
            booked_on: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            seat_number: "14C".to_string(),
        }
    }

    #[test]
    fn test_add_booking_increments_matching_counters() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100", 10));
        store.insert_passenger(passenger("p-1", "James Mwangi", 5));

        add_booking(&mut store, booking("b-1", "James Mwangi", "KQ100"));

        assert_eq!(store.bookings().len(), 1);
        assert_eq!(store.flights()[0].booked, 11);
        assert_eq!(store.passengers()[0].total_flights, 6);
    }

    #[test]
    fn test_add_booking_with_dangling_references_stores_without_adjusting() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100", 10));
        store.insert_passenger(passenger("p-1", "James Mwangi", 5));

        add_booking(&mut store, booking("b-1", "Nobody Known", "KQ999"));

        // Booking lands, nothing else moves
        assert_eq!(store.bookings().len(), 1);
        assert_eq!(store.flights()[0].booked, 10);
        assert_eq!(store.passengers()[0].total_flights, 5);
    }

    #[test]
    fn test_add_booking_fans_out_to_all_matches() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100", 10));
        store.insert_flight(flight("f-2", "KQ100", 20));
        store.insert_passenger(passenger("p-1", "James Mwangi", 5));
        store.insert_passenger(passenger("p-2", "James Mwangi", 7));

        add_booking(&mut store, booking("b-1", "James Mwangi", "KQ100"));

        // Every match moves, not just the first
        assert_eq!(store.flights()[0].booked, 21);
        assert_eq!(store.flights()[1].booked, 11);
        assert_eq!(store.passengers()[0].total_flights, 8);
        assert_eq!(store.passengers()[1].total_flights, 6);
    }

    #[test]
    fn test_add_booking_inserts_at_front() {
        let mut store = Store::new();
        add_booking(&mut store, booking("b-1", "A", "KQ1"));
        add_booking(&mut store, booking("b-2", "B", "KQ2"));

        assert_eq!(store.bookings()[0].id.as_str(), "b-2");
        assert_eq!(store.bookings()[1].id.as_str(), "b-1");
    }

    #[test]
    fn test_delete_booking_reverses_counters() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100", 10));
        store.insert_passenger(passenger("p-1", "James Mwangi", 5));
        add_booking(&mut store, booking("b-1", "James Mwangi", "KQ100"));

        delete_booking(&mut store, &BookingId::from_string("b-1".to_string()));

        assert!(store.bookings().is_empty());
        assert_eq!(store.flights()[0].booked, 10);
        assert_eq!(store.passengers()[0].total_flights, 5);
    }

    #[test]
    fn test_delete_booking_floors_counters_at_zero() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100", 0));
        store.insert_passenger(passenger("p-1", "James Mwangi", 0));
        store.insert_booking(booking("b-1", "James Mwangi", "KQ100"));

        delete_booking(&mut store, &BookingId::from_string("b-1".to_string()));

        assert!(store.bookings().is_empty());
        assert_eq!(store.flights()[0].booked, 0);
        assert_eq!(store.passengers()[0].total_flights, 0);
    }

    #[test]
    fn test_delete_unknown_booking_is_silent_noop() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100", 10));
        store.insert_passenger(passenger("p-1", "James Mwangi", 5));
        add_booking(&mut store, booking("b-1", "James Mwangi", "KQ100"));
        let before = store.clone();

        delete_booking(&mut store, &BookingId::from_string("b-404".to_string()));

        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_booking_decrements_all_matches() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100", 10));
        store.insert_flight(flight("f-2", "KQ100", 20));
        store.insert_passenger(passenger("p-1", "James Mwangi", 5));
        store.insert_passenger(passenger("p-2", "James Mwangi", 7));
        store.insert_booking(booking("b-1", "James Mwangi", "KQ100"));

        delete_booking(&mut store, &BookingId::from_string("b-1".to_string()));

        assert_eq!(store.flights()[0].booked, 19);
        assert_eq!(store.flights()[1].booked, 9);
        assert_eq!(store.passengers()[0].total_flights, 6);
        assert_eq!(store.passengers()[1].total_flights, 4);
    }

    #[test]
    fn test_rename_between_add_and_delete_strands_the_increment() {
        use crate::model::PassengerUpdate;
        use crate::ops::passenger_ops;

        let mut store = Store::new();
        store.insert_passenger(passenger("p-1", "James Mwangi", 5));
        add_booking(&mut store, booking("b-1", "James Mwangi", "KQ100"));
        assert_eq!(store.passengers()[0].total_flights, 6);

        // Rename after booking: the booking keeps the old name
        passenger_ops::update_passenger(
            &mut store,
            &PassengerId::from_string("p-1".to_string()),
            PassengerUpdate {
                name: Some("James M. Mwangi".to_string()),
                ..Default::default()
            },
        );

        delete_booking(&mut store, &BookingId::from_string("b-1".to_string()));

        // Delete matched nobody, so the increment is never reversed
        assert_eq!(store.passengers()[0].total_flights, 6);
        assert!(store.bookings().is_empty());
    }
}
