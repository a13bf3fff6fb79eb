//! Booking Counter Maintenance Tests
//!
//! This test suite verifies the derived-counter semantics of the
//! booking lifecycle: increments on add, floored decrements on delete,
//! string-match fan-out, and the dangling-reference and rename edge
//! cases.
//!
//! ## Scenarios Covered
//!
//! 1. Add increments every matching flight and passenger
//! 2. Delete reverses the increments, floored at zero
//! 3. Dangling references store the booking without adjustment
//! 4. Renames between add and delete strand the original increment
//! 5. External counter edits interact with the floor
//! 6. Entity deletes cascade to neither bookings nor counters

mod common;

use airtrack_core::{apply, Command, PassengerUpdate, Store};
use airtrack_core_types::{BookingId, FlightId, PassengerId};
use common::{test_booking, test_flight, test_passenger};

#[test]
fn test_add_then_delete_round_trips_counters() {
    // GIVEN a store with one flight and one passenger
    let mut state = Store::new();
    state = apply(
        state,
        Command::FlightAdd {
            flight: test_flight("f-1", "KQ100", 245),
        },
    );
    state = apply(
        state,
        Command::PassengerAdd {
            passenger: test_passenger("p-1", "James Mwangi", 12),
        },
    );

    // WHEN a booking for them is added
    state = apply(
        state,
        Command::BookingAdd {
            booking: test_booking("b-1", "James Mwangi", "KQ100"),
        },
    );

    // THEN both counters move up by one
    assert_eq!(state.flights()[0].booked, 246);
    assert_eq!(state.passengers()[0].total_flights, 13);

    // WHEN the booking is deleted again
    state = apply(
        state,
        Command::BookingDelete {
            booking_id: BookingId::from_string("b-1".to_string()),
        },
    );

    // THEN the counters return to their original values
    assert_eq!(state.flights()[0].booked, 245);
    assert_eq!(state.passengers()[0].total_flights, 12);
    assert!(state.bookings().is_empty());
}

#[test]
fn test_dangling_booking_is_stored_without_counter_movement() {
    // GIVEN a store with entities that do not match the booking
    let mut state = Store::new();
    state = apply(
        state,
        Command::FlightAdd {
            flight: test_flight("f-1", "KQ100", 10),
        },
    );
    state = apply(
        state,
        Command::PassengerAdd {
            passenger: test_passenger("p-1", "James Mwangi", 5),
        },
    );

    // WHEN a booking referencing unknown name and number is added
    state = apply(
        state,
        Command::BookingAdd {
            booking: test_booking("b-1", "Unknown Person", "KQ999"),
        },
    );

    // THEN the booking is stored and no counter moves
    assert_eq!(state.bookings().len(), 1);
    assert_eq!(state.flights()[0].booked, 10);
    assert_eq!(state.passengers()[0].total_flights, 5);

    // AND deleting it also moves nothing
    state = apply(
        state,
        Command::BookingDelete {
            booking_id: BookingId::from_string("b-1".to_string()),
        },
    );
    assert!(state.bookings().is_empty());
    assert_eq!(state.flights()[0].booked, 10);
    assert_eq!(state.passengers()[0].total_flights, 5);
}

#[test]
fn test_duplicate_names_and_numbers_fan_out() {
    // GIVEN two flights sharing a number and two passengers sharing a name
    let mut state = Store::new();
    state = apply(
        state,
        Command::FlightAdd {
            flight: test_flight("f-1", "KQ100", 0),
        },
    );
    state = apply(
        state,
        Command::FlightAdd {
            flight: test_flight("f-2", "KQ100", 100),
        },
    );
    state = apply(
        state,
        Command::PassengerAdd {
            passenger: test_passenger("p-1", "James Mwangi", 0),
        },
    );
    state = apply(
        state,
        Command::PassengerAdd {
            passenger: test_passenger("p-2", "James Mwangi", 50),
        },
    );

    // WHEN one booking matches them all
    state = apply(
        state,
        Command::BookingAdd {
            booking: test_booking("b-1", "James Mwangi", "KQ100"),
        },
    );

    // THEN every match is incremented, not just the first
    let booked: Vec<u32> = state.flights().iter().map(|f| f.booked).collect();
    assert_eq!(booked, vec![101, 1]);
    let totals: Vec<u32> = state.passengers().iter().map(|p| p.total_flights).collect();
    assert_eq!(totals, vec![51, 1]);

    // AND deleting decrements every match symmetrically
    state = apply(
        state,
        Command::BookingDelete {
            booking_id: BookingId::from_string("b-1".to_string()),
        },
    );
    let booked: Vec<u32> = state.flights().iter().map(|f| f.booked).collect();
    assert_eq!(booked, vec![100, 0]);
    let totals: Vec<u32> = state.passengers().iter().map(|p| p.total_flights).collect();
    assert_eq!(totals, vec![50, 0]);
}

#[test]
fn test_delete_floors_at_zero_after_external_reset() {
    // GIVEN a booking whose matched flight counter was externally reset
    let mut state = Store::new();
    state = apply(
        state,
        Command::FlightAdd {
            flight: test_flight("f-1", "KQ100", 0),
        },
    );
    state = apply(
        state,
        Command::PassengerAdd {
            passenger: test_passenger("p-1", "James Mwangi", 0),
        },
    );
    state = apply(
        state,
        Command::BookingAdd {
            booking: test_booking("b-1", "James Mwangi", "KQ100"),
        },
    );
    assert_eq!(state.flights()[0].booked, 1);

    // Reset counters out from under the booking, as a test helper
    let flight_id = FlightId::from_string("f-1".to_string());
    state.get_flight_mut(&flight_id).unwrap().booked = 0;
    let passenger_id = PassengerId::from_string("p-1".to_string());
    state.get_passenger_mut(&passenger_id).unwrap().total_flights = 0;

    // WHEN the booking is deleted
    state = apply(
        state,
        Command::BookingDelete {
            booking_id: BookingId::from_string("b-1".to_string()),
        },
    );

    // THEN the decrement floors at zero instead of wrapping
    assert_eq!(state.flights()[0].booked, 0);
    assert_eq!(state.passengers()[0].total_flights, 0);
    assert!(state.bookings().is_empty());
}

#[test]
fn test_rename_after_booking_strands_the_increment() {
    // GIVEN a passenger with a booking under their original name
    let mut state = Store::new();
    state = apply(
        state,
        Command::PassengerAdd {
            passenger: test_passenger("p-1", "Grace Wanjiku", 8),
        },
    );
    state = apply(
        state,
        Command::BookingAdd {
            booking: test_booking("b-1", "Grace Wanjiku", "KQ310"),
        },
    );
    assert_eq!(state.passengers()[0].total_flights, 9);

    // WHEN the passenger is renamed and the booking later deleted
    state = apply(
        state,
        Command::PassengerUpdate {
            passenger_id: PassengerId::from_string("p-1".to_string()),
            update: PassengerUpdate {
                name: Some("Grace W. Otieno".to_string()),
                ..Default::default()
            },
        },
    );
    state = apply(
        state,
        Command::BookingDelete {
            booking_id: BookingId::from_string("b-1".to_string()),
        },
    );

    // THEN the delete matched nobody and the increment is stranded
    assert_eq!(state.passengers()[0].total_flights, 9);
    assert!(state.bookings().is_empty());
}

#[test]
fn test_flight_delete_does_not_touch_counters_or_bookings() {
    // GIVEN a booked-up store
    let mut state = Store::new();
    state = apply(
        state,
        Command::FlightAdd {
            flight: test_flight("f-1", "KQ100", 0),
        },
    );
    state = apply(
        state,
        Command::PassengerAdd {
            passenger: test_passenger("p-1", "James Mwangi", 0),
        },
    );
    state = apply(
        state,
        Command::BookingAdd {
            booking: test_booking("b-1", "James Mwangi", "KQ100"),
        },
    );

    // WHEN the flight is deleted
    state = apply(
        state,
        Command::FlightDelete {
            flight_id: FlightId::from_string("f-1".to_string()),
        },
    );

    // THEN the booking survives as a dangling snapshot and the
    // passenger counter is untouched
    assert!(state.flights().is_empty());
    assert_eq!(state.bookings().len(), 1);
    assert_eq!(state.passengers()[0].total_flights, 1);

    // AND deleting the booking now only reverses the passenger side
    let state = apply(
        state,
        Command::BookingDelete {
            booking_id: BookingId::from_string("b-1".to_string()),
        },
    );
    assert_eq!(state.passengers()[0].total_flights, 0);
}
