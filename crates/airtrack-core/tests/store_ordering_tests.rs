//! Store Ordering Tests
//!
//! This test suite verifies the newest-first listing contract: adds
//! prepend, updates edit in place, and deletes close the gap without
//! reshuffling the survivors.
//!
//! ## Scenarios Covered
//!
//! 1. Adds prepend across all three collections
//! 2. Updates keep the edited entity in its slot
//! 3. Deletes preserve the relative order of the rest
//! 4. Adds on top of the demo data land at the front

mod common;

use airtrack_core::{apply, seed, Command, FlightUpdate, Store};
use airtrack_core_types::{FlightId, PassengerId};
use common::{test_booking, test_flight, test_passenger};

fn flight_numbers(state: &Store) -> Vec<&str> {
    state
        .flights()
        .iter()
        .map(|f| f.flight_number.as_str())
        .collect()
}

#[test]
fn test_adds_prepend_in_every_collection() {
    // GIVEN an empty store
    let mut state = Store::new();

    // WHEN three of each entity are added in sequence
    for (id, number) in [("f-1", "KQ100"), ("f-2", "KQ200"), ("f-3", "KQ300")] {
        state = apply(
            state,
            Command::FlightAdd {
                flight: test_flight(id, number, 0),
            },
        );
    }
    for (id, name) in [("p-1", "Alice"), ("p-2", "Brian"), ("p-3", "Carol")] {
        state = apply(
            state,
            Command::PassengerAdd {
                passenger: test_passenger(id, name, 0),
            },
        );
    }
    for id in ["b-1", "b-2", "b-3"] {
        state = apply(
            state,
            Command::BookingAdd {
                booking: test_booking(id, "Nobody", "KQ999"),
            },
        );
    }

    // THEN every listing runs newest to oldest
    assert_eq!(flight_numbers(&state), vec!["KQ300", "KQ200", "KQ100"]);
    let names: Vec<&str> = state.passengers().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Brian", "Alice"]);
    let refs: Vec<&str> = state
        .bookings()
        .iter()
        .map(|b| b.reference.as_str())
        .collect();
    assert_eq!(refs, vec!["KQREFb-3", "KQREFb-2", "KQREFb-1"]);
}

#[test]
fn test_update_edits_in_place() {
    // GIVEN three flights
    let mut state = Store::new();
    for (id, number) in [("f-1", "KQ100"), ("f-2", "KQ200"), ("f-3", "KQ300")] {
        state = apply(
            state,
            Command::FlightAdd {
                flight: test_flight(id, number, 0),
            },
        );
    }

    // WHEN the middle one is updated
    state = apply(
        state,
        Command::FlightUpdate {
            flight_id: FlightId::from_string("f-2".to_string()),
            update: FlightUpdate {
                flight_number: Some("KQ201".to_string()),
                ..Default::default()
            },
        },
    );

    // THEN it keeps its slot, it is not bumped to the front
    assert_eq!(flight_numbers(&state), vec!["KQ300", "KQ201", "KQ100"]);
}

#[test]
fn test_delete_closes_the_gap_in_order() {
    // GIVEN four passengers
    let mut state = Store::new();
    for (id, name) in [
        ("p-1", "Alice"),
        ("p-2", "Brian"),
        ("p-3", "Carol"),
        ("p-4", "David"),
    ] {
        state = apply(
            state,
            Command::PassengerAdd {
                passenger: test_passenger(id, name, 0),
            },
        );
    }

    // WHEN one in the middle is deleted
    state = apply(
        state,
        Command::PassengerDelete {
            passenger_id: PassengerId::from_string("p-3".to_string()),
        },
    );

    // THEN the remaining order is untouched
    let names: Vec<&str> = state.passengers().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["David", "Brian", "Alice"]);
}

#[test]
fn test_adds_land_in_front_of_demo_data() {
    // GIVEN the demo store
    let mut state = seed::demo_store();
    let seeded_front = state.flights()[0].flight_number.clone();
    assert_eq!(seeded_front, "KQ100");

    // WHEN a new flight is added
    state = apply(
        state,
        Command::FlightAdd {
            flight: test_flight("f-new", "KQ777", 0),
        },
    );

    // THEN it displaces the seeded front entry to second place
    assert_eq!(state.flights()[0].flight_number, "KQ777");
    assert_eq!(state.flights()[1].flight_number, seeded_front);
}
