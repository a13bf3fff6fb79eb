use airtrack_core::{Booking, BookingStatus, Flight, FlightStatus, Passenger, SeatClass, Store};
use airtrack_core_types::{BookingId, FlightId, PassengerId};
use chrono::{NaiveDate, NaiveTime};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Build a test flight with the given id, number, and booked count
#[allow(dead_code)]
pub fn test_flight(id: &str, number: &str, booked: u32) -> Flight {
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

/// Build a test passenger with the given id, name, and flight count
#[allow(dead_code)]
pub fn test_passenger(id: &str, name: &str, total_flights: u32) -> Passenger {
    Passenger {
        id: PassengerId::from_string(id.to_string()),
        name: name.to_string(),
        email: format!("{}@email.com", id),
        phone: "+254 700 000 000".to_string(),
        nationality: "Kenyan".to_string(),
        passport_number: "A0000000".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        total_flights,
        member_since: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        frequent_flyer_number: format!("KQ00000{}", id),
    }
}

/// Build a test booking linking the given name and flight number
#[allow(dead_code)]
pub fn test_booking(id: &str, passenger_name: &str, flight_number: &str) -> Booking {
    Booking {
        id: BookingId::from_string(id.to_string()),
        reference: format!("KQREF{}", id),
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
