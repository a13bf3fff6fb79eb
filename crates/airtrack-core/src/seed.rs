//! Demo dataset loaded at session start
//!
//! Four flights out of Nairobi, four loyalty passengers, and three
//! bookings, matching the console's standard walkthrough data. The
//! collections are built literally in display order; counters already
//! reflect the seeded bookings, so nothing here runs the booking
//! lifecycle.

use airtrack_core_types::{BookingId, FlightId, PassengerId};
use chrono::{NaiveDate, NaiveTime};

use crate::model::{
    Booking, BookingStatus, Flight, FlightStatus, Passenger, SeatClass,
};
use crate::ops::Store;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Build the demo store
pub fn demo_store() -> Store {
    Store {
        flights: vec![
            Flight {
                id: FlightId::from_string("1".to_string()),
                flight_number: "KQ100".to_string(),
                departure: "Nairobi (NBO)".to_string(),
                arrival: "London (LHR)".to_string(),
                date: date(2024, 1, 15),
                time: time(23, 45),
                capacity: 280,
                booked: 245,
                status: FlightStatus::OnTime,
                economy_price: 85_000,
                business_price: 285_000,
                first_price: 520_000,
            },
            Flight {
                id: FlightId::from_string("2".to_string()),
                flight_number: "KQ310".to_string(),
                departure: "Nairobi (NBO)".to_string(),
                arrival: "Dubai (DXB)".to_string(),
                date: date(2024, 1, 15),
                time: time(14, 30),
                capacity: 250,
                booked: 198,
                status: FlightStatus::Delayed,
                economy_price: 45_000,
                business_price: 135_000,
                first_price: 250_000,
            },
            Flight {
                id: FlightId::from_string("3".to_string()),
                flight_number: "KQ003".to_string(),
                departure: "Nairobi (NBO)".to_string(),
                arrival: "Paris (CDG)".to_string(),
                date: date(2024, 1, 15),
                time: time(21, 15),
                capacity: 320,
                booked: 276,
                status: FlightStatus::Boarding,
                economy_price: 82_000,
                business_price: 275_000,
                first_price: 500_000,
            },
            Flight {
                id: FlightId::from_string("4".to_string()),
                flight_number: "KQ117".to_string(),
                departure: "Nairobi (NBO)".to_string(),
                arrival: "Johannesburg (JNB)".to_string(),
                date: date(2024, 1, 16),
                time: time(16, 20),
                capacity: 180,
                booked: 156,
                status: FlightStatus::OnTime,
                economy_price: 35_000,
                business_price: 105_000,
                first_price: 195_000,
            },
        ],
        passengers: vec![
            Passenger {
                id: PassengerId::from_string("1".to_string()),
                name: "James Mwangi".to_string(),
                email: "james.mwangi@email.com".to_string(),
                phone: "+254 712 345 678".to_string(),
                nationality: "Kenyan".to_string(),
                passport_number: "A1234567".to_string(),
                date_of_birth: date(1985, 3, 15),
                total_flights: 12,
                member_since: date(2023, 1, 15),
                frequent_flyer_number: "KQ001234567".to_string(),
            },
            Passenger {
                id: PassengerId::from_string("2".to_string()),
                name: "Grace Wanjiku".to_string(),
                email: "grace.wanjiku@email.com".to_string(),
                phone: "+254 722 987 654".to_string(),
                nationality: "Kenyan".to_string(),
                passport_number: "A2345678".to_string(),
                date_of_birth: date(1990, 7, 22),
                total_flights: 8,
                member_since: date(2023, 3, 22),
                frequent_flyer_number: "KQ002345678".to_string(),
            },
            Passenger {
                id: PassengerId::from_string("3".to_string()),
                name: "David Kipchoge".to_string(),
                email: "david.kipchoge@email.com".to_string(),
                phone: "+254 733 456 789".to_string(),
                nationality: "Kenyan".to_string(),
                passport_number: "A3456789".to_string(),
                date_of_birth: date(1982, 11, 8),
                total_flights: 15,
                member_since: date(2022, 11, 8),
                frequent_flyer_number: "KQ003456789".to_string(),
            },
            Passenger {
                id: PassengerId::from_string("4".to_string()),
                name: "Mary Akinyi".to_string(),
                email: "mary.akinyi@email.com".to_string(),
                phone: "+254 701 234 567".to_string(),
                nationality: "Kenyan".to_string(),
                passport_number: "A4567890".to_string(),
                date_of_birth: date(1988, 5, 10),
                total_flights: 6,
                member_since: date(2023, 5, 10),
                frequent_flyer_number: "KQ004567890".to_string(),
            },
        ],
        bookings: vec![
            Booking {
                id: BookingId::from_string("1".to_string()),
                reference: "KQ001234".to_string(),
                passenger_name: "James Mwangi".to_string(),
                flight_number: "KQ100".to_string(),
                route: "NBO → LHR".to_string(),
                date: date(2024, 1, 15),
                time: time(23, 45),
                seat_class: SeatClass::Business,
                price: 285_000,
                status: BookingStatus::Confirmed,
                booked_on: date(2024, 1, 10),
                seat_number: "2A".to_string(),
            },
            Booking {
                id: BookingId::from_string("2".to_string()),
                reference: "KQ001235".to_string(),
                passenger_name: "Grace Wanjiku".to_string(),
                flight_number: "KQ310".to_string(),
                route: "NBO → DXB".to_string(),
                date: date(2024, 1, 15),
                time: time(14, 30),
                seat_class: SeatClass::Economy,
                price: 45_000,
                status: BookingStatus::Confirmed,
                booked_on: date(2024, 1, 8),
                seat_number: "15C".to_string(),
            },
            Booking {
                id: BookingId::from_string("3".to_string()),
                reference: "KQ001236".to_string(),
                passenger_name: "David Kipchoge".to_string(),
                flight_number: "KQ003".to_string(),
                route: "NBO → CDG".to_string(),
                date: date(2024, 1, 15),
                time: time(21, 15),
                seat_class: SeatClass::First,
                price: 500_000,
                status: BookingStatus::Pending,
                booked_on: date(2024, 1, 12),
                seat_number: "1A".to_string(),
            },
        ],
    }
}
