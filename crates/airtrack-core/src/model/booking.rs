use std::fmt;
use std::str::FromStr;

use airtrack_core_types::BookingId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::AirtrackError;

/// A booking linking a passenger to a flight
///
/// The link is denormalized: `passenger_name` and `flight_number` are
/// display values copied at creation, not foreign keys. Renaming a
/// passenger or renumbering a flight afterwards leaves the booking
/// pointing at the old value. Counter maintenance in
/// `ops::booking_ops` matches on these strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for this booking
    pub id: BookingId,

    /// Generated booking reference, e.g. "KQ001234"
    pub reference: String,

    /// Passenger name as it read at booking time
    pub passenger_name: String,

    /// Flight number as it read at booking time
    pub flight_number: String,

    /// Route label snapshot, e.g. "Nairobi → London"
    pub route: String,

    /// Flight date snapshot
    pub date: NaiveDate,

    /// Flight time snapshot
    pub time: NaiveTime,

    /// Cabin class
    pub seat_class: SeatClass,

    /// Fare paid in KSH, taken from the flight's tier price
    pub price: u64,

    /// Booking status
    pub status: BookingStatus,

    /// Date the booking was made
    pub booked_on: NaiveDate,

    /// Assigned seat, e.g. "2A"
    pub seat_number: String,
}

/// Cabin class of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
    First,
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
            SeatClass::First => "First",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SeatClass {
    type Err = AirtrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "economy" => Ok(SeatClass::Economy),
            "business" => Ok(SeatClass::Business),
            "first" => Ok(SeatClass::First),
            _ => Err(AirtrackError::InvalidSeatClass {
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}
