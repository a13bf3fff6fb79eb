use std::fmt;
use std::str::FromStr;

use airtrack_core_types::FlightId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::AirtrackError;
use crate::model::SeatClass;

/// A scheduled flight
///
/// `booked` counts seats taken and is maintained by the booking
/// lifecycle (see `ops::booking_ops`), never edited directly through
/// an update. Prices are per-seat fares in KSH for the three cabin
/// classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique identifier for this flight
    pub id: FlightId,

    /// Airline flight number, e.g. "KQ100" (not checked for uniqueness)
    pub flight_number: String,

    /// Departure airport descriptor, e.g. "Nairobi (NBO)"
    pub departure: String,

    /// Arrival airport descriptor, e.g. "London (LHR)"
    pub arrival: String,

    /// Scheduled date of departure
    pub date: NaiveDate,

    /// Scheduled time of departure
    pub time: NaiveTime,

    /// Total seats on the aircraft
    pub capacity: u32,

    /// Seats currently booked (maintained by booking add/delete)
    pub booked: u32,

    /// Operational status
    pub status: FlightStatus,

    /// Economy fare in KSH
    pub economy_price: u64,

    /// Business fare in KSH
    pub business_price: u64,

    /// First class fare in KSH
    pub first_price: u64,
}

impl Flight {
    /// Seats still available, floored at zero when overbooked
    pub fn seats_available(&self) -> u32 {
        self.capacity.saturating_sub(self.booked)
    }

    /// Booked share of capacity as a percentage (0.0 for zero capacity)
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.booked as f64 / self.capacity as f64) * 100.0
    }

    /// Fare in KSH for the given cabin class
    pub fn price_for(&self, class: SeatClass) -> u64 {
        match class {
            SeatClass::Economy => self.economy_price,
            SeatClass::Business => self.business_price,
            SeatClass::First => self.first_price,
        }
    }
}

/// Operational status of a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FlightStatus {
    #[default]
    OnTime,
    Delayed,
    Cancelled,
    Boarding,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Boarding => "Boarding",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for FlightStatus {
    type Err = AirtrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on time" | "on-time" | "ontime" => Ok(FlightStatus::OnTime),
            "delayed" => Ok(FlightStatus::Delayed),
            "cancelled" => Ok(FlightStatus::Cancelled),
            "boarding" => Ok(FlightStatus::Boarding),
            _ => Err(AirtrackError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Partial update for a flight
///
/// `None` fields are left untouched by `ops::flight_ops::update_flight`.
/// There is deliberately no `booked` field: the counter moves only
/// through the booking lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightUpdate {
    pub flight_number: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub capacity: Option<u32>,
    pub status: Option<FlightStatus>,
    pub economy_price: Option<u64>,
    pub business_price: Option<u64>,
    pub first_price: Option<u64>,
}
