//! Form types gating raw input before it becomes a command
//!
//! The store itself never rejects anything, so all validation lives
//! here: required fields, date/time/number parsing, catalog and store
//! lookups. A form that builds successfully yields a fully formed
//! entity (ids and codes generated, fares resolved, snapshots taken)
//! ready to wrap in a `Command`.

use airtrack_core_types::{BookingId, FlightId, PassengerId};
use chrono::{NaiveDate, NaiveTime, Utc};

use crate::codes::{seat_number, CodeSequence};
use crate::errors::{AirtrackError, Result};
use crate::model::{
    Booking, BookingStatus, Flight, FlightStatus, FlightUpdate, Passenger, PassengerUpdate,
    SeatClass,
};
use crate::network::{airports, fares};
use crate::ops::Store;

fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AirtrackError::MissingField { field });
    }
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| AirtrackError::InvalidDate {
        value: value.to_string(),
    })
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| AirtrackError::InvalidTime {
        value: value.to_string(),
    })
}

fn parse_capacity(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| AirtrackError::InvalidCapacity {
            value: value.to_string(),
        })
}

/// Raw input for creating or fully editing a flight
///
/// Departure and arrival are airport descriptors ("Nairobi (NBO)");
/// fares for all three classes are resolved from the route at build
/// time, so a form never carries prices of its own.
#[derive(Debug, Clone, Default)]
pub struct FlightForm {
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub date: String,
    pub time: String,
    pub capacity: String,
    pub status: FlightStatus,
}

impl FlightForm {
    /// Validate and build a new flight with a fresh id and zero booked seats
    pub fn build(self) -> Result<Flight> {
        require(&self.flight_number, "flight number")?;
        require(&self.departure, "departure")?;
        require(&self.arrival, "arrival")?;
        require(&self.date, "date")?;
        require(&self.time, "time")?;
        require(&self.capacity, "capacity")?;

        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        let capacity = parse_capacity(&self.capacity)?;
        let fares = fares::route_fares(&self.departure, &self.arrival);

        Ok(Flight {
            id: FlightId::new(),
            flight_number: self.flight_number.trim().to_string(),
            departure: self.departure,
            arrival: self.arrival,
            date,
            time,
            capacity,
            booked: 0,
            status: self.status,
            economy_price: fares.economy,
            business_price: fares.business,
            first_price: fares.first,
        })
    }

    /// Validate and build a full-field update for an existing flight
    ///
    /// The edit surface requires every field, mirroring the create
    /// form, and re-resolves fares from the (possibly changed) route.
    /// `booked` is untouched by construction.
    pub fn into_update(self) -> Result<FlightUpdate> {
        require(&self.flight_number, "flight number")?;
        require(&self.departure, "departure")?;
        require(&self.arrival, "arrival")?;
        require(&self.date, "date")?;
        require(&self.time, "time")?;
        require(&self.capacity, "capacity")?;

        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        let capacity = parse_capacity(&self.capacity)?;
        let fares = fares::route_fares(&self.departure, &self.arrival);

        Ok(FlightUpdate {
            flight_number: Some(self.flight_number.trim().to_string()),
            departure: Some(self.departure),
            arrival: Some(self.arrival),
            date: Some(date),
            time: Some(time),
            capacity: Some(capacity),
            status: Some(self.status),
            economy_price: Some(fares.economy),
            business_price: Some(fares.business),
            first_price: Some(fares.first),
        })
    }
}

/// Raw input for creating or fully editing a passenger
#[derive(Debug, Clone, Default)]
pub struct PassengerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub passport_number: String,
    pub date_of_birth: String,
}

impl PassengerForm {
    /// Validate and build a new passenger
    ///
    /// Membership starts today, the flight counter at zero, and the
    /// frequent flyer number comes from the session's code sequence.
    pub fn build(self, codes: &mut CodeSequence) -> Result<Passenger> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.phone, "phone")?;
        require(&self.nationality, "nationality")?;
        require(&self.passport_number, "passport number")?;
        require(&self.date_of_birth, "date of birth")?;

        let date_of_birth = parse_date(&self.date_of_birth)?;

        Ok(Passenger {
            id: PassengerId::new(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            nationality: self.nationality.trim().to_string(),
            passport_number: self.passport_number.trim().to_string(),
            date_of_birth,
            total_flights: 0,
            member_since: Utc::now().date_naive(),
            frequent_flyer_number: codes.frequent_flyer_number(),
        })
    }

    /// Validate and build a full-field identity update
    ///
    /// Counters, membership date, and the frequent flyer number are
    /// not part of the update by construction.
    pub fn into_update(self) -> Result<PassengerUpdate> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.phone, "phone")?;
        require(&self.nationality, "nationality")?;
        require(&self.passport_number, "passport number")?;
        require(&self.date_of_birth, "date of birth")?;

        let date_of_birth = parse_date(&self.date_of_birth)?;

        Ok(PassengerUpdate {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            nationality: Some(self.nationality.trim().to_string()),
            passport_number: Some(self.passport_number.trim().to_string()),
            date_of_birth: Some(date_of_birth),
        })
    }
}

/// Raw input for creating a booking
///
/// Bookings are built against a live store: the flight must exist so
/// its schedule, route, and fare can be snapshotted into the booking.
/// The passenger name is taken as given; nothing checks it against the
/// passenger collection, so a name that matches nobody produces a
/// dangling booking that adjusts no counters.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub passenger_name: String,
    pub flight_number: String,
    pub seat_class: SeatClass,
}

impl BookingForm {
    /// Validate against the store and build a confirmed booking
    pub fn build(self, store: &Store, codes: &mut CodeSequence) -> Result<Booking> {
        require(&self.passenger_name, "passenger name")?;
        require(&self.flight_number, "flight number")?;

        let flight = store
            .find_flight_by_number(self.flight_number.trim())
            .ok_or_else(|| AirtrackError::UnknownFlightNumber {
                flight_number: self.flight_number.trim().to_string(),
            })?;

        let route = format!(
            "{} → {}",
            airports::city_part(&flight.departure),
            airports::city_part(&flight.arrival)
        );

        Ok(Booking {
            id: BookingId::new(),
            reference: codes.booking_reference(),
            passenger_name: self.passenger_name.trim().to_string(),
            flight_number: flight.flight_number.clone(),
            route,
            date: flight.date,
            time: flight.time,
            seat_class: self.seat_class,
            price: flight.price_for(self.seat_class),
            status: BookingStatus::Confirmed,
            booked_on: Utc::now().date_naive(),
            seat_number: seat_number(self.seat_class),
        })
    }
}
