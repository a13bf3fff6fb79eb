use airtrack_core_types::{BookingId, FlightId, PassengerId};

use crate::model::{Booking, Flight, Passenger};

/// In-memory store for flights, passengers, and bookings
///
/// Vec-backed storage ordered newest-first: insertions go to the front,
/// so index 0 is always the most recently added entity. The order is
/// part of the contract, not an implementation detail. Not thread-safe
/// (no Arc/RwLock), designed for single-threaded use with one store per
/// console session, passed explicitly to every consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    /// Flights, newest first
    pub(crate) flights: Vec<Flight>,
    /// Passengers, newest first
    pub(crate) passengers: Vec<Passenger>,
    /// Bookings, newest first
    pub(crate) bookings: Vec<Booking>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            flights: Vec::new(),
            passengers: Vec::new(),
            bookings: Vec::new(),
        }
    }

    /// All flights, newest first
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// All passengers, newest first
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// All bookings, newest first
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Get a flight by id, `None` if no flight matches
    pub fn get_flight(&self, id: &FlightId) -> Option<&Flight> {
        self.flights.iter().find(|flight| &flight.id == id)
    }

    /// Get a mutable reference to a flight by id
    ///
    /// This is a public method to enable test helpers.
    pub fn get_flight_mut(&mut self, id: &FlightId) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|flight| &flight.id == id)
    }

    /// Get a passenger by id, `None` if no passenger matches
    pub fn get_passenger(&self, id: &PassengerId) -> Option<&Passenger> {
        self.passengers.iter().find(|passenger| &passenger.id == id)
    }

    /// Get a mutable reference to a passenger by id
    ///
    /// This is a public method to enable test helpers.
    pub fn get_passenger_mut(&mut self, id: &PassengerId) -> Option<&mut Passenger> {
        self.passengers
            .iter_mut()
            .find(|passenger| &passenger.id == id)
    }

    /// Get a booking by id, `None` if no booking matches
    pub fn get_booking(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| &booking.id == id)
    }

    /// Find the first flight with the given flight number
    ///
    /// Flight numbers are not unique; with duplicates present the
    /// newest wins, matching the order of the backing Vec.
    pub fn find_flight_by_number(&self, flight_number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|flight| flight.flight_number == flight_number)
    }

    /// Insert a flight at the front of the collection
    pub(crate) fn insert_flight(&mut self, flight: Flight) {
        self.flights.insert(0, flight);
    }

    /// Insert a passenger at the front of the collection
    pub(crate) fn insert_passenger(&mut self, passenger: Passenger) {
        self.passengers.insert(0, passenger);
    }

    /// Insert a booking at the front of the collection
    pub(crate) fn insert_booking(&mut self, booking: Booking) {
        self.bookings.insert(0, booking);
    }

    /// Total entity count across all three collections
    pub fn len(&self) -> usize {
        self.flights.len() + self.passengers.len() + self.bookings.len()
    }

    /// True when no entities are stored
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty() && self.passengers.is_empty() && self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlightStatus;
    use chrono::{NaiveDate, NaiveTime};

    fn flight(id: &str, number: &str) -> Flight {
        Flight {
            id: FlightId::from_string(id.to_string()),
            flight_number: number.to_string(),
            departure: "Nairobi (NBO)".to_string(),
            arrival: "London (LHR)".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            time: NaiveTime::from_hms_opt(23, 45, 0).unwrap(),
            capacity: 100,
            booked: 0,
            status: FlightStatus::OnTime,
            economy_price: 50_000,
            business_price: 150_000,
            first_price: 280_000,
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.flights().is_empty());
        assert!(store.passengers().is_empty());
        assert!(store.bookings().is_empty());
    }

    #[test]
    fn test_insert_orders_newest_first() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100"));
        store.insert_flight(flight("f-2", "KQ200"));
        store.insert_flight(flight("f-3", "KQ300"));

        let numbers: Vec<&str> = store
            .flights()
            .iter()
            .map(|f| f.flight_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["KQ300", "KQ200", "KQ100"]);
    }

    #[test]
    fn test_get_flight_by_id() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100"));

        let id = FlightId::from_string("f-1".to_string());
        assert!(store.get_flight(&id).is_some());

        let missing = FlightId::from_string("f-404".to_string());
        assert!(store.get_flight(&missing).is_none());
    }

    #[test]
    fn test_find_flight_by_number_newest_wins_on_duplicates() {
        let mut store = Store::new();
        store.insert_flight(flight("f-1", "KQ100"));
        let mut newer = flight("f-2", "KQ100");
        newer.capacity = 200;
        store.insert_flight(newer);

        let found = store.find_flight_by_number("KQ100").unwrap();
        assert_eq!(found.id.as_str(), "f-2");
        assert_eq!(found.capacity, 200);
    }
}
