//! Entity model for the operations console
//!
//! Three entity kinds live in the store: flights, passengers, and
//! bookings. Bookings reference the other two by denormalized display
//! values (passenger name, flight number), not by id, which is what
//! drives the counter fan-out semantics in `ops`.

mod booking;
mod flight;
mod passenger;

pub use booking::{Booking, BookingStatus, SeatClass};
pub use flight::{Flight, FlightStatus, FlightUpdate};
pub use passenger::{Passenger, PassengerUpdate};
