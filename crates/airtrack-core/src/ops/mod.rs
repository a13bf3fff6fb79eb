pub mod booking_ops;
pub mod flight_ops;
pub mod passenger_ops;
pub mod store;

pub use store::Store;
