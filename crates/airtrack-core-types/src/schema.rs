//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SESSION_ID: &str = "session_id";

// Entity identifiers
pub const FIELD_FLIGHT_ID: &str = "flight_id";
pub const FIELD_PASSENGER_ID: &str = "passenger_id";
pub const FIELD_BOOKING_ID: &str = "booking_id";

// Denormalized linkage keys carried by bookings
pub const FIELD_FLIGHT_NUMBER: &str = "flight_number";
pub const FIELD_PASSENGER_NAME: &str = "passenger_name";

// Counter fan-out sizes
pub const FIELD_MATCHED_FLIGHTS: &str = "matched_flights";
pub const FIELD_MATCHED_PASSENGERS: &str = "matched_passengers";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
