use thiserror::Error;

/// Result type alias using AirtrackError
pub type Result<T> = std::result::Result<T, AirtrackError>;

/// Error taxonomy for the console surfaces
///
/// Store mutations themselves have no error surface: an unknown id is a
/// silent no-op (see `ops`). These errors gate an operation before it
/// reaches the store, at form validation or login. Each variant maps to
/// a stable error code for log records and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AirtrackError {
    /// A required form field was left empty
    #[error("Required field is missing: {field}")]
    MissingField { field: &'static str },

    /// Capacity input did not parse as a whole number
    #[error("Capacity is not a whole number: {value}")]
    InvalidCapacity { value: String },

    /// Date input did not parse as YYYY-MM-DD
    #[error("Date is not in YYYY-MM-DD format: {value}")]
    InvalidDate { value: String },

    /// Time input did not parse as HH:MM
    #[error("Time is not in HH:MM format: {value}")]
    InvalidTime { value: String },

    /// Flight status input matched no known status
    #[error("Unknown flight status: {value}")]
    InvalidStatus { value: String },

    /// Seat class input matched no known class
    #[error("Unknown seat class: {value}")]
    InvalidSeatClass { value: String },

    /// Airport code not present in the route catalog
    #[error("Unknown airport code: {code}")]
    UnknownAirport { code: String },

    /// Booking form referenced a flight number not in the store
    #[error("No flight found with number {flight_number}")]
    UnknownFlightNumber { flight_number: String },

    /// Login check failed
    #[error("Invalid credentials. Use admin/admin")]
    InvalidCredentials,
}

impl AirtrackError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable across releases and safe to match on in tests
    /// and log pipelines.
    pub fn code(&self) -> &'static str {
        match self {
            AirtrackError::MissingField { .. } => "ERR_MISSING_FIELD",
            AirtrackError::InvalidCapacity { .. } => "ERR_INVALID_CAPACITY",
            AirtrackError::InvalidDate { .. } => "ERR_INVALID_DATE",
            AirtrackError::InvalidTime { .. } => "ERR_INVALID_TIME",
            AirtrackError::InvalidStatus { .. } => "ERR_INVALID_STATUS",
            AirtrackError::InvalidSeatClass { .. } => "ERR_INVALID_SEAT_CLASS",
            AirtrackError::UnknownAirport { .. } => "ERR_UNKNOWN_AIRPORT",
            AirtrackError::UnknownFlightNumber { .. } => "ERR_UNKNOWN_FLIGHT_NUMBER",
            AirtrackError::InvalidCredentials => "ERR_INVALID_CREDENTIALS",
        }
    }
}
