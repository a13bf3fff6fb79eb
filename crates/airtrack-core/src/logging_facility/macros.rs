//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use airtrack_core::log_op_start;
/// log_op_start!("add_flight");
/// log_op_start!("add_flight", flight_number = "KQ100");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = airtrack_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = airtrack_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use airtrack_core::log_op_end;
/// log_op_end!("add_flight", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = airtrack_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = airtrack_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use airtrack_core::log_op_error;
/// # use airtrack_core::errors::AirtrackError;
/// let err = AirtrackError::MissingField { field: "capacity" };
/// log_op_error!("add_flight", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::AirtrackError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = airtrack_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
            err_msg = %err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::errors::AirtrackError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = airtrack_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
            err_msg = %err,
            $($field)*
        );
    }};
}
