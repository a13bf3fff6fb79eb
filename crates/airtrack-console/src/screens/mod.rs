//! Console screens
//!
//! Each screen owns its argument types, table rendering, and handlers.
//! Handlers own boundary logging for the operations they run:
//! `log_op_start!` at entry, `log_op_end!` on success, `log_op_error!`
//! when validation rejects the input. The store and core layers below
//! log only `tracing::debug!` details.

pub mod airports;
pub mod bookings;
pub mod dashboard;
pub mod flights;
pub mod passengers;
pub mod reports;

use airtrack_core::errors::{AirtrackError, Result};
use airtrack_core::network::airports as catalog;

/// Listing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Resolve a 3-letter airport code to its record descriptor
///
/// Flight records store descriptors like "Nairobi (NBO)", while the
/// console takes bare codes as arguments.
pub(crate) fn resolve_airport(code: &str) -> Result<String> {
    catalog::find(code)
        .map(|airport| airport.descriptor())
        .ok_or_else(|| AirtrackError::UnknownAirport {
            code: code.trim().to_string(),
        })
}
