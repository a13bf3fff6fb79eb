//! Structured logging facility for AIRTRACK
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Boundary ownership: the console screens own operation lifecycle
//!   logging; store and query code emits only `tracing::debug!` detail
//!
//! # Usage
//!
//! ```rust
//! use airtrack_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Test);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - Log operation error

pub mod init;
pub mod macros;

pub use init::{init, Profile};
