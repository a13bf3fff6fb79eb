//! Static route network catalog
//!
//! Airports served, scheduled departure times per route, and base
//! fares per route. All data is compiled in; route lookups fall back
//! to the reverse direction and then to catalog-wide defaults, so
//! every airport pair resolves to something usable.

pub mod airports;
pub mod fares;
pub mod schedules;

pub use airports::{city_part, code_part, Airport, AIRPORTS};
pub use fares::{route_fares, FareTiers, DEFAULT_FARES};
pub use schedules::{departure_times, DEFAULT_TIMES};
